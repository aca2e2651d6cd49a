// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::{
    geometry::point::{Point2, Point3},
    kernel::{kernel::Kernel, orientation},
    numeric::{coordinate::Coordinate, exact_rational::ExactRational, scalar::Scalar},
};

/// Arbitrary-precision rational kernel. Every predicate and construction is
/// exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactKernel;

impl Kernel for ExactKernel {
    type FT = ExactRational;
    const EXACT: bool = true;

    fn lift<C: Coordinate>(c: &C) -> ExactRational {
        c.to_exact()
    }

    fn orient3d(
        a: &Point3<ExactRational>,
        b: &Point3<ExactRational>,
        c: &Point3<ExactRational>,
        d: &Point3<ExactRational>,
    ) -> i8 {
        orientation::orient3d(a, b, c, d).sign()
    }

    fn orient2d(a: &Point2<ExactRational>, b: &Point2<ExactRational>, c: &Point2<ExactRational>) -> i8 {
        orientation::orient2d(a, b, c).sign()
    }
}
