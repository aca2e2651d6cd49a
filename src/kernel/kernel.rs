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

use std::fmt::Debug;

use crate::{
    geometry::point::{Point2, Point3},
    numeric::{coordinate::Coordinate, scalar::Scalar},
};

/// The numeric policy geometry runs under: which number type points are
/// lifted into and how orientation signs are decided.
///
/// Predicates return exact signs (-1, 0, +1) under every kernel; only
/// constructions carried out in `FT` may be inexact.
pub trait Kernel: Debug + Send + Sync + 'static {
    type FT: Scalar;

    /// Whether constructions in `FT` are exact.
    const EXACT: bool;

    fn lift<C: Coordinate>(c: &C) -> Self::FT;

    fn lift_point<C: Coordinate>(p: &[C; 3]) -> Point3<Self::FT> {
        Point3::new([Self::lift(&p[0]), Self::lift(&p[1]), Self::lift(&p[2])])
    }

    /// Sign of `((b - a) x (c - a)) . (d - a)`.
    fn orient3d(
        a: &Point3<Self::FT>,
        b: &Point3<Self::FT>,
        c: &Point3<Self::FT>,
        d: &Point3<Self::FT>,
    ) -> i8;

    /// Sign of `(b - a) x (c - a)`.
    fn orient2d(a: &Point2<Self::FT>, b: &Point2<Self::FT>, c: &Point2<Self::FT>) -> i8;

    /// Whether the three points are collinear (including coincident points).
    fn collinear3(a: &Point3<Self::FT>, b: &Point3<Self::FT>, c: &Point3<Self::FT>) -> bool {
        [0usize, 1, 2].iter().all(|&drop| {
            let (i, j) = ((drop + 1) % 3, (drop + 2) % 3);
            let pa = Point2::new([a[i].clone(), a[j].clone()]);
            let pb = Point2::new([b[i].clone(), b[j].clone()]);
            let pc = Point2::new([c[i].clone(), c[j].clone()]);
            Self::orient2d(&pa, &pb, &pc) == 0
        })
    }
}
