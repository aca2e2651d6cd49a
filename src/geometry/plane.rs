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
    geometry::{
        point::{Point2, Point3},
        triangle::Triangle3,
    },
    kernel::Kernel,
    numeric::scalar::Scalar,
};

/// Axis-aligned projection dropping one coordinate. The remaining two are
/// taken cyclically, `(drop + 1, drop + 2)`, so the projected orientation of a
/// triangle has the sign of its normal's `drop` component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionPlane {
    drop: usize,
}

impl ProjectionPlane {
    pub fn new(drop: usize) -> Self {
        ProjectionPlane { drop: drop % 3 }
    }

    pub fn axes(&self) -> (usize, usize) {
        ((self.drop + 1) % 3, (self.drop + 2) % 3)
    }

    pub fn project<T: Scalar>(&self, p: &Point3<T>) -> Point2<T> {
        let (i, j) = self.axes();
        Point2::new([p[i].clone(), p[j].clone()])
    }

    /// Orientation of the projected triangle.
    pub fn orient<K: Kernel>(&self, t: &Triangle3<K::FT>) -> i8 {
        let [a, b, c] = &t.vertices;
        K::orient2d(&self.project(a), &self.project(b), &self.project(c))
    }

    /// First plane, in the order z, x, y, onto which `t` projects with
    /// nonzero area. `None` for a degenerate triangle.
    pub fn of_triangle<K: Kernel>(t: &Triangle3<K::FT>) -> Option<Self> {
        [2usize, 0, 1]
            .into_iter()
            .map(ProjectionPlane::new)
            .find(|plane| plane.orient::<K>(t) != 0)
    }
}
