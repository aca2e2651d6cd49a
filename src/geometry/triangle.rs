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
    geometry::{point::Point3, vector::Vector3},
    kernel::Kernel,
    numeric::scalar::{RefArith, Scalar},
};

/// A triangle in space, vertices in face order.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle3<T: Scalar> {
    pub vertices: [Point3<T>; 3],
}

impl<T: Scalar> Triangle3<T> {
    pub fn new(a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Self {
        Triangle3 {
            vertices: [a, b, c],
        }
    }

    pub fn vertex(&self, i: usize) -> &Point3<T> {
        &self.vertices[i % 3]
    }

    /// Edge opposite corner `c`, directed `(c + 1) -> (c + 2)`.
    pub fn opposite_edge(&self, c: usize) -> (&Point3<T>, &Point3<T>) {
        (self.vertex(c + 1), self.vertex(c + 2))
    }

    /// Zero area, decided by the kernel's exact predicates.
    pub fn is_degenerate<K: Kernel<FT = T>>(&self) -> bool {
        let [a, b, c] = &self.vertices;
        K::collinear3(a, b, c)
    }
}

impl<T: Scalar> Triangle3<T>
where
    for<'a> &'a T: RefArith<T>,
{
    /// Counter-clockwise (unnormalized) normal.
    pub fn normal(&self) -> Vector3<T> {
        let [a, b, c] = &self.vertices;
        a.vector_to(b).cross(&a.vector_to(c))
    }
}
