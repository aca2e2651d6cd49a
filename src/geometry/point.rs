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

use std::{
    array::from_fn,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
};

use crate::{
    geometry::vector::Vector,
    numeric::scalar::{RefArith, Scalar},
};

#[derive(Clone, Debug)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Point { coords }
    }

    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Point {
            coords: vals.map(|v| v.into()),
        }
    }

    pub fn coords(&self) -> &[T; N] {
        &self.coords
    }

    pub fn as_vector(&self) -> Vector<T, N> {
        Vector::new(self.coords.clone())
    }
}

impl<T: Scalar, const N: usize> Point<T, N>
where
    for<'a> &'a T: RefArith<T>,
{
    /// `other - self`.
    pub fn vector_to(&self, other: &Self) -> Vector<T, N> {
        Vector::new(from_fn(|i| &other.coords[i] - &self.coords[i]))
    }

    /// Point at parameter `t` on the segment `self -> other`.
    pub fn lerp(&self, other: &Self, t: &T) -> Self {
        Point {
            coords: from_fn(|i| {
                let d = &other.coords[i] - &self.coords[i];
                &self.coords[i] + &(&d * t)
            }),
        }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

impl<T: Scalar, const N: usize> Hash for Point<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for coord in &self.coords {
            coord.hash(state);
        }
    }
}

impl<T: Scalar, const N: usize> PartialEq for Point<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl<T: Scalar, const N: usize> Eq for Point<T, N> {}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;
