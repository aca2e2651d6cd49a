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

use std::{array::from_fn, ops::Index};

use crate::numeric::scalar::{RefArith, Scalar};

#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Vector { coords }
    }

    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| c.is_zero())
    }
}

impl<T: Scalar, const N: usize> Vector<T, N>
where
    for<'a> &'a T: RefArith<T>,
{
    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + &self.coords[i] * &other.coords[i];
        }
        sum
    }

    pub fn scale(&self, s: &T) -> Self {
        Vector {
            coords: from_fn(|i| &self.coords[i] * s),
        }
    }
}

impl<T: Scalar> Vector<T, 3>
where
    for<'a> &'a T: RefArith<T>,
{
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = &self.coords;
        let [bx, by, bz] = &other.coords;
        Vector {
            coords: [
                &(ay * bz) - &(az * by),
                &(az * bx) - &(ax * bz),
                &(ax * by) - &(ay * bx),
            ],
        }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
