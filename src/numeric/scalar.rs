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
    fmt::Debug,
    hash::Hash,
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::{
    numeric::exact_rational::ExactRational,
    operations::{Abs, One, Zero},
};

/// Number type a kernel computes with.
///
/// Equality and hashing are exact, with both float zeros equal, so points
/// can be used as keys when deduplicating constructed vertices.
pub trait Scalar:
    Clone
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Abs
    + Zero
    + One
    + Eq
    + PartialEq
    + Hash
    + PartialOrd
    + From<i32>
    + From<f64>
{
    /// Returns -1, 0, or +1.
    fn sign(&self) -> i8 {
        if self.is_positive() {
            1
        } else if self.is_negative() {
            -1
        } else {
            0
        }
    }

    /// Exact rational value of this number.
    fn to_exact(&self) -> ExactRational;

    /// An f64 interval guaranteed to contain the value.
    fn to_interval(&self) -> (f64, f64);

    fn from_num_den(num: i32, den: i32) -> Self {
        Self::from(num) / Self::from(den)
    }
}

/// Arithmetic on references, so generic code can write `&a - &b` without
/// cloning. Use as `for<'a> &'a T: RefArith<T>`.
pub trait RefArith<T>:
    Sized + Add<Self, Output = T> + Sub<Self, Output = T> + Mul<Self, Output = T> + Div<Self, Output = T>
{
}

impl<'a, T: 'a> RefArith<T> for &'a T where
    &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>
{
}
