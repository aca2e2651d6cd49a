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

use num_traits::ToPrimitive;
use rug::Rational;

use crate::{
    numeric::{exact_rational::ExactRational, scalar::Scalar},
    operations::{Abs, One, Zero},
};

use std::{
    cmp::Ordering,
    hash::Hash,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Plain double precision. Arithmetic rounds; comparisons and signs are the
/// raw IEEE ones, without tolerance. Values are assumed finite, so equality
/// is an equivalence.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxF64(pub f64);

macro_rules! impl_f64_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<'a, 'b> $trait<&'b ApproxF64> for &'a ApproxF64 {
            type Output = ApproxF64;

            fn $method(self, rhs: &'b ApproxF64) -> ApproxF64 {
                ApproxF64(self.0 $op rhs.0)
            }
        }

        impl $trait for ApproxF64 {
            type Output = ApproxF64;

            fn $method(self, rhs: ApproxF64) -> ApproxF64 {
                ApproxF64(self.0 $op rhs.0)
            }
        }
    };
}

impl_f64_binop!(Add, add, +);
impl_f64_binop!(Sub, sub, -);
impl_f64_binop!(Mul, mul, *);
impl_f64_binop!(Div, div, /);

impl Neg for ApproxF64 {
    type Output = ApproxF64;

    fn neg(self) -> ApproxF64 {
        ApproxF64(-self.0)
    }
}

impl<'a> Neg for &'a ApproxF64 {
    type Output = ApproxF64;

    fn neg(self) -> ApproxF64 {
        ApproxF64(-self.0)
    }
}

impl PartialEq for ApproxF64 {
    fn eq(&self, other: &ApproxF64) -> bool {
        self.0 == other.0
    }
}

impl Eq for ApproxF64 {}

impl PartialOrd for ApproxF64 {
    fn partial_cmp(&self, other: &ApproxF64) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Hash for ApproxF64 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0, so both must hash alike.
        let bits = if self.0 == 0.0 { 0 } else { self.0.to_bits() };
        bits.hash(state);
    }
}

impl Zero for ApproxF64 {
    fn zero() -> Self {
        ApproxF64(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

impl One for ApproxF64 {
    fn one() -> Self {
        ApproxF64(1.0)
    }
}

impl Abs for ApproxF64 {
    fn abs(&self) -> Self {
        ApproxF64(self.0.abs())
    }
}

impl From<i32> for ApproxF64 {
    fn from(value: i32) -> Self {
        ApproxF64(value as f64)
    }
}

impl From<f64> for ApproxF64 {
    fn from(value: f64) -> Self {
        ApproxF64(value)
    }
}

impl From<ApproxF64> for f64 {
    fn from(value: ApproxF64) -> Self {
        value.0
    }
}

impl Scalar for ApproxF64 {
    fn to_exact(&self) -> ExactRational {
        ExactRational(Rational::from_f64(self.0).unwrap_or_default())
    }

    fn to_interval(&self) -> (f64, f64) {
        (self.0, self.0)
    }

    fn from_num_den(num: i32, den: i32) -> Self {
        ApproxF64(num as f64 / den as f64)
    }
}

impl ToPrimitive for ApproxF64 {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{DefaultHasher, Hasher};

    fn hash_of(x: ApproxF64) -> u64 {
        let mut h = DefaultHasher::new();
        x.hash(&mut h);
        h.finish()
    }

    #[test]
    fn signed_zeros_are_equal() {
        assert_eq!(ApproxF64(-0.0), ApproxF64(0.0));
        assert_eq!(hash_of(ApproxF64(-0.0)), hash_of(ApproxF64(0.0)));
        assert_ne!(ApproxF64(1.0), ApproxF64(-1.0));
    }
}
