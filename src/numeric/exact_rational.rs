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
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_traits::ToPrimitive;
use rug::Rational;

use crate::{
    geometry::util::{f64_next_down, f64_next_up},
    numeric::scalar::Scalar,
    operations::{Abs, One, Zero},
};

/// Arbitrary-precision rational backed by GMP. Every predicate and
/// construction on it is exact.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactRational(pub Rational);

macro_rules! impl_rational_binop {
    ($trait:ident, $method:ident, $assign:tt) => {
        impl<'a, 'b> $trait<&'b ExactRational> for &'a ExactRational {
            type Output = ExactRational;

            fn $method(self, rhs: &'b ExactRational) -> ExactRational {
                let mut result = self.0.clone();
                result $assign &rhs.0;
                ExactRational(result)
            }
        }

        impl $trait for ExactRational {
            type Output = ExactRational;

            fn $method(mut self, rhs: ExactRational) -> ExactRational {
                self.0 $assign &rhs.0;
                self
            }
        }
    };
}

impl_rational_binop!(Add, add, +=);
impl_rational_binop!(Sub, sub, -=);
impl_rational_binop!(Mul, mul, *=);
impl_rational_binop!(Div, div, /=);

impl Neg for ExactRational {
    type Output = ExactRational;

    fn neg(self) -> ExactRational {
        ExactRational(-self.0)
    }
}

impl<'a> Neg for &'a ExactRational {
    type Output = ExactRational;

    fn neg(self) -> ExactRational {
        ExactRational(-self.0.clone())
    }
}

impl Zero for ExactRational {
    fn zero() -> Self {
        ExactRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }

    fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }
}

impl One for ExactRational {
    fn one() -> Self {
        ExactRational(Rational::from(1))
    }
}

impl Abs for ExactRational {
    fn abs(&self) -> Self {
        ExactRational(self.0.clone().abs())
    }
}

impl From<i32> for ExactRational {
    fn from(value: i32) -> Self {
        ExactRational(Rational::from(value))
    }
}

/// Non-finite values have no rational counterpart and map to zero; inputs are
/// validated before they reach this conversion.
impl From<f64> for ExactRational {
    fn from(value: f64) -> Self {
        ExactRational(Rational::from_f64(value).unwrap_or_default())
    }
}

impl From<Rational> for ExactRational {
    fn from(value: Rational) -> Self {
        ExactRational(value)
    }
}

impl Scalar for ExactRational {
    fn sign(&self) -> i8 {
        match self.0.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    fn to_exact(&self) -> ExactRational {
        self.clone()
    }

    fn to_interval(&self) -> (f64, f64) {
        let d = self.0.to_f64();
        if Rational::from_f64(d).as_ref() == Some(&self.0) {
            (d, d)
        } else {
            (f64_next_down(d), f64_next_up(d))
        }
    }

    fn from_num_den(num: i32, den: i32) -> Self {
        ExactRational(Rational::from((num, den)))
    }
}

impl ToPrimitive for ExactRational {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_f64().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_f64().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}
