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

use num_traits::ToPrimitive;
use rug::Rational;

use crate::{
    geometry::util::{f64_next_down, f64_next_up},
    numeric::{approx_f64::ApproxF64, exact_rational::ExactRational},
    operations::Abs,
};

/// How constructed exact coordinates are converted back to the caller's
/// coordinate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Single library conversion.
    #[default]
    Default,
    /// Nearest representable value, decided by exact comparison against the
    /// neighbouring candidates. Slower.
    Precise,
}

/// A coordinate type meshes can be handed in (and returned) as.
pub trait Coordinate: Clone + Debug + Send + Sync {
    /// Whether values of this type are already exact rationals. Detection on
    /// exact input runs on the exact kernel.
    const EXACT: bool;

    fn is_finite(&self) -> bool;
    fn to_exact(&self) -> ExactRational;
    fn to_approx(&self) -> ApproxF64;

    /// Round an exact value into this type. This is the last step of every
    /// construction.
    fn from_exact(value: &ExactRational, rounding: Rounding) -> Self;
}

impl Coordinate for f64 {
    const EXACT: bool = false;

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn to_exact(&self) -> ExactRational {
        ExactRational::from(*self)
    }

    fn to_approx(&self) -> ApproxF64 {
        ApproxF64(*self)
    }

    fn from_exact(value: &ExactRational, rounding: Rounding) -> Self {
        let approx = value.to_f64().unwrap_or(0.0);
        match rounding {
            Rounding::Default => approx,
            Rounding::Precise => nearest_f64(&value.0, approx),
        }
    }
}

impl Coordinate for ExactRational {
    const EXACT: bool = true;

    fn is_finite(&self) -> bool {
        true
    }

    fn to_exact(&self) -> ExactRational {
        self.clone()
    }

    fn to_approx(&self) -> ApproxF64 {
        ApproxF64(self.0.to_f64())
    }

    fn from_exact(value: &ExactRational, _rounding: Rounding) -> Self {
        value.clone()
    }
}

/// Pick the f64 closest to `exact` among `approx` and its two neighbours.
/// Ties go to the even significand.
fn nearest_f64(exact: &Rational, approx: f64) -> f64 {
    let candidates = [f64_next_down(approx), approx, f64_next_up(approx)];

    let mut best = approx;
    let mut best_err: Option<Rational> = None;
    for candidate in candidates {
        let Some(c) = Rational::from_f64(candidate) else {
            continue;
        };
        let err = ExactRational(c - exact).abs().0;
        let better = match &best_err {
            None => true,
            Some(e) => err < *e || (err == *e && candidate.to_bits() & 1 == 0),
        };
        if better {
            best = candidate;
            best_err = Some(err);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precise_rounding_picks_nearest_neighbour() {
        // 1/3 is not representable; both modes must land within one ulp and
        // the precise one on the nearest value.
        let third = ExactRational(Rational::from((1, 3)));
        let d = f64::from_exact(&third, Rounding::Precise);
        let err = |x: f64| {
            ExactRational(Rational::from_f64(x).unwrap() - &third.0)
                .abs()
                .0
        };
        assert!(err(d) <= err(f64_next_up(d)));
        assert!(err(d) <= err(f64_next_down(d)));
    }

    #[test]
    fn representable_values_round_trip() {
        let v = ExactRational::from(0.1f64);
        assert_eq!(f64::from_exact(&v, Rounding::Default), 0.1);
        assert_eq!(f64::from_exact(&v, Rounding::Precise), 0.1);
    }
}
