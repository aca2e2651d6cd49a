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
    kernel::{exact_kernel::ExactKernel, kernel::Kernel},
    numeric::{approx_f64::ApproxF64, coordinate::Coordinate, exact_rational::ExactRational},
};

/// Half an ulp of 1.0.
const EPS: f64 = f64::EPSILON * 0.5;
const O2D_ERR_BOUND: f64 = (3.0 + 16.0 * EPS) * EPS;
const O3D_ERR_BOUND: f64 = (7.0 + 56.0 * EPS) * EPS;

/// Double-precision kernel with filtered predicates.
///
/// Orientation signs are first evaluated in f64 and accepted when the
/// determinant clears a static forward error bound; otherwise they are
/// recomputed with exact rationals. Constructions in `ApproxF64` round.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastKernel;

fn exact3(p: &Point3<ApproxF64>) -> Point3<ExactRational> {
    Point3::new(p.coords.map(|c| ExactRational::from(c.0)))
}

fn exact2(p: &Point2<ApproxF64>) -> Point2<ExactRational> {
    Point2::new(p.coords.map(|c| ExactRational::from(c.0)))
}

fn sign_of(det: f64) -> i8 {
    if det > 0.0 {
        1
    } else if det < 0.0 {
        -1
    } else {
        0
    }
}

impl Kernel for FastKernel {
    type FT = ApproxF64;
    const EXACT: bool = false;

    fn lift<C: Coordinate>(c: &C) -> ApproxF64 {
        c.to_approx()
    }

    fn orient3d(
        a: &Point3<ApproxF64>,
        b: &Point3<ApproxF64>,
        c: &Point3<ApproxF64>,
        d: &Point3<ApproxF64>,
    ) -> i8 {
        let [bx, by, bz] = std::array::from_fn(|i| b[i].0 - a[i].0);
        let [cx, cy, cz] = std::array::from_fn(|i| c[i].0 - a[i].0);
        let [dx, dy, dz] = std::array::from_fn(|i| d[i].0 - a[i].0);

        let (cydz, czdy) = (cy * dz, cz * dy);
        let (czdx, cxdz) = (cz * dx, cx * dz);
        let (cxdy, cydx) = (cx * dy, cy * dx);

        let det = bx * (cydz - czdy) + by * (czdx - cxdz) + bz * (cxdy - cydx);
        let permanent = bx.abs() * (cydz.abs() + czdy.abs())
            + by.abs() * (czdx.abs() + cxdz.abs())
            + bz.abs() * (cxdy.abs() + cydx.abs());
        let bound = O3D_ERR_BOUND * permanent;

        if det.is_finite() && bound.is_finite() && (det > bound || -det > bound) {
            return sign_of(det);
        }
        ExactKernel::orient3d(&exact3(a), &exact3(b), &exact3(c), &exact3(d))
    }

    fn orient2d(a: &Point2<ApproxF64>, b: &Point2<ApproxF64>, c: &Point2<ApproxF64>) -> i8 {
        let left = (b[0].0 - a[0].0) * (c[1].0 - a[1].0);
        let right = (b[1].0 - a[1].0) * (c[0].0 - a[0].0);
        let det = left - right;
        let bound = O2D_ERR_BOUND * (left.abs() + right.abs());

        if det.is_finite() && bound.is_finite() && (det > bound || -det > bound) {
            return sign_of(det);
        }
        ExactKernel::orient2d(&exact2(a), &exact2(b), &exact2(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p2(x: f64, y: f64) -> Point2<ApproxF64> {
        Point2::from_vals([x, y])
    }

    #[test]
    fn near_degenerate_orientation_falls_back_to_exact() {
        // c lies exactly on the line through a and b.
        let a = p2(0.5, 0.5);
        let b = p2(12.0, 12.0);
        let c = p2(24.0, 24.0);
        assert_eq!(FastKernel::orient2d(&a, &b, &c), 0);

        let d = p2(0.5 + f64::EPSILON, 0.5);
        assert_eq!(
            FastKernel::orient2d(&d, &b, &c),
            ExactKernel::orient2d(&exact2(&d), &exact2(&b), &exact2(&c))
        );
    }
}
