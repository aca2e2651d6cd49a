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

use meshsect::geometry::point::{Point2, Point3};
use meshsect::kernel::{ExactKernel, FastKernel, Kernel};
use meshsect::numeric::{ApproxF64, Coordinate, ExactRational, Rounding, Scalar};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn fast2(x: f64, y: f64) -> Point2<ApproxF64> {
    Point2::from_vals([x, y])
}

fn exact2(x: f64, y: f64) -> Point2<ExactRational> {
    Point2::from_vals([x, y])
}

#[test]
fn test_orient2d_signs() {
    assert_eq!(FastKernel::orient2d(&fast2(0.0, 0.0), &fast2(1.0, 0.0), &fast2(0.0, 1.0)), 1);
    assert_eq!(FastKernel::orient2d(&fast2(0.0, 0.0), &fast2(0.0, 1.0), &fast2(1.0, 0.0)), -1);
    assert_eq!(ExactKernel::orient2d(&exact2(0.0, 0.0), &exact2(1.0, 1.0), &exact2(2.0, 2.0)), 0);
}

#[test]
fn test_filtered_orient2d_matches_exact_near_degeneracy() {
    let ulp = f64::EPSILON;
    for i in 0..16 {
        for j in 0..16 {
            let (x, y) = (0.5 + i as f64 * ulp, 0.5 + j as f64 * ulp);
            let fast = FastKernel::orient2d(&fast2(x, y), &fast2(12.0, 12.0), &fast2(24.0, 24.0));
            let exact = ExactKernel::orient2d(&exact2(x, y), &exact2(12.0, 12.0), &exact2(24.0, 24.0));
            assert_eq!(fast, exact, "i={i} j={j}");
        }
    }
}

#[test]
fn test_filtered_orient3d_matches_exact_on_random_input() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let pts: Vec<[f64; 3]> = (0..4)
            .map(|_| std::array::from_fn(|_| rng.random_range(-1.0..1.0)))
            .collect();
        let fast: Vec<Point3<ApproxF64>> = pts.iter().map(FastKernel::lift_point).collect();
        let exact: Vec<Point3<ExactRational>> = pts.iter().map(ExactKernel::lift_point).collect();
        assert_eq!(
            FastKernel::orient3d(&fast[0], &fast[1], &fast[2], &fast[3]),
            ExactKernel::orient3d(&exact[0], &exact[1], &exact[2], &exact[3])
        );
    }
}

#[test]
fn test_orient3d_coplanar_points() {
    let pts = [[0.1, 0.2, 0.0], [3.5, 0.7, 0.0], [0.3, 9.1, 0.0], [2.2, 2.2, 0.0]];
    let fast: Vec<Point3<ApproxF64>> = pts.iter().map(FastKernel::lift_point).collect();
    assert_eq!(FastKernel::orient3d(&fast[0], &fast[1], &fast[2], &fast[3]), 0);
}

#[test]
fn test_collinear3() {
    let a = ExactKernel::lift_point(&[0.0, 0.0, 0.0]);
    let b = ExactKernel::lift_point(&[1.0, 2.0, 3.0]);
    let c = ExactKernel::lift_point(&[2.0, 4.0, 6.0]);
    let d = ExactKernel::lift_point(&[2.0, 4.0, 6.5]);
    assert!(ExactKernel::collinear3(&a, &b, &c));
    assert!(!ExactKernel::collinear3(&a, &b, &d));
}

#[test]
fn test_precise_rounding_of_thirds() {
    let third = ExactRational::from_num_den(1, 3);
    assert_eq!(f64::from_exact(&third, Rounding::Precise), 1.0 / 3.0);
    let two_thirds = ExactRational::from_num_den(-2, 3);
    assert_eq!(f64::from_exact(&two_thirds, Rounding::Precise), -2.0 / 3.0);
}

#[test]
fn test_exact_coordinates_are_kept_exact() {
    let third = ExactRational::from_num_den(1, 3);
    assert_eq!(ExactRational::from_exact(&third, Rounding::Default), third);
    assert!(ExactRational::EXACT);
    assert!(!<f64 as Coordinate>::EXACT);
}
