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

use meshsect::geometry::intersection::Intersection3;
use meshsect::geometry::point::Point3;
use meshsect::geometry::tri_tri_intersect::{
    intersect_segment_triangle, intersect_triangles, segment_triangle_do_intersect,
    triangle_triangle_do_intersect,
};
use meshsect::geometry::triangle::Triangle3;
use meshsect::kernel::{ExactKernel, FastKernel, Kernel};
use meshsect::numeric::ExactRational;

fn tri<K: Kernel>(v: [[f64; 3]; 3]) -> Triangle3<K::FT> {
    let [a, b, c] = v.map(|p| K::lift_point(&p));
    Triangle3::new(a, b, c)
}

fn point(v: [f64; 3]) -> Point3<ExactRational> {
    ExactKernel::lift_point(&v)
}

fn both_kernels(a: [[f64; 3]; 3], b: [[f64; 3]; 3]) -> bool {
    let fast = triangle_triangle_do_intersect::<FastKernel>(&tri::<FastKernel>(a), &tri::<FastKernel>(b));
    let exact = triangle_triangle_do_intersect::<ExactKernel>(&tri::<ExactKernel>(a), &tri::<ExactKernel>(b));
    assert_eq!(fast, exact);
    exact
}

const T1: [[f64; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

#[test]
fn test_triangles_overlap() {
    let t2 = [[0.1, 0.1, 0.0], [0.9, 0.1, 0.0], [0.1, 0.9, 0.0]];
    assert!(both_kernels(T1, t2));

    let t3 = [[2.0, 2.0, 0.0], [3.0, 2.0, 0.0], [2.0, 3.0, 0.0]];
    assert!(!both_kernels(T1, t3));
}

#[test]
fn test_touching_counts_as_intersecting() {
    // Shares the point (1, 0, 0) only.
    let t4 = [[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
    assert!(both_kernels(T1, t4));
    assert_eq!(
        intersect_triangles(&tri::<ExactKernel>(T1), &tri::<ExactKernel>(t4)),
        Intersection3::Point(point([1.0, 0.0, 0.0]))
    );
}

#[test]
fn test_parallel_planes_do_not_intersect() {
    let lifted = [[0.0, 0.0, 1e-300], [1.0, 0.0, 1e-300], [0.0, 1.0, 1e-300]];
    assert!(!both_kernels(T1, lifted));
}

#[test]
fn test_piercing_triangles_meet_in_exact_segment() {
    let a = [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]];
    let b = [[0.5, -1.0, -1.0], [0.5, -1.0, 1.0], [0.5, 3.0, 0.0]];
    assert!(both_kernels(a, b));

    match intersect_triangles(&tri::<ExactKernel>(a), &tri::<ExactKernel>(b)) {
        Intersection3::Segment(s) => {
            let ends = [s.a, s.b];
            assert!(ends.contains(&point([0.5, 0.0, 0.0])));
            assert!(ends.contains(&point([0.5, 1.5, 0.0])));
        }
        other => panic!("expected a segment, got {other:?}"),
    }
}

#[test]
fn test_coplanar_overlap_polygon() {
    let a = [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 4.0, 0.0]];
    // Overlaps `a` around (1, 1).
    let b = [[3.0, 3.0, 0.0], [-1.0, 1.0, 0.0], [1.0, -1.0, 0.0]];
    match intersect_triangles(&tri::<ExactKernel>(a), &tri::<ExactKernel>(b)) {
        Intersection3::Polygon(ps) => {
            assert!(ps.len() >= 3);
            for p in &ps {
                assert_eq!(p[2], ExactRational::from(0));
            }
        }
        other => panic!("expected a polygon, got {other:?}"),
    }
}

#[test]
fn test_segment_through_triangle() {
    let t = tri::<ExactKernel>(T1);
    let p = point([0.25, 0.25, -1.0]);
    let q = point([0.25, 0.25, 1.0]);
    assert!(segment_triangle_do_intersect::<ExactKernel>(&p, &q, &t));
    assert_eq!(
        intersect_segment_triangle(&p, &q, &t),
        Intersection3::Point(point([0.25, 0.25, 0.0]))
    );

    let r = point([2.0, 2.0, -1.0]);
    let s = point([2.0, 2.0, 1.0]);
    assert!(!segment_triangle_do_intersect::<ExactKernel>(&r, &s, &t));
    assert!(intersect_segment_triangle(&r, &s, &t).is_none());
}

#[test]
fn test_coplanar_segment_is_clipped() {
    let t = tri::<ExactKernel>(T1);
    let p = point([-1.0, 0.25, 0.0]);
    let q = point([2.0, 0.25, 0.0]);
    assert!(segment_triangle_do_intersect::<ExactKernel>(&p, &q, &t));
    match intersect_segment_triangle(&p, &q, &t) {
        Intersection3::Segment(s) => {
            let ends = [s.a, s.b];
            assert!(ends.contains(&point([0.0, 0.25, 0.0])));
            assert!(ends.contains(&point([0.75, 0.25, 0.0])));
        }
        other => panic!("expected a segment, got {other:?}"),
    }
}
