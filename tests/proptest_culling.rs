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

//! Property tests: culling completeness, cutoff invariance and agreement
//! with the brute-force exact pair test.

use std::collections::BTreeSet;
use std::ops::ControlFlow;

use meshsect::geometry::aabb::Aabb;
use meshsect::geometry::box_intersection::{box_intersection, box_self_intersection};
use meshsect::geometry::tri_tri_intersect::triangle_triangle_do_intersect;
use meshsect::geometry::triangle::Triangle3;
use meshsect::{ExactKernel, ExactRational, Kernel, RemeshParams, remesh_self_intersections};
use proptest::prelude::*;

fn arb_box() -> impl Strategy<Value = Option<Aabb>> {
    let extent = (prop::array::uniform3(-10.0..10.0f64), prop::array::uniform3(0.0..4.0f64))
        .prop_map(|(min, size)| Some(Aabb::new(min, std::array::from_fn(|k| min[k] + size[k]))));
    prop_oneof![9 => extent, 1 => Just(None)]
}

fn arb_soup() -> impl Strategy<Value = (Vec<[f64; 3]>, Vec<[usize; 3]>)> {
    // Small integer grid so that touching and coplanar cases are common.
    let vertex = prop::array::uniform3((-3i32..3).prop_map(f64::from));
    prop::collection::vec(vertex, 3..10).prop_flat_map(|vertices| {
        let n = vertices.len();
        let faces = prop::collection::vec(prop::array::uniform3(0..n), 1..10);
        (Just(vertices), faces)
    })
}

/// Triangles with their own vertices; shared corners only arise
/// geometrically, including 0.0 against -0.0.
fn arb_separate_soup() -> impl Strategy<Value = (Vec<[f64; 3]>, Vec<[usize; 3]>)> {
    let coord = prop_oneof![Just(-0.0), Just(0.0), (-2i32..3).prop_map(f64::from)];
    let vertex = prop::array::uniform3(coord);
    prop::collection::vec(prop::array::uniform3(vertex), 2..8).prop_map(|tris| {
        let faces = (0..tris.len()).map(|i| [3 * i, 3 * i + 1, 3 * i + 2]).collect();
        (tris.into_iter().flatten().collect(), faces)
    })
}

fn brute_pairs(a: &[Option<Aabb>], b: &[Option<Aabb>], skip_lower: bool) -> BTreeSet<(usize, usize)> {
    let mut out = BTreeSet::new();
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            if skip_lower && j <= i {
                continue;
            }
            if let (Some(x), Some(y)) = (x, y) {
                if x.intersects(y) {
                    out.insert((i, j));
                }
            }
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proptest_self_culling_is_complete(
        boxes in prop::collection::vec(arb_box(), 0..60),
        cutoff in 1usize..8,
    ) {
        let mut found = BTreeSet::new();
        let _ = box_self_intersection(&boxes, cutoff, |i, j| {
            found.insert((i.min(j), i.max(j)));
            ControlFlow::Continue(())
        });
        prop_assert_eq!(found, brute_pairs(&boxes, &boxes, true));
    }

    #[test]
    fn proptest_cross_culling_is_complete(
        a in prop::collection::vec(arb_box(), 0..40),
        b in prop::collection::vec(arb_box(), 0..40),
        cutoff in 1usize..8,
    ) {
        let mut found = BTreeSet::new();
        let _ = box_intersection(&a, &b, cutoff, |i, j| {
            found.insert((i, j));
            ControlFlow::Continue(())
        });
        prop_assert_eq!(found, brute_pairs(&a, &b, false));
    }

    #[test]
    fn proptest_pairs_ignore_cutoff_and_kernel(
        (vertices, faces) in arb_soup(),
        cutoff in 1usize..8,
    ) {
        let detect = RemeshParams::default().with_detect_only(true);
        let reference = remesh_self_intersections(&vertices, &faces, &detect).unwrap().intersecting_pairs;

        let small = remesh_self_intersections(&vertices, &faces, &detect.with_cutoff(cutoff)).unwrap();
        prop_assert_eq!(&small.intersecting_pairs, &reference);

        let exact: Vec<[ExactRational; 3]> = vertices.iter().map(|v| v.map(ExactRational::from)).collect();
        let exact_pairs = remesh_self_intersections(&exact, &faces, &detect).unwrap().intersecting_pairs;
        prop_assert_eq!(&exact_pairs, &reference);

        let first = remesh_self_intersections(&vertices, &faces, &RemeshParams::first_hit()).unwrap();
        prop_assert_eq!(first.intersecting_pairs.is_empty(), reference.is_empty());
    }

    #[test]
    fn proptest_pairs_match_exact_triangle_test((vertices, faces) in arb_separate_soup()) {
        let detect = RemeshParams::default().with_detect_only(true);
        let reported = remesh_self_intersections(&vertices, &faces, &detect).unwrap().intersecting_pairs;
        let constructed = remesh_self_intersections(&vertices, &faces, &RemeshParams::default()).unwrap();
        prop_assert_eq!(&constructed.intersecting_pairs, &reported);

        let triangles: Vec<Triangle3<ExactRational>> = faces
            .iter()
            .map(|f| {
                let [a, b, c] = f.map(|i| ExactKernel::lift_point(&vertices[i]));
                Triangle3::new(a, b, c)
            })
            .collect();
        for i in 0..faces.len() {
            for j in i + 1..faces.len() {
                let is_reported = reported.contains(&[i, j]);
                if triangles[i].is_degenerate::<ExactKernel>() || triangles[j].is_degenerate::<ExactKernel>() {
                    prop_assert!(!is_reported, "degenerate pair ({}, {}) reported", i, j);
                    continue;
                }
                let touching = triangle_triangle_do_intersect::<ExactKernel>(&triangles[i], &triangles[j]);
                let shares_corner = faces[i]
                    .iter()
                    .any(|&u| faces[j].iter().any(|&v| vertices[u] == vertices[v]));
                if shares_corner {
                    prop_assert!(!is_reported || touching, "pair ({}, {}) reported but apart", i, j);
                } else {
                    prop_assert_eq!(is_reported, touching, "pair ({}, {})", i, j);
                }
            }
        }
    }
}
