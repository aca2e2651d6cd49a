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

use meshsect::{RemeshParams, intersect_other, is_piecewise_constant_winding_number, remesh_self_intersections};
use meshsect::mesh_processing::intersect_other::concatenate;

const CUBE_FACES: [[usize; 3]; 12] = [
    [0, 2, 1],
    [0, 3, 2],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [3, 7, 6],
    [3, 6, 2],
    [0, 4, 7],
    [0, 7, 3],
    [1, 2, 6],
    [1, 6, 5],
];

fn cube_vertices(offset: [f64; 3]) -> Vec<[f64; 3]> {
    let mut v = Vec::with_capacity(8);
    for &(x, y, z) in &[
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (1.0, 1.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 0.0, 1.0),
        (1.0, 1.0, 1.0),
        (0.0, 1.0, 1.0),
    ] {
        v.push([x + offset[0], y + offset[1], z + offset[2]]);
    }
    v
}

#[test]
fn test_overlapping_cubes_report_local_indices() {
    let va = cube_vertices([0.0; 3]);
    let vb = cube_vertices([0.5, 0.25, 0.375]);
    let result = intersect_other(&va, &CUBE_FACES, &vb, &CUBE_FACES, &RemeshParams::default()).unwrap();
    assert!(result.found);
    assert!(!result.intersecting_pairs.is_empty());
    for &[a, b] in &result.intersecting_pairs {
        assert!(a < 12 && b < 12);
    }

    let out = result.remeshed.unwrap();
    assert_eq!(&out.vertices[..16], &[va.clone(), vb].concat()[..]);
    assert_eq!(out.faces.len(), out.birth_faces.len());
    assert!(out.birth_faces.iter().all(|&f| f < 24));
}

#[test]
fn test_pairs_match_self_intersections_of_concatenation() {
    let va = cube_vertices([0.0; 3]);
    let vb = cube_vertices([0.5, 0.25, 0.375]);
    let detect = RemeshParams::default().with_detect_only(true);
    let cross = intersect_other(&va, &CUBE_FACES, &vb, &CUBE_FACES, &detect).unwrap();

    let (v, f) = concatenate(&va, &CUBE_FACES, &vb, &CUBE_FACES);
    let own = remesh_self_intersections(&v, &f, &detect).unwrap();
    let shifted: Vec<[usize; 2]> = cross.intersecting_pairs.iter().map(|&[a, b]| [a, b + 12]).collect();
    assert_eq!(shifted, own.intersecting_pairs);
}

#[test]
fn test_separated_cubes_are_concatenated() {
    let va = cube_vertices([0.0; 3]);
    let vb = cube_vertices([3.0, 0.0, 0.0]);
    let result = intersect_other(&va, &CUBE_FACES, &vb, &CUBE_FACES, &RemeshParams::default()).unwrap();
    assert!(!result.found);
    assert!(result.intersecting_pairs.is_empty());

    let (v, f) = concatenate(&va, &CUBE_FACES, &vb, &CUBE_FACES);
    let out = result.remeshed.unwrap();
    assert_eq!(out.vertices, v);
    assert_eq!(out.faces, f);
    assert_eq!(out.birth_faces, (0..24).collect::<Vec<_>>());
    assert_eq!(out.stitch_index, (0..16).collect::<Vec<_>>());
}

#[test]
fn test_first_hit_between_meshes() {
    let va = cube_vertices([0.0; 3]);
    let vb = cube_vertices([0.5, 0.25, 0.375]);
    let hit = intersect_other(&va, &CUBE_FACES, &vb, &CUBE_FACES, &RemeshParams::first_hit()).unwrap();
    assert!(hit.found);
    assert_eq!(hit.intersecting_pairs.len(), 1);
    assert!(hit.remeshed.is_none());

    let far = cube_vertices([0.0, 0.0, 2.5]);
    let miss = intersect_other(&va, &CUBE_FACES, &far, &CUBE_FACES, &RemeshParams::first_hit()).unwrap();
    assert!(!miss.found);
}

#[test]
fn test_stitched_union_is_closed() {
    let va = cube_vertices([0.0; 3]);
    let vb = cube_vertices([0.5, 0.25, 0.375]);
    let params = RemeshParams::default().with_stitch_all(true);
    let out = intersect_other(&va, &CUBE_FACES, &vb, &CUBE_FACES, &params)
        .unwrap()
        .remeshed
        .unwrap();
    assert!(is_piecewise_constant_winding_number(&out.faces));
}
