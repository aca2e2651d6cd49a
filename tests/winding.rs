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

use meshsect::{is_piecewise_constant_winding_number, piecewise_constant_winding_number, unique_edge_map};

const TETRAHEDRON: [[usize; 3]; 4] = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]];

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

#[test]
fn test_closed_meshes_are_constant() {
    assert!(is_piecewise_constant_winding_number(&TETRAHEDRON));
    assert!(is_piecewise_constant_winding_number(&CUBE_FACES));
}

#[test]
fn test_cube_edge_map() {
    let map = unique_edge_map(&CUBE_FACES);
    assert_eq!(map.edges.len(), 18);
    assert_eq!(map.emap.len(), 36);
    assert!(map.ue2e.iter().all(|halves| halves.len() == 2));
    for (u, &[lo, hi]) in map.edges.iter().enumerate() {
        assert!(lo < hi);
        for &e in &map.ue2e[u] {
            assert_eq!(map.emap[e], u);
        }
    }
    assert!(piecewise_constant_winding_number(&CUBE_FACES, &map));
}

#[test]
fn test_flipped_face_breaks_winding() {
    let mut faces = CUBE_FACES;
    faces[5] = [0, 4, 5];
    assert!(!is_piecewise_constant_winding_number(&faces));
}

#[test]
fn test_open_mesh_is_not_constant() {
    assert!(!is_piecewise_constant_winding_number(&CUBE_FACES[..11]));
}

#[test]
fn test_disjoint_closed_components() {
    let mut faces = TETRAHEDRON.to_vec();
    faces.extend(TETRAHEDRON.iter().map(|f| f.map(|v| v + 4)));
    assert!(is_piecewise_constant_winding_number(&faces));
}

#[test]
fn test_non_manifold_edge_can_balance() {
    // Two tetrahedra glued along the edge (0, 1).
    let mut faces = TETRAHEDRON.to_vec();
    faces.extend(TETRAHEDRON.iter().map(|f| f.map(|v| if v < 2 { v } else { v + 2 })));
    assert!(is_piecewise_constant_winding_number(&faces));
}
