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

use std::collections::BTreeMap;

/// Undirected edges of a triangle mesh and their incident half-edges.
///
/// Half-edge `e = c * m + f` (with `m` faces) is the edge of face `f`
/// opposite corner `c`, directed `F[f][(c + 1) % 3] -> F[f][(c + 2) % 3]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueEdgeMap {
    /// Unique undirected edges, `[min, max]`, sorted.
    pub edges: Vec<[usize; 2]>,
    /// Half-edge to unique edge.
    pub emap: Vec<usize>,
    /// Unique edge to its half-edges, ascending.
    pub ue2e: Vec<Vec<usize>>,
}

impl UniqueEdgeMap {
    pub fn face_count(&self) -> usize {
        self.emap.len() / 3
    }
}

/// Directed endpoints of half-edge `e` of a mesh with `faces.len()` faces.
pub fn half_edge(faces: &[[usize; 3]], e: usize) -> (usize, usize) {
    let m = faces.len();
    let (c, f) = (e / m, e % m);
    (faces[f][(c + 1) % 3], faces[f][(c + 2) % 3])
}

pub fn unique_edge_map(faces: &[[usize; 3]]) -> UniqueEdgeMap {
    let m = faces.len();
    let mut by_key: BTreeMap<(usize, usize), Vec<usize>> = BTreeMap::new();
    for e in 0..3 * m {
        let (s, d) = half_edge(faces, e);
        by_key.entry((s.min(d), s.max(d))).or_default().push(e);
    }

    let mut edges = Vec::with_capacity(by_key.len());
    let mut emap = vec![0; 3 * m];
    let mut ue2e = Vec::with_capacity(by_key.len());
    for (u, ((a, b), halves)) in by_key.into_iter().enumerate() {
        for &e in &halves {
            emap[e] = u;
        }
        edges.push([a, b]);
        ue2e.push(halves);
    }

    UniqueEdgeMap { edges, emap, ue2e }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_triangles_share_one_edge() {
        let faces = [[0, 1, 2], [2, 1, 3]];
        let map = unique_edge_map(&faces);
        assert_eq!(map.edges.len(), 5);
        let shared = map.edges.iter().position(|&e| e == [1, 2]).unwrap();
        assert_eq!(map.ue2e[shared].len(), 2);
        for (e, &u) in map.emap.iter().enumerate() {
            assert!(map.ue2e[u].contains(&e));
        }
    }
}
