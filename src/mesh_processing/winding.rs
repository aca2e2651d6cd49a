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

use crate::mesh::unique_edges::{UniqueEdgeMap, half_edge, unique_edge_map};

/// Whether the mesh induces a piecewise-constant winding number: every
/// undirected edge is traversed as often in one direction as in the other.
///
/// Purely combinatorial; meaningful only for intersection-free meshes.
/// `map` must have been built from `faces`.
pub fn piecewise_constant_winding_number(faces: &[[usize; 3]], map: &UniqueEdgeMap) -> bool {
    map.ue2e.iter().zip(&map.edges).all(|(halves, &[lo, _])| {
        let balance: isize = halves
            .iter()
            .map(|&e| if half_edge(faces, e).0 == lo { 1 } else { -1 })
            .sum();
        balance == 0
    })
}

pub fn is_piecewise_constant_winding_number(faces: &[[usize; 3]]) -> bool {
    piecewise_constant_winding_number(faces, &unique_edge_map(faces))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_triangle_is_open() {
        assert!(!is_piecewise_constant_winding_number(&[[0, 1, 2]]));
    }

    #[test]
    fn doubled_triangle_cancels() {
        assert!(is_piecewise_constant_winding_number(&[[0, 1, 2], [0, 2, 1]]));
    }

    #[test]
    fn empty_mesh_is_trivially_constant() {
        assert!(is_piecewise_constant_winding_number(&[]));
    }
}
