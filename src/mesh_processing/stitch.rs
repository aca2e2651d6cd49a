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
    error::{MeshError, MeshResult},
    mesh::triangle_list::validate_faces,
};

/// A mesh after applying a stitch index.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchedMesh<V> {
    pub vertices: Vec<V>,
    pub faces: Vec<[usize; 3]>,
    /// New index of every old vertex; `None` when it was dropped.
    pub vertex_map: Vec<Option<usize>>,
}

/// Redirect every face corner through `stitch_index`, then drop the
/// vertices no face references. Surviving vertices keep their order.
pub fn apply_stitch_index<V: Clone>(
    vertices: &[V],
    faces: &[[usize; 3]],
    stitch_index: &[usize],
) -> MeshResult<StitchedMesh<V>> {
    let n = vertices.len();
    if stitch_index.len() != n {
        return Err(MeshError::StitchIndexLength {
            got: stitch_index.len(),
            expected: n,
        });
    }
    if let Some((i, &v)) = stitch_index.iter().enumerate().find(|&(_, &v)| v >= n) {
        return Err(MeshError::InvalidParams {
            details: format!("stitch index maps vertex {i} to {v}, but there are {n} vertices"),
        });
    }
    validate_faces(faces, n)?;

    let stitched: Vec<[usize; 3]> = faces.iter().map(|f| f.map(|v| stitch_index[v])).collect();

    let mut referenced = vec![false; n];
    for f in &stitched {
        for &v in f {
            referenced[v] = true;
        }
    }
    let mut vertex_map = vec![None; n];
    let mut kept = Vec::new();
    for (v, _) in referenced.iter().enumerate().filter(|(_, r)| **r) {
        vertex_map[v] = Some(kept.len());
        kept.push(vertices[v].clone());
    }
    let faces = stitched
        .into_iter()
        .map(|f| f.map(|v| vertex_map[v].unwrap_or(v)))
        .collect();

    Ok(StitchedMesh {
        vertices: kept,
        faces,
        vertex_map,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_is_merged_and_dropped() {
        let vertices = ['a', 'b', 'c', 'b'];
        let out = apply_stitch_index(&vertices, &[[0, 3, 2]], &[0, 1, 2, 1]).unwrap();
        assert_eq!(out.vertices, vec!['a', 'b', 'c']);
        assert_eq!(out.faces, vec![[0, 1, 2]]);
        assert_eq!(out.vertex_map, vec![Some(0), Some(1), Some(2), None]);
    }

    #[test]
    fn length_mismatch_is_reported() {
        let err = apply_stitch_index(&[0u8; 3], &[], &[0, 1]).unwrap_err();
        assert_eq!(err, MeshError::StitchIndexLength { got: 2, expected: 3 });
    }
}
