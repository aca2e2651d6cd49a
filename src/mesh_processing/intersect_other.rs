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

//! Intersections between two meshes, and remeshing both along them.

use std::ops::ControlFlow;

use tracing::debug;

use crate::{
    config::RemeshParams,
    error::MeshResult,
    geometry::box_intersection::box_intersection,
    kernel::{ExactKernel, FastKernel, Kernel},
    mesh::triangle_list::mesh_to_triangle_list,
    mesh_processing::{
        remesh::{RemeshedMesh, remesh_intersections},
        self_intersect::{Accumulator, IntersectionReport, classify_pair, triangle_boxes},
    },
    numeric::{coordinate::Coordinate, scalar::RefArith},
};

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectOther<C> {
    pub found: bool,
    /// `[face of A, face of B]`, each into its own input buffer.
    pub intersecting_pairs: Vec<[usize; 2]>,
    /// Both meshes remeshed as one: A's vertices and faces first, then B's.
    /// `None` when only detection was requested.
    pub remeshed: Option<RemeshedMesh<[C; 3]>>,
}

/// Find every pair of intersecting faces between mesh A and mesh B.
///
/// The offending map of the report is keyed in the concatenated face
/// numbering (B's faces follow A's); the pair list is not.
pub fn find_cross_intersections<K: Kernel, C: Coordinate>(
    va: &[[C; 3]],
    fa: &[[usize; 3]],
    vb: &[[C; 3]],
    fb: &[[usize; 3]],
    params: &RemeshParams,
) -> MeshResult<IntersectionReport<K::FT>>
where
    for<'x> &'x K::FT: RefArith<K::FT>,
{
    params.validate()?;
    let list_a = mesh_to_triangle_list::<K, C>(va, fa)?;
    let list_b = mesh_to_triangle_list::<K, C>(vb, fb)?;
    let boxes_a = triangle_boxes::<K>(&list_a.triangles);
    let boxes_b = triangle_boxes::<K>(&list_b.triangles);
    let construct = !params.detect_only;
    let offset = fa.len();
    let mut acc = Accumulator::new();

    if params.first_only {
        let _ = box_intersection(&boxes_a, &boxes_b, params.cutoff, |a, b| {
            let event = classify_pair::<K>(&list_a.triangles[a], &list_b.triangles[b], false);
            if acc.push(a, b + offset, event) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
    } else {
        let mut candidates = Vec::new();
        let _ = box_intersection(&boxes_a, &boxes_b, params.cutoff, |a, b| {
            candidates.push((a, b));
            ControlFlow::Continue(())
        });
        candidates.sort_unstable();
        debug!(candidates = candidates.len(), "culled cross-mesh candidate pairs");

        for (a, b) in candidates {
            let event = classify_pair::<K>(&list_a.triangles[a], &list_b.triangles[b], construct);
            acc.push(a, b + offset, event);
        }
    }

    let mut report = acc.into_report();
    for pair in &mut report.intersecting_pairs {
        pair[1] -= offset;
    }
    debug!(intersecting = report.intersecting_pairs.len(), "classified cross-mesh pairs");
    Ok(report)
}

/// Detect intersections between A and B and, unless `params.detect_only`,
/// remesh both along them.
pub fn intersect_other<C: Coordinate>(
    va: &[[C; 3]],
    fa: &[[usize; 3]],
    vb: &[[C; 3]],
    fb: &[[usize; 3]],
    params: &RemeshParams,
) -> MeshResult<IntersectOther<C>> {
    params.validate()?;
    if params.detect_only {
        let intersecting_pairs = if C::EXACT {
            find_cross_intersections::<ExactKernel, C>(va, fa, vb, fb, params)?.intersecting_pairs
        } else {
            find_cross_intersections::<FastKernel, C>(va, fa, vb, fb, params)?.intersecting_pairs
        };
        return Ok(IntersectOther {
            found: !intersecting_pairs.is_empty(),
            intersecting_pairs,
            remeshed: None,
        });
    }

    let report = find_cross_intersections::<ExactKernel, C>(va, fa, vb, fb, params)?;
    let (vertices, faces) = concatenate(va, fa, vb, fb);
    let remeshed = remesh_intersections(&vertices, &faces, &report.offending, params)?;
    Ok(IntersectOther {
        found: !report.intersecting_pairs.is_empty(),
        intersecting_pairs: report.intersecting_pairs,
        remeshed: Some(remeshed),
    })
}

/// One buffer pair holding A then B, B's indices shifted past A's vertices.
pub fn concatenate<C: Clone>(
    va: &[[C; 3]],
    fa: &[[usize; 3]],
    vb: &[[C; 3]],
    fb: &[[usize; 3]],
) -> (Vec<[C; 3]>, Vec<[usize; 3]>) {
    let offset = va.len();
    let vertices = va.iter().chain(vb).cloned().collect();
    let faces = fa
        .iter()
        .copied()
        .chain(fb.iter().map(|f| f.map(|v| v + offset)))
        .collect();
    (vertices, faces)
}
