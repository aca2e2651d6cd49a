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

//! Self-intersection detection: cull, classify, accumulate.

use std::ops::ControlFlow;

use smallvec::SmallVec;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    config::RemeshParams,
    error::MeshResult,
    geometry::{
        aabb::Aabb,
        box_intersection::box_self_intersection,
        intersection::Intersection3,
        plane::ProjectionPlane,
        tri_tri_intersect::{
            intersect_segment_triangle, intersect_triangles, point_in_triangle_2d,
            segment_triangle_do_intersect, segments_intersect_2d, triangle_triangle_do_intersect,
        },
        triangle::Triangle3,
    },
    kernel::Kernel,
    mesh::triangle_list::{TriangleList, mesh_to_triangle_list},
    mesh_processing::offending::OffendingMap,
    numeric::{
        coordinate::Coordinate,
        scalar::{RefArith, Scalar},
    },
};

/// Outcome of classifying one candidate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<T: Scalar> {
    Disjoint,
    /// Intersecting; nothing was constructed.
    Detected,
    Constructed(Intersection3<T>),
}

impl<T: Scalar> Classification<T> {
    pub fn is_intersecting(&self) -> bool {
        !matches!(self, Classification::Disjoint)
    }
}

/// Intersecting pairs and the offending map built from them.
#[derive(Debug, Clone)]
pub struct IntersectionReport<T: Scalar> {
    pub intersecting_pairs: Vec<[usize; 2]>,
    pub offending: OffendingMap<T>,
}

/// Single owner of classification results. Events must be pushed in
/// candidate order for the output to be deterministic.
#[derive(Debug)]
pub(crate) struct Accumulator<T: Scalar> {
    pub pairs: Vec<[usize; 2]>,
    pub offending: OffendingMap<T>,
}

impl<T: Scalar> Accumulator<T> {
    pub fn new() -> Self {
        Accumulator {
            pairs: Vec::new(),
            offending: OffendingMap::new(),
        }
    }

    /// Returns whether the pair intersects.
    pub fn push(&mut self, fa: usize, fb: usize, event: Classification<T>) -> bool {
        match event {
            Classification::Disjoint => return false,
            Classification::Detected => {
                self.offending.mark(fa);
                self.offending.mark(fb);
            }
            Classification::Constructed(obj) => self.offending.record(fa, fb, obj),
        }
        self.pairs.push([fa, fb]);
        true
    }

    pub fn into_report(self) -> IntersectionReport<T> {
        IntersectionReport {
            intersecting_pairs: self.pairs,
            offending: self.offending,
        }
    }
}

/// Conservative boxes; degenerate triangles get none.
pub(crate) fn triangle_boxes<K: Kernel>(triangles: &[Triangle3<K::FT>]) -> Vec<Option<Aabb>> {
    triangles
        .iter()
        .map(|t| (!t.is_degenerate::<K>()).then(|| Aabb::from_points(&t.vertices)))
        .collect()
}

fn detected_or<T: Scalar>(obj: Intersection3<T>) -> Classification<T> {
    if obj.is_none() {
        Classification::Detected
    } else {
        Classification::Constructed(obj)
    }
}

/// Full test, no shared-vertex reasoning. Both triangles non-degenerate.
pub fn classify_pair<K: Kernel>(a: &Triangle3<K::FT>, b: &Triangle3<K::FT>, construct: bool) -> Classification<K::FT>
where
    for<'x> &'x K::FT: RefArith<K::FT>,
{
    if !triangle_triangle_do_intersect::<K>(a, b) {
        return Classification::Disjoint;
    }
    if !construct {
        return Classification::Detected;
    }
    detected_or(intersect_triangles(a, b))
}

/// Corner pairs `(ca, cb)` at which the faces share a vertex, by index or
/// by position.
fn shared_corners<T: Scalar>(
    fa: &[usize; 3],
    fb: &[usize; 3],
    a: &Triangle3<T>,
    b: &Triangle3<T>,
) -> SmallVec<[(usize, usize); 3]> {
    let mut shared = SmallVec::new();
    for ca in 0..3 {
        for cb in 0..3 {
            if fa[ca] == fb[cb] || a.vertex(ca) == b.vertex(cb) {
                shared.push((ca, cb));
            }
        }
    }
    shared
}

/// Classify two faces of the same mesh, accounting for shared vertices.
pub fn classify_self_pair<K: Kernel>(
    faces: &[[usize; 3]],
    triangles: &[Triangle3<K::FT>],
    fa: usize,
    fb: usize,
    construct: bool,
) -> Classification<K::FT>
where
    for<'x> &'x K::FT: RefArith<K::FT>,
{
    let (a, b) = (&triangles[fa], &triangles[fb]);
    let shared = shared_corners(&faces[fa], &faces[fb], a, b);
    match shared.len() {
        0 => classify_pair::<K>(a, b, construct),
        1 => {
            let (ca, cb) = shared[0];
            single_shared_vertex::<K>(a, b, ca, construct)
                .or_else(|| single_shared_vertex::<K>(b, a, cb, construct))
                .unwrap_or(Classification::Disjoint)
        }
        2 => double_shared_vertex::<K>(a, b, [shared[0], shared[1]], construct),
        // Duplicate face.
        _ => Classification::Disjoint,
    }
}

/// One shared corner `ca` of `a`: test the edge of `a` opposite it against
/// `b`.
fn single_shared_vertex<K: Kernel>(
    a: &Triangle3<K::FT>,
    b: &Triangle3<K::FT>,
    ca: usize,
    construct: bool,
) -> Option<Classification<K::FT>>
where
    for<'x> &'x K::FT: RefArith<K::FT>,
{
    let (p, q) = a.opposite_edge(ca);
    if !segment_triangle_do_intersect::<K>(p, q, b) {
        return None;
    }
    if !construct {
        return Some(Classification::Detected);
    }
    let event = match intersect_segment_triangle(p, q, b) {
        Intersection3::Point(x) => Classification::Constructed(Intersection3::from_points(vec![
            a.vertex(ca).clone(),
            x,
        ])),
        // The overlap may be a general polygon.
        Intersection3::Segment(_) | Intersection3::Polygon(_) => detected_or(intersect_triangles(a, b)),
        Intersection3::None => Classification::Detected,
    };
    Some(event)
}

/// Two shared corners: only a coplanar overlap on the same side of the
/// shared edge counts.
fn double_shared_vertex<K: Kernel>(
    a: &Triangle3<K::FT>,
    b: &Triangle3<K::FT>,
    shared: [(usize, usize); 2],
    construct: bool,
) -> Classification<K::FT>
where
    for<'x> &'x K::FT: RefArith<K::FT>,
{
    let opposite = |s0: usize, s1: usize| 3 - s0 - s1;
    let oa = opposite(shared[0].0, shared[1].0);
    let ob = opposite(shared[0].1, shared[1].1);

    let [a0, a1, a2] = &a.vertices;
    if K::orient3d(a0, a1, a2, b.vertex(ob)) != 0 {
        return Classification::Disjoint;
    }
    let Some(plane) = ProjectionPlane::of_triangle::<K>(a) else {
        return Classification::Disjoint;
    };
    let pa = a.vertices.each_ref().map(|v| plane.project(v));
    let pb = b.vertices.each_ref().map(|v| plane.project(v));

    let opposite_edges_intersect = |ca: usize, cb: usize| {
        segments_intersect_2d::<K>(&pa[(ca + 1) % 3], &pa[(ca + 2) % 3], &pb[(cb + 1) % 3], &pb[(cb + 2) % 3])
    };

    let overlap = point_in_triangle_2d::<K>(&pa[oa], &pb)
        || point_in_triangle_2d::<K>(&pb[ob], &pa)
        || opposite_edges_intersect(shared[0].0, shared[1].1)
        || opposite_edges_intersect(shared[1].0, shared[0].1);
    if !overlap {
        return Classification::Disjoint;
    }
    if !construct {
        return Classification::Detected;
    }
    match intersect_triangles(a, b) {
        obj @ Intersection3::Polygon(_) => Classification::Constructed(obj),
        _ => Classification::Detected,
    }
}

/// Find every intersecting pair of faces of one mesh under kernel `K`.
///
/// With `params.detect_only` the offending map only has keys. With
/// `params.first_only` the search stops at the first intersecting pair
/// found.
pub fn find_self_intersections<K: Kernel, C: Coordinate>(
    vertices: &[[C; 3]],
    faces: &[[usize; 3]],
    params: &RemeshParams,
) -> MeshResult<IntersectionReport<K::FT>>
where
    for<'x> &'x K::FT: RefArith<K::FT>,
{
    params.validate()?;
    let list = mesh_to_triangle_list::<K, C>(vertices, faces)?;
    let boxes = triangle_boxes::<K>(&list.triangles);
    let construct = !params.detect_only;
    let mut acc = Accumulator::new();

    if params.first_only {
        let _ = box_self_intersection(&boxes, params.cutoff, |i, j| {
            let (fa, fb) = (i.min(j), i.max(j));
            let event = classify_self_pair::<K>(faces, &list.triangles, fa, fb, false);
            if acc.push(fa, fb, event) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        debug!(found = !acc.pairs.is_empty(), "first-hit self-intersection search");
        return Ok(acc.into_report());
    }

    let mut candidates = Vec::new();
    let _ = box_self_intersection(&boxes, params.cutoff, |i, j| {
        candidates.push((i.min(j), i.max(j)));
        ControlFlow::Continue(())
    });
    candidates.sort_unstable();
    debug!(faces = faces.len(), candidates = candidates.len(), "culled candidate pairs");

    for (fa, fb, event) in classify_candidates::<K>(faces, &list, &candidates, construct) {
        if acc.push(fa, fb, event) {
            trace!(fa, fb, "intersecting pair");
        }
    }
    debug!(
        intersecting = acc.pairs.len(),
        offending = acc.offending.len(),
        "classified candidate pairs"
    );
    Ok(acc.into_report())
}

#[cfg(not(feature = "parallel"))]
fn classify_candidates<K: Kernel>(
    faces: &[[usize; 3]],
    list: &TriangleList<K::FT>,
    candidates: &[(usize, usize)],
    construct: bool,
) -> Vec<(usize, usize, Classification<K::FT>)>
where
    for<'x> &'x K::FT: RefArith<K::FT>,
{
    candidates
        .iter()
        .map(|&(fa, fb)| (fa, fb, classify_self_pair::<K>(faces, &list.triangles, fa, fb, construct)))
        .collect()
}

#[cfg(feature = "parallel")]
fn classify_candidates<K: Kernel>(
    faces: &[[usize; 3]],
    list: &TriangleList<K::FT>,
    candidates: &[(usize, usize)],
    construct: bool,
) -> Vec<(usize, usize, Classification<K::FT>)>
where
    for<'x> &'x K::FT: RefArith<K::FT>,
{
    candidates
        .par_iter()
        .map(|&(fa, fb)| (fa, fb, classify_self_pair::<K>(faces, &list.triangles, fa, fb, construct)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::point::Point3, kernel::ExactKernel, numeric::ExactRational};

    fn tri(v: [[i32; 3]; 3]) -> Triangle3<ExactRational> {
        let [a, b, c] = v.map(Point3::from_vals);
        Triangle3::new(a, b, c)
    }

    #[test]
    fn neighbours_across_an_edge_do_not_intersect() {
        let faces = [[0, 1, 2], [2, 1, 3]];
        let tris = [
            tri([[0, 0, 0], [1, 0, 0], [0, 1, 0]]),
            tri([[0, 1, 0], [1, 0, 0], [1, 1, 0]]),
        ];
        let event = classify_self_pair::<ExactKernel>(&faces, &tris, 0, 1, true);
        assert_eq!(event, Classification::Disjoint);
    }

    #[test]
    fn folded_neighbour_overlaps() {
        let faces = [[0, 1, 2], [1, 0, 3]];
        let tris = [
            tri([[0, 0, 0], [4, 0, 0], [0, 4, 0]]),
            tri([[4, 0, 0], [0, 0, 0], [1, 1, 0]]),
        ];
        let event = classify_self_pair::<ExactKernel>(&faces, &tris, 0, 1, true);
        assert!(matches!(event, Classification::Constructed(Intersection3::Polygon(_))));
    }

    #[test]
    fn fan_neighbour_piercing_gives_segment_from_shared_vertex() {
        let faces = [[0, 1, 2], [0, 3, 4]];
        let tris = [
            tri([[0, 0, 0], [4, 0, 0], [0, 4, 0]]),
            tri([[0, 0, 0], [2, 2, -1], [2, 2, 1]]),
        ];
        match classify_self_pair::<ExactKernel>(&faces, &tris, 0, 1, true) {
            Classification::Constructed(Intersection3::Segment(s)) => {
                let ends = [s.a.clone(), s.b.clone()];
                assert!(ends.contains(&Point3::from_vals([0, 0, 0])));
                assert!(ends.contains(&Point3::from_vals([2, 2, 0])));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
