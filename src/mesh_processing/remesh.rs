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

//! Remeshing along intersection curves.
//!
//! Every face listed in an offending map is retriangulated so that the
//! recorded intersection objects become mesh edges. Coplanar offending faces
//! that intersect each other are triangulated together as one cluster.
//!
//! Known limitation: when an input edge lies exactly on a face that does not
//! share it, and that face is not itself offending, vertices created along the
//! edge are not connected to that face.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};
use tracing::debug;

use crate::{
    config::RemeshParams,
    error::{MeshError, MeshResult},
    geometry::{
        plane::ProjectionPlane,
        point::{Point2, Point3},
        tri_tri_intersect::point_in_triangle_2d,
        triangle::Triangle3,
    },
    kernel::{ExactKernel, FastKernel, Kernel, orientation::orient2d},
    mesh::triangle_list::mesh_to_triangle_list,
    mesh_processing::{offending::OffendingMap, self_intersect::find_self_intersections},
    numeric::{
        coordinate::{Coordinate, Rounding},
        exact_rational::ExactRational,
    },
    operations::{
        Zero,
        triangulation::constrained::{constrained_triangulation, crosses_properly, on_open_segment},
    },
};

type ExactPoint = Point3<ExactRational>;

/// A remeshed triangle soup with provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct RemeshedMesh<V> {
    /// Input vertices first, then constructed ones.
    pub vertices: Vec<V>,
    pub faces: Vec<[usize; 3]>,
    /// Input face each output face came from (J).
    pub birth_faces: Vec<usize>,
    /// Canonical representative of each output vertex (IM).
    pub stitch_index: Vec<usize>,
}

/// Result of [`remesh_self_intersections`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelfIntersections<C> {
    pub intersecting_pairs: Vec<[usize; 2]>,
    /// `None` when only detection was requested.
    pub remeshed: Option<RemeshedMesh<[C; 3]>>,
}

/// Detect self-intersections and, unless `params.detect_only`, remesh the
/// mesh along them.
pub fn remesh_self_intersections<C: Coordinate>(
    vertices: &[[C; 3]],
    faces: &[[usize; 3]],
    params: &RemeshParams,
) -> MeshResult<SelfIntersections<C>> {
    params.validate()?;
    if params.detect_only {
        let intersecting_pairs = if C::EXACT {
            find_self_intersections::<ExactKernel, C>(vertices, faces, params)?.intersecting_pairs
        } else {
            find_self_intersections::<FastKernel, C>(vertices, faces, params)?.intersecting_pairs
        };
        return Ok(SelfIntersections {
            intersecting_pairs,
            remeshed: None,
        });
    }

    let report = find_self_intersections::<ExactKernel, C>(vertices, faces, params)?;
    let remeshed = remesh_intersections(vertices, faces, &report.offending, params)?;
    Ok(SelfIntersections {
        intersecting_pairs: report.intersecting_pairs,
        remeshed: Some(remeshed),
    })
}

/// Retriangulate every face keyed in `offending`; copy all other faces.
///
/// Only `params.stitch_all` and the rounding flag are consulted.
pub fn remesh_intersections<C: Coordinate>(
    vertices: &[[C; 3]],
    faces: &[[usize; 3]],
    offending: &OffendingMap<ExactRational>,
    params: &RemeshParams,
) -> MeshResult<RemeshedMesh<[C; 3]>> {
    let list = mesh_to_triangle_list::<ExactKernel, C>(vertices, faces)?;
    validate_offending(offending, &list.triangles)?;

    let mut out_faces = Vec::with_capacity(faces.len());
    let mut birth_faces = Vec::with_capacity(faces.len());
    for (f, face) in faces.iter().enumerate() {
        if !offending.contains(f) {
            out_faces.push(*face);
            birth_faces.push(f);
        }
    }

    let mut pool = VertexPool::new(&list.points, faces, &list.triangles);
    let clusters = coplanar_clusters(offending, &list.triangles);
    for cluster in &clusters {
        for (f, corners) in triangulate_cluster(cluster, offending, &list.triangles) {
            let tri = corners.map(|p| pool.vertex_for(f, &p));
            out_faces.push(tri);
            birth_faces.push(f);
        }
    }
    debug!(
        offending = offending.len(),
        clusters = clusters.len(),
        new_vertices = pool.constructed.len(),
        faces = out_faces.len(),
        "remeshed intersections"
    );

    let rounding = params.rounding();
    if params.stitch_all {
        return Ok(pool.weld(vertices, out_faces, birth_faces, rounding));
    }

    let mut out_vertices: Vec<[C; 3]> = vertices.to_vec();
    out_vertices.extend(pool.constructed.iter().map(|p| round_point::<C>(p, rounding)));
    let mut stitch_index: Vec<usize> = (0..vertices.len()).collect();
    stitch_index.extend(pool.stitch);

    Ok(RemeshedMesh {
        vertices: out_vertices,
        faces: out_faces,
        birth_faces,
        stitch_index,
    })
}

fn validate_offending(offending: &OffendingMap<ExactRational>, triangles: &[Triangle3<ExactRational>]) -> MeshResult<()> {
    let face_count = triangles.len();
    for (&f, entries) in offending {
        if f >= face_count {
            return Err(MeshError::FaceIndexOutOfRange { face: f, face_count });
        }
        if let Some(&(g, _)) = entries.iter().find(|(g, _)| *g >= face_count) {
            return Err(MeshError::FaceIndexOutOfRange { face: g, face_count });
        }
        if triangles[f].is_degenerate::<ExactKernel>() {
            return Err(MeshError::DegenerateTriangle { face: f });
        }
    }
    Ok(())
}

fn round_point<C: Coordinate>(p: &ExactPoint, rounding: Rounding) -> [C; 3] {
    p.coords.each_ref().map(|c| C::from_exact(c, rounding))
}

fn coplanar(a: &Triangle3<ExactRational>, b: &Triangle3<ExactRational>) -> bool {
    let [a0, a1, a2] = &a.vertices;
    b.vertices.iter().all(|v| ExactKernel::orient3d(a0, a1, a2, v) == 0)
}

/// Groups offending faces connected through coplanar partners. Clusters
/// come out ordered by their smallest face, each sorted ascending.
fn coplanar_clusters(offending: &OffendingMap<ExactRational>, triangles: &[Triangle3<ExactRational>]) -> Vec<Vec<usize>> {
    let mut visited: AHashSet<usize> = AHashSet::new();
    let mut clusters = Vec::new();
    for seed in offending.keys() {
        if !visited.insert(seed) {
            continue;
        }
        let mut cluster = vec![seed];
        let mut queue = VecDeque::from([seed]);
        while let Some(f) = queue.pop_front() {
            for (g, _) in offending.get(f).unwrap_or_default() {
                let g = *g;
                if offending.contains(g) && !visited.contains(&g) && coplanar(&triangles[f], &triangles[g]) {
                    visited.insert(g);
                    cluster.push(g);
                    queue.push_back(g);
                }
            }
        }
        cluster.sort_unstable();
        clusters.push(cluster);
    }
    clusters
}

/// Exact points of one cluster with their projections, deduplicated.
struct PlanarPoints {
    plane: ProjectionPlane,
    points: Vec<ExactPoint>,
    projected: Vec<Point2<ExactRational>>,
    index: AHashMap<ExactPoint, usize>,
}

impl PlanarPoints {
    fn new(plane: ProjectionPlane) -> Self {
        PlanarPoints {
            plane,
            points: Vec::new(),
            projected: Vec::new(),
            index: AHashMap::new(),
        }
    }

    fn insert(&mut self, p: &ExactPoint) -> usize {
        if let Some(&i) = self.index.get(p) {
            return i;
        }
        let i = self.points.len();
        self.points.push(p.clone());
        self.projected.push(self.plane.project(p));
        self.index.insert(p.clone(), i);
        i
    }
}

/// Constrained triangulation of a coplanar cluster, split back into the
/// faces it covers. Each sub-triangle is oriented like its face.
fn triangulate_cluster(
    cluster: &[usize],
    offending: &OffendingMap<ExactRational>,
    triangles: &[Triangle3<ExactRational>],
) -> Vec<(usize, [ExactPoint; 3])> {
    let Some(plane) = ProjectionPlane::of_triangle::<ExactKernel>(&triangles[cluster[0]]) else {
        return Vec::new();
    };
    let mut pts = PlanarPoints::new(plane);
    let mut segments: Vec<[usize; 2]> = Vec::new();

    for &f in cluster {
        let t = &triangles[f];
        let ids = t.vertices.each_ref().map(|v| pts.insert(v));
        for c in 0..3 {
            segments.push([ids[c], ids[(c + 1) % 3]]);
        }
        for (_, obj) in offending.get(f).unwrap_or_default() {
            for p in obj.points() {
                pts.insert(p);
            }
            for (p, q) in obj.edges() {
                let (i, j) = (pts.insert(p), pts.insert(q));
                segments.push([i, j]);
            }
        }
    }

    split_crossings(&mut pts, &segments);
    let constraints = split_at_points(&pts, &segments);
    let sub_triangles = constrained_triangulation(&pts.projected, &constraints);

    let three = ExactRational::from(3);
    let centroids: Vec<Point2<ExactRational>> = sub_triangles
        .iter()
        .map(|t| {
            let [a, b, c] = t.map(|i| &pts.projected[i]);
            Point2::new(std::array::from_fn(|k| &(&(&a[k] + &b[k]) + &c[k]) / &three))
        })
        .collect();

    let mut out = Vec::new();
    for &f in cluster {
        let face2 = triangles[f].vertices.each_ref().map(|v| plane.project(v));
        let flip = plane.orient::<ExactKernel>(&triangles[f]) < 0;
        for (t, centroid) in sub_triangles.iter().zip(&centroids) {
            if !point_in_triangle_2d::<ExactKernel>(centroid, &face2) {
                continue;
            }
            let [a, b, c] = t.map(|i| pts.points[i].clone());
            out.push((f, if flip { [a, c, b] } else { [a, b, c] }));
        }
    }
    out
}

/// Adds the exact crossing point of every properly crossing segment pair.
fn split_crossings(pts: &mut PlanarPoints, segments: &[[usize; 2]]) {
    let mut found = Vec::new();
    for (i, &[a, b]) in segments.iter().enumerate() {
        for &[c, d] in &segments[i + 1..] {
            let (p, q, r, s) = (&pts.projected[a], &pts.projected[b], &pts.projected[c], &pts.projected[d]);
            if !crosses_properly(p, q, r, s) {
                continue;
            }
            let op = orient2d(r, s, p);
            let oq = orient2d(r, s, q);
            let t = &op / &(&op - &oq);
            found.push(pts.points[a].lerp(&pts.points[b], &t));
        }
    }
    for p in &found {
        pts.insert(p);
    }
}

/// Splits every segment at the points lying in its interior and removes
/// duplicates.
fn split_at_points(pts: &PlanarPoints, segments: &[[usize; 2]]) -> Vec<[usize; 2]> {
    let mut seen: AHashSet<[usize; 2]> = AHashSet::new();
    let mut out = Vec::new();
    for &[a, b] in segments {
        if a == b {
            continue;
        }
        let (pa, pb) = (&pts.projected[a], &pts.projected[b]);
        let dir = pa.vector_to(pb);
        let mut inner: Vec<(ExactRational, usize)> = (0..pts.points.len())
            .filter(|&k| k != a && k != b && on_open_segment(&pts.projected[k], pa, pb))
            .map(|k| (dir.dot(&pa.vector_to(&pts.projected[k])), k))
            .collect();
        inner.sort();

        let chain: Vec<usize> = std::iter::once(a)
            .chain(inner.into_iter().map(|(_, k)| k))
            .chain(std::iter::once(b))
            .collect();
        for w in chain.windows(2) {
            let key = [w[0].min(w[1]), w[0].max(w[1])];
            if seen.insert(key) {
                out.push(key);
            }
        }
    }
    out
}

/// `p` lies strictly inside the segment `[a, b]` in space.
fn on_open_segment_3d(p: &ExactPoint, a: &ExactPoint, b: &ExactPoint) -> bool {
    let ab = a.vector_to(b);
    let ap = a.vector_to(p);
    if !ab.cross(&ap).is_zero() {
        return false;
    }
    let t = ab.dot(&ap);
    t.is_positive() && t < ab.dot(&ab)
}

/// Output vertex bookkeeping: input corners are reused, constructed points
/// get one vertex per face, and vertices on an input edge record the first
/// vertex created at the same place on the same edge.
struct VertexPool<'a> {
    base: &'a [ExactPoint],
    faces: &'a [[usize; 3]],
    triangles: &'a [Triangle3<ExactRational>],
    constructed: Vec<ExactPoint>,
    stitch: Vec<usize>,
    per_face: AHashMap<(usize, ExactPoint), usize>,
    per_edge: AHashMap<(usize, usize, ExactPoint), usize>,
}

impl<'a> VertexPool<'a> {
    fn new(base: &'a [ExactPoint], faces: &'a [[usize; 3]], triangles: &'a [Triangle3<ExactRational>]) -> Self {
        VertexPool {
            base,
            faces,
            triangles,
            constructed: Vec::new(),
            stitch: Vec::new(),
            per_face: AHashMap::new(),
            per_edge: AHashMap::new(),
        }
    }

    fn vertex_for(&mut self, f: usize, p: &ExactPoint) -> usize {
        let tri = &self.triangles[f];
        let face = self.faces[f];
        if let Some(c) = (0..3).find(|&c| tri.vertex(c) == p) {
            return face[c];
        }
        if let Some(&v) = self.per_face.get(&(f, p.clone())) {
            return v;
        }

        let v = self.base.len() + self.constructed.len();
        let canonical = (0..3)
            .find(|&c| on_open_segment_3d(p, tri.vertex(c), tri.vertex(c + 1)))
            .map(|c| {
                let (u, w) = (face[c], face[(c + 1) % 3]);
                *self.per_edge.entry((u.min(w), u.max(w), p.clone())).or_insert(v)
            })
            .unwrap_or(v);

        self.constructed.push(p.clone());
        self.stitch.push(canonical);
        self.per_face.insert((f, p.clone()), v);
        v
    }

    /// Merge every vertex with its first exact duplicate and renumber in
    /// first-appearance order. The stitch index becomes the identity.
    fn weld<C: Coordinate>(
        &self,
        vertices: &[[C; 3]],
        faces: Vec<[usize; 3]>,
        birth_faces: Vec<usize>,
        rounding: Rounding,
    ) -> RemeshedMesh<[C; 3]> {
        let mut slot: AHashMap<&ExactPoint, usize> = AHashMap::new();
        let mut remap = Vec::with_capacity(self.base.len() + self.constructed.len());
        let mut out_vertices: Vec<[C; 3]> = Vec::new();
        for (i, p) in self.base.iter().chain(&self.constructed).enumerate() {
            let next = out_vertices.len();
            let id = *slot.entry(p).or_insert(next);
            if id == next {
                out_vertices.push(if i < self.base.len() {
                    vertices[i].clone()
                } else {
                    round_point::<C>(p, rounding)
                });
            }
            remap.push(id);
        }

        let faces = faces.into_iter().map(|f| f.map(|v| remap[v])).collect();
        let stitch_index = (0..out_vertices.len()).collect();
        RemeshedMesh {
            vertices: out_vertices,
            faces,
            birth_faces,
            stitch_index,
        }
    }
}
