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

//! Constrained Delaunay triangulation of a planar straight-line graph.
//!
//! Points are inserted Bowyer-Watson style into a bounding super triangle,
//! then each constraint is recovered by removing the triangles it crosses
//! and retriangulating the two pseudo-polygons on either side. The hull is
//! inserted as constraints too, so the super triangle can be dropped
//! without leaving gaps. All predicates are evaluated in the point type's
//! own arithmetic, so the result is exact for exact scalars.

use std::cmp::Ordering;

use ahash::AHashSet;

use crate::{
    geometry::point::Point2,
    kernel::orientation::{incircle, orient2d},
    numeric::scalar::{RefArith, Scalar},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Edge(usize, usize);

impl Edge {
    #[inline]
    fn new(a: usize, b: usize) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }
}

/// `p` lies strictly between `a` and `b` on the segment joining them.
pub fn on_open_segment<T: Scalar>(p: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> bool
where
    for<'a> &'a T: RefArith<T>,
{
    if !orient2d(a, b, p).is_zero() {
        return false;
    }
    let ab = a.vector_to(b);
    let t = ab.dot(&a.vector_to(p));
    t.is_positive() && t < ab.dot(&ab)
}

/// The open segments `[p, q]` and `[r, s]` cross in a single point.
pub fn crosses_properly<T: Scalar>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>, s: &Point2<T>) -> bool
where
    for<'a> &'a T: RefArith<T>,
{
    orient2d(p, q, r).sign() * orient2d(p, q, s).sign() < 0
        && orient2d(r, s, p).sign() * orient2d(r, s, q).sign() < 0
}

/// Triangulates the convex hull of `points` so that every constraint is an
/// edge of the result.
///
/// Constraints must not cross each other; a constraint passing through a
/// point is split there. Returned triangles are counter-clockwise, start at
/// their smallest index and are sorted. Duplicate points must have been
/// merged. Runs in `O(n^2)` for `n` points and a bounded number of
/// constraints per point.
pub fn constrained_triangulation<T: Scalar>(points: &[Point2<T>], constraints: &[[usize; 2]]) -> Vec<[usize; 3]>
where
    for<'a> &'a T: RefArith<T>,
{
    let n = points.len();
    let hull = convex_hull(points);
    if hull.len() < 3 {
        return Vec::new();
    }

    let mut pts = points.to_vec();
    pts.extend(super_triangle(points));
    let mut triangles = vec![[n, n + 1, n + 2]];
    for pid in 0..n {
        insert_point(&pts, pid, &mut triangles);
    }

    let hull_edges = (0..hull.len()).map(|i| [hull[i], hull[(i + 1) % hull.len()]]);
    let mut seen: AHashSet<Edge> = AHashSet::new();
    for [a, b] in hull_edges.chain(constraints.iter().copied()) {
        for [u, v] in split_constraint_chain(points, a, b) {
            if seen.insert(Edge::new(u, v)) {
                insert_constraint(&pts, u, v, &mut triangles);
            }
        }
    }

    let mut out: Vec<[usize; 3]> = triangles
        .into_iter()
        .filter(|t| t.iter().all(|&v| v < n))
        .map(|t| {
            let k = (0..3).min_by_key(|&i| t[i]).unwrap_or(0);
            [t[k], t[(k + 1) % 3], t[(k + 2) % 3]]
        })
        .collect();
    out.sort_unstable();
    out
}

fn cmp_xy<T: Scalar>(p: &Point2<T>, q: &Point2<T>) -> Ordering {
    p[0].partial_cmp(&q[0])
        .unwrap_or(Ordering::Equal)
        .then(p[1].partial_cmp(&q[1]).unwrap_or(Ordering::Equal))
}

/// Counter-clockwise hull indices, without collinear boundary points.
fn convex_hull<T: Scalar>(points: &[Point2<T>]) -> Vec<usize>
where
    for<'a> &'a T: RefArith<T>,
{
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| cmp_xy(&points[i], &points[j]));

    let mut lower = half_hull(points, order.iter().copied());
    let mut upper = half_hull(points, order.iter().rev().copied());
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

fn half_hull<T: Scalar>(points: &[Point2<T>], ids: impl Iterator<Item = usize>) -> Vec<usize>
where
    for<'a> &'a T: RefArith<T>,
{
    let mut h: Vec<usize> = Vec::new();
    for i in ids {
        while h.len() >= 2 && !orient2d(&points[h[h.len() - 2]], &points[h[h.len() - 1]], &points[i]).is_positive() {
            h.pop();
        }
        h.push(i);
    }
    h
}

/// Counter-clockwise triangle strictly containing every point.
fn super_triangle<T: Scalar>(points: &[Point2<T>]) -> [Point2<T>; 3]
where
    for<'a> &'a T: RefArith<T>,
{
    let (mut lo, mut hi) = (points[0].clone(), points[0].clone());
    for p in points {
        for i in 0..2 {
            if p[i] < lo[i] {
                lo[i] = p[i].clone();
            }
            if p[i] > hi[i] {
                hi[i] = p[i].clone();
            }
        }
    }
    let dx = &hi[0] - &lo[0];
    let dy = &hi[1] - &lo[1];
    let m = &(if dx > dy { dx } else { dy }) + &T::one();
    let four_m = &T::from(4) * &m;

    let (x0, y0) = (&lo[0] - &m, &lo[1] - &m);
    let (x1, y1) = (&lo[0] + &four_m, &lo[1] + &four_m);
    [
        Point2::new([x0.clone(), y0.clone()]),
        Point2::new([x1, y0]),
        Point2::new([x0, y1]),
    ]
}

/// Bowyer-Watson insertion of `pts[pid]`.
fn insert_point<T: Scalar>(pts: &[Point2<T>], pid: usize, triangles: &mut Vec<[usize; 3]>)
where
    for<'a> &'a T: RefArith<T>,
{
    let p = &pts[pid];
    let mut cavity: Vec<(usize, usize)> = Vec::new();
    triangles.retain(|t| {
        if incircle(&pts[t[0]], &pts[t[1]], &pts[t[2]], p).is_positive() {
            cavity.extend([(t[0], t[1]), (t[1], t[2]), (t[2], t[0])]);
            false
        } else {
            true
        }
    });

    // Interior cavity edges appear once in each direction.
    let directed: AHashSet<(usize, usize)> = cavity.iter().copied().collect();
    for &(u, v) in &cavity {
        if !directed.contains(&(v, u)) {
            triangles.push([u, v, pid]);
        }
    }
}

/// Pieces of `[a, b]` between the points lying on it, in order.
fn split_constraint_chain<T: Scalar>(points: &[Point2<T>], a: usize, b: usize) -> Vec<[usize; 2]>
where
    for<'a> &'a T: RefArith<T>,
{
    if a == b {
        return Vec::new();
    }
    let (pa, pb) = (&points[a], &points[b]);
    let ab = pa.vector_to(pb);
    let mut mids: Vec<(T, usize)> = (0..points.len())
        .filter(|&k| k != a && k != b && on_open_segment(&points[k], pa, pb))
        .map(|k| (ab.dot(&pa.vector_to(&points[k])), k))
        .collect();
    mids.sort_by(|(s, _), (t, _)| s.partial_cmp(t).unwrap_or(Ordering::Equal));

    let mut chain = Vec::with_capacity(mids.len() + 2);
    chain.push(a);
    chain.extend(mids.into_iter().map(|(_, k)| k));
    chain.push(b);
    chain.windows(2).map(|w| [w[0], w[1]]).collect()
}

/// Makes `[a, b]` an edge. Its open segment must not contain a vertex.
fn insert_constraint<T: Scalar>(pts: &[Point2<T>], a: usize, b: usize, triangles: &mut Vec<[usize; 3]>)
where
    for<'a> &'a T: RefArith<T>,
{
    let (pa, pb) = (&pts[a], &pts[b]);
    let mut crossed: Vec<Edge> = Vec::new();
    let mut seen: AHashSet<Edge> = AHashSet::new();
    triangles.retain(|t| {
        let mut hit = false;
        for i in 0..3 {
            let (u, v) = (t[i], t[(i + 1) % 3]);
            if crosses_properly(pa, pb, &pts[u], &pts[v]) {
                hit = true;
                if seen.insert(Edge::new(u, v)) {
                    crossed.push(Edge::new(u, v));
                }
            }
        }
        !hit
    });
    if crossed.is_empty() {
        return;
    }

    // Order the crossed edges by where they meet `[a, b]`.
    let mut keyed: Vec<(T, Edge)> = crossed
        .into_iter()
        .map(|e| {
            let oa = orient2d(&pts[e.0], &pts[e.1], pa);
            let ob = orient2d(&pts[e.0], &pts[e.1], pb);
            (&oa / &(&oa - &ob), e)
        })
        .collect();
    keyed.sort_by(|(s, _), (t, _)| s.partial_cmp(t).unwrap_or(Ordering::Equal));

    let mut left: Vec<usize> = Vec::new();
    let mut right: Vec<usize> = Vec::new();
    for (_, e) in &keyed {
        let (l, r) = if orient2d(pa, pb, &pts[e.0]).is_positive() {
            (e.0, e.1)
        } else {
            (e.1, e.0)
        };
        if left.last() != Some(&l) {
            left.push(l);
        }
        if right.last() != Some(&r) {
            right.push(r);
        }
    }
    triangulate_pseudo_polygon(pts, a, b, &left, triangles);
    triangulate_pseudo_polygon(pts, a, b, &right, triangles);
}

/// Fills the polygon bounded by `[a, b]` and `chain`, picking for each base
/// the chain vertex whose circle through the base holds no other.
fn triangulate_pseudo_polygon<T: Scalar>(
    pts: &[Point2<T>],
    a: usize,
    b: usize,
    chain: &[usize],
    out: &mut Vec<[usize; 3]>,
) where
    for<'a> &'a T: RefArith<T>,
{
    if chain.is_empty() {
        return;
    }
    let mut ci = 0;
    for i in 1..chain.len() {
        let [x, y, z] = ccw(pts, [a, b, chain[ci]]);
        if incircle(&pts[x], &pts[y], &pts[z], &pts[chain[i]]).is_positive() {
            ci = i;
        }
    }
    let c = chain[ci];
    out.push(ccw(pts, [a, b, c]));
    triangulate_pseudo_polygon(pts, a, c, &chain[..ci], out);
    triangulate_pseudo_polygon(pts, c, b, &chain[ci + 1..], out);
}

fn ccw<T: Scalar>(pts: &[Point2<T>], [a, b, c]: [usize; 3]) -> [usize; 3]
where
    for<'a> &'a T: RefArith<T>,
{
    if orient2d(&pts[a], &pts[b], &pts[c]).is_negative() {
        [a, c, b]
    } else {
        [a, b, c]
    }
}
