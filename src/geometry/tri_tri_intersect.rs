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

//! Triangle/triangle and segment/triangle intersection in space.
//!
//! The `*_do_intersect` predicates only use the kernel's orientation signs
//! and are exact under every kernel. The `intersect_*` constructions compute
//! in the scalar type itself and are exact for exact scalars.

use crate::{
    geometry::{
        intersection::Intersection3,
        plane::ProjectionPlane,
        point::{Point2, Point3},
        segment::Segment3,
        triangle::Triangle3,
        vector::Vector3,
    },
    kernel::{Kernel, orientation::orient3d},
    numeric::scalar::{RefArith, Scalar},
};

/// Closed test: `p` inside or on the boundary of the non-degenerate 2D
/// triangle `tri`, either orientation.
pub fn point_in_triangle_2d<K: Kernel>(p: &Point2<K::FT>, tri: &[Point2<K::FT>; 3]) -> bool {
    let o = K::orient2d(&tri[0], &tri[1], &tri[2]);
    if o == 0 {
        return false;
    }
    (0..3).all(|i| K::orient2d(&tri[i], &tri[(i + 1) % 3], p) * o >= 0)
}

/// Closed test for 2D segments `[p, q]` and `[r, s]`, collinear overlap and
/// touching endpoints included.
pub fn segments_intersect_2d<K: Kernel>(
    p: &Point2<K::FT>,
    q: &Point2<K::FT>,
    r: &Point2<K::FT>,
    s: &Point2<K::FT>,
) -> bool {
    let o1 = K::orient2d(p, q, r);
    let o2 = K::orient2d(p, q, s);
    let o3 = K::orient2d(r, s, p);
    let o4 = K::orient2d(r, s, q);
    if o1 * o2 > 0 || o3 * o4 > 0 {
        return false;
    }
    if o1 != 0 || o2 != 0 || o3 != 0 || o4 != 0 {
        return true;
    }
    // Collinear: overlap iff the bounding boxes overlap.
    (0..2).all(|i| {
        let (lo1, hi1) = min_max(&p[i], &q[i]);
        let (lo2, hi2) = min_max(&r[i], &s[i]);
        lo1 <= hi2 && lo2 <= hi1
    })
}

fn min_max<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> (&'a T, &'a T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Coplanar triangles overlap (closed), tested in the projection of `a`.
pub fn coplanar_triangles_do_intersect<K: Kernel>(a: &Triangle3<K::FT>, b: &Triangle3<K::FT>) -> bool {
    let Some(plane) = ProjectionPlane::of_triangle::<K>(a) else {
        return false;
    };
    let pa = a.vertices.each_ref().map(|v| plane.project(v));
    let pb = b.vertices.each_ref().map(|v| plane.project(v));

    if pa.iter().any(|v| point_in_triangle_2d::<K>(v, &pb)) {
        return true;
    }
    if pb.iter().any(|v| point_in_triangle_2d::<K>(v, &pa)) {
        return true;
    }
    (0..3).any(|i| {
        (0..3).any(|j| {
            segments_intersect_2d::<K>(&pa[i], &pa[(i + 1) % 3], &pb[j], &pb[(j + 1) % 3])
        })
    })
}

/// Closed segment/triangle test. `tri` must be non-degenerate.
pub fn segment_triangle_do_intersect<K: Kernel>(
    p: &Point3<K::FT>,
    q: &Point3<K::FT>,
    tri: &Triangle3<K::FT>,
) -> bool {
    let [a, b, c] = &tri.vertices;
    let sp = K::orient3d(a, b, c, p);
    let sq = K::orient3d(a, b, c, q);
    if sp * sq > 0 {
        return false;
    }

    if sp == 0 && sq == 0 {
        let Some(plane) = ProjectionPlane::of_triangle::<K>(tri) else {
            return false;
        };
        let t2 = tri.vertices.each_ref().map(|v| plane.project(v));
        let (p2, q2) = (plane.project(p), plane.project(q));
        return point_in_triangle_2d::<K>(&p2, &t2)
            || point_in_triangle_2d::<K>(&q2, &t2)
            || (0..3).any(|i| segments_intersect_2d::<K>(&p2, &q2, &t2[i], &t2[(i + 1) % 3]));
    }

    // The segment meets the plane in one point; it lies in the triangle iff
    // the line passes on the same side of every edge.
    let o1 = K::orient3d(p, q, a, b);
    let o2 = K::orient3d(p, q, b, c);
    let o3 = K::orient3d(p, q, c, a);
    (o1 >= 0 && o2 >= 0 && o3 >= 0) || (o1 <= 0 && o2 <= 0 && o3 <= 0)
}

/// Closed triangle/triangle test. Both triangles must be non-degenerate.
pub fn triangle_triangle_do_intersect<K: Kernel>(a: &Triangle3<K::FT>, b: &Triangle3<K::FT>) -> bool {
    let [b0, b1, b2] = &b.vertices;
    let da = a.vertices.each_ref().map(|v| K::orient3d(b0, b1, b2, v));
    if da.iter().all(|&s| s > 0) || da.iter().all(|&s| s < 0) {
        return false;
    }
    if da.iter().all(|&s| s == 0) {
        return coplanar_triangles_do_intersect::<K>(a, b);
    }

    let [a0, a1, a2] = &a.vertices;
    let db = b.vertices.each_ref().map(|v| K::orient3d(a0, a1, a2, v));
    if db.iter().all(|&s| s > 0) || db.iter().all(|&s| s < 0) {
        return false;
    }

    (0..3).any(|c| {
        let (p, q) = a.opposite_edge(c);
        segment_triangle_do_intersect::<K>(p, q, b)
    }) || (0..3).any(|c| {
        let (p, q) = b.opposite_edge(c);
        segment_triangle_do_intersect::<K>(p, q, a)
    })
}

/// `p` is coplanar with the non-degenerate triangle `tri`; is it inside or on
/// its boundary?
fn coplanar_point_in_triangle<T: Scalar>(p: &Point3<T>, tri: &Triangle3<T>) -> bool
where
    for<'a> &'a T: RefArith<T>,
{
    let n = tri.normal();
    (0..3).all(|i| !edge_side(&n, tri.vertex(i), tri.vertex(i + 1), p).is_negative())
}

/// Signed distance-like value of `p` from the edge `from -> to` inside the
/// plane with normal `n`; positive towards the triangle interior.
fn edge_side<T: Scalar>(n: &Vector3<T>, from: &Point3<T>, to: &Point3<T>, p: &Point3<T>) -> T
where
    for<'a> &'a T: RefArith<T>,
{
    n.cross(&from.vector_to(to)).dot(&from.vector_to(p))
}

/// Point where the segment `p -> q` crosses a level set, given the affine
/// values `dp != dq` at its endpoints.
fn crossing<T: Scalar>(p: &Point3<T>, q: &Point3<T>, dp: &T, dq: &T) -> Point3<T>
where
    for<'a> &'a T: RefArith<T>,
{
    let t = dp / &(dp - dq);
    p.lerp(q, &t)
}

/// Exact segment/triangle intersection: none, a point, or (when coplanar) a
/// segment. `tri` must be non-degenerate.
pub fn intersect_segment_triangle<T: Scalar>(
    p: &Point3<T>,
    q: &Point3<T>,
    tri: &Triangle3<T>,
) -> Intersection3<T>
where
    for<'a> &'a T: RefArith<T>,
{
    let [a, b, c] = &tri.vertices;
    let dp = orient3d(a, b, c, p);
    let dq = orient3d(a, b, c, q);
    if dp.sign() * dq.sign() > 0 {
        return Intersection3::None;
    }

    if dp.is_zero() && dq.is_zero() {
        return clip_segment_to_triangle(p, q, tri);
    }

    let x = if dp.is_zero() {
        p.clone()
    } else if dq.is_zero() {
        q.clone()
    } else {
        crossing(p, q, &dp, &dq)
    };
    if coplanar_point_in_triangle(&x, tri) {
        Intersection3::Point(x)
    } else {
        Intersection3::None
    }
}

/// Parametric clip of a coplanar segment against the triangle's three inner
/// half-planes.
fn clip_segment_to_triangle<T: Scalar>(p: &Point3<T>, q: &Point3<T>, tri: &Triangle3<T>) -> Intersection3<T>
where
    for<'a> &'a T: RefArith<T>,
{
    let n = tri.normal();
    let mut t0 = T::zero();
    let mut t1 = T::one();
    for i in 0..3 {
        let (from, to) = (tri.vertex(i), tri.vertex(i + 1));
        let hp = edge_side(&n, from, to, p);
        let hq = edge_side(&n, from, to, q);
        match (hp.is_negative(), hq.is_negative()) {
            (true, true) => return Intersection3::None,
            (false, false) => {}
            (false, true) => {
                let t = &hp / &(&hp - &hq);
                if t < t1 {
                    t1 = t;
                }
            }
            (true, false) => {
                let t = &hp / &(&hp - &hq);
                if t > t0 {
                    t0 = t;
                }
            }
        }
    }
    if t0 > t1 {
        return Intersection3::None;
    }
    let start = p.lerp(q, &t0);
    if t0 == t1 {
        return Intersection3::Point(start);
    }
    let end = p.lerp(q, &t1);
    if start == end {
        Intersection3::Point(start)
    } else {
        Intersection3::Segment(Segment3::new(&start, &end))
    }
}

/// Exact intersection of two non-degenerate triangles: none, a point, a
/// segment or (when coplanar) a convex polygon.
pub fn intersect_triangles<T: Scalar>(a: &Triangle3<T>, b: &Triangle3<T>) -> Intersection3<T>
where
    for<'x> &'x T: RefArith<T>,
{
    let [b0, b1, b2] = &b.vertices;
    let da = a.vertices.each_ref().map(|v| orient3d(b0, b1, b2, v));
    if all_same_strict_sign(&da) {
        return Intersection3::None;
    }
    if da.iter().all(|d| d.is_zero()) {
        return clip_triangle_to_triangle(a, b);
    }

    let [a0, a1, a2] = &a.vertices;
    let db = b.vertices.each_ref().map(|v| orient3d(a0, a1, a2, v));
    if all_same_strict_sign(&db) {
        return Intersection3::None;
    }

    let sa = plane_section(a, &da);
    let sb = plane_section(b, &db);
    if sa.is_empty() || sb.is_empty() {
        return Intersection3::None;
    }

    // Both sections lie on the line shared by the two planes; overlap them
    // along its direction.
    let dir = a.normal().cross(&b.normal());
    let key = |p: &Point3<T>| dir.dot(&p.as_vector());
    let (a_lo, a_hi) = extremes(&sa, &key);
    let (b_lo, b_hi) = extremes(&sb, &key);

    let lo = if key(a_lo) >= key(b_lo) { a_lo } else { b_lo };
    let hi = if key(a_hi) <= key(b_hi) { a_hi } else { b_hi };
    let (klo, khi) = (key(lo), key(hi));
    if klo > khi {
        Intersection3::None
    } else if klo == khi {
        Intersection3::Point(lo.clone())
    } else {
        Intersection3::Segment(Segment3::new(lo, hi))
    }
}

fn all_same_strict_sign<T: Scalar>(d: &[T; 3]) -> bool {
    d.iter().all(|x| x.is_positive()) || d.iter().all(|x| x.is_negative())
}

/// Points where the triangle meets the other triangle's plane, given the
/// plane's affine values `d` at the vertices. At most two distinct points
/// when the triangle is not coplanar with that plane.
fn plane_section<T: Scalar>(t: &Triangle3<T>, d: &[T; 3]) -> Vec<Point3<T>>
where
    for<'a> &'a T: RefArith<T>,
{
    let mut out: Vec<Point3<T>> = Vec::with_capacity(2);
    let mut push = |p: Point3<T>| {
        if !out.contains(&p) {
            out.push(p);
        }
    };
    for i in 0..3 {
        let j = (i + 1) % 3;
        if d[i].is_zero() {
            push(t.vertex(i).clone());
        }
        if d[i].sign() * d[j].sign() < 0 {
            push(crossing(t.vertex(i), t.vertex(j), &d[i], &d[j]));
        }
    }
    out
}

fn extremes<'p, T: Scalar, F>(pts: &'p [Point3<T>], key: &F) -> (&'p Point3<T>, &'p Point3<T>)
where
    F: Fn(&Point3<T>) -> T,
{
    let mut lo = &pts[0];
    let mut hi = &pts[0];
    for p in &pts[1..] {
        if key(p) < key(lo) {
            lo = p;
        }
        if key(p) > key(hi) {
            hi = p;
        }
    }
    (lo, hi)
}

/// Sutherland-Hodgman clip of coplanar `a` by the inner half-planes of `b`.
fn clip_triangle_to_triangle<T: Scalar>(a: &Triangle3<T>, b: &Triangle3<T>) -> Intersection3<T>
where
    for<'a> &'a T: RefArith<T>,
{
    let n = b.normal();
    let mut poly: Vec<Point3<T>> = a.vertices.to_vec();
    for i in 0..3 {
        if poly.is_empty() {
            break;
        }
        let (from, to) = (b.vertex(i), b.vertex(i + 1));
        let h: Vec<T> = poly.iter().map(|p| edge_side(&n, from, to, p)).collect();
        let mut next = Vec::with_capacity(poly.len() + 1);
        for k in 0..poly.len() {
            let l = (k + 1) % poly.len();
            if !h[k].is_negative() {
                next.push(poly[k].clone());
            }
            if h[k].sign() * h[l].sign() < 0 {
                next.push(crossing(&poly[k], &poly[l], &h[k], &h[l]));
            }
        }
        poly = next;
    }
    Intersection3::from_points(poly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kernel::ExactKernel, numeric::ExactRational};

    fn tri(v: [[i32; 3]; 3]) -> Triangle3<ExactRational> {
        let [a, b, c] = v.map(Point3::from_vals);
        Triangle3::new(a, b, c)
    }

    #[test]
    fn crossing_triangles_meet_in_a_segment() {
        let a = tri([[0, 0, 0], [4, 0, 0], [0, 4, 0]]);
        let b = tri([[1, 1, -1], [1, 1, 1], [3, -2, 0]]);
        assert!(triangle_triangle_do_intersect::<ExactKernel>(&a, &b));
        assert!(matches!(intersect_triangles(&a, &b), Intersection3::Segment(_)));
    }

    #[test]
    fn coplanar_overlap_is_a_polygon() {
        let a = tri([[0, 0, 0], [4, 0, 0], [0, 4, 0]]);
        let b = tri([[1, 1, 0], [5, 1, 0], [1, 5, 0]]);
        match intersect_triangles(&a, &b) {
            Intersection3::Polygon(ps) => assert_eq!(ps.len(), 3),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn vertex_touching_plane_gives_point() {
        let a = tri([[0, 0, 0], [4, 0, 0], [0, 4, 0]]);
        let b = tri([[1, 1, 0], [1, 1, 3], [2, 2, 3]]);
        assert_eq!(
            intersect_triangles(&a, &b),
            Intersection3::Point(Point3::from_vals([1, 1, 0]))
        );
    }
}
