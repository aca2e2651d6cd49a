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
    geometry::{point::Point3, segment::Segment3},
    numeric::scalar::Scalar,
};

/// Intersection of two bounded primitives in space.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection3<T: Scalar> {
    None,
    Point(Point3<T>),
    Segment(Segment3<T>),
    /// Convex planar polygon, three or more vertices in boundary order.
    Polygon(Vec<Point3<T>>),
}

impl<T: Scalar> Intersection3<T> {
    pub fn is_none(&self) -> bool {
        matches!(self, Intersection3::None)
    }

    /// Every point defining the object.
    pub fn points(&self) -> Vec<&Point3<T>> {
        match self {
            Intersection3::None => Vec::new(),
            Intersection3::Point(p) => vec![p],
            Intersection3::Segment(s) => vec![&s.a, &s.b],
            Intersection3::Polygon(ps) => ps.iter().collect(),
        }
    }

    /// Boundary edges of the object, as point pairs.
    pub fn edges(&self) -> Vec<(&Point3<T>, &Point3<T>)> {
        match self {
            Intersection3::None | Intersection3::Point(_) => Vec::new(),
            Intersection3::Segment(s) => vec![(&s.a, &s.b)],
            Intersection3::Polygon(ps) => (0..ps.len())
                .map(|i| (&ps[i], &ps[(i + 1) % ps.len()]))
                .collect(),
        }
    }

    /// Builds the object from deduplicated points: one point, a segment, or
    /// a polygon. Collinear point sets collapse to their extreme segment.
    pub(crate) fn from_points(points: Vec<Point3<T>>) -> Self
    where
        for<'a> &'a T: crate::numeric::scalar::RefArith<T>,
    {
        let mut pts: Vec<Point3<T>> = Vec::with_capacity(points.len());
        for p in points {
            if !pts.contains(&p) {
                pts.push(p);
            }
        }
        match pts.len() {
            0 => Intersection3::None,
            1 => Intersection3::Point(pts.swap_remove(0)),
            2 => Intersection3::Segment(Segment3::new(&pts[0], &pts[1])),
            _ => {
                let dir = pts[0].vector_to(&pts[1]);
                let collinear = pts[2..]
                    .iter()
                    .all(|p| dir.cross(&pts[0].vector_to(p)).is_zero());
                if !collinear {
                    return Intersection3::Polygon(pts);
                }
                let key = |p: &Point3<T>| dir.dot(&pts[0].vector_to(p));
                let mut lo = 0;
                let mut hi = 0;
                for i in 1..pts.len() {
                    if key(&pts[i]) < key(&pts[lo]) {
                        lo = i;
                    }
                    if key(&pts[i]) > key(&pts[hi]) {
                        hi = i;
                    }
                }
                Intersection3::Segment(Segment3::new(&pts[lo], &pts[hi]))
            }
        }
    }
}
