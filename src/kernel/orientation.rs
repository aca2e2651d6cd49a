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
    geometry::point::{Point2, Point3},
    numeric::scalar::{RefArith, Scalar},
};

/// Twice the signed area of `(a, b, c)`:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    let ab = a.vector_to(b);
    let ac = a.vector_to(c);
    &(&ab[0] * &ac[1]) - &(&ab[1] * &ac[0])
}

/// Six times the signed volume of the tetrahedron `(a, b, c, d)`:
/// `((b - a) x (c - a)) . (d - a)`. Positive when `d` lies on the side the
/// counter-clockwise normal of `(a, b, c)` points to.
pub fn orient3d<T>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> T
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    let ab = a.vector_to(b);
    let ac = a.vector_to(c);
    let ad = a.vector_to(d);
    ab.cross(&ac).dot(&ad)
}

/// Positive when `d` lies strictly inside the circle through the
/// counter-clockwise triangle `(a, b, c)`, zero when on it.
pub fn incircle<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, d: &Point2<T>) -> T
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    let ad = d.vector_to(a);
    let bd = d.vector_to(b);
    let cd = d.vector_to(c);

    let alift = &(&ad[0] * &ad[0]) + &(&ad[1] * &ad[1]);
    let blift = &(&bd[0] * &bd[0]) + &(&bd[1] * &bd[1]);
    let clift = &(&cd[0] * &cd[0]) + &(&cd[1] * &cd[1]);

    let bc = &(&bd[0] * &cd[1]) - &(&cd[0] * &bd[1]);
    let ca = &(&cd[0] * &ad[1]) - &(&ad[0] * &cd[1]);
    let ab = &(&ad[0] * &bd[1]) - &(&bd[0] * &ad[1]);

    &(&(&alift * &bc) + &(&blift * &ca)) + &(&clift * &ab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ExactRational;

    fn p3(x: i32, y: i32, z: i32) -> Point3<ExactRational> {
        Point3::from_vals([x, y, z])
    }

    #[test]
    fn ccw_test() {
        let a = Point2::<ExactRational>::from_vals([0, 0]);
        let b = Point2::from_vals([1, 0]);
        let c = Point2::from_vals([0, 1]);
        assert_eq!(orient2d(&a, &b, &c).sign(), 1);
        assert_eq!(orient2d(&a, &c, &b).sign(), -1);
    }

    #[test]
    fn incircle_signs() {
        let a = Point2::<ExactRational>::from_vals([0, 0]);
        let b = Point2::from_vals([2, 0]);
        let c = Point2::from_vals([0, 2]);
        assert_eq!(incircle(&a, &b, &c, &Point2::from_vals([1, 1])).sign(), 1);
        assert_eq!(incircle(&a, &b, &c, &Point2::from_vals([2, 2])).sign(), 0);
        assert_eq!(incircle(&a, &b, &c, &Point2::from_vals([3, 3])).sign(), -1);
    }

    #[test]
    fn orientation_3d_signs() {
        let (a, b, c) = (p3(0, 0, 0), p3(1, 0, 0), p3(0, 1, 0));
        assert_eq!(orient3d(&a, &b, &c, &p3(0, 0, 1)).sign(), 1);
        assert_eq!(orient3d(&a, &b, &c, &p3(0, 0, -1)).sign(), -1);
        assert_eq!(orient3d(&a, &b, &c, &p3(1, 1, 0)).sign(), 0);
    }
}
