// SPDX-License-Identifier: MIT
//
// Copyright (c) 2026 Facemesh Contributors
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

use crate::geometry::{Aabb2, Point2};
use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;

pub fn are_equal<T: Scalar>(p1: &Point2<T>, p2: &Point2<T>, eps: T) -> bool {
    p1.approx_eq(p2, eps)
}

/// Collinearity via the signed area of (a, b, c).
pub fn are_collinear<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, eps: T) -> bool {
    orient2d(a, b, c).abs() <= eps
}

/// Lifted 3x3 incircle determinant.
///
/// For a counter-clockwise triangle (a, b, c), the result is positive iff `d`
/// lies strictly inside their circumcircle, negative iff strictly outside,
/// and zero when all four points are concyclic. The query point is translated
/// to the origin before expansion, which keeps the determinant well
/// conditioned for points far from the origin.
pub fn incircle<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, d: &Point2<T>) -> T {
    let adx = a.x - d.x;
    let ady = a.y - d.y;
    let bdx = b.x - d.x;
    let bdy = b.y - d.y;
    let cdx = c.x - d.x;
    let cdy = c.y - d.y;

    let ad = adx * adx + ady * ady;
    let bd = bdx * bdx + bdy * bdy;
    let cd = cdx * cdx + cdy * cdy;

    adx * (bdy * cd - bd * cdy) - ady * (bdx * cd - bd * cdx) + ad * (bdx * cdy - bdy * cdx)
}

/// Bounding box of a non-empty point slice as (minx, miny, maxx, maxy).
///
/// Panics on an empty slice; callers guard the degenerate case first.
pub fn bbox<T: Scalar>(points: &[Point2<T>]) -> (T, T, T, T) {
    let bb = Aabb2::from_points(points).unwrap();
    (bb.min.x, bb.min.y, bb.max.x, bb.max.y)
}
