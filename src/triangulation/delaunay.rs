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

use ahash::{AHashMap, AHashSet};
use smallvec::SmallVec;

use crate::geometry::Point2;
use crate::kernel::orientation::orient2d;
use crate::kernel::predicates::{bbox, incircle};
use crate::numeric::scalar::Scalar;

pub const SQRT_3: f64 = 1.7320508075688772;

/// Undirected edge between two point indices, normalized smaller-first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }
}

/// Counter-clockwise index triple into a `Delaunay`'s point vec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle(pub usize, pub usize, pub usize);

impl Triangle {
    #[inline]
    pub fn as_sorted_indices(&self) -> (usize, usize, usize) {
        let mut v = [self.0, self.1, self.2];
        v.sort_unstable();
        (v[0], v[1], v[2])
    }

    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.0, self.1),
            Edge::new(self.1, self.2),
            Edge::new(self.2, self.0),
        ]
    }

    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.0 == v || self.1 == v || self.2 == v
    }
}

/// A Delaunay triangulation over a copied set of input points.
///
/// `triangles` index into `points`; every triangle is counter-clockwise and
/// has positive area. The struct holds no reference back to the caller's
/// buffer.
#[derive(Clone, Debug)]
pub struct Delaunay<T: Scalar> {
    pub points: Vec<Point2<T>>,
    pub triangles: Vec<Triangle>, // indices into points
}

impl<T: Scalar> Delaunay<T> {
    /// Build the Delaunay triangulation of `pts` with incremental
    /// Bowyer-Watson insertion.
    ///
    /// Input points within `T::tolerance()` of an earlier point collapse to
    /// that point, so near-duplicates never produce sliver triangles. Fewer
    /// than 3 usable points, or an all-collinear set, yield an empty triangle
    /// list; that is a normal result, not an error.
    pub fn build(pts: &[Point2<T>]) -> Self {
        let mut points = dedupe_points(pts);
        if points.len() < 3 {
            return Self {
                points,
                triangles: Vec::new(),
            };
        }

        // Super-triangle that strictly contains all points, sized well past
        // the bounding box so its circumcircles cannot starve real edges.
        let (minx, miny, maxx, maxy) = bbox(&points);
        let dx = maxx - minx;
        let dy = maxy - miny;
        let delta = dx.max(dy);
        let half = T::from_f64(0.5);
        let cx = (minx + maxx) * half;
        let cy = (miny + maxy) * half;

        let r = T::from_f64(64.0) * delta + T::one();
        let sqrt_3 = T::from_f64(SQRT_3);
        let two = T::from_f64(2.0);

        let s0 = points.len();
        let s1 = s0 + 1;
        let s2 = s0 + 2;
        points.push(Point2 {
            x: cx,
            y: cy + two * r,
        });
        points.push(Point2 {
            x: cx - sqrt_3 * r,
            y: cy - r,
        });
        points.push(Point2 {
            x: cx + sqrt_3 * r,
            y: cy - r,
        });

        // The apex-up layout above is counter-clockwise already.
        let mut triangles = vec![Triangle(s0, s1, s2)];

        for pid in 0..s0 {
            Self::insert_point(pid, &points, &mut triangles);
        }

        // Drop the scaffolding: any triangle touching a super-vertex.
        triangles.retain(|t| t.0 < s0 && t.1 < s0 && t.2 < s0);
        points.truncate(s0);

        Self { points, triangles }
    }

    /// Insert a single point: collect the triangles whose circumcircle
    /// contains it, carve out that cavity, and fan new triangles from the
    /// cavity boundary to the point.
    fn insert_point(pid: usize, points: &[Point2<T>], triangles: &mut Vec<Triangle>) {
        let p = &points[pid];

        let mut bad_triangles = Vec::new();
        for (i, t) in triangles.iter().enumerate() {
            if Self::point_in_circumcircle(p, t, points) {
                bad_triangles.push(i);
            }
        }

        if bad_triangles.is_empty() {
            return;
        }

        // Cavity boundary: edges of bad triangles seen exactly once.
        let mut edge_count: AHashMap<Edge, u32> =
            AHashMap::with_capacity(bad_triangles.len() * 3);
        for &i in &bad_triangles {
            for e in triangles[i].edges() {
                *edge_count.entry(e).or_insert(0) += 1;
            }
        }
        let mut boundary: Vec<Edge> = edge_count
            .into_iter()
            .filter_map(|(e, n)| (n == 1).then_some(e))
            .collect();
        // hash iteration order is seeded; sort so triangle order is stable
        boundary.sort_unstable();

        // Remove bad triangles, highest index first so swap_remove is safe.
        bad_triangles.sort_unstable();
        for &i in bad_triangles.iter().rev() {
            triangles.swap_remove(i);
        }

        // Re-triangulate the cavity around p, skipping zero-area fans.
        for e in boundary {
            let o = orient2d(&points[e.0], &points[e.1], p);
            if o.abs() <= T::tolerance() {
                continue;
            }
            if o > T::zero() {
                triangles.push(Triangle(e.0, e.1, pid));
            } else {
                triangles.push(Triangle(e.0, pid, e.1));
            }
        }
    }

    /// Circumcircle containment with the on-circle tie resolved as outside,
    /// so identical input always classifies identically.
    fn point_in_circumcircle(p: &Point2<T>, t: &Triangle, points: &[Point2<T>]) -> bool {
        let (a, b, c) = (t.0, t.1, t.2);

        // Ensure CCW ordering so the incircle sign is meaningful
        let (aa, bb, cc) = if orient2d(&points[a], &points[b], &points[c]) > T::zero() {
            (a, b, c)
        } else {
            (a, c, b)
        };

        incircle(&points[aa], &points[bb], &points[cc], p) > T::tolerance()
    }

    /// Unique undirected edges of the triangulation, ascending by index pair.
    pub fn edges(&self) -> Vec<Edge> {
        let mut seen: AHashSet<Edge> = AHashSet::with_capacity(self.triangles.len() * 3);
        let mut out = Vec::with_capacity(self.triangles.len() * 3);
        for t in &self.triangles {
            for e in t.edges() {
                if seen.insert(e) {
                    out.push(e);
                }
            }
        }
        out.sort_unstable();
        out
    }

    /// The three corner points of `t`, copied out in CCW order.
    #[inline]
    pub fn triangle_points(&self, t: &Triangle) -> [Point2<T>; 3] {
        [self.points[t.0], self.points[t.1], self.points[t.2]]
    }

    /// Area of `t`; positive since triangles are kept CCW.
    pub fn triangle_area(&self, t: &Triangle) -> T {
        let [a, b, c] = self.triangle_points(t);
        orient2d(&a, &b, &c) * T::from_f64(0.5)
    }

    /// Verify the Delaunay property across every adjacent triangle pair: the
    /// vertex opposite a shared edge must not fall strictly inside the
    /// neighbor's circumcircle (local Delaunay implies global).
    pub fn is_delaunay(&self) -> bool {
        let mut edge2tris: AHashMap<Edge, SmallVec<[usize; 2]>> =
            AHashMap::with_capacity(self.triangles.len() * 3);
        for (ti, t) in self.triangles.iter().enumerate() {
            for e in t.edges() {
                edge2tris.entry(e).or_default().push(ti);
            }
        }

        for (e, tris) in &edge2tris {
            if tris.len() != 2 {
                continue;
            }
            for (ti, tj) in [(tris[0], tris[1]), (tris[1], tris[0])] {
                let Some(apex) = third_vertex(&self.triangles[tj], e.0, e.1) else {
                    continue;
                };
                let [a, b, c] = self.triangle_points(&self.triangles[ti]);
                if incircle(&a, &b, &c, &self.points[apex]) > T::tolerance() {
                    return false;
                }
            }
        }
        true
    }
}

/// Triangulate `points` and return the result as coordinate triples, for
/// callers that only render and never touch indices.
pub fn triangulate<T: Scalar>(points: &[Point2<T>]) -> Vec<[Point2<T>; 3]> {
    let dt = Delaunay::build(points);
    dt.triangles.iter().map(|t| dt.triangle_points(t)).collect()
}

/// First occurrence wins; tolerance is per coordinate. Landmark sets are tens
/// of points, so the quadratic scan is fine.
fn dedupe_points<T: Scalar>(pts: &[Point2<T>]) -> Vec<Point2<T>> {
    let eps = T::tolerance();
    let mut out: Vec<Point2<T>> = Vec::with_capacity(pts.len());
    for p in pts {
        if !out.iter().any(|q| q.approx_eq(p, eps)) {
            out.push(*p);
        }
    }
    out
}

#[inline]
fn third_vertex(t: &Triangle, a: usize, b: usize) -> Option<usize> {
    [t.0, t.1, t.2].into_iter().find(|&v| v != a && v != b)
}
