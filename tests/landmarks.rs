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

use facemesh::geometry::Point2;
use facemesh::landmarks::{Closure, FaceRegion, Landmarks, REGION_STYLE};

fn ring(cx: f64, cy: f64, r: f64, n: usize) -> Vec<Point2<f64>> {
    (0..n)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / n as f64;
            Point2::new(cx + r * a.cos(), cy + r * a.sin())
        })
        .collect()
}

#[test]
fn table_closes_rings_and_opens_polylines() {
    let closure_of = |region: FaceRegion| {
        REGION_STYLE
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, c)| *c)
            .unwrap()
    };

    assert_eq!(closure_of(FaceRegion::LeftEye), Closure::Closed);
    assert_eq!(closure_of(FaceRegion::RightEye), Closure::Closed);
    assert_eq!(closure_of(FaceRegion::OuterLips), Closure::Closed);
    assert_eq!(closure_of(FaceRegion::InnerLips), Closure::Closed);
    assert_eq!(closure_of(FaceRegion::FaceContour), Closure::Open);
    assert_eq!(closure_of(FaceRegion::LeftEyebrow), Closure::Open);
    assert_eq!(closure_of(FaceRegion::Nose), Closure::Open);
    assert_eq!(closure_of(FaceRegion::MedianLine), Closure::Open);
}

#[test]
fn every_region_appears_in_the_table_once() {
    assert_eq!(REGION_STYLE.len(), 12);
    for i in 0..REGION_STYLE.len() {
        for j in (i + 1)..REGION_STYLE.len() {
            assert_ne!(REGION_STYLE[i].0, REGION_STYLE[j].0);
        }
    }
}

#[test]
fn paths_follow_table_order_and_skip_absent_regions() {
    let mut lm = Landmarks::new();
    lm.set(FaceRegion::OuterLips, ring(0.5, 0.25, 0.1, 8));
    lm.set(FaceRegion::FaceContour, ring(0.5, 0.5, 0.45, 10));
    lm.set(FaceRegion::LeftEye, ring(0.35, 0.6, 0.05, 6));

    let paths = lm.paths();
    assert_eq!(paths.len(), 3);
    // FaceContour before LeftEye before OuterLips, per the table
    assert!(!paths[0].closed);
    assert_eq!(paths[0].points.len(), 10);
    assert!(paths[1].closed);
    assert_eq!(paths[1].points.len(), 6);
    assert!(paths[2].closed);
    assert_eq!(paths[2].points.len(), 8);
}

#[test]
fn setting_empty_points_clears_a_region() {
    let mut lm = Landmarks::new();
    lm.set(FaceRegion::Nose, ring(0.5, 0.5, 0.1, 4));
    assert!(lm.get(FaceRegion::Nose).is_some());

    lm.set(FaceRegion::Nose, Vec::new());
    assert!(lm.get(FaceRegion::Nose).is_none());
    assert!(lm.is_empty());
}

#[test]
fn all_points_flattens_in_table_order() {
    let mut lm = Landmarks::new();
    let eye = ring(0.35, 0.6, 0.05, 6);
    let contour = ring(0.5, 0.5, 0.45, 10);
    lm.set(FaceRegion::LeftEye, eye.clone());
    lm.set(FaceRegion::FaceContour, contour.clone());

    let all = lm.all_points();
    assert_eq!(all.len(), 16);
    assert_eq!(&all[..10], &contour[..]);
    assert_eq!(&all[10..], &eye[..]);
}

#[test]
fn landmark_mesh_is_delaunay() {
    let mut lm = Landmarks::new();
    lm.set(FaceRegion::FaceContour, ring(0.5, 0.45, 0.4, 17));
    lm.set(FaceRegion::LeftEye, ring(0.35, 0.6, 0.06, 6));
    lm.set(FaceRegion::RightEye, ring(0.65, 0.6, 0.06, 6));
    lm.set(FaceRegion::LeftEyebrow, ring(0.35, 0.72, 0.08, 4));
    lm.set(FaceRegion::RightEyebrow, ring(0.65, 0.72, 0.08, 4));
    lm.set(FaceRegion::Nose, ring(0.5, 0.48, 0.05, 8));
    lm.set(FaceRegion::OuterLips, ring(0.5, 0.3, 0.1, 10));

    let mesh = lm.mesh();
    assert!(!mesh.triangles.is_empty());
    assert!(mesh.is_delaunay());
    for v in 0..mesh.points.len() {
        assert!(mesh.triangles.iter().any(|t| t.contains_vertex(v)));
    }
}

#[test]
fn empty_landmarks_give_empty_mesh() {
    let lm = Landmarks::<f64>::new();
    assert!(lm.all_points().is_empty());
    assert!(lm.paths().is_empty());
    assert!(lm.mesh().triangles.is_empty());
}
