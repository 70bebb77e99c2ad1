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

use ahash::AHashMap;

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;
use crate::triangulation::Delaunay;

/// Named landmark constellations a face detector reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceRegion {
    FaceContour,
    LeftEye,
    RightEye,
    LeftPupil,
    RightPupil,
    LeftEyebrow,
    RightEyebrow,
    Nose,
    NoseCrest,
    MedianLine,
    OuterLips,
    InnerLips,
}

/// Whether a region's overlay path loops back to its first point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Closure {
    Open,
    Closed,
}

/// Draw order and closure per region. Eyes, pupils and lips are rings;
/// everything else is a polyline.
pub const REGION_STYLE: &[(FaceRegion, Closure)] = &[
    (FaceRegion::FaceContour, Closure::Open),
    (FaceRegion::LeftEye, Closure::Closed),
    (FaceRegion::RightEye, Closure::Closed),
    (FaceRegion::LeftPupil, Closure::Closed),
    (FaceRegion::RightPupil, Closure::Closed),
    (FaceRegion::LeftEyebrow, Closure::Open),
    (FaceRegion::RightEyebrow, Closure::Open),
    (FaceRegion::Nose, Closure::Open),
    (FaceRegion::NoseCrest, Closure::Open),
    (FaceRegion::MedianLine, Closure::Open),
    (FaceRegion::OuterLips, Closure::Closed),
    (FaceRegion::InnerLips, Closure::Closed),
];

/// A polyline ready for a renderer, in whatever coordinate system the points
/// came in.
#[derive(Clone, Debug, PartialEq)]
pub struct Path<T: Scalar> {
    pub points: Vec<Point2<T>>,
    pub closed: bool,
}

/// One frame's worth of detected landmark points, grouped by region.
///
/// Regions are optional; a detector that saw no lips simply never sets them.
/// All derived sequences (`all_points`, `paths`) follow `REGION_STYLE` order
/// so a given set of regions always flattens the same way.
#[derive(Clone, Debug, Default)]
pub struct Landmarks<T: Scalar> {
    regions: AHashMap<FaceRegion, Vec<Point2<T>>>,
}

impl<T: Scalar> Landmarks<T> {
    pub fn new() -> Self {
        Self {
            regions: AHashMap::new(),
        }
    }

    /// Set a region's points; an empty vec clears the region.
    pub fn set(&mut self, region: FaceRegion, points: Vec<Point2<T>>) {
        if points.is_empty() {
            self.regions.remove(&region);
        } else {
            self.regions.insert(region, points);
        }
    }

    pub fn get(&self, region: FaceRegion) -> Option<&[Point2<T>]> {
        self.regions.get(&region).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Every point across all populated regions, in table order. This is the
    /// sequence the triangulator consumes.
    pub fn all_points(&self) -> Vec<Point2<T>> {
        let mut out = Vec::new();
        for (region, _) in REGION_STYLE {
            if let Some(pts) = self.regions.get(region) {
                out.extend_from_slice(pts);
            }
        }
        out
    }

    /// One overlay path per populated region, in table order.
    pub fn paths(&self) -> Vec<Path<T>> {
        REGION_STYLE
            .iter()
            .filter_map(|(region, closure)| {
                self.regions.get(region).map(|pts| Path {
                    points: pts.clone(),
                    closed: *closure == Closure::Closed,
                })
            })
            .collect()
    }

    /// Delaunay mesh over every populated region's points.
    pub fn mesh(&self) -> Delaunay<T> {
        Delaunay::build(&self.all_points())
    }
}
