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

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// An axis-aligned bounding box in the plane.
#[derive(Clone, Debug, PartialEq)]
pub struct Aabb2<T: Scalar> {
    pub min: Point2<T>,
    pub max: Point2<T>,
}

impl<T: Scalar> Aabb2<T> {
    /// Smallest box containing every point. `None` for an empty slice.
    pub fn from_points(points: &[Point2<T>]) -> Option<Self> {
        let first = points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Aabb2 { min, max })
    }

    #[inline]
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point2<T> {
        let half = T::from_f64(0.5);
        Point2 {
            x: (self.min.x + self.max.x) * half,
            y: (self.min.y + self.max.y) * half,
        }
    }
}
