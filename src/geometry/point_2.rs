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

use crate::numeric::scalar::Scalar;

/// A point in the plane. Plain value type; the coordinate system is whatever
/// the point source used (normalized or pixel space), nothing here rescales.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2<T>
where
    T: Scalar,
{
    pub x: T,
    pub y: T,
}

impl<T> Point2<T>
where
    T: Scalar,
{
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<T>,
        Y: Into<T>,
    {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Coordinate-wise comparison with an absolute tolerance.
    #[inline]
    pub fn approx_eq(&self, other: &Self, eps: T) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

#[cfg(test)]
mod tests {
    use super::Point2;

    #[test]
    fn approx_eq_respects_tolerance() {
        let p = Point2::new(1.0f64, 2.0);
        assert!(p.approx_eq(&Point2::new(1.0 + 1e-10, 2.0), 1e-9));
        assert!(!p.approx_eq(&Point2::new(1.0 + 1e-8, 2.0), 1e-9));
    }
}
