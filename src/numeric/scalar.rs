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

use std::fmt::Debug;

use num_traits::Float;

/// Numeric backend for all geometric computation.
///
/// Landmark coordinates arrive as camera-space floats, so the backends are
/// `f32` and `f64`. `tolerance()` is the absolute per-coordinate epsilon:
/// points whose coordinates differ by no more than it are treated as the
/// same point, and a predicate determinant within it of zero is classified
/// as zero.
pub trait Scalar: Float + Copy + Debug + Default + Send + Sync + 'static {
    fn tolerance() -> Self;

    fn from_f64(v: f64) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn tolerance() -> Self {
        1e-9
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl Scalar for f32 {
    #[inline]
    fn tolerance() -> Self {
        1e-5
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn tolerance_is_positive() {
        assert!(f64::tolerance() > 0.0);
        assert!(f32::tolerance() > 0.0);
    }

    #[test]
    fn from_f64_round_trips_for_f64() {
        assert_eq!(<f64 as Scalar>::from_f64(0.25), 0.25);
    }
}
