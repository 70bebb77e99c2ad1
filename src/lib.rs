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

//! Planar Delaunay triangulation for facial landmark points.
//!
//! The core is [`triangulation::Delaunay`], an incremental Bowyer-Watson
//! triangulator over [`geometry::Point2`] values. Around it sit the pieces a
//! landmark overlay needs once the camera and detector are someone else's
//! problem: a data-driven facial [`landmarks`] region table producing open or
//! closed draw paths, and a [`pipeline`] that turns a stream of landmark
//! frames into meshes, dropping frames that were superseded while a build was
//! in flight.

pub mod geometry;
pub mod kernel;
pub mod landmarks;
pub mod numeric;
pub mod pipeline;
pub mod triangulation;
