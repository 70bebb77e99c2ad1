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

//! Frame-to-mesh pipeline: landmark frames in, triangulated meshes out, over
//! channels rather than shared mutable state. When the producer outruns the
//! triangulator, only the newest queued frame is built.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use log::{debug, warn};
use thiserror::Error;

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;
use crate::triangulation::Delaunay;

/// One detector output: a frame sequence number and its landmark points.
#[derive(Clone, Debug)]
pub struct Frame<T: Scalar> {
    pub seq: u64,
    pub points: Vec<Point2<T>>,
}

/// Triangulated result for a frame.
#[derive(Clone, Debug)]
pub struct FrameMesh<T: Scalar> {
    pub seq: u64,
    pub triangles: Vec<[Point2<T>; 3]>,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("mesh worker is no longer running")]
    Disconnected,
}

/// Handle to the mesh worker thread. Dropping the handle stops the worker
/// and joins it.
pub struct MeshPipeline<T: Scalar> {
    tx: Option<Sender<Frame<T>>>,
    rx: Receiver<FrameMesh<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Scalar> MeshPipeline<T> {
    pub fn spawn() -> Self {
        let (frame_tx, frame_rx) = mpsc::channel::<Frame<T>>();
        let (mesh_tx, mesh_rx) = mpsc::channel::<FrameMesh<T>>();

        let worker = thread::spawn(move || {
            while let Ok(frame) = frame_rx.recv() {
                let frame = drain_to_newest(frame, &frame_rx);

                let dt = Delaunay::build(&frame.points);
                let triangles = dt.triangles.iter().map(|t| dt.triangle_points(t)).collect();
                let mesh = FrameMesh {
                    seq: frame.seq,
                    triangles,
                };
                if mesh_tx.send(mesh).is_err() {
                    debug!("mesh receiver dropped, stopping worker");
                    break;
                }
            }
        });

        Self {
            tx: Some(frame_tx),
            rx: mesh_rx,
            worker: Some(worker),
        }
    }

    /// Queue a frame for triangulation.
    pub fn submit(&self, frame: Frame<T>) -> Result<(), PipelineError> {
        match &self.tx {
            Some(tx) => tx.send(frame).map_err(|_| PipelineError::Disconnected),
            None => Err(PipelineError::Disconnected),
        }
    }

    /// Block until the next mesh is ready.
    pub fn recv(&self) -> Result<FrameMesh<T>, PipelineError> {
        self.rx.recv().map_err(|_| PipelineError::Disconnected)
    }

    /// Stop accepting frames and wait for the worker to finish.
    pub fn shutdown(self) {
        // Drop runs: closes the frame channel, then joins.
    }
}

impl<T: Scalar> Drop for MeshPipeline<T> {
    fn drop(&mut self) {
        // Close the frame channel first or the join below never returns.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("mesh worker panicked");
            }
        }
    }
}

/// Drain the inbox; a frame queued behind a newer one will never be
/// rendered, so skip straight to the newest.
fn drain_to_newest<T: Scalar>(mut frame: Frame<T>, rx: &Receiver<Frame<T>>) -> Frame<T> {
    loop {
        match rx.try_recv() {
            Ok(newer) => {
                debug!("frame {} superseded by frame {}", frame.seq, newer.seq);
                frame = newer;
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return frame,
        }
    }
}
