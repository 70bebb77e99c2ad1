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
use facemesh::pipeline::{Frame, MeshPipeline};
use facemesh::triangulation::triangulate;

fn square() -> Vec<Point2<f64>> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
    ]
}

#[test]
fn frames_come_back_triangulated() {
    let pipeline = MeshPipeline::spawn();
    let points = square();

    pipeline
        .submit(Frame {
            seq: 1,
            points: points.clone(),
        })
        .unwrap();

    let mesh = pipeline.recv().unwrap();
    assert_eq!(mesh.seq, 1);
    assert_eq!(mesh.triangles, triangulate(&points));

    pipeline.shutdown();
}

#[test]
fn degenerate_frame_gives_empty_mesh() {
    let pipeline: MeshPipeline<f64> = MeshPipeline::spawn();

    pipeline
        .submit(Frame {
            seq: 9,
            points: vec![Point2::new(5.0, 5.0)],
        })
        .unwrap();

    let mesh = pipeline.recv().unwrap();
    assert_eq!(mesh.seq, 9);
    assert!(mesh.triangles.is_empty());

    pipeline.shutdown();
}

#[test]
fn meshes_arrive_in_frame_order_with_latest_last() {
    let pipeline = MeshPipeline::spawn();
    let points = square();

    for seq in 1..=5u64 {
        pipeline
            .submit(Frame {
                seq,
                points: points.clone(),
            })
            .unwrap();
    }

    // Some frames may be superseded and dropped; the sequence numbers that do
    // come out must be increasing and end at the newest frame.
    let mut last = 0;
    loop {
        let mesh = pipeline.recv().unwrap();
        assert!(mesh.seq > last);
        last = mesh.seq;
        if last == 5 {
            break;
        }
    }

    pipeline.shutdown();
}

#[test]
fn shutdown_joins_cleanly_with_queued_frames() {
    let pipeline = MeshPipeline::spawn();
    for seq in 1..=3u64 {
        pipeline
            .submit(Frame {
                seq,
                points: square(),
            })
            .unwrap();
    }
    // No recv: dropping the handle must still terminate the worker.
    pipeline.shutdown();
}
