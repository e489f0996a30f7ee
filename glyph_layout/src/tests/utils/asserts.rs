// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::Vec3;

use crate::{GlyphVertexBuffer, LayoutRequest};

/// Returns the characters covered by each laid out line.
pub(crate) fn line_texts(request: &LayoutRequest) -> Vec<String> {
    let text = request.text().borrow();
    request
        .lines()
        .iter()
        .map(|line| {
            text.chars()
                .skip(line.vertices.start)
                .take(line.vertices.len())
                .collect()
        })
        .collect()
}

/// Returns the x coordinate of every vertex origin.
pub(crate) fn origins_x(vertices: &GlyphVertexBuffer) -> Vec<f32> {
    vertices.iter().map(|vertex| vertex.origin.x).collect()
}

#[track_caller]
pub(crate) fn assert_close(actual: Vec3, expected: Vec3) {
    assert!(
        actual.abs_diff_eq(expected, 1e-5),
        "expected {expected}, got {actual}"
    );
}
