// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::{Mat4, Vec2, Vec3};

use crate::GlyphVertex;

/// Transforms the corners spanned by each depicted vertex and re-derives its edges.
pub(crate) fn transform(transform: &Mat4, vertices: &mut [GlyphVertex], depicted: &[bool]) {
    if *transform == Mat4::IDENTITY {
        return;
    }
    for (vertex, depicted) in vertices.iter_mut().zip(depicted) {
        if !*depicted {
            continue;
        }
        let origin = transform.transform_point3(vertex.origin);
        let right = transform.transform_point3(vertex.origin + vertex.tangent);
        let top = transform.transform_point3(vertex.origin + vertex.up);
        vertex.origin = origin;
        vertex.tangent = right - origin;
        vertex.up = top - origin;
    }
}

/// Returns the transformed width and height of a `width` by `height` block.
pub(crate) fn extent(transform: &Mat4, width: f32, height: f32) -> Vec2 {
    let left = transform.transform_point3(Vec3::ZERO);
    let right = transform.transform_point3(Vec3::new(width, 0.0, 0.0));
    let top = transform.transform_point3(Vec3::new(0.0, height, 0.0));
    Vec2::new(right.distance(left), top.distance(left))
}
