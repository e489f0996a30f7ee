// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-glyph vertex records ready for GPU upload.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::{Elide, LayoutRequest};

/// Geometry of one glyph quad.
///
/// The quad spans `origin`, `origin + tangent`, `origin + up` and
/// `origin + tangent + up`; `uv_rect` holds the lower left and upper right
/// corners of its atlas sub-rectangle.
#[derive(Copy, Clone, Default, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct GlyphVertex {
    /// Lower left corner.
    pub origin: Vec3,
    /// Bottom edge, from the lower left to the lower right corner.
    pub tangent: Vec3,
    /// Left edge, from the lower left to the upper left corner.
    pub up: Vec3,
    /// `[u0, v0, u1, v1]` in the glyph atlas.
    pub uv_rect: [f32; 4],
}

impl GlyphVertex {
    /// A vertex with all components set to zero, as left for non-depictable glyphs.
    pub const ZERO: Self = Self {
        origin: Vec3::ZERO,
        tangent: Vec3::ZERO,
        up: Vec3::ZERO,
        uv_rect: [0.0; 4],
    };

    /// Returns `true` if every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// The vertex data of a buffer split into parallel flat arrays.
///
/// Component `c` of vertex `i` lives at `i * components + c`, where `components`
/// is 3 for `origins`, `tangents` and `ups`, and 4 for `uv_rects`.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct FlatVertices {
    /// Lower left corners.
    pub origins: Vec<f32>,
    /// Bottom edges.
    pub tangents: Vec<f32>,
    /// Left edges.
    pub ups: Vec<f32>,
    /// Atlas sub-rectangles.
    pub uv_rects: Vec<f32>,
}

/// A growable array of glyph vertices, index-aligned with the characters of the text
/// they were laid out from.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct GlyphVertexBuffer {
    vertices: Vec<GlyphVertex>,
}

impl GlyphVertexBuffer {
    /// Creates a buffer of `len` zeroed vertices.
    pub fn new(len: usize) -> Self {
        Self {
            vertices: vec![GlyphVertex::ZERO; len],
        }
    }

    /// Creates a buffer large enough to lay out `request`, including the ellipsis
    /// if elision may apply.
    pub fn for_request(request: &LayoutRequest) -> Self {
        let mut len = request.text().borrow().len();
        if request.elide() != Elide::None {
            len += request.ellipsis().chars().count();
        }
        Self::new(len)
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the buffer holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at `index`.
    pub fn get(&self, index: usize) -> Option<&GlyphVertex> {
        self.vertices.get(index)
    }

    /// Returns the vertex at `index` for modification.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut GlyphVertex> {
        self.vertices.get_mut(index)
    }

    /// Returns all vertices.
    pub fn as_slice(&self) -> &[GlyphVertex] {
        &self.vertices
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [GlyphVertex] {
        &mut self.vertices
    }

    /// Iterates over all vertices.
    pub fn iter(&self) -> core::slice::Iter<'_, GlyphVertex> {
        self.vertices.iter()
    }

    /// Returns the number of vertices that carry geometry.
    pub fn depictable_count(&self) -> usize {
        self.vertices.iter().filter(|vertex| !vertex.is_zero()).count()
    }

    /// Resizes the buffer, zero-filling new vertices.
    pub fn resize(&mut self, len: usize) {
        self.vertices.resize(len, GlyphVertex::ZERO);
    }

    /// Zeroes the vertices in `range`, clamped to the buffer.
    pub fn clear_range(&mut self, range: Range<usize>) {
        let end = range.end.min(self.vertices.len());
        let start = range.start.min(end);
        self.vertices[start..end].fill(GlyphVertex::ZERO);
    }

    /// Appends the vertices of `other`.
    ///
    /// Flattened arrays obtained before the call are stale afterwards.
    pub fn concat(&mut self, other: &Self) {
        self.vertices.extend_from_slice(&other.vertices);
    }

    /// Splits the vertices into parallel flat arrays for upload.
    pub fn flatten(&self) -> FlatVertices {
        let len = self.vertices.len();
        let mut flat = FlatVertices {
            origins: Vec::with_capacity(len * 3),
            tangents: Vec::with_capacity(len * 3),
            ups: Vec::with_capacity(len * 3),
            uv_rects: Vec::with_capacity(len * 4),
        };
        for vertex in &self.vertices {
            flat.origins.extend_from_slice(&vertex.origin.to_array());
            flat.tangents.extend_from_slice(&vertex.tangent.to_array());
            flat.ups.extend_from_slice(&vertex.up.to_array());
            flat.uv_rects.extend_from_slice(&vertex.uv_rect);
        }
        flat
    }

    /// Returns the interleaved vertex records as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl<'a> IntoIterator for &'a GlyphVertexBuffer {
    type Item = &'a GlyphVertex;
    type IntoIter = core::slice::Iter<'a, GlyphVertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{GlyphVertex, GlyphVertexBuffer};
    use glam::Vec3;

    fn vertex(x: f32) -> GlyphVertex {
        GlyphVertex {
            origin: Vec3::new(x, 1.0, 2.0),
            tangent: Vec3::new(3.0, 0.0, 0.0),
            up: Vec3::new(0.0, 4.0, 0.0),
            uv_rect: [0.1, 0.2, 0.3, 0.4],
        }
    }

    #[test]
    fn new_buffer_is_zeroed() {
        let buffer = GlyphVertexBuffer::new(3);
        assert_eq!(buffer.len(), 3);
        assert!(buffer.iter().all(GlyphVertex::is_zero));
        assert_eq!(buffer.depictable_count(), 0);
    }

    #[test]
    fn concat_appends() {
        let mut a = GlyphVertexBuffer::new(1);
        *a.get_mut(0).unwrap() = vertex(1.0);
        let mut b = GlyphVertexBuffer::new(2);
        *b.get_mut(1).unwrap() = vertex(2.0);

        a.concat(&b);
        assert_eq!(a.len(), 3);
        assert_eq!(a.get(0), Some(&vertex(1.0)));
        assert!(a.get(1).unwrap().is_zero());
        assert_eq!(a.get(2), Some(&vertex(2.0)));
    }

    #[test]
    fn flatten_uses_component_strides() {
        let mut buffer = GlyphVertexBuffer::new(2);
        *buffer.get_mut(1).unwrap() = vertex(5.0);

        let flat = buffer.flatten();
        assert_eq!(flat.origins.len(), 6);
        assert_eq!(flat.uv_rects.len(), 8);
        assert_eq!(&flat.origins[3..6], &[5.0, 1.0, 2.0]);
        assert_eq!(&flat.tangents[3..6], &[3.0, 0.0, 0.0]);
        assert_eq!(&flat.ups[3..6], &[0.0, 4.0, 0.0]);
        assert_eq!(&flat.uv_rects[4..8], &[0.1, 0.2, 0.3, 0.4]);
        assert_eq!(&flat.origins[0..3], &[0.0; 3]);
    }

    #[test]
    fn bytes_are_interleaved_records() {
        let buffer = GlyphVertexBuffer::new(2);
        assert_eq!(buffer.as_bytes().len(), 2 * 13 * 4);
    }

    #[test]
    fn clear_range_is_clamped() {
        let mut buffer = GlyphVertexBuffer::new(3);
        for index in 0..3 {
            *buffer.get_mut(index).unwrap() = vertex(index as f32);
        }
        buffer.clear_range(1..10);
        assert_eq!(buffer.depictable_count(), 1);
        assert!(!buffer.get(0).unwrap().is_zero());
    }
}
