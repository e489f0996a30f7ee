// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glyph_font::FontMetrics;

use super::line_break::LineLayout;
use crate::{Alignment, GlyphVertex, LineAnchor};

/// Shifts each line horizontally according to `alignment`.
///
/// `vertices` is index-aligned with the laid out characters, which start at `begin`
/// in the vertex buffer.
pub(crate) fn align(
    layout: &LineLayout,
    alignment: Alignment,
    vertices: &mut [GlyphVertex],
    begin: usize,
) {
    if alignment == Alignment::Left {
        return;
    }
    for line in &layout.lines {
        let offset = alignment.offset(line.advance);
        for index in line.vertices.start - begin..line.vertices.end - begin {
            if layout.depicted[index] {
                vertices[index].origin.x += offset;
            }
        }
    }
}

/// Shifts the whole text vertically so that `anchor` lies at the origin.
pub(crate) fn anchor(
    layout: &mut LineLayout,
    anchor: LineAnchor,
    font: &FontMetrics,
    vertices: &mut [GlyphVertex],
) {
    let offset = anchor.offset(font);
    if offset == 0.0 {
        return;
    }
    for line in &mut layout.lines {
        line.baseline += offset;
    }
    for (vertex, depicted) in vertices.iter_mut().zip(&layout.depicted) {
        if *depicted {
            vertex.origin.y += offset;
        }
    }
}
