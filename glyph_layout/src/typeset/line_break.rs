// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line breaking and glyph vertex synthesis.

use alloc::vec;
use alloc::vec::Vec;

use glam::{Vec2, Vec3};
use glyph_font::FontMetrics;

use super::fragment::{CharMetrics, Fragment, FragmentKind};
use crate::{GlyphVertex, TypesetLine};

#[derive(Copy, Clone, Debug)]
pub(crate) struct BreakParams {
    /// Maximum line advance in font units.
    pub(crate) line_width: f32,
    /// Break lines that would exceed `line_width`.
    pub(crate) wrap: bool,
    /// Lay everything out on one line, treating line feeds as ordinary glyphs.
    pub(crate) single_line: bool,
}

/// Lines and glyph coverage produced by one layout pass.
#[derive(Clone, Debug, Default)]
pub(crate) struct LineLayout {
    pub(crate) lines: Vec<TypesetLine>,
    /// Whether the character at each index was given a vertex.
    pub(crate) depicted: Vec<bool>,
}

impl LineLayout {
    /// Returns the advance of the widest line.
    pub(crate) fn width(&self) -> f32 {
        self.lines
            .iter()
            .map(|line| line.advance)
            .max_by(f32::total_cmp)
            .unwrap_or(0.0)
    }
}

struct LineState {
    /// Index of the first character on the line.
    start: usize,
    pen: Vec2,
    /// Pen position right after the last depictable glyph on the line.
    advance: f32,
}

struct BreakLines<'a> {
    font: &'a FontMetrics,
    chars: &'a [char],
    metrics: &'a CharMetrics,
    /// Vertices of this text, index-aligned with `chars`.
    vertices: &'a mut [GlyphVertex],
    /// Index of the first vertex within the whole buffer.
    begin: usize,
    line: LineState,
    layout: LineLayout,
}

impl<'a> BreakLines<'a> {
    fn new(
        font: &'a FontMetrics,
        chars: &'a [char],
        metrics: &'a CharMetrics,
        vertices: &'a mut [GlyphVertex],
        begin: usize,
    ) -> Self {
        Self {
            font,
            chars,
            metrics,
            vertices,
            begin,
            line: LineState {
                start: 0,
                pen: Vec2::ZERO,
                advance: 0.0,
            },
            layout: LineLayout {
                lines: Vec::new(),
                depicted: vec![false; chars.len()],
            },
        }
    }

    /// Writes the vertex of the character at `index` and moves the pen past it.
    fn place(&mut self, index: usize) {
        let glyph = self.font.glyph(self.chars[index]);
        let pen = self.line.pen;
        if glyph.is_depictable() {
            let padding = &self.font.padding;
            self.vertices[index] = GlyphVertex {
                origin: Vec3::new(
                    pen.x + glyph.bearing.x - padding.left,
                    pen.y + glyph.bearing.y - glyph.extent.y + padding.top,
                    0.0,
                ),
                tangent: Vec3::new(glyph.extent.x, 0.0, 0.0),
                up: Vec3::new(0.0, glyph.extent.y, 0.0),
                uv_rect: [
                    glyph.atlas_origin.x,
                    glyph.atlas_origin.y,
                    glyph.atlas_origin.x + glyph.atlas_extent.x,
                    glyph.atlas_origin.y + glyph.atlas_extent.y,
                ],
            };
            self.layout.depicted[index] = true;
            self.line.advance = pen.x + glyph.advance;
        }
        self.line.pen.x += self.metrics.advances[index] + self.metrics.kernings[index];
    }

    /// Ends the current line before `end` and starts the next one at `next_start`.
    fn commit_line(&mut self, end: usize, next_start: usize) {
        self.layout.lines.push(TypesetLine {
            vertices: self.begin + self.line.start..self.begin + end,
            advance: self.line.advance,
            baseline: self.line.pen.y,
        });
        self.line = LineState {
            start: next_start,
            pen: Vec2::new(0.0, self.line.pen.y - self.font.line_height()),
            advance: 0.0,
        };
    }

    /// Places a fragment that is wider than a line on its own, breaking before every
    /// character that would overflow unless it is the first one on its line.
    fn place_emergency(&mut self, fragment: &Fragment, line_width: f32) {
        for index in fragment.range.clone() {
            let advance = self.metrics.advances[index];
            if self.line.pen.x > 0.0 && self.line.pen.x + advance > line_width {
                self.commit_line(index, index);
            }
            self.place(index);
        }
    }

    fn place_all(&mut self, fragment: &Fragment) {
        for index in fragment.range.clone() {
            self.place(index);
        }
    }

    fn run(mut self, fragments: &[Fragment], params: BreakParams) -> LineLayout {
        if self.chars.is_empty() {
            return self.layout;
        }

        // Set when a word already accounted for the delimiter that follows it.
        let mut carried = false;
        for (index, fragment) in fragments.iter().enumerate() {
            if fragment.kind == FragmentKind::LineFeed && !params.single_line {
                self.commit_line(fragment.range.start, fragment.range.end);
                carried = false;
                continue;
            }
            if !params.wrap || fragment.hangs || core::mem::take(&mut carried) {
                self.place_all(fragment);
                continue;
            }

            // Width of a depictable delimiter right after a word, including the kerning
            // between the two.
            let lookahead = match fragments.get(index + 1) {
                Some(next)
                    if fragment.kind == FragmentKind::Word
                        && next.kind == FragmentKind::Delimiter
                        && !next.hangs =>
                {
                    Some(self.metrics.kernings[fragment.range.end - 1] + next.width)
                }
                _ => None,
            };
            let pen = self.line.pen.x;
            if pen > 0.0 && pen + fragment.width + lookahead.unwrap_or(0.0) > params.line_width {
                self.commit_line(fragment.range.start, fragment.range.start);
            }
            // The delimiter only rides along when both fit; otherwise it is measured on
            // its own and may start the next line.
            carried = lookahead
                .is_some_and(|width| self.line.pen.x + fragment.width + width <= params.line_width);
            if fragment.width > params.line_width {
                self.place_emergency(fragment, params.line_width);
            } else {
                self.place_all(fragment);
            }
        }
        self.commit_line(self.chars.len(), self.chars.len());
        self.layout
    }
}

/// Lays out `chars`, writing their vertices into `vertices` (index-aligned with `chars`).
pub(crate) fn break_lines(
    font: &FontMetrics,
    chars: &[char],
    metrics: &CharMetrics,
    fragments: &[Fragment],
    params: BreakParams,
    vertices: &mut [GlyphVertex],
    begin: usize,
) -> LineLayout {
    BreakLines::new(font, chars, metrics, vertices, begin).run(fragments, params)
}
