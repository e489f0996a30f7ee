// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Laying out a request's text as glyph vertices.

mod align;
mod elide;
mod fragment;
mod line_break;
mod transform;

use alloc::vec::Vec;
use core::fmt;

use glam::Vec2;
use glyph_font::FontMetrics;

use self::fragment::CharMetrics;
use self::line_break::{BreakParams, LineLayout};
use crate::{Elide, GlyphVertexBuffer, LayoutRequest, SharedText};

/// A contract violation detected before anything was laid out.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TypesetError {
    /// The request is not bound to a font.
    MissingFont,
    /// Elision was requested without a line width to elide to.
    EmptyLineWidthWithElide,
}

impl fmt::Display for TypesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFont => write!(f, "layout request has no font"),
            Self::EmptyLineWidthWithElide => {
                write!(f, "elision requires a line width, found NaN")
            }
        }
    }
}

impl core::error::Error for TypesetError {}

/// Lays out [`LayoutRequest`]s into a [`GlyphVertexBuffer`].
///
/// The typesetter keeps scratch buffers between passes; reuse one instance to avoid
/// reallocating them for every request.
#[derive(Default)]
pub struct Typesetter {
    chars: Vec<char>,
    metrics: CharMetrics,
}

impl Typesetter {
    /// Creates a new typesetter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out `request`, writing the vertex of its character `i` to `begin + i`.
    ///
    /// The buffer grows if it is too small. On return the request holds the laid out
    /// lines and the transformed extent, which is also returned. Eliding text replaces
    /// the content of the request's shared text buffer.
    pub fn typeset(
        &mut self,
        request: &mut LayoutRequest,
        vertices: &mut GlyphVertexBuffer,
        begin: usize,
    ) -> Result<Vec2, TypesetError> {
        let font = request.shared_font().ok_or(TypesetError::MissingFont)?;
        let options = request.options();
        let mode = options.elide;
        if mode != Elide::None && options.line_width.is_nan() {
            return Err(TypesetError::EmptyLineWidthWithElide);
        }

        let params = BreakParams {
            line_width: request.layout_line_width(),
            wrap: options.wraps(),
            single_line: mode != Elide::None,
        };
        let measure = params.wrap || params.single_line;
        let text = request.text().clone();

        // Earlier passes may have covered more vertices than the current text.
        if let (Some(first), Some(last)) = (request.lines.first(), request.lines.last()) {
            vertices.clear_range(first.vertices.start..last.vertices.end);
        }

        let mut layout = self.break_lines(&font, &text, params, measure, vertices, begin);
        if mode != Elide::None && layout.width() > params.line_width {
            let ellipsis = request.ellipsis();
            let available = params.line_width - elide::ellipsis_width(&font, ellipsis);
            let elided = elide::elide(mode, &self.chars, &self.metrics, ellipsis, available);
            log::debug!(
                "elided {} characters to {} to fit a line width of {}",
                self.chars.len(),
                elided.chars().count(),
                params.line_width
            );
            vertices.clear_range(begin..begin + self.chars.len());
            text.set_text(elided);
            layout = self.break_lines(&font, &text, params, measure, vertices, begin);
        }

        let options = request.options();
        let end = begin + self.chars.len();
        let written = &mut vertices.as_mut_slice()[begin..end];
        align::align(&layout, options.alignment, written, begin);
        align::anchor(&mut layout, options.line_anchor, &font, written);
        let matrix = request.transform();
        transform::transform(&matrix, written, &layout.depicted);

        let height = layout.lines.len() as f32 * font.line_height();
        let extent = transform::extent(&matrix, layout.width(), height);
        log::trace!(
            "typeset {} characters into {} lines, extent {extent}",
            self.chars.len(),
            layout.lines.len()
        );
        request.lines = layout.lines;
        request.extent = extent;
        Ok(extent)
    }

    /// Lays out `request` if [`needs_typesetting`](LayoutRequest::needs_typesetting)
    /// and resets its alterations afterwards.
    ///
    /// Returns the new extent, or `None` if nothing had to be done.
    pub fn update(
        &mut self,
        request: &mut LayoutRequest,
        vertices: &mut GlyphVertexBuffer,
        begin: usize,
    ) -> Result<Option<Vec2>, TypesetError> {
        if !request.needs_typesetting() {
            return Ok(None);
        }
        let extent = self.typeset(request, vertices, begin)?;
        request.reset_alterations();
        Ok(Some(extent))
    }

    /// Reads the text, measures it and breaks it into lines, writing vertices from
    /// `begin` on.
    fn break_lines(
        &mut self,
        font: &FontMetrics,
        text: &SharedText,
        params: BreakParams,
        measure: bool,
        vertices: &mut GlyphVertexBuffer,
        begin: usize,
    ) -> LineLayout {
        let line_feed = {
            let buffer = text.borrow();
            self.chars.clear();
            self.chars.extend(buffer.chars());
            buffer.line_feed()
        };
        let end = begin + self.chars.len();
        if vertices.len() < end {
            log::debug!("growing vertex buffer from {} to {end}", vertices.len());
            vertices.resize(end);
        }
        vertices.clear_range(begin..end);

        self.metrics = CharMetrics::new(font, &self.chars);
        let fragments = fragment::fragment(font, &self.chars, line_feed, &self.metrics, measure);
        line_break::break_lines(
            font,
            &self.chars,
            &self.metrics,
            &fragments,
            params,
            &mut vertices.as_mut_slice()[begin..end],
            begin,
        )
    }
}

impl fmt::Debug for Typesetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typesetter").finish_non_exhaustive()
    }
}
