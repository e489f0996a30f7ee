// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use glyph_dev::uniform_font;
use glyph_font::FontMetrics;

use crate::{GlyphVertexBuffer, LayoutRequest, SharedText, Typesetter};

/// Advance of every glyph of the default test font.
pub(crate) const ADVANCE: f32 = 10.0;
/// Line height, size and base of the default test font.
pub(crate) const LINE_HEIGHT: f32 = 12.0;

pub(crate) struct TestEnv {
    font: Rc<FontMetrics>,
    typesetter: Typesetter,
}

impl TestEnv {
    /// Uses a font where every glyph advances by [`ADVANCE`] and vertex origins sit on the
    /// pen position.
    pub(crate) fn new() -> Self {
        Self::with_font(uniform_font(ADVANCE, LINE_HEIGHT))
    }

    /// Uses the monospaced sample font, which has bearings, padding and kerning pairs.
    pub(crate) fn mono() -> Self {
        let font = glyph_dev::mono_font().expect("the sample font parses");
        Self::with_font(font.into_metrics())
    }

    pub(crate) fn with_font(font: FontMetrics) -> Self {
        Self {
            font: Rc::new(font),
            typesetter: Typesetter::new(),
        }
    }

    pub(crate) fn font(&self) -> &Rc<FontMetrics> {
        &self.font
    }

    pub(crate) fn request(&self, text: &str) -> LayoutRequest {
        LayoutRequest::with_font(SharedText::new(text), self.font.clone())
    }

    pub(crate) fn typesetter(&mut self) -> &mut Typesetter {
        &mut self.typesetter
    }

    /// Lays out `request` into a fresh buffer sized for it.
    pub(crate) fn typeset(&mut self, request: &mut LayoutRequest) -> GlyphVertexBuffer {
        let mut vertices = GlyphVertexBuffer::for_request(request);
        self.typesetter
            .update(request, &mut vertices, 0)
            .expect("request is typesettable");
        vertices
    }
}
