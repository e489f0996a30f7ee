// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Glyph Dev
//!
//! This crate provides fonts and text samples for developing Glyph Layout.

use glyph_font::{BitmapFont, FontMetrics, GlyphMetrics, ParseFontError, Vec2};

/// The BMFont descriptor of a monospaced sample font.
pub const MONO_DESCRIPTOR: &str = include_str!("../assets/fonts/mono.fnt");

/// Parses [`MONO_DESCRIPTOR`].
pub fn mono_font() -> Result<BitmapFont, ParseFontError> {
    BitmapFont::parse(MONO_DESCRIPTOR)
}

/// Creates a font where every glyph advances by the same amount.
///
/// The font covers printable ASCII and `'…'`. Every glyph is depictable except the space,
/// has no bearing and spans `advance` by `line_height`, so vertex origins coincide with
/// pen positions on the baseline. No kerning pairs are registered.
pub fn uniform_font(advance: f32, line_height: f32) -> FontMetrics {
    let mut font = FontMetrics::new("Uniform", line_height);
    font.base = line_height;
    font.ascent = line_height;
    font.descent = 0.0;
    font.atlas_extent = Vec2::new(256.0, 256.0);

    let cell = Vec2::splat(1.0 / 16.0);
    for (index, codepoint) in (' '..='~').chain(['…']).enumerate() {
        let mut glyph = GlyphMetrics::new(codepoint);
        glyph.advance = advance;
        if codepoint != ' ' {
            glyph.extent = Vec2::new(advance, line_height);
            glyph.bearing = Vec2::new(0.0, line_height);
            glyph.atlas_origin = Vec2::new((index % 16) as f32, (index / 16) as f32) * cell;
            glyph.atlas_extent = cell;
        }
        let added = font.add_glyph(glyph);
        debug_assert!(added.is_ok(), "codepoints are unique");
    }
    font
}

/// A sample to be used for development.
#[derive(Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The text of the sample.
    pub text: &'static str,
}

/// A collection of text samples.
#[derive(Debug)]
pub struct TextSamples {
    /// A paragraph of Latin prose with punctuation and brackets.
    pub latin: Sample,
    /// A few words separated by line feeds.
    pub lines: Sample,
}

impl TextSamples {
    /// Creates a new collection of text samples.
    pub const fn new() -> Self {
        let latin = include_str!("../assets/text_samples/latin.txt");
        let lines = include_str!("../assets/text_samples/lines.txt");
        Self {
            latin: Sample {
                name: "latin",
                text: latin,
            },
            lines: Sample {
                name: "lines",
                text: lines,
            },
        }
    }
}

impl Default for TextSamples {
    fn default() -> Self {
        Self::new()
    }
}
