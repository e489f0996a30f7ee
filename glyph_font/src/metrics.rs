// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use glam::Vec2;
use hashbrown::HashMap;

use crate::GlyphMetrics;

/// Padding applied uniformly around every glyph's atlas sub-rectangle, in font units.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Padding {
    /// Padding above the glyph.
    pub top: f32,
    /// Padding right of the glyph.
    pub right: f32,
    /// Padding below the glyph.
    pub bottom: f32,
    /// Padding left of the glyph.
    pub left: f32,
}

impl Padding {
    /// Creates a padding from its four sides, in CSS order.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Error returned when a glyph is registered twice for the same codepoint.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DuplicateGlyph(pub char);

impl fmt::Display for DuplicateGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "glyph for {:?} (U+{:04X}) already present", self.0, self.0 as u32)
    }
}

impl core::error::Error for DuplicateGlyph {}

/// Face-wide measures and per-codepoint glyph metrics of a font.
///
/// All measures are in points, which double as the font units glyph metrics are
/// expressed in.
#[derive(Clone, Debug)]
pub struct FontMetrics {
    name: String,
    /// Nominal size of the face.
    pub size: f32,
    /// Distance from the top of a line to the baseline.
    pub base: f32,
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyphs, usually negative.
    pub descent: f32,
    /// Extra space between consecutive lines.
    pub line_gap: f32,
    /// Padding baked into every glyph's atlas sub-rectangle.
    pub padding: Padding,
    /// Size of the glyph texture atlas in pixels.
    pub atlas_extent: Vec2,
    glyphs: HashMap<char, GlyphMetrics>,
    missing: GlyphMetrics,
}

impl FontMetrics {
    /// Creates an empty font with the given name and nominal size.
    ///
    /// Ascent and base line default to `size`, descent and line gap to zero.
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            size,
            base: size,
            ascent: size,
            descent: 0.0,
            line_gap: 0.0,
            padding: Padding::default(),
            atlas_extent: Vec2::ZERO,
            glyphs: HashMap::new(),
            missing: GlyphMetrics::new('\0'),
        }
    }

    /// Returns the face name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the face name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the distance between the baselines of two consecutive lines.
    pub fn line_height(&self) -> f32 {
        self.size + self.line_gap
    }

    /// Sets the distance between consecutive baselines by adjusting the line gap.
    pub fn set_line_height(&mut self, line_height: f32) {
        debug_assert!(
            self.size > 0.0,
            "font size must be positive before setting a line height"
        );
        self.line_gap = line_height - self.size;
    }

    /// Returns `true` if the font has a positive size and a non-empty glyph atlas.
    pub fn is_valid(&self) -> bool {
        self.size > 0.0 && self.atlas_extent.x > 0.0 && self.atlas_extent.y > 0.0
    }

    /// Registers a glyph.
    ///
    /// Fails if a glyph for the same codepoint is already present; the existing
    /// glyph is left untouched.
    pub fn add_glyph(&mut self, glyph: GlyphMetrics) -> Result<(), DuplicateGlyph> {
        let codepoint = glyph.codepoint();
        if self.glyphs.contains_key(&codepoint) {
            return Err(DuplicateGlyph(codepoint));
        }
        self.glyphs.insert(codepoint, glyph);
        Ok(())
    }

    /// Records a kerning pair.
    ///
    /// Returns `false`, and records nothing, if `first` has no glyph.
    pub fn add_kerning(&mut self, first: char, second: char, amount: f32) -> bool {
        match self.glyphs.get_mut(&first) {
            Some(glyph) => {
                glyph.set_kerning(second, amount);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the font has a glyph for `codepoint`.
    pub fn contains(&self, codepoint: char) -> bool {
        self.glyphs.contains_key(&codepoint)
    }

    /// Returns the metrics for `codepoint`.
    ///
    /// Unknown codepoints map to a zero-advance placeholder that is never depictable.
    pub fn glyph(&self, codepoint: char) -> &GlyphMetrics {
        self.glyphs.get(&codepoint).unwrap_or(&self.missing)
    }

    /// Returns the advance of `codepoint`, or zero if unknown.
    pub fn advance(&self, codepoint: char) -> f32 {
        self.glyph(codepoint).advance
    }

    /// Returns the kerning between `first` and an immediately following `second`.
    ///
    /// Unknown glyphs and pairs yield zero.
    pub fn kerning(&self, first: char, second: char) -> f32 {
        self.glyphs
            .get(&first)
            .map_or(0.0, |glyph| glyph.kerning(second))
    }

    /// Returns the number of glyphs in the font.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Iterates over all glyphs in unspecified order.
    pub fn glyphs(&self) -> impl Iterator<Item = &GlyphMetrics> + '_ {
        self.glyphs.values()
    }
}
