// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::Vec2;
use hashbrown::HashMap;

/// Metrics of a single glyph, keyed by its codepoint.
///
/// All distances are in font units, i.e. the same units as the owning
/// [`FontMetrics::size`](crate::FontMetrics::size).
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphMetrics {
    codepoint: char,
    /// Horizontal pen movement after the glyph.
    pub advance: f32,
    /// Offset of the glyph's visual box from the pen position on the baseline.
    ///
    /// The y component points up and locates the top edge of the box.
    pub bearing: Vec2,
    /// Width and height of the glyph's visual box.
    pub extent: Vec2,
    /// Lower left corner of the glyph's sub-rectangle in the atlas, normalized to `[0, 1]`.
    pub atlas_origin: Vec2,
    /// Size of the glyph's sub-rectangle in the atlas, normalized to `[0, 1]`.
    pub atlas_extent: Vec2,
    kernings: HashMap<char, f32>,
}

impl GlyphMetrics {
    /// Creates metrics for `codepoint` with zero advance and no atlas region.
    pub fn new(codepoint: char) -> Self {
        Self {
            codepoint,
            advance: 0.0,
            bearing: Vec2::ZERO,
            extent: Vec2::ZERO,
            atlas_origin: Vec2::ZERO,
            atlas_extent: Vec2::ZERO,
            kernings: HashMap::new(),
        }
    }

    /// Returns the codepoint these metrics describe.
    pub fn codepoint(&self) -> char {
        self.codepoint
    }

    /// Returns `true` if the glyph covers a non-empty atlas region and therefore
    /// produces geometry when laid out.
    ///
    /// Spaces, control characters and unknown codepoints are not depictable; they
    /// only move the pen.
    pub fn is_depictable(&self) -> bool {
        self.atlas_extent.x > 0.0 && self.atlas_extent.y > 0.0
    }

    /// Returns the kerning applied when this glyph is immediately followed by `next`.
    pub fn kerning(&self, next: char) -> f32 {
        self.kernings.get(&next).copied().unwrap_or(0.0)
    }

    /// Records the kerning applied when this glyph is immediately followed by `next`.
    ///
    /// A later entry for the same pair replaces the earlier one.
    pub fn set_kerning(&mut self, next: char, amount: f32) {
        self.kernings.insert(next, amount);
    }

    /// Returns the number of kerning pairs starting with this glyph.
    pub fn kerning_count(&self) -> usize {
        self.kernings.len()
    }

    /// Iterates over all kerning pairs starting with this glyph.
    pub fn kernings(&self) -> impl Iterator<Item = (char, f32)> + '_ {
        self.kernings.iter().map(|(next, amount)| (*next, *amount))
    }
}

#[cfg(test)]
mod tests {
    use super::GlyphMetrics;
    use glam::Vec2;

    #[test]
    fn empty_atlas_region_is_not_depictable() {
        let mut glyph = GlyphMetrics::new(' ');
        glyph.advance = 4.0;
        assert!(!glyph.is_depictable());

        glyph.atlas_extent = Vec2::new(0.1, 0.0);
        assert!(!glyph.is_depictable());

        glyph.atlas_extent = Vec2::new(0.1, 0.2);
        assert!(glyph.is_depictable());
    }

    #[test]
    fn kerning_defaults_to_zero() {
        let mut glyph = GlyphMetrics::new('A');
        glyph.set_kerning('V', -1.5);
        assert_eq!(glyph.kerning('V'), -1.5);
        assert_eq!(glyph.kerning('W'), 0.0);

        glyph.set_kerning('V', -2.0);
        assert_eq!(glyph.kerning('V'), -2.0);
        assert_eq!(glyph.kerning_count(), 1);
    }
}
