// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout parameters.

use alloc::string::String;

use glyph_font::FontMetrics;

/// Horizontal alignment of each line relative to the request's origin.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Alignment {
    /// Lines start at the origin.
    #[default]
    Left,
    /// Lines are centered on the origin.
    Center,
    /// Lines end at the origin.
    Right,
}

impl Alignment {
    /// Returns the horizontal shift applied to a line of the given advance.
    pub fn offset(self, advance: f32) -> f32 {
        match self {
            Self::Left => 0.0,
            Self::Center => -advance * 0.5,
            Self::Right => -advance,
        }
    }
}

/// Vertical reference point of the text block that is placed at the request's origin.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LineAnchor {
    /// Top of the first line.
    Top,
    /// Ascent of the first line.
    Ascent,
    /// Middle of the first line's glyph box.
    Center,
    /// Baseline of the first line.
    #[default]
    Baseline,
    /// Descent of the first line.
    Descent,
    /// Bottom of the first line.
    Bottom,
}

impl LineAnchor {
    /// Returns the vertical shift applied to all glyphs for this anchor.
    pub fn offset(self, font: &FontMetrics) -> f32 {
        match self {
            Self::Baseline => 0.0,
            Self::Top => -font.base,
            Self::Bottom => font.base - font.line_height(),
            Self::Ascent => -font.ascent,
            Self::Descent => -font.descent,
            Self::Center => -(font.size * 0.5 + font.descent),
        }
    }
}

/// Where characters are removed when text is shortened to fit its line width.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Elide {
    /// Text is never shortened.
    #[default]
    None,
    /// Leading characters are replaced by the ellipsis.
    Left,
    /// Characters around the middle are replaced by the ellipsis.
    Middle,
    /// Trailing characters are replaced by the ellipsis.
    Right,
}

/// The unit a request's font size is given in.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FontSizeUnit {
    /// World space units.
    #[default]
    World,
    /// Screen pixels.
    Pixel,
}

/// Typesetting parameters of a request, bundled for configuration.
///
/// Applying options to a [`LayoutRequest`](crate::LayoutRequest) only flags it for
/// typesetting when something actually changed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    /// Horizontal alignment of each line.
    pub alignment: Alignment,
    /// Vertical reference point of the text block.
    pub line_anchor: LineAnchor,
    /// Maximum line width in font size units, `NaN` for unconstrained lines.
    pub line_width: f32,
    /// Whether lines wrap at word boundaries. Ignored while eliding.
    pub wrap: bool,
    /// Elision mode.
    pub elide: Elide,
    /// Text inserted where characters were elided.
    pub ellipsis: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            alignment: Alignment::default(),
            line_anchor: LineAnchor::default(),
            line_width: f32::NAN,
            wrap: false,
            elide: Elide::default(),
            ellipsis: String::from("..."),
        }
    }
}

impl LayoutOptions {
    /// Returns `true` if lines wrap, taking elision's precedence into account.
    pub fn wraps(&self) -> bool {
        self.wrap && self.elide == Elide::None && !self.line_width.is_nan()
    }

    /// Compares two option sets, treating `NaN` line widths as equal.
    pub(crate) fn same_as(&self, other: &Self) -> bool {
        let same_width = self.line_width == other.line_width
            || (self.line_width.is_nan() && other.line_width.is_nan());
        same_width
            && self.alignment == other.alignment
            && self.line_anchor == other.line_anchor
            && self.wrap == other.wrap
            && self.elide == other.elide
            && self.ellipsis == other.ellipsis
    }
}
