// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout requests: text bound to a font plus the parameters to lay it out with.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use glam::{Mat4, Vec2};
use glyph_font::FontMetrics;

use crate::{
    Alignment, Elide, FontSizeUnit, LayoutOptions, LineAnchor, Placement, PlacementContext,
    SharedText,
};

/// Which aspects of a request changed since its alterations were last reset.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Alterations {
    /// A typesetting parameter (font, alignment, anchor, width, wrap, elision) changed.
    pub typesetting: bool,
    /// A different text buffer was bound.
    pub text: bool,
    /// The color changed.
    pub color: bool,
    /// The placement or font scale changed.
    pub static_transform: bool,
    /// The viewport or camera dependent transform changed.
    pub dynamic_transform: bool,
}

impl Alterations {
    const ALL: Self = Self {
        typesetting: true,
        text: true,
        color: true,
        static_transform: true,
        dynamic_transform: true,
    };

    /// Returns `true` if anything changed.
    pub fn any(self) -> bool {
        self.typesetting
            || self.text
            || self.color
            || self.static_transform
            || self.dynamic_transform
    }

    /// Returns `true` if a change requires the text to be laid out again.
    pub fn affects_layout(self) -> bool {
        self.typesetting || self.text || self.static_transform || self.dynamic_transform
    }

    /// Clears all flags.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One laid out line.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct TypesetLine {
    /// Range of vertex indices covered by the line, excluding a terminating line feed.
    pub vertices: Range<usize>,
    /// Advance of the line, excluding trailing glyphs that are not depictable.
    pub advance: f32,
    /// Vertical position of the baseline, after anchoring and before transformation.
    pub baseline: f32,
}

/// Text bound to a font, together with everything needed to lay it out.
///
/// Setters flag the request's [`Alterations`]; a renderer checks
/// [`needs_typesetting`](Self::needs_typesetting) each frame, hands the request to the
/// [`Typesetter`](crate::Typesetter) and finally calls
/// [`reset_alterations`](Self::reset_alterations).
#[derive(Clone, Debug)]
pub struct LayoutRequest {
    text: SharedText,
    font: Option<Rc<FontMetrics>>,
    options: LayoutOptions,
    font_size: Option<f32>,
    font_size_unit: FontSizeUnit,
    color: [f32; 4],
    placement: Placement,
    context: Option<PlacementContext>,
    static_transform: Mat4,
    dynamic_transform: Mat4,
    alterations: Alterations,
    text_revision: Option<u64>,
    pub(crate) extent: Vec2,
    pub(crate) lines: Vec<TypesetLine>,
}

impl LayoutRequest {
    /// Creates a request for `text` without a font.
    pub fn new(text: SharedText) -> Self {
        Self {
            text,
            font: None,
            options: LayoutOptions::default(),
            font_size: None,
            font_size_unit: FontSizeUnit::default(),
            color: [0.0, 0.0, 0.0, 1.0],
            placement: Placement::default(),
            context: None,
            static_transform: Mat4::IDENTITY,
            dynamic_transform: Mat4::IDENTITY,
            alterations: Alterations::ALL,
            text_revision: None,
            extent: Vec2::ZERO,
            lines: Vec::new(),
        }
    }

    /// Creates a request for `text` laid out with `font`.
    pub fn with_font(text: SharedText, font: Rc<FontMetrics>) -> Self {
        let mut request = Self::new(text);
        request.set_font(Some(font));
        request
    }

    /// Returns the bound text.
    pub fn text(&self) -> &SharedText {
        &self.text
    }

    /// Binds another text buffer.
    pub fn set_text(&mut self, text: SharedText) {
        if !self.text.ptr_eq(&text) {
            self.text = text;
            self.text_revision = None;
            self.alterations.text = true;
            self.alterations.typesetting = true;
        }
    }

    /// Returns the bound font.
    pub fn font(&self) -> Option<&FontMetrics> {
        self.font.as_deref()
    }

    pub(crate) fn shared_font(&self) -> Option<Rc<FontMetrics>> {
        self.font.clone()
    }

    /// Binds a font, or unbinds it with `None`.
    pub fn set_font(&mut self, font: Option<Rc<FontMetrics>>) {
        let same = match (&self.font, &font) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        if !same {
            self.font = font;
            self.alterations.typesetting = true;
            self.refresh_static_transform();
        }
    }

    /// Returns `true` if the request is bound to a font with a non-empty glyph atlas
    /// and has text to lay out.
    pub fn is_valid(&self) -> bool {
        self.font().is_some_and(FontMetrics::is_valid) && !self.text.borrow().is_empty()
    }

    /// Returns the typesetting options.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Replaces all typesetting options at once.
    pub fn set_options(&mut self, options: LayoutOptions) {
        if !self.options.same_as(&options) {
            self.options = options;
            self.alterations.typesetting = true;
        }
    }

    fn update_options(&mut self, update: impl FnOnce(&mut LayoutOptions)) {
        let mut options = self.options.clone();
        update(&mut options);
        self.set_options(options);
    }

    /// Returns the horizontal alignment.
    pub fn alignment(&self) -> Alignment {
        self.options.alignment
    }

    /// Sets the horizontal alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.update_options(|options| options.alignment = alignment);
    }

    /// Returns the line anchor.
    pub fn line_anchor(&self) -> LineAnchor {
        self.options.line_anchor
    }

    /// Sets the line anchor.
    pub fn set_line_anchor(&mut self, line_anchor: LineAnchor) {
        self.update_options(|options| options.line_anchor = line_anchor);
    }

    /// Returns the maximum line width in font size units; `NaN` means unconstrained.
    pub fn line_width(&self) -> f32 {
        self.options.line_width
    }

    /// Sets the maximum line width in font size units; `NaN` means unconstrained.
    pub fn set_line_width(&mut self, line_width: f32) {
        self.update_options(|options| options.line_width = line_width);
    }

    /// Returns `true` if word wrapping is requested. Elision takes precedence.
    pub fn wrap(&self) -> bool {
        self.options.wrap
    }

    /// Enables or disables word wrapping.
    pub fn set_wrap(&mut self, wrap: bool) {
        self.update_options(|options| options.wrap = wrap);
    }

    /// Returns the elision mode.
    pub fn elide(&self) -> Elide {
        self.options.elide
    }

    /// Sets the elision mode.
    pub fn set_elide(&mut self, elide: Elide) {
        self.update_options(|options| options.elide = elide);
    }

    /// Returns the text inserted where characters are elided.
    pub fn ellipsis(&self) -> &str {
        &self.options.ellipsis
    }

    /// Sets the text inserted where characters are elided.
    pub fn set_ellipsis(&mut self, ellipsis: impl Into<String>) {
        let ellipsis = ellipsis.into();
        self.update_options(|options| options.ellipsis = ellipsis);
    }

    /// Returns the font size, or `None` if the font's own size is used.
    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    /// Sets the font size in [`font_size_unit`](Self::font_size_unit)s.
    pub fn set_font_size(&mut self, font_size: Option<f32>) {
        if font_size != self.font_size {
            self.font_size = font_size;
            // The line width is given in font size units.
            self.alterations.typesetting = true;
            self.refresh_static_transform();
        }
    }

    /// Returns the unit of the font size.
    pub fn font_size_unit(&self) -> FontSizeUnit {
        self.font_size_unit
    }

    /// Sets the unit of the font size.
    pub fn set_font_size_unit(&mut self, unit: FontSizeUnit) {
        if unit != self.font_size_unit {
            self.font_size_unit = unit;
            self.refresh_dynamic_transform();
        }
    }

    /// Returns the ratio between the font size and the font's own size.
    pub fn font_scale(&self) -> f32 {
        match (self.font_size, self.font()) {
            (Some(size), Some(font)) if font.size > 0.0 => size / font.size,
            _ => 1.0,
        }
    }

    /// Returns the line width converted to font units.
    pub fn layout_line_width(&self) -> f32 {
        self.options.line_width / self.font_scale()
    }

    /// Returns the RGBA color.
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Sets the RGBA color.
    pub fn set_color(&mut self, color: [f32; 4]) {
        if color != self.color {
            self.color = color;
            self.alterations.color = true;
        }
    }

    /// Returns the placement strategy.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Sets the placement strategy.
    pub fn set_placement(&mut self, placement: Placement) {
        if placement != self.placement {
            self.placement = placement;
            self.refresh_static_transform();
            self.refresh_dynamic_transform();
        }
    }

    /// Places the text with an explicit matrix.
    pub fn set_transform(&mut self, transform: Mat4) {
        self.set_placement(Placement::Custom(transform));
    }

    /// Returns the transform built from placement and font scale.
    pub fn static_transform(&self) -> Mat4 {
        self.static_transform
    }

    /// Returns the viewport and camera dependent transform.
    pub fn dynamic_transform(&self) -> Mat4 {
        self.dynamic_transform
    }

    /// Returns the complete transform applied to laid out glyphs.
    pub fn transform(&self) -> Mat4 {
        self.dynamic_transform * self.static_transform
    }

    /// Refreshes the dynamic transform for the current viewport and camera.
    ///
    /// The request is only flagged if the resulting transform changed.
    pub fn update_dynamic_transform(&mut self, context: &PlacementContext) {
        self.context = Some(*context);
        self.refresh_dynamic_transform();
    }

    fn refresh_static_transform(&mut self) {
        let transform = self.placement.static_transform(self.font_scale());
        if transform != self.static_transform {
            self.static_transform = transform;
            self.alterations.static_transform = true;
        }
    }

    fn refresh_dynamic_transform(&mut self) {
        let transform = match &self.context {
            Some(context) => self
                .placement
                .dynamic_transform(self.font_size_unit, context),
            None => Mat4::IDENTITY,
        };
        if transform != self.dynamic_transform {
            self.dynamic_transform = transform;
            self.alterations.dynamic_transform = true;
        }
    }

    /// Returns the character at `index`.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.text.borrow().char_at(index)
    }

    /// Returns the advance of the character at `index`, zero if unknown or without font.
    pub fn advance(&self, index: usize) -> f32 {
        match (self.font(), self.char_at(index)) {
            (Some(font), Some(c)) => font.advance(c),
            _ => 0.0,
        }
    }

    /// Returns the kerning between the character at `index` and its predecessor.
    pub fn kerning_before(&self, index: usize) -> f32 {
        match index.checked_sub(1) {
            Some(previous) => self.kerning_after(previous),
            None => 0.0,
        }
    }

    /// Returns the kerning between the character at `index` and its successor.
    pub fn kerning_after(&self, index: usize) -> f32 {
        let Some(font) = self.font() else {
            return 0.0;
        };
        let text = self.text.borrow();
        let mut chars = text.chars().skip(index);
        match (chars.next(), chars.next()) {
            (Some(first), Some(second)) => font.kerning(first, second),
            _ => 0.0,
        }
    }

    /// Returns the alterations since the last reset.
    pub fn alterations(&self) -> Alterations {
        self.alterations
    }

    /// Returns `true` if the text buffer changed since the last reset, no matter
    /// which request sharing it made the change.
    pub fn text_changed(&self) -> bool {
        self.text_revision != Some(self.text.borrow().revision())
    }

    /// Returns `true` if the text must be laid out again.
    pub fn needs_typesetting(&self) -> bool {
        self.alterations.affects_layout() || self.text_changed()
    }

    /// Clears all alterations and remembers the current text revision.
    ///
    /// The text buffer's own dirty flag is left alone, as other requests may share it.
    pub fn reset_alterations(&mut self) {
        self.alterations.reset();
        self.text_revision = Some(self.text.borrow().revision());
    }

    /// Returns the transformed width and height of the laid out text.
    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    /// Returns the lines of the last layout pass.
    pub fn lines(&self) -> &[TypesetLine] {
        &self.lines
    }
}
