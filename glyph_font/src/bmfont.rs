// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of the line-oriented BMFont text descriptor.
//!
//! Each line holds one record: a tag followed by `key=value` attributes, where values
//! may be quoted. The records understood here are `info`, `common`, `page`, `char`
//! and `kerning`; the `chars` and `kernings` count records are accepted and ignored.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use glam::Vec2;

use crate::{DuplicateGlyph, FontMetrics, GlyphMetrics, Padding};

/// What went wrong while parsing a font descriptor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ParseFontErrorKind {
    /// A `char` record appeared before any `common` record, or the descriptor has none.
    MissingCommon,
    /// A required attribute is absent.
    MissingAttribute(&'static str),
    /// An attribute value could not be interpreted.
    InvalidValue(&'static str),
    /// The font size is zero.
    InvalidSize,
    /// Two `char` records describe the same codepoint.
    DuplicateGlyph(char),
}

/// An error that occurred while parsing a font descriptor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ParseFontError {
    kind: ParseFontErrorKind,
    line: usize,
}

impl ParseFontError {
    const fn new(kind: ParseFontErrorKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> ParseFontErrorKind {
        self.kind
    }

    /// Returns the 1-based line number where the error was detected.
    pub const fn line(self) -> usize {
        self.line
    }
}

impl fmt::Display for ParseFontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseFontErrorKind::MissingCommon => write!(f, "missing `common` record")?,
            ParseFontErrorKind::MissingAttribute(name) => {
                write!(f, "missing attribute `{name}`")?;
            }
            ParseFontErrorKind::InvalidValue(name) => {
                write!(f, "invalid value for attribute `{name}`")?;
            }
            ParseFontErrorKind::InvalidSize => write!(f, "font size must not be zero")?,
            ParseFontErrorKind::DuplicateGlyph(codepoint) => {
                write!(f, "{}", DuplicateGlyph(codepoint))?;
            }
        }
        write!(f, " on line {}", self.line)
    }
}

impl core::error::Error for ParseFontError {}

/// A font parsed from a BMFont text descriptor.
#[derive(Clone, Debug)]
pub struct BitmapFont {
    metrics: FontMetrics,
    pages: Vec<String>,
}

impl BitmapFont {
    /// Parses a BMFont text descriptor.
    pub fn parse(source: &str) -> Result<Self, ParseFontError> {
        let mut parser = Parser::default();
        let mut line_count = 0;
        for (index, line) in source.lines().enumerate() {
            line_count = index + 1;
            parser
                .record(line)
                .map_err(|kind| ParseFontError::new(kind, line_count))?;
        }
        let Some(metrics) = parser.metrics else {
            return Err(ParseFontError::new(
                ParseFontErrorKind::MissingCommon,
                line_count,
            ));
        };
        let mut pages = parser.pages;
        pages.sort_by_key(|(id, _)| *id);
        Ok(Self {
            metrics,
            pages: pages.into_iter().map(|(_, file)| file).collect(),
        })
    }

    /// Returns the parsed font metrics.
    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Consumes the font, returning its metrics.
    pub fn into_metrics(self) -> FontMetrics {
        self.metrics
    }

    /// Returns the atlas page image references, ordered by page id.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }
}

impl FontMetrics {
    /// Parses a BMFont text descriptor, keeping only the metrics.
    pub fn from_bmfont(source: &str) -> Result<Self, ParseFontError> {
        BitmapFont::parse(source).map(BitmapFont::into_metrics)
    }
}

#[derive(Default)]
struct Parser {
    name: String,
    size: Option<f32>,
    padding: Padding,
    metrics: Option<FontMetrics>,
    pages: Vec<(u32, String)>,
}

impl Parser {
    fn record(&mut self, line: &str) -> Result<(), ParseFontErrorKind> {
        let Some(record) = Record::parse(line) else {
            return Ok(());
        };
        match record.tag {
            "info" => self.info(&record),
            "common" => self.common(&record),
            "page" => self.page(&record),
            "char" => self.glyph(&record),
            "kerning" => self.kerning(&record),
            "chars" | "kernings" => Ok(()),
            tag => {
                log::trace!("skipping unknown font descriptor record `{tag}`");
                Ok(())
            }
        }
    }

    fn info(&mut self, record: &Record<'_>) -> Result<(), ParseFontErrorKind> {
        if let Some(face) = record.get("face") {
            self.name = face.to_string();
        }
        // Negative sizes ask for matching the character height rather than the cell height.
        self.size = record
            .optional_number("size")?
            .map(|size| if size < 0.0 { -size } else { size });
        if let Some(padding) = record.get("padding") {
            let mut sides = padding.split(',').map(|side| side.trim().parse::<f32>());
            let mut side = || match sides.next() {
                Some(Ok(value)) => Ok(value),
                _ => Err(ParseFontErrorKind::InvalidValue("padding")),
            };
            self.padding = Padding::new(side()?, side()?, side()?, side()?);
        }
        Ok(())
    }

    fn common(&mut self, record: &Record<'_>) -> Result<(), ParseFontErrorKind> {
        let line_height = record.number("lineHeight")?;
        let base = record.number("base")?;
        let atlas_extent = Vec2::new(record.dimension("scaleW")?, record.dimension("scaleH")?);
        let size = self.size.unwrap_or(line_height);
        if size == 0.0 {
            return Err(ParseFontErrorKind::InvalidSize);
        }

        let mut metrics = FontMetrics::new(core::mem::take(&mut self.name), size);
        metrics.base = base;
        metrics.ascent = base;
        metrics.descent = base - size;
        metrics.set_line_height(line_height);
        metrics.padding = self.padding;
        metrics.atlas_extent = atlas_extent;
        self.metrics = Some(metrics);
        Ok(())
    }

    fn page(&mut self, record: &Record<'_>) -> Result<(), ParseFontErrorKind> {
        let id = record
            .get("id")
            .ok_or(ParseFontErrorKind::MissingAttribute("id"))?
            .parse::<u32>()
            .map_err(|_| ParseFontErrorKind::InvalidValue("id"))?;
        let file = record
            .get("file")
            .ok_or(ParseFontErrorKind::MissingAttribute("file"))?;
        self.pages.push((id, file.to_string()));
        Ok(())
    }

    fn glyph(&mut self, record: &Record<'_>) -> Result<(), ParseFontErrorKind> {
        let metrics = self
            .metrics
            .as_mut()
            .ok_or(ParseFontErrorKind::MissingCommon)?;
        let Some(codepoint) = record.codepoint("id")? else {
            log::trace!("skipping glyph record without a valid codepoint");
            return Ok(());
        };

        let position = Vec2::new(record.number("x")?, record.number("y")?);
        let extent = Vec2::new(record.number("width")?, record.number("height")?);
        let offset = Vec2::new(record.number("xoffset")?, record.number("yoffset")?);
        let scale = metrics.atlas_extent;

        let mut glyph = GlyphMetrics::new(codepoint);
        glyph.advance = record.number("xadvance")?;
        glyph.bearing = Vec2::new(offset.x, metrics.base - offset.y);
        glyph.extent = extent;
        glyph.atlas_origin = Vec2::new(
            position.x / scale.x,
            1.0 - (position.y + extent.y) / scale.y,
        );
        glyph.atlas_extent = extent / scale;

        metrics
            .add_glyph(glyph)
            .map_err(|DuplicateGlyph(codepoint)| ParseFontErrorKind::DuplicateGlyph(codepoint))
    }

    fn kerning(&mut self, record: &Record<'_>) -> Result<(), ParseFontErrorKind> {
        let metrics = self
            .metrics
            .as_mut()
            .ok_or(ParseFontErrorKind::MissingCommon)?;
        let (Some(first), Some(second)) = (record.codepoint("first")?, record.codepoint("second")?)
        else {
            return Ok(());
        };
        let amount = record.number("amount")?;
        if !metrics.add_kerning(first, second, amount) {
            log::trace!("skipping kerning pair {first:?} {second:?}: no glyph for {first:?}");
        }
        Ok(())
    }
}

/// One descriptor line split into its tag and attributes.
struct Record<'a> {
    tag: &'a str,
    attributes: Vec<(&'a str, &'a str)>,
}

impl<'a> Record<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        let (tag, mut rest) = match line.find(char::is_whitespace) {
            Some(end) => (&line[..end], &line[end..]),
            None => (line, ""),
        };
        if tag.is_empty() {
            return None;
        }

        let mut attributes = Vec::new();
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }
            let key_end = rest
                .find(|c: char| c == '=' || c.is_whitespace())
                .unwrap_or(rest.len());
            let key = &rest[..key_end];
            rest = &rest[key_end..];
            let Some(after_eq) = rest.strip_prefix('=') else {
                // A bare word without value.
                attributes.push((key, ""));
                continue;
            };
            let value;
            if let Some(quoted) = after_eq.strip_prefix('"') {
                let end = quoted.find('"').unwrap_or(quoted.len());
                value = &quoted[..end];
                rest = quoted.get(end + 1..).unwrap_or("");
            } else {
                let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
                value = &after_eq[..end];
                rest = &after_eq[end..];
            }
            attributes.push((key, value));
        }
        Some(Self { tag, attributes })
    }

    fn get(&self, name: &str) -> Option<&'a str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    fn optional_number(&self, name: &'static str) -> Result<Option<f32>, ParseFontErrorKind> {
        self.get(name)
            .map(|value| {
                value
                    .parse::<f32>()
                    .map_err(|_| ParseFontErrorKind::InvalidValue(name))
            })
            .transpose()
    }

    fn number(&self, name: &'static str) -> Result<f32, ParseFontErrorKind> {
        self.optional_number(name)?
            .ok_or(ParseFontErrorKind::MissingAttribute(name))
    }

    /// Reads a number that must be positive, such as an atlas dimension.
    fn dimension(&self, name: &'static str) -> Result<f32, ParseFontErrorKind> {
        let value = self.number(name)?;
        if value > 0.0 {
            Ok(value)
        } else {
            Err(ParseFontErrorKind::InvalidValue(name))
        }
    }

    /// Reads a codepoint attribute. Negative ids (used for the "invalid glyph") yield `None`.
    fn codepoint(&self, name: &'static str) -> Result<Option<char>, ParseFontErrorKind> {
        let value = self
            .get(name)
            .ok_or(ParseFontErrorKind::MissingAttribute(name))?
            .parse::<i64>()
            .map_err(|_| ParseFontErrorKind::InvalidValue(name))?;
        if value < 0 {
            return Ok(None);
        }
        u32::try_from(value)
            .ok()
            .and_then(char::from_u32)
            .map(Some)
            .ok_or(ParseFontErrorKind::InvalidValue(name))
    }
}
