// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph metrics and kerning tables for bitmap fonts.
//!
//! A [`FontMetrics`] holds the face-wide measures of a font (size, base line, ascent, descent,
//! line gap) together with one [`GlyphMetrics`] per codepoint. Fonts are usually built from a
//! BMFont text descriptor with [`BitmapFont::parse`], but can also be assembled by hand.
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library.
//! - `libm`: Use floating point implementations from [libm].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! ## Example
//!
//! ```
//! use glyph_font::BitmapFont;
//!
//! let descriptor = "\
//! info face=\"Mono\" size=10 padding=0,0,0,0
//! common lineHeight=12 base=8 scaleW=128 scaleH=128 pages=1
//! page id=0 file=\"mono.png\"
//! char id=65 x=0 y=0 width=8 height=10 xoffset=1 yoffset=0 xadvance=10 page=0 chnl=15
//! char id=86 x=8 y=0 width=8 height=10 xoffset=1 yoffset=0 xadvance=10 page=0 chnl=15
//! kerning first=65 second=86 amount=-2
//! ";
//!
//! let font = BitmapFont::parse(descriptor).unwrap();
//! assert_eq!(font.pages(), ["mono.png"]);
//!
//! let metrics = font.metrics();
//! assert_eq!(metrics.line_height(), 12.0);
//! assert_eq!(metrics.kerning('A', 'V'), -2.0);
//! assert_eq!(metrics.kerning('V', 'A'), 0.0);
//! assert!(!metrics.glyph('?').is_depictable());
//! ```
//!
//! [libm]: https://crates.io/crates/libm

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("glyph_font requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod bmfont;
mod glyph;
mod metrics;

pub use glam::Vec2;

pub use bmfont::{BitmapFont, ParseFontError, ParseFontErrorKind};
pub use glyph::GlyphMetrics;
pub use metrics::{DuplicateGlyph, FontMetrics, Padding};
