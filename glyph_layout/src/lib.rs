// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph layout for bitmap fonts.
//!
//! Given a [`LayoutRequest`] (shared text, a font's glyph metrics and layout options) the
//! [`Typesetter`] computes the placement of every glyph: it breaks the text into lines,
//! optionally wraps or elides it, aligns and anchors the lines and finally applies the
//! request's transform. The result is written to a [`GlyphVertexBuffer`] with one
//! [`GlyphVertex`] per character, ready to be flattened or uploaded as raw bytes.
//!
//! Where the text ends up is decided by the request's [`Placement`]: a custom matrix,
//! pixels on screen, a frame in world space, or pixels around a projected world space
//! anchor.
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library.
//! - `libm`: Use floating point implementations from [libm].
//! - `serde`: (De)serialize [`LayoutOptions`] and the enums it holds.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use glyph_layout::glyph_font::{FontMetrics, GlyphMetrics, Vec2};
//! use glyph_layout::{
//!     Alignment, GlyphVertexBuffer, LayoutRequest, SharedText, Typesetter,
//! };
//!
//! let mut font = FontMetrics::new("Blocks", 12.0);
//! font.atlas_extent = Vec2::splat(64.0);
//! for c in ['A', 'B'] {
//!     let mut glyph = GlyphMetrics::new(c);
//!     glyph.advance = 10.0;
//!     glyph.extent = Vec2::new(10.0, 12.0);
//!     glyph.bearing = Vec2::new(0.0, 12.0);
//!     glyph.atlas_extent = Vec2::splat(0.25);
//!     font.add_glyph(glyph).unwrap();
//! }
//!
//! let mut request = LayoutRequest::with_font(SharedText::new("AB\nBA"), Rc::new(font));
//! request.set_alignment(Alignment::Right);
//!
//! let mut vertices = GlyphVertexBuffer::for_request(&request);
//! let mut typesetter = Typesetter::new();
//! let extent = typesetter.update(&mut request, &mut vertices, 0).unwrap();
//!
//! assert_eq!(extent, Some(Vec2::new(20.0, 24.0)));
//! assert_eq!(request.lines().len(), 2);
//! assert_eq!(vertices.depictable_count(), 4);
//! assert_eq!(vertices.get(0).unwrap().origin.x, -20.0);
//!
//! // Nothing changed, so there is nothing to do.
//! assert_eq!(typesetter.update(&mut request, &mut vertices, 0).unwrap(), None);
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
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("glyph_layout requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use glam;
pub use glyph_font;

mod options;
mod placement;
mod request;
mod text;
mod typeset;
mod vertices;

#[cfg(test)]
mod tests;

pub use options::{Alignment, Elide, FontSizeUnit, LayoutOptions, LineAnchor};
pub use placement::{Placement, PlacementContext};
pub use request::{Alterations, LayoutRequest, TypesetLine};
pub use text::{SharedText, TextBuffer};
pub use typeset::{TypesetError, Typesetter};
pub use vertices::{FlatVertices, GlyphVertex, GlyphVertexBuffer};
