// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shortening text with an ellipsis so it fits a line.

use alloc::string::String;
use alloc::vec::Vec;

use glyph_font::FontMetrics;

use super::fragment::CharMetrics;
use crate::Elide;

/// Prefix sums over a text, for constant time span widths.
struct Spans<'a> {
    positions: Vec<f32>,
    kernings: &'a [f32],
}

impl<'a> Spans<'a> {
    fn new(metrics: &'a CharMetrics) -> Self {
        Self {
            positions: metrics.pen_positions(),
            kernings: &metrics.kernings,
        }
    }

    /// Width of the characters `start..end`, without the kerning towards `end`.
    fn width(&self, start: usize, end: usize) -> f32 {
        if end <= start {
            return 0.0;
        }
        self.positions[end] - self.positions[start] - self.kernings[end - 1]
    }
}

/// Returns the width of `ellipsis` laid out on its own.
pub(crate) fn ellipsis_width(font: &FontMetrics, ellipsis: &str) -> f32 {
    let chars: Vec<char> = ellipsis.chars().collect();
    CharMetrics::new(font, &chars).width(0..chars.len())
}

/// Returns `chars` shortened so that the kept characters are at most `available` wide,
/// with `ellipsis` inserted where characters were removed.
///
/// With nothing available the result is the ellipsis alone.
pub(crate) fn elide(
    mode: Elide,
    chars: &[char],
    metrics: &CharMetrics,
    ellipsis: &str,
    available: f32,
) -> String {
    let spans = Spans::new(metrics);
    let len = chars.len();
    let (prefix, suffix) = match mode {
        Elide::None => return chars.iter().collect(),
        Elide::Right => {
            let mut end = 0;
            while end < len && spans.width(0, end + 1) <= available {
                end += 1;
            }
            (end, 0)
        }
        Elide::Left => {
            let mut start = len;
            while start > 0 && spans.width(start - 1, len) <= available {
                start -= 1;
            }
            (0, len - start)
        }
        Elide::Middle => {
            // Kept characters are always `0..prefix` and `len - suffix..len`; removing the
            // character at `(m - 1) / 2` of the remaining `m` alternates between the two.
            let mut prefix = len.div_ceil(2);
            let mut suffix = len - prefix;
            while prefix + suffix > 0
                && spans.width(0, prefix) + spans.width(len - suffix, len) > available
            {
                let remove = (prefix + suffix - 1) / 2;
                if remove < prefix {
                    prefix -= 1;
                } else {
                    suffix -= 1;
                }
            }
            (prefix, suffix)
        }
    };

    let mut text = String::with_capacity(len + ellipsis.len());
    text.extend(&chars[..prefix]);
    text.push_str(ellipsis);
    text.extend(&chars[len - suffix..]);
    text
}
