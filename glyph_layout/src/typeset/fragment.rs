// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting text into words, delimiters and line feeds.

use alloc::vec::Vec;
use core::ops::Range;

use glyph_font::FontMetrics;

/// Characters that end a word. Each one forms a fragment of its own.
pub(crate) const DELIMITERS: &[char] = &[
    '\n', ' ', ',', '.', '-', '/', '(', ')', '[', ']', '{', '}', '<', '>',
];

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum FragmentKind {
    Word,
    Delimiter,
    LineFeed,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Fragment {
    pub(crate) kind: FragmentKind,
    /// Character indices covered by the fragment.
    pub(crate) range: Range<usize>,
    /// Advances plus internal kernings; zero unless measured.
    pub(crate) width: f32,
    /// The fragment produces no geometry and may overhang the line end.
    pub(crate) hangs: bool,
}

/// Advance of each character and the kerning towards its successor.
#[derive(Clone, Debug, Default)]
pub(crate) struct CharMetrics {
    pub(crate) advances: Vec<f32>,
    pub(crate) kernings: Vec<f32>,
}

impl CharMetrics {
    pub(crate) fn new(font: &FontMetrics, chars: &[char]) -> Self {
        let advances = chars.iter().map(|c| font.advance(*c)).collect();
        let kernings = chars
            .iter()
            .enumerate()
            .map(|(index, c)| match chars.get(index + 1) {
                Some(next) => font.kerning(*c, *next),
                None => 0.0,
            })
            .collect();
        Self { advances, kernings }
    }

    pub(crate) fn len(&self) -> usize {
        self.advances.len()
    }

    /// Width of the characters in `range`, excluding the kerning towards the character
    /// following the range.
    pub(crate) fn width(&self, range: Range<usize>) -> f32 {
        if range.is_empty() {
            return 0.0;
        }
        let last = range.end - 1;
        let sum: f32 = range
            .clone()
            .map(|index| self.advances[index] + self.kernings[index])
            .sum();
        sum - self.kernings[last]
    }

    /// Running sums of advance plus kerning; entry `i` is the pen position in front of
    /// character `i` on an unbroken line.
    pub(crate) fn pen_positions(&self) -> Vec<f32> {
        let mut positions = Vec::with_capacity(self.len() + 1);
        let mut pen = 0.0;
        positions.push(pen);
        for (advance, kerning) in self.advances.iter().zip(&self.kernings) {
            pen += advance + kerning;
            positions.push(pen);
        }
        positions
    }
}

/// Classifies `chars` into fragments, measuring them if `measure` is set.
pub(crate) fn fragment(
    font: &FontMetrics,
    chars: &[char],
    line_feed: char,
    metrics: &CharMetrics,
    measure: bool,
) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut word_start = None;
    let mut push = |kind: FragmentKind, range: Range<usize>| {
        let width = if measure {
            metrics.width(range.clone())
        } else {
            0.0
        };
        let hangs = kind == FragmentKind::Delimiter
            && chars[range.clone()]
                .iter()
                .all(|c| !font.glyph(*c).is_depictable());
        fragments.push(Fragment {
            kind,
            range,
            width,
            hangs,
        });
    };

    for (index, c) in chars.iter().enumerate() {
        let kind = if *c == line_feed {
            FragmentKind::LineFeed
        } else if DELIMITERS.contains(c) {
            FragmentKind::Delimiter
        } else {
            if word_start.is_none() {
                word_start = Some(index);
            }
            continue;
        };
        if let Some(start) = word_start.take() {
            push(FragmentKind::Word, start..index);
        }
        push(kind, index..index + 1);
    }
    if let Some(start) = word_start {
        push(FragmentKind::Word, start..chars.len());
    }
    fragments
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{fragment, CharMetrics, FragmentKind};
    use glyph_font::{FontMetrics, GlyphMetrics, Vec2};

    fn font() -> FontMetrics {
        let mut font = FontMetrics::new("Test", 10.0);
        for c in ['A', 'B', 'V', ',', ' ', '|'] {
            let mut glyph = GlyphMetrics::new(c);
            glyph.advance = 10.0;
            if c != ' ' {
                glyph.atlas_extent = Vec2::splat(0.1);
            }
            font.add_glyph(glyph).unwrap();
        }
        font.add_kerning('A', 'V', -2.0);
        font
    }

    fn kinds(text: &str, line_feed: char) -> Vec<(FragmentKind, usize, usize)> {
        let font = font();
        let chars: Vec<char> = text.chars().collect();
        let metrics = CharMetrics::new(&font, &chars);
        fragment(&font, &chars, line_feed, &metrics, false)
            .into_iter()
            .map(|fragment| (fragment.kind, fragment.range.start, fragment.range.end))
            .collect()
    }

    #[test]
    fn words_and_delimiters() {
        use FragmentKind::{Delimiter, LineFeed, Word};
        assert_eq!(
            kinds("AB, V\nA", '\n'),
            [
                (Word, 0, 2),
                (Delimiter, 2, 3),
                (Delimiter, 3, 4),
                (Word, 4, 5),
                (LineFeed, 5, 6),
                (Word, 6, 7),
            ]
        );
    }

    #[test]
    fn custom_line_feed() {
        use FragmentKind::{Delimiter, LineFeed, Word};
        assert_eq!(
            kinds("A|B\n", '|'),
            [(Word, 0, 1), (LineFeed, 1, 2), (Word, 2, 3), (Delimiter, 3, 4)]
        );
    }

    #[test]
    fn width_excludes_trailing_kerning() {
        let font = font();
        let chars: Vec<char> = "AVA".chars().collect();
        let metrics = CharMetrics::new(&font, &chars);
        assert_eq!(metrics.width(0..3), 28.0);
        assert_eq!(metrics.width(0..1), 10.0);
        assert_eq!(metrics.width(1..1), 0.0);
        assert_eq!(metrics.pen_positions(), [0.0, 8.0, 18.0, 28.0]);
    }

    #[test]
    fn whitespace_delimiters_hang() {
        let font = font();
        let chars: Vec<char> = "A ,".chars().collect();
        let metrics = CharMetrics::new(&font, &chars);
        let fragments = fragment(&font, &chars, '\n', &metrics, true);
        assert!(fragments[1].hangs);
        assert!(!fragments[2].hangs);
        assert_eq!(fragments[0].width, 10.0);
    }
}
