// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text storage shared between layout requests.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::{Ref, RefCell, RefMut};
use core::str::Chars;

/// A mutable character sequence with a configurable line feed marker.
///
/// Every change marks the buffer as dirty and bumps its revision. The dirty flag is
/// shared by everybody looking at the buffer and can be reset explicitly, while the
/// revision lets each [`LayoutRequest`](crate::LayoutRequest) detect changes made since
/// its own last layout pass.
#[derive(Clone, Debug)]
pub struct TextBuffer {
    content: String,
    line_feed: char,
    dirty: bool,
    revision: u64,
}

impl TextBuffer {
    /// Creates a buffer holding `text`, using `'\n'` as line feed.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            line_feed: '\n',
            dirty: true,
            revision: 0,
        }
    }

    /// Returns the content.
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Replaces the content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.content {
            self.content = text;
            self.touch();
        }
    }

    /// Returns the character that forces a line break.
    pub fn line_feed(&self) -> char {
        self.line_feed
    }

    /// Sets the character that forces a line break.
    pub fn set_line_feed(&mut self, line_feed: char) {
        if line_feed != self.line_feed {
            self.line_feed = line_feed;
            self.touch();
        }
    }

    /// Returns `true` if the buffer changed since the dirty flag was last reset.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Sets or resets the dirty flag.
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Returns a counter that increases with every change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the number of characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Returns `true` if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the character at `index`, counting characters rather than bytes.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.content.chars().nth(index)
    }

    /// Iterates over the characters.
    pub fn chars(&self) -> Chars<'_> {
        self.content.chars()
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.revision += 1;
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// A reference-counted [`TextBuffer`], shared by all requests that render the same text.
#[derive(Clone, Debug, Default)]
pub struct SharedText(Rc<RefCell<TextBuffer>>);

impl SharedText {
    /// Creates a new buffer holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_buffer(TextBuffer::new(text))
    }

    /// Wraps an existing buffer.
    pub fn from_buffer(buffer: TextBuffer) -> Self {
        Self(Rc::new(RefCell::new(buffer)))
    }

    /// Immutably borrows the buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, TextBuffer> {
        self.0.borrow()
    }

    /// Mutably borrows the buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, TextBuffer> {
        self.0.borrow_mut()
    }

    /// Replaces the content of the shared buffer.
    pub fn set_text(&self, text: impl Into<String>) {
        self.borrow_mut().set_text(text);
    }

    /// Returns `true` if both handles refer to the same buffer.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<TextBuffer> for SharedText {
    fn from(buffer: TextBuffer) -> Self {
        Self::from_buffer(buffer)
    }
}
