// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod asserts;
mod env;

pub(crate) use asserts::{assert_close, line_texts, origins_x};
pub(crate) use env::{TestEnv, ADVANCE, LINE_HEIGHT};
