// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_elide;
mod test_transform;
mod test_update;
mod utils;
