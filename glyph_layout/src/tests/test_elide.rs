// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::Vec2;

use super::utils::{TestEnv, ADVANCE};
use crate::{Elide, LayoutRequest};

fn elided(env: &TestEnv, text: &str, mode: Elide, line_width: f32) -> LayoutRequest {
    let mut request = env.request(text);
    request.set_elide(mode);
    request.set_line_width(line_width);
    request
}

fn text_of(request: &LayoutRequest) -> String {
    request.text().borrow().text().into()
}

#[test]
fn right_keeps_prefix_and_appends_ellipsis() {
    let mut env = TestEnv::new();
    let mut request = elided(&env, "HELLO", Elide::Right, 22.0);
    request.set_ellipsis("…");
    let vertices = env.typeset(&mut request);

    let text = text_of(&request);
    assert_eq!(text, "H…");
    assert!(text.ends_with('…'));
    assert_eq!(request.lines().len(), 1);
    assert!(request.lines()[0].advance <= 22.0);
    assert_eq!(vertices.depictable_count(), 2);
    assert!(vertices.iter().skip(2).all(|vertex| vertex.is_zero()));
}

#[test]
fn every_mode_fits_the_line() {
    let mut env = TestEnv::new();
    for (mode, expected) in [
        (Elide::Left, "...GH"),
        (Elide::Middle, "A...H"),
        (Elide::Right, "AB..."),
    ] {
        let mut request = elided(&env, "ABCDEFGH", mode, 50.0);
        env.typeset(&mut request);
        assert_eq!(text_of(&request), expected, "{mode:?}");
        assert_eq!(request.lines()[0].advance, 50.0);
    }
}

#[test]
fn middle_removes_left_of_center_first() {
    let mut env = TestEnv::new();
    let mut request = elided(&env, "ABCDEF", Elide::Middle, 55.0);
    request.set_ellipsis("");
    env.typeset(&mut request);
    assert_eq!(text_of(&request), "ABDEF");

    let mut request = elided(&env, "ABCDE", Elide::Middle, 45.0);
    request.set_ellipsis("~");
    env.typeset(&mut request);
    assert_eq!(text_of(&request), "A~DE");
}

#[test]
fn text_that_fits_is_kept() {
    let mut env = TestEnv::new();
    let mut request = elided(&env, "ABC", Elide::Right, 3.0 * ADVANCE);
    env.typeset(&mut request);

    assert_eq!(text_of(&request), "ABC");
}

#[test]
fn ellipsis_wider_than_line_is_kept_alone() {
    let mut env = TestEnv::new();
    let mut request = elided(&env, "ABC", Elide::Right, 5.0);
    let vertices = env.typeset(&mut request);

    assert_eq!(text_of(&request), "...");
    assert_eq!(vertices.depictable_count(), 3);
    assert_eq!(request.extent().x, 3.0 * ADVANCE);
}

#[test]
fn line_feeds_do_not_break_elided_text() {
    let mut env = TestEnv::new();
    let mut request = elided(&env, "AB\nCD", Elide::Right, 100.0);
    request.set_wrap(true);
    env.typeset(&mut request);

    assert_eq!(request.lines().len(), 1);
    assert_eq!(request.lines()[0].vertices, 0..5);
    assert_eq!(request.lines()[0].advance, 4.0 * ADVANCE);
}

#[test]
fn elided_text_is_stable() {
    let mut env = TestEnv::new();
    let mut request = elided(&env, "ABCDEFGH", Elide::Middle, 50.0);
    let vertices = env.typeset(&mut request);
    let extent = request.extent();

    assert!(!request.needs_typesetting());
    let mut again = vertices.clone();
    env.typesetter()
        .typeset(&mut request, &mut again, 0)
        .unwrap();
    assert_eq!(text_of(&request), "A...H");
    assert_eq!(again, vertices);
    assert_eq!(request.extent(), extent);
}

#[test]
fn elision_is_seen_by_sharing_requests() {
    let mut env = TestEnv::new();
    let mut short = elided(&env, "ABCDEF", Elide::Right, 40.0);
    let mut full = LayoutRequest::with_font(short.text().clone(), env.font().clone());
    env.typeset(&mut full);
    assert_eq!(full.extent(), Vec2::new(60.0, 12.0));

    env.typeset(&mut short);
    assert_eq!(text_of(&full), "A...");
    assert!(full.needs_typesetting());
    env.typeset(&mut full);
    assert_eq!(full.extent(), Vec2::new(40.0, 12.0));
}
