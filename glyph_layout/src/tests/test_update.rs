// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::Vec2;

use super::utils::TestEnv;
use crate::{Alignment, GlyphVertexBuffer, LayoutOptions, LayoutRequest};

#[test]
fn unchanged_request_is_left_alone() {
    let mut env = TestEnv::new();
    let mut request = env.request("AB CD");
    request.set_wrap(true);
    request.set_line_width(30.0);
    let mut vertices = GlyphVertexBuffer::for_request(&request);

    let extent = env
        .typesetter()
        .update(&mut request, &mut vertices, 0)
        .unwrap();
    assert_eq!(extent, Some(Vec2::new(20.0, 24.0)));
    let snapshot = vertices.clone();

    let again = env
        .typesetter()
        .update(&mut request, &mut vertices, 0)
        .unwrap();
    assert_eq!(again, None);
    assert_eq!(vertices, snapshot);
    assert_eq!(request.extent(), Vec2::new(20.0, 24.0));
}

#[test]
fn typesetting_twice_gives_the_same_result() {
    let mut env = TestEnv::new();
    let mut request = env.request("AB\nCD, EF");
    request.set_alignment(Alignment::Center);
    let first = env.typeset(&mut request);

    let mut second = first.clone();
    env.typesetter()
        .typeset(&mut request, &mut second, 0)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn text_changes_reach_every_request() {
    let mut env = TestEnv::new();
    let mut a = env.request("AB");
    let mut b = LayoutRequest::with_font(a.text().clone(), env.font().clone());
    env.typeset(&mut a);
    env.typeset(&mut b);

    a.text().set_text("ABC");
    let mut vertices = GlyphVertexBuffer::for_request(&a);
    assert!(env.typesetter().update(&mut a, &mut vertices, 0).unwrap().is_some());
    assert!(env.typesetter().update(&mut b, &mut vertices, 0).unwrap().is_some());
    assert_eq!(b.extent().x, 30.0);
    assert!(a.text().borrow().is_dirty());
}

#[test]
fn color_changes_do_not_typeset() {
    let mut env = TestEnv::new();
    let mut request = env.request("AB");
    let mut vertices = env.typeset(&mut request);

    request.set_color([1.0, 0.0, 0.0, 1.0]);
    let result = env
        .typesetter()
        .update(&mut request, &mut vertices, 0)
        .unwrap();
    assert_eq!(result, None);
    assert!(request.alterations().color, "left for the renderer to pick up");
}

#[test]
fn option_changes_typeset_again() {
    let mut env = TestEnv::new();
    let mut request = env.request("AB");
    let mut vertices = env.typeset(&mut request);

    request.set_options(LayoutOptions {
        alignment: Alignment::Right,
        ..LayoutOptions::default()
    });
    let result = env
        .typesetter()
        .update(&mut request, &mut vertices, 0)
        .unwrap();
    assert_eq!(result, Some(Vec2::new(20.0, 12.0)));
    assert_eq!(vertices.get(0).unwrap().origin.x, -20.0);
}

#[test]
fn shorter_text_leaves_no_stale_vertices() {
    let mut env = TestEnv::new();
    let mut request = env.request("ABCD");
    let mut vertices = env.typeset(&mut request);

    request.text().set_text("AB");
    env.typesetter()
        .update(&mut request, &mut vertices, 0)
        .unwrap();
    assert_eq!(vertices.len(), 4);
    assert_eq!(vertices.depictable_count(), 2);
    assert_eq!(request.lines()[0].vertices, 0..2);
}
