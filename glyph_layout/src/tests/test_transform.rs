// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::{Mat4, Vec2, Vec3};

use super::utils::{assert_close, TestEnv, LINE_HEIGHT};
use crate::{Alignment, FontSizeUnit, Placement, PlacementContext};

#[test]
fn font_size_scales_vertices_and_extent() {
    let mut env = TestEnv::new();
    let mut request = env.request("AB");
    request.set_font_size(Some(2.0 * LINE_HEIGHT));
    let vertices = env.typeset(&mut request);

    let vertex = vertices.get(1).unwrap();
    assert_eq!(vertex.origin, Vec3::new(20.0, 0.0, 0.0));
    assert_eq!(vertex.tangent, Vec3::new(20.0, 0.0, 0.0));
    assert_eq!(vertex.up, Vec3::new(0.0, 24.0, 0.0));
    assert_eq!(request.extent(), Vec2::new(40.0, 24.0));
}

#[test]
fn screen_placement_maps_to_device_coordinates() {
    let mut env = TestEnv::new();
    let mut request = env.request("AB");
    request.set_placement(Placement::Screen {
        position: Vec2::new(100.0, 50.0),
        direction: Vec2::X,
    });
    request.update_dynamic_transform(&PlacementContext {
        viewport: Vec2::new(200.0, 100.0),
        view_projection: Mat4::IDENTITY,
    });
    let vertices = env.typeset(&mut request);

    let vertex = vertices.get(1).unwrap();
    assert_close(vertex.origin, Vec3::new(0.1, 0.0, 0.0));
    assert_close(vertex.tangent, Vec3::new(0.1, 0.0, 0.0));
    assert_close(vertex.up, Vec3::new(0.0, 0.24, 0.0));
    let extent = request.extent();
    assert!(extent.abs_diff_eq(Vec2::new(0.2, 0.24), 1e-5), "{extent}");
}

#[test]
fn rotation_turns_edges_and_keeps_extent() {
    let mut env = TestEnv::new();
    let mut request = env.request("AB");
    request.set_placement(Placement::Screen {
        position: Vec2::ZERO,
        direction: Vec2::Y,
    });
    let vertices = env.typeset(&mut request);

    let vertex = vertices.get(1).unwrap();
    assert_close(vertex.origin, Vec3::new(0.0, 10.0, 0.0));
    assert_close(vertex.tangent, Vec3::new(0.0, 10.0, 0.0));
    assert_close(vertex.up, Vec3::new(-12.0, 0.0, 0.0));
    let extent = request.extent();
    assert!(extent.abs_diff_eq(Vec2::new(20.0, 12.0), 1e-5), "{extent}");
}

#[test]
fn transform_applies_after_alignment() {
    let mut env = TestEnv::new();
    let mut request = env.request("AB");
    request.set_alignment(Alignment::Center);
    request.set_transform(Mat4::from_translation(Vec3::new(5.0, 1.0, -2.0)));
    let vertices = env.typeset(&mut request);

    assert_eq!(vertices.get(0).unwrap().origin, Vec3::new(-5.0, 1.0, -2.0));
    assert_eq!(vertices.get(1).unwrap().origin, Vec3::new(5.0, 1.0, -2.0));
    assert_eq!(request.extent(), Vec2::new(20.0, 12.0));
}

#[test]
fn pixel_sized_world_text_follows_the_camera() {
    let mut env = TestEnv::new();
    let mut request = env.request("A");
    request.set_placement(Placement::World {
        position: Vec3::ZERO,
        direction: Vec3::X,
        up: Vec3::Y,
    });
    request.set_font_size_unit(FontSizeUnit::Pixel);
    let context = PlacementContext {
        viewport: Vec2::new(100.0, 100.0),
        view_projection: Mat4::from_scale(Vec3::new(0.5, 0.5, 1.0)),
    };
    request.update_dynamic_transform(&context);
    let vertices = env.typeset(&mut request);

    // One pixel spans 2 / 100 device units, or 0.04 world units at this zoom.
    assert_close(vertices.get(0).unwrap().tangent, Vec3::new(0.4, 0.0, 0.0));

    let zoomed = PlacementContext {
        view_projection: Mat4::IDENTITY,
        ..context
    };
    request.update_dynamic_transform(&zoomed);
    assert!(request.needs_typesetting());
    let vertices = env.typeset(&mut request);
    assert_close(vertices.get(0).unwrap().tangent, Vec3::new(0.2, 0.0, 0.0));
}
