// Copyright 2026 the Glyph Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strategies that place laid out text in screen or world space.
//!
//! Every strategy contributes two matrices. The *static* transform only depends on the
//! placement itself and the font scale; the *dynamic* transform depends on the viewport
//! and camera and is refreshed once per frame. Text is transformed by
//! `dynamic * static`.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::FontSizeUnit;

/// Viewport and camera state the dynamic part of a placement depends on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementContext {
    /// Viewport size in pixels.
    pub viewport: Vec2,
    /// Combined view and projection matrix of the camera.
    pub view_projection: Mat4,
}

impl Default for PlacementContext {
    fn default() -> Self {
        Self {
            viewport: Vec2::ONE,
            view_projection: Mat4::IDENTITY,
        }
    }
}

impl PlacementContext {
    /// Returns the world space length of one pixel at the depth of `position`.
    ///
    /// Falls back to `1.0` for an empty viewport or a singular camera matrix.
    pub fn world_per_pixel(&self, position: Vec3) -> f32 {
        if self.viewport.y <= 0.0 {
            return 1.0;
        }
        let inverse = self.view_projection.inverse();
        let ndc = self.view_projection.project_point3(position);
        let shifted = inverse.project_point3(ndc + Vec3::new(0.0, 2.0 / self.viewport.y, 0.0));
        let length = shifted.distance(position);
        if length.is_finite() && length > 0.0 {
            length
        } else {
            1.0
        }
    }

    /// Returns the transform from pixel coordinates, with the origin in the lower left
    /// corner, to normalized device coordinates.
    pub fn pixel_to_ndc(&self) -> Mat4 {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return Mat4::IDENTITY;
        }
        Mat4::from_translation(Vec3::new(-1.0, -1.0, 0.0))
            * Mat4::from_scale(Vec3::new(2.0 / self.viewport.x, 2.0 / self.viewport.y, 1.0))
    }
}

/// How a request's text is placed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Placement {
    /// An arbitrary matrix supplied by the caller.
    Custom(Mat4),
    /// Screen space, in pixels from the lower left corner of the viewport.
    Screen {
        /// Anchor position in pixels.
        position: Vec2,
        /// Direction of the baseline.
        direction: Vec2,
    },
    /// World space.
    World {
        /// Anchor position.
        position: Vec3,
        /// Direction of the baseline.
        direction: Vec3,
        /// Up vector of the glyphs.
        up: Vec3,
    },
    /// Screen space text attached to a projected world space anchor.
    Projected {
        /// Anchor position in world space.
        position: Vec3,
        /// Direction of the baseline on screen.
        direction: Vec2,
    },
}

impl Default for Placement {
    fn default() -> Self {
        Self::Custom(Mat4::IDENTITY)
    }
}

impl Placement {
    /// Returns the part of the transform that does not depend on viewport or camera.
    ///
    /// `font_scale` maps font units to the placement's units.
    pub fn static_transform(&self, font_scale: f32) -> Mat4 {
        let scale = Mat4::from_scale(Vec3::new(font_scale, font_scale, 1.0));
        match *self {
            Self::Custom(matrix) => matrix * scale,
            Self::Screen {
                position,
                direction,
            } => Mat4::from_translation(position.extend(0.0)) * rotation(direction) * scale,
            Self::World {
                position,
                direction,
                up,
            } => basis(position, direction, up) * scale,
            Self::Projected { direction, .. } => rotation(direction) * scale,
        }
    }

    /// Returns the part of the transform that follows viewport and camera.
    pub fn dynamic_transform(&self, unit: FontSizeUnit, context: &PlacementContext) -> Mat4 {
        match *self {
            Self::Custom(_) => Mat4::IDENTITY,
            Self::Screen { .. } => context.pixel_to_ndc(),
            Self::World { position, .. } => match unit {
                FontSizeUnit::World => Mat4::IDENTITY,
                FontSizeUnit::Pixel => {
                    let scale = context.world_per_pixel(position);
                    Mat4::from_translation(position)
                        * Mat4::from_scale(Vec3::splat(scale))
                        * Mat4::from_translation(-position)
                }
            },
            Self::Projected { position, .. } => {
                let anchor = context.view_projection.project_point3(position);
                let unit_scale = match unit {
                    FontSizeUnit::Pixel => 1.0,
                    FontSizeUnit::World => 1.0 / context.world_per_pixel(position),
                };
                let pixel_to_ndc = context.pixel_to_ndc();
                // Only the scale of the pixel mapping applies, the anchor replaces its offset.
                let scale = Mat4::from_scale(Vec3::new(
                    pixel_to_ndc.x_axis.x * unit_scale,
                    pixel_to_ndc.y_axis.y * unit_scale,
                    1.0,
                ));
                Mat4::from_translation(anchor) * scale
            }
        }
    }
}

/// Rotation about the z axis that maps the x axis onto `direction`.
fn rotation(direction: Vec2) -> Mat4 {
    let d = direction.try_normalize().unwrap_or(Vec2::X);
    Mat4::from_cols(
        Vec4::new(d.x, d.y, 0.0, 0.0),
        Vec4::new(-d.y, d.x, 0.0, 0.0),
        Vec4::Z,
        Vec4::W,
    )
}

/// Orthonormal frame with the baseline along `direction` and glyphs facing `up`.
fn basis(position: Vec3, direction: Vec3, up: Vec3) -> Mat4 {
    let x = direction.try_normalize().unwrap_or(Vec3::X);
    let z = x
        .cross(up)
        .try_normalize()
        .unwrap_or_else(|| x.any_orthonormal_vector());
    let y = z.cross(x);
    Mat4::from_cols(
        x.extend(0.0),
        y.extend(0.0),
        z.extend(0.0),
        position.extend(1.0),
    )
}
