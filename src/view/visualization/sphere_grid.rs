// src/view/visualization/sphere_grid.rs
use super::{WireframeGizmos, primary_screen_center, rgb, screen_to_world};
use crate::math::prelude::*;
use crate::navigation::config::NavigatorConfig;
use bevy::math::{DVec2, DVec3};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Koordinatenachse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldAxis {
    X,
    Y,
    Z,
}

impl WorldAxis {
    pub const ALL: [WorldAxis; 3] = [WorldAxis::X, WorldAxis::Y, WorldAxis::Z];

    pub fn unit(self) -> DVec3 {
        match self {
            WorldAxis::X => DVec3::X,
            WorldAxis::Y => DVec3::Y,
            WorldAxis::Z => DVec3::Z,
        }
    }
}

/// Projizierte Achse von -L bis +L; nur wenn beide Enden sichtbar sind.
pub fn axis_segment(
    axis: WorldAxis,
    length: f64,
    camera: &PinholeCamera,
    screen_center: DVec2,
) -> Option<(ScreenPoint, ScreenPoint)> {
    let start = camera.project(axis.unit() * -length, screen_center)?;
    let end = camera.project(axis.unit() * length, screen_center)?;
    Some((start, end))
}

pub fn draw_sphere_grid_gizmos(
    mut gizmos: Gizmos<WireframeGizmos>,
    config: Res<NavigatorConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(center) = primary_screen_center(&windows) else {
        return;
    };

    let camera = config.camera();
    let wire_color = rgb(config.palette.wire);

    let polylines = wireframe_polylines(
        config.sphere_radius,
        config.latitude_lines,
        config.longitude_lines,
        config.circle_resolution,
        &camera,
        center,
    );
    for polyline in polylines {
        gizmos.linestrip_2d(
            polyline.into_iter().map(|p| screen_to_world(p, center)),
            wire_color,
        );
    }
}

pub fn draw_axes_gizmos(
    mut gizmos: Gizmos,
    config: Res<NavigatorConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(center) = primary_screen_center(&windows) else {
        return;
    };

    let camera = config.camera();
    let palette = &config.palette;

    for axis in WorldAxis::ALL {
        let color = match axis {
            WorldAxis::X => palette.axis_x,
            WorldAxis::Y => palette.axis_y,
            WorldAxis::Z => palette.axis_z,
        };
        if let Some((start, end)) = axis_segment(axis, config.axis_length, &camera, center) {
            gizmos.line_2d(
                screen_to_world(start, center),
                screen_to_world(end, center),
                rgb(color),
            );
        }
    }
}
