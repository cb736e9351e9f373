// src/view/visualization/point_marker.rs
use super::{primary_screen_center, rgb, screen_to_world};
use crate::math::sphere::{PinholeCamera, ScreenPoint};
use crate::navigation::config::NavigatorConfig;
use crate::navigation::state::AngularPosition;
use bevy::math::{DVec2, DVec3};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Radiuslinie vom Ursprung zum navigierten Punkt, `None` wenn ein Ende nicht sichtbar ist.
pub fn radius_segment(
    position: &AngularPosition,
    radius: f64,
    camera: &PinholeCamera,
    screen_center: DVec2,
) -> Option<(ScreenPoint, ScreenPoint)> {
    let origin = camera.project(DVec3::ZERO, screen_center)?;
    let tip = camera.project(position.surface_point(radius), screen_center)?;
    Some((origin, tip))
}

/// Zeichnet Radiuslinie und gefüllten Marker am aktuellen Punkt.
pub fn draw_point_marker_gizmos(
    mut gizmos: Gizmos,
    config: Res<NavigatorConfig>,
    position: Res<AngularPosition>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(center) = primary_screen_center(&windows) else {
        return;
    };

    let Some((origin, tip)) =
        radius_segment(&position, config.sphere_radius, &config.camera(), center)
    else {
        return;
    };

    let color = rgb(config.palette.point);
    let tip = screen_to_world(tip, center);
    gizmos.line_2d(screen_to_world(origin, center), tip, color);

    // Gizmos kennen keine gefüllten Kreise, daher konzentrische Ringe
    let mut ring = config.marker_radius_px;
    while ring > 0.0 {
        gizmos.circle_2d(tip, ring, color);
        ring -= 1.0;
    }
}
