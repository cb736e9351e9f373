// src/view/visualization/mod.rs
pub mod point_marker;
pub mod sphere_grid;

use crate::math::sphere::ScreenPoint;
use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Eigene Gizmo-Gruppe für das dünne Drahtgitter
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct WireframeGizmos;

/// Bildschirmmitte des Hauptfensters in Pixeln
pub fn screen_center(window: &Window) -> DVec2 {
    DVec2::new(f64::from(window.width()) / 2.0, f64::from(window.height()) / 2.0)
}

pub fn primary_screen_center(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<DVec2> {
    windows.get_single().ok().map(screen_center)
}

/// Pixel (Ursprung oben links, y nach unten) in 2D-Weltkoordinaten der Kamera
/// (Ursprung in der Mitte, y nach oben).
pub fn screen_to_world(point: ScreenPoint, center: DVec2) -> Vec2 {
    Vec2::new(
        (f64::from(point.x) - center.x) as f32,
        (center.y - f64::from(point.y)) as f32,
    )
}

pub fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::rgb_u8(r, g, b)
}
