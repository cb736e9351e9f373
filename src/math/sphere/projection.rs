// src/math/sphere/projection.rs

use bevy::math::{DVec2, DVec3, IVec2};

/// Unterhalb dieses Abstands zur Kameraebene gilt ein Punkt als nicht sichtbar.
pub const CAMERA_PLANE_EPSILON: f64 = 1e-6;

/// Ein Pixel im Bildschirmraum (y wächst nach unten).
pub type ScreenPoint = IVec2;

/// Lochkamera auf der +Z-Achse, blickt ohne Rotation auf den Ursprung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinholeCamera {
    /// Abstand der Kamera vom Ursprung entlang +Z
    pub distance: f64,
    /// Brennweite in Pixeln
    pub focal_length: f64,
}

impl PinholeCamera {
    pub fn new(distance: f64, focal_length: f64) -> Self {
        Self {
            distance,
            focal_length,
        }
    }

    /// Projiziert einen 3D-Punkt in den Bildschirmraum.
    ///
    /// Liefert `None`, wenn der Punkt auf oder hinter der Kameraebene liegt
    /// (`distance - z <= CAMERA_PLANE_EPSILON`). Die Bildschirm-Y-Achse ist invertiert.
    pub fn project(&self, point: DVec3, screen_center: DVec2) -> Option<ScreenPoint> {
        let denom = self.distance - point.z;
        if denom <= CAMERA_PLANE_EPSILON {
            return None;
        }

        let sx = screen_center.x + self.focal_length * (point.x / denom);
        let sy = screen_center.y - self.focal_length * (point.y / denom);

        Some(IVec2::new(sx.round() as i32, sy.round() as i32))
    }
}

/// Freie Variante von [`PinholeCamera::project`].
pub fn project(
    point: DVec3,
    camera_distance: f64,
    focal_length: f64,
    screen_center: DVec2,
) -> Option<ScreenPoint> {
    PinholeCamera::new(camera_distance, focal_length).project(point, screen_center)
}
