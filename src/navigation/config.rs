// src/navigation/config.rs
use super::state::AngularPosition;
use crate::math::prelude::*;
use bevy::prelude::*;

/// Farbpalette für Drahtgitter, Achsen, Marker und HUD (RGB 0..255)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [u8; 3],
    pub wire: [u8; 3],
    pub axis_x: [u8; 3],
    pub axis_y: [u8; 3],
    pub axis_z: [u8; 3],
    pub point: [u8; 3],
    pub text: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [14, 18, 24],
            wire: [80, 100, 140],
            axis_x: [220, 80, 80],
            axis_y: [80, 220, 120],
            axis_z: [120, 160, 255],
            point: [255, 230, 90],
            text: [210, 220, 230],
        }
    }
}

/// Alle Konstanten des Navigators.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct NavigatorConfig {
    // --- Fenster & Takt ---
    pub window_width: f32,
    pub window_height: f32,
    pub ticks_per_second: f64,

    // --- Kugel & Kamera ---
    pub sphere_radius: f64,
    pub camera_distance: f64,
    pub focal_length: f64,

    // --- Drahtgitter ---
    pub latitude_lines: usize,
    pub longitude_lines: usize,
    pub circle_resolution: usize,
    pub axis_length: f64,
    pub marker_radius_px: f32,

    // --- Bewegung ---
    pub coarse_step: f64,
    pub fine_step: f64,
    pub default_theta: f64,
    pub default_phi: f64,

    pub palette: Palette,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            window_width: 1000.0,
            window_height: 700.0,
            ticks_per_second: 60.0,

            sphere_radius: 2.0,
            camera_distance: 8.0,
            focal_length: 900.0,

            latitude_lines: 12,
            longitude_lines: 12,
            circle_resolution: 64,
            axis_length: 3.0,
            marker_radius_px: 8.0,

            coarse_step: angles::deg_to_rad(6.0),
            fine_step: angles::deg_to_rad(1.5),
            default_theta: constants::FRAC_PI_2,
            default_phi: 0.0,

            palette: Palette::default(),
        }
    }
}

impl NavigatorConfig {
    pub fn camera(&self) -> PinholeCamera {
        PinholeCamera::new(self.camera_distance, self.focal_length)
    }

    /// Startposition, auch Ziel von Reset
    pub fn default_position(&self) -> AngularPosition {
        AngularPosition::new(self.default_theta, self.default_phi)
    }

    /// Prüft die Konstanten auf Konsistenz.
    pub fn validate(&self) -> NavigatorResult<()> {
        let positives = [
            ("sphere_radius", self.sphere_radius),
            ("focal_length", self.focal_length),
            ("ticks_per_second", self.ticks_per_second),
            ("coarse_step", self.coarse_step),
            ("fine_step", self.fine_step),
            ("axis_length", self.axis_length),
            ("marker_radius_px", f64::from(self.marker_radius_px)),
        ];
        for (field, value) in positives {
            if value.is_nan() || value <= 0.0 {
                return Err(NavigatorError::NonPositive { field, value });
            }
        }

        if self.camera_distance <= self.sphere_radius {
            return Err(NavigatorError::CameraInsideSphere {
                camera_distance: self.camera_distance,
                radius: self.sphere_radius,
            });
        }

        let counts = [
            ("latitude_lines", self.latitude_lines, 2),
            ("longitude_lines", self.longitude_lines, 1),
            ("circle_resolution", self.circle_resolution, 1),
        ];
        for (field, actual, min) in counts {
            if actual < min {
                return Err(NavigatorError::TooFewSamples { field, min, actual });
            }
        }

        Ok(())
    }

    pub fn validated(self) -> NavigatorResult<Self> {
        self.validate()?;
        Ok(self)
    }
}
