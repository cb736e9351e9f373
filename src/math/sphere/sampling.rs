// src/math/sphere/sampling.rs

use super::coordinates::to_cartesian;
use super::projection::{PinholeCamera, ScreenPoint};
use crate::math::utils::constants::{PI, TAU};
use bevy::math::{DVec2, DVec3};

/// Zusammenhängender Linienzug im Bildschirmraum
pub type Polyline = Vec<ScreenPoint>;

/// Abtastpunkte eines Breitenkreises (θ konstant, φ läuft 0..2π).
/// Liefert `resolution + 1` Punkte, erster und letzter fallen zusammen.
pub fn latitude_circle(theta: f64, radius: f64, resolution: usize) -> Vec<DVec3> {
    (0..=resolution)
        .map(|j| {
            let phi = TAU * j as f64 / resolution as f64;
            to_cartesian(theta, phi, radius)
        })
        .collect()
}

/// Abtastpunkte eines Längenhalbkreises (φ konstant, θ läuft 0..π).
pub fn longitude_circle(phi: f64, radius: f64, resolution: usize) -> Vec<DVec3> {
    (0..=resolution)
        .map(|j| {
            let theta = PI * j as f64 / resolution as f64;
            to_cartesian(theta, phi, radius)
        })
        .collect()
}

/// Polarwinkel der Breitenkreise ohne die Pole: π·i/n für i in 1..n
pub fn latitude_angles(lines: usize) -> impl Iterator<Item = f64> {
    (1..lines).map(move |i| PI * i as f64 / lines as f64)
}

/// Azimutwinkel der Längenkreise: 2π·i/n für i in 0..n
pub fn longitude_angles(lines: usize) -> impl Iterator<Item = f64> {
    (0..lines).map(move |i| TAU * i as f64 / lines as f64)
}

/// Projiziert Abtastpunkte und trennt den Linienzug an nicht sichtbaren Punkten auf.
///
/// Teilstücke mit weniger als zwei Punkten werden verworfen.
pub fn split_visible(
    samples: &[DVec3],
    camera: &PinholeCamera,
    screen_center: DVec2,
) -> Vec<Polyline> {
    let mut polylines = Vec::new();
    let mut current: Polyline = Vec::new();

    for sample in samples {
        match camera.project(*sample, screen_center) {
            Some(screen_point) => current.push(screen_point),
            None => {
                if current.len() >= 2 {
                    polylines.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }

    if current.len() >= 2 {
        polylines.push(current);
    }

    polylines
}

/// Komplettes Drahtgitter der Kugel als Liste von Linienzügen.
pub fn wireframe_polylines(
    radius: f64,
    latitude_lines: usize,
    longitude_lines: usize,
    resolution: usize,
    camera: &PinholeCamera,
    screen_center: DVec2,
) -> Vec<Polyline> {
    let latitudes =
        latitude_angles(latitude_lines).map(|theta| latitude_circle(theta, radius, resolution));
    let longitudes =
        longitude_angles(longitude_lines).map(|phi| longitude_circle(phi, radius, resolution));

    latitudes
        .chain(longitudes)
        .flat_map(|samples| split_visible(&samples, camera, screen_center))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bevy::math::IVec2;

    #[test]
    fn test_circle_sample_counts() {
        let lat = latitude_circle(PI / 3.0, 2.0, 64);
        assert_eq!(lat.len(), 65);
        assert_abs_diff_eq!(lat[0].distance(lat[64]), 0.0, epsilon = 1e-12);
        for p in &lat {
            assert_abs_diff_eq!(p.z, 2.0 * (PI / 3.0).cos(), epsilon = 1e-12);
        }

        let lon = longitude_circle(0.0, 2.0, 64);
        assert_eq!(lon.len(), 65);
        assert_abs_diff_eq!(lon[0].z, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lon[64].z, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_line_angles_skip_poles() {
        let lats: Vec<f64> = latitude_angles(12).collect();
        assert_eq!(lats.len(), 11);
        assert!(lats.iter().all(|t| *t > 0.0 && *t < PI));

        let lons: Vec<f64> = longitude_angles(12).collect();
        assert_eq!(lons.len(), 12);
        assert_abs_diff_eq!(lons[0], 0.0);
    }

    #[test]
    fn test_invisible_sample_breaks_polyline() {
        let camera = PinholeCamera::new(8.0, 900.0);
        let samples = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 9.0), // hinter der Kamera
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 2.0, 0.0),
        ];
        let polylines = split_visible(&samples, &camera, DVec2::ZERO);

        // Der einzelne Punkt zwischen den beiden unsichtbaren wird verworfen
        assert_eq!(polylines.len(), 2);
        assert_eq!(polylines[0], vec![IVec2::new(0, 0), IVec2::new(113, 0)]);
        assert_eq!(polylines[1], vec![IVec2::new(0, -113), IVec2::new(0, -225)]);
    }

    #[test]
    fn test_wireframe_fully_visible_with_default_camera() {
        let camera = PinholeCamera::new(8.0, 900.0);
        let polylines = wireframe_polylines(2.0, 12, 12, 64, &camera, DVec2::new(500.0, 350.0));
        // 11 Breitenkreise + 12 Längenkreise, Kugel liegt komplett vor der Kamera
        assert_eq!(polylines.len(), 23);
        assert!(polylines.iter().all(|line| line.len() == 65));
    }
}
