// src/math/sphere/coordinates.rs

use crate::math::utils::{angles, constants};
use bevy::math::DVec3;

/// Sphärische Koordinaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoordinates {
    /// Polar-Winkel (von der positiven Z-Achse, 0 bis π)
    pub polar: f64,
    /// Azimut-Winkel (um die Z-Achse von +X nach +Y, -π bis π)
    pub azimuth: f64,
    /// Radius (Abstand vom Ursprung)
    pub radius: f64,
}

impl SphericalCoordinates {
    /// Erstellt neue sphärische Koordinaten, Winkel werden in ihre Bereiche gebracht
    pub fn new(polar: f64, azimuth: f64, radius: f64) -> Self {
        Self {
            polar: polar.clamp(0.0, constants::PI),
            azimuth: angles::wrap_angle_signed(azimuth),
            radius,
        }
    }

    /// Erstellt sphärische Koordinaten aus kartesischen.
    ///
    /// Der Ursprung hat keine definierten Winkel und liefert `(0, 0, 0)`.
    pub fn from_cartesian(point: DVec3) -> Self {
        let radius = point.length();

        if radius == 0.0 {
            return Self {
                polar: 0.0,
                azimuth: 0.0,
                radius: 0.0,
            };
        }

        // Rundungsfehler können z/r minimal über 1 schieben
        let polar = (point.z / radius).clamp(-1.0, 1.0).acos();
        let azimuth = point.y.atan2(point.x);

        Self {
            polar,
            azimuth: angles::wrap_angle_signed(azimuth),
            radius,
        }
    }

    /// Konvertiert zu kartesischen Koordinaten
    pub fn to_cartesian(&self) -> DVec3 {
        to_cartesian(self.polar, self.azimuth, self.radius)
    }
}

/// x = r·sinθ·cosφ, y = r·sinθ·sinφ, z = r·cosθ
pub fn to_cartesian(theta: f64, phi: f64, radius: f64) -> DVec3 {
    let (sin_polar, cos_polar) = theta.sin_cos();
    let (sin_azimuth, cos_azimuth) = phi.sin_cos();

    DVec3::new(
        radius * sin_polar * cos_azimuth,
        radius * sin_polar * sin_azimuth,
        radius * cos_polar,
    )
}

/// Umkehrung von [`to_cartesian`]; θ ∈ [0, π], φ ∈ (-π, π]
pub fn to_spherical(point: DVec3) -> SphericalCoordinates {
    SphericalCoordinates::from_cartesian(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::constants::{FRAC_PI_2, PI};
    use approx::assert_abs_diff_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_axis_points() {
        let eq_x = to_cartesian(FRAC_PI_2, 0.0, 2.0);
        assert_abs_diff_eq!(eq_x.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq_x.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq_x.z, 0.0, epsilon = 1e-12);

        let eq_y = to_cartesian(FRAC_PI_2, FRAC_PI_2, 1.0);
        assert_abs_diff_eq!(eq_y.y, 1.0, epsilon = 1e-12);

        let north = to_cartesian(0.0, 1.234, 1.0);
        assert_abs_diff_eq!(north.z, 1.0, epsilon = 1e-12);
        let south = to_cartesian(PI, -0.5, 1.0);
        assert_abs_diff_eq!(south.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let theta = rng.random_range(0.0..=PI);
            let phi = rng.random_range(-10.0..10.0);
            let v = to_cartesian(theta, phi, 1.0);
            assert!(
                (v.length() - 1.0).abs() < 1e-12,
                "Punkt nicht auf Einheitskugel: {:?}, Länge: {}",
                v,
                v.length()
            );
        }
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(1337);
        for _ in 0..500 {
            let theta = rng.random_range(0.0..=PI);
            let phi = angles::wrap_angle_signed(rng.random_range(-PI..=PI));
            let back = to_spherical(to_cartesian(theta, phi, 1.0));

            assert_abs_diff_eq!(back.radius, 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(back.polar, theta, epsilon = 1e-6);
            // Am Pol ist der Azimut beliebig
            if theta > 1e-6 && theta < PI - 1e-6 {
                let diff = angles::wrap_angle_signed(back.azimuth - phi);
                assert!(diff.abs() < 1e-6, "phi {} wurde zu {}", phi, back.azimuth);
            }
        }
    }

    #[test]
    fn test_origin_is_degenerate() {
        let s = to_spherical(DVec3::ZERO);
        assert_eq!(s, SphericalCoordinates::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_radius_preserved() {
        let s = to_spherical(DVec3::new(0.0, -3.0, 0.0));
        assert_abs_diff_eq!(s.radius, 3.0);
        assert_abs_diff_eq!(s.polar, FRAC_PI_2);
        assert_abs_diff_eq!(s.azimuth, -FRAC_PI_2);
        let p = s.to_cartesian();
        assert_abs_diff_eq!(p.y, -3.0, epsilon = 1e-12);
    }
}
