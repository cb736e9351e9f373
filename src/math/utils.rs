// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const PI: f64 = std::f64::consts::PI;
    pub const TAU: f64 = std::f64::consts::TAU;
    pub const FRAC_PI_2: f64 = std::f64::consts::FRAC_PI_2;
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::{PI, TAU};

    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * PI / 180.0
    }

    /// Konvertiert Radiant zu Grad
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * 180.0 / PI
    }

    /// Normalisiert einen Winkel auf (-π, π]
    pub fn wrap_angle_signed(angle: f64) -> f64 {
        if angle > -PI && angle <= PI {
            return angle;
        }
        // rem_euclid liefert [0, 2π), danach in (-π, π] verschieben
        let result = (angle + PI).rem_euclid(TAU) - PI;
        if result <= -PI { result + TAU } else { result }
    }
}

#[cfg(test)]
mod tests {
    use super::angles::*;
    use super::constants::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wrap_angle_signed_range() {
        assert_abs_diff_eq!(wrap_angle_signed(0.0), 0.0);
        assert_abs_diff_eq!(wrap_angle_signed(PI), PI, epsilon = 1e-12);
        // -π liegt nicht im Intervall und wird auf +π abgebildet
        assert_abs_diff_eq!(wrap_angle_signed(-PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle_signed(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle_signed(-3.0 * PI / 2.0), PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle_signed(5.0 * TAU + 0.25), 0.25, epsilon = 1e-9);
    }

    #[test]
    fn test_degree_conversion() {
        assert_abs_diff_eq!(deg_to_rad(180.0), PI);
        assert_abs_diff_eq!(rad_to_deg(FRAC_PI_2), 90.0);
        assert_abs_diff_eq!(rad_to_deg(deg_to_rad(6.0)), 6.0, epsilon = 1e-12);
    }
}
