// src/navigation/state.rs
use crate::math::prelude::*;
use bevy::math::DVec3;
use bevy::prelude::*;

/// Aktuelle Position auf der Kugel.
///
/// θ ∈ [0, π] vom +Z-Pol, φ ∈ (-π, π] von +X Richtung +Y. Einziger persistenter Zustand
/// der Navigation; kartesische Werte werden stets neu berechnet.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct AngularPosition {
    pub theta: f64,
    pub phi: f64,
}

impl AngularPosition {
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Einheitsvektor zur aktuellen Position
    pub fn direction(&self) -> DVec3 {
        to_cartesian(self.theta, self.phi, 1.0)
    }

    /// Punkt auf der Kugeloberfläche mit Radius `radius`
    pub fn surface_point(&self, radius: f64) -> DVec3 {
        self.direction() * radius
    }

    pub fn theta_degrees(&self) -> f64 {
        angles::rad_to_deg(self.theta)
    }

    pub fn phi_degrees(&self) -> f64 {
        angles::rad_to_deg(self.phi)
    }
}

/// Startpunkt: auf dem Äquator bei +X
impl Default for AngularPosition {
    fn default() -> Self {
        Self::new(constants::FRAC_PI_2, 0.0)
    }
}

/// Aktive Hemisphären-Einschränkung, unabhängig von der Position.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Deref, DerefMut)]
pub struct ActiveHemisphere(pub HemisphereConstraint);
