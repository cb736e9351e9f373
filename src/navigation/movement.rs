// src/navigation/movement.rs
//! Bewegung auf der Kugel unter einer Hemisphären-Einschränkung.
//!
//! Ein blockierter Schritt wird in seine Achsenanteile zerlegt. Die Kandidaten werden in fester
//! Reihenfolge geprüft und der erste zulässige übernommen; damit "gleitet" der Punkt an der
//! Grenze entlang, statt komplett stehen zu bleiben.

use super::state::AngularPosition;
use crate::math::prelude::*;

/// Ein möglicher Zielpunkt für einen Bewegungsschritt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCandidate {
    /// Beide Achsen bewegt
    Full,
    /// Nur der Azimut bewegt, θ bleibt
    AzimuthOnly,
    /// Nur der Polarwinkel bewegt, φ bleibt
    PolarOnly,
}

impl MoveCandidate {
    /// Prüfreihenfolge. Azimut vor Polarwinkel ist beobachtbares Verhalten an Grenzen.
    pub const FALLBACK_ORDER: [MoveCandidate; 3] = [
        MoveCandidate::Full,
        MoveCandidate::AzimuthOnly,
        MoveCandidate::PolarOnly,
    ];

    fn apply(self, from: AngularPosition, target: AngularPosition) -> AngularPosition {
        match self {
            MoveCandidate::Full => target,
            MoveCandidate::AzimuthOnly => AngularPosition::new(from.theta, target.phi),
            MoveCandidate::PolarOnly => AngularPosition::new(target.theta, from.phi),
        }
    }
}

/// Ergebnis eines Bewegungsversuchs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// Ein Kandidat war zulässig
    Moved {
        position: AngularPosition,
        candidate: MoveCandidate,
    },
    /// Kein Kandidat zulässig, Position unverändert
    Blocked(AngularPosition),
}

impl MoveOutcome {
    pub fn position(&self) -> AngularPosition {
        match *self {
            MoveOutcome::Moved { position, .. } => position,
            MoveOutcome::Blocked(position) => position,
        }
    }
}

/// Unbeschränktes Ziel: θ auf [0, π] begrenzt (kein Umlauf), φ auf (-π, π] gewickelt.
pub fn unconstrained_target(from: AngularPosition, dtheta: f64, dphi: f64) -> AngularPosition {
    AngularPosition::new(
        (from.theta + dtheta).clamp(0.0, constants::PI),
        angles::wrap_angle_signed(from.phi + dphi),
    )
}

/// Löst einen Schritt auf und meldet, welcher Kandidat gewonnen hat.
pub fn resolve_move(
    from: AngularPosition,
    dtheta: f64,
    dphi: f64,
    constraint: HemisphereConstraint,
) -> MoveOutcome {
    let target = unconstrained_target(from, dtheta, dphi);

    MoveCandidate::FALLBACK_ORDER
        .iter()
        .map(|&candidate| (candidate, candidate.apply(from, target)))
        // Ein Kandidat ohne Positionsänderung zählt als blockiert
        .filter(|(_, position)| *position != from)
        .find(|(_, position)| constraint.satisfies(position.direction()))
        .map_or(MoveOutcome::Blocked(from), |(candidate, position)| {
            MoveOutcome::Moved {
                position,
                candidate,
            }
        })
}

/// Versucht `from` um (dθ, dφ) zu bewegen. Reine Funktion; der Aufrufer übernimmt das Ergebnis.
pub fn attempt_move(
    from: AngularPosition,
    dtheta: f64,
    dphi: f64,
    constraint: HemisphereConstraint,
) -> AngularPosition {
    resolve_move(from, dtheta, dphi, constraint).position()
}
