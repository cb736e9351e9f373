// src/navigation/input.rs
use crate::math::sphere::HemisphereConstraint;
use bevy::prelude::*;

/// Gehaltene Richtungstasten eines Ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Feine Schrittweite (Shift gehalten)
    pub fine: bool,
}

impl InputSnapshot {
    pub fn from_keyboard(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            left: keys.pressed(KeyCode::ArrowLeft),
            right: keys.pressed(KeyCode::ArrowRight),
            up: keys.pressed(KeyCode::ArrowUp),
            down: keys.pressed(KeyCode::ArrowDown),
            fine: keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        }
    }

    /// Winkeländerung (dθ, dφ) für diesen Tick.
    ///
    /// Links/Rechts ändern φ, Hoch/Runter ändern θ (hoch = Richtung +Z-Pol).
    /// Gegenläufige Tasten heben sich auf.
    pub fn deltas(&self, coarse_step: f64, fine_step: f64) -> (f64, f64) {
        let step = if self.fine { fine_step } else { coarse_step };

        let mut dtheta = 0.0;
        let mut dphi = 0.0;
        if self.left {
            dphi -= step;
        }
        if self.right {
            dphi += step;
        }
        if self.up {
            dtheta -= step;
        }
        if self.down {
            dtheta += step;
        }
        (dtheta, dphi)
    }
}

/// Einmalige Befehle aus der Tastatur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    Quit,
    Reset,
    SelectHemisphere(HemisphereConstraint),
}

/// Befehle, die beim nächsten Navigations-Tick vor der Bewegung ausgeführt werden.
///
/// Wird nur im Fixed-Tick geleert; Frames ohne Tick behalten ihre Befehle.
#[derive(Resource, Debug, Default)]
pub struct PendingCommands(pub Vec<NavigationCommand>);

const DIGIT_KEYS: [KeyCode; 7] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
];

/// Ordnet eine frisch gedrückte Taste einem Befehl zu.
pub fn command_for_key(key: KeyCode) -> Option<NavigationCommand> {
    match key {
        KeyCode::Escape | KeyCode::KeyQ => Some(NavigationCommand::Quit),
        KeyCode::KeyR => Some(NavigationCommand::Reset),
        _ => DIGIT_KEYS
            .iter()
            .position(|digit| *digit == key)
            .and_then(|index| HemisphereConstraint::from_digit(index as u8))
            .map(NavigationCommand::SelectHemisphere),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_no_keys_no_motion() {
        assert_eq!(InputSnapshot::default().deltas(0.1, 0.025), (0.0, 0.0));
    }

    #[test]
    fn test_directions_and_fine_step() {
        let snapshot = InputSnapshot {
            right: true,
            up: true,
            ..default()
        };
        let (dtheta, dphi) = snapshot.deltas(0.1, 0.025);
        assert_abs_diff_eq!(dtheta, -0.1);
        assert_abs_diff_eq!(dphi, 0.1);

        let fine = InputSnapshot {
            left: true,
            down: true,
            fine: true,
            ..default()
        };
        let (dtheta, dphi) = fine.deltas(0.1, 0.025);
        assert_abs_diff_eq!(dtheta, 0.025);
        assert_abs_diff_eq!(dphi, -0.025);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let snapshot = InputSnapshot {
            left: true,
            right: true,
            ..default()
        };
        assert_eq!(snapshot.deltas(0.1, 0.025), (0.0, 0.0));
    }

    #[test]
    fn test_snapshot_from_keyboard() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ArrowDown);
        keys.press(KeyCode::ShiftRight);
        let snapshot = InputSnapshot::from_keyboard(&keys);
        assert_eq!(
            snapshot,
            InputSnapshot {
                down: true,
                fine: true,
                ..default()
            }
        );
    }

    #[test]
    fn test_key_commands() {
        assert_eq!(command_for_key(KeyCode::KeyQ), Some(NavigationCommand::Quit));
        assert_eq!(command_for_key(KeyCode::Escape), Some(NavigationCommand::Quit));
        assert_eq!(command_for_key(KeyCode::KeyR), Some(NavigationCommand::Reset));
        assert_eq!(
            command_for_key(KeyCode::Digit0),
            Some(NavigationCommand::SelectHemisphere(
                HemisphereConstraint::Unconstrained
            ))
        );
        assert_eq!(
            command_for_key(KeyCode::Digit5),
            Some(NavigationCommand::SelectHemisphere(HemisphereConstraint::PlusZ))
        );
        assert_eq!(command_for_key(KeyCode::Digit7), None);
        assert_eq!(command_for_key(KeyCode::KeyA), None);
    }
}
