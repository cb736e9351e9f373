// src/navigation/systems.rs
use super::config::NavigatorConfig;
use super::input::{InputSnapshot, NavigationCommand, PendingCommands, command_for_key};
use super::movement::{MoveCandidate, MoveOutcome, resolve_move};
use super::state::{ActiveHemisphere, AngularPosition};
use bevy::app::AppExit;
use bevy::prelude::*;

/// Übersetzt frisch gedrückte Tasten in `NavigationCommand`s und reiht sie ein.
pub fn keyboard_command_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut pending: ResMut<PendingCommands>,
) {
    pending
        .0
        .extend(keys.get_just_pressed().filter_map(|key| command_for_key(*key)));
}

/// Führt Reset, Hemisphärenwahl und Beenden aus, bevor im selben Tick bewegt wird.
pub fn apply_navigation_commands_system(
    mut pending: ResMut<PendingCommands>,
    mut position: ResMut<AngularPosition>,
    mut hemisphere: ResMut<ActiveHemisphere>,
    config: Res<NavigatorConfig>,
    mut exit: EventWriter<AppExit>,
) {
    for command in pending.0.drain(..) {
        match command {
            NavigationCommand::Quit => {
                info!("Quit requested.");
                exit.send(AppExit);
            }
            NavigationCommand::Reset => {
                *position = config.default_position();
                info!(
                    "Position reset to theta={:.2}°, phi={:.2}°",
                    position.theta_degrees(),
                    position.phi_degrees()
                );
            }
            NavigationCommand::SelectHemisphere(constraint) => {
                if hemisphere.0 != constraint {
                    info!("Hemisphere constraint changed: {} -> {}", hemisphere.0, constraint);
                }
                hemisphere.0 = constraint;
                if !constraint.satisfies(position.direction()) {
                    warn!(
                        "Current position lies outside hemisphere {}, only moves back into the hemisphere are accepted.",
                        constraint
                    );
                }
            }
        }
    }
}

/// Ein Bewegungsschritt pro Tick aus den gehaltenen Richtungstasten.
pub fn movement_system(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<NavigatorConfig>,
    hemisphere: Res<ActiveHemisphere>,
    mut position: ResMut<AngularPosition>,
) {
    let snapshot = InputSnapshot::from_keyboard(&keys);
    let (dtheta, dphi) = snapshot.deltas(config.coarse_step, config.fine_step);
    if dtheta == 0.0 && dphi == 0.0 {
        return;
    }

    match resolve_move(*position, dtheta, dphi, hemisphere.0) {
        MoveOutcome::Moved {
            position: next,
            candidate,
        } => {
            if candidate != MoveCandidate::Full {
                debug!("Sliding along {} boundary ({:?}).", hemisphere.0, candidate);
            }
            *position = next;
        }
        MoveOutcome::Blocked(_) => {
            debug!("Move blocked by hemisphere {}.", hemisphere.0);
        }
    }
}
