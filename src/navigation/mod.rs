//! Navigation eines Punkts auf der Kugeloberfläche.
//!
//! Die Winkelposition und die aktive Hemisphäre leben als Bevy-Ressourcen; die eigentliche
//! Schrittauflösung in [`movement`] ist frei von Seiteneffekten.

pub mod config;
pub mod input;
pub mod movement;
pub mod state;
pub mod systems;

use bevy::input::InputSystem;
use bevy::prelude::*;
use config::NavigatorConfig;
use input::PendingCommands;
use state::ActiveHemisphere;
use systems::*;

/// Registriert Zustand, Befehle und die Navigationssysteme.
///
/// Tasten werden in `PreUpdate` gelesen. Jeder `FixedUpdate`-Tick mit `ticks_per_second`
/// führt zuerst die eingereihten Befehle aus und bewegt danach; gezeichnet wird in `Update`.
pub struct NavigationPlugin {
    pub config: NavigatorConfig,
}

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(self.config.default_position())
            .init_resource::<ActiveHemisphere>()
            .init_resource::<PendingCommands>()
            .insert_resource(Time::<Fixed>::from_hz(self.config.ticks_per_second))
            .add_systems(PreUpdate, keyboard_command_system.after(InputSystem))
            .add_systems(
                FixedUpdate,
                (apply_navigation_commands_system, movement_system).chain(),
            );
    }
}
