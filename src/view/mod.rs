//! Ausgabe: Drahtgitter, Achsen, Marker und HUD.
pub mod ui;
pub mod visualization;

use bevy::prelude::*;
use ui::hud_ui_system;
use visualization::{
    WireframeGizmos, point_marker::draw_point_marker_gizmos, sphere_grid::*,
};

pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<WireframeGizmos>().add_systems(
            Update,
            (
                draw_sphere_grid_gizmos,
                draw_axes_gizmos,
                draw_point_marker_gizmos,
                hud_ui_system,
            ),
        );
    }
}
