// src/setup.rs
use crate::navigation::config::NavigatorConfig;
use crate::view::visualization::WireframeGizmos;
use bevy::prelude::*;

pub fn setup_scene(
    mut commands: Commands,
    mut config_store: ResMut<GizmoConfigStore>,
    config: Res<NavigatorConfig>,
) {
    // Feste Kamera; die Perspektive wird selbst berechnet, Bevy zeichnet nur in Pixeln
    commands.spawn(Camera2dBundle::default());

    let (wire_config, _) = config_store.config_mut::<WireframeGizmos>();
    wire_config.line_width = 1.0;
    let (default_config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    default_config.line_width = 2.0;

    info!(
        "Sphere navigator ready: radius {}, camera at z={}, focal length {}",
        config.sphere_radius, config.camera_distance, config.focal_length
    );
}
