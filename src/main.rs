// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod math;
pub mod navigation;
pub mod setup;
pub mod view;

use math::NavigatorError;
use navigation::{NavigationPlugin, config::NavigatorConfig};
use setup::setup_scene;
use view::{ViewPlugin, visualization::rgb};

fn main() -> Result<(), NavigatorError> {
    let config = NavigatorConfig::default().validated()?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sphere Navigator - Arrow keys to move. 0-6 to constrain hemisphere."
                    .to_string(),
                resolution: (config.window_width, config.window_height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(rgb(config.palette.background)))
        .add_plugins(NavigationPlugin { config })
        .add_plugins(ViewPlugin)
        .add_systems(Startup, setup_scene)
        .run();

    Ok(())
}
