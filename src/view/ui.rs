// ./src/view/ui.rs
use crate::navigation::config::NavigatorConfig;
use crate::navigation::state::{ActiveHemisphere, AngularPosition};
use bevy::math::DVec3;
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use egui::{Align2, Area, Color32, Id, RichText};

pub const TITLE: &str = "Sphere Navigator";
pub const CONTROLS: &str = "Arrows: move on surface   Shift: fine step   R: reset   0: free   \
                            1..6: hemisphere (+X,-X,+Y,-Y,+Z,-Z)   Esc/Q: quit";

/// "(+1.000, -0.000, +0.000)"
pub fn format_direction(direction: DVec3) -> String {
    format!(
        "({:+.3}, {:+.3}, {:+.3})",
        direction.x, direction.y, direction.z
    )
}

/// Textzeilen unter dem Titel
pub fn hud_lines(position: &AngularPosition, hemisphere: &ActiveHemisphere) -> [String; 4] {
    [
        CONTROLS.to_string(),
        format!("Hemisphere: {}", hemisphere.0),
        format!("Unit direction: {}", format_direction(position.direction())),
        format!(
            "Theta (deg): {:.2}   Phi (deg): {:.2}",
            position.theta_degrees(),
            position.phi_degrees()
        ),
    ]
}

pub fn hud_ui_system(
    mut contexts: EguiContexts,
    config: Res<NavigatorConfig>,
    position: Res<AngularPosition>,
    hemisphere: Res<ActiveHemisphere>,
) {
    let [r, g, b] = config.palette.text;
    let text_color = Color32::from_rgb(r, g, b);

    Area::new(Id::new("navigator_hud"))
        .anchor(Align2::LEFT_TOP, [16.0, 16.0])
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(RichText::new(TITLE).size(22.0).strong().color(text_color));
            for line in hud_lines(&position, &hemisphere) {
                ui.label(RichText::new(line).size(14.0).color(text_color));
            }
        });
}
