use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod anchor_menu;
pub mod rc_car_panel;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_anchor_theme)
            .add_systems(
                Update,
                (
                    anchor_menu::anchor_menu_ui,
                    rc_car_panel::rc_car_panel_ui,
                    rc_car_panel::rc_car_keybinds,
                ),
            );
    }
}
