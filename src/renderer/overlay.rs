use glam::Vec3;

use crate::camera::{Camera, FOV_MAX, FOV_MIN, PITCH_LIMIT};
use crate::scenes::SceneKind;

pub const PANEL_WIDTH: f32 = 240.0;

/// Persistent overlay state between frames
#[derive(Debug, Clone)]
pub struct OverlayState {
    pub show_panel: bool,
    pub scene: SceneKind,
}

/// Requests the overlay hands back to the application
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverlayActions {
    pub scene: Option<SceneKind>,
    pub reset: bool,
}

/// Build the side panel, hide toggle and FPS counter for one frame.
/// Camera fields are edited in place.
pub fn draw(
    ctx: &egui::Context,
    state: &mut OverlayState,
    camera: &mut Camera,
    fps: f32,
) -> OverlayActions {
    let mut actions = OverlayActions::default();

    if state.show_panel {
        egui::SidePanel::right("side_panel")
            .exact_width(PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                scene_selector(ui, state, &mut actions);
                ui.separator();
                position_fields(ui, camera);
                ui.separator();
                rotation_sliders(ui, camera);
                ui.separator();
                fov_slider(ui, camera);
                ui.separator();

                let reset = egui::Button::new("Reset Camera");
                if ui.add_sized([ui.available_width(), 30.0], reset).clicked() {
                    actions.reset = true;
                }
            });

        egui::Area::new(egui::Id::new("fps_counter"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("FPS: {:.0}", fps))
                        .monospace()
                        .color(egui::Color32::from_rgb(74, 158, 255)),
                );
            });
    }

    egui::Area::new(egui::Id::new("hide_button"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 5.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let label = if state.show_panel { "X" } else { "+" };
            if ui.add_sized([30.0, 25.0], egui::Button::new(label)).clicked() {
                state.show_panel = !state.show_panel;
            }
        });

    actions
}

fn scene_selector(ui: &mut egui::Ui, state: &mut OverlayState, actions: &mut OverlayActions) {
    ui.label("Scene Selection:");
    for kind in SceneKind::ALL {
        if ui.radio(state.scene == kind, kind.name()).clicked() && state.scene != kind {
            state.scene = kind;
            actions.scene = Some(kind);
        }
    }
}

fn position_fields(ui: &mut egui::Ui, camera: &mut Camera) {
    ui.label("Position:");
    let mut position = camera.position().to_array();
    let mut changed = false;
    for (axis, value) in ["X", "Y", "Z"].iter().zip(position.iter_mut()) {
        ui.horizontal(|ui| {
            ui.label(*axis);
            changed |= ui
                .add(egui::DragValue::new(value).speed(0.1).fixed_decimals(2))
                .changed();
        });
    }
    if changed {
        camera.set_position(Vec3::from_array(position));
    }
}

fn rotation_sliders(ui: &mut egui::Ui, camera: &mut Camera) {
    ui.label("Rotation:");

    let mut yaw = camera.yaw();
    if ui
        .add(egui::Slider::new(&mut yaw, -180.0..=180.0).text("Yaw").suffix("°"))
        .changed()
    {
        camera.set_yaw(yaw);
    }

    let mut pitch = camera.pitch();
    if ui
        .add(egui::Slider::new(&mut pitch, -PITCH_LIMIT..=PITCH_LIMIT).text("Pitch").suffix("°"))
        .changed()
    {
        camera.set_pitch(pitch);
    }

    let mut roll = camera.roll();
    if ui
        .add(egui::Slider::new(&mut roll, -180.0..=180.0).text("Roll").suffix("°"))
        .changed()
    {
        camera.set_roll(roll);
    }
}

fn fov_slider(ui: &mut egui::Ui, camera: &mut Camera) {
    ui.label("Field of View:");
    let mut fov = camera.field_of_view();
    if ui
        .add(egui::Slider::new(&mut fov, FOV_MIN..=FOV_MAX).text("FOV").suffix("°"))
        .changed()
    {
        camera.set_field_of_view(fov);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(state: &mut OverlayState, camera: &mut Camera) -> OverlayActions {
        let ctx = egui::Context::default();
        let mut actions = OverlayActions::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            actions = draw(ctx, state, camera, 60.0);
        });
        actions
    }

    #[test]
    fn test_idle_frame_requests_nothing() {
        let mut state = OverlayState {
            show_panel: true,
            scene: SceneKind::Cuboids,
        };
        let mut camera = Camera::default();

        let actions = run_frame(&mut state, &mut camera);

        assert_eq!(actions, OverlayActions::default());
        assert!(state.show_panel);
        assert_eq!(camera.position(), Vec3::ZERO);
        assert_eq!(camera.field_of_view(), 45.0);
    }

    #[test]
    fn test_hidden_panel_leaves_camera_untouched() {
        let mut state = OverlayState {
            show_panel: false,
            scene: SceneKind::Rubiks,
        };
        let mut camera = Camera::default();
        camera.add_yaw(30.0);

        let actions = run_frame(&mut state, &mut camera);

        assert_eq!(actions.scene, None);
        assert!(!actions.reset);
        assert_eq!(camera.yaw(), 30.0);
    }
}
