//! The debug panel. Immediate mode keeps the sliders live: they render from
//! `Settings`, which the viewer resyncs after every completed load.

use std::f32::consts::PI;

use crate::registry::ModelRegistry;
use crate::scene::Scene;
use crate::settings::Settings;

#[derive(Debug, Default, Clone, Copy)]
pub struct UiResponse {
    pub load_requested: bool,
}

pub fn draw(
    ctx: &egui::Context,
    settings: &mut Settings,
    scene: &mut Scene,
    registry: &ModelRegistry,
) -> UiResponse {
    let mut response = UiResponse::default();

    egui::Window::new("Models")
        .default_pos(egui::pos2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            // Selection only arms the next load; nothing is reloaded or
            // removed here.
            egui::ComboBox::from_label("Models")
                .selected_text(settings.model.clone())
                .show_ui(ui, |ui| {
                    for name in registry.names() {
                        ui.selectable_value(&mut settings.model, name.to_string(), name);
                    }
                });

            egui::CollapsingHeader::new("Position of the last loaded object")
                .default_open(true)
                .show(ui, |ui| {
                    let axes = [
                        ("modelX", 0usize),
                        ("modelY", 1usize),
                        ("modelZ", 2usize),
                    ];
                    for (label, axis) in axes {
                        let changed = ui
                            .add(
                                egui::Slider::new(&mut settings.position[axis], -200.0..=200.0)
                                    // Resynced values may sit outside the range;
                                    // they must render as-is, not get clamped.
                                    .clamping(egui::SliderClamping::Never)
                                    .text(label),
                            )
                            .changed();
                        if changed {
                            // Guarded no-op before the first load completes.
                            if let Some(model) = scene.last_loaded_mut() {
                                model.transform.position[axis] = settings.position[axis];
                            }
                        }
                    }
                });

            egui::CollapsingHeader::new("Rotation of the last loaded object (*PI)")
                .default_open(true)
                .show(ui, |ui| {
                    let axes = [
                        ("rotationX", 0usize),
                        ("rotationY", 1usize),
                        ("rotationZ", 2usize),
                    ];
                    for (label, axis) in axes {
                        let changed = ui
                            .add(
                                egui::Slider::new(&mut settings.rotation_pi[axis], 0.0..=2.0)
                                    .step_by(0.01)
                                    .clamping(egui::SliderClamping::Never)
                                    .text(label),
                            )
                            .changed();
                        if changed {
                            if let Some(model) = scene.last_loaded_mut() {
                                model.transform.rotation[axis] = settings.rotation_pi[axis] * PI;
                            }
                        }
                    }
                });

            if ui.button("Load selected model").clicked() {
                response.load_requested = true;
            }
        });

    response
}
