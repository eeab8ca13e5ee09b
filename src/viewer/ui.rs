/*
 * UI Module
 *
 * Control panel built with nannou_egui. Sliders edit a working copy of the
 * parameters; the caller decides whether the change can be applied to the
 * running flock or needs a fresh one.
 */

use nannou_egui::{egui, Egui};
use quadflock::{IndexKind, SimulationParams};

use super::debug::DebugInfo;

#[derive(Debug, Default, Clone, Copy)]
pub struct UiActions {
    pub reset: bool,
    pub params_changed: bool,
}

pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    paused: &mut bool,
    show_debug: &mut bool,
    debug_info: &DebugInfo,
) -> UiActions {
    let before = params.clone();
    let mut actions = UiActions::default();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(egui::Slider::new(&mut params.population, SimulationParams::get_population_range()).text("Population"));
                ui.add(egui::Slider::new(&mut params.max_speed, SimulationParams::get_max_speed_range()).text("Max Speed"));

                if ui.button("Reset Boids").clicked() {
                    actions.reset = true;
                }
            });

            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(egui::Slider::new(&mut params.cohesion_gain, SimulationParams::get_gain_range()).text("Cohesion Gain"));
                ui.add(egui::Slider::new(&mut params.separation_gain, SimulationParams::get_gain_range()).text("Separation Gain"));
                ui.add(egui::Slider::new(&mut params.alignment_gain, SimulationParams::get_gain_range()).text("Alignment Gain"));
                ui.add(egui::Slider::new(&mut params.cohesion_radius, SimulationParams::get_radius_range()).text("Cohesion Radius"));
                ui.add(egui::Slider::new(&mut params.separation_radius, SimulationParams::get_radius_range()).text("Separation Radius"));
                ui.add(egui::Slider::new(&mut params.alignment_radius, SimulationParams::get_radius_range()).text("Alignment Radius"));
            });

            ui.collapsing("Performance Tuning", |ui| {
                ui.radio_value(&mut params.index, IndexKind::Quadtree, "Quadtree");
                ui.radio_value(&mut params.index, IndexKind::BruteForce, "Brute force");
                ui.add(egui::Slider::new(&mut params.quadtree_capacity, SimulationParams::get_capacity_range()).text("Node Capacity"));
                ui.checkbox(&mut params.parallel, "Parallel Force Computation");

                ui.separator();

                for line in debug_info.lines() {
                    ui.label(line);
                }
            });

            ui.checkbox(show_debug, "Show Debug Info");
            ui.checkbox(paused, "Pause Simulation");
        });

    actions.params_changed = *params != before;
    actions
}
