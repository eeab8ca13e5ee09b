/*
 * Viewer Application Module
 *
 * Model and update loop for the nannou window. One frame advances the flock
 * by one tick unless the simulation is paused. Population or seed changes
 * start a new flock; every other parameter is retuned in place.
 */

mod debug;
mod renderer;
mod ui;

use nannou::prelude::*;
use nannou_egui::Egui;
use quadflock::{Simulation, SimulationParams};
use std::time::Instant;
use tracing::{error, info, warn};

use self::debug::DebugInfo;

pub struct Model {
    pub sim: Simulation,
    // Working copy edited by the UI
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub paused: bool,
    pub show_debug: bool,
}

pub fn model(app: &App) -> Model {
    let params = load_params();

    let window_id = app
        .new_window()
        .title("Boid Flocking Simulation")
        .size(params.world_width as u32, params.world_height as u32)
        .view(renderer::view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let sim = match Simulation::new(params.clone()) {
        Ok(sim) => sim,
        Err(err) => {
            error!(%err, "invalid simulation parameters");
            std::process::exit(2);
        }
    };

    Model {
        sim,
        params,
        egui,
        debug_info: DebugInfo::default(),
        paused: false,
        show_debug: false,
    }
}

// Parameters from the TOML file named on the command line, or the defaults
fn load_params() -> SimulationParams {
    match std::env::args().nth(1) {
        Some(path) => match SimulationParams::load(&path) {
            Ok(params) => {
                info!(%path, "loaded config");
                params
            }
            Err(err) => {
                error!(%err, "could not load config");
                std::process::exit(2);
            }
        },
        None => SimulationParams::default(),
    }
}

pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &mut model.paused,
        &mut model.show_debug,
        &model.debug_info,
    );

    let current = model.sim.params();
    let needs_new_flock = actions.reset
        || model.params.population != current.population
        || model.params.rng_seed != current.rng_seed;

    if needs_new_flock {
        match Simulation::new(model.params.clone()) {
            Ok(sim) => model.sim = sim,
            Err(err) => warn!(%err, "keeping the current flock"),
        }
    } else if actions.params_changed {
        if let Err(err) = model.sim.retune(model.params.clone()) {
            warn!(%err, "ignoring parameter change");
        }
    }

    if !model.paused {
        let started = Instant::now();
        model.sim.step();
        model.debug_info.step_time = started.elapsed();
    }

    model.debug_info.tick = model.sim.tick();
    model.debug_info.index = model.sim.index_stats();
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Escape => {
            model.sim.stop();
            app.quit();
        }
        Key::Space => model.paused = !model.paused,
        _ => {}
    }
}

// Handle raw window events for egui
fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
