/*
 * Boid Flocking Viewer
 *
 * Opens a window and watches the flock move. All of the simulation lives in
 * the quadflock library; this binary only drives `Simulation::step` once per
 * frame, draws the boids, and exposes the parameters as sliders.
 *
 * Usage: quadflock [config.toml]
 * Set RUST_LOG (e.g. RUST_LOG=quadflock=debug) to see simulation logs.
 */

mod viewer;

fn main() {
    init_tracing();
    tracing::info!("starting boid viewer");

    nannou::app(viewer::model)
        .update(viewer::update)
        .run();
}

fn init_tracing() {
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
    {
        eprintln!("could not install tracing subscriber: {err}");
    }
}
