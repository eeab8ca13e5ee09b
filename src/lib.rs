/*
 * Boid Flocking Core - Module Definitions
 *
 * Library side of the simulation: the flocking rules, the per-tick quadtree
 * used for neighbor queries, and the stepper tying them together. Windowing
 * and drawing live in the optional viewer binary.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use error::ConfigError;
pub use flocking::{FlockRules, SteeringForces};
pub use params::{IndexKind, SimulationParams};
pub use simulation::{initialize, Simulation, SimulationPhase};
pub use spatial::{BruteForceIndex, IndexStats, NeighborIndex, Quadtree, Rect};
pub use vector::Vector2;

// Define modules
pub mod boid;
pub mod error;
pub mod flocking;
pub mod params;
pub mod simulation;
pub mod spatial;
pub mod vector;
