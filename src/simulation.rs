/*
 * Simulation Module
 *
 * This module owns the flock and advances it one tick at a time:
 * 1. Rebuild the neighbor index from every boid's position at tick start
 * 2. Compute every boid's steering force against that frozen snapshot
 * 3. Apply the forces: integrate, clamp speed, wrap around the world
 *
 * Reads and writes never interleave. Forces land in a separate buffer and are
 * only applied once every boid has been evaluated, so no boid ever sees a
 * neighbor that has already moved this tick. That also makes the read phase
 * safe to spread across threads with rayon.
 */

use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

use crate::boid::Boid;
use crate::error::ConfigError;
use crate::flocking::FlockRules;
use crate::params::{IndexKind, SimulationParams};
use crate::spatial::{BruteForceIndex, IndexStats, NeighborIndex, Quadtree, Rect};
use crate::vector::Vector2;

/// Lifecycle of a simulation. There is no paused state; pausing is the
/// driving loop simply not calling `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationPhase {
    Idle,
    Running,
    Stopped,
}

pub struct Simulation {
    params: SimulationParams,
    rules: FlockRules,
    boids: Vec<Boid>,
    index: Box<dyn NeighborIndex>,
    // Per-tick scratch buffers, kept to avoid reallocating every tick
    positions: Vec<Vector2>,
    forces: Vec<Vector2>,
    phase: SimulationPhase,
    tick: u64,
}

/// Creates a simulation of `population` randomly placed boids in a
/// `world_width x world_height` world, overriding those fields of `params`.
pub fn initialize(
    population: usize,
    world_width: f32,
    world_height: f32,
    params: SimulationParams,
) -> Result<Simulation, ConfigError> {
    Simulation::new(SimulationParams {
        population,
        world_width,
        world_height,
        ..params
    })
}

impl Simulation {
    pub fn new(params: SimulationParams) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut rng = params.seeded_rng();
        let boids = (0..params.population)
            .map(|_| {
                Boid::random(
                    &mut rng,
                    params.world_width,
                    params.world_height,
                    params.initial_speed_min,
                    params.initial_speed_max,
                )
            })
            .collect();

        Self::from_boids(boids, params)
    }

    /// Starts from explicit boid states. `params.population` is replaced by
    /// `boids.len()`, and boids outside the world are wrapped onto its edges.
    pub fn from_boids(mut boids: Vec<Boid>, params: SimulationParams) -> Result<Self, ConfigError> {
        let params = SimulationParams {
            population: boids.len(),
            ..params
        };
        params.validate()?;

        for boid in &mut boids {
            boid.wrap_edges(params.world_width, params.world_height);
        }

        info!(
            population = params.population,
            world_width = params.world_width,
            world_height = params.world_height,
            index = ?params.index,
            parallel = params.parallel,
            "flock initialized"
        );

        Ok(Self {
            rules: FlockRules::from(&params),
            index: build_index(&params),
            positions: Vec::with_capacity(boids.len()),
            forces: Vec::with_capacity(boids.len()),
            boids,
            params,
            phase: SimulationPhase::Idle,
            tick: 0,
        })
    }

    /// Advances the flock by exactly one tick. Does nothing once stopped.
    pub fn step(&mut self) {
        match self.phase {
            SimulationPhase::Stopped => {
                warn!(tick = self.tick, "step requested on a stopped simulation");
                return;
            }
            SimulationPhase::Idle => self.phase = SimulationPhase::Running,
            SimulationPhase::Running => {}
        }

        self.rebuild_index();
        self.compute_forces();
        self.apply_forces();

        self.tick += 1;
        trace!(tick = self.tick, "tick complete");
    }

    /// Runs `ticks` consecutive steps.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    pub fn stop(&mut self) {
        if self.phase != SimulationPhase::Stopped {
            debug!(tick = self.tick, "simulation stopped");
            self.phase = SimulationPhase::Stopped;
        }
    }

    /// Boids in arena order as of the most recent step.
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn rules(&self) -> &FlockRules {
        &self.rules
    }

    pub fn phase(&self) -> SimulationPhase {
        self.phase
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    // Shape of the index built for the most recent tick
    pub fn index_stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Applies new rule and index settings without touching the flock.
    ///
    /// Population and world size are fixed for a run; the values in `params`
    /// are ignored and a new `Simulation` is needed to change them.
    pub fn retune(&mut self, params: SimulationParams) -> Result<(), ConfigError> {
        let params = SimulationParams {
            population: self.params.population,
            world_width: self.params.world_width,
            world_height: self.params.world_height,
            ..params
        };
        params.validate()?;

        if params.index != self.params.index || params.quadtree_capacity != self.params.quadtree_capacity {
            debug!(index = ?params.index, capacity = params.quadtree_capacity, "switching neighbor index");
            self.index = build_index(&params);
        }
        self.rules = FlockRules::from(&params);
        self.params = params;
        Ok(())
    }

    fn rebuild_index(&mut self) {
        self.positions.clear();
        self.positions.extend(self.boids.iter().map(|boid| boid.position));

        let rejected = self.index.rebuild(&self.positions);
        if rejected > 0 {
            // Boids are wrapped at the end of every tick, so this means the wrap is broken
            warn!(tick = self.tick, rejected, "boids outside world bounds at index rebuild");
            debug_assert_eq!(rejected, 0, "boids outside world bounds at index rebuild");
        }
    }

    // Read phase: the index and the boid arena are both read-only here
    fn compute_forces(&mut self) {
        let rules = self.rules;
        let boids = &self.boids;
        let index = self.index.as_ref();

        if self.params.parallel {
            (0..boids.len())
                .into_par_iter()
                .map(|me| rules.steering(index, boids, me))
                .collect_into_vec(&mut self.forces);
        } else {
            self.forces.clear();
            self.forces
                .extend((0..boids.len()).map(|me| rules.steering(index, boids, me)));
        }
    }

    // Write phase
    fn apply_forces(&mut self) {
        let max_speed = self.params.max_speed;
        let (width, height) = (self.params.world_width, self.params.world_height);

        for (boid, &force) in self.boids.iter_mut().zip(&self.forces) {
            boid.integrate(force, max_speed);
            boid.wrap_edges(width, height);
        }
    }
}

fn build_index(params: &SimulationParams) -> Box<dyn NeighborIndex> {
    let bounds = Rect::from_size(params.world_width, params.world_height);
    match params.index {
        IndexKind::Quadtree => Box::new(Quadtree::new(bounds, params.quadtree_capacity)),
        IndexKind::BruteForce => Box::new(BruteForceIndex::new(bounds)),
    }
}
