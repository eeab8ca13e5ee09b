/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains every tunable
 * value of the flocking simulation. Parameters can be loaded from a TOML file,
 * adjusted through the viewer UI, and are validated before a simulation is
 * allowed to start.
 */

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Which neighbor index the stepper rebuilds every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexKind {
    #[default]
    Quadtree,
    /// Linear scan over all boids, the O(n^2) baseline
    BruteForce,
}

// Parameters for the simulation that can be adjusted via config file or UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub population: usize,
    pub world_width: f32,
    pub world_height: f32,
    pub max_speed: f32,
    pub separation_radius: f32,
    pub cohesion_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_gain: f32,
    pub separation_gain: f32,
    pub alignment_gain: f32,
    pub quadtree_capacity: usize,
    // Speed range for the randomized starting velocity
    pub initial_speed_min: f32,
    pub initial_speed_max: f32,
    pub rng_seed: Option<u64>,
    pub index: IndexKind,
    // Performance settings
    pub parallel: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            population: 500,
            world_width: 1600.0,
            world_height: 1000.0,
            max_speed: 4.0,
            separation_radius: 25.0,
            cohesion_radius: 50.0,
            alignment_radius: 50.0,
            cohesion_gain: 0.01,
            separation_gain: 1.5,
            alignment_gain: 0.125,
            quadtree_capacity: 8,
            initial_speed_min: 0.5,
            initial_speed_max: 2.0,
            rng_seed: None,
            index: IndexKind::Quadtree,
            parallel: false,
        }
    }
}

impl SimulationParams {
    /// Parses parameters from TOML; missing keys fall back to the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let params: Self = toml::from_str(source)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// RNG for initial placement; draws a fresh seed from entropy when none is configured.
    pub fn seeded_rng(&self) -> SmallRng {
        match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        }
    }

    /// Rejects any configuration the simulation must not start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.quadtree_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("max_speed", self.max_speed),
            ("separation_radius", self.separation_radius),
            ("cohesion_radius", self.cohesion_radius),
            ("alignment_radius", self.alignment_radius),
        ];
        let non_negative = [
            ("cohesion_gain", self.cohesion_gain),
            ("separation_gain", self.separation_gain),
            ("alignment_gain", self.alignment_gain),
            ("initial_speed_min", self.initial_speed_min),
            ("initial_speed_max", self.initial_speed_max),
        ];

        for &(field, value) in positive.iter().chain(non_negative.iter()) {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.initial_speed_min > self.initial_speed_max {
            return Err(ConfigError::InvertedSpeedRange {
                min: self.initial_speed_min,
                max: self.initial_speed_max,
            });
        }

        Ok(())
    }

    // Get parameter ranges for UI sliders
    pub fn get_population_range() -> std::ops::RangeInclusive<usize> {
        10..=20000
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        0.5..=20.0
    }

    pub fn get_gain_range() -> std::ops::RangeInclusive<f32> {
        0.0..=3.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        5.0..=150.0
    }

    pub fn get_capacity_range() -> std::ops::RangeInclusive<usize> {
        1..=64
    }
}
