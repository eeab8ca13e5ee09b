/*
 * Error Module
 *
 * Configuration is the only place the simulation can fail. Once a Simulation
 * has been initialized, ticks cannot fail.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading or validating simulation parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("population must be at least 1")]
    EmptyPopulation,

    /// A value that has to be strictly positive was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    #[error("quadtree_capacity must be at least 1")]
    ZeroCapacity,

    #[error("initial speed range is inverted: min {min} > max {max}")]
    InvertedSpeedRange { min: f32, max: f32 },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
