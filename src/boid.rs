/*
 * Boid Module
 *
 * This module defines the Boid struct: one simulated agent with a position
 * and a velocity. The stepper owns all boids in one Vec and identifies them
 * by index, so Boid deliberately carries no id and is never compared by value
 * to decide "is this me".
 *
 * Each tick a boid is moved exactly once:
 * 1. Add the combined steering force to the velocity
 * 2. Clamp the speed to max_speed
 * 3. Move by the velocity
 * 4. Teleport across the world edges (toroidal wrap)
 */

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boid {
    pub position: Vector2,
    pub velocity: Vector2,
}

impl Boid {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self { position, velocity }
    }

    /// Random position inside `width x height` and a random heading with a
    /// speed drawn from `speed_min..=speed_max`.
    pub fn random<R: Rng>(
        rng: &mut R,
        width: f32,
        height: f32,
        speed_min: f32,
        speed_max: f32,
    ) -> Self {
        let x = rng.gen_range(0.0..width);
        let y = rng.gen_range(0.0..height);

        // Random initial velocity
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(speed_min..=speed_max);
        let velocity = Vector2::new(angle.cos(), angle.sin()) * speed;

        Self::new(Vector2::new(x, y), velocity)
    }

    // Update the boid's velocity and position from this tick's steering force
    pub fn integrate(&mut self, force: Vector2, max_speed: f32) {
        self.velocity = (self.velocity + force).clamp_length(max_speed);
        self.position += self.velocity;
    }

    // Wrap the boid around the world edges
    pub fn wrap_edges(&mut self, width: f32, height: f32) {
        self.position.x = wrap_axis(self.position.x, width);
        self.position.y = wrap_axis(self.position.y, height);
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

// Teleport, not a bounce: leaving one edge puts the boid on the opposite edge
#[inline]
fn wrap_axis(value: f32, bound: f32) -> f32 {
    if value < 0.0 {
        bound
    } else if value > bound {
        0.0
    } else {
        value
    }
}
