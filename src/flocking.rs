/*
 * Flocking Module
 *
 * The three classic steering rules, each with its own radius and gain:
 * 1. Cohesion: Steer towards the average position of neighbors
 * 2. Separation: Steer away from neighbors that are too close
 * 3. Alignment: Steer towards the average velocity of neighbors
 *
 * Every rule asks the tick's neighbor index for candidates inside a square of
 * side 2 * radius around the boid, keeps only those strictly closer than the
 * radius, and skips the boid itself by index. A rule with no neighbors
 * contributes no force at all.
 */

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::spatial::NeighborIndex;
use crate::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockRules {
    pub cohesion_radius: f32,
    pub cohesion_gain: f32,
    pub separation_radius: f32,
    pub separation_gain: f32,
    pub alignment_radius: f32,
    pub alignment_gain: f32,
}

/// The individual rule contributions for one boid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SteeringForces {
    pub cohesion: Vector2,
    pub separation: Vector2,
    pub alignment: Vector2,
}

impl SteeringForces {
    pub fn total(&self) -> Vector2 {
        self.cohesion + self.separation + self.alignment
    }
}

impl From<&SimulationParams> for FlockRules {
    fn from(params: &SimulationParams) -> Self {
        Self {
            cohesion_radius: params.cohesion_radius,
            cohesion_gain: params.cohesion_gain,
            separation_radius: params.separation_radius,
            separation_gain: params.separation_gain,
            alignment_radius: params.alignment_radius,
            alignment_gain: params.alignment_gain,
        }
    }
}

impl FlockRules {
    // Calculate cohesion force (steer towards average position of neighbors)
    pub fn cohesion(&self, index: &dyn NeighborIndex, boids: &[Boid], me: usize) -> Vector2 {
        let mut center = Vector2::ZERO;
        let mut count = 0;

        for_each_neighbor(index, boids, me, self.cohesion_radius, |other, _| {
            center += other.position;
            count += 1;
        });

        if count == 0 {
            return Vector2::ZERO;
        }

        (center / count as f32 - boids[me].position) * self.cohesion_gain
    }

    // Calculate separation force (avoid crowding neighbors)
    pub fn separation(&self, index: &dyn NeighborIndex, boids: &[Boid], me: usize) -> Vector2 {
        let position = boids[me].position;
        let mut steering = Vector2::ZERO;

        for_each_neighbor(index, boids, me, self.separation_radius, |other, distance| {
            // Weight by inverse distance; coincident boids have no direction and add nothing
            steering += (position - other.position).normalize() / distance;
        });

        steering * self.separation_gain
    }

    // Calculate alignment force (steer towards average heading of neighbors)
    pub fn alignment(&self, index: &dyn NeighborIndex, boids: &[Boid], me: usize) -> Vector2 {
        let mut heading = Vector2::ZERO;
        let mut count = 0;

        for_each_neighbor(index, boids, me, self.alignment_radius, |other, _| {
            heading += other.velocity;
            count += 1;
        });

        if count == 0 {
            return Vector2::ZERO;
        }

        (heading / count as f32 - boids[me].velocity) * self.alignment_gain
    }

    pub fn forces(&self, index: &dyn NeighborIndex, boids: &[Boid], me: usize) -> SteeringForces {
        SteeringForces {
            cohesion: self.cohesion(index, boids, me),
            separation: self.separation(index, boids, me),
            alignment: self.alignment(index, boids, me),
        }
    }

    /// Combined steering force: cohesion + separation + alignment.
    pub fn steering(&self, index: &dyn NeighborIndex, boids: &[Boid], me: usize) -> Vector2 {
        self.forces(index, boids, me).total()
    }
}

// Visits every other boid strictly within `radius`, passing its distance
fn for_each_neighbor(
    index: &dyn NeighborIndex,
    boids: &[Boid],
    me: usize,
    radius: f32,
    mut visit: impl FnMut(&Boid, f32),
) {
    let radius_sq = radius * radius;
    index.visit_radius(boids[me].position, radius, &mut |other, distance_sq| {
        if other != me && distance_sq < radius_sq {
            visit(&boids[other], distance_sq.sqrt());
        }
    });
}
