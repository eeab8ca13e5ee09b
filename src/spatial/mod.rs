/*
 * Spatial Index Module
 *
 * Neighbor lookups for the flocking rules. Every tick the stepper rebuilds one
 * index from the boid positions at the start of that tick, then all rule
 * queries for the tick run against that single read-only snapshot.
 *
 * Indices store plain usize payloads that point into the stepper's boid
 * arena, so an index never owns boid data and cannot outlive a rebuild with
 * stale references.
 */

mod brute_force;
mod quadtree;
mod rect;

pub use brute_force::BruteForceIndex;
pub use quadtree::Quadtree;
pub use rect::Rect;

use crate::vector::Vector2;

/// Common behaviour of the per-tick neighbor indices.
pub trait NeighborIndex: Send + Sync {
    /// Discards the previous contents and inserts `positions[i]` with payload `i`.
    ///
    /// Returns how many positions were rejected for lying outside the index
    /// bounds. The stepper wraps boids before every rebuild, so anything
    /// other than zero is a logic error upstream.
    fn rebuild(&mut self, positions: &[Vector2]) -> usize;

    /// Payloads whose position lies inside the closed rectangle `rect`.
    fn query_range(&self, rect: &Rect) -> Vec<usize>;

    /// Calls `visitor(payload, distance_squared)` for every payload within
    /// `radius` (inclusive) of `center`.
    fn visit_radius(&self, center: Vector2, radius: f32, visitor: &mut dyn FnMut(usize, f32));

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn query_radius(&self, center: Vector2, radius: f32) -> Vec<usize> {
        let mut found = Vec::new();
        self.visit_radius(center, radius, &mut |payload, _| found.push(payload));
        found
    }

    // Node count and depth, for the debug overlay
    fn stats(&self) -> IndexStats {
        IndexStats {
            entries: self.len(),
            nodes: 1,
            depth: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStats {
    pub entries: usize,
    pub nodes: usize,
    pub depth: usize,
}
