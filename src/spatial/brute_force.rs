use super::{NeighborIndex, Rect};
use crate::vector::Vector2;

/// Linear scan over a copy of the tick's positions.
///
/// This is the O(n^2) baseline the quadtree is measured and tested against.
#[derive(Debug, Clone)]
pub struct BruteForceIndex {
    bounds: Rect,
    // (position, payload) for every accepted point
    entries: Vec<(Vector2, usize)>,
}

impl BruteForceIndex {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            entries: Vec::new(),
        }
    }
}

impl NeighborIndex for BruteForceIndex {
    fn rebuild(&mut self, positions: &[Vector2]) -> usize {
        self.entries.clear();
        let mut rejected = 0;
        for (payload, &position) in positions.iter().enumerate() {
            if self.bounds.contains(position) {
                self.entries.push((position, payload));
            } else {
                rejected += 1;
            }
        }
        rejected
    }

    fn query_range(&self, rect: &Rect) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|(position, _)| rect.contains(*position))
            .map(|&(_, payload)| payload)
            .collect()
    }

    fn visit_radius(&self, center: Vector2, radius: f32, visitor: &mut dyn FnMut(usize, f32)) {
        let radius_sq = radius * radius;
        for &(position, payload) in &self.entries {
            let distance_sq = position.distance_squared(center);
            if distance_sq <= radius_sq {
                visitor(payload, distance_sq);
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
