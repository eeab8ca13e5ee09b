/*
 * Quadtree Module
 *
 * Point quadtree over a fixed rectangle. A node stores entries directly until
 * it would exceed its capacity, then splits into four quadrants at its
 * midpoint and hands every entry down. Range queries only descend into
 * children whose rectangle overlaps the query rectangle.
 *
 * Nodes live in a flat arena and refer to their children by index, and the
 * whole tree is cleared and refilled once per tick.
 */

use super::{IndexStats, NeighborIndex, Rect};
use crate::vector::Vector2;

/// Leaves at this depth keep growing past capacity instead of splitting, so a
/// pile of coincident points degrades to one linear leaf.
pub(crate) const MAX_DEPTH: usize = 16;

const ROOT: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Entry {
    pub(crate) position: Vector2,
    pub(crate) payload: usize,
}

#[derive(Debug, Clone)]
enum NodeKind {
    Leaf(Vec<Entry>),
    Internal([usize; 4]),
}

#[derive(Debug, Clone)]
struct Node {
    bounds: Rect,
    depth: usize,
    kind: NodeKind,
}

impl Node {
    fn leaf(bounds: Rect, depth: usize) -> Self {
        Self {
            bounds,
            depth,
            kind: NodeKind::Leaf(Vec::new()),
        }
    }
}

// What insert should do with the node it is currently looking at
enum InsertStep {
    Descend(usize),
    Push,
    Split,
}

#[derive(Debug, Clone)]
pub struct Quadtree {
    bounds: Rect,
    capacity: usize,
    nodes: Vec<Node>,
    len: usize,
}

impl Quadtree {
    /// Empty index over `bounds`. A capacity of zero is treated as one.
    pub fn new(bounds: Rect, capacity: usize) -> Self {
        Self {
            bounds,
            capacity: capacity.max(1),
            nodes: vec![Node::leaf(bounds, 0)],
            len: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    // Reset to a single empty root
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::leaf(self.bounds, 0));
        self.len = 0;
    }

    /// Inserts `payload` at `point`. Returns false, leaving the tree untouched,
    /// when the point lies outside the index bounds.
    pub fn insert(&mut self, point: Vector2, payload: usize) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }

        let entry = Entry {
            position: point,
            payload,
        };
        let mut current = ROOT;

        loop {
            let node = &self.nodes[current];
            let step = match &node.kind {
                NodeKind::Internal(children) => InsertStep::Descend(self.route(children, point)),
                NodeKind::Leaf(entries)
                    if entries.len() < self.capacity || node.depth >= MAX_DEPTH =>
                {
                    InsertStep::Push
                }
                NodeKind::Leaf(_) => InsertStep::Split,
            };

            match step {
                InsertStep::Descend(child) => current = child,
                InsertStep::Split => self.subdivide(current),
                InsertStep::Push => {
                    if let NodeKind::Leaf(entries) = &mut self.nodes[current].kind {
                        entries.push(entry);
                    }
                    break;
                }
            }
        }

        self.len += 1;
        true
    }

    /// Payloads of every entry inside `rect`, in no particular order.
    pub fn query_range(&self, rect: &Rect) -> Vec<usize> {
        let mut found = Vec::new();
        self.visit_range(rect, |entry| found.push(entry.payload));
        found
    }

    /// Visits every entry whose position lies inside `rect`.
    pub(crate) fn visit_range(&self, rect: &Rect, mut visitor: impl FnMut(&Entry)) {
        if !self.bounds.intersects(rect) {
            return;
        }

        let mut stack = vec![ROOT];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            match &node.kind {
                NodeKind::Leaf(entries) => {
                    for entry in entries.iter().filter(|e| rect.contains(e.position)) {
                        visitor(entry);
                    }
                }
                NodeKind::Internal(children) => {
                    stack.extend(
                        children
                            .iter()
                            .copied()
                            .filter(|&child| self.nodes[child].bounds.intersects(rect)),
                    );
                }
            }
        }
    }

    // First child whose closed rectangle holds the point; shared edges go to the earlier quadrant
    fn route(&self, children: &[usize; 4], point: Vector2) -> usize {
        children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].bounds.contains(point))
            .unwrap_or(children[3])
    }

    fn subdivide(&mut self, index: usize) {
        let bounds = self.nodes[index].bounds;
        let depth = self.nodes[index].depth + 1;

        let first = self.nodes.len();
        self.nodes
            .extend(bounds.quadrants().into_iter().map(|quad| Node::leaf(quad, depth)));
        let children = [first, first + 1, first + 2, first + 3];

        let entries = match std::mem::replace(&mut self.nodes[index].kind, NodeKind::Internal(children)) {
            NodeKind::Leaf(entries) => entries,
            NodeKind::Internal(_) => return,
        };

        for entry in entries {
            let child = self.route(&children, entry.position);
            if let NodeKind::Leaf(list) = &mut self.nodes[child].kind {
                list.push(entry);
            }
        }
    }
}

impl NeighborIndex for Quadtree {
    fn rebuild(&mut self, positions: &[Vector2]) -> usize {
        self.clear();
        positions
            .iter()
            .enumerate()
            .filter(|&(payload, &position)| !self.insert(position, payload))
            .count()
    }

    fn query_range(&self, rect: &Rect) -> Vec<usize> {
        Quadtree::query_range(self, rect)
    }

    fn visit_radius(&self, center: Vector2, radius: f32, visitor: &mut dyn FnMut(usize, f32)) {
        let radius_sq = radius * radius;
        self.visit_range(&Rect::around(center, radius), |entry| {
            let distance_sq = entry.position.distance_squared(center);
            if distance_sq <= radius_sq {
                visitor(entry.payload, distance_sq);
            }
        });
    }

    fn len(&self) -> usize {
        self.len
    }

    fn stats(&self) -> IndexStats {
        IndexStats {
            entries: self.len,
            nodes: self.node_count(),
            depth: self.depth(),
        }
    }
}
