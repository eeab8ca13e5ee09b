/*
 * Debug Information Module
 *
 * Metrics shown in the control panel and in the on-screen overlay:
 * - FPS and frame time
 * - Time spent in the last simulation step
 * - Current tick
 * - Shape of the neighbor index built for that tick
 */

use quadflock::IndexStats;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub step_time: Duration,
    pub tick: u64,
    pub index: IndexStats,
}

impl DebugInfo {
    pub fn lines(&self) -> [String; 5] {
        [
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Step time: {:.2} ms", self.step_time.as_secs_f64() * 1000.0),
            format!("Tick: {}", self.tick),
            format!(
                "Index: {} boids, {} nodes, depth {}",
                self.index.entries, self.index.nodes, self.index.depth
            ),
        ]
    }
}
