/*
 * Renderer Module
 *
 * Draws the flock and the debug overlay. The simulation world has its origin
 * in the top-left corner with y growing downwards; nannou draws around the
 * window center with y growing upwards, so every point goes through
 * `WorldView::to_screen`.
 */

use nannou::prelude::*;
use quadflock::Vector2;

use super::Model;

const BOID_SIZE: f32 = 6.0;

// Fits the whole world into the window, keeping the aspect ratio
struct WorldView {
    scale: f32,
    half_width: f32,
    half_height: f32,
}

impl WorldView {
    fn new(world_width: f32, world_height: f32, window: nannou::geom::Rect) -> Self {
        Self {
            scale: (window.w() / world_width).min(window.h() / world_height),
            half_width: world_width / 2.0,
            half_height: world_height / 2.0,
        }
    }

    fn to_screen(&self, point: Vector2) -> Point2 {
        pt2(
            (point.x - self.half_width) * self.scale,
            (self.half_height - point.y) * self.scale,
        )
    }
}

pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let params = model.sim.params();
    let world = WorldView::new(params.world_width, params.world_height, app.window_rect());

    // World boundary
    draw.rect()
        .xy(pt2(0.0, 0.0))
        .w_h(params.world_width * world.scale, params.world_height * world.scale)
        .no_fill()
        .stroke_weight(1.0)
        .stroke(rgba(0.3, 0.3, 0.3, 1.0));

    let size = BOID_SIZE * world.scale.max(0.5);
    let points = [
        pt2(size, 0.0),
        pt2(-size, size / 2.0),
        pt2(-size, -size / 2.0),
    ];

    for boid in model.sim.boids() {
        // y is flipped on screen, so is the heading
        let angle = (-boid.velocity.y).atan2(boid.velocity.x);
        draw.polygon()
            .color(rgb(220u8, 220u8, 220u8))
            .points(points)
            .xy(world.to_screen(boid.position))
            .rotate(angle);
    }

    if model.show_debug {
        draw_debug(&draw, model, &world, app.window_rect());
    }

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}

// Rule radii and velocity of the first boid, plus the metrics text
fn draw_debug(draw: &Draw, model: &Model, world: &WorldView, window: nannou::geom::Rect) {
    if let Some(first) = model.sim.boids().first() {
        let center = world.to_screen(first.position);
        let rules = model.sim.rules();

        for (radius, color) in [
            (rules.separation_radius, RED),
            (rules.alignment_radius, GREEN),
            (rules.cohesion_radius, BLUE),
        ] {
            draw.ellipse()
                .xy(center)
                .radius(radius * world.scale)
                .no_fill()
                .stroke(color)
                .stroke_weight(1.0);
        }

        draw.arrow()
            .start(center)
            .end(world.to_screen(first.position + first.velocity * 5.0))
            .color(YELLOW)
            .stroke_weight(2.0);
    }

    let line_height = 20.0;
    for (i, text) in model.debug_info.lines().iter().enumerate() {
        draw.text(text)
            .x_y(window.right() - 150.0, window.top() - 20.0 - i as f32 * line_height)
            .color(WHITE)
            .font_size(14);
    }
}
