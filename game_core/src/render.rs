//! Drawing the current state onto a 2D surface.
//!
//! [`render`] only reads the world. The host supplies a [`Surface`] that maps
//! the calls onto its drawing API.

use hecs::World;

use crate::{Ball, Config, Paddle, Palette, Params, Side};

/// Minimal 2D drawing target
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
}

/// Draw one frame: background, net, paddles, ball
pub fn render<S: Surface + ?Sized>(world: &World, config: &Config, surface: &mut S) {
    let (w, h) = (config.surface_width, config.surface_height);

    surface.clear_rect(0.0, 0.0, w, h);
    surface.fill_rect(0.0, 0.0, w, h, Palette::BACKGROUND);
    draw_net(config, surface);

    // Player before computer so draw order does not depend on spawn order
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side != Side::Player);
    for paddle in &paddles {
        let color = match paddle.side {
            Side::Player => Palette::PLAYER,
            Side::Computer => Palette::COMPUTER,
        };
        surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, color);
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, Palette::BALL);
        surface.stroke_circle(ball.pos.x, ball.pos.y, ball.radius, Palette::BALL_OUTLINE);
    }
}

/// Dashed vertical line down the middle
fn draw_net<S: Surface + ?Sized>(config: &Config, surface: &mut S) {
    let x = config.surface_width / 2.0 - Params::NET_WIDTH / 2.0;
    let pitch = Params::NET_SEGMENT * Params::NET_STRIDE;
    let mut y = 0.0;
    while y < config.surface_height {
        surface.fill_rect(x, y, Params::NET_WIDTH, Params::NET_SEGMENT, Palette::NET);
        y += pitch;
    }
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, color: String },
    Circle { x: f32, y: f32, radius: f32, color: String },
    CircleOutline { x: f32, y: f32, radius: f32, color: String },
}

/// Surface that keeps a list of everything drawn on it
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of complete frames recorded (each frame starts with a clear)
    pub fn frames(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Clear { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Clear { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.calls.push(DrawCall::Circle {
            x,
            y,
            radius,
            color: color.to_string(),
        });
    }

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.calls.push(DrawCall::CircleOutline {
            x,
            y,
            radius,
            color: color.to_string(),
        });
    }
}
