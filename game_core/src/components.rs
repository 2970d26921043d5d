use glam::Vec2;
use rand::Rng;

use crate::geometry::Aabb;

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human-controlled, left edge
    Player,
    /// Scripted opponent, right edge
    Computer,
}

impl Side {
    /// Horizontal sign of a ball travelling away from this paddle
    pub fn away(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Computer => -1.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // left edge, fixed for the whole run
    pub y: f32, // top edge, clamped to the surface
    pub width: f32,
    pub height: f32,
    pub speed: f32, // pixels per tick
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
            speed,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner_size(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
        )
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Where the next serve heads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeDirection {
    /// Toward the computer's side (`dx > 0`)
    Right,
    /// Toward the player's side (`dx < 0`)
    Left,
    /// Coin toss
    Either,
}

/// Ball component - the pong ball
///
/// `speed` is the scalar magnitude of `vel`. Every full velocity assignment
/// keeps `vel.length() == speed`; wall reflections only flip a sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed: vel.length(),
        }
    }

    /// Set speed and direction together. `angle` is measured from the +x axis
    /// with y pointing down; `dir` is the horizontal sign.
    pub fn launch(&mut self, speed: f32, angle: f32, dir: f32) {
        self.speed = speed;
        self.vel = Vec2::new(dir * speed * angle.cos(), speed * angle.sin());
    }

    /// Re-centre the ball and send it off at a fixed angle
    pub fn serve(&mut self, center: Vec2, speed: f32, angle: f32, dir: f32) {
        self.pos = center;
        self.launch(speed, angle, dir);
    }

    /// Re-centre the ball with a uniformly random angle in `[-max_angle, max_angle]`
    pub fn serve_random(
        &mut self,
        center: Vec2,
        speed: f32,
        max_angle: f32,
        direction: ServeDirection,
        rng: &mut crate::GameRng,
    ) {
        let angle = if max_angle > 0.0 {
            rng.0.gen_range(-max_angle..=max_angle)
        } else {
            0.0
        };
        let dir = match direction {
            ServeDirection::Right => 1.0,
            ServeDirection::Left => -1.0,
            ServeDirection::Either => {
                if rng.0.gen_bool(0.5) {
                    1.0
                } else {
                    -1.0
                }
            }
        };
        log::trace!("serve: angle={angle:.3} rad, dir={dir}");
        self.serve(center, speed, angle, dir);
    }
}
