//! Deterministic single-player Pong simulation.
//!
//! Entities live in a [`hecs::World`]; systems are plain functions over the
//! world and a handful of resources. Drawing goes through the [`Surface`]
//! trait and frame pacing through [`FrameDriver`], so the whole game runs
//! without a browser.

pub mod components;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the simulation
///
/// Order: player intent, opponent intent, paddle moves, ball move, wall
/// bounces, paddle bounces, scoring.
pub fn step(
    world: &mut World,
    input: &InputState,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1. Held keys drive the player paddle
    apply_player_intent(world, input);

    // 2. Opponent chases the ball
    drive_opponent(world, config);

    // 3. Move paddles based on intents
    move_paddles(world, config);

    // 4. Move ball
    move_ball(world);

    // 5. Check collisions (walls, then paddles)
    check_walls(world, config, events);
    check_paddles(world, config, events);

    // 6. Check scoring (ball reached a side edge)
    check_scoring(world, config, score, events, rng);
}

/// Helper to create a paddle entity at its resting position
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let speed = match side {
        Side::Player => config.player_speed,
        Side::Computer => config.computer_speed,
    };
    let paddle = Paddle::new(
        side,
        config.paddle_x(side),
        config.paddle_start_y(),
        config.paddle_width,
        config.paddle_height,
        speed,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    config: &Config,
    pos: glam::Vec2,
    vel: glam::Vec2,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_radius),))
}
