use crate::{Ball, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Reflect the ball off the top and bottom walls
pub fn check_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - ball.radius <= 0.0 {
            ball.pos.y = ball.radius;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        } else if ball.pos.y + ball.radius >= config.surface_height {
            ball.pos.y = config.surface_height - ball.radius;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Whether the ball is travelling toward this paddle's face
pub fn approaching(paddle: &Paddle, ball: &Ball) -> bool {
    match paddle.side {
        Side::Player => ball.vel.x < 0.0,
        Side::Computer => ball.vel.x > 0.0,
    }
}

/// Speed and velocity after the ball strikes `paddle`
///
/// The further from the paddle centre the hit lands, the steeper the return,
/// up to `max_bounce_angle` at the tips. The hit offset is not clamped, so a
/// corner graze can go slightly past that.
pub fn bounce_velocity(paddle: &Paddle, ball: &Ball, config: &Config) -> (f32, Vec2) {
    let relative = (paddle.center_y() - ball.pos.y) / paddle.half_height();
    let angle = relative * config.max_bounce_angle;
    let speed = (ball.speed + config.ball_speed_step).min(config.ball_speed_max);

    let vx = paddle.side.away() * (speed * angle.cos()).abs();
    let vy = -speed * angle.sin();
    (speed, Vec2::new(vx, vy))
}

/// Bounce the ball off whichever paddle it overlaps while heading toward it.
/// The player paddle is checked first; at most one hit registers per tick.
pub fn check_paddles(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side != Side::Player);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit = paddles
            .iter()
            .find(|paddle| {
                approaching(paddle, ball)
                    && paddle.bounds().intersects_circle(ball.pos, ball.radius)
            })
            .copied();

        if let Some(paddle) = hit {
            let (speed, vel) = bounce_velocity(&paddle, ball, config);
            ball.speed = speed;
            ball.vel = vel;
            events.ball_hit_paddle = true;
            log::trace!("{:?} paddle hit, ball speed now {speed}", paddle.side);
        }
    }
}
