use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents, one fixed step per tick
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * paddle.speed;
        }
        paddle.y = config.clamp_paddle_y(paddle.y, paddle.height);
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    #[test]
    fn test_paddle_moves_by_speed() {
        let mut world = World::new();
        let config = Config::new();
        let player = create_paddle(&mut world, &config, Side::Player);
        let start = world.get::<&Paddle>(player).unwrap().y;

        world.get::<&mut PaddleIntent>(player).unwrap().dir = -1;
        move_paddles(&mut world, &config);

        assert_eq!(
            world.get::<&Paddle>(player).unwrap().y,
            start - config.player_speed
        );
    }

    #[test]
    fn test_paddle_clamped_at_edges() {
        let mut world = World::new();
        let config = Config::new();
        let computer = create_paddle(&mut world, &config, Side::Computer);

        world.get::<&mut Paddle>(computer).unwrap().y = 2.0;
        world.get::<&mut PaddleIntent>(computer).unwrap().dir = -1;
        move_paddles(&mut world, &config);
        assert_eq!(world.get::<&Paddle>(computer).unwrap().y, 0.0);

        world.get::<&mut Paddle>(computer).unwrap().y = 498.0;
        world.get::<&mut PaddleIntent>(computer).unwrap().dir = 1;
        move_paddles(&mut world, &config);
        assert_eq!(world.get::<&Paddle>(computer).unwrap().y, 500.0);
    }

    #[test]
    fn test_ball_moves_one_velocity_per_tick() {
        let mut world = World::new();
        let config = Config::new();
        let ball = create_ball(&mut world, &config, Vec2::new(400.0, 300.0), Vec2::new(5.0, -2.0));

        move_ball(&mut world);
        move_ball(&mut world);

        assert_eq!(world.get::<&Ball>(ball).unwrap().pos, Vec2::new(410.0, 296.0));
    }
}
