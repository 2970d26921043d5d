use hecs::World;

use crate::{Ball, Config, Paddle, PaddleIntent, Side};

/// Direction the opponent wants to move: chase the ball's height, but hold
/// still while the paddle centre is within `dead_zone` of it
pub fn opponent_intent(paddle: &Paddle, ball_y: f32, dead_zone: f32) -> i8 {
    let center = paddle.center_y();
    if center < ball_y - dead_zone {
        1
    } else if center > ball_y + dead_zone {
        -1
    } else {
        0
    }
}

/// Set the computer paddle's intent from the current ball position
pub fn drive_opponent(world: &mut World, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);
    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Computer {
            intent.dir = opponent_intent(paddle, ball_y, config.opponent_dead_zone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn paddle_at(y: f32) -> Paddle {
        Paddle::new(Side::Computer, 778.0, y, 12.0, 100.0, 5.0)
    }

    #[test]
    fn test_moves_down_toward_ball_below() {
        // centre 300, ball 307: just outside the dead-zone
        assert_eq!(opponent_intent(&paddle_at(250.0), 307.0, 6.0), 1);
    }

    #[test]
    fn test_moves_up_toward_ball_above() {
        assert_eq!(opponent_intent(&paddle_at(250.0), 293.0, 6.0), -1);
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        for ball_y in [294.0, 297.5, 300.0, 303.0, 306.0] {
            assert_eq!(
                opponent_intent(&paddle_at(250.0), ball_y, 6.0),
                0,
                "ball_y={ball_y} is within the dead-zone"
            );
        }
    }

    #[test]
    fn test_drive_opponent_only_touches_computer() {
        let mut world = World::new();
        let config = Config::new();
        let player = create_paddle(&mut world, &config, Side::Player);
        let computer = create_paddle(&mut world, &config, Side::Computer);
        create_ball(&mut world, &config, Vec2::new(400.0, 50.0), Vec2::new(5.0, 0.0));

        drive_opponent(&mut world, &config);

        assert_eq!(world.get::<&PaddleIntent>(computer).unwrap().dir, -1);
        assert_eq!(world.get::<&PaddleIntent>(player).unwrap().dir, 0);
    }

    #[test]
    fn test_drive_opponent_without_ball() {
        let mut world = World::new();
        let config = Config::new();
        let computer = create_paddle(&mut world, &config, Side::Computer);

        drive_opponent(&mut world, &config);

        assert_eq!(world.get::<&PaddleIntent>(computer).unwrap().dir, 0);
    }
}
