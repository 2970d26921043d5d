use crate::{Ball, Config, Events, GameRng, Score, ServeDirection};
use hecs::World;

/// Check if the ball reached a side edge; award the point and serve again
/// away from the edge it crossed
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let serve = if ball.pos.x - ball.radius <= 0.0 {
            score.increment_computer();
            events.computer_scored = true;
            ServeDirection::Right
        } else if ball.pos.x + ball.radius >= config.surface_width {
            score.increment_player();
            events.player_scored = true;
            ServeDirection::Left
        } else {
            continue;
        };

        log::debug!("point scored, {} - {}", score.player, score.computer);
        serve_ball(ball, config, serve, rng);
    }
}

/// Put the ball back in the middle at serve speed
pub fn serve_ball(ball: &mut Ball, config: &Config, direction: ServeDirection, rng: &mut GameRng) {
    ball.serve_random(
        config.center(),
        config.ball_speed_serve,
        config.max_serve_angle,
        direction,
        rng,
    );
}
