use hecs::World;

use crate::components::*;
use crate::resources::*;
use crate::Config;

/// Drain queued input: latch key flags, move the player paddle to the pointer
/// immediately, and hand pause/reset presses back to the caller in order
pub fn ingest_inputs(
    world: &mut World,
    queue: &mut InputQueue,
    input: &mut InputState,
    config: &Config,
) -> Vec<Control> {
    let mut controls = Vec::new();

    for event in queue.drain() {
        match event {
            InputEvent::KeyDown(Key::Up) => input.up_pressed = true,
            InputEvent::KeyDown(Key::Down) => input.down_pressed = true,
            InputEvent::KeyDown(Key::Pause) => controls.push(Control::TogglePause),
            InputEvent::KeyDown(Key::Reset) => controls.push(Control::Reset),
            InputEvent::KeyUp(Key::Up) => input.up_pressed = false,
            InputEvent::KeyUp(Key::Down) => input.down_pressed = false,
            InputEvent::KeyUp(Key::Pause | Key::Reset) => {}
            InputEvent::PointerMove(sample) => {
                let Some(y) = sample.surface_y(config.surface_height) else {
                    continue;
                };
                follow_pointer(world, y, config);
            }
        }
    }

    controls
}

/// Centre the player paddle on `y`, keeping it on the surface
pub fn follow_pointer(world: &mut World, y: f32, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = config.clamp_paddle_y(y - paddle.height / 2.0, paddle.height);
        }
    }
}

/// Turn the held keys into the player's movement intent for this tick
pub fn apply_player_intent(world: &mut World, input: &InputState) {
    let dir = input.key_dir();
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Player {
            intent.dir = dir;
        }
    }
}
