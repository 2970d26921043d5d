/// Time resource for tracking frame timing
///
/// Elapsed time is bookkeeping only; physics advances one fixed tick per
/// running frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub dt_ms: f64,  // Elapsed time since the previous frame callback
    pub now_ms: f64, // Total elapsed time since the first callback
    pub ticks: u64,  // Number of physics ticks executed
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_computer(&mut self) {
        self.computer += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub scores_reset: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The score display needs rewriting
    pub fn score_changed(&self) -> bool {
        self.player_scored || self.computer_scored || self.scores_reset
    }
}

/// Logical keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Pause,
    Reset,
}

/// Pointer position as reported by the host, in viewport pixels, together
/// with the surface's on-screen box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub client_y: f32,
    pub rect_top: f32,
    pub rect_height: f32,
}

impl PointerSample {
    pub fn new(client_y: f32, rect_top: f32, rect_height: f32) -> Self {
        Self {
            client_y,
            rect_top,
            rect_height,
        }
    }

    /// Vertical position in surface coordinates, accounting for the ratio
    /// between the logical and the displayed surface height. `None` when the
    /// surface has no visible height.
    pub fn surface_y(&self, surface_height: f32) -> Option<f32> {
        if self.rect_height.is_nan()
            || self.rect_height <= 0.0
            || !self.client_y.is_finite()
            || !self.rect_top.is_finite()
        {
            return None;
        }
        let scale = surface_height / self.rect_height;
        Some((self.client_y - self.rect_top) * scale)
    }
}

/// Raw input delivered by the host between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    PointerMove(PointerSample),
}

/// Frame-level controls extracted from input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    TogglePause,
    Reset,
}

/// Latched keyboard state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up_pressed: bool,
    pub down_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertical direction requested by the held keys
    pub fn key_dir(&self) -> i8 {
        self.down_pressed as i8 - self.up_pressed as i8
    }
}

/// Input events waiting for the next frame
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take all queued events in arrival order
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment_player();
        score.increment_computer();
        score.increment_computer();
        assert_eq!(score.player, 1);
        assert_eq!(score.computer, 2);
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score {
            player: 4,
            computer: 9,
        };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.computer_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.scores_reset = true;

        events.clear();

        assert_eq!(events, Events::new());
        assert!(!events.score_changed());
    }

    #[test]
    fn test_events_score_changed() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        assert!(!events.score_changed());
        events.scores_reset = true;
        assert!(events.score_changed());
    }

    #[test]
    fn test_key_dir() {
        let mut input = InputState::new();
        assert_eq!(input.key_dir(), 0);
        input.up_pressed = true;
        assert_eq!(input.key_dir(), -1);
        input.down_pressed = true;
        assert_eq!(input.key_dir(), 0, "Opposite keys cancel out");
        input.up_pressed = false;
        assert_eq!(input.key_dir(), 1);
    }

    #[test]
    fn test_pointer_sample_scaling() {
        // Canvas is 600 logical pixels tall but displayed at 300 CSS pixels
        let sample = PointerSample::new(250.0, 100.0, 300.0);
        assert_eq!(sample.surface_y(600.0), Some(300.0));
    }

    #[test]
    fn test_pointer_sample_without_height_is_dropped() {
        assert_eq!(PointerSample::new(10.0, 0.0, 0.0).surface_y(600.0), None);
        assert_eq!(PointerSample::new(10.0, 0.0, f32::NAN).surface_y(600.0), None);
        assert_eq!(
            PointerSample::new(f32::INFINITY, 0.0, 300.0).surface_y(600.0),
            None
        );
    }

    #[test]
    fn test_input_queue_drain_preserves_order() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::KeyDown(Key::Up));
        queue.push(InputEvent::KeyUp(Key::Up));

        let events = queue.drain();
        assert_eq!(
            events,
            vec![InputEvent::KeyDown(Key::Up), InputEvent::KeyUp(Key::Up)]
        );
        assert!(queue.is_empty());
    }
}
