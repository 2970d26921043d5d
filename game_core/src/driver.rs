//! Frame driver
//!
//! The host calls [`FrameDriver::on_frame`] once per display refresh (or
//! [`FrameDriver::tick`] to sample the injected [`Clock`]). Each call drains
//! queued input, then runs one physics tick and one render unless paused.

use std::cell::Cell;
use std::rc::Rc;

use crate::{render, Control, Events, LocalGame, Params, Surface};

/// Source of the current time in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

impl<F: Fn() -> f64> Clock for F {
    fn now_ms(&self) -> f64 {
        self()
    }
}

/// Clock that only moves when told to; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Whether frames advance the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }
}

/// What happened during one frame callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub elapsed_ms: f64,
    pub ticked: bool, // physics and render ran
    pub run_state: RunState,
    pub events: Events,
}

/// Drives a [`LocalGame`] one frame at a time
pub struct FrameDriver<C: Clock> {
    clock: C,
    state: RunState,
    last_frame_ms: Option<f64>,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: RunState::Running,
            last_frame_ms: None,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    /// Flip between running and paused
    pub fn toggle_pause(&mut self) -> RunState {
        self.state = self.state.toggled();
        match self.state {
            RunState::Paused => log::info!("paused"),
            RunState::Running => log::info!("resumed"),
        }
        self.state
    }

    /// Run one frame at the clock's current time
    pub fn tick<S: Surface + ?Sized>(&mut self, game: &mut LocalGame, surface: &mut S) -> FrameReport {
        let now = self.clock.now_ms();
        self.on_frame(now, game, surface)
    }

    /// Run one frame for a refresh callback at `timestamp_ms`
    ///
    /// The first callback only establishes the time baseline (elapsed 0).
    /// Input is ingested every frame so pause can be released; update and
    /// render only happen while running.
    pub fn on_frame<S: Surface + ?Sized>(
        &mut self,
        timestamp_ms: f64,
        game: &mut LocalGame,
        surface: &mut S,
    ) -> FrameReport {
        let elapsed_ms = match self.last_frame_ms {
            Some(last) => timestamp_ms - last,
            None => 0.0,
        };
        self.last_frame_ms = Some(timestamp_ms);
        game.time.dt_ms = elapsed_ms;
        game.time.now_ms += elapsed_ms;

        // Clear events at start of frame
        game.events.clear();

        for control in game.ingest_inputs() {
            match control {
                Control::TogglePause => {
                    self.toggle_pause();
                }
                Control::Reset => game.reset_match(),
            }
        }

        let ticked = self.state == RunState::Running;
        if ticked {
            game.update();
            render(&game.world, &game.config, surface);

            if game.time.ticks % Params::TICK_LOG_INTERVAL == 0 {
                log::debug!(
                    "tick={}, score={}-{}, last frame {:.1}ms",
                    game.time.ticks,
                    game.score.player,
                    game.score.computer,
                    elapsed_ms
                );
            }
        }

        FrameReport {
            elapsed_ms,
            ticked,
            run_state: self.state,
            events: game.events,
        }
    }
}
