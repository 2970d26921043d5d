use glam::Vec2;
use hecs::{Entity, World};

use crate::systems::{ingest_inputs, serve_ball};
use crate::{
    create_paddle, step, Ball, Config, Control, Events, GameRng, InputEvent,
    InputQueue, InputState, Paddle, Score, ServeDirection, Side, Time,
};

/// Everything one local match owns: the entity world plus its resources
pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input: InputState,
    pub input_queue: InputQueue,
    pub rng: GameRng,
    player: Entity,
    computer: Entity,
    ball: Entity,
}

impl LocalGame {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Create paddles
        let player = create_paddle(&mut world, &config, Side::Player);
        let computer = create_paddle(&mut world, &config, Side::Computer);

        // Create ball and give it an opening serve
        let mut ball = Ball::new(config.center(), Vec2::ZERO, config.ball_radius);
        serve_ball(&mut ball, &config, ServeDirection::Either, &mut rng);
        let ball = world.spawn((ball,));

        Self {
            world,
            time: Time::new(),
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputState::new(),
            input_queue: InputQueue::new(),
            rng,
            player,
            computer,
            ball,
        }
    }

    pub fn with_defaults(seed: u64) -> Self {
        Self::new(Config::default(), seed)
    }

    /// Queue raw input for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.input_queue.push(event);
    }

    /// Apply queued input. Pause/reset presses come back to the caller.
    pub fn ingest_inputs(&mut self) -> Vec<Control> {
        ingest_inputs(
            &mut self.world,
            &mut self.input_queue,
            &mut self.input,
            &self.config,
        )
    }

    /// Advance the simulation by one tick
    ///
    /// Event flags accumulate until the caller clears them;
    /// [`FrameDriver`](crate::FrameDriver) does so at the start of each frame.
    pub fn update(&mut self) {
        step(
            &mut self.world,
            &self.input,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.time.ticks += 1;
    }

    /// Zero both scores and serve in a random direction
    pub fn reset_match(&mut self) {
        self.score.reset();
        self.events.scores_reset = true;
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            serve_ball(&mut ball, &self.config, ServeDirection::Either, &mut self.rng);
        }
        log::info!("match reset");
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .get::<&Paddle>(self.paddle_entity(side))
            .ok()
            .map(|paddle| *paddle)
    }

    /// Overwrite the ball state, e.g. to set up a scenario
    pub fn set_ball(&mut self, ball: Ball) {
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.ball) {
            *current = ball;
        }
    }

    /// Move a paddle's top edge, clamped to the surface
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let entity = self.paddle_entity(side);
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            paddle.y = self.config.clamp_paddle_y(y, paddle.height);
        }
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }
}
