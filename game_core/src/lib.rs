pub mod components;
pub mod config;
pub mod error;
pub mod host;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;
pub mod world;

pub use components::*;
pub use config::*;
pub use error::*;
pub use host::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use world::*;

use rand::Rng;
use systems::*;

/// Advance the game by one rendered frame of `time.dt` seconds.
///
/// Phases run in a fixed order and each sees what the previous one left:
/// walls, left paddle, right paddle, serve, paddle moves, ball move. The
/// delta is used as given, without clamping or sub-stepping.
///
/// Fails only if the scene is missing a node, before anything is changed.
#[allow(clippy::too_many_arguments)]
pub fn step<S, I, R>(
    scene: &mut S,
    input: &I,
    arena: &Arena,
    config: &Config,
    ball: &mut BallState,
    rng: &mut R,
    events: &mut Events,
    time: &mut Time,
) -> Result<(), GameError>
where
    S: Scene + ?Sized,
    I: InputSource + ?Sized,
    R: Rng + ?Sized,
{
    // 1. Read node positions
    let mut frame = Frame::read(scene)?;

    // Clear events at start of frame
    events.clear();

    // 2. Ceiling and floor
    bounce_off_walls(frame.ball, ball, arena, events);

    // 3. Paddles
    bounce_off_paddles(&frame, ball, arena, config, rng, events);

    // 4. Ball left the court
    serve_if_out_of_bounds(&mut frame, ball, arena, config, events);

    // 5. Paddles follow held keys
    move_paddles(&mut frame, input, arena, config, time);

    // 6. Ball
    move_ball(&mut frame, ball, time);

    // 7. Write back
    frame.write(scene);

    time.now += time.dt;
    Ok(())
}

/// Everything the step keeps between frames, for hosts that drive one game
pub struct Game {
    pub arena: Arena,
    pub config: Config,
    pub ball: BallState,
    pub rng: GameRng,
    pub events: Events,
    pub time: Time,
}

impl Game {
    /// Capture the arena from the scene and serve toward the right paddle
    pub fn ready<S>(scene: &S, config: Config, seed: u64) -> Result<Self, GameError>
    where
        S: Scene + ?Sized,
    {
        let arena = Arena::capture(scene)?;
        let ball = BallState::serve_right(config.initial_ball_speed);

        Ok(Self {
            arena,
            config,
            ball,
            rng: GameRng::new(seed),
            events: Events::new(),
            time: Time::new(0.0, 0.0),
        })
    }

    /// Run one step for a frame that took `delta` seconds
    pub fn process<S, I>(
        &mut self,
        scene: &mut S,
        input: &I,
        delta: f32,
    ) -> Result<&Events, GameError>
    where
        S: Scene + ?Sized,
        I: InputSource + ?Sized,
    {
        self.time.dt = delta;
        step(
            scene,
            input,
            &self.arena,
            &self.config,
            &mut self.ball,
            &mut self.rng,
            &mut self.events,
            &mut self.time,
        )?;
        Ok(&self.events)
    }
}

/// Helper to build a scene with the ball centered and both paddles on their
/// baselines, `inset` pixels in from the side edges
pub fn create_court(viewport: glam::Vec2, paddle_size: glam::Vec2, inset: f32) -> WorldScene {
    let mut scene = WorldScene::new(viewport);
    let mid_y = viewport.y / 2.0;
    let paddle = Some(Sprite::new(paddle_size));

    scene.spawn_node(Node::Ball, viewport / 2.0, None);
    scene.spawn_node(Node::Left, glam::Vec2::new(inset, mid_y), paddle);
    scene.spawn_node(Node::Right, glam::Vec2::new(viewport.x - inset, mid_y), paddle);
    scene
}
