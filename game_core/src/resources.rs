use glam::Vec2;
use rand::RngCore;

use crate::{GameError, Node, Scene, Side};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Ball motion that survives between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallState {
    pub direction: Vec2, // Unit vector
    pub speed: f32,      // Pixels per second
}

impl BallState {
    pub fn new(direction: Vec2, speed: f32) -> Self {
        Self { direction, speed }
    }

    /// Opening serve, toward the right paddle
    pub fn serve_right(speed: f32) -> Self {
        Self::new(Vec2::X, speed)
    }

    /// Serve after a miss, toward the left paddle
    pub fn serve_left(speed: f32) -> Self {
        Self::new(Vec2::NEG_X, speed)
    }

    pub fn velocity(&self) -> Vec2 {
        self.direction * self.speed
    }
}

/// Node positions read from the scene at the start of a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub ball: Vec2,
    pub left: Vec2,
    pub right: Vec2,
}

impl Frame {
    pub fn new(ball: Vec2, left: Vec2, right: Vec2) -> Self {
        Self { ball, left, right }
    }

    /// Read all three nodes; nothing is written if one is missing
    pub fn read<S: Scene + ?Sized>(scene: &S) -> Result<Self, GameError> {
        let get = |node: Node| scene.position(node).ok_or(GameError::MissingNode(node));
        Ok(Self::new(get(Node::Ball)?, get(Node::Left)?, get(Node::Right)?))
    }

    /// Paddles first, then the ball
    pub fn write<S: Scene + ?Sized>(&self, scene: &mut S) {
        scene.set_position(Node::Left, self.left);
        scene.set_position(Node::Right, self.right);
        scene.set_position(Node::Ball, self.ball);
    }

    pub fn paddle(&self, side: Side) -> Vec2 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Vec2 {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Screen and paddle extents, captured once when the game starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub screen: Vec2,
    pub paddle_size: Vec2,
}

impl Arena {
    pub fn new(screen: Vec2, paddle_size: Vec2) -> Self {
        Self {
            screen,
            paddle_size,
        }
    }

    /// Read the viewport and paddle footprint from the scene.
    ///
    /// Fails if any node the step relies on is missing, so a broken scene is
    /// caught before the first frame.
    pub fn capture<S: Scene + ?Sized>(scene: &S) -> Result<Self, GameError> {
        for node in Node::ALL {
            if scene.position(node).is_none() {
                return Err(GameError::MissingNode(node));
            }
        }

        let paddle_size = scene
            .sprite_size(Node::Left)
            .ok_or(GameError::MissingSprite(Node::Left))?;

        let arena = Self::new(scene.viewport_size(), paddle_size);
        log::info!(
            "Arena captured: screen {}x{}, paddle {}x{}",
            arena.screen.x,
            arena.screen.y,
            arena.paddle_size.x,
            arena.paddle_size.y
        );
        Ok(arena)
    }

    pub fn width(&self) -> f32 {
        self.screen.x
    }

    pub fn height(&self) -> f32 {
        self.screen.y
    }

    pub fn center(&self) -> Vec2 {
        self.screen / 2.0
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

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_left_paddle: bool,
    pub ball_hit_right_paddle: bool,
    pub ball_exited: Option<Side>, // Edge the ball crossed before being served again
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_left_paddle = false;
        self.ball_hit_right_paddle = false;
        self.ball_exited = None;
    }

    pub fn record_paddle_hit(&mut self, side: Side) {
        match side {
            Side::Left => self.ball_hit_left_paddle = true,
            Side::Right => self.ball_hit_right_paddle = true,
        }
    }

    pub fn ball_hit_paddle(&self) -> bool {
        self.ball_hit_left_paddle || self.ball_hit_right_paddle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sprite, WorldScene};
    use rand::Rng;

    #[test]
    fn test_serves_point_along_x() {
        let opening = BallState::serve_right(80.0);
        assert_eq!(opening.direction, Vec2::new(1.0, 0.0));
        assert_eq!(opening.velocity(), Vec2::new(80.0, 0.0));

        let after_miss = BallState::serve_left(80.0);
        assert_eq!(after_miss.direction, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_frame_read_reports_first_missing_node() {
        let mut scene = WorldScene::new(Vec2::new(800.0, 600.0));
        scene.spawn_node(Node::Ball, Vec2::new(400.0, 300.0), None);
        scene.spawn_node(Node::Left, Vec2::new(20.0, 300.0), None);

        let result = Frame::read(&scene);
        assert!(matches!(result, Err(GameError::MissingNode(Node::Right))));
    }

    #[test]
    fn test_frame_write_round_trips_through_scene() {
        let mut scene = WorldScene::new(Vec2::new(800.0, 600.0));
        for node in Node::ALL {
            scene.spawn_node(node, Vec2::ZERO, None);
        }

        let mut frame = Frame::read(&scene).unwrap();
        frame.ball = Vec2::new(1.0, 2.0);
        *frame.paddle_mut(Side::Right) = Vec2::new(780.0, 90.0);
        frame.write(&mut scene);

        assert_eq!(scene.position(Node::Ball), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(scene.position(Node::Right), Some(Vec2::new(780.0, 90.0)));
        assert_eq!(scene.position(Node::Left), Some(Vec2::ZERO));
    }

    #[test]
    fn test_arena_center() {
        let arena = Arena::new(Vec2::new(800.0, 600.0), Vec2::new(10.0, 50.0));
        assert_eq!(arena.center(), Vec2::new(400.0, 300.0));
        assert_eq!(arena.width(), 800.0);
        assert_eq!(arena.height(), 600.0);
    }

    #[test]
    fn test_arena_capture_reads_left_sprite() {
        let mut scene = WorldScene::new(Vec2::new(640.0, 400.0));
        scene.spawn_node(Node::Ball, Vec2::new(320.0, 200.0), None);
        scene.spawn_node(
            Node::Left,
            Vec2::new(20.0, 200.0),
            Some(Sprite::new(Vec2::new(8.0, 40.0))),
        );
        scene.spawn_node(
            Node::Right,
            Vec2::new(620.0, 200.0),
            Some(Sprite::new(Vec2::new(8.0, 40.0))),
        );

        let arena = Arena::capture(&scene).unwrap();
        assert_eq!(arena.screen, Vec2::new(640.0, 400.0));
        assert_eq!(arena.paddle_size, Vec2::new(8.0, 40.0));
    }

    #[test]
    fn test_arena_capture_fails_without_ball() {
        let mut scene = WorldScene::new(Vec2::new(640.0, 400.0));
        let paddle = Some(Sprite::new(Vec2::new(8.0, 40.0)));
        scene.spawn_node(Node::Left, Vec2::new(20.0, 200.0), paddle);
        scene.spawn_node(Node::Right, Vec2::new(620.0, 200.0), paddle);

        let result = Arena::capture(&scene);
        assert!(matches!(result, Err(GameError::MissingNode(Node::Ball))));
    }

    #[test]
    fn test_arena_capture_fails_without_paddle_sprite() {
        let mut scene = WorldScene::new(Vec2::new(640.0, 400.0));
        scene.spawn_node(Node::Ball, Vec2::new(320.0, 200.0), None);
        scene.spawn_node(Node::Left, Vec2::new(20.0, 200.0), None);
        scene.spawn_node(Node::Right, Vec2::new(620.0, 200.0), None);

        let result = Arena::capture(&scene);
        assert!(matches!(result, Err(GameError::MissingSprite(Node::Left))));
    }

    #[test]
    fn test_game_rng_is_deterministic() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..8 {
            assert_eq!(a.gen::<f32>(), b.gen::<f32>());
        }
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.record_paddle_hit(Side::Left);
        events.record_paddle_hit(Side::Right);
        events.ball_exited = Some(Side::Right);
        assert!(events.ball_hit_paddle());

        events.clear();

        assert!(!events.ball_hit_wall);
        assert!(!events.ball_hit_paddle());
        assert_eq!(events.ball_exited, None);
    }
}
