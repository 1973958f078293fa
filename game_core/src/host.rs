//! Seams between the simulation and the engine that hosts it.
//!
//! The step never touches a scene graph or a keyboard directly. A host hands
//! it a [`Scene`] for node positions and sizes, and an [`InputSource`] for the
//! four paddle actions. [`crate::WorldScene`] and [`ActionState`] are the
//! in-process implementations used by local hosts and tests.

use std::str::FromStr;

use glam::Vec2;

use crate::{GameError, Node};

/// Node positions and extents owned by the host
pub trait Scene {
    /// Current center position of a node, `None` if the host has no such node
    fn position(&self, node: Node) -> Option<Vec2>;

    fn set_position(&mut self, node: Node, position: Vec2);

    /// Visible screen extent
    fn viewport_size(&self) -> Vec2;

    /// Native size of the texture drawn for a node
    fn sprite_size(&self, node: Node) -> Option<Vec2>;
}

/// Held state of logical input actions
pub trait InputSource {
    fn is_action_pressed(&self, action: Action) -> bool;
}

/// Logical paddle actions; hosts bind physical keys to these names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    LeftPaddleMoveUp,
    LeftPaddleMoveDown,
    RightPaddleMoveUp,
    RightPaddleMoveDown,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::LeftPaddleMoveUp,
        Action::LeftPaddleMoveDown,
        Action::RightPaddleMoveUp,
        Action::RightPaddleMoveDown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::LeftPaddleMoveUp => "left_paddle_move_up",
            Action::LeftPaddleMoveDown => "left_paddle_move_down",
            Action::RightPaddleMoveUp => "right_paddle_move_up",
            Action::RightPaddleMoveDown => "right_paddle_move_down",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Action {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| GameError::UnknownName(s.to_string()))
    }
}

/// In-memory input state, toggled by the host as key events arrive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionState {
    pressed: [bool; 4],
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.set(action, true);
    }

    pub fn release(&mut self, action: Action) {
        self.set(action, false);
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        self.pressed[action.index()] = pressed;
    }

    pub fn release_all(&mut self) {
        self.pressed = [false; 4];
    }
}

impl InputSource for ActionState {
    fn is_action_pressed(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }
}
