use std::str::FromStr;

use glam::Vec2;

use crate::{Action, GameError};

/// The three scene nodes the step reads and writes every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Ball,
    Left,
    Right,
}

impl Node {
    pub const ALL: [Node; 3] = [Node::Ball, Node::Left, Node::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Node::Ball => "ball",
            Node::Left => "left",
            Node::Right => "right",
        }
    }
}

impl FromStr for Node {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Node::ALL
            .into_iter()
            .find(|node| node.as_str() == s)
            .ok_or_else(|| GameError::UnknownName(s.to_string()))
    }
}

/// Which half of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn up_action(&self) -> Action {
        match self {
            Side::Left => Action::LeftPaddleMoveUp,
            Side::Right => Action::RightPaddleMoveUp,
        }
    }

    pub fn down_action(&self) -> Action {
        match self {
            Side::Left => Action::LeftPaddleMoveDown,
            Side::Right => Action::RightPaddleMoveDown,
        }
    }

    /// True when the ball travels toward this paddle
    pub fn faces(&self, direction: Vec2) -> bool {
        match self {
            Side::Left => direction.x < 0.0,
            Side::Right => direction.x > 0.0,
        }
    }
}

/// Center-anchored position of a scene node
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// Native size of the texture drawn for a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub size: Vec2,
}

impl Sprite {
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }
}
