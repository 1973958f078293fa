use std::fmt;

use crate::Node;

/// Errors surfaced while wiring the simulation to its host
#[derive(Debug)]
pub enum GameError {
    /// A node the step reads every frame is not in the scene
    MissingNode(Node),
    /// A paddle has no sprite to measure its size from
    MissingSprite(Node),
    /// A node or action name the host passed in is not one we know
    UnknownName(String),
    /// Config overrides could not be parsed
    Config(serde_json::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MissingNode(node) => {
                write!(f, "scene has no node named '{}'", node.as_str())
            }
            GameError::MissingSprite(node) => {
                write!(f, "node '{}' has no sprite to size it from", node.as_str())
            }
            GameError::UnknownName(name) => write!(f, "unknown name '{name}'"),
            GameError::Config(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Config(err)
    }
}
