use serde::{Deserialize, Serialize};

use crate::{GameError, Params};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub initial_ball_speed: f32,
    pub paddle_speed: f32,
    pub paddle_speed_up: f32,
    pub bounce_spread: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_ball_speed: Params::INITIAL_BALL_SPEED,
            paddle_speed: Params::PAD_SPEED,
            paddle_speed_up: Params::PADDLE_SPEED_UP,
            bounce_spread: Params::BOUNCE_SPREAD,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from JSON; omitted fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Config = serde_json::from_str(json)?;
        log::debug!("Loaded config overrides: {:?}", config);
        Ok(config)
    }

    /// Distance a paddle travels in `dt` seconds while its key is held
    pub fn paddle_step(&self, dt: f32) -> f32 {
        self.paddle_speed * dt
    }
}
