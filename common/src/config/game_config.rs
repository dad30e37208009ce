use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::defaults::{COMPUTER_MOVE_DELAY, MAX_COMPUTER_MOVE_DELAY};
use super::Validate;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub computer_opponent: bool,
    pub computer_move_delay_ms: u64,
    pub sound_enabled: bool,
    pub celebration_enabled: bool,
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn computer_move_delay(&self) -> Duration {
        Duration::from_millis(self.computer_move_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            computer_opponent: true,
            computer_move_delay_ms: COMPUTER_MOVE_DELAY.as_millis() as u64,
            sound_enabled: true,
            celebration_enabled: true,
            seed: None,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay() > MAX_COMPUTER_MOVE_DELAY {
            return Err(format!(
                "Computer move delay must be at most {} ms, got {}",
                MAX_COMPUTER_MOVE_DELAY.as_millis(),
                self.computer_move_delay_ms
            ));
        }
        Ok(())
    }
}
