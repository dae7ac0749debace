//! Input mapping

use serde::{Deserialize, Serialize};

/// A discrete input event, already stripped of device details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// The designated jump key
    Jump,
    /// Any other key (restarts a finished run)
    Other,
}

impl Input {
    /// Map a key name (as reported by DOM `KeyboardEvent.key` or a terminal
    /// backend) onto an input
    pub fn from_key(key: &str) -> Self {
        match key {
            " " | "Space" | "Spacebar" => Input::Jump,
            _ => Input::Other,
        }
    }
}
