//! Game configuration.

use crate::rules::Variant;
use serde::{Deserialize, Serialize};

/// Settings for a new game.
///
/// Missing fields take their defaults, so an empty table is a standard
/// 8x8 absorb game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of the board. Defaults to 8.
    pub board_size: u8,
    /// Capture rule to play with. Defaults to [`Variant::Absorb`].
    pub variant: Variant,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 8,
            variant: Variant::Absorb,
        }
    }
}
