//! Crate-wide error type

use thiserror::Error;

/// Errors surfaced by level setup, entity construction and configuration
#[derive(Debug, Error)]
pub enum GameError {
    /// Rejection sampling ran out of attempts before every item was placed
    #[error("level generation failed: placed {placed} {item} after {attempts} attempts")]
    LevelGenerationFailed {
        item: &'static str,
        placed: usize,
        attempts: u32,
    },
    #[error("unknown enemy variant index {0}")]
    UnknownEnemyVariant(u8),
    #[error("animation `{0}` has no frames")]
    EmptyAnimation(&'static str),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
