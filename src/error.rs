use std::path::PathBuf;

use crate::game::{Action, GamePhase, Token};

/// Errors that can occur while constructing or driving a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("unsupported grid dimensions {rows}x{cols} (supported: 6-9 rows, 7-9 columns)")]
    UnsupportedDimensions { rows: usize, cols: usize },

    #[error("both players were assigned the {0} token")]
    IdenticalTokens(Token),

    #[error("no such player {0} (expected 0 or 1)")]
    InvalidPlayer(usize),

    #[error("{action} is not allowed while the game is {phase}")]
    PhaseViolation { action: Action, phase: GamePhase },

    #[error("position ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("column {col} is not a valid column index (grid has {cols} columns)")]
    InvalidColumn { col: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
