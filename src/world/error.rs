//! Error types for arena data loading.

use thiserror::Error;

/// Errors that can occur when loading the arena layout.
#[derive(Debug, Error)]
pub enum ArenaLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A block has a zero or negative extent.
    #[error("Block {index} has invalid size {size:?}")]
    InvalidBlockSize { index: usize, size: (f32, f32, f32) },

    /// Nothing in the layout can ground the player.
    #[error("Layout has no Ground block")]
    NoGround,
}
