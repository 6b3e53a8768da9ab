//! Error types for facet_animation

use thiserror::Error;

/// Errors that can occur while configuring animations
#[derive(Error, Debug)]
pub enum AnimationError {
    /// A parametric animation was configured without enough curve samples
    #[error("parametric curve needs at least 2 samples, got {0}")]
    CurveTooShort(usize),
}

/// Result type for facet_animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
