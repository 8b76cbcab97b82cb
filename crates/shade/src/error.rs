//! Error types for theme names and preference loading.

use std::io;

/// A string that does not name a normal color mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme name '{0}' (expected 'light' or 'dark')")]
pub struct ParseThemeError(pub String);

/// Errors that can occur while loading theme preferences from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read preferences: {0}")]
    Io(#[from] io::Error),

    /// The configuration document is not valid YAML or has the wrong shape.
    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The brightness threshold is outside `[0, 1]` or not finite.
    #[error("Brightness threshold {0} is outside the range 0.0..=1.0")]
    InvalidThreshold(f32),
}
