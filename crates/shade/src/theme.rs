//! Theme identities: the user-facing color mode and the resolved theme.
//!
//! [`ColorMode`] is what users pick and what the OS reports. [`ResolvedTheme`]
//! is what the application actually paints with, which adds the private
//! overlay on top of the two normal modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseThemeError;

/// A normal (non-private) color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Stable name used as the persisted value.
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorMode::Dark)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// The single active theme after all precedence rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    Light,
    Dark,
    /// Runtime overlay for private browsing. Never persisted as the normal theme.
    Private,
}

impl ResolvedTheme {
    pub fn name(&self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
            ResolvedTheme::Private => "private",
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, ResolvedTheme::Private)
    }

    /// The color mode this theme renders in.
    ///
    /// The private theme is a dark palette, so it reports [`ColorMode::Dark`].
    pub fn color_mode(&self) -> ColorMode {
        match self {
            ResolvedTheme::Light => ColorMode::Light,
            ResolvedTheme::Dark | ResolvedTheme::Private => ColorMode::Dark,
        }
    }

    /// Returns the normal mode, or `None` for the private overlay.
    pub fn as_normal(&self) -> Option<ColorMode> {
        match self {
            ResolvedTheme::Light => Some(ColorMode::Light),
            ResolvedTheme::Dark => Some(ColorMode::Dark),
            ResolvedTheme::Private => None,
        }
    }
}

impl From<ColorMode> for ResolvedTheme {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ResolvedTheme::Light,
            ColorMode::Dark => ResolvedTheme::Dark,
        }
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
