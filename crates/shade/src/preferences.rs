//! Theme preferences and their configuration-file form.
//!
//! [`ThemePreferences`] is the persisted, user-controlled half of theme
//! selection. It can be read from a store (see
//! [`ThemeSelector::preferences`](crate::ThemeSelector::preferences)) or
//! loaded from YAML and applied in one step:
//!
//! ```rust
//! use shade::{ColorMode, ThemePreferences};
//!
//! let prefs = ThemePreferences::from_yaml(r#"
//! explicit_theme: dark
//! follow_system: false
//! auto_brightness: true
//! brightness_threshold: 0.3
//! "#).unwrap();
//!
//! assert_eq!(prefs.explicit_theme, ColorMode::Dark);
//! assert!(!prefs.private_mode);
//! ```
//!
//! Omitted fields take the same defaults the selector registers with its
//! store.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::store::defaults;
use crate::theme::ColorMode;

/// User preferences that drive theme resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemePreferences {
    /// Theme used when no automatic rule applies.
    pub explicit_theme: ColorMode,
    /// Track the OS appearance.
    pub follow_system: bool,
    /// Private browsing overlay.
    pub private_mode: bool,
    /// Switch on ambient brightness.
    pub auto_brightness: bool,
    /// Brightness below which auto-brightness picks dark, in `[0, 1]`.
    pub brightness_threshold: f32,
}

impl Default for ThemePreferences {
    fn default() -> Self {
        Self {
            explicit_theme: defaults::THEME,
            follow_system: defaults::FOLLOW_SYSTEM,
            private_mode: defaults::PRIVATE_MODE,
            auto_brightness: defaults::AUTO_BRIGHTNESS,
            brightness_threshold: defaults::BRIGHTNESS_THRESHOLD,
        }
    }
}

impl ThemePreferences {
    /// Parses and validates preferences from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let prefs: Self = serde_yaml::from_str(yaml)?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// Reads preferences from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, and the
    /// [`from_yaml`](Self::from_yaml) errors otherwise.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that the brightness threshold is a finite value in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.brightness_threshold;
        if t.is_finite() && (0.0..=1.0).contains(&t) {
            Ok(())
        } else {
            Err(ConfigError::InvalidThreshold(t))
        }
    }
}
