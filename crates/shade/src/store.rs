//! Key-value preference storage.
//!
//! The selector never owns its persistence. It reads and writes typed scalars
//! through the [`PreferenceStore`] trait, keyed by the stable identifiers in
//! [`keys`]. Hosts plug in whatever backs their settings (a platform defaults
//! database, a config file, a test fixture); [`MemoryStore`] is the bundled
//! in-process implementation.
//!
//! # Defaults
//!
//! Stores support registered defaults: values returned for keys that were
//! never explicitly set. Registering defaults never overwrites a stored value.
//!
//! ```rust
//! use shade::{MemoryStore, PrefValue, PreferenceStore};
//!
//! let mut store = MemoryStore::new();
//! store.register_defaults(&[("theme.follow_system", PrefValue::Bool(true))]);
//! assert_eq!(store.bool("theme.follow_system"), Some(true));
//!
//! store.set("theme.follow_system", PrefValue::Bool(false));
//! assert_eq!(store.bool("theme.follow_system"), Some(false));
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::theme::ColorMode;

/// Stable identifiers for every persisted theme preference.
pub mod keys {
    /// Name of the normal theme (`"light"` or `"dark"`).
    pub const THEME_NAME: &str = "theme.name";
    /// Whether the theme follows the OS appearance.
    pub const FOLLOW_SYSTEM: &str = "theme.follow_system";
    /// Whether the theme switches on ambient brightness.
    pub const AUTO_BRIGHTNESS: &str = "theme.auto_brightness";
    /// Brightness below which auto-brightness selects the dark theme.
    pub const BRIGHTNESS_THRESHOLD: &str = "theme.auto_brightness_threshold";
    /// Whether the private overlay is active.
    pub const PRIVATE_MODE: &str = "theme.private_mode";
}

/// Fallback values used when a key is absent or holds a malformed value.
pub mod defaults {
    use crate::theme::ColorMode;

    pub const THEME: ColorMode = ColorMode::Light;
    pub const FOLLOW_SYSTEM: bool = true;
    pub const AUTO_BRIGHTNESS: bool = false;
    pub const BRIGHTNESS_THRESHOLD: f32 = 0.5;
    pub const PRIVATE_MODE: bool = false;
}

/// The defaults table the selector registers with its store on construction.
pub static REGISTERED_DEFAULTS: Lazy<Vec<(&'static str, PrefValue)>> = Lazy::new(|| {
    vec![
        (keys::THEME_NAME, PrefValue::from(defaults::THEME)),
        (keys::FOLLOW_SYSTEM, PrefValue::Bool(defaults::FOLLOW_SYSTEM)),
        (keys::AUTO_BRIGHTNESS, PrefValue::Bool(defaults::AUTO_BRIGHTNESS)),
        (
            keys::BRIGHTNESS_THRESHOLD,
            PrefValue::Float(defaults::BRIGHTNESS_THRESHOLD),
        ),
        (keys::PRIVATE_MODE, PrefValue::Bool(defaults::PRIVATE_MODE)),
    ]
});

/// A scalar preference value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Float(f32),
    Text(String),
}

impl PrefValue {
    fn kind(&self) -> &'static str {
        match self {
            PrefValue::Bool(_) => "bool",
            PrefValue::Float(_) => "float",
            PrefValue::Text(_) => "text",
        }
    }
}

impl From<bool> for PrefValue {
    fn from(value: bool) -> Self {
        PrefValue::Bool(value)
    }
}

impl From<f32> for PrefValue {
    fn from(value: f32) -> Self {
        PrefValue::Float(value)
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        PrefValue::Text(value)
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        PrefValue::Text(value.to_string())
    }
}

impl From<ColorMode> for PrefValue {
    fn from(mode: ColorMode) -> Self {
        PrefValue::Text(mode.name().to_string())
    }
}

/// A flat, string-keyed store of typed scalar preferences.
///
/// Implementations only need [`get`](Self::get), [`set`](Self::set) and
/// [`register_defaults`](Self::register_defaults). The typed accessors are
/// provided and return `None` both for absent keys and for values of the
/// wrong type, logging the latter.
pub trait PreferenceStore {
    /// Returns the stored value, or the registered default when unset.
    fn get(&self, key: &str) -> Option<PrefValue>;

    /// Stores a value, replacing any previous one.
    fn set(&mut self, key: &str, value: PrefValue);

    /// Registers fallback values for keys that have never been set.
    fn register_defaults(&mut self, defaults: &[(&str, PrefValue)]);

    fn bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            PrefValue::Bool(value) => Some(value),
            other => mismatched(key, "bool", &other),
        }
    }

    fn float(&self, key: &str) -> Option<f32> {
        match self.get(key)? {
            PrefValue::Float(value) => Some(value),
            other => mismatched(key, "float", &other),
        }
    }

    fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            PrefValue::Text(value) => Some(value),
            other => mismatched(key, "text", &other),
        }
    }
}

fn mismatched<T>(key: &str, expected: &str, found: &PrefValue) -> Option<T> {
    warn!(
        key,
        expected,
        found = found.kind(),
        "Stored preference has the wrong type; ignoring it"
    );
    None
}

/// In-memory preference store.
///
/// Serializable so hosts can snapshot and restore it, and so tests can seed
/// it from a literal document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    values: HashMap<String, PrefValue>,
    #[serde(skip)]
    defaults: HashMap<String, PrefValue>,
}

impl MemoryStore {
    /// Creates an empty store with no registered defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, returning the store for chaining.
    pub fn with(mut self, key: &str, value: impl Into<PrefValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// Returns `true` if the key was explicitly set (ignoring defaults).
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Removes an explicitly set value so the default applies again.
    pub fn remove(&mut self, key: &str) -> Option<PrefValue> {
        self.values.remove(key)
    }

    /// Number of explicitly set keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values
            .get(key)
            .or_else(|| self.defaults.get(key))
            .cloned()
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }

    fn register_defaults(&mut self, defaults: &[(&str, PrefValue)]) {
        for (key, value) in defaults {
            self.defaults.insert((*key).to_string(), value.clone());
        }
    }
}
