//! # Shade - Light, Dark and Private Theme Selection
//!
//! `shade` decides which theme an application should display from a handful
//! of user preferences and the state of its environment, and keeps that
//! decision persisted in a key-value preference store the host provides.
//!
//! ## Core Concepts
//!
//! - [`ThemeSelector`]: Tracks the active theme and persists preference changes
//! - [`ResolvedTheme`]: The active theme (`Light`, `Dark` or `Private`)
//! - [`ColorMode`]: A normal light or dark mode, as chosen by users or the OS
//! - [`Rule`]: One step of the precedence table that resolution walks
//! - [`PreferenceStore`]: The storage seam; [`MemoryStore`] is bundled
//! - [`AppearanceSource`]: The OS appearance seam; [`OsAppearance`] is bundled
//!
//! ## Precedence
//!
//! ```text
//! private mode      → Private
//! auto-brightness   → Dark below threshold, Light at or above
//! follow system     → OS appearance
//! explicit theme    → user's choice
//! ```
//!
//! The first rule that applies wins. Private mode is an overlay: it never
//! overwrites the saved normal theme, and turning it off restores whatever
//! the remaining rules yield.
//!
//! ## Quick Start
//!
//! ```rust
//! use shade::{MemoryStore, MockAppearance, ResolvedTheme, ThemeSelector};
//!
//! let mut selector = ThemeSelector::new(MemoryStore::new(), MockAppearance::light())
//!     .with_brightness(0.5);
//!
//! selector.set_auto_brightness(true);
//! selector.set_brightness_threshold(0.75);
//! assert_eq!(selector.current_theme(), ResolvedTheme::Dark);
//!
//! selector.set_brightness_threshold(0.25);
//! assert_eq!(selector.current_theme(), ResolvedTheme::Light);
//! ```
//!
//! In an application, pass [`OsAppearance`] instead of the mock and call
//! [`ThemeSelector::system_appearance_changed`] and
//! [`ThemeSelector::set_screen_brightness`] from the platform's change
//! notifications.
//!
//! ## Logging
//!
//! Theme changes are reported through [`tracing`] at `debug` level, and
//! malformed stored values at `warn`. No subscriber is installed.

pub mod appearance;
mod error;
pub mod preferences;
pub mod rules;
mod selector;
pub mod store;
mod theme;

pub use appearance::{AppearanceSource, MockAppearance, OsAppearance};
pub use error::{ConfigError, ParseThemeError};
pub use preferences::ThemePreferences;
pub use rules::{Rule, ThemeInputs, PRECEDENCE};
pub use selector::{ThemeSelector, DEFAULT_BRIGHTNESS};
pub use store::{keys, MemoryStore, PrefValue, PreferenceStore};
pub use theme::{ColorMode, ResolvedTheme};
