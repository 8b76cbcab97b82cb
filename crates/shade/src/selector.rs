//! The theme selector.
//!
//! [`ThemeSelector`] owns an injected [`PreferenceStore`] and
//! [`AppearanceSource`], keeps the current [`ResolvedTheme`] up to date as
//! preferences and environment change, and notifies listeners when it moves.
//!
//! # Example
//!
//! ```rust
//! use shade::{ColorMode, MemoryStore, MockAppearance, ResolvedTheme, ThemeSelector};
//!
//! let mut selector = ThemeSelector::new(MemoryStore::new(), MockAppearance::light());
//! assert_eq!(selector.current_theme(), ResolvedTheme::Light);
//!
//! selector.set_follow_system(false);
//! selector.set_explicit_theme(ColorMode::Dark);
//! assert_eq!(selector.current_theme(), ResolvedTheme::Dark);
//!
//! selector.set_private_mode(true);
//! assert_eq!(selector.current_theme(), ResolvedTheme::Private);
//! assert_eq!(selector.normal_saved_theme(), ColorMode::Dark);
//!
//! selector.set_private_mode(false);
//! assert_eq!(selector.current_theme(), ResolvedTheme::Dark);
//! ```

use std::fmt;

use tracing::{debug, warn};

use crate::appearance::AppearanceSource;
use crate::preferences::ThemePreferences;
use crate::rules::{self, Rule, ThemeInputs};
use crate::store::{defaults, keys, PreferenceStore, REGISTERED_DEFAULTS};
use crate::theme::{ColorMode, ResolvedTheme};

/// Ambient brightness assumed until the host reports a reading.
pub const DEFAULT_BRIGHTNESS: f32 = 1.0;

type Listener = Box<dyn FnMut(ResolvedTheme)>;

/// Resolves and tracks the active theme.
///
/// Every setter persists its value to the store and then recomputes. The
/// store is the source of truth: [`reload`](Self::reload) picks up values
/// written to it by someone else.
pub struct ThemeSelector<S, A> {
    store: S,
    appearance: A,
    brightness: f32,
    current: ResolvedTheme,
    rule: Rule,
    listeners: Vec<Listener>,
}

impl<S: PreferenceStore, A: AppearanceSource> ThemeSelector<S, A> {
    /// Creates a selector, registering the default preferences with `store`.
    pub fn new(mut store: S, appearance: A) -> Self {
        store.register_defaults(&REGISTERED_DEFAULTS);
        let mut selector = Self {
            store,
            appearance,
            brightness: DEFAULT_BRIGHTNESS,
            current: defaults::THEME.into(),
            rule: Rule::Explicit,
            listeners: Vec::new(),
        };
        let (theme, rule) = rules::resolve(&selector.inputs());
        selector.current = theme;
        selector.rule = rule;
        selector
    }

    /// Sets the initial ambient brightness, returning `self` for chaining.
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self.recompute();
        self
    }

    /// The active theme.
    pub fn current_theme(&self) -> ResolvedTheme {
        self.current
    }

    /// The rule that produced [`current_theme`](Self::current_theme).
    pub fn active_rule(&self) -> Rule {
        self.rule
    }

    /// The persisted normal theme. Never [`ResolvedTheme::Private`], and
    /// unaffected by turning private mode on.
    pub fn normal_saved_theme(&self) -> ColorMode {
        self.stored_theme()
    }

    /// The theme that would be active if private mode were off.
    pub fn normal_theme(&self) -> ColorMode {
        rules::resolve_normal(&self.inputs()).0
    }

    /// The most recent ambient brightness reading.
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Snapshot of the stored preferences, with defaults filled in.
    pub fn preferences(&self) -> ThemePreferences {
        ThemePreferences {
            explicit_theme: self.stored_theme(),
            follow_system: self
                .store
                .bool(keys::FOLLOW_SYSTEM)
                .unwrap_or(defaults::FOLLOW_SYSTEM),
            private_mode: self
                .store
                .bool(keys::PRIVATE_MODE)
                .unwrap_or(defaults::PRIVATE_MODE),
            auto_brightness: self
                .store
                .bool(keys::AUTO_BRIGHTNESS)
                .unwrap_or(defaults::AUTO_BRIGHTNESS),
            brightness_threshold: self
                .store
                .float(keys::BRIGHTNESS_THRESHOLD)
                .unwrap_or(defaults::BRIGHTNESS_THRESHOLD),
        }
    }

    /// Sets the theme used when no automatic rule applies.
    ///
    /// Follow-system and auto-brightness are left as they are, so while
    /// either is on the explicit theme is stored but not shown.
    pub fn set_explicit_theme(&mut self, theme: ColorMode) {
        self.store.set(keys::THEME_NAME, theme.into());
        self.recompute();
    }

    pub fn set_follow_system(&mut self, enabled: bool) {
        self.store.set(keys::FOLLOW_SYSTEM, enabled.into());
        self.recompute();
    }

    pub fn set_auto_brightness(&mut self, enabled: bool) {
        self.store.set(keys::AUTO_BRIGHTNESS, enabled.into());
        self.recompute();
    }

    /// Sets the auto-brightness threshold.
    ///
    /// Callers are expected to pass a value in `[0, 1]`; it is stored as given.
    pub fn set_brightness_threshold(&mut self, threshold: f32) {
        self.store.set(keys::BRIGHTNESS_THRESHOLD, threshold.into());
        self.recompute();
    }

    /// Turns the private overlay on or off. The normal theme key is untouched.
    pub fn set_private_mode(&mut self, enabled: bool) {
        self.store.set(keys::PRIVATE_MODE, enabled.into());
        self.recompute();
    }

    /// Records a new ambient brightness reading.
    pub fn set_screen_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
        self.recompute();
    }

    /// Re-queries the OS appearance after the host observed a change.
    pub fn system_appearance_changed(&mut self) {
        self.recompute();
    }

    /// Writes a full preference set to the store and recomputes once.
    pub fn apply_preferences(&mut self, prefs: &ThemePreferences) {
        self.store.set(keys::THEME_NAME, prefs.explicit_theme.into());
        self.store.set(keys::FOLLOW_SYSTEM, prefs.follow_system.into());
        self.store.set(keys::PRIVATE_MODE, prefs.private_mode.into());
        self.store
            .set(keys::AUTO_BRIGHTNESS, prefs.auto_brightness.into());
        self.store
            .set(keys::BRIGHTNESS_THRESHOLD, prefs.brightness_threshold.into());
        self.recompute();
    }

    /// Re-reads preferences from the store, e.g. after an external write.
    pub fn reload(&mut self) {
        self.recompute();
    }

    /// Registers a callback invoked with the new theme whenever it changes.
    ///
    /// Recomputations that land on the same theme do not fire.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(ResolvedTheme) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the store. Call [`reload`](Self::reload) after
    /// writing through it.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn inputs(&self) -> ThemeInputs {
        ThemeInputs {
            preferences: self.preferences(),
            brightness: self.brightness,
            system: self.appearance.appearance(),
        }
    }

    fn stored_theme(&self) -> ColorMode {
        match self.store.text(keys::THEME_NAME) {
            Some(name) => name.parse().unwrap_or_else(|err| {
                warn!(error = %err, "Ignoring stored theme name");
                defaults::THEME
            }),
            None => defaults::THEME,
        }
    }

    fn recompute(&mut self) {
        let (theme, rule) = rules::resolve(&self.inputs());
        self.rule = rule;
        if theme == self.current {
            return;
        }
        debug!(theme = %theme, previous = %self.current, rule = ?rule, "Theme changed");
        self.current = theme;
        for listener in &mut self.listeners {
            listener(theme);
        }
    }
}

impl<S: fmt::Debug, A: fmt::Debug> fmt::Debug for ThemeSelector<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeSelector")
            .field("store", &self.store)
            .field("appearance", &self.appearance)
            .field("brightness", &self.brightness)
            .field("current", &self.current)
            .field("rule", &self.rule)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
