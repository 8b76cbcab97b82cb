//! Theme precedence rules.
//!
//! Resolution walks [`PRECEDENCE`] in order and takes the first rule that
//! produces a theme:
//!
//! | Order | Rule | Applies when | Yields |
//! |-------|------|--------------|--------|
//! | 1 | [`Rule::PrivateOverlay`] | private mode on | `Private` |
//! | 2 | [`Rule::AutoBrightness`] | auto-brightness on | `Dark` if brightness < threshold, else `Light` |
//! | 3 | [`Rule::FollowSystem`] | follow-system on | OS appearance |
//! | 4 | [`Rule::Explicit`] | always | explicit theme |
//!
//! Everything here is pure: the inputs are a snapshot, nothing is read from
//! a store or the OS.

use crate::preferences::ThemePreferences;
use crate::theme::{ColorMode, ResolvedTheme};

/// One step of the precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    PrivateOverlay,
    AutoBrightness,
    FollowSystem,
    Explicit,
}

/// Rules in evaluation order, highest precedence first.
pub const PRECEDENCE: [Rule; 4] = [
    Rule::PrivateOverlay,
    Rule::AutoBrightness,
    Rule::FollowSystem,
    Rule::Explicit,
];

/// Snapshot of everything resolution depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeInputs {
    pub preferences: ThemePreferences,
    /// Current ambient screen brightness in `[0, 1]`.
    pub brightness: f32,
    /// Appearance reported by the OS.
    pub system: ColorMode,
}

impl Rule {
    /// Evaluates this rule alone, returning `None` when it does not apply.
    pub fn apply(&self, inputs: &ThemeInputs) -> Option<ResolvedTheme> {
        let prefs = &inputs.preferences;
        match self {
            Rule::PrivateOverlay => prefs.private_mode.then_some(ResolvedTheme::Private),
            Rule::AutoBrightness => prefs.auto_brightness.then(|| {
                brightness_mode(inputs.brightness, prefs.brightness_threshold).into()
            }),
            Rule::FollowSystem => prefs.follow_system.then(|| inputs.system.into()),
            Rule::Explicit => Some(prefs.explicit_theme.into()),
        }
    }
}

/// Maps ambient brightness to a mode: dim surroundings get the dark theme.
///
/// The boundary is inclusive on the light side, so `brightness == threshold`
/// is light.
pub fn brightness_mode(brightness: f32, threshold: f32) -> ColorMode {
    if brightness < threshold {
        ColorMode::Dark
    } else {
        ColorMode::Light
    }
}

/// Resolves the active theme and the rule that produced it.
pub fn resolve(inputs: &ThemeInputs) -> (ResolvedTheme, Rule) {
    evaluate(inputs, &PRECEDENCE)
}

/// Resolves the theme the user would see with the private overlay removed.
pub fn resolve_normal(inputs: &ThemeInputs) -> (ColorMode, Rule) {
    let (theme, rule) = evaluate(inputs, &PRECEDENCE[1..]);
    (theme.color_mode(), rule)
}

fn evaluate(inputs: &ThemeInputs, rules: &[Rule]) -> (ResolvedTheme, Rule) {
    rules
        .iter()
        .find_map(|rule| rule.apply(inputs).map(|theme| (theme, *rule)))
        .unwrap_or((inputs.preferences.explicit_theme.into(), Rule::Explicit))
}
