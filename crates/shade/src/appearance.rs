//! OS appearance sources.
//!
//! The selector asks an [`AppearanceSource`] for the system's light/dark
//! appearance whenever it recomputes. [`OsAppearance`] queries the platform;
//! [`MockAppearance`] lets tests simulate appearance changes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dark_light::Mode as OsMode;
use tracing::warn;

use crate::theme::ColorMode;

/// Reports the appearance the operating system currently prefers.
pub trait AppearanceSource {
    fn appearance(&self) -> ColorMode;
}

/// Real appearance source backed by the platform's settings.
///
/// Detection failures and platforms with no preference report
/// [`ColorMode::Light`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OsAppearance;

impl AppearanceSource for OsAppearance {
    fn appearance(&self) -> ColorMode {
        match dark_light::detect() {
            Ok(OsMode::Dark) => ColorMode::Dark,
            Ok(OsMode::Light) | Ok(OsMode::Unspecified) => ColorMode::Light,
            Err(error) => {
                warn!(error = ?error, "Failed to detect OS appearance; assuming light");
                ColorMode::Light
            }
        }
    }
}

/// Mock appearance source for testing.
///
/// Clones share state, so a test can keep one handle and flip the
/// appearance after handing another to a selector.
#[derive(Debug, Clone, Default)]
pub struct MockAppearance {
    dark: Arc<AtomicBool>,
}

impl MockAppearance {
    pub fn light() -> Self {
        Self::default()
    }

    pub fn dark() -> Self {
        Self {
            dark: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Changes the simulated OS appearance.
    pub fn set(&self, mode: ColorMode) {
        self.dark.store(mode.is_dark(), Ordering::SeqCst);
    }
}

impl AppearanceSource for MockAppearance {
    fn appearance(&self) -> ColorMode {
        if self.dark.load(Ordering::SeqCst) {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }
}

impl<A: AppearanceSource + ?Sized> AppearanceSource for &A {
    fn appearance(&self) -> ColorMode {
        (**self).appearance()
    }
}
