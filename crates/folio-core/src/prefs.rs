// SPDX-License-Identifier: Apache-2.0
// © Folio Contributors <https://github.com/folio-dev/folio>
//! Theme and palette preferences, persisted as bare strings under their own
//! fixed keys. Loaded once at start; every change writes synchronously.

use crate::storage::{KvService, KvStore, PALETTE_KEY, THEME_KEY};
use tracing::warn;

/// Light/dark theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Wire spelling of the theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse the wire spelling. Unknown values parse as `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Color palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Blue-violet palette (default, stored as `"blue-violet"`).
    #[default]
    BlueViolet,
    /// Sunset palette.
    Sunset,
}

impl Palette {
    /// Wire spelling of the palette.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BlueViolet => "blue-violet",
            Self::Sunset => "sunset",
        }
    }

    /// Parse the wire spelling. Unknown values parse as `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "blue-violet" => Some(Self::BlueViolet),
            "sunset" => Some(Self::Sunset),
            _ => None,
        }
    }
}

/// Preference state plus its persistence service.
pub struct Prefs<S> {
    service: KvService<S>,
    theme: Theme,
    palette: Palette,
}

impl<S> Prefs<S>
where
    S: KvStore,
{
    /// Load preferences from storage; absent or unknown stored values fall
    /// back to the defaults.
    pub fn open(service: KvService<S>) -> Self {
        let theme = service
            .load_str(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        let palette = service
            .load_str(PALETTE_KEY)
            .and_then(|raw| Palette::parse(&raw))
            .unwrap_or_default();
        Self {
            service,
            theme,
            palette,
        }
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Current palette.
    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Flip between light and dark and persist the result.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        if let Err(err) = self.service.save_str(THEME_KEY, self.theme.as_str()) {
            warn!("failed to persist theme: {err}");
        }
        self.theme
    }

    /// Select a palette and persist it.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        if let Err(err) = self.service.save_str(PALETTE_KEY, palette.as_str()) {
            warn!("failed to persist palette: {err}");
        }
    }

    /// Consume the prefs and return the persistence service.
    pub fn into_service(self) -> KvService<S> {
        self.service
    }
}
