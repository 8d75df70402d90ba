// SPDX-License-Identifier: Apache-2.0
// © Folio Contributors <https://github.com/folio-dev/folio>
//! Keyboard chord matching for the process-wide edit-mode shortcut.
//!
//! The key is compared case-insensitively; every modifier must match
//! exactly, so Ctrl+Shift+E does not fire on Ctrl+Shift+Alt+E.

/// A modifier+key chord the presentation layer listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    /// Key name as reported by the input layer (e.g. `"e"`, `"Escape"`).
    pub key: &'static str,
    /// Control must be held.
    pub ctrl: bool,
    /// Shift must be held.
    pub shift: bool,
    /// Alt must be held.
    pub alt: bool,
    /// Meta/Command must be held.
    pub meta: bool,
}

/// A concrete key press delivered by the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key name.
    pub key: String,
    /// Control held.
    pub ctrl: bool,
    /// Shift held.
    pub shift: bool,
    /// Alt held.
    pub alt: bool,
    /// Meta/Command held.
    pub meta: bool,
}

/// The chord that requests the edit-mode password affordance.
pub const EDIT_MODE_CHORD: KeyChord = KeyChord {
    key: "e",
    ctrl: true,
    shift: true,
    alt: false,
    meta: false,
};

impl KeyChord {
    /// Whether `event` triggers this chord.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key.eq_ignore_ascii_case(&event.key)
            && self.ctrl == event.ctrl
            && self.shift == event.shift
            && self.alt == event.alt
            && self.meta == event.meta
    }
}
