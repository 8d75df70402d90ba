// SPDX-License-Identifier: Apache-2.0
// © Folio Contributors <https://github.com/folio-dev/folio>
//! Password-gated edit-mode authorization.
//!
//! The gate is a two-state machine, locked/unlocked, persisting only the
//! resulting boolean flag and never the password. The plaintext-equality
//! check is a deliberate low-security placeholder inherited from the source
//! system: it is a UI deterrent, not a security boundary. The secret is
//! injected at construction and compared only inside this module, so real
//! credential verification can replace it without touching callers.

use crate::storage::{KvService, KvStore, EDIT_MODE_KEY};
use tracing::warn;

/// Demo secret used when the embedder supplies nothing else.
pub const DEFAULT_EDIT_SECRET: &str = "portfolio2024";

/// What a [`EditGate::toggle`] call resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The gate was unlocked and is now locked.
    Locked,
    /// The gate is locked; the presentation layer should surface its
    /// password-entry affordance, whose submission calls
    /// [`EditGate::enable`].
    PasswordRequired,
}

/// The edit-authorization gate.
pub struct EditGate<S> {
    service: KvService<S>,
    secret: String,
    unlocked: bool,
}

impl<S> EditGate<S>
where
    S: KvStore,
{
    /// Construct the gate from the persisted flag (absent means locked).
    pub fn open(service: KvService<S>, secret: impl Into<String>) -> Self {
        let unlocked = service.load_flag(EDIT_MODE_KEY);
        Self {
            service,
            secret: secret.into(),
            unlocked,
        }
    }

    /// Whether edit mode is currently unlocked.
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Check `password` against the secret. On match, transition to
    /// unlocked and persist the flag; on mismatch, stay locked and persist
    /// nothing. No attempt counter, no lockout.
    pub fn enable(&mut self, password: &str) -> bool {
        if password != self.secret {
            return false;
        }
        self.unlocked = true;
        if let Err(err) = self.service.set_flag(EDIT_MODE_KEY, true) {
            warn!("failed to persist edit-mode flag: {err}");
        }
        true
    }

    /// Unconditionally transition to locked and clear the persisted flag.
    pub fn disable(&mut self) {
        self.unlocked = false;
        if let Err(err) = self.service.set_flag(EDIT_MODE_KEY, false) {
            warn!("failed to clear edit-mode flag: {err}");
        }
    }

    /// Leave edit mode when unlocked; otherwise ask the presentation layer
    /// for a password.
    pub fn toggle(&mut self) -> ToggleOutcome {
        if self.unlocked {
            self.disable();
            ToggleOutcome::Locked
        } else {
            ToggleOutcome::PasswordRequired
        }
    }

    /// Handle the process-wide keyboard chord: request the password-entry
    /// affordance when locked. While already unlocked this is idempotent:
    /// the gate stays unlocked and nothing is surfaced.
    #[must_use]
    pub fn request_unlock(&self) -> bool {
        !self.unlocked
    }

    /// Consume the gate and return the persistence service.
    pub fn into_service(self) -> KvService<S> {
        self.service
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::storage::{MemoryKvStore, StorageError};

    fn gate() -> EditGate<MemoryKvStore> {
        EditGate::open(KvService::new(MemoryKvStore::new()), DEFAULT_EDIT_SECRET)
    }

    #[test]
    fn starts_locked_when_no_flag_is_persisted() {
        assert!(!gate().is_unlocked());
    }

    #[test]
    fn wrong_password_leaves_state_and_flag_untouched() {
        let mut gate = gate();
        assert!(!gate.enable("letmein"));
        assert!(!gate.is_unlocked());

        let store = gate.into_service().into_inner();
        assert!(matches!(
            store.load_raw(EDIT_MODE_KEY),
            Err(StorageError::NotFound)
        ));
    }

    #[test]
    fn correct_password_unlocks_and_persists_true() {
        let mut gate = gate();
        assert!(gate.enable(DEFAULT_EDIT_SECRET));
        assert!(gate.is_unlocked());

        let store = gate.into_service().into_inner();
        assert_eq!(store.load_raw(EDIT_MODE_KEY).unwrap(), b"true");
    }

    #[test]
    fn disable_clears_the_persisted_flag() {
        let mut gate = gate();
        gate.enable(DEFAULT_EDIT_SECRET);
        gate.disable();
        assert!(!gate.is_unlocked());

        let store = gate.into_service().into_inner();
        assert!(matches!(
            store.load_raw(EDIT_MODE_KEY),
            Err(StorageError::NotFound)
        ));
    }

    #[test]
    fn persisted_flag_survives_reconstruction() {
        let mut gate = gate();
        gate.enable(DEFAULT_EDIT_SECRET);
        let reopened = EditGate::open(gate.into_service(), DEFAULT_EDIT_SECRET);
        assert!(reopened.is_unlocked());
    }

    #[test]
    fn toggle_locks_when_unlocked_and_prompts_when_locked() {
        let mut gate = gate();
        assert_eq!(gate.toggle(), ToggleOutcome::PasswordRequired);
        assert!(!gate.is_unlocked());

        gate.enable(DEFAULT_EDIT_SECRET);
        assert_eq!(gate.toggle(), ToggleOutcome::Locked);
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn chord_request_is_idempotent_while_unlocked() {
        let mut gate = gate();
        assert!(gate.request_unlock());

        gate.enable(DEFAULT_EDIT_SECRET);
        assert!(!gate.request_unlock());
        assert!(gate.is_unlocked());
    }
}
