// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Confirmation gate for sensitive actions.
//!
//! Unlocking the door and calling emergency services both require an explicit
//! yes from the user before any state changes. The gate is a pluggable policy:
//! an interactive prompt in a real UI, [`AlwaysAllow`] or [`AlwaysDeny`] in
//! tests, or any closure.
//!
//! # Examples
//!
//! ```
//! use hearth_voice::confirm::{AlwaysDeny, ConfirmPrompt, ConfirmationGate};
//!
//! assert!(!AlwaysDeny.confirm(ConfirmPrompt::UnlockDoor));
//!
//! let only_emergencies = |prompt: ConfirmPrompt| prompt == ConfirmPrompt::Emergency;
//! assert!(only_emergencies.confirm(ConfirmPrompt::Emergency));
//! assert!(!only_emergencies.confirm(ConfirmPrompt::UnlockDoor));
//! ```

use std::fmt;

/// The question put to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfirmPrompt {
    /// Asked before the door is unlocked.
    UnlockDoor,
    /// Asked before emergency services are contacted.
    Emergency,
}

impl ConfirmPrompt {
    /// Returns the text shown to the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::UnlockDoor => "Are you sure you want to unlock the door?",
            Self::Emergency => "This will contact emergency services. Continue?",
        }
    }
}

impl fmt::Display for ConfirmPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A synchronous yes/no decision taken before a sensitive action.
pub trait ConfirmationGate: Send + Sync {
    /// Returns `true` if the action may proceed.
    fn confirm(&self, prompt: ConfirmPrompt) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: Fn(ConfirmPrompt) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        self(prompt)
    }
}

/// Accepts every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAllow;

impl ConfirmationGate for AlwaysAllow {
    fn confirm(&self, _prompt: ConfirmPrompt) -> bool {
        true
    }
}

/// Declines every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDeny;

impl ConfirmationGate for AlwaysDeny {
    fn confirm(&self, _prompt: ConfirmPrompt) -> bool {
        false
    }
}
