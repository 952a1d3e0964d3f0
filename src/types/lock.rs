// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door lock state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Represents whether the door is locked.
///
/// # Examples
///
/// ```
/// use hearth_voice::types::LockState;
///
/// let state = LockState::from_locked(true);
/// assert_eq!(state, LockState::Locked);
/// assert_eq!(state.toggled(), LockState::Unlocked);
/// assert_eq!(state.as_str(), "locked");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockState {
    /// Door is locked.
    #[default]
    Locked,
    /// Door is unlocked.
    Unlocked,
}

impl LockState {
    /// Creates a lock state from a `locked` flag.
    #[must_use]
    pub const fn from_locked(locked: bool) -> Self {
        if locked { Self::Locked } else { Self::Unlocked }
    }

    /// Returns `true` if the door is locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }

    /// Returns the lower-case word used in feedback messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
        }
    }

    /// Returns the capitalized word used on status labels.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Locked => "Locked",
            Self::Unlocked => "Unlocked",
        }
    }

    /// Returns the caption of the button that flips this state.
    ///
    /// A locked door offers "Unlock", an unlocked door offers "Lock".
    #[must_use]
    pub const fn action_label(&self) -> &'static str {
        match self {
            Self::Locked => "Unlock",
            Self::Unlocked => "Lock",
        }
    }

    /// Returns the opposite state.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Locked => Self::Unlocked,
            Self::Unlocked => Self::Locked,
        }
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "locked" | "lock" | "true" => Ok(Self::Locked),
            "unlocked" | "unlock" | "false" => Ok(Self::Unlocked),
            _ => Err(ValueError::InvalidLockState(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_state_default_is_locked() {
        assert!(LockState::default().is_locked());
    }

    #[test]
    fn lock_state_from_str() {
        assert_eq!("Locked".parse::<LockState>().unwrap(), LockState::Locked);
        assert_eq!("unlock".parse::<LockState>().unwrap(), LockState::Unlocked);
        assert!("ajar".parse::<LockState>().is_err());
    }

    #[test]
    fn lock_state_action_label() {
        assert_eq!(LockState::Locked.action_label(), "Unlock");
        assert_eq!(LockState::Unlocked.action_label(), "Lock");
    }
}
