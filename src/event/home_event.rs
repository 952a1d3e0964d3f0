// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Home event types.

use serde::{Deserialize, Serialize};

use crate::feedback::{Feedback, FeedbackId};
use crate::state::{HomeState, StateChange};

/// Events published by a [`Home`](crate::Home).
///
/// # Examples
///
/// ```
/// use hearth_voice::event::HomeEvent;
/// use hearth_voice::feedback::Feedback;
///
/// let event = HomeEvent::FeedbackShown(Feedback::new("Door locked"));
/// assert!(event.is_feedback());
/// assert!(!event.is_state_change());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HomeEvent {
    /// A device or the emergency mode changed.
    StateChanged {
        /// The specific change that occurred.
        change: StateChange,
        /// The complete registry after the change.
        new_state: HomeState,
    },

    /// A feedback banner was shown.
    FeedbackShown(Feedback),

    /// A feedback banner timed out.
    FeedbackDismissed {
        /// The banner that was removed.
        id: FeedbackId,
    },
}

impl HomeEvent {
    /// Returns `true` if this is a state change event.
    #[must_use]
    pub fn is_state_change(&self) -> bool {
        matches!(self, Self::StateChanged { .. })
    }

    /// Returns `true` if this is a feedback event.
    #[must_use]
    pub fn is_feedback(&self) -> bool {
        matches!(self, Self::FeedbackShown(_) | Self::FeedbackDismissed { .. })
    }

    /// Returns the state change carried by this event, if any.
    #[must_use]
    pub fn change(&self) -> Option<&StateChange> {
        match self {
            Self::StateChanged { change, .. } => Some(change),
            _ => None,
        }
    }
}
