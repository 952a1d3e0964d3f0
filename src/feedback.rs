// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transient user feedback.
//!
//! Every device operation reports its result as a short message that the
//! presenter shows as a banner and the speech output reads aloud. Banners are
//! dismissed by a timer a few seconds later; the [`FeedbackId`] lets the
//! presenter remove the right one.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a feedback banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedbackId(Uuid);

impl FeedbackId {
    /// Generates a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for FeedbackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A feedback message shown to the user.
///
/// # Examples
///
/// ```
/// use hearth_voice::feedback::Feedback;
///
/// let feedback = Feedback::new("Door locked");
/// assert_eq!(feedback.message(), "Door locked");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    id: FeedbackId,
    message: String,
}

impl Feedback {
    /// Creates a feedback message with a fresh identifier.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: FeedbackId::new(),
            message: message.into(),
        }
    }

    /// Returns the banner identifier.
    #[must_use]
    pub fn id(&self) -> FeedbackId {
        self.id
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
