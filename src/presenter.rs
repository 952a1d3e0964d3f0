// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Presentation layer seam.
//!
//! The core never renders anything itself. It pushes display updates to a
//! [`Presenter`] supplied by the host: a web page, a terminal, or a test
//! recorder. Every method has a no-op default so a host only implements the
//! parts of the UI it actually has; calls for missing elements are skipped.

use crate::feedback::{Feedback, FeedbackId};
use crate::types::{LockState, PowerState, Temperature};

/// Receives display updates from the core.
///
/// Methods are called synchronously from whichever thread performed the
/// operation, after the registry lock has been released.
///
/// # Examples
///
/// ```
/// use hearth_voice::Presenter;
/// use hearth_voice::types::PowerState;
///
/// struct StatusLine;
///
/// impl Presenter for StatusLine {
///     fn refresh_light(&self, state: PowerState) {
///         println!("Currently: {}", state.label());
///     }
/// }
/// ```
pub trait Presenter: Send + Sync {
    /// Redraws the light control.
    fn refresh_light(&self, _state: PowerState) {}

    /// Redraws the thermostat control.
    fn refresh_thermostat(&self, _temperature: Temperature) {}

    /// Redraws the door control.
    fn refresh_door(&self, _state: LockState) {}

    /// Shows a feedback banner.
    fn show_feedback(&self, _feedback: &Feedback) {}

    /// Removes a feedback banner previously shown.
    fn dismiss_feedback(&self, _id: FeedbackId) {}

    /// Turns the emergency visual mode on or off.
    fn set_emergency_mode(&self, _active: bool) {}

    /// Updates the voice assistant button.
    fn set_listening(&self, _listening: bool) {}

    /// Shows a blocking informational message (help text, platform notices).
    fn show_alert(&self, _message: &str) {}
}

/// A presenter with no UI at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}
