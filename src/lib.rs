// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hearth Voice - the core of a voice-controlled smart-home demo.
//!
//! Three simulated devices (a light, a thermostat and a door lock) live in
//! memory for one session. They can be driven from on-screen controls or
//! from spoken commands, and every change is reported back as a feedback
//! banner read aloud.
//!
//! # Components
//!
//! - **Device state model** ([`Home`]): validated mutations, confirmation of
//!   sensitive actions, display refresh and feedback
//! - **Command interpreter** ([`interpreter::CommandInterpreter`]): ordered
//!   intent patterns, first match wins
//! - **Voice assistant** ([`speech::VoiceAssistant`]): the listening
//!   lifecycle of a platform speech recognizer
//! - **Dashboard** ([`dashboard::Dashboard`]): routes UI events to the above
//!
//! Rendering, confirmation dialogs and the speech engines belong to the host
//! and are plugged in through the [`Presenter`], [`ConfirmationGate`],
//! [`speech::SpeechRecognizer`] and [`speech::SpeechOutput`] traits.
//!
//! # Quick Start
//!
//! ```
//! use hearth_voice::{AlwaysAllow, Home, Outcome};
//! use hearth_voice::interpreter::CommandInterpreter;
//!
//! # fn main() -> hearth_voice::Result<()> {
//! let home = Home::builder()
//!     .with_confirmation_gate(AlwaysAllow)
//!     .build();
//! let interpreter = CommandInterpreter::new(home.clone())?;
//!
//! interpreter.process("turn off the living room light");
//! assert!(!home.light().is_on());
//!
//! assert_eq!(home.set_temperature(85), Outcome::Rejected);
//! assert_eq!(home.temperature().value(), 72);
//! # Ok(())
//! # }
//! ```
//!
//! # Observing Changes
//!
//! ```
//! use hearth_voice::{Home, Subscribable};
//!
//! let home = Home::builder().build();
//!
//! home.on_temperature_changed(|temp| {
//!     println!("Thermostat now at {temp}");
//! });
//!
//! home.adjust_temperature(-2);
//! ```
//!
//! # Timers
//!
//! Feedback banners disappear after 3 seconds and emergency mode ends after
//! 5 seconds. Inside a tokio runtime this happens on its own; otherwise the
//! host calls [`timer::DismissalTimers::fire_due`] through [`Home::timers`].

mod config;
pub mod confirm;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod feedback;
mod home;
pub mod interpreter;
mod presenter;
pub mod speech;
pub mod state;
pub mod subscription;
pub mod timer;
pub mod types;

#[cfg(test)]
mod testing;

pub use config::{
    DEFAULT_EMERGENCY_DURATION, DEFAULT_FEEDBACK_DURATION, HomeConfig, VoiceSettings,
};
pub use confirm::{AlwaysAllow, AlwaysDeny, ConfirmPrompt, ConfirmationGate};
pub use error::{Error, Result, SpeechError, ValueError};
pub use feedback::{Feedback, FeedbackId};
pub use home::{EMERGENCY_MESSAGE, Home, HomeBuilder, Outcome, TEMPERATURE_RANGE_MESSAGE};
pub use presenter::{NullPresenter, Presenter};
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::{DeviceKind, LockState, PowerState, Temperature};
