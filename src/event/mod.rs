// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event stream for home state changes.
//!
//! The [`EventBus`] uses tokio's broadcast channel so any number of async
//! tasks can follow what happens in a session.
//!
//! # Examples
//!
//! ```
//! use hearth_voice::event::{EventBus, HomeEvent};
//! use hearth_voice::feedback::Feedback;
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(HomeEvent::FeedbackShown(Feedback::new("Light turned on")));
//! assert!(rx.try_recv().unwrap().is_feedback());
//! ```

mod event_bus;
mod home_event;

pub use event_bus::EventBus;
pub use home_event::HomeEvent;
