// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Home state management types.
//!
//! The [`HomeState`] struct is the device registry, while [`StateChange`]
//! represents individual changes that can be applied to it.
//!
//! # Examples
//!
//! ```
//! use hearth_voice::state::{HomeState, StateChange};
//! use hearth_voice::types::LockState;
//!
//! let mut state = HomeState::new();
//! state.apply(&StateChange::Door(LockState::Unlocked));
//!
//! assert_eq!(state.door(), LockState::Unlocked);
//! ```

mod home_state;
mod state_change;

pub use home_state::HomeState;
pub use state_change::StateChange;
