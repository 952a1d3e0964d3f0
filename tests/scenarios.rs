// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end scenarios: utterances and button presses against a full
//! session with recording collaborators.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use hearth_voice::dashboard::{Dashboard, HomeEvents};
use hearth_voice::event::HomeEvent;
use hearth_voice::interpreter::{CommandInterpreter, FALLBACK_RESPONSE, Intent};
use hearth_voice::speech::{RecognitionResult, SpeechOutput, Utterance};
use hearth_voice::{
    AlwaysAllow, AlwaysDeny, ConfirmationGate, EMERGENCY_MESSAGE, Feedback, FeedbackId, Home,
    LockState, Outcome, PowerState, Presenter, TEMPERATURE_RANGE_MESSAGE, Temperature,
};

// ========== Recording collaborators ==========

#[derive(Default)]
struct Screen {
    feedback: Mutex<Vec<String>>,
    emergency: Mutex<Vec<bool>>,
    refreshes: Mutex<u32>,
}

impl Screen {
    fn feedback(&self) -> Vec<String> {
        self.feedback.lock().clone()
    }

    fn emergency_transitions(&self) -> Vec<bool> {
        self.emergency.lock().clone()
    }
}

impl Presenter for Screen {
    fn refresh_light(&self, _state: PowerState) {
        *self.refreshes.lock() += 1;
    }

    fn refresh_thermostat(&self, _temperature: Temperature) {
        *self.refreshes.lock() += 1;
    }

    fn refresh_door(&self, _state: LockState) {
        *self.refreshes.lock() += 1;
    }

    fn show_feedback(&self, feedback: &Feedback) {
        self.feedback.lock().push(feedback.message().to_string());
    }

    fn dismiss_feedback(&self, _id: FeedbackId) {}

    fn set_emergency_mode(&self, active: bool) {
        self.emergency.lock().push(active);
    }
}

#[derive(Default)]
struct Speaker {
    spoken: Mutex<Vec<String>>,
}

impl Speaker {
    fn spoken(&self) -> Vec<String> {
        self.spoken.lock().clone()
    }
}

impl SpeechOutput for Speaker {
    fn speak(&self, utterance: &Utterance) {
        self.spoken.lock().push(utterance.text().to_string());
    }
}

struct Session {
    home: Home,
    interpreter: CommandInterpreter,
    screen: Arc<Screen>,
    speaker: Arc<Speaker>,
}

fn session(gate: impl ConfirmationGate + 'static) -> Session {
    let screen = Arc::new(Screen::default());
    let speaker = Arc::new(Speaker::default());
    let home = Home::builder()
        .with_presenter(screen.clone())
        .with_speech_output(speaker.clone())
        .with_confirmation_gate(gate)
        .build();
    let interpreter = CommandInterpreter::new(home.clone()).unwrap();
    Session {
        home,
        interpreter,
        screen,
        speaker,
    }
}

// ========== Scenarios ==========

#[test]
fn turn_on_living_room_light() {
    let s = session(AlwaysAllow);
    s.home.set_light(false);

    let intent = s.interpreter.process("turn on the living room light");

    assert_eq!(intent, Intent::Light { on: true });
    assert_eq!(s.home.light(), PowerState::On);
    assert_eq!(
        s.speaker.spoken()[1..],
        ["Turning on the living room light", "Light turned on"]
    );
}

#[test]
fn set_temperature_to_65() {
    let s = session(AlwaysAllow);

    s.interpreter.process("set the temperature to 65");

    assert_eq!(s.home.temperature().value(), 65);
    assert_eq!(s.screen.feedback(), vec!["Temperature set to 65°F"]);
}

#[test]
fn set_temperature_to_95_is_rejected() {
    let s = session(AlwaysAllow);
    let before = s.home.state();

    let intent = s.interpreter.process("set the temperature to 95");

    assert_eq!(intent, Intent::Temperature { degrees: 95 });
    assert_eq!(s.home.state(), before);
    assert_eq!(s.screen.feedback(), vec![TEMPERATURE_RANGE_MESSAGE]);
}

#[test]
fn declined_unlock_keeps_door_locked() {
    let s = session(AlwaysDeny);

    s.interpreter.process("unlock door");

    assert_eq!(s.home.door(), LockState::Locked);
    assert!(s.screen.feedback().is_empty());
    // Only the acknowledgement is spoken
    assert_eq!(s.speaker.spoken(), vec!["Unlocking the door"]);
}

#[test]
fn banana_is_not_understood() {
    let s = session(AlwaysAllow);
    let before = s.home.state();

    assert_eq!(s.interpreter.process("banana"), Intent::Unknown);

    assert_eq!(s.home.state(), before);
    assert_eq!(s.speaker.spoken(), vec![FALLBACK_RESPONSE]);
    assert!(s.screen.feedback().is_empty());
}

#[tokio::test(start_paused = true)]
async fn emergency_window() {
    let s = session(AlwaysAllow);
    let before = s.home.state();

    assert_eq!(s.home.trigger_emergency(), Outcome::Applied);
    assert!(s.home.emergency_mode());
    assert_eq!(s.screen.feedback(), vec![EMERGENCY_MESSAGE]);

    tokio::time::sleep(Duration::from_secs(4)).await;
    assert!(s.home.emergency_mode());

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(!s.home.emergency_mode());
    assert_eq!(s.home.state(), before);
    assert_eq!(s.screen.emergency_transitions(), vec![true, false]);
}

// ========== Properties ==========

#[test]
fn temperature_changes_only_within_range() {
    let s = session(AlwaysAllow);

    for requested in -20..=120 {
        let current = s.home.temperature();
        let outcome = s.home.set_temperature(requested);

        if (60..=80).contains(&requested) {
            assert_eq!(outcome, Outcome::Applied);
            assert_eq!(s.home.temperature().value(), requested);
        } else {
            assert_eq!(outcome, Outcome::Rejected);
            assert_eq!(s.home.temperature(), current);
            assert_eq!(s.screen.feedback().last().unwrap(), TEMPERATURE_RANGE_MESSAGE);
        }
    }
}

#[test]
fn adjust_by_zero_reemits_confirmation() {
    let s = session(AlwaysAllow);
    s.home.set_temperature(77);

    for _ in 0..3 {
        assert_eq!(s.home.adjust_temperature(0), Outcome::Applied);
        assert_eq!(s.home.temperature().value(), 77);
        assert_eq!(s.screen.feedback().last().unwrap(), "Temperature set to 77°F");
    }
}

#[test]
fn adjust_matches_set() {
    let adjusted = session(AlwaysAllow);
    let set = session(AlwaysAllow);

    for delta in [-15, -12, -1, 0, 3, 8, 9, 40] {
        let target = adjusted.home.temperature().value() + delta;
        assert_eq!(
            adjusted.home.adjust_temperature(delta),
            set.home.set_temperature(target)
        );
        assert_eq!(adjusted.home.temperature(), set.home.temperature());
    }
}

#[test]
fn denying_gate_never_unlocks() {
    let s = session(AlwaysDeny);

    for _ in 0..50 {
        s.home.set_door_locked(false);
        s.home.toggle_door();
        assert!(s.home.door().is_locked());
    }
}

#[test]
fn classification_is_deterministic_across_sessions() {
    let first = session(AlwaysAllow);
    let second = session(AlwaysDeny);

    for utterance in [
        "turn on the light",
        "switch off the living room light",
        "set temperature to 70",
        "lock the door",
        "help me",
        "sos",
        "banana",
    ] {
        let intent = first.interpreter.classify(utterance);
        first.interpreter.process(utterance);
        assert_eq!(first.interpreter.classify(utterance), intent);
        assert_eq!(second.interpreter.classify(utterance), intent);
    }
}

// ========== Dashboard and voice pipeline ==========

#[test]
fn button_presses_through_dashboard() {
    let s = session(AlwaysAllow);
    let dashboard = Dashboard::new(s.home.clone(), None).unwrap();

    dashboard.on_temperature_change(1);
    dashboard.on_temperature_change(1);
    dashboard.on_door_toggle();
    dashboard.on_light_toggle(false);

    assert_eq!(s.home.temperature().value(), 74);
    assert_eq!(s.home.door(), LockState::Unlocked);
    assert_eq!(s.home.light(), PowerState::Off);
    assert_eq!(
        s.screen.feedback(),
        vec![
            "Temperature set to 73°F",
            "Temperature set to 74°F",
            "Door unlocked",
            "Light turned off"
        ]
    );
}

#[test]
fn recognized_speech_is_lowercased_and_interpreted() {
    let s = session(AlwaysAllow);
    let dashboard = Dashboard::new(s.home.clone(), None).unwrap();

    let intent = dashboard
        .assistant()
        .on_result(&[RecognitionResult::final_transcript("SET THE TEMPERATURE TO 61")]);

    assert_eq!(intent, Some(Intent::Temperature { degrees: 61 }));
    assert_eq!(s.home.temperature().value(), 61);
}

#[test]
fn refresh_only_touches_changed_device() {
    let s = session(AlwaysAllow);
    let after_build = *s.screen.refreshes.lock();
    assert_eq!(after_build, 3);

    s.home.set_light(true);
    s.home.set_temperature(99);
    assert_eq!(*s.screen.refreshes.lock(), 4);
}

#[tokio::test]
async fn event_stream_follows_session() {
    let s = session(AlwaysAllow);
    let mut rx = s.home.events();

    s.interpreter.process("lock the door");

    let event = rx.recv().await.unwrap();
    match event {
        HomeEvent::StateChanged { new_state, .. } => {
            assert_eq!(new_state.door(), LockState::Locked);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(rx.recv().await.unwrap().is_feedback());
}
