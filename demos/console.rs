// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Console host: drive a home session from the terminal.
//!
//! Each input line is treated as a recognized voice transcript, unless it
//! starts with `/`, in which case it presses a button:
//!
//! ```text
//! /light on|off   /temp +|-   /door   /sos   /help   /quit
//! ```
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example console
//! ```

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use hearth_voice::dashboard::{Dashboard, HomeEvents};
use hearth_voice::speech::{RecognitionResult, SpeechOutput, Utterance};
use hearth_voice::{
    ConfirmPrompt, Feedback, FeedbackId, Home, HomeConfig, LockState, PowerState, Presenter,
    Temperature,
};

struct Terminal;

impl Presenter for Terminal {
    fn refresh_light(&self, state: PowerState) {
        println!("  [light]      Currently: {}", state.label());
    }

    fn refresh_thermostat(&self, temperature: Temperature) {
        println!("  [thermostat] Temperature: {temperature}");
    }

    fn refresh_door(&self, state: LockState) {
        println!(
            "  [door]       Status: {} ({} button)",
            state.label(),
            state.action_label()
        );
    }

    fn show_feedback(&self, feedback: &Feedback) {
        println!("  >> {}", feedback.message());
    }

    fn dismiss_feedback(&self, _id: FeedbackId) {}

    fn set_emergency_mode(&self, active: bool) {
        if active {
            println!("  !!! EMERGENCY MODE !!!");
        } else {
            println!("  (emergency mode cleared)");
        }
    }

    fn show_alert(&self, message: &str) {
        println!("{message}");
    }
}

struct Voice;

impl SpeechOutput for Voice {
    fn speak(&self, utterance: &Utterance) {
        println!("  (says) \"{}\"", utterance.text());
    }
}

fn ask(prompt: ConfirmPrompt) -> bool {
    print!("{} [y/N] ", prompt.message());
    let _ = io::stdout().flush();

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
        Err(_) => false,
    }
}

fn handle(dashboard: &Dashboard, line: &str) -> bool {
    match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        ["/quit"] => return false,
        ["/light", "on"] => {
            dashboard.on_light_toggle(true);
        }
        ["/light", "off"] => {
            dashboard.on_light_toggle(false);
        }
        ["/temp", "+"] => {
            dashboard.on_temperature_change(1);
        }
        ["/temp", "-"] => {
            dashboard.on_temperature_change(-1);
        }
        ["/door"] => {
            dashboard.on_door_toggle();
        }
        ["/sos"] => {
            dashboard.on_emergency();
        }
        ["/help"] => dashboard.on_help(),
        [cmd, ..] if cmd.starts_with('/') => println!("Unknown button {cmd}"),
        _ => {
            dashboard
                .assistant()
                .on_result(&[RecognitionResult::final_transcript(line)]);
        }
    }
    true
}

fn run(dashboard: &Dashboard) -> io::Result<()> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !handle(dashboard, line) {
            return Ok(());
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they don't interleave with the prompt
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => HomeConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => HomeConfig::default(),
    };

    let home = Home::builder()
        .with_config(config)
        .with_presenter(Arc::new(Terminal))
        .with_speech_output(Arc::new(Voice))
        .with_confirmation_gate(ask)
        .build();

    // No microphone in a terminal; typed lines stand in for transcripts
    let dashboard = Dashboard::new(home, None)?;

    // Stdin and the confirmation prompts block, so keep them off the runtime
    // threads that fire the dismissal timers.
    tokio::task::spawn_blocking(move || run(&dashboard)).await??;
    Ok(())
}
