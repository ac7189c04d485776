// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Audio library bridge.
//!
//! Exposes the device's locally stored audio files, their metadata, and a
//! system-volume control surface to a calling application.
//!
//! The bridge reads an externally maintained media index (it owns no store
//! of its own), normalizes each indexed row into a track record, and hands
//! the host application one JSON payload per scan. Volume get/set is a
//! thin normalized surface over an injected mixer capability.
//!
//! ## Architecture
//!
//! Communication follows the worker pattern:
//!
//! * The **Main Thread** owns the host side of the channel: it parses one
//!   invocation per line from stdin and prints each result to stdout.
//! * A **Background Worker** owns all index handles and executes commands,
//!   broadcasting results and notifications back over an event channel.
//!
//! Channel plumbing is `std::sync::mpsc`; each scan is a synchronous,
//! blocking pass over the index.

mod bridge;
mod config;
mod error;
mod library;
mod model;
mod permissions;
mod util;
mod volume;

use anyhow::{Context, Result};
use std::{
    io::{self, BufRead, Write},
    sync::mpsc::{self, Receiver, Sender},
};
use tracing_subscriber::EnvFilter;

use crate::{
    bridge::{commands::BridgeCommand, events::BridgeEvent},
    permissions::OpenAccess,
    volume::SoftMixer,
};

/// The entry point of the application.
///
/// Initializes logging, loads the configuration, wires up the command and
/// event channels, spawns the bridge worker, and hands the main thread to
/// the host dispatch loop.
fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only host payloads.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = config::load_config();

    let (command_tx, command_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();

    bridge::commands::spawn_command_worker(
        &config,
        OpenAccess,
        SoftMixer::new(),
        command_rx,
        event_tx,
    );

    run(command_tx, event_rx).context("Bridge dispatch loop failed")
}

/// Runs the host dispatch loop until end of input or a quit invocation.
///
/// One line in, one line out: each line names a method (plus argument
/// where the method takes one), and the corresponding result or
/// notification is written back before the next line is read.
fn run(command_tx: Sender<BridgeCommand>, event_rx: Receiver<BridgeEvent>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read host invocation")?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = BridgeCommand::parse(&line) else {
            writeln!(stdout, "error: not implemented")?;
            continue;
        };

        if matches!(command, BridgeCommand::Shutdown) {
            command_tx.send(command)?;
            break;
        }

        command_tx.send(command)?;

        let reply = match event_rx.recv().context("Bridge worker hung up")? {
            BridgeEvent::AudioFilesFetched(payload) => payload,
            BridgeEvent::CurrentVolume(level) => level.to_string(),
            BridgeEvent::VolumeSet(level) => level.to_string(),
            BridgeEvent::PermissionsDenied => "onPermissionsDenied".to_string(),
            BridgeEvent::Error(message) => format!("error: {message}"),
        };

        writeln!(stdout, "{reply}")?;
        stdout.flush()?;
    }

    Ok(())
}
