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

//! Bridge command processing.
//!
//! This module implements the command pattern used to keep index I/O off
//! the host-facing thread. A dedicated worker loop receives
//! [`BridgeCommand`]s, executes them against the media index, the artwork
//! index, and the mixer, and broadcasts the results back as
//! [`BridgeEvent`]s. A failed command becomes an `Error` event; the worker
//! itself never dies on one.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::{info, warn};

use crate::{
    bridge::events::BridgeEvent,
    config::AppConfig,
    library::{self, artwork::AlbumArtResolver},
    permissions::LibraryAccess,
    util::format::format_duration_ms,
    volume::{Mixer, VolumeControl},
};

#[derive(Debug)]
pub(crate) enum BridgeCommand {
    GetAudioFiles,
    GetCurrentVolume,
    SetVolume(f64),
    Shutdown,
}

impl BridgeCommand {
    /// Parses one host invocation: a method name followed by its argument,
    /// if the method takes one. Unknown methods and malformed arguments
    /// parse to `None`, the "not implemented" answer.
    pub(crate) fn parse(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            ["getAudioFiles"] => Some(Self::GetAudioFiles),
            ["getCurrentVolume"] => Some(Self::GetCurrentVolume),
            ["setVolume", level] => level.parse().ok().map(Self::SetVolume),
            ["quit"] => Some(Self::Shutdown),
            _ => None,
        }
    }
}

/// Spawns the background worker that executes bridge commands.
///
/// The worker takes ownership of the injected access and mixer
/// capabilities and loops until the command channel closes or a
/// [`BridgeCommand::Shutdown`] arrives.
///
/// # Arguments
///
/// * `config` - The application configuration (index paths, artwork
///   toggle).
/// * `access` - The permission capability gating scans.
/// * `mixer` - The platform mixer backing the volume surface.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker<A, M>(
    config: &AppConfig,
    access: A,
    mixer: M,
    command_rx: Receiver<BridgeCommand>,
    event_tx: Sender<BridgeEvent>,
) where
    A: LibraryAccess + Send + 'static,
    M: Mixer + Send + 'static,
{
    let config = config.clone();

    thread::spawn(move || {
        let mut access = access;
        let mut volume = VolumeControl::new(mixer);

        while let Ok(command) = command_rx.recv() {
            if matches!(command, BridgeCommand::Shutdown) {
                break;
            }

            if let Err(e) = handle_command(&config, &mut access, &mut volume, command, &event_tx) {
                let _ = event_tx.send(BridgeEvent::Error(e.to_string()));
            }
        }
    });
}

/// Orchestrates the execution of a single command and sends the result
/// back through the event channel.
fn handle_command<A: LibraryAccess, M: Mixer>(
    config: &AppConfig,
    access: &mut A,
    volume: &mut VolumeControl<M>,
    command: BridgeCommand,
    event_tx: &Sender<BridgeEvent>,
) -> Result<()> {
    match command {
        BridgeCommand::GetAudioFiles => {
            if !access.has_read_access() && !access.request_read_access() {
                event_tx.send(BridgeEvent::PermissionsDenied)?;
                return Ok(());
            }

            let payload = fetch_audio_files(config)?;
            event_tx.send(BridgeEvent::AudioFilesFetched(payload))?;
        }
        BridgeCommand::GetCurrentVolume => {
            event_tx.send(BridgeEvent::CurrentVolume(volume.current()))?;
        }
        BridgeCommand::SetVolume(level) => {
            volume.set(level);
            event_tx.send(BridgeEvent::VolumeSet(volume.current()))?;
        }
        // Handled by the worker loop.
        BridgeCommand::Shutdown => {}
    }

    Ok(())
}

/// Runs one full library scan and serializes the payload.
///
/// An unreachable media index degrades to an empty payload; an unreachable
/// artwork index degrades to sentinel artwork on every record. Both are
/// observable through the logs.
fn fetch_audio_files(config: &AppConfig) -> Result<String> {
    let conn = match library::open_media_index(&config.media_index) {
        Ok(conn) => conn,
        Err(e) => {
            warn!(path = %config.media_index, error = %e, "reporting an empty library");
            return Ok("[]".to_string());
        }
    };

    let mut resolver = if config.include_album_art {
        let art_conn = match library::open_artwork_index(&config.artwork_index) {
            Ok(conn) => Some(conn),
            Err(e) => {
                warn!(path = %config.artwork_index, error = %e, "artwork falls back to the sentinel");
                None
            }
        };
        Some(AlbumArtResolver::new(art_conn))
    } else {
        None
    };

    let records = library::scan_tracks(&conn, resolver.as_mut())?;

    if records.is_empty() {
        info!("no audio files found in the media index");
    } else {
        let total: i64 = records.iter().map(|r| r.duration_ms).sum();
        info!(
            tracks = records.len(),
            total = %format_duration_ms(total),
            "library scan complete"
        );
    }

    library::to_payload(&records)
}
