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

//! Events broadcast from the bridge worker back to the host side.

#[derive(Debug)]
pub(crate) enum BridgeEvent {
    /// The serialized library payload produced by a completed scan.
    AudioFilesFetched(String),

    /// Current volume, normalized to 0.0 - 1.0.
    CurrentVolume(f64),

    /// Acknowledges a volume change, carrying the level actually applied
    /// after clamping and step quantization.
    VolumeSet(f64),

    /// A scan was requested without a read grant and the grant flow was
    /// denied.
    PermissionsDenied,

    /// A command failed; the worker stays alive.
    Error(String),
}
