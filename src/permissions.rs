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

//! Library access gating.
//!
//! Scanning the media index may require a runtime grant from the platform.
//! The check and the request flow are an injected [`LibraryAccess`]
//! capability; the bridge worker consults it before every scan and emits a
//! denied notification instead of scanning when no grant is held.

/// Permission capability gating reads of the media index.
pub(crate) trait LibraryAccess {
    /// Whether a read grant is currently held.
    fn has_read_access(&self) -> bool;

    /// Runs the platform's grant flow, returning whether access was
    /// granted. Blocks until the flow completes.
    fn request_read_access(&mut self) -> bool;
}

/// Access policy for platforms without runtime grants: always allowed.
pub(crate) struct OpenAccess;

impl LibraryAccess for OpenAccess {
    fn has_read_access(&self) -> bool {
        true
    }

    fn request_read_access(&mut self) -> bool {
        true
    }
}
