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

//! Typed errors for the media index data layer.
//!
//! An unreachable index is not fatal anywhere in this crate: the bridge
//! worker recovers it as an empty payload. The variants exist so that a
//! caller embedding the library can distinguish "empty library" from
//! "index unreachable" instead of inferring it from log output.

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum LibraryError {
    /// The media index database could not be opened.
    #[error("media index unavailable: {0}")]
    IndexUnavailable(#[source] rusqlite::Error),

    /// The artwork index database could not be opened. Scans proceed; every
    /// record falls back to the no-artwork sentinel.
    #[error("artwork index unavailable: {0}")]
    ArtworkUnavailable(#[source] rusqlite::Error),
}
