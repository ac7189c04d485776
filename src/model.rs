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

use serde::Serialize;

/// Sentinel used in place of an artwork path when an album has none.
pub(crate) const NO_ALBUM_ART: &str = "no_album_art";

/// One enumerated library entry, in the shape the host application receives.
///
/// Wire field names are camelCase. `album_art_path` is omitted from the
/// serialized form entirely when artwork support is disabled, and carries
/// [`NO_ALBUM_ART`] when enabled but no artwork exists for the album.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrackRecord {
    pub title: String,
    pub path: String,
    pub artist: String,
    pub duration_ms: i64,
    pub album: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_art_path: Option<String>,
}
