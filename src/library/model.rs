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

//! Index row decoding.
//!
//! The media index is populated by an external scanner, so any column of
//! any row may be NULL or hold an unexpected type. Decoding therefore
//! defaults each unreadable field (empty string for text, zero for the
//! duration) instead of failing the row, and never fails the scan.

use rusqlite::Row;
use tracing::debug;

use crate::model::TrackRecord;

/// The raw projection of one `audio` row, before artwork resolution.
///
/// Column order matches the scan projection: title, path, artist,
/// duration, album, album_id.
pub(crate) struct TrackRow {
    pub title: String,
    pub path: String,
    pub artist: String,
    pub duration_ms: i64,
    pub album: String,
    pub album_id: i64,
}

impl TrackRow {
    /// Maps a cursor row to a [`TrackRow`], designed for use with
    /// [`rusqlite::Statement::query_map`].
    ///
    /// Infallible by construction: every column degrades to its default
    /// when missing or unreadable.
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            title: text_or_default(row, 0),
            path: text_or_default(row, 1),
            artist: text_or_default(row, 2),
            duration_ms: millis_or_default(row, 3),
            album: text_or_default(row, 4),
            album_id: integer_or_default(row, 5),
        })
    }

    /// Finishes the row into its transport record, merging the artwork
    /// resolution outcome (`None` when artwork support is disabled).
    pub(crate) fn into_record(self, album_art_path: Option<String>) -> TrackRecord {
        TrackRecord {
            title: self.title,
            path: self.path,
            artist: self.artist,
            duration_ms: self.duration_ms,
            album: self.album,
            album_art_path,
        }
    }
}

fn text_or_default(row: &Row, idx: usize) -> String {
    match row.get::<_, Option<String>>(idx) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            debug!(column = idx, error = %e, "unreadable text column, defaulting to empty");
            String::new()
        }
    }
}

fn millis_or_default(row: &Row, idx: usize) -> i64 {
    integer_or_default(row, idx).max(0)
}

fn integer_or_default(row: &Row, idx: usize) -> i64 {
    match row.get::<_, Option<i64>>(idx) {
        Ok(value) => value.unwrap_or(0),
        Err(e) => {
            debug!(column = idx, error = %e, "unreadable integer column, defaulting to zero");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn decode_single(sql: &str) -> TrackRow {
        let conn = Connection::open_in_memory().unwrap();
        conn.query_row(sql, [], TrackRow::from_row).unwrap()
    }

    #[test]
    fn decodes_a_fully_populated_row() {
        let row = decode_single(
            "SELECT 'Song A', '/music/a.mp3', 'Artist X', 205000, 'Album Y', 7",
        );

        assert_eq!(row.title, "Song A");
        assert_eq!(row.path, "/music/a.mp3");
        assert_eq!(row.artist, "Artist X");
        assert_eq!(row.duration_ms, 205000);
        assert_eq!(row.album, "Album Y");
        assert_eq!(row.album_id, 7);
    }

    #[test]
    fn defaults_null_columns() {
        let row = decode_single("SELECT NULL, NULL, NULL, NULL, NULL, NULL");

        assert_eq!(row.title, "");
        assert_eq!(row.path, "");
        assert_eq!(row.artist, "");
        assert_eq!(row.duration_ms, 0);
        assert_eq!(row.album, "");
        assert_eq!(row.album_id, 0);
    }

    #[test]
    fn defaults_mistyped_columns_instead_of_failing() {
        // Duration carried as text, title carried as a number.
        let row = decode_single("SELECT 42, '/music/a.mp3', 'Artist', 'soon', 'Album', 1");

        assert_eq!(row.title, "");
        assert_eq!(row.duration_ms, 0);
        assert_eq!(row.path, "/music/a.mp3");
    }

    #[test]
    fn clamps_negative_durations_to_zero() {
        let row = decode_single("SELECT 'T', '/p', 'A', -5, 'Al', 1");
        assert_eq!(row.duration_ms, 0);
    }
}
