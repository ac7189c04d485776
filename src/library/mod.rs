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

//! Media index data access layer.
//!
//! This module reads the externally maintained media index: a SQLite
//! database, owned and populated by the platform's media scanner, holding
//! one `audio` row per indexed audio file. The index is opened strictly
//! read-only; this crate never writes to it and never touches the files it
//! describes.
//!
//! # Tables
//!
//! * `audio` - One row per indexed audio file: `title`, `path`, `artist`,
//!   `duration` (milliseconds), `album`, `album_id`.
//! * `album_art` - Artwork paths keyed by `album_id`, held in a separately
//!   addressed database (see [`artwork`]).
//!
//! # Behavior
//!
//! A scan is a single linear pass over the `audio` table in native row
//! order. Missing or unreadable column values degrade to defaults (empty
//! string, zero duration) rather than failing the pass; see
//! [`model::TrackRow`].
//!
//! # Performance
//!
//! Queries go through [`rusqlite::Connection::prepare_cached`], so the
//! projection is resolved once per connection rather than once per call.

pub(crate) mod artwork;
mod model;

use anyhow::Result;
use rusqlite::{Connection, OpenFlags};

use crate::error::LibraryError;
use crate::library::artwork::AlbumArtResolver;
use crate::model::{NO_ALBUM_ART, TrackRecord};

use self::model::TrackRow;

const SCAN_QUERY: &str = "SELECT title, path, artist, duration, album, album_id FROM audio";

/// Opens a read-only connection to the media index.
///
/// The index is externally owned, so no schema setup or pragma tuning
/// happens here; a database that cannot be opened is reported as
/// [`LibraryError::IndexUnavailable`] and the caller decides whether to
/// degrade to an empty library or surface the failure.
pub(crate) fn open_media_index(path: &str) -> Result<Connection, LibraryError> {
    Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(LibraryError::IndexUnavailable)
}

/// Opens a read-only connection to the artwork index.
///
/// # Errors
///
/// Returns [`LibraryError::ArtworkUnavailable`] if the database cannot be
/// opened. Callers recover by scanning without a backing artwork index, in
/// which case every record carries the no-artwork sentinel.
pub(crate) fn open_artwork_index(path: &str) -> Result<Connection, LibraryError> {
    Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(LibraryError::ArtworkUnavailable)
}

/// Enumerates the full audio library into a sequence of [`TrackRecord`]s.
///
/// Each returned record corresponds to exactly one `audio` row, in the
/// index's native row order; nothing is filtered, sorted, or deduplicated.
/// An empty index yields an empty vector, not an error.
///
/// When `artwork` is provided, each row's album id is resolved against the
/// artwork index and the result merged into the record, with
/// [`NO_ALBUM_ART`] standing in for albums without artwork. When it is
/// `None`, records carry no artwork field at all.
///
/// # Arguments
///
/// * `conn` - A read-only connection to the media index.
/// * `artwork` - The per-scan artwork resolver, if artwork support is
///   enabled.
///
/// # Errors
///
/// Returns an error if the projection query cannot be prepared or the
/// cursor fails mid-pass. Per-field anomalies on individual rows are not
/// errors; they degrade to default values.
pub(crate) fn scan_tracks(
    conn: &Connection,
    mut artwork: Option<&mut AlbumArtResolver>,
) -> Result<Vec<TrackRecord>> {
    let mut stmt = conn.prepare_cached(SCAN_QUERY)?;
    let rows = stmt.query_map([], TrackRow::from_row)?;

    let mut records = Vec::new();
    for row in rows {
        let row = row?;
        let album_art_path = artwork.as_mut().map(|resolver| {
            resolver
                .resolve(row.album_id)
                .unwrap_or_else(|| NO_ALBUM_ART.to_string())
        });
        records.push(row.into_record(album_art_path));
    }

    Ok(records)
}

/// Serializes scanned records into the transport payload handed to the
/// host: a UTF-8 JSON array in library order.
pub(crate) fn to_payload(records: &[TrackRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;

    fn media_index() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE audio (
                title TEXT,
                path TEXT,
                artist TEXT,
                duration INTEGER,
                album TEXT,
                album_id INTEGER
            );",
        )
        .unwrap();
        conn
    }

    fn artwork_index() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE album_art (album_id INTEGER, art_path TEXT);")
            .unwrap();
        conn
    }

    fn insert_track(conn: &Connection, title: &str, path: &str, album_id: i64) {
        conn.execute(
            "INSERT INTO audio (title, path, artist, duration, album, album_id)
             VALUES (?, ?, 'Artist', 1000, 'Album', ?)",
            params![title, path, album_id],
        )
        .unwrap();
    }

    #[test]
    fn scan_returns_one_record_per_row_in_native_order() {
        let conn = media_index();
        insert_track(&conn, "First", "/music/1.mp3", 1);
        insert_track(&conn, "Second", "/music/2.mp3", 1);
        insert_track(&conn, "Third", "/music/3.mp3", 2);

        let records = scan_tracks(&conn, None).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "First");
        assert_eq!(records[1].title, "Second");
        assert_eq!(records[2].title, "Third");
    }

    #[test]
    fn scan_of_empty_index_is_empty_not_an_error() {
        let conn = media_index();
        let records = scan_tracks(&conn, None).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn scan_defaults_missing_fields_instead_of_failing() {
        let conn = media_index();
        conn.execute(
            "INSERT INTO audio (title, path, artist, duration, album, album_id)
             VALUES (NULL, '/music/a.mp3', NULL, NULL, NULL, NULL)",
            [],
        )
        .unwrap();

        let records = scan_tracks(&conn, None).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "");
        assert_eq!(records[0].artist, "");
        assert_eq!(records[0].album, "");
        assert_eq!(records[0].duration_ms, 0);
        assert_eq!(records[0].path, "/music/a.mp3");
    }

    #[test]
    fn scan_is_idempotent_against_an_unchanged_index() {
        let conn = media_index();
        insert_track(&conn, "Only", "/music/o.mp3", 4);

        let first = scan_tracks(&conn, None).unwrap();
        let second = scan_tracks(&conn, None).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn scan_merges_resolved_artwork_and_sentinel() {
        let conn = media_index();
        insert_track(&conn, "With Art", "/music/w.mp3", 7);
        insert_track(&conn, "Without Art", "/music/n.mp3", 8);

        let art = artwork_index();
        art.execute(
            "INSERT INTO album_art (album_id, art_path) VALUES (7, '/art/7.jpg')",
            [],
        )
        .unwrap();

        let mut resolver = AlbumArtResolver::new(Some(art));
        let records = scan_tracks(&conn, Some(&mut resolver)).unwrap();

        assert_eq!(records[0].album_art_path.as_deref(), Some("/art/7.jpg"));
        assert_eq!(records[1].album_art_path.as_deref(), Some(NO_ALBUM_ART));
    }

    #[test]
    fn scan_without_resolver_leaves_artwork_out_of_the_payload() {
        let conn = media_index();
        insert_track(&conn, "Song", "/music/s.mp3", 1);

        let records = scan_tracks(&conn, None).unwrap();
        let payload = to_payload(&records).unwrap();

        assert_eq!(records[0].album_art_path, None);
        assert!(!payload.contains("albumArtPath"));
    }

    #[test]
    fn payload_matches_the_documented_wire_shape() {
        let conn = media_index();
        conn.execute(
            "INSERT INTO audio (title, path, artist, duration, album, album_id)
             VALUES ('Song A', '/music/a.mp3', 'Artist X', 205000, 'Album Y', 7)",
            [],
        )
        .unwrap();

        let mut resolver = AlbumArtResolver::new(Some(artwork_index()));
        let records = scan_tracks(&conn, Some(&mut resolver)).unwrap();
        let payload = to_payload(&records).unwrap();

        let actual: serde_json::Value = serde_json::from_str(&payload).unwrap();
        let expected = serde_json::json!([{
            "title": "Song A",
            "path": "/music/a.mp3",
            "artist": "Artist X",
            "durationMs": 205000,
            "album": "Album Y",
            "albumArtPath": "no_album_art"
        }]);
        assert_eq!(actual, expected);
    }

    #[test]
    fn open_media_index_reports_a_missing_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");

        let result = open_media_index(path.to_str().unwrap());

        assert!(matches!(result, Err(LibraryError::IndexUnavailable(_))));
    }

    #[test]
    fn open_media_index_opens_an_existing_database_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("media.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE audio (title TEXT, path TEXT, artist TEXT, duration INTEGER, album TEXT, album_id INTEGER);")
            .unwrap();

        let conn = open_media_index(path.to_str().unwrap()).unwrap();

        let err = conn.execute("INSERT INTO audio (title) VALUES ('x')", []);
        assert!(err.is_err());
    }
}
