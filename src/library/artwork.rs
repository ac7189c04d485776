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

//! Album artwork resolution.
//!
//! Artwork paths live in a separately addressed index keyed by album id.
//! Resolution is a point lookup per album, memoized for the lifetime of
//! one resolver (one scan), since tracks sharing an album would otherwise
//! repeat the identical query. A lookup that cannot be completed is
//! indistinguishable from "no artwork" and never interrupts the scan that
//! requested it.

use std::collections::HashMap;

use rusqlite::{Connection, OptionalExtension};
use tracing::warn;

const ART_QUERY: &str = "SELECT art_path FROM album_art WHERE album_id = ? LIMIT 1";

/// Per-scan resolver of album ids to on-disk artwork paths.
///
/// Constructed with `None` when the artwork index could not be opened, in
/// which case every resolution reports absence.
pub(crate) struct AlbumArtResolver {
    conn: Option<Connection>,
    cache: HashMap<i64, Option<String>>,
}

impl AlbumArtResolver {
    pub(crate) fn new(conn: Option<Connection>) -> Self {
        Self {
            conn,
            cache: HashMap::new(),
        }
    }

    /// Resolves the artwork path for an album, or `None` when the album
    /// has no artwork or the artwork index cannot be queried.
    ///
    /// Both outcomes are cached, so repeated resolutions for the same
    /// album cost one lookup.
    pub(crate) fn resolve(&mut self, album_id: i64) -> Option<String> {
        if let Some(cached) = self.cache.get(&album_id) {
            return cached.clone();
        }

        let resolved = self.lookup(album_id);
        self.cache.insert(album_id, resolved.clone());
        resolved
    }

    fn lookup(&self, album_id: i64) -> Option<String> {
        let conn = self.conn.as_ref()?;

        let result = conn
            .prepare_cached(ART_QUERY)
            .and_then(|mut stmt| stmt.query_row([album_id], |row| row.get(0)).optional());

        match result {
            Ok(path) => path,
            Err(e) => {
                warn!(album_id, error = %e, "artwork lookup failed, treating as not found");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork_index() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE album_art (album_id INTEGER, art_path TEXT);
             INSERT INTO album_art (album_id, art_path) VALUES (7, '/art/7.jpg');
             INSERT INTO album_art (album_id, art_path) VALUES (7, '/art/7-alt.jpg');",
        )
        .unwrap();
        conn
    }

    #[test]
    fn resolves_the_first_matching_artwork_path() {
        let mut resolver = AlbumArtResolver::new(Some(artwork_index()));
        assert_eq!(resolver.resolve(7).as_deref(), Some("/art/7.jpg"));
    }

    #[test]
    fn reports_absence_for_an_unknown_album() {
        let mut resolver = AlbumArtResolver::new(Some(artwork_index()));
        assert_eq!(resolver.resolve(99), None);
    }

    #[test]
    fn reports_absence_without_a_backing_index() {
        let mut resolver = AlbumArtResolver::new(None);
        assert_eq!(resolver.resolve(7), None);
    }

    #[test]
    fn degrades_a_failing_lookup_to_not_found() {
        let conn = Connection::open_in_memory().unwrap();
        // No album_art table at all, so every lookup errors.
        let mut resolver = AlbumArtResolver::new(Some(conn));
        assert_eq!(resolver.resolve(7), None);
    }

    #[test]
    fn memoizes_both_hits_and_misses() {
        let conn = artwork_index();
        let mut resolver = AlbumArtResolver::new(Some(conn));

        assert_eq!(resolver.resolve(7).as_deref(), Some("/art/7.jpg"));
        assert_eq!(resolver.resolve(99), None);

        // Pull the table out from under the resolver; cached answers must
        // survive, proving no further queries are issued.
        resolver
            .conn
            .as_ref()
            .unwrap()
            .execute_batch("DROP TABLE album_art;")
            .unwrap();

        assert_eq!(resolver.resolve(7).as_deref(), Some("/art/7.jpg"));
        assert_eq!(resolver.resolve(99), None);
    }
}
