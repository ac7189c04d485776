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

/// Formats a duration in milliseconds into a human-readable `MM:SS` string.
///
/// Used in scan diagnostics to summarize the total playing time of the
/// enumerated library.
///
/// # Arguments
///
/// * `total_ms` - The duration to format, in milliseconds.
pub(crate) fn format_duration_ms(total_ms: i64) -> String {
    let total_seconds = total_ms.max(0) / 1000;
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}
