/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bez_curves::bezier::*;

///
/// One row of the editor's side table: a sampled point shown as percentages of the domain
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TableRow {
    pub x_percent: i64,
    pub y_percent: i64,
}

///
/// Formats the by-X samples as (X%, Y%) table rows
///
pub fn table_rows(samples: &[Coord2]) -> Vec<TableRow> {
    samples
        .iter()
        .map(|point| TableRow {
            x_percent: percent(point.x()),
            y_percent: percent(point.y()),
        })
        .collect()
}

/// Rounds to a whole percentage, halves rounding up
pub(crate) fn percent(value: f64) -> i64 {
    (value * 100.0 + 0.5).floor() as i64
}
