/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::geo::*;
use super::curve::*;
use super::solve::*;

///
/// Samples a curve at evenly spaced values of t
///
/// Returns `point_count + 1` points: the first is the start of the curve, the last is the
/// end, and the points in between sit at `t = i/point_count`. The editor draws its path
/// through these.
///
pub fn sample_curve_by_t<C: BezierCurve>(curve: &C, point_count: usize) -> Vec<C::Point> {
    debug_assert!(point_count > 0);

    (0..=point_count)
        .map(|index| curve.point_at_pos(index as f64 / point_count as f64))
        .collect()
}

///
/// Samples a curve at evenly spaced X positions between its start and end point
///
/// Returns `sample_count + 1` points whose X positions step from the start point's X to the
/// end point's X (the step is scaled to the actual X range of the curve, whatever domain it
/// occupies). Each point is found by searching the curve with `point_at_x`, so the samples
/// are only accurate when the curve's X component is monotonic in t
/// (`curve_is_monotonic_in_x`); for a curve that folds back in X the search still returns
/// its best estimate for every position rather than failing. The editor's side table is
/// built from these.
///
pub fn sample_curve_by_x<C: BezierCurve>(curve: &C, sample_count: usize) -> Vec<C::Point>
where
    C::Point: Coordinate2D,
{
    debug_assert!(sample_count > 0);

    let x_start = curve.start_point().x();
    let x_span = curve.end_point().x() - x_start;

    (0..=sample_count)
        .map(|index| point_at_x(curve, x_start + x_span * (index as f64 / sample_count as f64)))
        .collect()
}
