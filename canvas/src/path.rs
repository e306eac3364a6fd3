/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use itertools::Itertools;
use serde::{Deserialize, Serialize};

///
/// Operations that define paths
///
/// Coordinates are in pixel space: the editor maps curve-space points through its scales
/// before building paths from them.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum PathOp {
    /// Move to a new point
    Move(f32, f32),

    /// Line to point
    Line(f32, f32),

    /// Bezier curve to point
    BezierCurve(((f32, f32), (f32, f32)), (f32, f32)),

    /// Closes the current subpath
    ClosePath,
}

///
/// Serializes a sequence of path operations as SVG path data (the `d` attribute of a
/// `<path>` element)
///
pub fn path_data(ops: &[PathOp]) -> String {
    ops.iter()
        .map(|op| match op {
            PathOp::Move(x, y) => format!("M {} {}", x, y),
            PathOp::Line(x, y) => format!("L {} {}", x, y),
            PathOp::BezierCurve(((cp1x, cp1y), (cp2x, cp2y)), (x, y)) => {
                format!("C {} {} {} {} {} {}", cp1x, cp1y, cp2x, cp2y, x, y)
            }
            PathOp::ClosePath => "Z".to_string(),
        })
        .join(" ")
}

///
/// Builds a smooth path that passes through every point in a sequence
///
/// Each consecutive pair of points becomes one cubic segment whose control points are
/// derived from the neighbouring points (a Catmull-Rom spline in bezier form). This is how
/// the editor draws its curve: the curve itself is sampled into points first, so the picture
/// never relies on the SVG renderer's own idea of a bezier curve.
///
pub fn smooth_path_through(points: &[(f32, f32)]) -> Vec<PathOp> {
    let mut ops = Vec::with_capacity(points.len());

    let first = match points.first() {
        Some(first) => *first,
        None => return ops,
    };
    ops.push(PathOp::Move(first.0, first.1));

    for index in 0..points.len().saturating_sub(1) {
        // clamp the neighbours at the ends of the sequence
        let before = points[index.saturating_sub(1)];
        let from = points[index];
        let to = points[index + 1];
        let after = points[(index + 2).min(points.len() - 1)];

        let cp1 = (
            from.0 + (to.0 - before.0) / 6.0,
            from.1 + (to.1 - before.1) / 6.0,
        );
        let cp2 = (
            to.0 - (after.0 - from.0) / 6.0,
            to.1 - (after.1 - from.1) / 6.0,
        );

        ops.push(PathOp::BezierCurve((cp1, cp2), to));
    }

    ops
}

///
/// Closes a path against the bottom edge of a chart so the region under it can be filled
///
pub fn closed_area_path(ops: &[PathOp], width: f32, height: f32) -> Vec<PathOp> {
    let mut closed = ops.to_vec();

    closed.push(PathOp::Line(width, height));
    closed.push(PathOp::Line(0.0, height));
    closed.push(PathOp::ClosePath);

    closed
}
