/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::geo::*;

///
/// Returns the weights of the derivative of a cubic bezier curve
///
/// The derivative of a cubic curve is the quadratic curve with the weights
/// `(3(w2-w1), 3(w3-w2), 3(w4-w3))`
///
pub fn derivative4<Point: Coordinate>(
    w1: Point,
    w2: Point,
    w3: Point,
    w4: Point,
) -> (Point, Point, Point) {
    ((w2 - w1) * 3.0, (w3 - w2) * 3.0, (w4 - w3) * 3.0)
}
