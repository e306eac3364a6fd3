/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;

///
/// Implemented by geometric objects to describe the type they use for coordinates
///
pub trait Geo {
    /// The type of a point in this object's coordinate space
    type Point: Coordinate;
}
