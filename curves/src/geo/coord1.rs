/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;

// f64 is the 1-dimensional coordinate: the X-monotonicity check runs the curve operations
// against the X components of a 2D curve on their own

impl Coordinate for f64 {
    fn from_components(components: &[f64]) -> f64 {
        components[0]
    }

    #[inline]
    fn origin() -> f64 {
        0.0
    }

    #[inline]
    fn len() -> usize {
        1
    }

    #[inline]
    fn get(&self, _index: usize) -> f64 {
        *self
    }

    #[inline]
    fn distance_to(&self, target: &f64) -> f64 {
        f64::abs(self - target)
    }
}
