/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Traits for basic geometric definitions
//!
//! The `Geo` trait can be implemented by any type that has a particular type of coordinate:
//! implementations of `BezierCurve` need to implement `Geo` in order to describe what type
//! they use for coordinates. `Coord2` is the standard 2-dimensional coordinate used by the
//! editor, and `Coordinate2D` provides access to the x and y components that the curve
//! search and the sampling routines work in terms of.
//!

mod coord1;
mod coord2;
mod coordinate;
mod geo;

pub use self::coord1::*;
pub use self::coord2::*;
pub use self::coordinate::*;
pub use self::geo::*;
