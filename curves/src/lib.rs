/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Evaluating and sampling the editor's cubic bezier curve
//!
//! ```
//! use bez_curves::bezier::*;
//!
//! let curve = Curve::from_points(
//!     Coord2(0.0, 0.25),
//!     (Coord2(0.6, 0.25), Coord2(0.38, 0.75)),
//!     Coord2(1.0, 0.8),
//! );
//!
//! let start = curve.point_at_pos(0.0);
//! let halfway = point_at_x(&curve, 0.5);
//! let path_points = sample_curve_by_t(&curve, 5);
//! let table_points = sample_curve_by_x(&curve, 10);
//! ```
//!
//! A bezier curve yields points by parametric position `t` rather than by X position, so
//! answering "what is Y at this X?" needs a search along the curve. This crate provides the
//! forward evaluation (`point_at_pos`), the inverse search (`point_at_x`, a bisection over
//! `t` that relies on the X component being monotonic) and the two sampling routines that
//! derive the editor's display data: evenly spaced `t` values for the drawn path and evenly
//! spaced X positions for the side table.
//!
//! Everything here is a pure function of the curve it is given: the editor mutates its
//! own curve state and recomputes the derived samples from scratch after every change.
//!

pub mod bezier;
pub mod geo;

mod consts;

pub use self::consts::*;
pub use self::geo::*;
