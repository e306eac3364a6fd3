/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Routines for describing, evaluating and sampling cubic bezier curves
//!
//! ```
//! # use bez_curves::bezier::*;
//! #
//! let curve = Curve::from_points(Coord2(0.0, 0.25), (Coord2(0.6, 0.25), Coord2(0.38, 0.75)), Coord2(1.0, 0.8));
//!
//! let mid_point   = curve.point_at_pos(0.5);
//! let at_x        = point_at_x(&curve, 0.5);
//! let path_points = sample_curve_by_t(&curve, 5);
//! let table_rows  = sample_curve_by_x(&curve, 10);
//! ```
//!
//! Anything that implements the `BezierCurve` trait can be evaluated and sampled by the
//! functions in this module. The `Curve` type is provided as a basic implementation; the
//! `BezierCurveFactory` trait extends `BezierCurve` for types that can build new curves.
//!
//! The inverse operations (`solve_curve_t_for_x`, `point_at_x`, `sample_curve_by_x`) search
//! the parametric range by bisection and require the curve's X component to be monotonic;
//! `curve_is_monotonic_in_x` reports whether a curve satisfies that precondition.
//!

mod basis;
mod curve;
mod derivative;
mod sample;
mod solve;

pub use self::basis::*;
pub use self::curve::*;
pub use self::derivative::*;
pub use self::sample::*;
pub use self::solve::*;

pub use super::geo::*;
