/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use roots::{find_roots_quadratic, Roots};

use super::super::consts::*;
use super::super::geo::*;
use super::curve::*;
use super::derivative::*;

///
/// The result of searching a curve for the point at a particular X position
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SolveXResult {
    /// The search settled on a t value whose X position is within the tolerance of the target
    Converged(f64),

    /// The step bound was reached before the X position came within the tolerance of the
    /// target. This can only happen for curves whose X component is not monotonic; the value
    /// is the best estimate the search had when it stopped.
    DidNotConverge(f64),
}

impl SolveXResult {
    ///
    /// The t value found by the search, whether or not it converged
    ///
    #[inline]
    pub fn t(&self) -> f64 {
        match self {
            SolveXResult::Converged(t) | SolveXResult::DidNotConverge(t) => *t,
        }
    }

    ///
    /// True if the search found a point within the tolerance
    ///
    #[inline]
    pub fn converged(&self) -> bool {
        matches!(self, SolveXResult::Converged(_))
    }
}

///
/// Searches a curve for the t value whose X position is within `tolerance` of `x_target`,
/// bisecting the parametric range
///
/// The parametric form of a bezier curve gives points by curve-length fraction, so there is
/// no direct way to ask for the point at an X position: instead the t range is halved
/// repeatedly, walking t towards the target by comparing the X position at the midpoint of
/// the remaining range.
///
/// The curve's X component must be monotonic non-decreasing in t for this to work - which
/// holds whenever the control point X positions lie between the start and end X positions -
/// since bisection relies on "X too small" meaning "t too small". A curve that folds back
/// on itself in X can make the search miss, so the number of steps is bounded; the bound is
/// far above what a monotonic curve needs and never changes the result for one.
///
/// `x_target` values outside the X range of the curve drive t to 0 or 1 and come back as
/// `DidNotConverge` carrying that boundary estimate.
///
pub fn solve_curve_t_for_x<C: BezierCurve>(curve: &C, x_target: f64, tolerance: f64) -> SolveXResult
where
    C::Point: Coordinate2D,
{
    let mut lower = 0.0;
    let mut upper = 1.0;
    let mut t = (lower + upper) / 2.0;
    let mut x = curve.point_at_pos(t).x();

    for _ in 0..MAX_SOLVE_STEPS {
        if (x_target - x).abs() <= tolerance {
            return SolveXResult::Converged(t);
        }

        if x_target > x {
            lower = t;
        } else {
            upper = t;
        }

        t = (lower + upper) / 2.0;
        x = curve.point_at_pos(t).x();
    }

    if (x_target - x).abs() <= tolerance {
        SolveXResult::Converged(t)
    } else {
        SolveXResult::DidNotConverge(t)
    }
}

///
/// Returns the point on a curve at a particular X position
///
/// This is the searching counterpart to `point_at_pos`: the returned point's X component is
/// within `X_TOLERANCE` of `x_target` for any curve whose X component is monotonic in t. In
/// the rare case that the search does not converge the best estimate is still used, so a
/// caller sampling a fixed grid of X positions receives a point for every position; callers
/// that need to tell the difference can use `solve_curve_t_for_x` directly.
///
pub fn point_at_x<C: BezierCurve>(curve: &C, x_target: f64) -> C::Point
where
    C::Point: Coordinate2D,
{
    let t = solve_curve_t_for_x(curve, x_target, X_TOLERANCE).t();

    curve.point_at_pos(t)
}

///
/// True if the X component of a curve never decreases as t increases from 0 to 1
///
/// This is the precondition for `solve_curve_t_for_x` and the routines built on it. The X
/// component of a cubic curve is itself a cubic polynomial in t, so its derivative is a
/// quadratic: the curve folds back in X exactly when that quadratic changes sign inside
/// the parametric range.
///
pub fn curve_is_monotonic_in_x<C: BezierCurve>(curve: &C) -> bool
where
    C::Point: Coordinate2D,
{
    let control_points = curve.control_points();
    let (d1, d2, d3) = derivative4(
        curve.start_point().x(),
        control_points.0.x(),
        control_points.1.x(),
        curve.end_point().x(),
    );

    // dx/dt is d1·(1-t)² + 2·d2·t(1-t) + d3·t², here as a standard quadratic in t
    let a2 = d1 - 2.0 * d2 + d3;
    let a1 = 2.0 * (d2 - d1);
    let a0 = d1;

    let interior = |t: f64| t > 0.0 && t < 1.0;
    let sign_change_inside = match find_roots_quadratic(a2, a1, a0) {
        Roots::No(_) => false,

        // a double root is a tangent touch, not a sign change, so only the linear case counts
        Roots::One([root]) => a2 == 0.0 && interior(root),

        Roots::Two(pair) => pair.iter().any(|root| interior(*root)),

        // a quadratic never has more than two roots
        _ => false,
    };

    if sign_change_inside {
        return false;
    }

    // constant sign from here on: non-decreasing if the derivative is non-negative at the
    // ends and at the midpoint (the midpoint catches a parabola dipping between roots that
    // sit exactly on the ends of the range)
    d1 >= 0.0 && d3 >= 0.0 && (0.25 * a2 + 0.5 * a1 + a0) >= 0.0
}
