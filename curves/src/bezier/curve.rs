/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::geo::*;
use super::basis::*;

///
/// Trait implemented by things representing a cubic bezier curve
///
pub trait BezierCurve: Geo + Clone + Sized {
    ///
    /// The point at the start of the curve (t = 0)
    ///
    fn start_point(&self) -> Self::Point;

    ///
    /// The point at the end of the curve (t = 1)
    ///
    fn end_point(&self) -> Self::Point;

    ///
    /// The two control points in between the start and end point
    ///
    fn control_points(&self) -> (Self::Point, Self::Point);

    ///
    /// Given a value t from 0 to 1, returns the point at that position along the curve
    ///
    /// t is the fraction of the curve's parametric length, which is not proportional to
    /// either the X or Y component on its own. Values outside of [0, 1] extrapolate the
    /// curve rather than being treated as an error.
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Self::Point {
        let control_points = self.control_points();

        basis(
            t,
            self.start_point(),
            control_points.0,
            control_points.1,
            self.end_point(),
        )
    }
}

///
/// Trait implemented by curve types that can construct new curves from points
///
pub trait BezierCurveFactory: BezierCurve {
    ///
    /// Creates a new bezier curve from a start point, a pair of control points and an end point
    ///
    fn from_points(
        start: Self::Point,
        control_points: (Self::Point, Self::Point),
        end: Self::Point,
    ) -> Self;
}

///
/// Represents a cubic bezier curve
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Curve<Coord: Coordinate> {
    pub start_point: Coord,
    pub end_point: Coord,
    pub control_points: (Coord, Coord),
}

impl<Coord: Coordinate> Geo for Curve<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate> BezierCurve for Curve<Coord> {
    #[inline]
    fn start_point(&self) -> Coord {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Coord {
        self.end_point
    }

    #[inline]
    fn control_points(&self) -> (Coord, Coord) {
        self.control_points
    }
}

impl<Coord: Coordinate> BezierCurveFactory for Curve<Coord> {
    fn from_points(start: Coord, control_points: (Coord, Coord), end: Coord) -> Curve<Coord> {
        Curve {
            start_point: start,
            end_point: end,
            control_points,
        }
    }
}
