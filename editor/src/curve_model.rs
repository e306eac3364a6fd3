/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bez_curves::bezier::*;

///
/// The four draggable handles of the editor's curve
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ControlHandle {
    /// The start point. Pinned to the left end of the X domain, so only its height moves
    Start,

    /// The end point. Pinned to the right end of the X domain, so only its height moves
    End,

    /// The control point attached to the start of the curve
    ControlPoint1,

    /// The control point attached to the end of the curve
    ControlPoint2,
}

impl ControlHandle {
    /// Every handle, in hit-testing order
    pub const ALL: [ControlHandle; 4] = [
        ControlHandle::Start,
        ControlHandle::End,
        ControlHandle::ControlPoint1,
        ControlHandle::ControlPoint2,
    ];
}

///
/// The editable state of the curve: the single source of truth the display data is
/// derived from
///
/// The start and end points only store their heights - their X positions are the ends of
/// the X domain, which is what guarantees that every X position inside the domain can be
/// resolved to a point on the curve.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CurveModel {
    /// Height of the curve at the start of the X domain
    pub start_y: f64,

    /// Height of the curve at the end of the X domain
    pub end_y: f64,

    /// The control point attached to the start point
    pub control_point_1: Coord2,

    /// The control point attached to the end point
    pub control_point_2: Coord2,

    /// The X positions covered by the curve (start < end)
    pub x_domain: (f64, f64),

    /// The Y positions shown by the chart
    pub y_domain: (f64, f64),
}

impl Default for CurveModel {
    fn default() -> CurveModel {
        CurveModel {
            start_y: 0.25,
            end_y: 0.8,
            control_point_1: Coord2(0.6, 0.25),
            control_point_2: Coord2(0.38, 0.75),
            x_domain: (0.0, 1.0),
            y_domain: (0.0, 1.0),
        }
    }
}

impl CurveModel {
    ///
    /// The position of a handle in curve space
    ///
    pub fn handle_position(&self, handle: ControlHandle) -> Coord2 {
        match handle {
            ControlHandle::Start => Coord2(self.x_domain.0, self.start_y),
            ControlHandle::End => Coord2(self.x_domain.1, self.end_y),
            ControlHandle::ControlPoint1 => self.control_point_1,
            ControlHandle::ControlPoint2 => self.control_point_2,
        }
    }

    ///
    /// Moves a handle by a distance in curve space
    ///
    /// The start and end handles follow only the Y component of the movement (their X
    /// positions are pinned to the domain); the control points follow both components.
    ///
    pub fn move_handle(&mut self, handle: ControlHandle, dx: f64, dy: f64) {
        match handle {
            ControlHandle::Start => self.start_y += dy,
            ControlHandle::End => self.end_y += dy,
            ControlHandle::ControlPoint1 => {
                self.control_point_1 = self.control_point_1 + Coord2(dx, dy)
            }
            ControlHandle::ControlPoint2 => {
                self.control_point_2 = self.control_point_2 + Coord2(dx, dy)
            }
        }
    }

    ///
    /// The bezier curve this model currently describes
    ///
    pub fn curve(&self) -> Curve<Coord2> {
        debug_assert!(self.x_domain.0 < self.x_domain.1);

        Curve::from_points(
            Coord2(self.x_domain.0, self.start_y),
            (self.control_point_1, self.control_point_2),
            Coord2(self.x_domain.1, self.end_y),
        )
    }
}
