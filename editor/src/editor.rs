/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cmp::Ordering;

use smallvec::SmallVec;

use bez_canvas::*;
use bez_curves::bezier::*;

use crate::curve_model::*;
use crate::derived::*;
use crate::pointer::*;
use crate::table::*;

/// Distance in pixels within which a press picks up a handle (half the size of the
/// largest handle marker)
pub const PICK_RADIUS: f64 = 10.5;

///
/// Pixel-space layout of the chart
///
/// The gutter is the margin between the edges of the picture and the plotting area; the
/// axis labels are drawn inside it.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub gutter: f64,
}

impl Default for ChartLayout {
    fn default() -> ChartLayout {
        ChartLayout {
            width: 700.0,
            height: 500.0,
            gutter: 100.0,
        }
    }
}

impl ChartLayout {
    /// Width of the plotting area, inside the gutters
    pub fn chart_width(&self) -> f64 {
        self.width - self.gutter * 2.0
    }

    /// Height of the plotting area, inside the gutters
    pub fn chart_height(&self) -> f64 {
        self.height - self.gutter * 2.0
    }

    ///
    /// The scale mapping the model's X domain across the plotting area
    ///
    pub fn x_scale(&self, model: &CurveModel) -> LinearScale {
        LinearScale::new(model.x_domain, (0.0, self.chart_width()))
    }

    ///
    /// The scale mapping the model's Y domain up the plotting area
    ///
    /// The range runs backwards so that larger Y values sit nearer the top of the picture.
    ///
    pub fn y_scale(&self, model: &CurveModel) -> LinearScale {
        LinearScale::new(model.y_domain, (self.chart_height(), 0.0))
    }
}

///
/// The interactive curve editor
///
/// Owns the curve model and its derived display data, and turns pointer gestures into
/// model edits: a press picks up the handle under the pointer, drags move it through the
/// pixel-to-domain mapping, and a release or cancel puts it down. Every edit is followed
/// synchronously by a full recompute of the derived data.
///
pub struct CurveEditor {
    pub(crate) model: CurveModel,
    pub(crate) layout: ChartLayout,
    pub(crate) point_count: usize,
    pub(crate) sample_count: usize,
    pub(crate) derived: DerivedCurveData,
    pub(crate) active_drag: Option<ActiveDrag>,
    pub(crate) has_been_edited: bool,
}

///
/// A drag gesture in progress on one of the handles
///
pub(crate) struct ActiveDrag {
    pub(crate) handle: ControlHandle,
    pub(crate) tracker: DragTracker,
}

impl CurveEditor {
    ///
    /// Creates an editor with the given model, layout and sampling resolutions
    ///
    pub fn new(
        model: CurveModel,
        layout: ChartLayout,
        point_count: usize,
        sample_count: usize,
    ) -> CurveEditor {
        let derived = DerivedCurveData::compute(&model, point_count, sample_count);

        CurveEditor {
            model,
            layout,
            point_count,
            sample_count,
            derived,
            active_drag: None,
            has_been_edited: false,
        }
    }

    ///
    /// Creates an editor with the standard demo curve and chart layout
    ///
    pub fn with_defaults() -> CurveEditor {
        CurveEditor::new(CurveModel::default(), ChartLayout::default(), 5, 10)
    }

    pub fn model(&self) -> &CurveModel {
        &self.model
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn derived(&self) -> &DerivedCurveData {
        &self.derived
    }

    pub fn is_dragging(&self) -> bool {
        self.active_drag.is_some()
    }

    /// True once any handle has been dragged (the scene stops showing its hint)
    pub fn has_been_edited(&self) -> bool {
        self.has_been_edited
    }

    ///
    /// The side table derived from the current curve
    ///
    pub fn table(&self) -> Vec<TableRow> {
        table_rows(&self.derived.by_x)
    }

    ///
    /// Moves a handle by a distance in curve space and recomputes the derived data
    ///
    pub fn move_handle(&mut self, handle: ControlHandle, dx: f64, dy: f64) {
        self.model.move_handle(handle, dx, dy);
        self.has_been_edited = true;
        self.recompute();
    }

    ///
    /// Routes a pointer event through the editor, returning true when it changed the curve
    ///
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event.action {
            PointerAction::ButtonDown => {
                let chart_location = self.to_chart_space(event.location);

                if let Some(handle) = self.handle_at(chart_location) {
                    let axis = match handle {
                        ControlHandle::Start | ControlHandle::End => AxisMask::y_only(),
                        _ => AxisMask::both(),
                    };

                    let mut tracker = DragTracker::new(axis);
                    tracker.press(chart_location);
                    self.active_drag = Some(ActiveDrag { handle, tracker });
                }

                false
            }

            PointerAction::Drag => {
                let chart_location = self.to_chart_space(event.location);

                let moved = match &mut self.active_drag {
                    Some(active) => active
                        .tracker
                        .drag_to(chart_location)
                        .map(|delta| (active.handle, delta)),
                    None => None,
                };

                if let Some((handle, (pixel_dx, pixel_dy))) = moved {
                    let dx = self.layout.x_scale(&self.model).invert_delta(pixel_dx);
                    let dy = self.layout.y_scale(&self.model).invert_delta(pixel_dy);

                    self.model.move_handle(handle, dx, dy);
                    self.has_been_edited = true;
                    self.recompute();
                    true
                } else {
                    false
                }
            }

            // release and cancel end the session the same way: edits already applied stay
            // applied (there is no history to roll back to)
            PointerAction::ButtonUp | PointerAction::Cancel => {
                if let Some(active) = &mut self.active_drag {
                    active.tracker.release();
                }
                self.active_drag = None;

                false
            }
        }
    }

    ///
    /// Finds the handle within picking distance of a chart-space location, nearest first
    ///
    fn handle_at(&self, location: (f64, f64)) -> Option<ControlHandle> {
        let x_scale = self.layout.x_scale(&self.model);
        let y_scale = self.layout.y_scale(&self.model);

        let mut candidates: SmallVec<[(ControlHandle, f64); 4]> = ControlHandle::ALL
            .iter()
            .map(|handle| {
                let position = self.model.handle_position(*handle);
                let pixel_x = x_scale.to_range(position.x());
                let pixel_y = y_scale.to_range(position.y());
                let distance =
                    ((pixel_x - location.0).powi(2) + (pixel_y - location.1).powi(2)).sqrt();

                (*handle, distance)
            })
            .collect();

        candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

        candidates
            .first()
            .filter(|(_, distance)| *distance <= PICK_RADIUS)
            .map(|(handle, _)| *handle)
    }

    fn to_chart_space(&self, window_location: (f64, f64)) -> (f64, f64) {
        (
            window_location.0 - self.layout.gutter,
            window_location.1 - self.layout.gutter,
        )
    }

    fn recompute(&mut self) {
        self.derived = DerivedCurveData::compute(&self.model, self.point_count, self.sample_count);
    }
}
