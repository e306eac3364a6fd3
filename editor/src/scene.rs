/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use itertools::Itertools;

use bez_canvas::*;
use bez_curves::bezier::*;

use crate::curve_model::*;
use crate::editor::*;
use crate::table::percent;

// The editor palette
const TEXT: Color = Color::Rgba(68.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0, 1.0);
const LABEL_TEXT: Color = Color::Rgba(170.0 / 255.0, 170.0 / 255.0, 170.0 / 255.0, 1.0);
const CURVE: Color = Color::Rgba(53.0 / 255.0, 132.0 / 255.0, 187.0 / 255.0, 1.0);
const DRAGGABLE_POINT: Color = Color::Rgba(245.0 / 255.0, 41.0 / 255.0, 61.0 / 255.0, 1.0);
const DRAGGABLE_POINT_LINE: Color = Color::Rgba(245.0 / 255.0, 41.0 / 255.0, 61.0 / 255.0, 0.25);
const GRAPH_BG_FROM: Color = Color::Rgba(1.0, 1.0, 1.0, 1.0);
const GRAPH_BG_TO: Color = Color::Rgba(211.0 / 255.0, 230.0 / 255.0, 242.0 / 255.0, 1.0);
const GRAPH_BG_LINES: Color = GRAPH_BG_TO;
const BEZIER_BG_FROM: Color = Color::Rgba(135.0 / 255.0, 185.0 / 255.0, 221.0 / 255.0, 1.0);
const BEZIER_BG_TO: Color = Color::Rgba(239.0 / 255.0, 246.0 / 255.0, 250.0 / 255.0, 1.0);
const BEZIER_BG_LINES_FROM: Color = Color::Rgba(211.0 / 255.0, 230.0 / 255.0, 242.0 / 255.0, 0.3);
const BEZIER_BG_LINES_TO: Color = Color::Rgba(1.0, 1.0, 1.0, 0.9);

/// How far the grid lines overhang the edges of the plotting area
const GRID_OVERHANG: f64 = 10.0;

impl CurveEditor {
    ///
    /// Renders the editor as a complete static SVG document
    ///
    /// The scene is drawn entirely from the model and the derived data: the background
    /// and its grid, the curve path smoothed through the by-t samples with the region
    /// under it filled, a diamond marker at each interior by-x sample, the connector
    /// lines from the ends of the curve to their control points, and the four handle
    /// markers. Until the first drag a short hint is shown next to the second control
    /// point.
    ///
    pub fn scene(&self) -> String {
        let x_scale = self.layout.x_scale(&self.model);
        let y_scale = self.layout.y_scale(&self.model);
        let chart_width = self.layout.chart_width();
        let chart_height = self.layout.chart_height();

        let x_ticks = interior_ticks(&x_scale, self.model.x_domain);
        let y_ticks = interior_ticks(&y_scale, self.model.y_domain);

        // the drawn curve passes through the by-t samples rather than letting the SVG
        // renderer interpret the control points itself
        let path_points = self
            .derived
            .by_t
            .iter()
            .map(|point| {
                (
                    x_scale.to_range(point.x()) as f32,
                    y_scale.to_range(point.y()) as f32,
                )
            })
            .collect::<Vec<_>>();
        let curve_ops = smooth_path_through(&path_points);
        let curve_data = path_data(&curve_ops);
        let closed_data = path_data(&closed_area_path(
            &curve_ops,
            chart_width as f32,
            chart_height as f32,
        ));

        let defs = SvgElement::new("defs")
            .child(gradient("chartBG", GRAPH_BG_FROM, GRAPH_BG_TO))
            .child(gradient("bezierBG", BEZIER_BG_FROM, BEZIER_BG_TO))
            .child(gradient("bezierBGLines", BEZIER_BG_LINES_FROM, BEZIER_BG_LINES_TO))
            .child(
                SvgElement::new("clipPath").attr("id", "graph").child(
                    SvgElement::new("rect")
                        .attr("width", chart_width)
                        .attr("height", chart_height),
                ),
            )
            .child(
                SvgElement::new("clipPath")
                    .attr("id", "closedBezierPath")
                    .child(SvgElement::new("path").attr("d", closed_data.clone())),
            );

        let background = SvgElement::new("rect")
            .attr("width", chart_width)
            .attr("height", chart_height)
            .attr("fill", "url(#chartBG)")
            .attr("stroke", GRAPH_BG_LINES.to_css());

        let background_grid = SvgElement::new("g")
            .attr("stroke", GRAPH_BG_LINES.to_css())
            .children(grid_lines(
                &x_scale, &y_scale, &x_ticks, &y_ticks, chart_width, chart_height,
            ));

        let curve_group = SvgElement::new("g")
            .attr("clip-path", "url(#graph)")
            .child(
                SvgElement::new("path")
                    .attr("d", closed_data)
                    .attr("fill", "url(#bezierBG)"),
            )
            .child(
                // the grid shows through the filled region in the curve's own tint
                SvgElement::new("g")
                    .attr("clip-path", "url(#closedBezierPath)")
                    .attr("stroke", "url(#bezierBGLines)")
                    .children(grid_lines(
                        &x_scale, &y_scale, &x_ticks, &y_ticks, chart_width, chart_height,
                    )),
            )
            .child(
                SvgElement::new("path")
                    .attr("d", curve_data)
                    .attr("fill", "none")
                    .attr("stroke", CURVE.to_css())
                    .attr("stroke-width", 3),
            );

        // a marker at every by-x sample except the two ends, which sit under the handles
        let markers = SvgElement::new("g").attr("clip-path", "url(#graph)").children(
            self.derived
                .by_x
                .iter()
                .dropping(1)
                .dropping_back(1)
                .map(|point| {
                    diamond(
                        x_scale.to_range(point.x()),
                        y_scale.to_range(point.y()),
                    )
                }),
        );

        let start = self.model.handle_position(ControlHandle::Start);
        let end = self.model.handle_position(ControlHandle::End);
        let control_1 = self.model.handle_position(ControlHandle::ControlPoint1);
        let control_2 = self.model.handle_position(ControlHandle::ControlPoint2);
        let pixels =
            |point: Coord2| (x_scale.to_range(point.x()), y_scale.to_range(point.y()));

        let handles = SvgElement::new("g")
            .child(connector(pixels(start), pixels(control_1)))
            .child(connector(pixels(end), pixels(control_2)))
            .child(square_handle(pixels(start)))
            .child(square_handle(pixels(end)))
            .child(circle_handle(pixels(control_1)))
            .child(circle_handle(pixels(control_2)));

        let labels = SvgElement::new("g")
            .attr("font-size", 17)
            .attr("fill", LABEL_TEXT.to_css())
            .child(x_axis_labels(&x_scale, &x_ticks, chart_height))
            .child(y_axis_labels(&y_scale, &y_ticks, chart_width));

        let mut chart = SvgElement::new("g")
            .attr(
                "transform",
                format!(
                    "translate({}, {})",
                    self.layout.gutter - 0.5,
                    self.layout.gutter - 0.5
                ),
            )
            .child(background)
            .child(background_grid)
            .child(curve_group)
            .child(markers)
            .child(handles)
            .child(labels);

        if !self.has_been_edited {
            let (hint_x, hint_y) = pixels(control_2);
            chart = chart.child(
                SvgElement::new("text")
                    .attr("x", hint_x + 18.0)
                    .attr("y", hint_y - 12.0)
                    .attr("font-size", 15)
                    .attr("fill", TEXT.to_css())
                    .text("drag the points to reshape the curve"),
            );
        }

        svg_document(self.layout.width, self.layout.height, vec![defs, chart])
    }
}

/// Tick positions with the ends of the domain left off (the chart border marks those)
fn interior_ticks(scale: &LinearScale, domain: (f64, f64)) -> Vec<f64> {
    scale
        .ticks(5)
        .into_iter()
        .filter(|tick| (tick - domain.0).abs() > 1e-9 && (tick - domain.1).abs() > 1e-9)
        .collect()
}

fn grid_lines(
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    chart_width: f64,
    chart_height: f64,
) -> Vec<SvgElement> {
    let vertical = x_ticks.iter().map(|tick| {
        let x = x_scale.to_range(*tick);

        SvgElement::new("line")
            .attr("x1", x)
            .attr("y1", -GRID_OVERHANG)
            .attr("x2", x)
            .attr("y2", chart_height + GRID_OVERHANG)
    });
    let horizontal = y_ticks.iter().map(|tick| {
        let y = y_scale.to_range(*tick);

        SvgElement::new("line")
            .attr("x1", -GRID_OVERHANG)
            .attr("y1", y)
            .attr("x2", chart_width + GRID_OVERHANG)
            .attr("y2", y)
    });

    vertical.chain(horizontal).collect()
}

fn x_axis_labels(x_scale: &LinearScale, ticks: &[f64], chart_height: f64) -> SvgElement {
    SvgElement::new("g")
        .attr("transform", format!("translate(0, {})", chart_height))
        .children(ticks.iter().map(|tick| {
            SvgElement::new("text")
                .attr("class", "graph-label")
                .attr("text-anchor", "middle")
                .attr("transform", format!("translate({}, 36)", x_scale.to_range(*tick)))
                .text(percent_label(*tick))
        }))
}

fn y_axis_labels(y_scale: &LinearScale, ticks: &[f64], chart_width: f64) -> SvgElement {
    let label = |tick: &f64, anchor: &'static str, x_offset: f64| {
        SvgElement::new("text")
            .attr("class", "graph-label")
            .attr("text-anchor", anchor)
            .attr(
                "transform",
                format!("translate({}, {})", x_offset, y_scale.to_range(*tick) + 6.0),
            )
            .text(percent_label(*tick))
    };

    SvgElement::new("g")
        .children(ticks.iter().map(|tick| label(tick, "end", -26.0)))
        .children(
            ticks
                .iter()
                .map(|tick| label(tick, "start", chart_width + 26.0)),
        )
}

fn percent_label(value: f64) -> String {
    format!("{}%", percent(value))
}

fn gradient(id: &'static str, from: Color, to: Color) -> SvgElement {
    SvgElement::new("linearGradient")
        .attr("id", id)
        .attr("x1", 0)
        .attr("x2", 0)
        .attr("y1", 0)
        .attr("y2", 1)
        .child(
            SvgElement::new("stop")
                .attr("offset", "0%")
                .attr("stop-color", from.to_css()),
        )
        .child(
            SvgElement::new("stop")
                .attr("offset", "100%")
                .attr("stop-color", to.to_css()),
        )
}

fn diamond(x: f64, y: f64) -> SvgElement {
    SvgElement::new("rect")
        .attr("width", 11)
        .attr("height", 11)
        .attr("x", x - 5.5)
        .attr("y", y - 5.5)
        .attr("transform", format!("rotate(45, {}, {})", x, y))
        .attr("fill", CURVE.to_css())
}

fn connector(from: (f64, f64), to: (f64, f64)) -> SvgElement {
    SvgElement::new("line")
        .attr("x1", from.0)
        .attr("y1", from.1)
        .attr("x2", to.0)
        .attr("y2", to.1)
        .attr("stroke", DRAGGABLE_POINT_LINE.to_css())
}

fn square_handle((x, y): (f64, f64)) -> SvgElement {
    SvgElement::new("rect")
        .attr("width", 21)
        .attr("height", 21)
        .attr("x", x - 10.5)
        .attr("y", y - 10.5)
        .attr("transform", format!("rotate(45, {}, {})", x, y))
        .attr("fill", DRAGGABLE_POINT.to_css())
        .attr("stroke", "none")
        .attr("cursor", "pointer")
}

fn circle_handle((x, y): (f64, f64)) -> SvgElement {
    SvgElement::new("circle")
        .attr("r", 10)
        .attr("cx", x)
        .attr("cy", y)
        .attr("fill", DRAGGABLE_POINT.to_css())
        .attr("stroke", "none")
        .attr("cursor", "pointer")
}
