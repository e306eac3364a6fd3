/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bez_curves::bezier::*;

fn editor_default_curve() -> Curve<Coord2> {
    Curve::from_points(
        Coord2(0.0, 0.25),
        (Coord2(0.6, 0.25), Coord2(0.38, 0.75)),
        Coord2(1.0, 0.8),
    )
}

#[test]
fn curve_starts_at_start_point() {
    let curve = editor_default_curve();

    // the bernstein weights collapse to 1/0/0/0 at t=0, so this is exact
    assert!(curve.point_at_pos(0.0) == Coord2(0.0, 0.25));
}

#[test]
fn curve_ends_at_end_point() {
    let curve = editor_default_curve();

    assert!(curve.point_at_pos(1.0) == Coord2(1.0, 0.8));
}

#[test]
fn weight_pairing_matches_literal_values() {
    // x(0.25) computed by hand with the t³ weight on the end point: swapping the control
    // points would give 0.2603125 instead, so this pins the pairing
    let curve = editor_default_curve();
    let point = curve.point_at_pos(0.25);

    assert!((point.x() - 0.3221875).abs() < 1e-12, "x was {}", point.x());
    assert!((point.y() - 0.32890625).abs() < 1e-12, "y was {}", point.y());
}

#[test]
fn basis_blends_in_point_order() {
    let blended = basis(0.25, 0.0, 0.6, 0.38, 1.0);

    assert!((blended - 0.3221875).abs() < 1e-12);
}

#[test]
fn positions_outside_parametric_range_extrapolate() {
    let curve = editor_default_curve();
    let point = curve.point_at_pos(1.5);

    // no error and a well-defined polynomial value
    assert!(point.x().is_finite() && point.y().is_finite());
    assert!(point.x() > 1.0);
}

#[test]
fn evaluation_is_pure() {
    let curve = editor_default_curve();

    assert!(curve.point_at_pos(0.37) == curve.point_at_pos(0.37));
}
