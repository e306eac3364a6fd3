/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bez_curves::bezier::*;
use bez_curves::X_TOLERANCE;

use itertools::Itertools;
use rand::prelude::*;

fn editor_default_curve() -> Curve<Coord2> {
    Curve::from_points(
        Coord2(0.0, 0.25),
        (Coord2(0.6, 0.25), Coord2(0.38, 0.75)),
        Coord2(1.0, 0.8),
    )
}

#[test]
fn x_is_monotonic_for_ordered_control_points() {
    let curve = editor_default_curve();

    assert!(curve_is_monotonic_in_x(&curve));

    let x_positions = (0..=100).map(|step| curve.point_at_pos(step as f64 / 100.0).x());
    assert!(x_positions
        .tuple_windows()
        .all(|(previous, next)| next >= previous));
}

#[test]
fn x_is_not_monotonic_for_a_folded_curve() {
    // control points overshooting the ends in X fold the curve back on itself
    let folded = Curve::from_points(
        Coord2(0.0, 0.0),
        (Coord2(1.8, 0.0), Coord2(-0.8, 1.0)),
        Coord2(1.0, 1.0),
    );

    assert!(!curve_is_monotonic_in_x(&folded));
}

#[test]
fn x_is_not_monotonic_when_the_curve_runs_backwards() {
    let backwards = Curve::from_points(
        Coord2(1.0, 0.0),
        (Coord2(0.7, 0.3), Coord2(0.3, 0.6)),
        Coord2(0.0, 1.0),
    );

    assert!(!curve_is_monotonic_in_x(&backwards));
}

#[test]
fn finds_the_halfway_point_of_the_editor_curve() {
    let curve = editor_default_curve();
    let point = point_at_x(&curve, 0.5);

    assert!((point.x() - 0.5).abs() <= X_TOLERANCE);

    // the S-shape is still climbing from the start y towards the end y here
    assert!(point.y() > 0.25 && point.y() < 0.8);
}

#[test]
fn converges_everywhere_strictly_inside_the_x_range() {
    let curve = editor_default_curve();

    for step in 1..100 {
        let x_target = step as f64 / 100.0;
        let result = solve_curve_t_for_x(&curve, x_target, X_TOLERANCE);

        assert!(result.converged(), "did not converge at x={}", x_target);
        assert!((curve.point_at_pos(result.t()).x() - x_target).abs() <= X_TOLERANCE);
    }
}

#[test]
fn converges_for_random_monotonic_curves() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let mut control_xs = [rng.gen::<f64>(), rng.gen::<f64>()];
        control_xs.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let curve = Curve::from_points(
            Coord2(0.0, rng.gen()),
            (
                Coord2(control_xs[0], rng.gen()),
                Coord2(control_xs[1], rng.gen()),
            ),
            Coord2(1.0, rng.gen()),
        );
        let x_target = rng.gen::<f64>() * 0.98 + 0.01;

        assert!(curve_is_monotonic_in_x(&curve));

        let result = solve_curve_t_for_x(&curve, x_target, X_TOLERANCE);
        assert!(result.converged());
        assert!((curve.point_at_pos(result.t()).x() - x_target).abs() <= X_TOLERANCE);
    }
}

#[test]
fn target_outside_the_x_range_does_not_converge() {
    let curve = editor_default_curve();
    let result = solve_curve_t_for_x(&curve, 2.0, X_TOLERANCE);

    assert!(!result.converged());

    // the search walked t to the near boundary and reports that as its best estimate
    assert!(result.t() > 0.99 && result.t() <= 1.0);
}

#[test]
fn best_estimate_is_still_a_point_on_the_curve() {
    let curve = editor_default_curve();
    let point = point_at_x(&curve, 2.0);

    assert!(point.distance_to(&curve.point_at_pos(1.0)) < 0.01);
}

#[test]
fn search_is_pure() {
    let curve = editor_default_curve();

    assert!(solve_curve_t_for_x(&curve, 0.73, X_TOLERANCE) == solve_curve_t_for_x(&curve, 0.73, X_TOLERANCE));
    assert!(point_at_x(&curve, 0.73) == point_at_x(&curve, 0.73));
}
