/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bez_curves::bezier::*;
use bez_curves::X_TOLERANCE;

use itertools::Itertools;

fn editor_default_curve() -> Curve<Coord2> {
    Curve::from_points(
        Coord2(0.0, 0.25),
        (Coord2(0.6, 0.25), Coord2(0.38, 0.75)),
        Coord2(1.0, 0.8),
    )
}

#[test]
fn sampling_by_t_includes_both_endpoints() {
    let curve = editor_default_curve();
    let samples = sample_curve_by_t(&curve, 4);

    assert!(samples.len() == 5);
    assert!(samples[0] == curve.point_at_pos(0.0));
    assert!(samples[4] == curve.point_at_pos(1.0));
}

#[test]
fn sampling_by_t_steps_evenly() {
    let curve = editor_default_curve();
    let samples = sample_curve_by_t(&curve, 5);

    for (index, sample) in samples.iter().enumerate() {
        assert!(*sample == curve.point_at_pos(index as f64 / 5.0));
    }
}

#[test]
fn sampling_by_x_spans_the_curve_with_increasing_x() {
    let curve = editor_default_curve();
    let samples = sample_curve_by_x(&curve, 10);

    assert!(samples.len() == 11);
    assert!((samples[0].x() - 0.0).abs() <= X_TOLERANCE);
    assert!((samples[10].x() - 1.0).abs() <= X_TOLERANCE);

    assert!(samples
        .iter()
        .map(|point| point.x())
        .tuple_windows()
        .all(|(previous, next)| next > previous));
}

#[test]
fn sampling_by_x_lands_on_the_requested_positions() {
    let curve = editor_default_curve();
    let samples = sample_curve_by_x(&curve, 10);

    for (index, sample) in samples.iter().enumerate() {
        assert!((sample.x() - index as f64 / 10.0).abs() <= X_TOLERANCE);
    }
}

#[test]
fn sampling_by_x_follows_the_curve_domain() {
    // the x targets are scaled to the curve's own x range rather than assuming [0, 1]
    let curve = Curve::from_points(
        Coord2(2.0, 10.0),
        (Coord2(3.2, 12.0), Coord2(4.5, 25.0)),
        Coord2(6.0, 30.0),
    );
    let samples = sample_curve_by_x(&curve, 4);

    assert!(samples.len() == 5);
    for (index, sample) in samples.iter().enumerate() {
        let expected_x = 2.0 + index as f64;
        assert!(
            (sample.x() - expected_x).abs() <= X_TOLERANCE,
            "sample {} had x {}",
            index,
            sample.x()
        );
    }
}

#[test]
fn sampling_is_deterministic() {
    let curve = editor_default_curve();

    assert!(sample_curve_by_t(&curve, 5) == sample_curve_by_t(&curve, 5));
    assert!(sample_curve_by_x(&curve, 10) == sample_curve_by_x(&curve, 10));
}
