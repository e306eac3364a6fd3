/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bez_curves::bezier;
use bez_curves::geo::*;

#[test]
fn take_first_derivative() {
    assert!(bezier::derivative4(0.0, 1.0, 3.0, 6.0) == (3.0, 6.0, 9.0));
}

#[test]
fn derivative_weights_of_a_2d_curve() {
    let derivative = bezier::derivative4(
        Coord2(0.0, 0.25),
        Coord2(0.6, 0.25),
        Coord2(0.38, 0.75),
        Coord2(1.0, 0.8),
    );

    assert!(derivative.0.distance_to(&Coord2(1.8, 0.0)) < 1e-12);
    assert!(derivative.1.distance_to(&Coord2(-0.66, 1.5)) < 1e-12);
    assert!(derivative.2.distance_to(&Coord2(1.86, 0.15)) < 1e-12);
}
