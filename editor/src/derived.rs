/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bez_curves::bezier::*;

use crate::curve_model::*;

///
/// The display data derived from the curve model
///
/// This is always a pure function of the model: it is recomputed in full after every
/// mutation and never edited in place, so the picture can only ever disagree with the
/// model between an edit and the recompute that immediately follows it. At the editor's
/// sample counts a recompute is a few dozen curve evaluations, so there is nothing to be
/// gained from updating it incrementally.
///
#[derive(Clone, PartialEq, Debug)]
pub struct DerivedCurveData {
    /// Points at evenly spaced parametric positions; the drawn path passes through these
    pub by_t: Vec<Coord2>,

    /// Points at evenly spaced X positions; the markers and the side table come from these
    pub by_x: Vec<Coord2>,
}

impl DerivedCurveData {
    ///
    /// Computes the display data for a curve model
    ///
    /// `point_count` and `sample_count` are the two sampling resolutions: the sequences
    /// have one more point than their count, since both include the ends.
    ///
    pub fn compute(
        model: &CurveModel,
        point_count: usize,
        sample_count: usize,
    ) -> DerivedCurveData {
        let curve = model.curve();

        DerivedCurveData {
            by_t: sample_curve_by_t(&curve, point_count),
            by_x: sample_curve_by_x(&curve, sample_count),
        }
    }
}
