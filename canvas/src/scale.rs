/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Maps positions linearly between a domain (curve space) and a range (pixel space)
///
/// The range may run backwards relative to the domain: the chart's Y scale maps the top of
/// the domain to the top of the picture by giving the range as `(height, 0)`, and the
/// inversion routines carry the sign through so that drag deltas flip with it.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    ///
    /// Creates a scale mapping the given domain onto the given range
    ///
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> LinearScale {
        debug_assert!(domain.0 != domain.1);
        debug_assert!(range.0 != range.1);

        LinearScale { domain, range }
    }

    ///
    /// Maps a domain position into the range
    ///
    #[inline]
    pub fn to_range(&self, value: f64) -> f64 {
        let fraction = (value - self.domain.0) / (self.domain.1 - self.domain.0);

        self.range.0 + fraction * (self.range.1 - self.range.0)
    }

    ///
    /// Maps a range position back into the domain
    ///
    #[inline]
    pub fn invert(&self, value: f64) -> f64 {
        let fraction = (value - self.range.0) / (self.range.1 - self.range.0);

        self.domain.0 + fraction * (self.domain.1 - self.domain.0)
    }

    ///
    /// Maps a relative distance in the range back into a relative distance in the domain
    ///
    /// Distances are direction-sensitive: when the range runs backwards a positive range
    /// delta comes back as a negative domain delta. Drag handling uses this to convert
    /// pixel movements into curve-space movements.
    ///
    #[inline]
    pub fn invert_delta(&self, delta: f64) -> f64 {
        delta * (self.domain.1 - self.domain.0) / (self.range.1 - self.range.0)
    }

    ///
    /// Returns around `count` round-valued tick positions covering the domain
    ///
    /// The step is chosen from the 1/2/5 ladder, so the ticks land on the values a person
    /// would write on an axis. The endpoints of the domain are included when they land on
    /// the step.
    ///
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        debug_assert!(count > 0);

        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            (self.domain.0, self.domain.1)
        } else {
            (self.domain.1, self.domain.0)
        };

        let raw_step = (hi - lo) / count as f64;
        if raw_step <= 0.0 || !raw_step.is_finite() {
            return vec![];
        }

        let magnitude = 10.0_f64.powf(raw_step.log10().floor());
        let residual = raw_step / magnitude;
        let step = magnitude
            * if residual >= 50.0_f64.sqrt() {
                10.0
            } else if residual >= 10.0_f64.sqrt() {
                5.0
            } else if residual >= 2.0_f64.sqrt() {
                2.0
            } else {
                1.0
            };

        let first = (lo / step).ceil() as i64;
        let last = ((hi / step) + 1e-9).floor() as i64;

        (first..=last).map(|index| index as f64 * step).collect()
    }
}
