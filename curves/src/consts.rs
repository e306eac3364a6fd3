/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Maximum difference between a requested X position and the X position of the point that the
/// curve search settles on (points closer than this to the target are considered found)
pub const X_TOLERANCE: f64 = 0.001;

/// Upper bound on the number of bisection steps when searching a curve for an X position. A
/// unit-width curve reaches `X_TOLERANCE` in around 10 steps, so this bound is only ever hit
/// by curves whose X component is not monotonic.
pub const MAX_SOLVE_STEPS: usize = 64;
