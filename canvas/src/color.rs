/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::{Deserialize, Serialize};

///
/// Representation of a color
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    /// Red, green, blue and alpha components, each from 0 to 1
    Rgba(f32, f32, f32, f32),
}

impl Color {
    ///
    /// Returns the red, green, blue and alpha components of this color
    ///
    pub fn to_rgba_components(&self) -> (f32, f32, f32, f32) {
        match self {
            Color::Rgba(r, g, b, a) => (*r, *g, *b, *a),
        }
    }

    ///
    /// Returns this color with a different alpha component
    ///
    pub fn with_alpha(&self, alpha: f32) -> Color {
        let (r, g, b, _) = self.to_rgba_components();

        Color::Rgba(r, g, b, alpha)
    }

    ///
    /// Formats this color as a CSS color string for use in SVG attributes
    ///
    pub fn to_css(&self) -> String {
        let (r, g, b, a) = self.to_rgba_components();
        let byte = |component: f32| (component.max(0.0).min(1.0) * 255.0).round() as u8;

        if a >= 1.0 {
            format!("rgb({}, {}, {})", byte(r), byte(g), byte(b))
        } else {
            format!("rgba({}, {}, {}, {})", byte(r), byte(g), byte(b), a)
        }
    }
}
