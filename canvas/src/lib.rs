/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Drawing vocabulary for the bez editor
//!
//! This crate supplies the pieces the editor needs to turn curve data into a picture
//! without knowing anything about curves itself: path operations and their SVG path-data
//! serialization, linear scales that map between curve space and pixel space (with
//! d3-style tick generation for axis grids), colors with CSS serialization, and a small
//! SVG element writer that renders a scene to markup.
//!
//! Everything here is resolution-independent glue; the curve mathematics lives in
//! `bez_curves` and the two only meet in the editor.
//!

mod color;
mod path;
mod scale;
mod svg;

pub use self::color::*;
pub use self::path::*;
pub use self::scale::*;
pub use self::svg::*;
