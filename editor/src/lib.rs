/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # An interactive cubic bezier curve editor
//!
//! ```
//! use bez_editor::*;
//!
//! let mut editor = CurveEditor::with_defaults();
//!
//! // drag the first control point up and to the right
//! editor.handle_pointer_event(PointerEvent::new(PointerAction::ButtonDown, 400.0, 325.0));
//! editor.handle_pointer_event(PointerEvent::new(PointerAction::Drag, 420.0, 305.0));
//! editor.handle_pointer_event(PointerEvent::new(PointerAction::ButtonUp, 420.0, 305.0));
//!
//! let scene = editor.scene();
//! let table = editor.table();
//! ```
//!
//! The editor owns a `CurveModel` - four control points, with the start and end pinned to
//! the ends of the X domain so only their heights move - and recomputes two sample
//! sequences from it after every edit: points at even parametric steps for drawing the
//! curve, and points at even X steps for the markers and the side table ("what is Y at
//! this X?", answered by searching the curve). The flow is one-directional: the model is
//! the only mutable state, the derived data is recomputed from scratch rather than edited,
//! and the scene is rendered from the derived data.
//!
//! Pointer gestures arrive as `PointerEvent`s, either directly through
//! `CurveEditor::handle_pointer_event` or via a `PointerEvents` source, which hands out
//! subscriptions that disconnect when dropped.
//!

mod curve_model;
mod derived;
mod editor;
mod pointer;
mod scene;
mod table;

pub use self::curve_model::*;
pub use self::derived::*;
pub use self::editor::*;
pub use self::pointer::*;
pub use self::table::*;
