/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cell::RefCell;
use std::fs;
use std::io;
use std::rc::Rc;

use bez_editor::*;

///
/// Builds the default editor, replays a short drag on the first control point through a
/// pointer-event subscription, then prints the side table and writes the scene to
/// resolve_y.svg
///
pub fn main() -> io::Result<()> {
    let editor = Rc::new(RefCell::new(CurveEditor::with_defaults()));
    let mut events = PointerEvents::new();

    let subscription = {
        let editor = Rc::clone(&editor);
        events.subscribe(move |event| {
            editor.borrow_mut().handle_pointer_event(event);
        })
    };

    // the first control point sits at (0.6, 0.25) in curve space, which the default
    // layout puts at (400, 325) in the window
    events.dispatch(PointerEvent::new(PointerAction::ButtonDown, 400.0, 325.0));
    events.dispatch(PointerEvent::new(PointerAction::Drag, 430.0, 295.0));
    events.dispatch(PointerEvent::new(PointerAction::ButtonUp, 430.0, 295.0));

    drop(subscription);

    let editor = editor.borrow();

    println!("   X      Y");
    for row in editor.table() {
        println!("{:>4}%  {:>4}%", row.x_percent, row.y_percent);
    }

    fs::write("resolve_y.svg", editor.scene())?;
    println!("\nwrote resolve_y.svg");

    Ok(())
}
