/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bez_curves::bezier::*;
use bez_editor::*;

// Window-space locations of the default model's handles under the default layout (the
// chart area is 500x300 pixels inside a 100 pixel gutter)
const CONTROL_1_WINDOW: (f64, f64) = (400.0, 325.0);
const START_WINDOW: (f64, f64) = (100.0, 325.0);

fn press(editor: &mut CurveEditor, location: (f64, f64)) {
    editor.handle_pointer_event(PointerEvent::new(
        PointerAction::ButtonDown,
        location.0,
        location.1,
    ));
}

fn drag(editor: &mut CurveEditor, location: (f64, f64)) -> bool {
    editor.handle_pointer_event(PointerEvent::new(PointerAction::Drag, location.0, location.1))
}

fn release(editor: &mut CurveEditor) {
    editor.handle_pointer_event(PointerEvent::new(PointerAction::ButtonUp, 0.0, 0.0));
}

#[test]
fn pressing_a_handle_begins_a_drag() {
    let mut editor = CurveEditor::with_defaults();

    press(&mut editor, CONTROL_1_WINDOW);

    assert!(editor.is_dragging());
}

#[test]
fn pressing_empty_space_does_nothing() {
    let mut editor = CurveEditor::with_defaults();

    press(&mut editor, (150.0, 150.0));

    assert!(!editor.is_dragging());
    assert!(!drag(&mut editor, (160.0, 160.0)));
    assert!(*editor.model() == CurveModel::default());
}

#[test]
fn a_press_within_the_pick_radius_still_finds_the_handle() {
    let mut editor = CurveEditor::with_defaults();

    press(&mut editor, (CONTROL_1_WINDOW.0 + 6.0, CONTROL_1_WINDOW.1 - 6.0));

    assert!(editor.is_dragging());
}

#[test]
fn dragging_a_control_point_moves_it_in_curve_space() {
    let mut editor = CurveEditor::with_defaults();

    press(&mut editor, CONTROL_1_WINDOW);
    let moved = drag(&mut editor, (410.0, 315.0));
    release(&mut editor);

    assert!(moved);

    // 10 pixels right is 0.02 of the x domain; 10 pixels up is 1/30 of the y domain
    let control_1 = editor.model().control_point_1;
    assert!((control_1.x() - 0.62).abs() < 1e-9);
    assert!((control_1.y() - (0.25 + 1.0 / 30.0)).abs() < 1e-9);
}

#[test]
fn drag_deltas_accumulate_across_moves() {
    let mut editor = CurveEditor::with_defaults();

    press(&mut editor, CONTROL_1_WINDOW);
    drag(&mut editor, (410.0, 325.0));
    drag(&mut editor, (420.0, 325.0));
    release(&mut editor);

    assert!((editor.model().control_point_1.x() - 0.64).abs() < 1e-9);
}

#[test]
fn the_start_handle_only_moves_vertically() {
    let mut editor = CurveEditor::with_defaults();

    press(&mut editor, START_WINDOW);
    drag(&mut editor, (START_WINDOW.0 + 20.0, START_WINDOW.1 - 15.0));
    release(&mut editor);

    // 15 pixels up is 0.05 of the y domain; the sideways movement is masked out
    assert!((editor.model().start_y - 0.3).abs() < 1e-9);
    assert!(editor.model().curve().start_point == Coord2(0.0, editor.model().start_y));
}

#[test]
fn releasing_ends_the_drag_session() {
    let mut editor = CurveEditor::with_defaults();

    press(&mut editor, CONTROL_1_WINDOW);
    release(&mut editor);

    assert!(!editor.is_dragging());
    assert!(!drag(&mut editor, (450.0, 275.0)));
}

#[test]
fn cancelling_ends_the_session_but_keeps_applied_edits() {
    let mut editor = CurveEditor::with_defaults();

    press(&mut editor, CONTROL_1_WINDOW);
    drag(&mut editor, (410.0, 325.0));
    editor.handle_pointer_event(PointerEvent::new(PointerAction::Cancel, 410.0, 325.0));

    assert!(!editor.is_dragging());
    assert!((editor.model().control_point_1.x() - 0.62).abs() < 1e-9);

    // the gesture is over, so further moves change nothing
    assert!(!drag(&mut editor, (500.0, 200.0)));
    assert!((editor.model().control_point_1.x() - 0.62).abs() < 1e-9);
}

#[test]
fn every_edit_recomputes_the_derived_data() {
    let mut editor = CurveEditor::with_defaults();
    let before = editor.derived().clone();

    press(&mut editor, CONTROL_1_WINDOW);
    drag(&mut editor, (420.0, 305.0));

    let after = editor.derived();
    assert!(*after != before);
    assert!(*after == DerivedCurveData::compute(editor.model(), 5, 10));
    assert!(after.by_t.len() == 6);
    assert!(after.by_x.len() == 11);
}

#[test]
fn the_editor_tracks_whether_it_has_been_edited() {
    let mut editor = CurveEditor::with_defaults();

    assert!(!editor.has_been_edited());

    press(&mut editor, CONTROL_1_WINDOW);
    drag(&mut editor, (401.0, 325.0));

    assert!(editor.has_been_edited());
}

#[test]
fn programmatic_moves_use_curve_space_directly() {
    let mut editor = CurveEditor::with_defaults();

    editor.move_handle(ControlHandle::End, 0.5, -0.1);

    // the end handle is pinned in x, so only the y delta lands
    assert!((editor.model().end_y - 0.7).abs() < 1e-9);
    assert!(editor.model().curve().end_point == Coord2(1.0, editor.model().end_y));
}
