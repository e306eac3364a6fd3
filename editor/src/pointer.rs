/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cell::RefCell;
use std::rc::{Rc, Weak};

///
/// The action associated with a pointer event
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PointerAction {
    /// A button has been pressed
    ButtonDown,

    /// The pointer moved with the button held down
    Drag,

    /// The button has been released
    ButtonUp,

    /// The gesture was abandoned (eg, due to palm rejection): the press is over but
    /// whatever a release would normally trigger should not run
    Cancel,
}

///
/// A pointer event, located in window space
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PointerEvent {
    pub action: PointerAction,

    /// The x and y coordinates of the pointer's location in the window
    pub location: (f64, f64),
}

impl PointerEvent {
    pub fn new(action: PointerAction, x: f64, y: f64) -> PointerEvent {
        PointerEvent {
            action,
            location: (x, y),
        }
    }
}

///
/// Which movement axes a drag responds to
///
/// The start and end handles of the curve only move vertically, so their drags mask out
/// the X component of the pointer's movement.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AxisMask {
    pub x: bool,
    pub y: bool,
}

impl AxisMask {
    pub fn both() -> AxisMask {
        AxisMask { x: true, y: true }
    }

    pub fn y_only() -> AxisMask {
        AxisMask { x: false, y: true }
    }
}

///
/// Tracks a press-drag-release gesture, turning pointer locations into relative deltas
///
/// Deltas are measured from the previous pointer location rather than the press location,
/// so a consumer can apply each one incrementally as it arrives.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DragTracker {
    axis: AxisMask,
    last_location: (f64, f64),
    is_pressed: bool,
}

impl DragTracker {
    ///
    /// Creates a tracker that responds to movement along the given axes
    ///
    pub fn new(axis: AxisMask) -> DragTracker {
        DragTracker {
            axis,
            last_location: (0.0, 0.0),
            is_pressed: false,
        }
    }

    ///
    /// Starts tracking from the pressed location
    ///
    pub fn press(&mut self, location: (f64, f64)) {
        self.last_location = location;
        self.is_pressed = true;
    }

    ///
    /// Moves the pointer, returning the axis-masked delta from the previous location
    ///
    /// Returns nothing while the pointer is not pressed: moves without a press are not
    /// part of a drag.
    ///
    pub fn drag_to(&mut self, location: (f64, f64)) -> Option<(f64, f64)> {
        if !self.is_pressed {
            return None;
        }

        let delta = (
            location.0 - self.last_location.0,
            location.1 - self.last_location.1,
        );
        self.last_location = location;

        Some((
            if self.axis.x { delta.0 } else { 0.0 },
            if self.axis.y { delta.1 } else { 0.0 },
        ))
    }

    ///
    /// Ends the gesture (release and cancel look the same to the tracker)
    ///
    pub fn release(&mut self) {
        self.is_pressed = false;
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }
}

type SubscriberList = RefCell<Vec<(usize, Box<dyn FnMut(PointerEvent)>)>>;

///
/// Distributes pointer events to subscribed consumers
///
/// Subscriptions follow a scoped-resource pattern: `subscribe` hands back a guard, events
/// are delivered only while the guard is alive, and dropping it disconnects the consumer
/// on every exit path. This mirrors how an input region acquires its event listeners when
/// it becomes active and must give them back when it deactivates.
///
pub struct PointerEvents {
    subscribers: Rc<SubscriberList>,
    next_id: usize,
}

impl PointerEvents {
    pub fn new() -> PointerEvents {
        PointerEvents {
            subscribers: Rc::new(RefCell::new(vec![])),
            next_id: 0,
        }
    }

    ///
    /// Subscribes a consumer to this source for as long as the returned guard is alive
    ///
    pub fn subscribe(&mut self, on_event: impl FnMut(PointerEvent) + 'static) -> PointerSubscription {
        let id = self.next_id;
        self.next_id += 1;

        self.subscribers.borrow_mut().push((id, Box::new(on_event)));

        PointerSubscription {
            subscribers: Rc::downgrade(&self.subscribers),
            id,
        }
    }

    ///
    /// Delivers an event to every live subscriber
    ///
    pub fn dispatch(&self, event: PointerEvent) {
        for (_, subscriber) in self.subscribers.borrow_mut().iter_mut() {
            subscriber(event);
        }
    }
}

impl Default for PointerEvents {
    fn default() -> PointerEvents {
        PointerEvents::new()
    }
}

///
/// Keeps a pointer-event subscription alive
///
/// Dropping the guard removes the consumer from the source. The guard holds no strong
/// reference to the source, so it is also safe to outlive it.
///
pub struct PointerSubscription {
    subscribers: Weak<SubscriberList>,
    id: usize,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}
