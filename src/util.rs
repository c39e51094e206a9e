// DOM helpers shared by the components.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, MouseEvent, TouchList};

use crate::error::EditorError;
use crate::state::Point;

/// An event listener that removes itself when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Listen for `kind` on `target`, passing events that cast to `E`.
    /// Non-passive so handlers may call `prevent_default` on touch and wheel input.
    pub fn new<E, F>(target: &EventTarget, kind: &'static str, mut handler: F) -> Result<Self, EditorError>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |e: Event| {
            if let Ok(e) = e.dyn_into::<E>() {
                handler(e);
            }
        }) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Whether the event started on a button or input, which handle their own clicks.
pub fn from_control(e: &Event) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("button, input").ok().flatten())
        .is_some()
}

/// Main (usually left) button only; right and middle presses never start a drag.
pub fn is_primary_press(e: &MouseEvent) -> bool {
    e.button() == 0
}

/// Client coordinates of every touch in `list`.
pub fn touch_points(list: &TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

/// Convert a client-space point into `element`'s local coordinates.
pub fn to_local(element: &Element, client: Point) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(client.x - rect.left(), client.y - rect.top())
}
