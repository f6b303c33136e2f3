use crate::background::BackgroundState;
use crate::dom::{self, EventListener};
use crate::input;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse-move and touch-move on the window drive the field's pointer state.
/// The pointer never deactivates once set.
pub fn wire_pointer_listeners(
    window: &web::Window,
    state: Rc<RefCell<BackgroundState>>,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(2);

    let mouse_state = state.clone();
    match EventListener::new(window, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            move_pointer(&mouse_state, ev.client_x(), ev.client_y());
        }
    }) {
        Ok(l) => listeners.push(l),
        Err(e) => log::warn!("[pointer] mousemove listener: {:?}", e),
    }

    let touch_state = state;
    match EventListener::new(window, "touchmove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some(touch) = ev.touches().get(0) {
            move_pointer(&touch_state, touch.client_x(), touch.client_y());
        }
    }) {
        Ok(l) => listeners.push(l),
        Err(e) => log::warn!("[pointer] touchmove listener: {:?}", e),
    }

    listeners
}

fn move_pointer(state: &Rc<RefCell<BackgroundState>>, client_x: i32, client_y: i32) {
    let mut s = state.borrow_mut();
    let rect = dom::client_rect(&s.canvas);
    let surface = Vec2::new(s.canvas.width() as f32, s.canvas.height() as f32);
    let client = Vec2::new(client_x as f32, client_y as f32);
    let pos = input::client_to_surface(client, rect, surface);
    s.field.pointer.move_to(pos.x, pos.y);
}
