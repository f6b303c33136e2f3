use crate::constants::*;
use crate::dom::{self, EventListener};
use crate::input;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use trazapp_core::{card_uv, TiltCard};
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply(el: &web::HtmlElement, card: &TiltCard) {
    let pose = card.pose();
    dom::set_style(el, TILT_X_VAR, &input::degrees(pose.rotate_x));
    dom::set_style(el, TILT_Y_VAR, &input::degrees(pose.rotate_y));
    dom::set_style(el, TILT_SCALE_VAR, &format!("{:.3}", pose.scale));
    dom::set_style(el, GLARE_X_VAR, &input::percent(pose.glare.x));
    dom::set_style(el, GLARE_Y_VAR, &input::percent(pose.glare.y));
    dom::set_style(el, GLARE_OPACITY_VAR, &format!("{:.2}", pose.glare_opacity));
}

/// Tilt `el` toward the pointer by up to `amount` degrees while hovered.
/// Listeners stay registered for the lifetime of the page.
pub fn attach(el: &web::HtmlElement, amount: f32) {
    let card = Rc::new(Cell::new(TiltCard::new(amount)));
    apply(el, &card.get());

    let (el_move, card_move) = (el.clone(), card.clone());
    let moved = EventListener::new(el, "mousemove", move |ev| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = dom::client_rect(&el_move);
        let client = Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32);
        let mut state = card_move.get();
        state.pointer_move(card_uv(client, rect));
        card_move.set(state);
        apply(&el_move, &state);
    });

    let (el_leave, card_leave) = (el.clone(), card);
    let left = EventListener::new(el, "mouseleave", move |_| {
        let mut state = card_leave.get();
        state.leave();
        card_leave.set(state);
        apply(&el_leave, &state);
    });

    for listener in [moved, left] {
        match listener {
            Ok(l) => l.forget(),
            Err(e) => log::warn!("[tilt] listener: {:?}", e),
        }
    }
}
