//! Registration page: reads the form, posts it to the email relay and runs
//! the fixed-timer confirmation script on success.

use crate::config;
use crate::constants::*;
use crate::dom::{self, EventListener};
use crate::relay;
use crate::router;
use crate::toast;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use trazapp_core::{
    ConfirmationPhase, ConfirmationSequence, Field, RegistrationForm, Route, SubmissionState,
    SUBMIT_ERROR_MESSAGE,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn read_form(document: &web::Document) -> RegistrationForm {
    let mut form = RegistrationForm::default();
    for field in Field::ALL {
        form.set(field, dom::control_value(document, field.id()).trim());
    }
    form
}

fn set_busy(document: &web::Document, busy: bool) {
    if let Some(button) = document
        .get_element_by_id(REGISTER_SUBMIT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        button.set_disabled(busy);
    }
}

pub fn wire(document: &web::Document, plan_hint: Option<&str>) -> anyhow::Result<()> {
    let form_el = document
        .get_element_by_id(REGISTER_FORM_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", REGISTER_FORM_ID))?;

    let mut initial = read_form(document);
    if initial.preselect_plan(plan_hint) {
        dom::set_control_value(document, Field::Plan.id(), &initial.plan);
    }

    let state = Rc::new(RefCell::new(SubmissionState::default()));
    let doc = document.clone();
    EventListener::new(&form_el, "submit", move |ev| {
        ev.prevent_default();
        submit(&doc, &state);
    })?
    .forget();
    Ok(())
}

fn submit(document: &web::Document, state: &Rc<RefCell<SubmissionState>>) {
    let form = read_form(document);
    if let Err(e) = form.validate() {
        // the browser's `required` check normally catches this first
        log::warn!("[register] {}", e);
        return;
    }
    let relay_config = match config::relay_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("[register] {}", e);
            toast::show(document, SUBMIT_ERROR_MESSAGE);
            return;
        }
    };
    if let Err(e) = state.borrow_mut().begin() {
        log::debug!("[register] {}", e);
        return;
    }
    set_busy(document, true);
    toast::hide(document);

    let doc = document.clone();
    let state = state.clone();
    spawn_local(async move {
        match relay::send(&relay_config, &form).await {
            Ok(()) => {
                let seq = state.borrow_mut().succeed();
                run_confirmation(doc, seq);
            }
            Err(e) => {
                log::error!("[register] submission failed: {:?}", e);
                state.borrow_mut().fail();
                set_busy(&doc, false);
                toast::show(&doc, SUBMIT_ERROR_MESSAGE);
            }
        }
    });
}

fn apply_phase(document: &web::Document, phase: ConfirmationPhase) {
    log::info!("[register] confirmation phase {:?}", phase);
    match phase.message() {
        Some(message) => {
            dom::set_text_by_id(document, CONFIRMATION_MESSAGE_ID, message);
            if let Some(el) = document.get_element_by_id(CONFIRMATION_ID) {
                dom::set_class(&el, HIDDEN_CLASS, false);
            }
        }
        None => router::navigate(&Route::Landing),
    }
}

fn run_confirmation(document: web::Document, seq: ConfirmationSequence) {
    apply_phase(&document, seq.phase());
    schedule_next(document, seq, Instant::now());
}

/// Arm a one-shot timer for the next phase boundary; the callback applies
/// every phase reached by then and re-arms until the script finishes.
fn schedule_next(document: web::Document, mut seq: ConfirmationSequence, started: Instant) {
    let Some(deadline) = seq.next_deadline() else {
        return;
    };
    let delay = deadline.saturating_sub(started.elapsed());
    let callback: js_sys::Function = Closure::once_into_js(move || {
        for phase in seq.advance_to(started.elapsed()) {
            apply_phase(&document, phase);
        }
        schedule_next(document, seq, started);
    })
    .unchecked_into();
    if let Err(e) = dom::set_timeout(&callback, delay) {
        log::error!("[register] could not arm confirmation timer: {:?}", e);
    }
}
