#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use trazapp_core::Route;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod background;
mod canvas;
mod config;
mod constants;
mod dom;
mod events;
mod input;
mod pricing;
mod register;
mod relay;
mod router;
mod tilt;
mod timeline;
mod toast;

use background::ParticleBackground;
use constants::PARTICLE_CANVAS_ID;

thread_local! {
    // Background of the current page; dropped on pagehide, rebuilt on pageshow.
    static BACKGROUND: RefCell<Option<ParticleBackground>> = const { RefCell::new(None) };
}

fn mount_background(document: &web::Document) {
    let Some(canvas) = document
        .get_element_by_id(PARTICLE_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::warn!("[background] missing #{}", PARTICLE_CANVAS_ID);
        return;
    };
    let background = ParticleBackground::start(&canvas);
    BACKGROUND.with(|slot| *slot.borrow_mut() = background);
}

fn unmount_background() {
    // take first so the handle drops outside the borrow
    let previous = BACKGROUND.with(|slot| slot.borrow_mut().take());
    if previous.is_some() {
        log::info!("[background] stopped");
    }
    drop(previous);
}

/// Tear the frame loop down when the page is hidden and re-arm it when the
/// page is restored from the back/forward cache.
fn wire_page_lifecycle(window: &web::Window) -> anyhow::Result<()> {
    dom::EventListener::new(window, "pagehide", |_| unmount_background())?.forget();
    dom::EventListener::new(window, "pageshow", |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        let running = BACKGROUND.with(|slot| {
            slot.borrow()
                .as_ref()
                .is_some_and(ParticleBackground::is_running)
        });
        if persisted && !running {
            if let Some(doc) = dom::window_document() {
                mount_background(&doc);
            }
        }
    })?
    .forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trazapp-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    mount_background(&document);
    wire_page_lifecycle(&window)?;
    toast::wire_dismiss(&document);

    let route = router::current_route();
    log::info!("route: {:?}", route);
    match route {
        Route::Landing => {
            let timeline = timeline::wire(&document);
            pricing::wire(&document);
            events::wire_scroll(&document, timeline)?;
        }
        Route::Register { plan } => register::wire(&document, plan.as_deref())?,
        Route::Login => {}
    }
    Ok(())
}
