//! Decorative particle background: owns the field, the canvas surface, the
//! requestAnimationFrame loop and the window listeners that feed it.

use crate::canvas::Canvas2dSurface;
use crate::dom::{self, EventListener};
use crate::events;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use trazapp_core::ParticleField;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct BackgroundState {
    pub field: ParticleField,
    pub canvas: web::HtmlCanvasElement,
    surface: Canvas2dSurface,
}

impl BackgroundState {
    /// Match the canvas to the viewport and regenerate every particle.
    pub fn reinitialize(&mut self) {
        let size = dom::viewport_size();
        self.canvas.set_width(size.x as u32);
        self.canvas.set_height(size.y as u32);
        self.surface.resize(size.x, size.y);
        let mut rng = rand::thread_rng();
        self.field.initialize(size.x, size.y, &mut rng);
    }

    fn frame(&mut self) {
        self.field.tick();
        self.field.render(&mut self.surface);
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running background. Dropping it cancels the pending frame and removes
/// every listener it registered.
pub struct ParticleBackground {
    state: Rc<RefCell<BackgroundState>>,
    frame: FrameCallback,
    raf_id: Rc<Cell<Option<i32>>>,
    listeners: Vec<EventListener>,
}

impl ParticleBackground {
    /// Start on `canvas`. Returns `None` without side effects when no 2D
    /// context is available.
    pub fn start(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let window = web::window()?;
        let surface = match Canvas2dSurface::from_canvas(canvas) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[background] disabled: {}", e);
                return None;
            }
        };
        let state = Rc::new(RefCell::new(BackgroundState {
            field: ParticleField::new(),
            canvas: canvas.clone(),
            surface,
        }));
        state.borrow_mut().reinitialize();

        let mut listeners = Vec::with_capacity(3);
        let resize_state = state.clone();
        match EventListener::new(&window, "resize", move |_| {
            resize_state.borrow_mut().reinitialize();
        }) {
            Ok(l) => listeners.push(l),
            Err(e) => log::warn!("[background] resize listener: {:?}", e),
        }
        listeners.extend(events::wire_pointer_listeners(&window, state.clone()));

        let mut background = Self {
            state,
            frame: Rc::new(RefCell::new(None)),
            raf_id: Rc::new(Cell::new(None)),
            listeners,
        };
        background.start_loop(&window);
        log::info!(
            "[background] running with {} particles",
            background.state.borrow().field.particles().len()
        );
        Some(background)
    }

    fn start_loop(&mut self, window: &web::Window) {
        let frame_tick = self.frame.clone();
        let raf_tick = self.raf_id.clone();
        let state_tick = self.state.clone();
        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            state_tick.borrow_mut().frame();
            let next = match (web::window(), frame_tick.borrow().as_ref()) {
                (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
                _ => None,
            };
            raf_tick.set(next);
        }) as Box<dyn FnMut()>));
        let first = self
            .frame
            .borrow()
            .as_ref()
            .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        self.raf_id.set(first);
    }

    pub fn is_running(&self) -> bool {
        self.frame.borrow().is_some()
    }

    /// Cancel the frame loop and unregister listeners together.
    pub fn stop(&mut self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        // dropping the closure breaks its self-reference
        self.frame.borrow_mut().take();
        self.listeners.clear();
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
    }
}
