use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Run `callback` once after `delay`; returns the timer handle.
pub fn set_timeout(callback: &js_sys::Function, delay: Duration) -> anyhow::Result<i32> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback,
            crate::input::timer_delay_ms(delay),
        )
        .map_err(js_err)
}

/// An event listener that is unregistered when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Keep the listener registered for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_in(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    let _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
pub fn set_text_by_id(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Bounding client rect as `[left, top, width, height]`.
pub fn client_rect(el: &web::Element) -> [f32; 4] {
    let r = el.get_bounding_client_rect();
    [
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    ]
}

#[inline]
pub fn set_text_in(root: &web::Element, selector: &str, text: &str) {
    if let Some(el) = query_in(root, selector) {
        el.set_text_content(Some(text));
    }
}

/// Replace the children of `list` with one `<li>` per `(text, class)`.
pub fn fill_list<'a>(
    document: &web::Document,
    list: &web::Element,
    items: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
) {
    list.set_text_content(None);
    for (text, class) in items {
        let Ok(li) = document.create_element("li") else {
            continue;
        };
        li.set_text_content(Some(text));
        if let Some(class) = class {
            set_class(&li, class, true);
        }
        let _ = list.append_child(&li);
    }
}

/// Current value of an `<input>` or `<select>` by id; empty when absent.
pub fn control_value(document: &web::Document, element_id: &str) -> String {
    let Some(el) = document.get_element_by_id(element_id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

pub fn set_control_value(document: &web::Document, element_id: &str, value: &str) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        select.set_value(value);
    }
}

pub fn viewport_size() -> glam::Vec2 {
    match web::window() {
        Some(w) => crate::input::viewport_size(
            w.inner_width().ok().and_then(|v| v.as_f64()),
            w.inner_height().ok().and_then(|v| v.as_f64()),
        ),
        None => glam::Vec2::ZERO,
    }
}
