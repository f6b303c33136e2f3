use crate::constants::{HIDDEN_CLASS, TOAST_DISMISS_ID, TOAST_ID, TOAST_MESSAGE_ID};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, message: &str) {
    dom::set_text_by_id(document, TOAST_MESSAGE_ID, message);
    if let Some(el) = document.get_element_by_id(TOAST_ID) {
        let _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TOAST_ID) {
        let _ = el.class_list().add_1(HIDDEN_CLASS);
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Dismiss button hides the notification.
pub fn wire_dismiss(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, TOAST_DISMISS_ID, move || hide(&doc));
}
