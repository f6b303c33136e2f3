use crate::constants::{NAVBAR_ID, NAVBAR_SCROLLED_CLASS};
use crate::dom::{self, EventListener};
use crate::timeline::TimelineView;
use std::cell::RefCell;
use std::rc::Rc;
use trazapp_core::is_scrolled;
use web_sys as web;

/// Window scroll updates the navbar state and the timeline highlight. Also
/// applied once immediately so a reload mid-page starts in sync.
pub fn wire_scroll(
    document: &web::Document,
    timeline: Option<Rc<RefCell<TimelineView>>>,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let navbar = document.get_element_by_id(NAVBAR_ID);

    let apply = move || {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(nav) = &navbar {
            let y = w.scroll_y().unwrap_or(0.0);
            dom::set_class(nav, NAVBAR_SCROLLED_CLASS, is_scrolled(y));
        }
        if let Some(t) = &timeline {
            t.borrow().on_scroll(dom::viewport_size().y as f64);
        }
    };
    apply();
    EventListener::new(&window, "scroll", move |_| apply())?.forget();
    Ok(())
}
