use crate::constants::*;
use crate::dom::{self, EventListener};
use crate::input;
use crate::tilt;
use std::cell::RefCell;
use std::rc::Rc;
use trazapp_core::constants::TILT_STAGE_DEG;
use trazapp_core::{
    highlight_intensity, highlight_scale, parallax_offset_percent, scroll_progress,
    stage_position, StageSelection, STAGES,
};
use web_sys as web;

/// DOM side of the traceability timeline.
pub struct TimelineView {
    section: web::Element,
    stages: Vec<(usize, web::HtmlElement)>,
    parallax: Option<web::HtmlElement>,
    path: Option<web::HtmlElement>,
    dot: Option<web::HtmlElement>,
    selection: StageSelection,
}

impl TimelineView {
    /// Recompute highlight, card scale, parallax and progress path for the
    /// current section position.
    pub fn on_scroll(&self, viewport_height: f64) {
        let rect = self.section.get_bounding_client_rect();
        let progress = scroll_progress(rect.top(), rect.height(), viewport_height);
        let n = STAGES.len().max(self.stages.len());
        for (index, el) in &self.stages {
            let intensity = highlight_intensity(progress, *index, n);
            dom::set_style(el, STAGE_HIGHLIGHT_VAR, &format!("{:.3}", intensity));
            dom::set_style(
                el,
                "transform",
                &input::scale_transform(highlight_scale(intensity)),
            );
        }
        if let Some(p) = &self.parallax {
            dom::set_style(
                p,
                "transform",
                &input::translate_y_percent(parallax_offset_percent(progress)),
            );
        }
        if let Some(path) = &self.path {
            dom::set_style(path, "transform", &format!("scaleY({:.4})", progress));
        }
        if let Some(dot) = &self.dot {
            dom::set_style(dot, "top", &format!("{:.2}%", progress * 100.0));
        }
    }

    fn toggle(&mut self, index: usize) {
        self.selection.toggle(index);
        log::debug!("[timeline] active stage {:?}", self.selection.active());
        self.apply_selection();
    }

    fn apply_selection(&self) {
        for (index, el) in &self.stages {
            dom::set_class(el, STAGE_ACTIVE_CLASS, self.selection.is_active(*index));
        }
    }
}

/// Catalog position for the card at DOM position `dom_index`, by its
/// `data-stage` id; cards without a known id keep their DOM order.
fn card_position(el: &web::HtmlElement, dom_index: usize) -> usize {
    let attr = el.get_attribute(STAGE_ID_ATTR);
    match input::parse_stage_id(attr.as_deref()).and_then(stage_position) {
        Some(position) => position,
        None => {
            log::warn!("[timeline] unknown stage id {:?}", attr);
            dom_index
        }
    }
}

/// Write the catalog text and colour into a stage card.
fn fill_stage(document: &web::Document, el: &web::HtmlElement, position: usize) {
    let Some(stage) = STAGES.get(position) else {
        return;
    };
    dom::set_text_in(el, STAGE_TITLE_SELECTOR, stage.title);
    dom::set_text_in(el, STAGE_DESCRIPTION_SELECTOR, stage.description);
    if let Some(list) = dom::query_in(el, STAGE_DETAILS_SELECTOR) {
        dom::fill_list(document, &list, stage.details.iter().map(|d| (*d, None)));
    }
    dom::set_style(el, STAGE_COLOR_VAR, stage.color);
}

/// Bind the timeline section if the page has one.
pub fn wire(document: &web::Document) -> Option<Rc<RefCell<TimelineView>>> {
    let section = document.get_element_by_id(TIMELINE_SECTION_ID)?;
    let mut stages = Vec::new();
    let cards = dom::query_all(document, TIMELINE_STAGE_SELECTOR);
    for (i, el) in cards.into_iter().enumerate() {
        let position = card_position(&el, i);
        fill_stage(document, &el, position);
        tilt::attach(&el, TILT_STAGE_DEG);
        stages.push((position, el));
    }
    let view = Rc::new(RefCell::new(TimelineView {
        parallax: dom::query_in(&section, TIMELINE_PARALLAX_SELECTOR),
        path: dom::query_in(&section, TIMELINE_PATH_SELECTOR),
        dot: dom::query_in(&section, TIMELINE_DOT_SELECTOR),
        section,
        stages,
        selection: StageSelection::default(),
    }));
    view.borrow().apply_selection();

    let targets = view.borrow().stages.clone();
    for (index, el) in targets {
        let view_click = view.clone();
        match EventListener::new(&el, "click", move |_| {
            view_click.borrow_mut().toggle(index);
        }) {
            Ok(l) => l.forget(),
            Err(e) => log::warn!("[timeline] click listener: {:?}", e),
        }
    }
    log::info!("[timeline] {} stages bound", view.borrow().stages.len());
    Some(view)
}
