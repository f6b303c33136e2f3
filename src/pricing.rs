//! Pricing cards: catalog text, billing toggle, animated prices and tilt.

use crate::constants::*;
use crate::dom::{self, EventListener};
use crate::tilt;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use trazapp_core::constants::{PRICE_COUNT_UP, TILT_PLAN_DEG, TILT_POPULAR_PLAN_DEG};
use trazapp_core::{find_plan, format_ars, BillingCycle, CountUp, Plan};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct PlanCard {
    el: web::HtmlElement,
    plan: &'static Plan,
    counter: CountUp,
}

impl PlanCard {
    /// Catalog text that does not depend on the billing cycle.
    fn fill(&self, document: &web::Document) {
        let plan = self.plan;
        dom::set_text_in(&self.el, PLAN_NAME_SELECTOR, plan.name);
        dom::set_text_in(&self.el, PLAN_DESCRIPTION_SELECTOR, plan.description);
        dom::set_text_in(&self.el, PLAN_HIGHLIGHT_SELECTOR, plan.highlight);
        dom::set_text_in(&self.el, PLAN_CTA_SELECTOR, plan.cta);
        dom::set_class(&self.el, PLAN_POPULAR_CLASS, plan.popular);
        if let Some(list) = dom::query_in(&self.el, PLAN_FEATURES_SELECTOR) {
            let rows = plan.features().map(|(name, included)| {
                let class = if included {
                    FEATURE_INCLUDED_CLASS
                } else {
                    FEATURE_EXCLUDED_CLASS
                };
                (name, Some(class))
            });
            dom::fill_list(document, &list, rows);
        }
        if let Some(el) = dom::query_in(&self.el, PLAN_CTA_SELECTOR) {
            let _ = el.set_attribute("href", &self.plan.register_href());
        }
    }

    fn show_cycle(&self, cycle: BillingCycle) {
        if let Some(el) = dom::query_in(&self.el, PLAN_PERIOD_SELECTOR) {
            el.set_text_content(Some(&format!("/{}", cycle.period_label())));
        }
        if let Some(el) = dom::query_in(&self.el, PLAN_SAVINGS_SELECTOR) {
            let yearly = cycle == BillingCycle::Yearly;
            if yearly {
                el.set_text_content(Some(&format!(
                    "Ahorra ${}/año",
                    format_ars(self.plan.yearly_savings())
                )));
            }
            dom::set_class(&el, HIDDEN_CLASS, !yearly);
        }
    }

    fn show_price(&self) {
        if let Some(el) = dom::query_in(&self.el, PLAN_PRICE_SELECTOR) {
            let shown = self.counter.value().floor();
            el.set_text_content(Some(&format!("${}", format_ars(shown))));
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct PricingView {
    cards: Vec<PlanCard>,
    last_frame: Option<Instant>,
    animating: bool,
}

impl PricingView {
    fn set_cycle(&mut self, cycle: BillingCycle) {
        for card in &mut self.cards {
            card.counter.retarget(card.plan.price(cycle));
            card.show_cycle(cycle);
            card.show_price();
        }
        log::debug!("[pricing] {:?}", cycle);
    }

    /// Advance every price counter; `true` once all have landed.
    fn tick(&mut self, now: Instant) -> bool {
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);
        let mut finished = true;
        for card in &mut self.cards {
            card.counter.tick(dt);
            card.show_price();
            finished &= card.counter.is_finished();
        }
        finished
    }
}

fn request_frame(frame: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), frame.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Switch cycle and count the prices up, starting the frame loop if idle.
fn show(view: &Rc<RefCell<PricingView>>, frame: &FrameCallback, cycle: BillingCycle) {
    let idle = {
        let mut v = view.borrow_mut();
        v.set_cycle(cycle);
        !std::mem::replace(&mut v.animating, true)
    };
    if idle {
        request_frame(frame);
    }
}

fn collect_cards(document: &web::Document) -> Vec<PlanCard> {
    let mut cards = Vec::new();
    for el in dom::query_all(document, PRICING_CARD_SELECTOR) {
        let Some(id) = el.get_attribute(PLAN_ID_ATTR) else {
            continue;
        };
        match find_plan(&id) {
            Ok(plan) => {
                let card = PlanCard {
                    el,
                    plan,
                    counter: CountUp::new(0.0, PRICE_COUNT_UP),
                };
                card.fill(document);
                cards.push(card);
            }
            Err(e) => log::warn!("[pricing] {}", e),
        }
    }
    cards
}

/// Bind every pricing card and follow the billing toggle.
pub fn wire(document: &web::Document) {
    let cards = collect_cards(document);
    if cards.is_empty() {
        return;
    }
    for card in &cards {
        let amount = if card.plan.popular {
            TILT_POPULAR_PLAN_DEG
        } else {
            TILT_PLAN_DEG
        };
        tilt::attach(&card.el, amount);
    }
    log::info!("[pricing] {} plans bound", cards.len());

    let view = Rc::new(RefCell::new(PricingView {
        cards,
        last_frame: None,
        animating: false,
    }));
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let (view_tick, frame_tick) = (view.clone(), frame.clone());
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let finished = view_tick.borrow_mut().tick(Instant::now());
        if finished {
            let mut v = view_tick.borrow_mut();
            v.animating = false;
            v.last_frame = None;
        } else {
            request_frame(&frame_tick);
        }
    }) as Box<dyn FnMut()>));

    let toggle = document
        .get_element_by_id(BILLING_TOGGLE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok());
    let Some(toggle) = toggle else {
        show(&view, &frame, BillingCycle::Monthly);
        return;
    };
    show(&view, &frame, BillingCycle::from_yearly(toggle.checked()));

    let toggle_for_change = toggle.clone();
    match EventListener::new(&toggle, "change", move |_| {
        show(&view, &frame, BillingCycle::from_yearly(toggle_for_change.checked()));
    }) {
        Ok(l) => l.forget(),
        Err(e) => log::warn!("[pricing] toggle listener: {:?}", e),
    }
}
