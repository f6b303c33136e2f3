// DOM hooks the front-end binds to. The markup lives in the static host page.

// Background
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";

// Navbar
pub const NAVBAR_ID: &str = "navbar";
pub const NAVBAR_SCROLLED_CLASS: &str = "scrolled";

// Traceability timeline
pub const TIMELINE_SECTION_ID: &str = "traceability";
// `data-stage` holds the catalog id (1-based), not the DOM position.
pub const TIMELINE_STAGE_SELECTOR: &str = "[data-stage]";
pub const STAGE_ID_ATTR: &str = "data-stage";
pub const STAGE_TITLE_SELECTOR: &str = ".stage-title";
pub const STAGE_DESCRIPTION_SELECTOR: &str = ".stage-description";
pub const STAGE_DETAILS_SELECTOR: &str = ".stage-details";
pub const STAGE_COLOR_VAR: &str = "--stage-color";
pub const TIMELINE_PARALLAX_SELECTOR: &str = ".timeline-parallax";
pub const TIMELINE_PATH_SELECTOR: &str = ".timeline-path-progress";
pub const TIMELINE_DOT_SELECTOR: &str = ".timeline-dot";
pub const STAGE_ACTIVE_CLASS: &str = "active";
pub const STAGE_HIGHLIGHT_VAR: &str = "--highlight";

// Pricing
pub const PRICING_CARD_SELECTOR: &str = "[data-plan-id]";
pub const PLAN_ID_ATTR: &str = "data-plan-id";
pub const BILLING_TOGGLE_ID: &str = "billing-toggle";
pub const PLAN_PRICE_SELECTOR: &str = ".plan-price";
pub const PLAN_PERIOD_SELECTOR: &str = ".plan-period";
pub const PLAN_SAVINGS_SELECTOR: &str = ".plan-savings";
pub const PLAN_CTA_SELECTOR: &str = ".plan-cta";
pub const PLAN_NAME_SELECTOR: &str = ".plan-name";
pub const PLAN_DESCRIPTION_SELECTOR: &str = ".plan-description";
pub const PLAN_HIGHLIGHT_SELECTOR: &str = ".plan-highlight";
pub const PLAN_FEATURES_SELECTOR: &str = ".plan-features";
pub const PLAN_POPULAR_CLASS: &str = "popular";
pub const FEATURE_INCLUDED_CLASS: &str = "included";
pub const FEATURE_EXCLUDED_CLASS: &str = "excluded";

// Card tilt: written as custom properties, composed by the stylesheet
pub const TILT_X_VAR: &str = "--tilt-x";
pub const TILT_Y_VAR: &str = "--tilt-y";
pub const TILT_SCALE_VAR: &str = "--tilt-scale";
pub const GLARE_X_VAR: &str = "--glare-x";
pub const GLARE_Y_VAR: &str = "--glare-y";
pub const GLARE_OPACITY_VAR: &str = "--glare-opacity";

// Registration
pub const REGISTER_FORM_ID: &str = "register-form";
pub const REGISTER_SUBMIT_ID: &str = "register-submit";
pub const CONFIRMATION_ID: &str = "register-confirmation";
pub const CONFIRMATION_MESSAGE_ID: &str = "confirmation-message";

// Toast
pub const TOAST_ID: &str = "toast";
pub const TOAST_MESSAGE_ID: &str = "toast-message";
pub const TOAST_DISMISS_ID: &str = "toast-dismiss";

pub const HIDDEN_CLASS: &str = "hidden";
