use crate::constants::NAVBAR_SCROLL_THRESHOLD;

/// The navbar switches to its compact, blurred style once the page has
/// scrolled past the threshold.
#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}
