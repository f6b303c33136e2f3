use trazapp_core::Route;
use web_sys as web;

pub fn current_route() -> Route {
    let Some(location) = web::window().map(|w| w.location()) else {
        return Route::Landing;
    };
    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();
    Route::parse(&path, &query)
}

pub fn navigate(route: &Route) {
    let href = route.href();
    log::info!("[router] navigating to {}", href);
    if let Some(w) = web::window() {
        if let Err(e) = w.location().set_href(&href) {
            log::error!("[router] navigation failed: {:?}", e);
        }
    }
}
