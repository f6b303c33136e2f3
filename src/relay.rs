use crate::dom::js_err;
use trazapp_core::{RegistrationForm, RelayConfig};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// POST the form to the transactional email relay. Any non-2xx response is
/// an error; the body is not inspected.
pub async fn send(config: &RelayConfig, form: &RegistrationForm) -> anyhow::Result<()> {
    let body = serde_json::to_string(&config.send_request(form)?)?;

    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(web::RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));
    let request = web::Request::new_with_str_and_init(&config.endpoint, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !response.ok() {
        anyhow::bail!(
            "relay responded {} {}",
            response.status(),
            response.status_text()
        );
    }
    log::info!("[relay] submission accepted");
    Ok(())
}
