use trazapp_core::{RelayConfig, SiteError};

/// Relay identifiers baked in at build time, e.g.
/// `TRAZAPP_EMAIL_SERVICE_ID=... wasm-pack build`.
pub fn relay_config() -> Result<RelayConfig, SiteError> {
    RelayConfig::from_parts(
        option_env!("TRAZAPP_EMAIL_SERVICE_ID"),
        option_env!("TRAZAPP_EMAIL_TEMPLATE_ID"),
        option_env!("TRAZAPP_EMAIL_PUBLIC_KEY"),
        option_env!("TRAZAPP_EMAIL_ENDPOINT"),
    )
}
