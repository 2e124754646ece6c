use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// `config.toml` at the workspace root, baked in at build time so the web
/// build needs no filesystem.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

pub const ENV_API_URL: &str = "FLOWDESK_API_URL";
pub const ENV_API_TOKEN: &str = "FLOWDESK_API_TOKEN";
pub const ENV_LOCALE: &str = "FLOWDESK_LOCALE";

/// Parse a config file body. Falls back to defaults when it is invalid.
fn parse(contents: &str) -> ClientConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid config.toml, using defaults");
        ClientConfig::default()
    })
}

/// Apply environment overrides on top of the file config.
fn apply_overrides(
    mut config: ClientConfig,
    var: impl Fn(&str) -> Option<String>,
) -> ClientConfig {
    if let Some(url) = var(ENV_API_URL).filter(|v| !v.is_empty()) {
        config.api.base_url = url;
    }
    if let Some(token) = var(ENV_API_TOKEN) {
        config.api.token = Some(token).filter(|t| !t.is_empty());
    }
    if let Some(locale) = var(ENV_LOCALE).filter(|v| !v.is_empty()) {
        config.i18n.locale = locale;
    }
    config
}

/// Load configuration once. Later calls return the same value.
///
/// On native targets a `.env` file is honoured; in the browser there is no
/// environment and the embedded file is used as-is.
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let config = apply_overrides(parse(EMBEDDED_CONFIG), |key| std::env::var(key).ok());
        tracing::info!(
            base_url = %config.api.base_url,
            locale = %config.i18n.locale,
            authenticated = config.api.token.is_some(),
            "Client configuration loaded"
        );
        config
    })
}
