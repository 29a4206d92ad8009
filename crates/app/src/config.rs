//! Application configuration from environment variables.

use std::env::VarError;
use std::path::PathBuf;

use thiserror::Error;

use storefront_core::{Currency, Money};
use storefront_observability::LogFormat;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_format: LogFormat,
    /// JSON catalog file; `None` uses the built-in seed catalog.
    pub catalog_path: Option<PathBuf>,
    pub currency: Currency,
    /// Upper end of the shop price slider; requested bounds are clamped to it.
    pub price_slider_max: Money,
    /// Act as a signed-in admin when no identity provider is wired in.
    pub auth_bypass: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            catalog_path: None,
            currency: Currency::Usd,
            price_slider_max: Money::from_major_minor(200, 0),
            auth_bypass: false,
        }
    }
}

/// Load configuration, reading a `.env` file first if one exists.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Build configuration from an env-var lookup.
///
/// Every variable is optional; unset variables take the [`AppConfig`]
/// defaults, set-but-invalid ones are errors.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let defaults = AppConfig::default();
    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let log_format = match lookup("STOREFRONT_LOG_FORMAT") {
        Ok(raw) => raw
            .parse::<LogFormat>()
            .map_err(|e| invalid("STOREFRONT_LOG_FORMAT", e.to_string()))?,
        Err(_) => defaults.log_format,
    };

    let catalog_path = lookup("STOREFRONT_CATALOG_PATH")
        .ok()
        .filter(|raw| !raw.trim().is_empty())
        .map(PathBuf::from);

    let currency = match lookup("STOREFRONT_CURRENCY") {
        Ok(raw) => raw
            .parse::<Currency>()
            .map_err(|e| invalid("STOREFRONT_CURRENCY", e.to_string()))?,
        Err(_) => defaults.currency,
    };

    let price_slider_max = match lookup("STOREFRONT_PRICE_SLIDER_MAX") {
        Ok(raw) => Money::parse_decimal(&raw)
            .map_err(|e| invalid("STOREFRONT_PRICE_SLIDER_MAX", e.to_string()))?,
        Err(_) => defaults.price_slider_max,
    };

    let auth_bypass = match lookup("STOREFRONT_AUTH_BYPASS") {
        Ok(raw) => parse_bool(&raw).ok_or_else(|| {
            invalid(
                "STOREFRONT_AUTH_BYPASS",
                format!("expected true/false, got '{raw}'"),
            )
        })?,
        Err(_) => defaults.auth_bypass,
    };

    Ok(AppConfig {
        log_format,
        catalog_path,
        currency,
        price_slider_max,
        auth_bypass,
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_env_uses_defaults() {
        let map = HashMap::new();
        assert_eq!(build_app_config(lookup_from_map(&map)).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let map = HashMap::from([
            ("STOREFRONT_LOG_FORMAT", "pretty"),
            ("STOREFRONT_CATALOG_PATH", "/srv/catalog.json"),
            ("STOREFRONT_CURRENCY", "KES"),
            ("STOREFRONT_PRICE_SLIDER_MAX", "15000"),
            ("STOREFRONT_AUTH_BYPASS", "yes"),
        ]);

        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
        assert_eq!(config.currency, Currency::Kes);
        assert_eq!(config.price_slider_max, Money::from_major_minor(15_000, 0));
        assert!(config.auth_bypass);
    }

    #[test]
    fn blank_catalog_path_means_seed_data() {
        let map = HashMap::from([("STOREFRONT_CATALOG_PATH", "  ")]);
        assert_eq!(build_app_config(lookup_from_map(&map)).unwrap().catalog_path, None);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        for (var, value) in [
            ("STOREFRONT_LOG_FORMAT", "xml"),
            ("STOREFRONT_CURRENCY", "EUR"),
            ("STOREFRONT_PRICE_SLIDER_MAX", "lots"),
            ("STOREFRONT_AUTH_BYPASS", "maybe"),
        ] {
            let map = HashMap::from([(var, value)]);
            let err = build_app_config(lookup_from_map(&map)).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidEnvVar { var: ref v, .. } if v == var),
                "expected InvalidEnvVar({var}), got: {err:?}"
            );
        }
    }
}
