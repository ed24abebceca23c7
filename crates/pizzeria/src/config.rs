//! Application configuration loaded from environment variables.

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Pizzeria configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `PIZZERIA_REGION` — which regional store to open (default: `"tunis"`)
/// - `PIZZERIA_ORDERS` — comma-separated pizza labels (default: `"cheese,pepperoni,clam"`)
/// - `PIZZERIA_LOG_FORMAT` — `pretty` or `json` (default: `pretty`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub region: String,
    pub orders: Vec<String>,
    pub log_format: LogFormat,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// anything it does not provide.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            region: lookup("PIZZERIA_REGION").unwrap_or(defaults.region),
            orders: lookup("PIZZERIA_ORDERS")
                .map(|raw| parse_orders(&raw))
                .unwrap_or(defaults.orders),
            log_format: lookup("PIZZERIA_LOG_FORMAT")
                .map(|raw| parse_log_format(&raw))
                .unwrap_or(defaults.log_format),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: "tunis".to_string(),
            orders: vec![
                "cheese".to_string(),
                "pepperoni".to_string(),
                "clam".to_string(),
            ],
            log_format: LogFormat::Pretty,
            log_level: "info".to_string(),
        }
    }
}

/// Splits a comma-separated order list, dropping blank entries.
///
/// Entries are trimmed of surrounding whitespace but otherwise passed
/// through as-is; the store decides whether a label is recognized.
fn parse_orders(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_log_format(raw: &str) -> LogFormat {
    if raw.trim().eq_ignore_ascii_case("json") {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.region, "tunis");
        assert_eq!(config.orders, vec!["cheese", "pepperoni", "clam"]);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_lookup_uses_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.region, "tunis");
        assert_eq!(config.orders.len(), 3);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("PIZZERIA_REGION", "sfax"),
            ("PIZZERIA_ORDERS", "clam,cheese"),
            ("PIZZERIA_LOG_FORMAT", "JSON"),
            ("RUST_LOG", "debug"),
        ]));

        assert_eq!(config.region, "sfax");
        assert_eq!(config.orders, vec!["clam", "cheese"]);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_order_list_drops_blank_entries() {
        assert_eq!(
            parse_orders(" cheese , ,clam,, anchovy "),
            vec!["cheese", "clam", "anchovy"]
        );
        assert!(parse_orders("").is_empty());
    }

    #[test]
    fn test_unknown_log_format_falls_back_to_pretty() {
        assert_eq!(parse_log_format("xml"), LogFormat::Pretty);
        assert_eq!(parse_log_format(" json "), LogFormat::Json);
    }
}
