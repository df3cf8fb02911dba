//! Structured Logging Setup via tracing-subscriber
//!
//! Konfigurierbar per Umgebungsvariable (hat Vorrang vor der Konfigurationsdatei):
//! - `FF_LOG_LEVEL`: Filter-Direktive (z.B. `info`, `formflow_plugin=debug`)
//! - `FF_LOG_FORMAT`: Format (text/json)

use std::str::FromStr;

use tracing_subscriber::{fmt, EnvFilter};

pub const ENV_LOG_LEVEL: &str = "FF_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "FF_LOG_FORMAT";

/// Ausgabeformat der Logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            anderes => Err(format!("Unbekanntes Log-Format: '{anderes}'")),
        }
    }
}

/// Initialisiert das Logging-System.
///
/// Schlaegt fehl, wenn bereits ein globaler Subscriber gesetzt ist.
pub fn logging_initialisieren(
    level: &str,
    format: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (level, format) = effektive_einstellungen(
        std::env::var(ENV_LOG_LEVEL).ok(),
        std::env::var(ENV_LOG_FORMAT).ok(),
        level,
        format,
    );
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_current_span(true)
            .try_init(),
        LogFormat::Text => fmt().with_env_filter(filter).with_target(true).try_init(),
    }
}

/// Loest Umgebung und Konfiguration zu Level und Format auf.
/// Unbekannte Formate fallen auf Text zurueck.
pub fn effektive_einstellungen(
    level_env: Option<String>,
    format_env: Option<String>,
    level: &str,
    format: &str,
) -> (String, LogFormat) {
    let level = level_env
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| level.to_string());
    let format = format_env
        .as_deref()
        .unwrap_or(format)
        .parse()
        .unwrap_or(LogFormat::Text);
    (level, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsen() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("JSON".parse::<LogFormat>().is_err());
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn umgebung_hat_vorrang() {
        let (level, format) = effektive_einstellungen(
            Some("debug".into()),
            Some("json".into()),
            "info",
            "text",
        );
        assert_eq!(level, "debug");
        assert_eq!(format, LogFormat::Json);
    }

    #[test]
    fn konfiguration_als_fallback() {
        let (level, format) = effektive_einstellungen(None, None, "warn", "json");
        assert_eq!(level, "warn");
        assert_eq!(format, LogFormat::Json);

        // Leere Umgebungsvariable zaehlt nicht
        let (level, _) = effektive_einstellungen(Some("  ".into()), None, "warn", "text");
        assert_eq!(level, "warn");
    }

    #[test]
    fn unbekanntes_format_wird_text() {
        let (_, format) = effektive_einstellungen(None, Some("xml".into()), "info", "json");
        assert_eq!(format, LogFormat::Text);
    }
}
