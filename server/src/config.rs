//! Server-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! sinnvolle Standardwerte, sodass der Server ohne Konfigurationsdatei
//! lauffaehig ist.

use std::collections::HashMap;

use formflow_plugin::HostKonfiguration;
use serde::{Deserialize, Serialize};

/// Vollstaendige Server-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Allgemeine Server-Einstellungen
    pub server: ServerEinstellungen,
    /// Netzwerk-Einstellungen
    pub netzwerk: NetzwerkEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
    /// Plugin-Einstellungen
    pub plugins: PluginEinstellungen,
}

/// Allgemeine Server-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerEinstellungen {
    /// Anzeigename des Servers
    pub name: String,
}

impl Default for ServerEinstellungen {
    fn default() -> Self {
        Self {
            name: "FormFlow Server".into(),
        }
    }
}

/// Netzwerk-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetzwerkEinstellungen {
    pub bind_adresse: String,
    /// Port fuer HTTP (Plugins, `/plugins`, `/health`)
    pub port: u16,
}

impl Default for NetzwerkEinstellungen {
    fn default() -> Self {
        Self {
            bind_adresse: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

/// Plugin-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginEinstellungen {
    /// Aktiviert das Plugin-System (false = keine Plugins registrieren)
    pub aktiviert: bool,
    /// Plugin-ID -> enabled, ueberschreibt das Flag im Deskriptor
    pub ueberschreibungen: HashMap<String, bool>,
}

impl Default for PluginEinstellungen {
    fn default() -> Self {
        Self {
            aktiviert: true,
            ueberschreibungen: HashMap::new(),
        }
    }
}

impl ServerConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> anyhow::Result<Self> {
        match std::fs::read_to_string(pfad) {
            Ok(inhalt) => Self::parsen(&inhalt)
                .map_err(|e| anyhow::anyhow!("Konfigurationsfehler in '{pfad}': {e}")),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = pfad,
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!(
                "Konfigurationsdatei '{pfad}' nicht lesbar: {e}"
            )),
        }
    }

    /// Parst die Konfiguration aus einem TOML-String
    pub fn parsen(inhalt: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(inhalt)
    }

    /// Gibt die vollstaendige Bind-Adresse fuer HTTP zurueck
    pub fn bind_adresse(&self) -> String {
        format!("{}:{}", self.netzwerk.bind_adresse, self.netzwerk.port)
    }

    /// Konfiguration fuer den PluginHost
    pub fn host_konfiguration(&self) -> HostKonfiguration {
        HostKonfiguration {
            ueberschreibungen: self.plugins.ueberschreibungen.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_ist_valide() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.netzwerk.port, 8080);
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.plugins.aktiviert);
        assert!(cfg.plugins.ueberschreibungen.is_empty());
    }

    #[test]
    fn bind_adresse() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_adresse(), "0.0.0.0:8080");
    }

    #[test]
    fn config_aus_toml_string() {
        let toml = r#"
            [server]
            name = "Mein Server"

            [netzwerk]
            port = 9000

            [plugins.ueberschreibungen]
            formflow = false
        "#;
        let cfg = ServerConfig::parsen(toml).unwrap();
        assert_eq!(cfg.server.name, "Mein Server");
        assert_eq!(cfg.netzwerk.port, 9000);
        // Nicht angegebene Felder behalten Standardwerte
        assert_eq!(cfg.netzwerk.bind_adresse, "0.0.0.0");
        assert!(cfg.plugins.aktiviert);
        assert_eq!(
            cfg.host_konfiguration().ueberschreibungen.get("formflow"),
            Some(&false)
        );
    }

    #[test]
    fn ungueltiges_toml() {
        assert!(ServerConfig::parsen("[netzwerk]\nport = \"acht\"").is_err());
    }

    #[test]
    fn fehlende_datei_gibt_standard() {
        let cfg = ServerConfig::laden("/existiert/nicht/config.toml").unwrap();
        assert_eq!(cfg.netzwerk.port, 8080);
    }
}
