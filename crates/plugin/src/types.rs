//! Grundlegende Typen fuer das Plugin-System

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Zustand eines registrierten Plugins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginState {
    /// Plugin ist aktiv, seine Routen sind gemountet
    Aktiv,
    /// Plugin ist registriert, aber inaktiv (keine Routen)
    Deaktiviert,
}

impl PluginState {
    /// Leitet den Zustand aus dem enabled-Flag ab
    pub fn aus_flag(enabled: bool) -> Self {
        if enabled {
            PluginState::Aktiv
        } else {
            PluginState::Deaktiviert
        }
    }
}

impl std::fmt::Display for PluginState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginState::Aktiv => write!(f, "Aktiv"),
            PluginState::Deaktiviert => write!(f, "Deaktiviert"),
        }
    }
}

/// Oeffentliche Informationen ueber ein Plugin (fuer `/plugins`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub id: String,
    pub name: String,
    pub version: String,
    pub base_path: String,
    pub state: PluginState,
    pub registriert_am: DateTime<Utc>,
}
