//! PluginHost – registriert Deskriptoren und mountet ihre Routen
//!
//! Der Host validiert jeden Deskriptor, traegt ihn in die Registry ein und
//! baut daraus einen gemeinsamen Axum-Router. Deaktivierte Plugins bleiben
//! registriert (ID und Basispfad belegt), ihre Routen werden aber nicht
//! gemountet.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::Utc;
use dashmap::DashMap;
use tower_http::normalize_path::NormalizePath;
use tracing::{info, warn};

use crate::descriptor::PluginDescriptor;
use crate::error::{PluginError, Result};
use crate::registry::{PluginRegistry, RegistryEintrag};
use crate::types::{PluginInfo, PluginState};

/// Pfade die der Host selbst belegt
pub const RESERVIERTE_PFADE: &[&str] = &["/plugins", "/health"];

/// Konfiguration fuer den PluginHost
#[derive(Debug, Clone, Default)]
pub struct HostKonfiguration {
    /// Plugin-ID -> enabled, hat Vorrang vor dem Flag im Deskriptor
    pub ueberschreibungen: HashMap<String, bool>,
}

/// PluginHost – verwaltet Registry und Plugin-Router
pub struct PluginHost {
    registry: Arc<PluginRegistry>,
    routen: DashMap<String, (String, Router)>,
    konfiguration: HostKonfiguration,
}

impl PluginHost {
    /// Erstellt einen neuen PluginHost
    pub fn neu(konfiguration: HostKonfiguration) -> Self {
        Self {
            registry: Arc::new(PluginRegistry::neu()),
            routen: DashMap::new(),
            konfiguration,
        }
    }

    /// Registriert ein Plugin und gibt den resultierenden Zustand zurueck
    pub fn plugin_registrieren(&self, deskriptor: &PluginDescriptor) -> Result<PluginState> {
        deskriptor.validieren()?;

        let base_path = &deskriptor.routes.base_path;
        if RESERVIERTE_PFADE.contains(&base_path.as_str()) {
            return Err(PluginError::UngueltigerPfad(format!(
                "'{base_path}' ist fuer den Host reserviert"
            )));
        }

        let enabled = match self.konfiguration.ueberschreibungen.get(&deskriptor.id) {
            Some(&wert) => {
                if wert != deskriptor.enabled {
                    warn!(
                        plugin = %deskriptor.id,
                        enabled = wert,
                        "enabled-Flag durch Host-Konfiguration ueberschrieben"
                    );
                }
                wert
            }
            None => deskriptor.enabled,
        };
        let state = PluginState::aus_flag(enabled);

        self.registry.registrieren(RegistryEintrag {
            id: deskriptor.id.clone(),
            name: deskriptor.name.clone(),
            version: deskriptor.version.clone(),
            base_path: base_path.clone(),
            state,
            registriert_am: Utc::now(),
        })?;

        if state == PluginState::Aktiv {
            self.routen.insert(
                deskriptor.id.clone(),
                (base_path.clone(), deskriptor.routes.router.clone()),
            );
        }

        info!(
            plugin = %deskriptor.id,
            version = %deskriptor.version,
            base_path = %base_path,
            state = %state,
            "Plugin registriert"
        );
        Ok(state)
    }

    /// Entfernt ein Plugin vollstaendig
    pub fn plugin_entfernen(&self, id: &str) -> Result<()> {
        let eintrag = self.registry.entfernen(id)?;
        self.routen.remove(id);
        info!(plugin = %eintrag.id, "Plugin entfernt");
        Ok(())
    }

    /// Alle registrierten Plugins (nach ID sortiert)
    pub fn plugins(&self) -> Vec<PluginInfo> {
        self.registry.alle().iter().map(RegistryEintrag::info).collect()
    }

    /// Anzahl aktiver Plugins
    pub fn aktive_anzahl(&self) -> usize {
        self.routen.len()
    }

    /// Sucht ein registriertes Plugin per ID
    pub fn plugin(&self, id: &str) -> Option<PluginInfo> {
        self.registry.per_id(id).map(|e| e.info())
    }

    /// Baut den Router aus dem aktuellen Stand: `/plugins` plus alle aktiven
    /// Plugins unter ihrem Basispfad. Spaeter registrierte Plugins erscheinen
    /// erst in einem neu gebauten Router.
    pub fn router(&self) -> Router {
        let mut router = Router::new()
            .route("/plugins", get(plugins_auflisten))
            .with_state(Arc::clone(&self.registry));

        for eintrag in self.routen.iter() {
            let (base_path, plugin_router) = eintrag.value();
            router = router.nest(base_path, plugin_router.clone());
        }
        router
    }

    /// Router mit entferntem abschliessenden Slash, sodass `GET /formflow/`
    /// und `GET /formflow` dieselbe Route treffen
    pub fn app(&self) -> NormalizePath<Router> {
        NormalizePath::trim_trailing_slash(self.router())
    }
}

impl Default for PluginHost {
    fn default() -> Self {
        Self::neu(HostKonfiguration::default())
    }
}

/// `GET /plugins` – Liste aller registrierten Plugins
async fn plugins_auflisten(State(registry): State<Arc<PluginRegistry>>) -> Json<Vec<PluginInfo>> {
    Json(registry.alle().iter().map(RegistryEintrag::info).collect())
}
