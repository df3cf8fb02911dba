//! formflow-server – Bibliotheks-Root
//!
//! Baut aus der Konfiguration den PluginHost und den HTTP-Router und stellt
//! den oeffentlichen Einstiegspunkt fuer Integrationstests bereit.

pub mod config;

use anyhow::Result;
use axum::{extract::Request, middleware, Router, ServiceExt};
use config::ServerConfig;
use formflow_observability::{health_router, request_timing_layer, timing_middleware, HealthState};
use formflow_plugin::{builtin, PluginHost};
use tower_http::normalize_path::NormalizePath;

/// Haelt den Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
    host: PluginHost,
    health: HealthState,
}

impl Server {
    /// Erstellt einen neuen Server und registriert die mitgelieferten Plugins
    pub fn neu(config: ServerConfig) -> Result<Self> {
        let host = PluginHost::neu(config.host_konfiguration());

        if config.plugins.aktiviert {
            for deskriptor in builtin::alle() {
                host.plugin_registrieren(deskriptor)?;
            }
        } else {
            tracing::warn!("Plugin-System deaktiviert, keine Plugins registriert");
        }

        let health = HealthState::neu(env!("CARGO_PKG_VERSION"));
        health.plugins_aktiv_setzen(host.aktive_anzahl());

        Ok(Self {
            config,
            host,
            health,
        })
    }

    /// Der PluginHost des Servers
    pub fn host(&self) -> &PluginHost {
        &self.host
    }

    /// Vollstaendige Anwendung: Plugins, `/plugins`, `/health`, Logging-Layer
    pub fn app(&self) -> NormalizePath<Router> {
        let router = self
            .host
            .router()
            .merge(health_router(self.health.clone()))
            .layer(middleware::from_fn(timing_middleware))
            .layer(request_timing_layer());
        NormalizePath::trim_trailing_slash(router)
    }

    /// Startet den HTTP-Server und laeuft bis zum Shutdown-Signal (Ctrl-C)
    pub async fn starten(self) -> Result<()> {
        let adresse = self.config.bind_adresse();
        let listener = tokio::net::TcpListener::bind(&adresse)
            .await
            .map_err(|e| anyhow::anyhow!("Bind auf '{adresse}' fehlgeschlagen: {e}"))?;

        tracing::info!(
            server_name = %self.config.server.name,
            adresse = %adresse,
            plugins_aktiv = self.host.aktive_anzahl(),
            "Server gestartet"
        );

        let app = self.app();
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server beendet");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(fehler = %e, "Ctrl-C-Handler konnte nicht installiert werden");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown-Signal empfangen, Server wird beendet");
}
