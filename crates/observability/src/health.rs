//! Health-Check-Endpunkt fuer FormFlow
//!
//! Endpoint: `GET /health`
//! Response: JSON mit Status, Version, Uptime und Anzahl aktiver Plugins

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Status des Health-Checks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Antwort des Health-Check-Endpunkts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub plugins_active: usize,
}

/// Geteilter Zustand fuer den Health-Check-Handler
#[derive(Clone)]
pub struct HealthState {
    start_time: Instant,
    version: String,
    plugins_aktiv: Arc<AtomicUsize>,
}

impl HealthState {
    pub fn neu(version: &str) -> Self {
        Self {
            start_time: Instant::now(),
            version: version.to_string(),
            plugins_aktiv: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn plugins_aktiv(&self) -> usize {
        self.plugins_aktiv.load(Ordering::Relaxed)
    }

    pub fn plugins_aktiv_setzen(&self, anzahl: usize) {
        self.plugins_aktiv.store(anzahl, Ordering::Relaxed);
    }

    /// Ohne aktive Plugins ist der Server erreichbar, aber nutzlos
    pub fn status(&self) -> HealthStatus {
        if self.plugins_aktiv() > 0 {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        }
    }
}

/// Axum-Router fuer den `/health`-Endpunkt
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// `GET /health` – gibt den Serverstatus zurueck
async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    // 200 auch bei degraded (Probe soll nicht failen)
    let response = HealthResponse {
        status: state.status(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
        plugins_active: state.plugins_aktiv(),
    };
    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    #[test]
    fn health_state_frisch() {
        let state = HealthState::neu("0.1.0");
        assert!(state.uptime_seconds() < 5);
        assert_eq!(state.plugins_aktiv(), 0);
        assert_eq!(state.status(), HealthStatus::Degraded);
    }

    #[test]
    fn health_state_geteilt_zwischen_klonen() {
        let state = HealthState::neu("0.1.0");
        let klon = state.clone();
        state.plugins_aktiv_setzen(2);
        assert_eq!(klon.plugins_aktiv(), 2);
        assert_eq!(klon.status(), HealthStatus::Healthy);
    }

    #[test]
    fn health_response_serialisierung() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            version: "0.1.0".to_string(),
            uptime_seconds: 3600,
            plugins_active: 1,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"uptime_seconds\":3600"));
        assert!(json.contains("\"plugins_active\":1"));
    }

    #[tokio::test]
    async fn health_endpunkt() {
        let state = HealthState::neu("1.2.3");
        state.plugins_aktiv_setzen(1);

        let antwort = health_router(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(antwort.status(), StatusCode::OK);

        let bytes = to_bytes(antwort.into_body(), usize::MAX).await.unwrap();
        let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, HealthStatus::Healthy);
        assert_eq!(body.version, "1.2.3");
        assert_eq!(body.plugins_active, 1);
    }
}
