//! FormFlow-Plugin
//!
//! Mountet unter `/formflow` einen einzelnen Status-Endpunkt:
//! `GET /formflow/` -> `{"message": "FormFlow plugin running!"}`

use std::sync::OnceLock;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::descriptor::{PluginDescriptor, PluginRouten};

pub const PLUGIN_ID: &str = "formflow";
pub const PLUGIN_NAME: &str = "FormFlow";
pub const PLUGIN_VERSION: &str = "1.0.0";
pub const BASIS_PFAD: &str = "/formflow";
pub const STATUS_NACHRICHT: &str = "FormFlow plugin running!";

/// Antwort des Status-Endpunkts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusAntwort {
    pub message: String,
}

static DESKRIPTOR: OnceLock<PluginDescriptor> = OnceLock::new();

/// Der prozessweite Deskriptor, beim ersten Zugriff erzeugt
pub fn descriptor() -> &'static PluginDescriptor {
    DESKRIPTOR.get_or_init(|| PluginDescriptor {
        id: PLUGIN_ID.into(),
        name: PLUGIN_NAME.into(),
        version: PLUGIN_VERSION.into(),
        enabled: true,
        routes: PluginRouten {
            base_path: BASIS_PFAD.into(),
            router: router(),
        },
    })
}

/// Router relativ zum Basispfad
pub fn router() -> Router {
    Router::new().route("/", get(status))
}

/// `GET /` – statische Statusmeldung
async fn status() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatusAntwort {
            message: STATUS_NACHRICHT.into(),
        }),
    )
}
