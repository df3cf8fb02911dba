//! Integration-Tests fuer das Routing des PluginHost

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use formflow_plugin::builtin::formflow;
use formflow_plugin::{HostKonfiguration, PluginDescriptor, PluginHost, PluginInfo, PluginRouten};
use tower::ServiceExt;

async fn get_json(
    app: tower_http::normalize_path::NormalizePath<Router>,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let antwort = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = antwort.status();
    let bytes = to_bytes(antwort.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn host_mit_formflow() -> PluginHost {
    let host = PluginHost::default();
    host.plugin_registrieren(formflow::descriptor()).unwrap();
    host
}

#[tokio::test]
async fn formflow_mit_slash() {
    let (status, json) = get_json(host_mit_formflow().app(), "/formflow/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "message": "FormFlow plugin running!" }));
}

#[tokio::test]
async fn formflow_ohne_slash() {
    let (status, json) = get_json(host_mit_formflow().app(), "/formflow").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "FormFlow plugin running!");
}

#[tokio::test]
async fn wiederholte_anfragen_gleiche_antwort() {
    let host = host_mit_formflow();
    for _ in 0..3 {
        let (status, json) = get_json(host.app(), "/formflow/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], formflow::STATUS_NACHRICHT);
    }
}

#[tokio::test]
async fn unbekannter_pfad_404() {
    let (status, _) = get_json(host_mit_formflow().app(), "/gibt-es-nicht").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deaktiviertes_plugin_wird_nicht_gemountet() {
    let mut konfig = HostKonfiguration::default();
    konfig
        .ueberschreibungen
        .insert(formflow::PLUGIN_ID.into(), false);
    let host = PluginHost::neu(konfig);
    host.plugin_registrieren(formflow::descriptor()).unwrap();

    let (status, _) = get_json(host.app(), "/formflow/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Registriert bleibt es trotzdem
    let (status, json) = get_json(host.app(), "/plugins").await;
    assert_eq!(status, StatusCode::OK);
    let liste: Vec<PluginInfo> = serde_json::from_value(json).unwrap();
    assert_eq!(liste.len(), 1);
    assert_eq!(liste[0].id, "formflow");
    assert_eq!(liste[0].state, formflow_plugin::PluginState::Deaktiviert);
}

#[tokio::test]
async fn mehrere_plugins_nebeneinander() {
    let host = host_mit_formflow();
    let zweites = PluginDescriptor {
        id: "echo".into(),
        name: "Echo".into(),
        version: "0.1.0".into(),
        enabled: true,
        routes: PluginRouten {
            base_path: "/api/echo".into(),
            router: Router::new().route(
                "/",
                get(|| async { axum::Json(serde_json::json!({ "message": "echo" })) }),
            ),
        },
    };
    host.plugin_registrieren(&zweites).unwrap();

    let (_, json) = get_json(host.app(), "/api/echo/").await;
    assert_eq!(json["message"], "echo");
    let (_, json) = get_json(host.app(), "/formflow/").await;
    assert_eq!(json["message"], "FormFlow plugin running!");

    let (_, json) = get_json(host.app(), "/plugins").await;
    let ids: Vec<String> = serde_json::from_value::<Vec<PluginInfo>>(json)
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec!["echo", "formflow"]);
}
