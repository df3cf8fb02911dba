//! Request-Timing Middleware fuer Axum
//!
//! Misst die Antwortzeit jeder HTTP-Anfrage und protokolliert sie als
//! strukturiertes Log-Event.

use axum::{
    body::Body,
    http::{Request, Response},
    middleware::Next,
};
use std::time::Instant;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;

/// TraceLayer fuer HTTP mit Standard-Klassifizierung
pub fn request_timing_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// Axum-Middleware-Funktion: misst Antwortzeit und loggt strukturiert.
///
/// ```ignore
/// Router::new()
///     .route("/", get(handler))
///     .layer(axum::middleware::from_fn(timing_middleware))
/// ```
pub async fn timing_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let methode = req.method().clone();
    let pfad = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let dauer_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    tracing::info!(
        method = %methode,
        path = %pfad,
        status,
        duration_ms = dauer_ms,
        bucket = dauer_bucket(dauer_ms),
        "HTTP-Anfrage abgeschlossen"
    );

    response
}

/// Grobe Einordnung einer Dauer (in ms) fuer Log-Auswertungen
pub fn dauer_bucket(dauer_ms: u64) -> &'static str {
    match dauer_ms {
        0..=1 => "<=1ms",
        2..=10 => "<=10ms",
        11..=100 => "<=100ms",
        101..=1000 => "<=1s",
        _ => ">1s",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    #[test]
    fn bucket_grenzen() {
        assert_eq!(dauer_bucket(0), "<=1ms");
        assert_eq!(dauer_bucket(1), "<=1ms");
        assert_eq!(dauer_bucket(2), "<=10ms");
        assert_eq!(dauer_bucket(100), "<=100ms");
        assert_eq!(dauer_bucket(1000), "<=1s");
        assert_eq!(dauer_bucket(1001), ">1s");
    }

    #[tokio::test]
    async fn middleware_laesst_antwort_durch() {
        let app = Router::new()
            .route("/", get(|| async { "hallo" }))
            .layer(axum::middleware::from_fn(timing_middleware))
            .layer(request_timing_layer());

        let antwort = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(antwort.status(), StatusCode::OK);
    }
}
