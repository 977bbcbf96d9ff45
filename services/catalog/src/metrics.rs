//! HTTP request metrics exposed at `GET /metrics` in Prometheus text format.

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// Request counters shared through `AppState`. Cloning shares the registry.
#[derive(Clone)]
pub struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
}

impl Default for HttpMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "HTTP requests by route and status"),
            &["method", "path", "status"],
        )
        .expect("valid metric opts");
        registry
            .register(Box::new(requests_total.clone()))
            .expect("fresh registry accepts first registration");
        Self {
            registry,
            requests_total,
        }
    }

    pub fn record(&self, method: &str, path: &str, status: u16) {
        self.requests_total
            .with_label_values(&[method, path, &status.to_string()])
            .inc();
    }

    /// Prometheus text exposition of everything in the registry.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if encoder
            .encode(&self.registry.gather(), &mut buf)
            .is_err()
        {
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

/// Middleware counting every request by method, matched route, and status.
/// Unrouted requests land under the literal path `unmatched`.
pub async fn track_http(
    State(metrics): State<HttpMetrics>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_owned(), |p| p.as_str().to_owned());
    let response = next.run(request).await;
    metrics.record(&method, &path, response.status().as_u16());
    response
}
