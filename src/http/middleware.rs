use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::Instrument;

pub async fn request_tracing(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let span = tracing::info_span!("http.request", method = %method, route = %route);

    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        );
    });
    response
}
