//! Request spans for the HTTP server

use std::time::Instant;

use actix_web::{
    dev::{ServiceRequest, ServiceResponse},
    HttpMessage,
};
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};

/// Requests slower than this are logged at warn level
const SLOW_REQUEST_MS: u128 = 10 * 1000;

/// `DefaultRootSpanBuilder` plus request timings.
pub struct StatsRootSpanBuilder;

struct RequestStart(Instant);

impl RootSpanBuilder for StatsRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> tracing::Span {
        // Scoped so the extensions borrow ends before `root_span!` reads the request.
        {
            let mut extensions = request.extensions_mut();
            extensions.insert(RequestStart(Instant::now()));
        }

        tracing_actix_web::root_span!(
            request,
            duration_ms = tracing::field::Empty,
            duration_ns = tracing::field::Empty,
        )
    }

    fn on_request_end<B: actix_web::body::MessageBody>(
        span: tracing::Span,
        outcome: &Result<ServiceResponse<B>, actix_web::Error>,
    ) {
        if let Ok(response) = outcome {
            if let Some(start) = response.request().extensions().get::<RequestStart>() {
                let elapsed = start.0.elapsed();
                let millis = elapsed.as_millis();
                span.record("duration_ms", millis);
                span.record("duration_ns", elapsed.as_nanos());
                if millis > SLOW_REQUEST_MS {
                    tracing::warn!(duration_ms = millis, "Slow HTTP request");
                } else {
                    tracing::trace!("HTTP request");
                }
            }
        }
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}
