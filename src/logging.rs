use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use opentelemetry::{KeyValue, global, trace::TraceError};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    runtime,
    trace::{Config, RandomIdGenerator, Sampler, Tracer},
};
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use tracing::{Instrument, error, info, info_span, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::metrics::is_observability_enabled;

const LOG_DIR: &str = "storage/logs";
const DEFAULT_OTLP_ENDPOINT: &str = "http://localhost:4317";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Wraps every request in a span carrying a fresh request id and logs the
/// outcome once, at a level that follows the status class.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let span = info_span!(
        "request",
        request_id = %uuid::Uuid::new_v4(),
        method = %method,
        route = %route,
    );

    async move {
        let response = next.run(req).await;
        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if status.is_server_error() {
            error!(status = status.as_u16(), latency_ms, "Request failed");
        } else if status.is_client_error() {
            warn!(status = status.as_u16(), latency_ms, "Request rejected");
        } else {
            info!(status = status.as_u16(), latency_ms, "Request completed");
        }

        response
    }
    .instrument(span)
    .await
}

fn init_tracer() -> Result<Tracer, TraceError> {
    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| DEFAULT_OTLP_ENDPOINT.to_string());
    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    global::set_text_map_propagator(TraceContextPropagator::new());

    let resource = Resource::new([
        KeyValue::new(SERVICE_NAME, env!("CARGO_PKG_NAME")),
        KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
        KeyValue::new("environment", environment),
    ]);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint),
        )
        .with_trace_config(
            Config::default()
                .with_sampler(Sampler::AlwaysOn)
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource),
        )
        .install_batch(runtime::Tokio)
}

fn console_layer() -> BoxedLayer {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,tower_http=warn,sqlx=warn",
            env!("CARGO_CRATE_NAME")
        ))
    });

    fmt::layer()
        .with_target(false)
        .compact()
        .with_filter(filter)
        .boxed()
}

fn file_layers() -> Vec<BoxedLayer> {
    let errors = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "estoque.log");
    let structured = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "estoque.json");

    vec![
        fmt::layer()
            .with_writer(errors)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new("error"))
            .boxed(),
        fmt::layer()
            .json()
            .with_writer(structured)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(EnvFilter::new("info"))
            .boxed(),
    ]
}

/// Console output plus daily-rotated files under `storage/logs`:
/// `estoque.log` for errors and `estoque.json` for structured info logs.
/// Spans are exported over OTLP when observability is enabled and the
/// exporter can be built.
pub fn init_tracing() -> std::io::Result<()> {
    std::fs::create_dir_all(LOG_DIR)?;

    let mut layers = vec![console_layer()];
    layers.extend(file_layers());

    let mut otel_error = None;
    if is_observability_enabled() {
        match init_tracer() {
            Ok(tracer) => layers.push(tracing_opentelemetry::layer().with_tracer(tracer).boxed()),
            Err(e) => otel_error = Some(e),
        }
    }

    tracing_subscriber::registry().with(layers).init();

    match otel_error {
        Some(e) => warn!(error = %e, "OpenTelemetry unavailable, logging locally only"),
        None => info!(otel = is_observability_enabled(), "Tracing initialized"),
    }

    Ok(())
}

pub async fn shutdown_tracer() {
    if is_observability_enabled() {
        info!("Flushing OpenTelemetry spans");
        global::shutdown_tracer_provider();
    }
}
