//! OpenTelemetry export (traces and HTTP metrics) over OTLP/gRPC.

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    metrics::SdkMeterProvider, propagation::TraceContextPropagator, trace as sdktrace,
};

/// Installed OTLP providers. Both are also registered globally so the
/// tracing layer and the HTTP metrics layer pick them up.
pub struct Telemetry {
    tracer_provider: sdktrace::SdkTracerProvider,
    meter_provider: SdkMeterProvider,
}

impl Telemetry {
    /// Builds span and metric exporters for `endpoint` and installs them globally.
    pub fn init(endpoint: &str) -> anyhow::Result<Self> {
        global::set_text_map_propagator(TraceContextPropagator::new());

        // Use gRPC exporter with batch processing (non-blocking)
        let span_exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()?;
        let tracer_provider = sdktrace::SdkTracerProvider::builder()
            .with_batch_exporter(span_exporter)
            .build();

        let metric_exporter = opentelemetry_otlp::MetricExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()?;
        let meter_provider = SdkMeterProvider::builder()
            .with_periodic_exporter(metric_exporter)
            .build();

        global::set_tracer_provider(tracer_provider.clone());
        global::set_meter_provider(meter_provider.clone());

        Ok(Self {
            tracer_provider,
            meter_provider,
        })
    }

    pub fn tracer(&self) -> sdktrace::Tracer {
        use opentelemetry::trace::TracerProvider as _;
        self.tracer_provider.tracer("payment-relay")
    }

    /// Flushes and stops both providers.
    pub fn shutdown(self) {
        if let Err(e) = self.tracer_provider.shutdown() {
            tracing::warn!("tracer provider shutdown failed: {}", e);
        }
        if let Err(e) = self.meter_provider.shutdown() {
            tracing::warn!("meter provider shutdown failed: {}", e);
        }
    }
}
