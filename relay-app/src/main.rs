//! # Payment Relay Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize tracing (and OTLP trace/metric export when configured)
//! - Build the Stripe processor from the configured secret key
//! - Create the relay service
//! - Start the HTTP server

mod config;
mod telemetry;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relay_hex::{RelayService, inbound::HttpServer};
use relay_stripe::StripeProcessor;

use telemetry::Telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Fail fast before anything starts if the secret key is absent
    let config = config::Config::from_env()?;

    let otel = config
        .otlp_endpoint
        .as_deref()
        .map(Telemetry::init)
        .transpose()?;
    let telemetry = otel
        .as_ref()
        .map(|otel| tracing_opentelemetry::layer().with_tracer(otel.tracer()));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,relay_app=debug,relay_hex=debug,relay_stripe=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    tracing::info!("Starting payment relay on port {}", config.port);
    tracing::info!(
        test_mode = config.stripe_secret_key.is_test_mode(),
        "Stripe secret key loaded"
    );
    if let Some(endpoint) = &config.otlp_endpoint {
        tracing::info!("Exporting traces and metrics to {}", endpoint);
    }

    // Build the processor from explicit configuration
    let mut processor = StripeProcessor::new(config.stripe_secret_key.clone());
    if let Some(base) = &config.stripe_api_base {
        processor = processor.with_base_url(base.as_str());
    }
    tracing::info!("Using processor API at {}", processor.base_url());

    // Create the relay service
    let service = RelayService::new(processor);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    let result = server.run(&addr).await;
    if let Err(e) = &result {
        tracing::error!("Server stopped with error: {}", e);
    }

    // Ensure traces and metrics are flushed before exit, even on failure
    if let Some(otel) = otel {
        otel.shutdown();
    }
    result
}
