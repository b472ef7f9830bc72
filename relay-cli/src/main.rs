//! Relay CLI
//!
//! Command-line interface for the payment relay.

use anyhow::Result;
use clap::{Parser, Subcommand};

use relay_client::RelayClient;
use relay_types::{Envelope, Payload};

#[derive(Parser)]
#[command(name = "relay")]
#[command(author, version, about = "Payment relay CLI client", long_about = None)]
struct Cli {
    /// Base URL of the payment relay
    #[arg(long, env = "RELAY_API_URL", default_value = "http://localhost:4242")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and confirm a payment intent
    Charge {
        /// Amount in the smallest currency unit (e.g. cents)
        #[arg(long)]
        amount: i64,
        /// Three-letter currency code, e.g. usd
        #[arg(long)]
        currency: String,
        #[arg(long)]
        payment_method: String,
        #[arg(long)]
        customer: String,
    },
    /// Customer operations
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },
    /// List a customer's saved card payment methods
    Methods {
        #[arg(long)]
        customer: String,
    },
    /// Check relay health
    Health,
}

#[derive(Subcommand)]
enum CustomerCommands {
    /// Create a customer with a default payment method
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        payment_method: String,
    },
}

/// Prints the envelope and reports whether it was a success.
fn print_envelope<T: Payload>(envelope: &Envelope<T>) -> Result<bool> {
    println!("{}", serde_json::to_string_pretty(envelope)?);
    if let Some(err) = envelope.error() {
        eprintln!("✗ {}", err);
    }
    Ok(envelope.is_success())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = RelayClient::new(&cli.api_url);

    let ok = match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ Relay is healthy");
            } else {
                println!("✗ Relay is not healthy");
            }
            healthy
        }
        Commands::Charge {
            amount,
            currency,
            payment_method,
            customer,
        } => {
            let envelope = client
                .create_payment_intent(amount, &currency, &payment_method, &customer)
                .await?;
            print_envelope(&envelope)?
        }
        Commands::Customer {
            action:
                CustomerCommands::Create {
                    email,
                    payment_method,
                },
        } => {
            let envelope = client.create_customer(&email, &payment_method).await?;
            print_envelope(&envelope)?
        }
        Commands::Methods { customer } => {
            let envelope = client.list_payment_methods(&customer).await?;
            print_envelope(&envelope)?
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
