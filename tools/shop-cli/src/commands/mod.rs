//! CLI command implementations.

pub mod checkout;
pub mod config;
pub mod orders;
pub mod preview;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show this brand.
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Only show products whose name or brand contains this text.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    /// Show only the last N orders.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Cart file: JSON array of `{"id": 101, "size": "M", "qty": 2}`.
    #[arg(long)]
    pub cart: String,

    /// Delivery address.
    #[arg(short, long, default_value = "")]
    pub address: String,

    /// Payment method (defaults to the configured default).
    #[arg(short, long, default_value = "")]
    pub payment: String,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,

    /// Build and show the request without sending it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the preview command.
#[derive(Args)]
pub struct PreviewArgs {
    /// Output HTML file.
    #[arg(short, long, default_value = "preview.html")]
    pub out: String,

    /// Read products from a JSON file instead of the server.
    #[arg(long)]
    pub catalog: Option<String>,

    /// Prefill the cart from a cart file.
    #[arg(long)]
    pub cart: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default shop.toml.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
