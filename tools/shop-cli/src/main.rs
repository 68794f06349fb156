//! Shop CLI - developer tool for the clothshop widget and its server.
//!
//! Commands:
//! - `shopctl products` - List the catalog served by a running server
//! - `shopctl orders` - List placed orders
//! - `shopctl checkout` - Place an order from a cart file
//! - `shopctl preview` - Render the widget markup to a standalone page
//! - `shopctl config` - Show, create or validate the widget config

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clothshop_observability::{LogFormat, LogLevel, LoggingConfig};

use commands::{CheckoutArgs, ConfigArgs, OrdersArgs, PreviewArgs, ProductsArgs};

/// Shop CLI - inspect and exercise a clothshop server
#[derive(Parser)]
#[command(name = "shopctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Server base URL, e.g. http://127.0.0.1:5000
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// List placed orders
    Orders(OrdersArgs),

    /// Place an order from a cart file
    Checkout(CheckoutArgs),

    /// Render the widget to a static HTML page
    Preview(PreviewArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::default()
        .with_component("shopctl")
        .with_format(LogFormat::Human)
        .with_level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        });
    clothshop_observability::init(&logging)?;

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), cli.base_url.as_deref(), output)?;
    if let Some(path) = &ctx.config_path {
        ctx.output.debug(&format!("Using config {}", path.display()));
    }

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Preview(args) => commands::preview::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
