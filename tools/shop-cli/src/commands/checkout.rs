//! Place an order from a cart file.

use anyhow::{bail, Context as _, Result};
use clothshop_commerce::cart::CartStore;
use clothshop_commerce::catalog::Catalog;
use clothshop_commerce::checkout::{CheckoutOutcome, CheckoutRequest};
use clothshop_commerce::ProductId;
use clothshop_data::ShopApi;
use dialoguer::Confirm;
use serde::Deserialize;

use super::products::fetch_catalog;
use super::CheckoutArgs;
use crate::context::Context;

/// One entry of a cart file.
#[derive(Debug, Clone, Deserialize)]
pub struct CartFileEntry {
    pub id: ProductId,
    pub size: String,
    #[serde(default = "one")]
    pub qty: u32,
}

fn one() -> u32 {
    1
}

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let entries = read_cart_file(&ctx.resolve_path(&args.cart).to_string_lossy())?;
    let catalog = fetch_catalog(ctx).await?;
    let cart = build_cart(&catalog, &entries)?;

    let request = CheckoutRequest::from_cart(
        cart.view(),
        &args.address,
        ctx.config.payment_or_default(&args.payment),
    )?;

    if ctx.output.is_json() && args.dry_run {
        ctx.output.json(&request);
        return Ok(());
    }

    ctx.output.header("Checkout");
    for line in &request.items {
        ctx.output.kv(
            &line.key().to_string(),
            &format!(
                "{} ({}) x {} = {}",
                line.name,
                line.size,
                line.qty,
                line.subtotal().display(ctx.config.currency)
            ),
        );
    }
    ctx.output
        .kv("Total", &request.total.display(ctx.config.currency));
    ctx.output.kv("Address", &request.address);
    ctx.output.kv("Payment", &request.payment);

    if args.dry_run {
        ctx.output.success("Dry run - request not sent");
        return Ok(());
    }

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt("Place this order?")
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    let api = ctx.api()?;
    let spinner = ctx.output.spinner("Placing order");
    let result = api.submit_checkout(&request).await;
    spinner.finish_and_clear();

    let outcome = match result {
        Ok(response) => CheckoutOutcome::from_response(response),
        Err(e) => CheckoutOutcome::Failed {
            message: e.user_message(),
        },
    };

    if ctx.output.is_json() {
        ctx.output.json(&outcome);
    }
    match &outcome {
        CheckoutOutcome::Placed { order_id } => {
            ctx.output.success(&format!("Order placed: {}", order_id));
            Ok(())
        }
        other => bail!(
            "{}",
            other
                .alert_message()
                .unwrap_or_else(|| "Checkout did not complete".to_string())
        ),
    }
}

/// Read a cart file.
pub fn read_cart_file(path: &str) -> Result<Vec<CartFileEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cart file: {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid cart file: {}", path))
}

/// Fill a cart store from cart file entries, checking each product exists.
pub fn build_cart(catalog: &Catalog, entries: &[CartFileEntry]) -> Result<CartStore> {
    let mut cart = CartStore::new();
    for entry in entries {
        let product = catalog
            .get(entry.id)
            .with_context(|| format!("Product {} is not in the catalog", entry.id))?;
        if !product.has_size(&entry.size) {
            tracing::warn!(
                product_id = entry.id.get(),
                size = %entry.size,
                "size not offered for product"
            );
        }
        for _ in 0..entry.qty {
            cart.add(product, &entry.size)?;
        }
    }
    Ok(cart)
}
