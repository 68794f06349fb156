//! List the catalog served by a running server.

use anyhow::{Context as _, Result};
use clothshop_commerce::catalog::Catalog;
use clothshop_commerce::search::{BrandChip, FilterState};
use clothshop_data::ShopApi;

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = fetch_catalog(ctx).await?;

    let filter = FilterState::new()
        .with_search(args.search.unwrap_or_default())
        .with_chip(
            args.brand
                .as_deref()
                .map(BrandChip::from_dataset)
                .unwrap_or_default(),
        );
    let shown: Vec<_> = catalog
        .iter()
        .filter(|p| filter.matches_product(p))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&shown);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products ({} of {})",
        shown.len(),
        catalog.len()
    ));
    let widths = [6, 24, 12, 10, 16];
    ctx.output
        .table_row(&["ID", "NAME", "BRAND", "PRICE", "SIZES"], &widths);
    for product in shown {
        let id = product.id.to_string();
        let price = product.price.display(ctx.config.currency);
        let sizes = product.sizes.join(",");
        ctx.output.table_row(
            &[&id, &product.name, &product.brand, &price, &sizes],
            &widths,
        );
    }

    let brands = catalog.brands();
    if !brands.is_empty() {
        ctx.output.info("");
        ctx.output.kv("Brands", &brands.join(", "));
    }

    Ok(())
}

/// Fetch the catalog with a spinner.
pub async fn fetch_catalog(ctx: &Context) -> Result<Catalog> {
    let api = ctx.api()?;
    let spinner = ctx.output.spinner("Fetching products");
    let result = api.fetch_products().await;
    spinner.finish_and_clear();

    let products = result.context("Failed to fetch products")?;
    ctx.output
        .debug(&format!("Fetched {} products", products.len()));
    Ok(Catalog::from(products))
}
