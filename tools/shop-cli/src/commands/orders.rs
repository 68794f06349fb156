//! List placed orders.

use anyhow::{Context as _, Result};
use clothshop_data::ShopApi;

use super::OrdersArgs;
use crate::context::Context;

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let spinner = ctx.output.spinner("Fetching orders");
    let result = api.fetch_orders().await;
    spinner.finish_and_clear();

    let mut orders = result.context("Failed to fetch orders")?;
    if let Some(limit) = args.limit {
        orders.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    if orders.is_empty() {
        ctx.output.info("No orders yet.");
        return Ok(());
    }

    ctx.output.header("Orders (newest first)");
    let widths = [20, 16, 8, 10];
    ctx.output
        .table_row(&["ORDER", "USER", "ITEMS", "TOTAL"], &widths);
    for order in &orders {
        let count = order.count.to_string();
        let total = order.total.display(ctx.config.currency);
        ctx.output.table_row(
            &[order.order_id.as_str(), &order.user, &count, &total],
            &widths,
        );
    }

    Ok(())
}
