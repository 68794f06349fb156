//! Render the widget markup to a standalone HTML page.

use anyhow::{Context as _, Result};
use clothshop_commerce::cart::CartStore;
use clothshop_commerce::catalog::{Catalog, Product};
use shop_widget::sections::{
    html_escape, render_cart, render_products, render_total, CHECKOUT_LABEL,
};
use shop_widget::WidgetConfig;

use super::checkout::{build_cart, read_cart_file};
use super::products::fetch_catalog;
use super::PreviewArgs;
use crate::context::Context;

/// Run the preview command.
pub async fn run(args: PreviewArgs, ctx: &Context) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => read_catalog_file(&ctx.resolve_path(path).to_string_lossy())?,
        None => fetch_catalog(ctx).await?,
    };

    let cart = match &args.cart {
        Some(path) => {
            let entries = read_cart_file(&ctx.resolve_path(path).to_string_lossy())?;
            build_cart(&catalog, &entries)?
        }
        None => CartStore::new(),
    };

    let html = render_preview_page(&catalog, &cart, &ctx.config);
    let out = ctx.resolve_path(&args.out);
    std::fs::write(&out, html)
        .with_context(|| format!("Failed to write preview: {}", out.display()))?;

    ctx.output.success(&format!(
        "Wrote {} ({} products, {} cart lines)",
        out.display(),
        catalog.len(),
        cart.len()
    ));
    Ok(())
}

fn read_catalog_file(path: &str) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path))?;
    let products: Vec<Product> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid catalog file: {}", path))?;
    Ok(Catalog::from(products))
}

/// Full page with the element ids the widget binds to.
pub fn render_preview_page(catalog: &Catalog, cart: &CartStore, config: &WidgetConfig) -> String {
    let dom = &config.dom;
    let chips: String = std::iter::once(("all", "All"))
        .chain(catalog.brands().into_iter().map(|b| (b, b)))
        .map(|(value, label)| {
            let active = if value == "all" { " active" } else { "" };
            format!(
                r#"<button type="button" class="chip{}" data-{}="{}">{}</button>"#,
                active,
                html_escape(&dom.chip_dataset_key),
                html_escape(value),
                html_escape(label)
            )
        })
        .collect();
    let empty = cart.is_empty();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Shop preview</title>
<style>{styles}</style>
</head>
<body>
<header class="toolbar">
    <input type="search" id="{search}" placeholder="Search products" aria-label="Search">
    <nav class="chips">{chips}</nav>
</header>
<main class="layout">
    <section id="{grid}" class="grid">{products}</section>
    <aside class="cart">
        <h3>Cart</h3>
        <div id="{cart_items}">{cart_items_html}</div>
        <p id="{cart_empty}" class="muted"{empty_hidden}>Add something to get started.</p>
        <div class="row"><strong>Total</strong><span id="{total}">{total_text}</span></div>
        <textarea id="{address}" placeholder="Delivery address"></textarea>
        <select id="{payment}">
            <option value="COD">Cash on delivery</option>
            <option value="UPI">UPI</option>
            <option value="CARD">Card</option>
        </select>
        <button type="button" id="{checkout}"{disabled}>{checkout_label}</button>
    </aside>
</main>
<div id="{toast}" class="toast" role="status"></div>
<!-- generated by shopctl at {generated} -->
</body>
</html>
"#,
        styles = PREVIEW_STYLES,
        search = html_escape(&dom.search),
        chips = chips,
        grid = html_escape(&dom.grid),
        products = render_products(catalog, config.currency),
        cart_items = html_escape(&dom.cart_items),
        cart_items_html = render_cart(cart.lines(), config.currency),
        cart_empty = html_escape(&dom.cart_empty),
        empty_hidden = if empty { "" } else { " hidden" },
        total = html_escape(&dom.total),
        total_text = render_total(cart.total(), config.currency),
        address = html_escape(&dom.address),
        payment = html_escape(&dom.payment),
        checkout = html_escape(&dom.checkout_button),
        disabled = if empty { " disabled" } else { "" },
        checkout_label = CHECKOUT_LABEL,
        toast = html_escape(&dom.toast),
        generated = chrono::Utc::now().to_rfc3339(),
    )
}

const PREVIEW_STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
.toolbar { display: flex; gap: 1rem; padding: 1rem; border-bottom: 1px solid #eee; }
.chip { border: 1px solid #ccc; border-radius: 999px; background: #fff; padding: .25rem .75rem; }
.chip.active { background: #222; color: #fff; }
.layout { display: grid; grid-template-columns: 1fr 320px; gap: 1rem; padding: 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 1rem; }
.card { border: 1px solid #eee; border-radius: 8px; padding: .75rem; }
.card img { width: 100%; aspect-ratio: 1; object-fit: cover; }
.muted { color: #888; }
.row { display: flex; justify-content: space-between; gap: .5rem; }
.toast { position: fixed; bottom: 1rem; right: 1rem; opacity: 0; transition: opacity .2s; }
.toast.show { opacity: 1; }
"#;
