//! Product grid - one card per catalog product.

use clothshop_commerce::catalog::{Catalog, Product};
use clothshop_commerce::Currency;

use super::html_escape;

/// Render the product grid.
pub fn render_products(catalog: &Catalog, currency: Currency) -> String {
    if catalog.is_empty() {
        return r#"<p class="muted">No products available.</p>"#.to_string();
    }

    catalog
        .iter()
        .map(|p| render_product_card(p, currency))
        .collect()
}

/// Render one card.
///
/// The add button carries the product id; the click handler reads the
/// size selector `#size-{id}` at click time.
pub fn render_product_card(product: &Product, currency: Currency) -> String {
    let options: String = product
        .sizes
        .iter()
        .map(|s| {
            let s = html_escape(s);
            format!(r#"<option value="{}">{}</option>"#, s, s)
        })
        .collect();

    format!(
        r#"<div class="card product" data-product-id="{id}" data-brand="{brand}">
    <img src="{img}" alt="{name}" loading="lazy">
    <h4>{name}</h4>
    <div class="muted">{brand}</div>
    <div class="price">{price}</div>
    <div>
        <select id="size-{id}" aria-label="Size">{options}</select>
    </div>
    <button class="add-to-cart" data-action="add" data-product-id="{id}">Add to cart</button>
</div>"#,
        id = product.id,
        brand = html_escape(&product.brand),
        img = html_escape(&product.img),
        name = html_escape(&product.name),
        price = product.price.display(currency),
        options = options,
    )
}
