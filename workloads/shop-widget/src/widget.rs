//! The widget controller.
//!
//! `ShopWidget` owns the cart store, the catalog and the filter state, and
//! projects them onto a [`Page`]. The cart panel, the checkout button and
//! the empty indicator are redrawn from a store subscription.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use clothshop_commerce::cart::{CartEvent, CartLine, CartStore, CartView};
use clothshop_commerce::catalog::Catalog;
use clothshop_commerce::checkout::{CheckoutOutcome, CheckoutRequest};
use clothshop_commerce::search::{BrandChip, FilterState};
use clothshop_commerce::{CommerceError, Currency, ProductId};
use clothshop_data::ShopApi;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::page::{Field, Page, Slot};
use crate::sections::{
    render_cart, render_load_error, render_order_history, render_orders_error, render_products,
    render_skeletons, render_total, CHECKOUT_LABEL, CHECKOUT_PENDING_LABEL,
};

/// Product grid, cart panel, filters and checkout for one page.
pub struct ShopWidget<A, P> {
    api: A,
    page: Rc<P>,
    config: WidgetConfig,
    cart: RefCell<CartStore>,
    catalog: RefCell<Catalog>,
    filter: RefCell<FilterState>,
    checkout_pending: Rc<Cell<bool>>,
}

impl<A, P> ShopWidget<A, P>
where
    A: ShopApi,
    P: Page + 'static,
{
    /// Create a widget and subscribe the cart panel to the store.
    pub fn new(api: A, page: Rc<P>, config: WidgetConfig) -> Self {
        let checkout_pending = Rc::new(Cell::new(false));
        let mut cart = CartStore::new();

        let panel = CartPanel {
            page: Rc::clone(&page),
            currency: config.currency,
            checkout_pending: Rc::clone(&checkout_pending),
        };
        let toast_message = config.toast_message.clone();
        let toast_duration = config.toast_duration();
        cart.subscribe(move |event, view| {
            panel.draw(view);
            if let CartEvent::Added { .. } = event {
                panel.page.show_toast(&toast_message, toast_duration);
            }
        });

        Self {
            api,
            page,
            config,
            cart: RefCell::new(cart),
            catalog: RefCell::new(Catalog::new()),
            filter: RefCell::new(FilterState::new()),
            checkout_pending,
        }
    }

    /// Widget configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The page being drawn into.
    pub fn page(&self) -> &Rc<P> {
        &self.page
    }

    /// Borrow the cart store.
    pub fn cart(&self) -> Ref<'_, CartStore> {
        self.cart.borrow()
    }

    /// Borrow the catalog.
    pub fn catalog(&self) -> Ref<'_, Catalog> {
        self.catalog.borrow()
    }

    /// Current search text and chip.
    pub fn filter(&self) -> FilterState {
        self.filter.borrow().clone()
    }

    /// Check if a checkout request is pending.
    pub fn is_checkout_pending(&self) -> bool {
        self.checkout_pending.get()
    }

    /// Fetch the catalog and draw the grid and cart.
    ///
    /// Placeholders are shown while the request is pending. On failure the
    /// grid shows an error banner with a retry control and the cart is
    /// left as it was.
    pub async fn load_products(&self) -> Result<usize, WidgetError> {
        self.mount_skeletons(self.config.skeleton_count);

        match self.api.fetch_products().await {
            Ok(products) => {
                let count = products.len();
                self.catalog.borrow_mut().replace(products);
                tracing::info!(products = count, "catalog loaded");
                self.render_products();
                self.render_cart();
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog load failed");
                self.page
                    .set_html(Slot::Grid, &render_load_error(&e.user_message()));
                self.render_cart();
                Err(e.into())
            }
        }
    }

    /// Replace the grid with `count` placeholder cards.
    pub fn mount_skeletons(&self, count: usize) {
        self.page.set_html(Slot::Grid, &render_skeletons(count));
    }

    /// Draw the grid from the catalog and reapply the current filter.
    pub fn render_products(&self) {
        let html = render_products(&self.catalog.borrow(), self.config.currency);
        self.page.set_html(Slot::Grid, &html);
        self.apply_filters();
    }

    /// Draw the cart panel from the store.
    pub fn render_cart(&self) {
        let panel = CartPanel {
            page: Rc::clone(&self.page),
            currency: self.config.currency,
            checkout_pending: Rc::clone(&self.checkout_pending),
        };
        panel.draw(self.cart.borrow().view());
    }

    /// Add one unit of a catalog product in `size`. Returns the line's
    /// new quantity.
    pub fn add_to_cart(&self, id: ProductId, size: &str) -> Result<u32, WidgetError> {
        let catalog = self.catalog.borrow();
        let product = catalog
            .get(id)
            .ok_or(CommerceError::ProductNotFound(id.get()))?;
        let qty = self.cart.borrow_mut().add(product, size)?;
        Ok(qty)
    }

    /// Remove the line bound to a removal control's key.
    pub fn remove_from_cart(&self, key: &str) -> Option<CartLine> {
        self.cart.borrow_mut().remove_by_key_str(key)
    }

    /// Update the search text and reapply filters.
    pub fn set_search(&self, text: &str) {
        self.filter.borrow_mut().search = text.to_string();
        self.apply_filters();
    }

    /// Make `chip` the only active chip and reapply filters.
    pub fn select_chip(&self, chip: BrandChip) {
        self.page.set_active_chip(&chip);
        self.filter.borrow_mut().chip = chip;
        self.apply_filters();
    }

    /// Show or hide each card according to the filter state.
    pub fn apply_filters(&self) {
        let visibility = self.filter.borrow().visibility(&self.catalog.borrow());
        let shown = visibility.iter().filter(|(_, visible)| *visible).count();
        for (id, visible) in visibility {
            self.page.set_card_visible(id, visible);
        }
        tracing::debug!(shown, "filters applied");
    }

    /// Submit the cart as an order.
    ///
    /// An empty cart is reported without sending anything. While the
    /// request is pending the checkout button is disabled and further
    /// calls return [`CheckoutOutcome::InFlight`]. On success the cart is
    /// cleared and the browser is sent to the orders page; on any failure
    /// the cart is kept and the button restored.
    pub async fn checkout(&self) -> CheckoutOutcome {
        if self.checkout_pending.get() {
            return CheckoutOutcome::InFlight;
        }

        let address = self.page.value(Field::Address);
        let payment = self.page.value(Field::Payment);
        let request = {
            let cart = self.cart.borrow();
            CheckoutRequest::from_cart(
                cart.view(),
                &address,
                self.config.payment_or_default(&payment),
            )
        };
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                let outcome = match e {
                    CommerceError::EmptyCart => CheckoutOutcome::EmptyCart,
                    other => CheckoutOutcome::Failed {
                        message: other.to_string(),
                    },
                };
                self.alert_outcome(&outcome);
                return outcome;
            }
        };

        self.set_pending(true);
        tracing::info!(
            lines = request.items.len(),
            total = request.total.amount(),
            "submitting checkout"
        );
        let result = self.api.submit_checkout(&request).await;
        self.checkout_pending.set(false);

        let outcome = match result {
            Ok(response) => CheckoutOutcome::from_response(response),
            Err(e) => {
                tracing::warn!(error = %e, "checkout request failed");
                CheckoutOutcome::Failed {
                    message: e.user_message(),
                }
            }
        };

        self.alert_outcome(&outcome);
        if let CheckoutOutcome::Placed { order_id } = &outcome {
            tracing::info!(order_id = %order_id, "order placed");
            self.cart.borrow_mut().clear();
            self.page.navigate(&self.config.orders_page);
        } else {
            tracing::info!(?outcome, "checkout not placed, cart kept");
            self.set_pending(false);
        }
        outcome
    }

    /// Fetch and draw the order history.
    pub async fn load_orders(&self) -> Result<usize, WidgetError> {
        match self.api.fetch_orders().await {
            Ok(orders) => {
                self.page.set_html(
                    Slot::Orders,
                    &render_order_history(&orders, self.config.currency),
                );
                Ok(orders.len())
            }
            Err(e) => {
                tracing::warn!(error = %e, "order history load failed");
                self.page
                    .set_html(Slot::Orders, &render_orders_error(&e.user_message()));
                Err(e.into())
            }
        }
    }

    fn set_pending(&self, pending: bool) {
        self.checkout_pending.set(pending);
        let label = if pending {
            CHECKOUT_PENDING_LABEL
        } else {
            CHECKOUT_LABEL
        };
        self.page.set_text(Slot::CheckoutButton, label);
        self.page.set_disabled(
            Slot::CheckoutButton,
            pending || self.cart.borrow().is_empty(),
        );
    }

    fn alert_outcome(&self, outcome: &CheckoutOutcome) {
        if let Some(message) = outcome.alert_message() {
            self.page.alert(&message);
        }
    }
}

/// Everything the cart subscription needs to redraw the panel.
struct CartPanel<P> {
    page: Rc<P>,
    currency: Currency,
    checkout_pending: Rc<Cell<bool>>,
}

impl<P: Page> CartPanel<P> {
    fn draw(&self, view: CartView<'_>) {
        let empty = view.is_empty();
        self.page
            .set_html(Slot::CartItems, &render_cart(view.lines(), self.currency));
        self.page
            .set_text(Slot::Total, &render_total(view.total(), self.currency));
        self.page
            .set_disabled(Slot::CheckoutButton, empty || self.checkout_pending.get());
        self.page.set_hidden(Slot::CartEmpty, !empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ClickAction, ClickTarget};
    use crate::testing::{catalog, FakeApi, FakePage};
    use clothshop_commerce::checkout::CheckoutResponse;
    use clothshop_commerce::Price;
    use clothshop_data::FetchError;
    use futures::executor::block_on;
    use futures::FutureExt;

    fn widget(api: Rc<FakeApi>) -> ShopWidget<Rc<FakeApi>, FakePage> {
        ShopWidget::new(api, Rc::new(FakePage::new()), WidgetConfig::default())
    }

    fn loaded(api: Rc<FakeApi>) -> ShopWidget<Rc<FakeApi>, FakePage> {
        let widget = widget(api);
        block_on(widget.load_products()).unwrap();
        widget
    }

    fn id(n: u64) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_load_draws_grid_and_empty_cart() {
        let api = Rc::new(FakeApi::with_products(catalog()));
        let widget = widget(Rc::clone(&api));

        let count = block_on(widget.load_products()).unwrap();

        assert_eq!(count, 4);
        let page = widget.page();
        let grid = page.html(Slot::Grid);
        assert!(grid.contains("Cotton T-Shirt"));
        assert!(grid.contains("Summer Dress"));
        assert!(page.html(Slot::CartItems).contains("Your cart is empty."));
        assert_eq!(page.text(Slot::Total), "\u{20b9}0");
        assert_eq!(page.disabled(Slot::CheckoutButton), Some(true));
        assert_eq!(page.hidden(Slot::CartEmpty), Some(false));
    }

    #[test]
    fn test_skeletons_mounted_before_fetch_resolves() {
        let api = Rc::new(FakeApi::with_products(catalog()));
        let widget = widget(api);
        block_on(widget.load_products()).unwrap();

        let grid_writes = widget.page().html_history(Slot::Grid);
        assert_eq!(grid_writes.len(), 2);
        assert_eq!(grid_writes[0].matches("skeleton-image").count(), 8);
        assert!(grid_writes[1].contains("Cotton T-Shirt"));
    }

    #[test]
    fn test_load_failure_shows_banner_and_retry_recovers() {
        let api = Rc::new(FakeApi::with_products(catalog()));
        api.fail_products(FetchError::Http {
            status: 502,
            url: "http://shop.test/api/products".to_string(),
        });
        let widget = widget(Rc::clone(&api));

        let err = block_on(widget.load_products()).unwrap_err();
        assert!(matches!(err, WidgetError::Fetch(FetchError::Http { status: 502, .. })));
        let grid = widget.page().html(Slot::Grid);
        assert!(grid.contains(r#"data-action="retry-load""#));
        assert!(grid.contains("the server answered 502"));
        assert!(widget.catalog().is_empty());

        api.set_products(Ok(catalog()));
        assert_eq!(block_on(widget.load_products()).unwrap(), 4);
        assert!(widget.page().html(Slot::Grid).contains("Cotton T-Shirt"));
        assert_eq!(api.product_calls(), 2);
    }

    #[test]
    fn test_same_product_and_size_merges() {
        let widget = loaded(Rc::new(FakeApi::with_products(catalog())));

        assert_eq!(widget.add_to_cart(id(101), "M").unwrap(), 1);
        assert_eq!(widget.add_to_cart(id(101), "M").unwrap(), 2);

        let cart = widget.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].qty, 2);
    }

    #[test]
    fn test_two_sizes_are_two_lines() {
        let widget = loaded(Rc::new(FakeApi::with_products(catalog())));

        widget.add_to_cart(id(101), "M").unwrap();
        widget.add_to_cart(id(101), "L").unwrap();

        assert_eq!(widget.cart().len(), 2);
        let items = widget.page().html(Slot::CartItems);
        assert!(items.contains(r#"data-key="101::M""#));
        assert!(items.contains(r#"data-key="101::L""#));
    }

    #[test]
    fn test_remove_unknown_key_is_noop() {
        let widget = loaded(Rc::new(FakeApi::with_products(catalog())));
        widget.add_to_cart(id(102), "32").unwrap();
        let writes_before = widget.page().html_history(Slot::CartItems).len();

        assert!(widget.remove_from_cart("102::34").is_none());
        assert!(widget.remove_from_cart("garbage").is_none());

        assert_eq!(widget.cart().len(), 1);
        assert_eq!(
            widget.page().html_history(Slot::CartItems).len(),
            writes_before
        );
    }

    #[test]
    fn test_panel_tracks_total_and_button() {
        let widget = loaded(Rc::new(FakeApi::with_products(catalog())));
        let page = Rc::clone(widget.page());

        widget.add_to_cart(id(101), "S").unwrap();
        widget.add_to_cart(id(101), "S").unwrap();
        widget.add_to_cart(id(104), "M").unwrap();
        assert_eq!(widget.cart().total(), Price::new(499 * 2 + 899));
        assert_eq!(page.text(Slot::Total), "\u{20b9}1897");
        assert_eq!(page.disabled(Slot::CheckoutButton), Some(false));
        assert_eq!(page.hidden(Slot::CartEmpty), Some(true));

        widget.remove_from_cart("101::S").unwrap();
        assert_eq!(page.text(Slot::Total), "\u{20b9}899");

        widget.remove_from_cart("104::M").unwrap();
        assert_eq!(page.text(Slot::Total), "\u{20b9}0");
        assert_eq!(page.disabled(Slot::CheckoutButton), Some(true));
        assert_eq!(page.hidden(Slot::CartEmpty), Some(false));
    }

    #[test]
    fn test_toast_only_on_successful_add() {
        let widget = loaded(Rc::new(FakeApi::with_products(catalog())));

        widget.add_to_cart(id(101), "M").unwrap();
        assert!(widget.add_to_cart(id(999), "M").is_err());
        widget.remove_from_cart("101::M");

        let toasts = widget.page().toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].0, "Added to cart");
        assert_eq!(toasts[0].1, std::time::Duration::from_millis(1200));
    }

    #[test]
    fn test_unknown_product_is_an_error() {
        let widget = loaded(Rc::new(FakeApi::with_products(catalog())));
        let err = widget.add_to_cart(id(999), "M").unwrap_err();
        assert!(matches!(
            err,
            WidgetError::Commerce(CommerceError::ProductNotFound(999))
        ));
        assert!(widget.cart().is_empty());
    }

    #[test]
    fn test_successful_checkout_clears_and_navigates() {
        let api = Rc::new(FakeApi::with_products(catalog()));
        api.set_checkout(Ok(CheckoutResponse::placed("ORD-42")));
        let widget = loaded(Rc::clone(&api));
        widget.page().set_value(Field::Address, "  12 MG Road, Pune  ");
        widget.page().set_value(Field::Payment, "UPI");
        widget.add_to_cart(id(101), "M").unwrap();
        widget.add_to_cart(id(102), "32").unwrap();

        let outcome = block_on(widget.checkout());

        assert!(outcome.is_placed());
        assert!(widget.cart().is_empty());
        assert_eq!(widget.cart().total(), Price::ZERO);
        let page = widget.page();
        assert_eq!(page.alerts(), vec!["Order placed: ORD-42".to_string()]);
        assert_eq!(page.navigations(), vec!["/orders".to_string()]);
        assert!(page.html(Slot::CartItems).contains("Your cart is empty."));
        assert_eq!(page.disabled(Slot::CheckoutButton), Some(true));

        let requests = api.checkout_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].address, "12 MG Road, Pune");
        assert_eq!(requests[0].payment, "UPI");
        assert_eq!(requests[0].total, Price::new(499 + 1499));
        assert_eq!(requests[0].items.len(), 2);
    }

    #[test]
    fn test_rejected_checkout_keeps_cart() {
        let api = Rc::new(FakeApi::with_products(catalog()));
        api.set_checkout(Ok(CheckoutResponse::rejected("address required")));
        let widget = loaded(Rc::clone(&api));
        widget.add_to_cart(id(103), "L").unwrap();
        widget.add_to_cart(id(101), "S").unwrap();
        widget.add_to_cart(id(103), "L").unwrap();
        let before = widget.cart().lines().to_vec();

        let outcome = block_on(widget.checkout());

        assert_eq!(
            outcome,
            CheckoutOutcome::Rejected {
                message: "address required".to_string()
            }
        );
        assert_eq!(widget.cart().lines(), before.as_slice());
        let page = widget.page();
        assert_eq!(page.alerts(), vec!["Failed: address required".to_string()]);
        assert!(page.navigations().is_empty());
        assert_eq!(page.disabled(Slot::CheckoutButton), Some(false));
        assert_eq!(page.text(Slot::CheckoutButton), CHECKOUT_LABEL);
    }

    #[test]
    fn test_transport_failure_keeps_cart_and_restores_button() {
        let api = Rc::new(FakeApi::with_products(catalog()));
        api.set_checkout(Err(FetchError::Connection("refused".to_string())));
        let widget = loaded(Rc::clone(&api));
        widget.add_to_cart(id(104), "S").unwrap();
        let before = widget.cart().lines().to_vec();

        let outcome = block_on(widget.checkout());

        assert!(matches!(outcome, CheckoutOutcome::Failed { .. }));
        assert_eq!(widget.cart().lines(), before.as_slice());
        let alerts = widget.page().alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("could not be reached"));
        assert!(alerts[0].contains("cart was kept"));
        assert!(!widget.is_checkout_pending());
        assert_eq!(widget.page().disabled(Slot::CheckoutButton), Some(false));
        assert_eq!(widget.page().text(Slot::CheckoutButton), CHECKOUT_LABEL);
    }

    #[test]
    fn test_empty_cart_checkout_sends_nothing() {
        let api = Rc::new(FakeApi::with_products(catalog()));
        let widget = loaded(Rc::clone(&api));

        let outcome = block_on(widget.checkout());

        assert_eq!(outcome, CheckoutOutcome::EmptyCart);
        assert!(api.checkout_requests().is_empty());
        assert_eq!(widget.page().alerts(), vec!["Cart empty".to_string()]);
        assert!(widget.page().navigations().is_empty());
    }

    #[test]
    fn test_overflowing_total_is_not_submitted() {
        let pricey =
            clothshop_commerce::catalog::Product::new(900, "Gold Jacket", "Lux", u64::MAX / 2 + 1)
                .with_sizes(["M"]);
        let api = Rc::new(FakeApi::with_products(vec![pricey]));
        let widget = loaded(Rc::clone(&api));
        widget.add_to_cart(id(900), "M").unwrap();
        widget.add_to_cart(id(900), "M").unwrap();

        let outcome = block_on(widget.checkout());

        assert!(matches!(outcome, CheckoutOutcome::Failed { .. }));
        assert!(api.checkout_requests().is_empty());
        assert_eq!(widget.cart().len(), 1);
        assert!(!widget.is_checkout_pending());
    }

    #[test]
    fn test_empty_payment_falls_back_to_default() {
        let api = Rc::new(FakeApi::with_products(catalog()));
        let widget = loaded(Rc::clone(&api));
        widget.add_to_cart(id(101), "M").unwrap();

        block_on(widget.checkout());

        assert_eq!(api.checkout_requests()[0].payment, "COD");
    }

    #[test]
    fn test_second_checkout_while_pending_is_in_flight() {
        let api = Rc::new(FakeApi::with_products(catalog()));
        api.set_checkout(Ok(CheckoutResponse::placed("ORD-9")));
        let release = api.hold_checkout();
        let widget = loaded(Rc::clone(&api));
        widget.add_to_cart(id(101), "M").unwrap();

        let mut first = Box::pin(widget.checkout());
        assert!(first.as_mut().now_or_never().is_none());
        assert!(widget.is_checkout_pending());
        assert_eq!(widget.page().disabled(Slot::CheckoutButton), Some(true));
        assert_eq!(
            widget.page().text(Slot::CheckoutButton),
            CHECKOUT_PENDING_LABEL
        );

        // Adding while pending must not re-enable the button.
        widget.add_to_cart(id(102), "30").unwrap();
        assert_eq!(widget.page().disabled(Slot::CheckoutButton), Some(true));

        assert_eq!(block_on(widget.checkout()), CheckoutOutcome::InFlight);

        release.send(()).unwrap();
        assert!(block_on(first).is_placed());
        assert_eq!(api.checkout_requests().len(), 1);
        assert!(widget.cart().is_empty());
    }

    #[test]
    fn test_chip_and_search_filter_cards() {
        let products = vec![
            clothshop_commerce::catalog::Product::new(1, "Air Max", "Nike", 9999)
                .with_sizes(["9"]),
            clothshop_commerce::catalog::Product::new(2, "Ultraboost", "Adidas", 8999)
                .with_sizes(["9"]),
        ];
        let widget = loaded(Rc::new(FakeApi::with_products(products)));
        let page = Rc::clone(widget.page());

        widget.select_chip(BrandChip::from_dataset("Nike"));
        widget.set_search("");
        assert_eq!(page.card_visible(id(1)), Some(true));
        assert_eq!(page.card_visible(id(2)), Some(false));
        assert_eq!(page.active_chip(), Some(BrandChip::Brand("Nike".to_string())));

        widget.select_chip(BrandChip::from_dataset("all"));
        widget.set_search("ultra");
        assert_eq!(page.card_visible(id(1)), Some(false));
        assert_eq!(page.card_visible(id(2)), Some(true));
        assert_eq!(page.active_chip(), Some(BrandChip::All));

        // Filtering never drops products.
        assert_eq!(widget.catalog().len(), 2);
    }

    #[test]
    fn test_clicked_chip_is_the_only_highlighted_one() {
        let page = Rc::new(FakePage::with_chips(&["", " Nike ", "Adidas"]));
        let widget = ShopWidget::new(
            Rc::new(FakeApi::with_products(catalog())),
            Rc::clone(&page),
            WidgetConfig::default(),
        );
        let click = |value: &str| {
            let target = ClickTarget {
                chip: Some(value.to_string()),
                ..ClickTarget::default()
            };
            match ClickAction::decode(&target) {
                Some(ClickAction::SelectChip(chip)) => widget.select_chip(chip),
                other => panic!("unexpected action {:?}", other),
            }
        };

        click(" Nike ");
        assert_eq!(page.highlighted_chips(), vec![" Nike ".to_string()]);
        assert_eq!(widget.filter().chip, BrandChip::Brand("Nike".to_string()));

        click("");
        assert_eq!(page.highlighted_chips(), vec![String::new()]);
        assert_eq!(widget.filter().chip, BrandChip::All);

        click("adidas");
        assert_eq!(page.highlighted_chips(), vec!["Adidas".to_string()]);
    }

    #[test]
    fn test_filter_survives_reload() {
        let api = Rc::new(FakeApi::with_products(catalog()));
        let widget = loaded(Rc::clone(&api));
        widget.set_search("jeans");

        block_on(widget.load_products()).unwrap();

        assert_eq!(widget.page().card_visible(id(102)), Some(true));
        assert_eq!(widget.page().card_visible(id(101)), Some(false));
    }

    #[test]
    fn test_orders_page() {
        let api = Rc::new(FakeApi::with_products(catalog()));
        let widget = widget(Rc::clone(&api));
        assert_eq!(block_on(widget.load_orders()).unwrap(), 0);
        assert!(widget.page().html(Slot::Orders).contains("No orders yet."));

        api.set_orders(Err(FetchError::Timeout("5s".to_string())));
        assert!(block_on(widget.load_orders()).is_err());
        assert!(widget
            .page()
            .html(Slot::Orders)
            .contains(r#"data-action="retry-orders""#));
    }
}
