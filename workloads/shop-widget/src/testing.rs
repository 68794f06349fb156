//! Test doubles for the page and the shop server.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use async_trait::async_trait;
use clothshop_commerce::catalog::Product;
use clothshop_commerce::checkout::{CheckoutRequest, CheckoutResponse, OrderSummary};
use clothshop_commerce::search::BrandChip;
use clothshop_commerce::ProductId;
use clothshop_data::{FetchError, ShopApi};
use futures::channel::oneshot;

use crate::page::{Field, Page, Slot};

/// The four products the demo server falls back to.
pub fn catalog() -> Vec<Product> {
    vec![
        Product::new(101, "Cotton T-Shirt", "UrbanCo", 499)
            .with_img("/static/img/tee.jpg")
            .with_sizes(["S", "M", "L"]),
        Product::new(102, "Slim Fit Jeans", "DenimX", 1499)
            .with_img("/static/img/jeans.jpg")
            .with_sizes(["30", "32", "34"]),
        Product::new(103, "Athleisure Hoodie", "Move", 1299)
            .with_img("/static/img/hoodie.jpg")
            .with_sizes(["M", "L", "XL"]),
        Product::new(104, "Summer Dress", "Flora", 899)
            .with_img("/static/img/dress.jpg")
            .with_sizes(["S", "M", "L"]),
    ]
}

/// Records everything the widget does to the page.
#[derive(Default)]
pub struct FakePage {
    html: RefCell<Vec<(Slot, String)>>,
    text: RefCell<HashMap<Slot, String>>,
    disabled: RefCell<HashMap<Slot, bool>>,
    hidden: RefCell<HashMap<Slot, bool>>,
    values: RefCell<HashMap<Field, String>>,
    cards: RefCell<BTreeMap<ProductId, bool>>,
    active_chip: RefCell<Option<BrandChip>>,
    chips: Vec<String>,
    toasts: RefCell<Vec<(String, Duration)>>,
    alerts: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page whose chip bar carries these dataset values.
    pub fn with_chips(values: &[&str]) -> Self {
        Self {
            chips: values.iter().map(|v| v.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn set_value(&self, field: Field, value: &str) {
        self.values.borrow_mut().insert(field, value.to_string());
    }

    /// Latest markup of a slot.
    pub fn html(&self, slot: Slot) -> String {
        self.html_history(slot).pop().unwrap_or_default()
    }

    /// Every markup write to a slot, oldest first.
    pub fn html_history(&self, slot: Slot) -> Vec<String> {
        self.html
            .borrow()
            .iter()
            .filter(|(s, _)| *s == slot)
            .map(|(_, html)| html.clone())
            .collect()
    }

    pub fn text(&self, slot: Slot) -> String {
        self.text.borrow().get(&slot).cloned().unwrap_or_default()
    }

    pub fn disabled(&self, slot: Slot) -> Option<bool> {
        self.disabled.borrow().get(&slot).copied()
    }

    pub fn hidden(&self, slot: Slot) -> Option<bool> {
        self.hidden.borrow().get(&slot).copied()
    }

    pub fn card_visible(&self, id: ProductId) -> Option<bool> {
        self.cards.borrow().get(&id).copied()
    }

    pub fn active_chip(&self) -> Option<BrandChip> {
        self.active_chip.borrow().clone()
    }

    /// Dataset values of the chips drawn as active.
    pub fn highlighted_chips(&self) -> Vec<String> {
        let active = self.active_chip.borrow();
        self.chips
            .iter()
            .filter(|value| active.as_ref().map_or(false, |chip| chip.matches_dataset(value)))
            .cloned()
            .collect()
    }

    pub fn toasts(&self) -> Vec<(String, Duration)> {
        self.toasts.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl Page for FakePage {
    fn set_html(&self, slot: Slot, html: &str) {
        self.html.borrow_mut().push((slot, html.to_string()));
    }

    fn set_text(&self, slot: Slot, text: &str) {
        self.text.borrow_mut().insert(slot, text.to_string());
    }

    fn set_disabled(&self, slot: Slot, disabled: bool) {
        self.disabled.borrow_mut().insert(slot, disabled);
    }

    fn set_hidden(&self, slot: Slot, hidden: bool) {
        self.hidden.borrow_mut().insert(slot, hidden);
    }

    fn value(&self, field: Field) -> String {
        self.values.borrow().get(&field).cloned().unwrap_or_default()
    }

    fn set_card_visible(&self, id: ProductId, visible: bool) {
        self.cards.borrow_mut().insert(id, visible);
    }

    fn set_active_chip(&self, chip: &BrandChip) {
        *self.active_chip.borrow_mut() = Some(chip.clone());
    }

    fn show_toast(&self, message: &str, duration: Duration) {
        self.toasts.borrow_mut().push((message.to_string(), duration));
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn navigate(&self, path: &str) {
        self.navigations.borrow_mut().push(path.to_string());
    }
}

/// Canned server replies plus a log of checkout requests.
pub struct FakeApi {
    products: RefCell<Result<Vec<Product>, FetchError>>,
    checkout: RefCell<Result<CheckoutResponse, FetchError>>,
    orders: RefCell<Result<Vec<OrderSummary>, FetchError>>,
    checkout_gate: RefCell<Option<oneshot::Receiver<()>>>,
    checkout_requests: RefCell<Vec<CheckoutRequest>>,
    product_calls: Cell<usize>,
}

impl FakeApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RefCell::new(Ok(products)),
            checkout: RefCell::new(Ok(CheckoutResponse::placed("ORD-1"))),
            orders: RefCell::new(Ok(Vec::new())),
            checkout_gate: RefCell::new(None),
            checkout_requests: RefCell::new(Vec::new()),
            product_calls: Cell::new(0),
        }
    }

    pub fn set_products(&self, products: Result<Vec<Product>, FetchError>) {
        *self.products.borrow_mut() = products;
    }

    pub fn fail_products(&self, error: FetchError) {
        self.set_products(Err(error));
    }

    pub fn set_checkout(&self, reply: Result<CheckoutResponse, FetchError>) {
        *self.checkout.borrow_mut() = reply;
    }

    pub fn set_orders(&self, orders: Result<Vec<OrderSummary>, FetchError>) {
        *self.orders.borrow_mut() = orders;
    }

    /// Make the next checkout wait until the returned sender fires.
    pub fn hold_checkout(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.checkout_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn checkout_requests(&self) -> Vec<CheckoutRequest> {
        self.checkout_requests.borrow().clone()
    }

    pub fn product_calls(&self) -> usize {
        self.product_calls.get()
    }
}

#[async_trait(?Send)]
impl ShopApi for FakeApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.product_calls.set(self.product_calls.get() + 1);
        self.products.borrow().clone()
    }

    async fn submit_checkout(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutResponse, FetchError> {
        self.checkout_requests.borrow_mut().push(request.clone());
        let gate = self.checkout_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.checkout.borrow().clone()
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderSummary>, FetchError> {
        self.orders.borrow().clone()
    }
}
