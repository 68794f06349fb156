//! Browser binding: a [`Page`] over `web-sys` and the module entry point.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::anyhow;
use clothshop_commerce::search::BrandChip;
use clothshop_commerce::ProductId;
use clothshop_data::HttpShopApi;
use clothshop_observability::{LogLevel, LogSink};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlSelectElement, Window,
};

use crate::action::{ClickAction, ClickTarget};
use crate::config::{DomIds, WidgetConfig};
use crate::error::WidgetError;
use crate::page::{Field, Page, Slot};
use crate::widget::ShopWidget;

/// Id of the optional `<script type="application/json">` config element.
pub const CONFIG_ELEMENT_ID: &str = "shop-config";

type BrowserWidget = ShopWidget<HttpShopApi, DomPage>;

/// Writes log lines to the devtools console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: LogLevel, line: &str) {
        let line = JsValue::from_str(line);
        match level {
            LogLevel::Error => web_sys::console::error_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Info => web_sys::console::info_1(&line),
            LogLevel::Debug | LogLevel::Trace => web_sys::console::debug_1(&line),
        }
    }
}

/// The live document.
pub struct DomPage {
    window: Window,
    document: Document,
    ids: DomIds,
    toast_timer: Cell<Option<i32>>,
}

impl DomPage {
    /// Bind to the current window.
    pub fn from_window(ids: DomIds) -> Result<Self, WidgetError> {
        let window = web_sys::window().ok_or_else(|| WidgetError::Dom("window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| WidgetError::Dom("document".to_string()))?;
        Ok(Self {
            window,
            document,
            ids,
            toast_timer: Cell::new(None),
        })
    }

    fn slot_id(&self, slot: Slot) -> &str {
        match slot {
            Slot::Grid => &self.ids.grid,
            Slot::CartItems => &self.ids.cart_items,
            Slot::Total => &self.ids.total,
            Slot::CartEmpty => &self.ids.cart_empty,
            Slot::CheckoutButton => &self.ids.checkout_button,
            Slot::Orders => &self.ids.orders,
        }
    }

    fn field_id(&self, field: Field) -> &str {
        match field {
            Field::Address => &self.ids.address,
            Field::Payment => &self.ids.payment,
            Field::Search => &self.ids.search,
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn has(&self, slot: Slot) -> bool {
        self.element(self.slot_id(slot)).is_some()
    }

    /// Value of the size selector on a product card.
    fn selected_size(&self, id: ProductId) -> String {
        self.element(&format!("size-{}", id))
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
            .unwrap_or_default()
    }

    fn chip_value(&self, chip: &Element) -> String {
        chip.get_attribute(&format!("data-{}", self.ids.chip_dataset_key))
            .unwrap_or_default()
    }
}

impl Page for DomPage {
    fn set_html(&self, slot: Slot, html: &str) {
        if let Some(el) = self.element(self.slot_id(slot)) {
            el.set_inner_html(html);
        }
    }

    fn set_text(&self, slot: Slot, text: &str) {
        if let Some(el) = self.element(self.slot_id(slot)) {
            el.set_text_content(Some(text));
        }
    }

    fn set_disabled(&self, slot: Slot, disabled: bool) {
        let Some(el) = self.element(self.slot_id(slot)) else {
            return;
        };
        match el.dyn_into::<HtmlButtonElement>() {
            Ok(button) => button.set_disabled(disabled),
            Err(el) => {
                let _ = if disabled {
                    el.set_attribute("disabled", "")
                } else {
                    el.remove_attribute("disabled")
                };
            }
        }
    }

    fn set_hidden(&self, slot: Slot, hidden: bool) {
        if let Some(el) = self
            .element(self.slot_id(slot))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            el.set_hidden(hidden);
        }
    }

    fn value(&self, field: Field) -> String {
        let Some(el) = self.element(self.field_id(field)) else {
            return String::new();
        };
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => input.value(),
            Err(el) => el
                .dyn_into::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default(),
        }
    }

    fn set_card_visible(&self, id: ProductId, visible: bool) {
        let selector = format!("#{} .card[data-product-id=\"{}\"]", self.ids.grid, id);
        let Ok(Some(card)) = self.document.query_selector(&selector) else {
            return;
        };
        if let Ok(card) = card.dyn_into::<HtmlElement>() {
            let style = card.style();
            let _ = if visible {
                style.remove_property("display").map(|_| ())
            } else {
                style.set_property("display", "none")
            };
        }
    }

    fn set_active_chip(&self, chip: &BrandChip) {
        let Ok(chips) = self.document.query_selector_all(&self.ids.chip_selector) else {
            return;
        };
        for i in 0..chips.length() {
            let Some(el) = chips.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let active = chip.matches_dataset(&self.chip_value(&el));
            let _ = el.class_list().toggle_with_force("active", active);
        }
    }

    fn show_toast(&self, message: &str, duration: Duration) {
        let Some(toast) = self.element(&self.ids.toast) else {
            return;
        };
        toast.set_text_content(Some(message));
        let _ = toast.class_list().add_1("show");

        if let Some(handle) = self.toast_timer.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        let hide = Closure::once_into_js(move || {
            let _ = toast.class_list().remove_1("show");
        });
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        if let Ok(handle) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.unchecked_ref::<js_sys::Function>(),
                millis,
            )
        {
            self.toast_timer.set(Some(handle));
        }
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn navigate(&self, path: &str) {
        let _ = self.window.location().set_href(path);
    }
}

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    mount().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn mount() -> anyhow::Result<()> {
    let mut config = read_config()?;
    if let Err(e) = clothshop_observability::init_with_sink(&config.logging, ConsoleSink) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }

    let page = DomPage::from_window(config.dom.clone())?;
    if config.api.base_url.trim().is_empty() {
        config.api.base_url = page
            .window
            .location()
            .origin()
            .map_err(|_| anyhow!("page origin is not readable"))?;
    }

    let on_shop_page = page.has(Slot::Grid);
    let on_orders_page = page.has(Slot::Orders);
    if !on_shop_page && !on_orders_page {
        return Err(WidgetError::Dom(config.dom.grid.clone()).into());
    }

    let api = HttpShopApi::new(config.api.clone());
    let widget = Rc::new(ShopWidget::new(api, Rc::new(page), config));
    bind_events(&widget)?;

    if on_shop_page {
        spawn_load_products(Rc::clone(&widget));
    }
    if on_orders_page {
        spawn_load_orders(Rc::clone(&widget));
    }
    tracing::info!(on_shop_page, on_orders_page, "shop widget mounted");
    Ok(())
}

/// Read the inline JSON config, falling back to defaults.
fn read_config() -> anyhow::Result<WidgetConfig> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match text {
        Some(text) if !text.trim().is_empty() => WidgetConfig::from_json(&text),
        _ => Ok(WidgetConfig::default()),
    }
}

fn spawn_load_products(widget: Rc<BrowserWidget>) {
    spawn_local(async move {
        // The grid already shows the error banner.
        let _ = widget.load_products().await;
    });
}

fn spawn_load_orders(widget: Rc<BrowserWidget>) {
    spawn_local(async move {
        let _ = widget.load_orders().await;
    });
}

/// One delegated click listener and one search listener on the document.
fn bind_events(widget: &Rc<BrowserWidget>) -> anyhow::Result<()> {
    let document = widget.page().document.clone();

    let on_click = {
        let widget = Rc::clone(widget);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| handle_click(&widget, &event))
    };
    document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|_| anyhow!("could not listen for clicks"))?;
    on_click.forget();

    let on_input = {
        let widget = Rc::clone(widget);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let search_id = &widget.config().dom.search;
            let from_search = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map_or(false, |el| el.id() == *search_id);
            if from_search {
                widget.set_search(&widget.page().value(Field::Search));
            }
        })
    };
    document
        .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
        .map_err(|_| anyhow!("could not listen for input"))?;
    on_input.forget();

    Ok(())
}

fn handle_click(widget: &Rc<BrowserWidget>, event: &Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let Some(action) = ClickAction::decode(&click_target(widget, &target)) else {
        return;
    };
    if action.prevents_default() {
        event.prevent_default();
    }

    match action {
        ClickAction::Checkout => {
            let widget = Rc::clone(widget);
            spawn_local(async move {
                widget.checkout().await;
            });
        }
        ClickAction::SelectChip(chip) => widget.select_chip(chip),
        ClickAction::Add(id) => {
            let size = widget.page().selected_size(id);
            if let Err(e) = widget.add_to_cart(id, &size) {
                tracing::warn!(product_id = id.get(), error = %e, "add to cart failed");
            }
        }
        ClickAction::Remove(key) => {
            widget.remove_from_cart(&key);
        }
        ClickAction::RetryLoad => spawn_load_products(Rc::clone(widget)),
        ClickAction::RetryOrders => spawn_load_orders(Rc::clone(widget)),
    }
}

/// Read the attributes [`ClickAction::decode`] needs from around `target`.
fn click_target(widget: &BrowserWidget, target: &Element) -> ClickTarget {
    let dom = &widget.config().dom;
    let control = closest(target, "[data-action]");
    let attr = |name: &str| control.as_ref().and_then(|el| el.get_attribute(name));
    ClickTarget {
        checkout: closest(target, &format!("#{}", dom.checkout_button)).is_some(),
        chip: closest(target, &dom.chip_selector).map(|chip| widget.page().chip_value(&chip)),
        action: attr("data-action"),
        product_id: attr("data-product-id"),
        key: attr("data-key"),
    }
}

fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}
