//! The cart store.
//!
//! Holds the authoritative list of cart lines for the page lifetime and
//! notifies subscribers synchronously after every mutation.

use crate::cart::{CartLine, LineKey};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::SubscriptionId;
use crate::money::Price;
use std::fmt;

/// A mutation that happened to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A line was created or its quantity incremented; `qty` is the new quantity.
    Added { key: LineKey, qty: u32 },
    /// A line was removed.
    Removed { key: LineKey },
    /// All lines were dropped.
    Cleared,
}

/// Borrowed, read-only view of the cart handed to subscribers.
#[derive(Debug, Clone, Copy)]
pub struct CartView<'a> {
    lines: &'a [CartLine],
}

impl<'a> CartView<'a> {
    /// Lines in insertion order.
    pub fn lines(&self) -> &'a [CartLine] {
        self.lines
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.qty)).sum()
    }

    /// Σ price × qty, clamped on overflow.
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Exact total, or [`CommerceError::Overflow`] if it does not fit in a `u64`.
    pub fn checked_total(&self) -> Result<Price, CommerceError> {
        self.lines
            .iter()
            .map(|l| l.price.try_multiply(l.qty))
            .collect::<Option<Vec<_>>>()
            .and_then(|subtotals| Price::try_sum(subtotals))
            .ok_or(CommerceError::Overflow)
    }
}

type Listener = Box<dyn Fn(&CartEvent, CartView<'_>)>;

/// In-memory cart with merge-on-add semantics.
///
/// Invariants: lines keep insertion order, no two lines share a
/// [`LineKey`], and every quantity is at least 1.
#[derive(Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product` in `size`.
    ///
    /// Increments the existing line with the same key or appends a new
    /// snapshot line. The size is not checked against the product's sizes.
    /// Returns the resulting quantity of the line.
    pub fn add(&mut self, product: &Product, size: &str) -> Result<u32, CommerceError> {
        let key = LineKey::new(product.id, size);

        let qty = match self.lines.iter_mut().find(|l| l.matches(&key)) {
            Some(existing) => existing.increment()?,
            None => {
                self.lines.push(CartLine::from_product(product, size));
                1
            }
        };

        tracing::debug!(key = %key, qty, "cart line added");
        self.notify(&CartEvent::Added { key, qty });
        Ok(qty)
    }

    /// Remove the line with `key`. Unknown keys are a no-op.
    pub fn remove(&mut self, key: &LineKey) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.matches(key))?;
        let removed = self.lines.remove(index);

        tracing::debug!(key = %key, "cart line removed");
        self.notify(&CartEvent::Removed { key: key.clone() });
        Some(removed)
    }

    /// Remove by the `"{id}::{size}"` string a removal control carries.
    ///
    /// Strings that do not parse as a key match no line and are a no-op.
    pub fn remove_by_key_str(&mut self, key: &str) -> Option<CartLine> {
        match LineKey::parse(key) {
            Ok(key) => self.remove(&key),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring removal of unparseable key");
                None
            }
        }
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        tracing::debug!("cart cleared");
        self.notify(&CartEvent::Cleared);
    }

    /// Σ price × qty over all lines.
    pub fn total(&self) -> Price {
        self.view().total()
    }

    /// Exact total, or an error if it does not fit in a `u64`.
    pub fn checked_total(&self) -> Result<Price, CommerceError> {
        self.view().checked_total()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by key.
    pub fn get(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.matches(key))
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.view().item_count()
    }

    /// Read-only view of the current lines.
    pub fn view(&self) -> CartView<'_> {
        CartView { lines: &self.lines }
    }

    /// Register a listener called after every mutation.
    ///
    /// Listeners run synchronously in subscription order and must not
    /// mutate the store they observe.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartEvent, CartView<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < len_before
    }

    fn notify(&self, event: &CartEvent) {
        let view = self.view();
        for (_, listener) in &self.listeners {
            listener(event, view);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
