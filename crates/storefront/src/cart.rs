//! Session cart with derived totals broadcast to display surfaces.
//!
//! The cart owns the ordered item list; `total_price` and `total_quantity`
//! are always recomputed from it, never mutated independently. Totals are
//! published over `tokio::sync::watch` channels, so a late subscriber
//! immediately observes the most recent value. All mutation goes through
//! this service; subscribers only read.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use oakleaf_core::ProductId;
use rust_decimal::Decimal;
use tokio::sync::watch;

use crate::model::CartItem;

/// The session cart service.
///
/// Cheaply cloneable; every clone shares the same item list and totals.
#[derive(Clone)]
pub struct CartService {
    inner: Arc<Mutex<CartInner>>,
}

struct CartInner {
    items: Vec<CartItem>,
    total_price: watch::Sender<Decimal>,
    total_quantity: watch::Sender<u32>,
}

impl CartService {
    /// Create an empty cart with both totals at zero.
    #[must_use]
    pub fn new() -> Self {
        let (total_price, _) = watch::channel(Decimal::ZERO);
        let (total_quantity, _) = watch::channel(0);

        Self {
            inner: Arc::new(Mutex::new(CartInner {
                items: Vec::new(),
                total_price,
                total_quantity,
            })),
        }
    }

    fn locked(&self) -> MutexGuard<'_, CartInner> {
        // A poisoned lock can only leave the last written state behind;
        // recover with it rather than propagating the panic.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add an item to the cart.
    ///
    /// If an item with the same identity (product id) is already present,
    /// its quantity is incremented by one; otherwise the item is appended
    /// with its own quantity. Totals are recomputed and republished.
    pub fn add_to_cart(&self, item: CartItem) {
        let mut inner = self.locked();

        if let Some(existing) = inner.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity += 1;
        } else {
            inner.items.push(item);
        }

        inner.compute_cart_totals();
    }

    /// Decrement an item's quantity by one.
    ///
    /// At quantity zero the item is removed entirely rather than retained as
    /// a zero-quantity row. Unknown ids are a no-op.
    pub fn decrement_quantity(&self, product_id: ProductId) {
        let mut inner = self.locked();

        let Some(item) = inner.items.iter_mut().find(|line| line.id == product_id) else {
            return;
        };

        item.quantity -= 1;
        let remaining = item.quantity;

        if remaining == 0 {
            inner.remove(product_id);
        } else {
            inner.compute_cart_totals();
        }
    }

    /// Remove an item by identity. No-op when the item is not present.
    pub fn remove(&self, product_id: ProductId) {
        self.locked().remove(product_id);
    }

    /// Recompute both totals from the item list and republish them.
    ///
    /// The single source of truth for totals; display surfaces never compute
    /// them independently.
    pub fn compute_cart_totals(&self) {
        self.locked().compute_cart_totals();
    }

    /// Empty the cart and reset both totals to zero.
    pub fn clear(&self) {
        let mut inner = self.locked();
        inner.items.clear();
        inner.total_price.send_replace(Decimal::ZERO);
        inner.total_quantity.send_replace(0);
    }

    /// Snapshot of the current items, in insertion (display) order.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.locked().items.clone()
    }

    /// The most recently published total price.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        *self.locked().total_price.borrow()
    }

    /// The most recently published total quantity.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        *self.locked().total_quantity.borrow()
    }

    /// Subscribe to total price updates.
    ///
    /// The receiver immediately holds the latest value.
    #[must_use]
    pub fn subscribe_total_price(&self) -> watch::Receiver<Decimal> {
        self.locked().total_price.subscribe()
    }

    /// Subscribe to total quantity updates.
    ///
    /// The receiver immediately holds the latest value.
    #[must_use]
    pub fn subscribe_total_quantity(&self) -> watch::Receiver<u32> {
        self.locked().total_quantity.subscribe()
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}

impl CartInner {
    fn remove(&mut self, product_id: ProductId) {
        let Some(index) = self.items.iter().position(|line| line.id == product_id) else {
            return;
        };

        self.items.remove(index);
        self.compute_cart_totals();
    }

    fn compute_cart_totals(&mut self) {
        let mut total_price = Decimal::ZERO;
        let mut total_quantity = 0u32;

        for item in &self.items {
            total_price += item.subtotal();
            total_quantity += item.quantity;
        }

        self.total_price.send_replace(total_price);
        self.total_quantity.send_replace(total_quantity);
        self.log_cart_contents(total_price, total_quantity);
    }

    fn log_cart_contents(&self, total_price: Decimal, total_quantity: u32) {
        tracing::debug!("Contents of the cart:");
        for item in &self.items {
            tracing::debug!(
                name = %item.name,
                quantity = item.quantity,
                unit_price = %item.unit_price,
                subtotal = %item.subtotal(),
                "cart line"
            );
        }
        tracing::debug!(
            total_price = %total_price.round_dp(2),
            total_quantity,
            "cart totals"
        );
    }
}
