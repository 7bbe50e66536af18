//! The cart badge: live total price and quantity.

use rust_decimal::Decimal;
use tokio::sync::watch;

use crate::cart::CartService;

/// Header badge showing the running cart totals.
///
/// Holds its subscriptions for as long as it lives; dropping the view
/// releases them.
pub struct CartStatusView {
    total_price: watch::Receiver<Decimal>,
    total_quantity: watch::Receiver<u32>,
}

impl CartStatusView {
    /// Subscribe to the cart's totals. The view immediately reflects the
    /// current values, even when created after mutations.
    #[must_use]
    pub fn new(cart: &CartService) -> Self {
        Self {
            total_price: cart.subscribe_total_price(),
            total_quantity: cart.subscribe_total_quantity(),
        }
    }

    /// The latest broadcast total price.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        *self.total_price.borrow()
    }

    /// The latest broadcast total quantity.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        *self.total_quantity.borrow()
    }

    /// Wait for the next totals update.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart has been dropped.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.total_quantity.changed().await
    }
}
