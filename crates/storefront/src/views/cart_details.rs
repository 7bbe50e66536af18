//! The cart detail listing: one row per line with a line subtotal, plus
//! increment/decrement/remove passthroughs to the cart.

use rust_decimal::Decimal;
use tokio::sync::watch;

use crate::cart::CartService;
use crate::model::CartItem;

/// One rendered row of the cart listing.
#[derive(Debug, Clone)]
pub struct CartRow {
    /// The underlying cart line.
    pub item: CartItem,
    /// Quantity times unit price for this line.
    pub subtotal: Decimal,
}

/// The cart detail view.
pub struct CartDetailsView {
    cart: CartService,
    total_price: watch::Receiver<Decimal>,
    total_quantity: watch::Receiver<u32>,
}

impl CartDetailsView {
    /// Open the cart detail view.
    ///
    /// Opening republishes the current totals so the surface renders from a
    /// fresh broadcast rather than assuming one happened.
    #[must_use]
    pub fn open(cart: CartService) -> Self {
        let total_price = cart.subscribe_total_price();
        let total_quantity = cart.subscribe_total_quantity();
        cart.compute_cart_totals();

        Self {
            cart,
            total_price,
            total_quantity,
        }
    }

    /// The rows to render, in cart (insertion) order.
    #[must_use]
    pub fn rows(&self) -> Vec<CartRow> {
        self.cart
            .items()
            .into_iter()
            .map(|item| {
                let subtotal = item.subtotal();
                CartRow { item, subtotal }
            })
            .collect()
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

    /// Increment a row's quantity. Adding the same item again is how the
    /// cart expresses increment.
    pub fn increment(&self, row: &CartRow) {
        self.cart.add_to_cart(row.item.clone());
    }

    /// Decrement a row's quantity; the row disappears at zero.
    pub fn decrement(&self, row: &CartRow) {
        self.cart.decrement_quantity(row.item.id);
    }

    /// Remove a row outright.
    pub fn remove(&self, row: &CartRow) {
        self.cart.remove(row.item.id);
    }
}
