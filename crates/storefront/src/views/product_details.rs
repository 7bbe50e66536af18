//! The product detail page.

use oakleaf_core::ProductId;

use crate::api::{ApiError, CatalogClient};
use crate::cart::CartService;
use crate::fetch::RequestSequence;
use crate::model::{CartItem, Product};

/// Detail page for a single product.
///
/// Navigating to another product before the current fetch resolves supersedes
/// it; the stale result is dropped instead of overwriting the newer one.
pub struct ProductDetailsView {
    catalog: CatalogClient,
    cart: CartService,
    fetches: RequestSequence,
    product: Option<Product>,
}

impl ProductDetailsView {
    /// Create the view; no fetch is issued until [`show`](Self::show).
    #[must_use]
    pub fn new(catalog: CatalogClient, cart: CartService) -> Self {
        Self {
            catalog,
            cart,
            fetches: RequestSequence::new(),
            product: None,
        }
    }

    /// Fetch and display a product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id, or another `ApiError`
    /// if the request fails. A superseded fetch reports its error but never
    /// touches the displayed product.
    pub async fn show(&mut self, product_id: ProductId) -> Result<(), ApiError> {
        let ticket = self.fetches.begin();
        let product = self.catalog.get_product(product_id).await?;

        if ticket.is_current() {
            self.product = Some(product);
        }
        Ok(())
    }

    /// The currently displayed product, if one has loaded.
    #[must_use]
    pub const fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Add the displayed product to the cart. No-op before a product loads.
    pub fn add_to_cart(&self) {
        let Some(product) = &self.product else {
            return;
        };

        tracing::debug!(name = %product.name, unit_price = %product.unit_price, "Adding to cart");
        self.cart.add_to_cart(CartItem::from(product));
    }
}
