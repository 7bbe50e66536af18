//! The application container.
//!
//! Builds every service once over one shared HTTP client and hands out
//! clones. Services have process-wide lifetime through the container rather
//! than ambient global state.

use std::sync::Arc;

use crate::api::{ApiClient, CatalogClient, CheckoutClient, FormDataClient};
use crate::cart::CartService;
use crate::config::StoreConfig;

/// The wired-up storefront: config, clients, and the session cart.
///
/// Cheaply cloneable; all clones share the same services.
#[derive(Clone)]
pub struct Shop {
    inner: Arc<ShopInner>,
}

struct ShopInner {
    config: StoreConfig,
    catalog: CatalogClient,
    form_data: FormDataClient,
    checkout: CheckoutClient,
    cart: CartService,
}

impl Shop {
    /// Wire the storefront from its configuration.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        let api = ApiClient::new(&config);

        Self {
            inner: Arc::new(ShopInner {
                catalog: CatalogClient::new(api.clone()),
                form_data: FormDataClient::new(api.clone()),
                checkout: CheckoutClient::new(api),
                cart: CartService::new(),
                config,
            }),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Catalog queries.
    #[must_use]
    pub fn catalog(&self) -> CatalogClient {
        self.inner.catalog.clone()
    }

    /// Checkout form reference data.
    #[must_use]
    pub fn form_data(&self) -> FormDataClient {
        self.inner.form_data.clone()
    }

    /// Order submission.
    #[must_use]
    pub fn checkout(&self) -> CheckoutClient {
        self.inner.checkout.clone()
    }

    /// The session cart.
    #[must_use]
    pub fn cart(&self) -> CartService {
        self.inner.cart.clone()
    }
}
