//! Order submission: POST the checkout aggregate, get back a tracking number.

use tracing::instrument;

use crate::api::{ApiClient, ApiError};
use crate::model::{OrderConfirmation, Purchase};

/// Client for submitting a completed purchase.
#[derive(Clone)]
pub struct CheckoutClient {
    api: ApiClient,
}

impl CheckoutClient {
    /// Create a new checkout client over the shared API client.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submit the purchase aggregate.
    ///
    /// No retry and no local recovery; a transport or API error surfaces
    /// untouched so the caller can present it and leave state unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, purchase), fields(order_items = purchase.order_items.len()))]
    pub async fn place_order(&self, purchase: &Purchase) -> Result<OrderConfirmation, ApiError> {
        self.api.post_json("checkout/purchase", purchase).await
    }
}
