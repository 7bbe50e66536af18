//! The paginated product listing, shared by category browsing and keyword
//! search.

use oakleaf_core::CategoryId;

use crate::api::{ApiError, CatalogClient};
use crate::cart::CartService;
use crate::fetch::RequestSequence;
use crate::model::{CartItem, PageInfo, Product, ProductPage};

/// What the listing is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ListingMode {
    /// Products in a category.
    Category(CategoryId),
    /// Products matching a keyword.
    Search(String),
}

/// The product listing view.
///
/// Switching category or keyword resets to the first page. A page fetch that
/// resolves after a newer one was issued is dropped (last-request-wins), so
/// rapid navigation never renders a stale page.
pub struct ProductListView {
    catalog: CatalogClient,
    cart: CartService,
    page_size: u32,
    fetches: RequestSequence,
    mode: Option<ListingMode>,
    products: Vec<Product>,
    page: PageInfo,
}

impl ProductListView {
    /// Create the view; no fetch is issued until a listing is requested.
    #[must_use]
    pub fn new(catalog: CatalogClient, cart: CartService, page_size: u32) -> Self {
        Self {
            catalog,
            cart,
            page_size,
            fetches: RequestSequence::new(),
            mode: None,
            products: Vec::new(),
            page: PageInfo::default(),
        }
    }

    /// Show the first page of a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_category(&mut self, category_id: CategoryId) -> Result<(), ApiError> {
        self.switch_mode(ListingMode::Category(category_id));
        self.load_page(0).await
    }

    /// Show the first page of search results for a keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_search(&mut self, keyword: &str) -> Result<(), ApiError> {
        self.switch_mode(ListingMode::Search(keyword.to_string()));
        self.load_page(0).await
    }

    /// Load a specific page of the current listing. No-op before a listing
    /// mode has been chosen.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn load_page(&mut self, page: u32) -> Result<(), ApiError> {
        let Some(mode) = self.mode.clone() else {
            return Ok(());
        };

        let ticket = self.fetches.begin();
        let result = match &mode {
            ListingMode::Category(category_id) => {
                self.catalog
                    .get_product_list_paginate(page, self.page_size, *category_id)
                    .await?
            }
            ListingMode::Search(keyword) => {
                self.catalog
                    .search_products_paginate(page, self.page_size, keyword)
                    .await?
            }
        };

        if ticket.is_current() {
            self.apply(result);
        }
        Ok(())
    }

    /// Advance to the next page, if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn next_page(&mut self) -> Result<(), ApiError> {
        if self.page.number + 1 < self.page.total_pages {
            self.load_page(self.page.number + 1).await?;
        }
        Ok(())
    }

    /// The products on the current page.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Pagination metadata for the current page.
    #[must_use]
    pub const fn page(&self) -> PageInfo {
        self.page
    }

    /// Add a listed product to the cart.
    pub fn add_to_cart(&self, product: &Product) {
        tracing::debug!(name = %product.name, unit_price = %product.unit_price, "Adding to cart");
        self.cart.add_to_cart(CartItem::from(product));
    }

    fn switch_mode(&mut self, mode: ListingMode) {
        if self.mode.as_ref() != Some(&mode) {
            self.mode = Some(mode);
            self.page = PageInfo::default();
        }
    }

    fn apply(&mut self, result: ProductPage) {
        self.products = result.products;
        self.page = result.page;
    }
}
