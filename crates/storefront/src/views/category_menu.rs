//! The category sidebar menu.

use crate::api::{ApiError, CatalogClient};
use crate::model::Category;
use crate::routes::Route;

/// Sidebar listing every product category as a navigation entry.
pub struct CategoryMenuView {
    categories: Vec<Category>,
}

impl CategoryMenuView {
    /// Load the menu from the category list.
    ///
    /// # Errors
    ///
    /// Returns an error if the category request fails.
    pub async fn load(catalog: &CatalogClient) -> Result<Self, ApiError> {
        let categories = catalog.get_product_categories().await?;
        Ok(Self { categories })
    }

    /// The categories to render, in backend order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The navigation request for a menu entry.
    #[must_use]
    pub fn route_for(category: &Category) -> Route {
        Route::Products {
            category: Some(category.id),
        }
    }
}
