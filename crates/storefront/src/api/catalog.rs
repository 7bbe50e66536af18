//! Catalog queries: products by id, by category, by keyword, and categories.
//!
//! Stateless request/response over [`ApiClient`]; the only transformation
//! here is unwrapping the backend's nested response envelope into flat lists.

use oakleaf_core::{CategoryId, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::api::{ApiClient, ApiError};
use crate::model::{Category, PageInfo, Product, ProductPage};

/// Envelope for product list responses.
#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    #[serde(rename = "_embedded")]
    embedded: EmbeddedProducts,
    #[serde(default)]
    page: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
struct EmbeddedProducts {
    products: Vec<Product>,
}

/// Envelope for category list responses.
#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(rename = "_embedded")]
    embedded: EmbeddedCategories,
}

#[derive(Debug, Deserialize)]
struct EmbeddedCategories {
    #[serde(rename = "productCategory")]
    product_category: Vec<Category>,
}

/// Client for catalog queries against the backend.
#[derive(Clone)]
pub struct CatalogClient {
    api: ApiClient,
}

impl CatalogClient {
    /// Create a new catalog client over the shared API client.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Get a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id, or another `ApiError`
    /// if the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product(&self, product_id: ProductId) -> Result<Product, ApiError> {
        self.api.get_json(&format!("products/{product_id}")).await
    }

    /// Get one page of products in a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(category_id = %category_id, page, page_size))]
    pub async fn get_product_list_paginate(
        &self,
        page: u32,
        page_size: u32,
        category_id: CategoryId,
    ) -> Result<ProductPage, ApiError> {
        let envelope: ProductsEnvelope = self
            .api
            .get_json(&format!(
                "products/search/findByCategoryId?id={category_id}&page={page}&size={page_size}"
            ))
            .await?;

        Ok(ProductPage {
            products: envelope.embedded.products,
            page: envelope.page.unwrap_or_default(),
        })
    }

    /// Get one page of products whose name contains the keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(keyword = %keyword, page, page_size))]
    pub async fn search_products_paginate(
        &self,
        page: u32,
        page_size: u32,
        keyword: &str,
    ) -> Result<ProductPage, ApiError> {
        let envelope: ProductsEnvelope = self
            .api
            .get_json(&format!(
                "products/search/findByNameContaining?name={}&page={page}&size={page_size}",
                urlencoding::encode(keyword)
            ))
            .await?;

        Ok(ProductPage {
            products: envelope.embedded.products,
            page: envelope.page.unwrap_or_default(),
        })
    }

    /// Get the full (unpaginated) product list for a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(category_id = %category_id))]
    pub async fn get_product_list(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, ApiError> {
        let envelope: ProductsEnvelope = self
            .api
            .get_json(&format!(
                "products/search/findByCategoryId?id={category_id}"
            ))
            .await?;

        Ok(envelope.embedded.products)
    }

    /// Search products by keyword, flattened to a plain list.
    ///
    /// An empty or absent keyword short-circuits to an empty result without
    /// issuing a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn search_products(
        &self,
        keyword: Option<&str>,
    ) -> Result<Vec<Product>, ApiError> {
        let Some(keyword) = keyword.filter(|k| !k.is_empty()) else {
            return Ok(Vec::new());
        };

        let envelope: ProductsEnvelope = self
            .api
            .get_json(&format!(
                "products/search/findByNameContaining?name={}",
                urlencoding::encode(keyword)
            ))
            .await?;

        Ok(envelope.embedded.products)
    }

    /// Get the full category list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_product_categories(&self) -> Result<Vec<Category>, ApiError> {
        let envelope: CategoriesEnvelope = self.api.get_json("product-category").await?;
        Ok(envelope.embedded.product_category)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    fn offline_client() -> CatalogClient {
        // Points at a closed port; any issued request would fail fast.
        CatalogClient::new(ApiClient::new(&StoreConfig {
            base_url: "http://127.0.0.1:1/api".to_string(),
            page_size: 10,
        }))
    }

    #[test]
    fn test_products_envelope_with_page_metadata() {
        let envelope: ProductsEnvelope = serde_json::from_str(
            r#"{
                "_embedded": {
                    "products": [{
                        "id": 1,
                        "name": "Crash Course in Python",
                        "unitPrice": 14.99,
                        "imageUrl": "assets/images/products/book-1000.png",
                        "active": true,
                        "unitsInStock": 100
                    }]
                },
                "page": {
                    "size": 10,
                    "totalElements": 42,
                    "totalPages": 5,
                    "number": 0
                }
            }"#,
        )
        .unwrap();

        assert_eq!(envelope.embedded.products.len(), 1);
        let page = envelope.page.unwrap();
        assert_eq!(page.size, 10);
        assert_eq!(page.total_elements, 42);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.number, 0);
    }

    #[test]
    fn test_products_envelope_without_page_metadata() {
        let envelope: ProductsEnvelope = serde_json::from_str(
            r#"{"_embedded": {"products": []}}"#,
        )
        .unwrap();

        assert!(envelope.embedded.products.is_empty());
        assert!(envelope.page.is_none());
    }

    #[test]
    fn test_categories_envelope_rel_name() {
        let envelope: CategoriesEnvelope = serde_json::from_str(
            r#"{
                "_embedded": {
                    "productCategory": [
                        {"id": 1, "categoryName": "Books"},
                        {"id": 2, "categoryName": "Coffee Mugs"}
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(envelope.embedded.product_category.len(), 2);
        assert_eq!(envelope.embedded.product_category[0].category_name, "Books");
    }

    #[tokio::test]
    async fn test_search_with_empty_keyword_issues_no_request() {
        let catalog = offline_client();

        // Would error if a request were issued against the closed port.
        let products = catalog.search_products(None).await.unwrap();
        assert!(products.is_empty());

        let products = catalog.search_products(Some("")).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_search_with_keyword_issues_request() {
        let catalog = offline_client();
        let result = catalog.search_products(Some("python")).await;
        assert!(matches!(result, Err(ApiError::Http(_))));
    }
}
