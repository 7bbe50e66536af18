//! Client-visible routes.
//!
//! The storefront does not own navigation; surfaces and the checkout
//! controller *issue* these as requests for whatever shell hosts them.

use oakleaf_core::{CategoryId, ProductId};

/// A navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Product listing, optionally filtered by category.
    Products {
        /// Category filter, if any.
        category: Option<CategoryId>,
    },
    /// Product detail by id.
    ProductDetail(ProductId),
    /// Search results for a keyword.
    Search(String),
    /// Cart detail listing.
    CartDetails,
    /// Checkout form.
    Checkout,
}

impl Route {
    /// The route rendered as a path, keyword segment URL-encoded.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Products { category: None } => "/products".to_string(),
            Self::Products {
                category: Some(category),
            } => format!("/category/{category}"),
            Self::ProductDetail(id) => format!("/products/{id}"),
            Self::Search(keyword) => format!("/search/{}", urlencoding::encode(keyword)),
            Self::CartDetails => "/cart-details".to_string(),
            Self::Checkout => "/checkout".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Products { category: None }.path(), "/products");
        assert_eq!(
            Route::Products {
                category: Some(CategoryId::new(2))
            }
            .path(),
            "/category/2"
        );
        assert_eq!(Route::ProductDetail(ProductId::new(7)).path(), "/products/7");
        assert_eq!(Route::CartDetails.path(), "/cart-details");
        assert_eq!(Route::Checkout.path(), "/checkout");
    }

    #[test]
    fn test_search_path_is_encoded() {
        assert_eq!(
            Route::Search("coffee mug".to_string()).path(),
            "/search/coffee%20mug"
        );
    }
}
