//! Domain types for the Oakleaf backend API.
//!
//! Plain data holders with the camelCase wire names the backend uses.
//! Catalog and reference records are immutable once fetched; the checkout
//! aggregate ([`Purchase`]) is assembled fresh for every submission.

use chrono::{DateTime, Utc};
use oakleaf_core::{CategoryId, CountryId, Email, ProductId, StateId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Types
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Stock keeping unit.
    #[serde(default)]
    pub sku: Option<String>,
    /// Display name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Image URL.
    pub image_url: String,
    /// Whether the product is available for sale.
    pub active: bool,
    /// Units currently in stock.
    pub units_in_stock: i32,
    /// When the product was first created.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    /// When the product was last updated.
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub category_name: String,
}

/// Page metadata attached to paginated list responses.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Requested page size.
    pub size: u32,
    /// Total number of elements across all pages.
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u32,
    /// Current page number (zero-based).
    pub number: u32,
}

/// A page of products with its pagination metadata.
#[derive(Debug, Clone, Default)]
pub struct ProductPage {
    /// Products on this page.
    pub products: Vec<Product>,
    /// Page metadata.
    pub page: PageInfo,
}

// =============================================================================
// Reference Data Types
// =============================================================================

/// A country available for shipping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Country ID.
    pub id: CountryId,
    /// ISO-style country code (e.g., "BE").
    pub code: String,
    /// Display name.
    pub name: String,
}

/// A state or province within a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// State ID.
    pub id: StateId,
    /// Display name.
    pub name: String,
}

// =============================================================================
// Cart Types
// =============================================================================

/// An item in the session cart.
///
/// Derived from a [`Product`] at add-time. Identity is the product id, not
/// object identity; two cart items with the same id are the same line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID (cart line identity).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Image URL.
    pub image_url: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Quantity in the cart.
    pub quantity: u32,
}

impl CartItem {
    /// Line subtotal: quantity times unit price.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            unit_price: product.unit_price,
            quantity: 1,
        }
    }
}

// =============================================================================
// Checkout Aggregate Types
// =============================================================================

/// The customer placing an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: Email,
}

/// A shipping or billing address.
///
/// State and country carry the display *name* extracted from the selected
/// reference record, not the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// State name.
    pub state: String,
    /// Country name.
    pub country: String,
    /// Postal code.
    pub zip_code: String,
}

/// Order-level quantity and price snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Total quantity across all order items.
    pub total_quantity: u32,
    /// Total price across all order items.
    pub total_price: Decimal,
}

/// One line of an order, snapshotted from a cart item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Image URL.
    pub image_url: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Quantity ordered.
    pub quantity: u32,
    /// Product ID.
    pub product_id: ProductId,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            image_url: item.image_url.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
            product_id: item.id,
        }
    }
}

/// The one-shot aggregate submitted at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// The customer placing the order.
    pub customer: Customer,
    /// Where the order ships.
    pub shipping_address: Address,
    /// Billing address on the order.
    pub billing_address: Address,
    /// Quantity/price snapshot.
    pub order: Order,
    /// One entry per distinct cart line.
    pub order_items: Vec<OrderItem>,
}

/// Response from a successful order submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Tracking identifier assigned by the backend.
    pub order_tracking_number: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "sku": "BOOK-TECH-1000",
            "name": "Crash Course in Python",
            "description": "Learn Python at your own pace.",
            "unitPrice": 14.99,
            "imageUrl": "assets/images/products/book-1000.png",
            "active": true,
            "unitsInStock": 100,
            "dateCreated": "2024-01-15T10:30:00.000+00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_product_deserializes_camel_case() {
        let product = sample_product();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.unit_price, Decimal::new(1499, 2));
        assert_eq!(product.units_in_stock, 100);
        assert!(product.date_created.is_some());
        assert!(product.last_updated.is_none());
    }

    #[test]
    fn test_cart_item_from_product_starts_at_quantity_one() {
        let product = sample_product();
        let item = CartItem::from(&product);
        assert_eq!(item.id, product.id);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price, product.unit_price);
        assert_eq!(item.subtotal(), product.unit_price);
    }

    #[test]
    fn test_cart_item_subtotal() {
        let mut item = CartItem::from(&sample_product());
        item.quantity = 3;
        assert_eq!(item.subtotal(), Decimal::new(4497, 2));
    }

    #[test]
    fn test_order_item_from_cart_item() {
        let mut item = CartItem::from(&sample_product());
        item.quantity = 2;
        let order_item = OrderItem::from(&item);
        assert_eq!(order_item.product_id, item.id);
        assert_eq!(order_item.quantity, 2);
        assert_eq!(order_item.unit_price, item.unit_price);
    }

    #[test]
    fn test_purchase_serializes_camel_case() {
        let item = CartItem::from(&sample_product());
        let purchase = Purchase {
            customer: Customer {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: Email::parse("ada@example.com").unwrap(),
            },
            shipping_address: Address {
                street: "1 Main St".to_string(),
                city: "Antwerp".to_string(),
                state: "Antwerpen".to_string(),
                country: "Belgium".to_string(),
                zip_code: "2000".to_string(),
            },
            billing_address: Address {
                street: "1 Main St".to_string(),
                city: "Antwerp".to_string(),
                state: "Antwerpen".to_string(),
                country: "Belgium".to_string(),
                zip_code: "2000".to_string(),
            },
            order: Order {
                total_quantity: 1,
                total_price: item.unit_price,
            },
            order_items: vec![OrderItem::from(&item)],
        };

        let json = serde_json::to_value(&purchase).unwrap();
        assert!(json.get("shippingAddress").is_some());
        assert!(json.get("billingAddress").is_some());
        assert_eq!(json["customer"]["firstName"], "Ada");
        assert_eq!(json["order"]["totalQuantity"], 1);
        assert_eq!(json["orderItems"][0]["productId"], 1);
        assert_eq!(
            json["shippingAddress"]["zipCode"],
            json["billingAddress"]["zipCode"]
        );
    }

    #[test]
    fn test_order_confirmation_wire_name() {
        let confirmation: OrderConfirmation =
            serde_json::from_str(r#"{"orderTrackingNumber":"T123"}"#).unwrap();
        assert_eq!(confirmation.order_tracking_number, "T123");
    }
}
