//! # Domain Types
//!
//! Wire-level types shared by the catalog, cart, and inquiry flows.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌──────────────────┐     │
//! │  │    Product      │   │  InquiryPayload  │   │  InquiryRecord   │     │
//! │  │  ─────────────  │   │  ──────────────  │   │  ──────────────  │     │
//! │  │  id             │◄──│  productId       │   │  id              │     │
//! │  │  name           │   │  name            │   │  customerName    │     │
//! │  │  basePrice      │   │  email           │   │  customerEmail   │     │
//! │  │  description    │   │  message         │   │  createdAt?      │     │
//! │  └─────────────────┘   └──────────────────┘   │  notes?          │     │
//! │   GET /api/products     POST /api/inquiries   │  items[]         │     │
//! │                                               └──────────────────┘     │
//! │                                                GET /api/inquiries      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every type here mirrors the JSON the studio API speaks (camelCase).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// Stable identity of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id)
    }
}

/// A studio service offered in the catalog.
///
/// Only `id` carries identity; the rest is display data. A missing or null
/// `basePrice` stays `None` and counts as zero wherever prices are summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    #[serde(default)]
    pub base_price: Option<Money>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        base_price: Money,
        description: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            base_price: Some(base_price),
            description: description.into(),
        }
    }

    /// Returns the price, with an absent price reading as zero.
    #[inline]
    pub fn price(&self) -> Money {
        self.base_price.unwrap_or_default()
    }
}

// =============================================================================
// Inquiry Payload
// =============================================================================

/// Body of `POST /api/inquiries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPayload {
    pub product_id: ProductId,
    pub name: String,
    pub email: String,
    pub message: String,
}

// =============================================================================
// Inquiry Record
// =============================================================================

/// A submitted inquiry as returned by the studio API.
///
/// The admin view only renders these, so every field except `id` is lenient:
/// missing strings become empty, `createdAt` stays raw text (parsed at render
/// time), and `items` that is absent or not an array becomes empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRecord {
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_email: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Vec<InquiryItem>,
}

/// One line of an inquiry: the product asked about and its price at the time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryItem {
    pub product_id: Option<ProductId>,
    pub product_name: Option<String>,
    pub quantity: Option<i64>,
    pub final_price: Option<Money>,
}

// =============================================================================
// Serde helpers
// =============================================================================

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keeps a timestamp as text. Strings pass through; other non-null values
/// (e.g. an array-encoded date) keep their JSON text so they can be shown as-is.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

/// Accepts any JSON for `items`. Arrays keep their length even when an element
/// does not look like an item; everything else reads as no items.
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<InquiryItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let items = match value {
        serde_json::Value::Array(elements) => elements
            .into_iter()
            .map(|element| serde_json::from_value(element).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    };
    Ok(items)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_from_api_json() {
        let product: Product = serde_json::from_value(json!({
            "id": 2,
            "name": "Web Design",
            "description": "Responsive site that matches Heshima Studio aesthetic.",
            "basePrice": 1200.00,
            "active": true
        }))
        .unwrap();

        assert_eq!(product.id, ProductId(2));
        assert_eq!(product.name, "Web Design");
        assert_eq!(product.price().cents(), 120000);
    }

    #[test]
    fn test_product_missing_price_and_description() {
        let product: Product =
            serde_json::from_value(json!({ "id": 9, "name": "Consult", "description": null }))
                .unwrap();

        assert_eq!(product.base_price, None);
        assert!(product.price().is_zero());
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_product_requires_id() {
        let result = serde_json::from_value::<Product>(json!({ "name": "No id" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = InquiryPayload {
            product_id: ProductId(2),
            name: "Jaha Knight".to_string(),
            email: "jaha@example.com".to_string(),
            message: "logo work".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "productId": 2,
                "name": "Jaha Knight",
                "email": "jaha@example.com",
                "message": "logo work"
            })
        );
    }

    #[test]
    fn test_record_with_items() {
        let record: InquiryRecord = serde_json::from_value(json!({
            "id": 14,
            "customerName": "Jaha Knight",
            "customerEmail": "jaha@example.com",
            "notes": "logo work",
            "createdAt": "2025-03-04T10:15:30",
            "items": [
                { "productId": 2, "productName": "Web Design", "quantity": 1, "finalPrice": 1200.00 }
            ]
        }))
        .unwrap();

        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].product_name.as_deref(), Some("Web Design"));
        assert_eq!(record.items[0].final_price, Some(Money::from_cents(120000)));
    }

    #[test]
    fn test_record_lenient_fields() {
        let record: InquiryRecord = serde_json::from_value(json!({
            "id": 3,
            "customerName": null,
            "items": "not-a-list"
        }))
        .unwrap();

        assert_eq!(record.customer_name, "");
        assert_eq!(record.customer_email, "");
        assert!(record.created_at.is_none());
        assert!(record.items.is_empty());

        let odd_elements: InquiryRecord =
            serde_json::from_value(json!({ "id": 4, "items": [1, "x", {}] })).unwrap();
        assert_eq!(odd_elements.items.len(), 3);
    }
}
