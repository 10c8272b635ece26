//! Input records: seller and product catalogs plus purchase records

use super::validator::{validate_raw_dataset, InvalidInputError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub purchase_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One product entry within a purchase record.
///
/// `discount` is a percentage in [0, 100]. Neither it nor `quantity` is range
/// checked; out-of-range values flow through the arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: i64,
    pub sale_price: f64,
    pub discount: f64,
}

impl LineItem {
    /// Multiplier applied to the sale price, `1 - discount / 100`
    pub fn discount_factor(&self) -> f64 {
        1.0 - self.discount / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    /// Parse a dataset from JSON, checking its shape before deserializing
    pub fn from_json(json: &str) -> Result<Self, InvalidInputError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, InvalidInputError> {
        validate_raw_dataset(&value)?;
        let data: SalesData = serde_json::from_value(value)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset_json() {
        let json = r#"{
            "customers": [{"id": "customer_1"}],
            "sellers": [{"id": "seller_1", "first_name": "Alexey", "last_name": "Petrov", "position": "Senior"}],
            "products": [{"sku": "SKU_001", "name": "Tea", "purchase_price": 5.5, "sale_price": 9.0}],
            "purchase_records": [{
                "receipt_id": "receipt_1",
                "date": "2023-12-04",
                "seller_id": "seller_1",
                "customer_id": "customer_1",
                "items": [{"sku": "SKU_001", "quantity": 3, "sale_price": 9.0, "discount": 10}],
                "total_amount": 24.3,
                "total_discount": 2.7
            }]
        }"#;

        let data = SalesData::from_json(json).unwrap();
        assert_eq!(data.sellers.len(), 1);
        assert_eq!(data.sellers[0].display_name(), "Alexey Petrov");
        assert_eq!(data.products[0].name.as_deref(), Some("Tea"));
        assert_eq!(data.purchase_records[0].receipt_id.as_deref(), Some("receipt_1"));
        assert_eq!(data.purchase_records[0].items[0].quantity, 3);
        assert_eq!(data.purchase_records[0].items[0].discount, 10.0);
    }

    #[test]
    fn test_discount_factor() {
        let item = LineItem {
            sku: "SKU_001".to_string(),
            quantity: 1,
            sale_price: 100.0,
            discount: 25.0,
        };
        assert_eq!(item.discount_factor(), 0.75);
    }

    #[test]
    fn test_record_without_items_parses() {
        let json = r#"{
            "sellers": [{"id": "s1", "first_name": "A", "last_name": "B"}],
            "products": [{"sku": "X", "purchase_price": 1.0}],
            "purchase_records": [{"seller_id": "s1"}]
        }"#;

        let data = SalesData::from_json(json).unwrap();
        assert!(data.purchase_records[0].items.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let json = r#"{"sellers": ["#;
        assert!(matches!(
            SalesData::from_json(json),
            Err(InvalidInputError::Malformed(_))
        ));
    }

    #[test]
    fn test_wrong_field_types() {
        let json = r#"{
            "sellers": [{"id": 7}],
            "products": [{"sku": "X", "purchase_price": 1.0}],
            "purchase_records": [{"seller_id": "s1", "items": []}]
        }"#;
        assert!(matches!(
            SalesData::from_json(json),
            Err(InvalidInputError::Malformed(_))
        ));
    }
}
