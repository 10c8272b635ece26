//! Input validation, run before any aggregation work

use super::models::SalesData;
use serde_json::Value;

const DATASET_LISTS: [&str; 3] = ["sellers", "products", "purchase_records"];

#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    MissingDataset,
    NotAList(&'static str),
    EmptyList(&'static str),
    MissingStrategy(&'static str),
    Malformed(String),
}

impl From<serde_json::Error> for InvalidInputError {
    fn from(err: serde_json::Error) -> Self {
        InvalidInputError::Malformed(err.to_string())
    }
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInputError::MissingDataset => write!(f, "Invalid input: dataset is missing"),
            InvalidInputError::NotAList(field) => {
                write!(f, "Invalid input: `{}` must be a list", field)
            }
            InvalidInputError::EmptyList(field) => {
                write!(f, "Invalid input: `{}` must not be empty", field)
            }
            InvalidInputError::MissingStrategy(name) => {
                write!(f, "Invalid input: option `{}` is required", name)
            }
            InvalidInputError::Malformed(e) => write!(f, "Invalid input: malformed dataset: {}", e),
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// Check the shape of an untyped dataset: an object whose `sellers`,
/// `products` and `purchase_records` fields are all arrays
pub fn validate_raw_dataset(value: &Value) -> Result<(), InvalidInputError> {
    let dataset = match value {
        Value::Object(map) => map,
        _ => {
            log::warn!("Rejected dataset: expected an object, got {}", kind_of(value));
            return Err(InvalidInputError::MissingDataset);
        }
    };

    for field in DATASET_LISTS {
        if !matches!(dataset.get(field), Some(Value::Array(_))) {
            log::warn!("Rejected dataset: `{}` is not a list", field);
            return Err(InvalidInputError::NotAList(field));
        }
    }

    Ok(())
}

/// Reject datasets with an empty seller, product or purchase record list
pub fn validate_sales_data(data: &SalesData) -> Result<(), InvalidInputError> {
    let lengths = [
        data.sellers.len(),
        data.products.len(),
        data.purchase_records.len(),
    ];

    for (field, len) in DATASET_LISTS.into_iter().zip(lengths) {
        if len == 0 {
            log::warn!("Rejected dataset: `{}` is empty", field);
            return Err(InvalidInputError::EmptyList(field));
        }
    }

    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
