//! Product model
//!
//! A product is stored under its ID in the catalog; the ID itself is the
//! catalog key and is not repeated inside the record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tracked product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name
    pub name: String,

    /// Units in stock
    pub quantity: u64,

    /// Unit price
    pub price: f64,
}

impl Product {
    /// Create a new product
    pub fn new(name: impl Into<String>, quantity: u64, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Stock value of this product (quantity x price)
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Whether the quantity is strictly below `threshold`
    pub fn is_low_stock(&self, threshold: u64) -> bool {
        self.quantity < threshold
    }

    /// Validate the product
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }

        if !self.price.is_finite() {
            return Err(ProductValidationError::NonFinitePrice);
        }

        if self.price < 0.0 {
            return Err(ProductValidationError::NegativePrice);
        }

        Ok(())
    }
}

/// Parse a quantity typed by the user
///
/// Negative values parse successfully so they can be reported as negative
/// rather than as malformed.
pub fn parse_quantity(input: &str) -> Result<u64, ProductValidationError> {
    let raw: i64 = input
        .trim()
        .parse()
        .map_err(|_| ProductValidationError::InvalidQuantity(input.trim().to_string()))?;

    if raw < 0 {
        return Err(ProductValidationError::NegativeQuantity);
    }

    Ok(raw as u64)
}

/// Parse a unit price typed by the user
pub fn parse_price(input: &str) -> Result<f64, ProductValidationError> {
    let price: f64 = input
        .trim()
        .parse()
        .map_err(|_| ProductValidationError::InvalidPrice(input.trim().to_string()))?;

    if !price.is_finite() {
        return Err(ProductValidationError::NonFinitePrice);
    }

    if price < 0.0 {
        return Err(ProductValidationError::NegativePrice);
    }

    Ok(price)
}

/// Validation errors for products
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductValidationError {
    EmptyId,
    EmptyName,
    NegativeQuantity,
    NegativePrice,
    NonFinitePrice,
    InvalidQuantity(String),
    InvalidPrice(String),
}

impl fmt::Display for ProductValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Product ID cannot be empty"),
            Self::EmptyName => write!(f, "Product name cannot be empty"),
            Self::NegativeQuantity => write!(f, "Quantity cannot be negative"),
            Self::NegativePrice => write!(f, "Price cannot be negative"),
            Self::NonFinitePrice => write!(f, "Price must be a finite number"),
            Self::InvalidQuantity(raw) => {
                write!(f, "Quantity must be an integer (got '{}')", raw)
            }
            Self::InvalidPrice(raw) => write!(f, "Price must be a number (got '{}')", raw),
        }
    }
}

impl std::error::Error for ProductValidationError {}
