//! Request/response types for the product API.
//!
//! These payloads are shared between handlers, storage and `OpenAPI` generation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, num::IntErrorKind, str::FromStr};
use utoipa::{IntoParams, ToSchema};

use super::{DEFAULT_COUNT, MAX_COUNT};

/// A catalog product as stored in the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 11.22)]
    pub price: Decimal,
}

/// Body accepted by create and update. A body `id` is ignored; the path or the
/// storage sequence decides it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ProductPayload {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 11.22)]
    pub price: Decimal,
}

impl ProductPayload {
    #[must_use]
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub result: String,
}

impl DeleteResponse {
    #[must_use]
    pub fn success() -> Self {
        Self {
            result: "success".to_string(),
        }
    }
}

/// Raw `count`/`start` query values.
///
/// Values are kept as strings so that garbage behaves like an absent value
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Page size, forced to 10 when missing, below 1 or above 10.
    #[param(value_type = Option<i64>)]
    pub count: Option<String>,
    /// Offset, forced to 0 when missing or negative.
    #[param(value_type = Option<i64>)]
    pub start: Option<String>,
}

impl ListParams {
    #[must_use]
    pub fn count(&self) -> i64 {
        let count = parse_saturating(self.count.as_deref());
        if (1..=MAX_COUNT).contains(&count) {
            count
        } else {
            DEFAULT_COUNT
        }
    }

    #[must_use]
    pub fn start(&self) -> i64 {
        parse_saturating(self.start.as_deref()).max(0)
    }
}

// Out-of-range numbers clamp to the i64 bounds; anything else unparsable is 0.
fn parse_saturating(value: Option<&str>) -> i64 {
    match value.map(str::parse::<i64>) {
        Some(Ok(parsed)) => parsed,
        Some(Err(err)) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
        None => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownVariant;

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown sort parameter")
    }
}

impl std::error::Error for UnknownVariant {}

/// Column a product listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Price,
}

impl FromStr for SortField {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            _ => Err(UnknownVariant),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Asc,
    Desc,
}

impl FromStr for SortMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(UnknownVariant),
        }
    }
}
