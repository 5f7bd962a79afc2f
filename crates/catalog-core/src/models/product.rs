//! Product feed types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::FetchError;

/// How a product is obtained.
///
/// Encoded in the feed as an integer (`0`, `1`, `2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PricingOption {
    BuyNow = 0,
    Free = 1,
    ViewOnly = 2,
}

/// A `pricingOption` value outside the known range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown pricing option: {0}")]
pub struct UnknownPricingOption(pub u8);

impl TryFrom<u8> for PricingOption {
    type Error = UnknownPricingOption;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::BuyNow),
            1 => Ok(Self::Free),
            2 => Ok(Self::ViewOnly),
            other => Err(UnknownPricingOption(other)),
        }
    }
}

impl From<PricingOption> for u8 {
    fn from(option: PricingOption) -> Self {
        option as u8
    }
}

/// Product identifier. The feed may use numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub creator: String,
    /// Non-negative amount in USD.
    pub price: f64,
    pub pricing_option: PricingOption,
    /// Opaque image reference, rendered as-is.
    pub image_path: String,
}

impl Product {
    /// Decode a product list from the feed's JSON array.
    ///
    /// A single malformed entry fails the whole list.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, FetchError> {
        serde_json::from_str(json).map_err(|e| FetchError::JsonParseError(e.to_string()))
    }
}
