use serde::{Deserialize, Serialize};

/// Price of a product.
///
/// Directly created products carry the plain numeric amount the caller
/// supplied; randomly generated ones carry a currency-formatted display
/// string. Serialization is untagged, so each variant round-trips as the
/// bare number or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// Plain numeric amount.
    Amount(f64),
    /// Currency-formatted display string, e.g. `$87.42`.
    Formatted(String),
}

impl Price {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(v) => Some(*v),
            Price::Formatted(_) => None,
        }
    }

    pub fn is_formatted(&self) -> bool {
        matches!(self, Price::Formatted(_))
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Price::Amount(v) => write!(f, "{v}"),
            Price::Formatted(s) => f.write_str(s),
        }
    }
}
