use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Still to be bought
    Open,
    /// Bought; `bought_by` names the buyer
    Closed,
}

impl ProductStatus {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ProductStatus::Open => "open",
            ProductStatus::Closed => "closed",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "open" => Some(ProductStatus::Open),
            "closed" => Some(ProductStatus::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        for status in [ProductStatus::Open, ProductStatus::Closed] {
            assert_eq!(ProductStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(ProductStatus::from_code("bought"), None);
    }

    #[test]
    fn test_unknown_status_is_rejected_by_serde() {
        assert!(serde_json::from_str::<ProductStatus>("\"closed\"").is_ok());
        assert!(serde_json::from_str::<ProductStatus>("\"CLOSED\"").is_err());
    }
}
