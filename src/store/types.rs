//! Security record types

use rust_decimal::Decimal;
use serde::Serialize;

/// One security entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    ticker: String,
    #[serde(rename = "type")]
    security_type: String,
    price: Decimal,
}

impl Record {
    /// Create a new record
    pub fn new(ticker: impl Into<String>, security_type: impl Into<String>, price: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            security_type: security_type.into(),
            price,
        }
    }

    /// Ticker symbol, possibly carrying one trailing space from decoding
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Free-form type classification text
    pub fn security_type(&self) -> &str {
        &self.security_type
    }

    /// Price; zero when the source field was empty or unparseable
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Whether this record is keyed by `key`, tolerating one trailing space
    /// on the stored ticker
    pub fn ticker_matches(&self, key: &str) -> bool {
        self.ticker == key || self.ticker.strip_suffix(' ') == Some(key)
    }

    /// Whether this record belongs to the given type classification
    pub fn is_kind(&self, kind: SecurityKind) -> bool {
        kind.matches(&self.security_type)
    }
}

/// Type classifications that take part in aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityKind {
    /// Common equity
    CommonStock,
    /// American Depositary Receipt
    Adr,
}

impl SecurityKind {
    /// Label as it appears in the type column
    pub fn label(self) -> &'static str {
        match self {
            SecurityKind::CommonStock => "Common Stock",
            SecurityKind::Adr => "ADR",
        }
    }

    /// Match type text with or without one trailing space
    pub fn matches(self, type_text: &str) -> bool {
        let label = self.label();
        type_text == label || type_text.strip_suffix(' ') == Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_accessors() {
        let record = Record::new("AAPL", "Common Stock", dec!(150.25));
        assert_eq!(record.ticker(), "AAPL");
        assert_eq!(record.security_type(), "Common Stock");
        assert_eq!(record.price(), dec!(150.25));
    }

    #[test]
    fn test_ticker_matches_trailing_space() {
        let record = Record::new("ABC ", "ADR", dec!(1));
        assert!(record.ticker_matches("ABC"));
        assert!(record.ticker_matches("ABC "));
        assert!(!record.ticker_matches("AB"));
    }

    #[test]
    fn test_ticker_matches_exact_only() {
        let record = Record::new("ABC", "ADR", dec!(1));
        assert!(record.ticker_matches("ABC"));
        // Only the stored side may carry the stray space
        assert!(!record.ticker_matches("ABC "));
        assert!(!record.ticker_matches("abc"));
    }

    #[test]
    fn test_kind_matches() {
        assert!(SecurityKind::CommonStock.matches("Common Stock"));
        assert!(SecurityKind::CommonStock.matches("Common Stock "));
        assert!(!SecurityKind::CommonStock.matches("Common Stock  "));
        assert!(!SecurityKind::CommonStock.matches("Common"));
        assert!(SecurityKind::Adr.matches("ADR"));
        assert!(SecurityKind::Adr.matches("ADR "));
        assert!(!SecurityKind::Adr.matches(" ADR"));
    }

    #[test]
    fn test_record_is_kind() {
        let record = Record::new("BABA", "ADR ", dec!(90));
        assert!(record.is_kind(SecurityKind::Adr));
        assert!(!record.is_kind(SecurityKind::CommonStock));
    }

    #[test]
    fn test_record_serialize() {
        let record = Record::new("MSFT", "Common Stock", dec!(250.0));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["ticker"], "MSFT");
        assert_eq!(json["type"], "Common Stock");
    }
}
