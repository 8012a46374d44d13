use serde::{Deserialize, Serialize, Serializer};
use serde::ser::SerializeStruct;

/// One row of the provider's symbol listing.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymbolRecord {
    pub symbol: String,
    #[serde(default)]
    pub display_symbol: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub instrument_type: Option<String>,
    #[serde(default)]
    pub mic: Option<String>,
}

/// Latest quote for a symbol. Both prices are required.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Quote {
    #[serde(rename = "c")]
    pub current_price: f64,
    #[serde(rename = "pc")]
    pub previous_close: f64,
}

/// Instrument tracked through a single aggregation call.
///
/// Prices stay `None` until the quote for the symbol resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub symbol: String,
    pub display_symbol: String,
    pub description: String,
    pub current_price: Option<f64>,
    pub previous_close: Option<f64>,
}

impl Instrument {
    pub fn new(symbol: impl Into<String>, description: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            display_symbol: symbol.clone(),
            symbol,
            description: description.into(),
            current_price: None,
            previous_close: None,
        }
    }

    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.current_price = Some(quote.current_price);
        self.previous_close = Some(quote.previous_close);
        self
    }

    /// Percent change from previous close, if both prices are known and the
    /// previous close is non-zero.
    pub fn percent_change(&self) -> Option<f64> {
        match (self.current_price, self.previous_close) {
            (Some(current), Some(previous)) if previous != 0.0 => {
                Some((current - previous) / previous * 100.0)
            }
            _ => None,
        }
    }
}

impl From<SymbolRecord> for Instrument {
    fn from(record: SymbolRecord) -> Self {
        let display_symbol = if record.display_symbol.is_empty() {
            record.symbol.clone()
        } else {
            record.display_symbol
        };

        Self {
            symbol: record.symbol,
            display_symbol,
            description: record.description,
            current_price: None,
            previous_close: None,
        }
    }
}

// Serialized by hand so the derived percent change travels with the record.
impl Serialize for Instrument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Instrument", 6)?;
        state.serialize_field("symbol", &self.symbol)?;
        state.serialize_field("display_symbol", &self.display_symbol)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("current_price", &self.current_price)?;
        state.serialize_field("previous_close", &self.previous_close)?;
        state.serialize_field("percent_change", &self.percent_change())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_change_requires_both_prices() {
        let mut instrument = Instrument::new("AAPL", "Apple Inc");
        assert_eq!(instrument.percent_change(), None);

        instrument.current_price = Some(110.0);
        assert_eq!(instrument.percent_change(), None);

        instrument.previous_close = Some(100.0);
        let change = instrument.percent_change().unwrap();
        assert!((change - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_change_undefined_for_zero_previous_close() {
        let instrument = Instrument::new("ZERO", "No history").with_quote(Quote {
            current_price: 12.0,
            previous_close: 0.0,
        });
        assert_eq!(instrument.percent_change(), None);
    }

    #[test]
    fn test_symbol_record_deserializes_provider_shape() {
        let json = r#"{
            "currency": "USD",
            "description": "APPLE INC",
            "displaySymbol": "AAPL",
            "figi": "BBG000B9XRY4",
            "mic": "XNAS",
            "symbol": "AAPL",
            "type": "Common Stock"
        }"#;

        let record: SymbolRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.symbol, "AAPL");
        assert_eq!(record.instrument_type.as_deref(), Some("Common Stock"));
        assert_eq!(record.mic.as_deref(), Some("XNAS"));
    }

    #[test]
    fn test_quote_rejects_missing_previous_close() {
        let result = serde_json::from_str::<Quote>(r#"{"c": 101.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_instrument_serializes_percent_change() {
        let instrument = Instrument::new("MSFT", "Microsoft").with_quote(Quote {
            current_price: 99.0,
            previous_close: 100.0,
        });
        let value = serde_json::to_value(&instrument).unwrap();
        let change = value["percent_change"].as_f64().unwrap();
        assert!((change + 1.0).abs() < 1e-9);
    }
}
