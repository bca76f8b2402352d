//! Ordered request parameters.
//!
//! The exchange signs requests over the exact parameter sequence it
//! receives, so parameter order is part of the wire contract. A plain
//! `HashMap` or sorted map would silently reorder keys; [`RequestParams`]
//! keeps insertion order for the canonical message, the query string, and
//! the JSON body alike.

use rust_decimal::Decimal;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A single request parameter value.
///
/// Values are scalars or lists. Lists are accepted for wire compatibility,
/// but only their first element participates in the signed canonical
/// message (see [`ParamValue::canonical_text`]).
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// String value
    Str(String),
    /// Integer value
    Int(i64),
    /// Decimal value (prices, volumes)
    Decimal(Decimal),
    /// Boolean value
    Bool(bool),
    /// List value
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Render the value as it appears in the canonical unsigned message.
    ///
    /// A multi-element list contributes only its first element. The
    /// upstream signing scheme is undocumented for longer lists, so the
    /// remaining elements are deliberately ignored rather than guessed at.
    pub fn canonical_text(&self) -> String {
        match self {
            ParamValue::Str(s) => s.clone(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::Decimal(d) => d.to_string(),
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::List(items) => items
                .first()
                .map(ParamValue::canonical_text)
                .unwrap_or_default(),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ParamValue::Str(s) => serializer.serialize_str(s),
            ParamValue::Int(i) => serializer.serialize_i64(*i),
            ParamValue::Decimal(d) => Serialize::serialize(d, serializer),
            ParamValue::Bool(b) => serializer.serialize_bool(*b),
            ParamValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        ParamValue::Decimal(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// An ordered name→value parameter mapping.
///
/// # Example
///
/// ```rust
/// use independent_reserve_api_client::types::RequestParams;
///
/// let params = RequestParams::new()
///     .with("primaryCurrencyCode", "Xbt")
///     .with("secondaryCurrencyCode", "Usd");
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    entries: Vec<(String, ParamValue)>,
}

impl RequestParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, consuming and returning `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Append a parameter in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, ParamValue)> {
        self.entries.iter()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RequestParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved_in_json() {
        let params = RequestParams::new()
            .with("zulu", "1")
            .with("alpha", "2")
            .with("mike", "3");
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"zulu":"1","alpha":"2","mike":"3"}"#);
    }

    #[test]
    fn test_insertion_order_preserved_in_query_string() {
        let params = RequestParams::new()
            .with("secondaryCurrencyCode", "Usd")
            .with("primaryCurrencyCode", "Xbt");
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(query, "secondaryCurrencyCode=Usd&primaryCurrencyCode=Xbt");
    }

    #[test]
    fn test_canonical_text_scalars() {
        assert_eq!(ParamValue::from("Xbt").canonical_text(), "Xbt");
        assert_eq!(ParamValue::from(25u32).canonical_text(), "25");
        assert_eq!(ParamValue::from(true).canonical_text(), "true");
        let price: Decimal = "485.76".parse().unwrap();
        assert_eq!(ParamValue::from(price).canonical_text(), "485.76");
    }

    #[test]
    fn test_canonical_text_list_uses_first_element() {
        let value = ParamValue::from(vec!["Brokerage", "Deposit"]);
        assert_eq!(value.canonical_text(), "Brokerage");
        assert_eq!(ParamValue::List(Vec::new()).canonical_text(), "");
    }

    #[test]
    fn test_list_serializes_as_json_array() {
        let params = RequestParams::new().with("txTypes", vec!["Brokerage", "Deposit"]);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"txTypes":["Brokerage","Deposit"]}"#);
    }

    #[test]
    fn test_list_rejected_in_query_string() {
        let params = RequestParams::new().with("txTypes", vec!["Brokerage"]);
        assert!(serde_urlencoded::to_string(&params).is_err());
    }
}
