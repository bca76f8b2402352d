//! Common domain types for the Independent Reserve API.

use serde::{Deserialize, Serialize};

/// Type of a limit order.
///
/// A `LimitBid` is a buy order and a `LimitOffer` is a sell order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitOrderType {
    /// Buy at the specified price or better
    LimitBid,
    /// Sell at the specified price or better
    LimitOffer,
}

impl LimitOrderType {
    /// The wire name of this order type.
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitOrderType::LimitBid => "LimitBid",
            LimitOrderType::LimitOffer => "LimitOffer",
        }
    }
}

impl std::fmt::Display for LimitOrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a market order.
///
/// A `MarketBid` is a buy order and a `MarketOffer` is a sell order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketOrderType {
    /// Buy at the best available price
    MarketBid,
    /// Sell at the best available price
    MarketOffer,
}

impl MarketOrderType {
    /// The wire name of this order type.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketOrderType::MarketBid => "MarketBid",
            MarketOrderType::MarketOffer => "MarketOffer",
        }
    }
}

impl std::fmt::Display for MarketOrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
