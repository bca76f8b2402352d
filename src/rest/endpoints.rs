//! Method registry for the Independent Reserve REST API.
//!
//! Every supported API method is enumerated here together with its
//! visibility class. Visibility decides the whole request shape: public
//! methods are unauthenticated GETs with query parameters, private methods
//! are signed POSTs with a JSON body. The mapping is fixed at compile time
//! and never inferred from parameters.

use crate::error::IndependentReserveError;

/// Base URL for the Independent Reserve REST API.
pub const BASE_URL: &str = "https://api.independentreserve.com";

/// Visibility class of an API method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Unauthenticated, read-only market data
    Public,
    /// Authenticated, may mutate exchange state
    Private,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => f.write_str("Public"),
            Visibility::Private => f.write_str("Private"),
        }
    }
}

/// A supported API method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    // Public market data
    GetValidPrimaryCurrencyCodes,
    GetValidSecondaryCurrencyCodes,
    GetValidLimitOrderTypes,
    GetValidMarketOrderTypes,
    GetValidOrderTypes,
    GetValidTransactionTypes,
    GetMarketSummary,
    GetOrderBook,
    GetAllOrders,
    GetTradeHistorySummary,
    GetRecentTrades,
    GetFxRates,
    // Private account and trading
    GetOpenOrders,
    GetClosedOrders,
    GetClosedFilledOrders,
    GetOrderDetails,
    GetAccounts,
    GetTransactions,
    GetDigitalCurrencyDepositAddress,
    GetDigitalCurrencyDepositAddresses,
    GetTrades,
    GetBrokerageFees,
    PlaceLimitOrder,
    PlaceMarketOrder,
    CancelOrder,
    SynchDigitalCurrencyDepositAddressWithBlockchain,
    RequestFiatWithdrawal,
    WithdrawDigitalCurrency,
}

impl ApiMethod {
    /// Every method in the registry.
    pub const ALL: [ApiMethod; 28] = [
        ApiMethod::GetValidPrimaryCurrencyCodes,
        ApiMethod::GetValidSecondaryCurrencyCodes,
        ApiMethod::GetValidLimitOrderTypes,
        ApiMethod::GetValidMarketOrderTypes,
        ApiMethod::GetValidOrderTypes,
        ApiMethod::GetValidTransactionTypes,
        ApiMethod::GetMarketSummary,
        ApiMethod::GetOrderBook,
        ApiMethod::GetAllOrders,
        ApiMethod::GetTradeHistorySummary,
        ApiMethod::GetRecentTrades,
        ApiMethod::GetFxRates,
        ApiMethod::GetOpenOrders,
        ApiMethod::GetClosedOrders,
        ApiMethod::GetClosedFilledOrders,
        ApiMethod::GetOrderDetails,
        ApiMethod::GetAccounts,
        ApiMethod::GetTransactions,
        ApiMethod::GetDigitalCurrencyDepositAddress,
        ApiMethod::GetDigitalCurrencyDepositAddresses,
        ApiMethod::GetTrades,
        ApiMethod::GetBrokerageFees,
        ApiMethod::PlaceLimitOrder,
        ApiMethod::PlaceMarketOrder,
        ApiMethod::CancelOrder,
        ApiMethod::SynchDigitalCurrencyDepositAddressWithBlockchain,
        ApiMethod::RequestFiatWithdrawal,
        ApiMethod::WithdrawDigitalCurrency,
    ];

    /// The method name as it appears in the endpoint path.
    pub fn name(&self) -> &'static str {
        match self {
            ApiMethod::GetValidPrimaryCurrencyCodes => "GetValidPrimaryCurrencyCodes",
            ApiMethod::GetValidSecondaryCurrencyCodes => "GetValidSecondaryCurrencyCodes",
            ApiMethod::GetValidLimitOrderTypes => "GetValidLimitOrderTypes",
            ApiMethod::GetValidMarketOrderTypes => "GetValidMarketOrderTypes",
            ApiMethod::GetValidOrderTypes => "GetValidOrderTypes",
            ApiMethod::GetValidTransactionTypes => "GetValidTransactionTypes",
            ApiMethod::GetMarketSummary => "GetMarketSummary",
            ApiMethod::GetOrderBook => "GetOrderBook",
            ApiMethod::GetAllOrders => "GetAllOrders",
            ApiMethod::GetTradeHistorySummary => "GetTradeHistorySummary",
            ApiMethod::GetRecentTrades => "GetRecentTrades",
            ApiMethod::GetFxRates => "GetFxRates",
            ApiMethod::GetOpenOrders => "GetOpenOrders",
            ApiMethod::GetClosedOrders => "GetClosedOrders",
            ApiMethod::GetClosedFilledOrders => "GetClosedFilledOrders",
            ApiMethod::GetOrderDetails => "GetOrderDetails",
            ApiMethod::GetAccounts => "GetAccounts",
            ApiMethod::GetTransactions => "GetTransactions",
            ApiMethod::GetDigitalCurrencyDepositAddress => "GetDigitalCurrencyDepositAddress",
            ApiMethod::GetDigitalCurrencyDepositAddresses => "GetDigitalCurrencyDepositAddresses",
            ApiMethod::GetTrades => "GetTrades",
            ApiMethod::GetBrokerageFees => "GetBrokerageFees",
            ApiMethod::PlaceLimitOrder => "PlaceLimitOrder",
            ApiMethod::PlaceMarketOrder => "PlaceMarketOrder",
            ApiMethod::CancelOrder => "CancelOrder",
            ApiMethod::SynchDigitalCurrencyDepositAddressWithBlockchain => {
                "SynchDigitalCurrencyDepositAddressWithBlockchain"
            }
            ApiMethod::RequestFiatWithdrawal => "RequestFiatWithdrawal",
            ApiMethod::WithdrawDigitalCurrency => "WithdrawDigitalCurrency",
        }
    }

    /// The visibility class of this method.
    pub fn visibility(&self) -> Visibility {
        match self {
            ApiMethod::GetValidPrimaryCurrencyCodes
            | ApiMethod::GetValidSecondaryCurrencyCodes
            | ApiMethod::GetValidLimitOrderTypes
            | ApiMethod::GetValidMarketOrderTypes
            | ApiMethod::GetValidOrderTypes
            | ApiMethod::GetValidTransactionTypes
            | ApiMethod::GetMarketSummary
            | ApiMethod::GetOrderBook
            | ApiMethod::GetAllOrders
            | ApiMethod::GetTradeHistorySummary
            | ApiMethod::GetRecentTrades
            | ApiMethod::GetFxRates => Visibility::Public,
            ApiMethod::GetOpenOrders
            | ApiMethod::GetClosedOrders
            | ApiMethod::GetClosedFilledOrders
            | ApiMethod::GetOrderDetails
            | ApiMethod::GetAccounts
            | ApiMethod::GetTransactions
            | ApiMethod::GetDigitalCurrencyDepositAddress
            | ApiMethod::GetDigitalCurrencyDepositAddresses
            | ApiMethod::GetTrades
            | ApiMethod::GetBrokerageFees
            | ApiMethod::PlaceLimitOrder
            | ApiMethod::PlaceMarketOrder
            | ApiMethod::CancelOrder
            | ApiMethod::SynchDigitalCurrencyDepositAddressWithBlockchain
            | ApiMethod::RequestFiatWithdrawal
            | ApiMethod::WithdrawDigitalCurrency => Visibility::Private,
        }
    }

    /// The endpoint path, `/{Visibility}/{MethodName}`.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.visibility(), self.name())
    }

    /// Resolve a method by name.
    ///
    /// The lookup is case-normalized the way the API documents its
    /// methods: the first letter is capitalized, the rest is taken as-is,
    /// so `getMarketSummary` and `GetMarketSummary` both resolve.
    pub fn resolve(name: &str) -> Result<ApiMethod, IndependentReserveError> {
        let normalized = capitalize_first(name);
        Self::ALL
            .iter()
            .find(|method| method.name() == normalized)
            .copied()
            .ok_or_else(|| IndependentReserveError::UnsupportedMethod(name.to_string()))
    }
}

impl std::fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
