//! Private REST API methods (authentication required).
//!
//! These methods require API credentials to be configured on the client;
//! calling them without credentials fails with
//! [`MissingCredentials`](crate::error::IndependentReserveError::MissingCredentials).

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::IndependentReserveError;
use crate::rest::RestClient;
use crate::rest::endpoints::ApiMethod;
use crate::types::{LimitOrderType, MarketOrderType, RequestParams};

/// Pair filter and paging shared by the order-listing methods.
fn order_listing_params(
    primary_currency_code: Option<&str>,
    secondary_currency_code: Option<&str>,
    page_index: u32,
    page_size: u32,
) -> RequestParams {
    let mut params = RequestParams::new();
    if let Some(primary) = primary_currency_code {
        params.insert("primaryCurrencyCode", primary);
    }
    if let Some(secondary) = secondary_currency_code {
        params.insert("secondaryCurrencyCode", secondary);
    }
    params.insert("pageIndex", page_index);
    params.insert("pageSize", page_size);
    params
}

impl RestClient {
    /// Get the caller's open limit orders, optionally filtered by pair.
    pub async fn get_open_orders(
        &self,
        primary_currency_code: Option<&str>,
        secondary_currency_code: Option<&str>,
        page_index: u32,
        page_size: u32,
    ) -> Result<Value, IndependentReserveError> {
        let params = order_listing_params(
            primary_currency_code,
            secondary_currency_code,
            page_index,
            page_size,
        );
        self.call_api(ApiMethod::GetOpenOrders, params).await
    }

    /// Get the caller's closed orders, optionally filtered by pair.
    pub async fn get_closed_orders(
        &self,
        primary_currency_code: Option<&str>,
        secondary_currency_code: Option<&str>,
        page_index: u32,
        page_size: u32,
    ) -> Result<Value, IndependentReserveError> {
        let params = order_listing_params(
            primary_currency_code,
            secondary_currency_code,
            page_index,
            page_size,
        );
        self.call_api(ApiMethod::GetClosedOrders, params).await
    }

    /// Get the caller's closed orders that were at least partially filled.
    pub async fn get_closed_filled_orders(
        &self,
        primary_currency_code: Option<&str>,
        secondary_currency_code: Option<&str>,
        page_index: u32,
        page_size: u32,
    ) -> Result<Value, IndependentReserveError> {
        let params = order_listing_params(
            primary_currency_code,
            secondary_currency_code,
            page_index,
            page_size,
        );
        self.call_api(ApiMethod::GetClosedFilledOrders, params).await
    }

    /// Get details of a single order.
    pub async fn get_order_details(
        &self,
        order_guid: &str,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new().with("orderGuid", order_guid);
        self.call_api(ApiMethod::GetOrderDetails, params).await
    }

    /// Get the caller's accounts and balances.
    pub async fn get_accounts(&self) -> Result<Value, IndependentReserveError> {
        self.call_api(ApiMethod::GetAccounts, RequestParams::new())
            .await
    }

    /// Get transactions on an account, optionally filtered by time range
    /// and transaction types.
    pub async fn get_transactions(
        &self,
        account_guid: &str,
        from_timestamp_utc: Option<&str>,
        to_timestamp_utc: Option<&str>,
        tx_types: &[&str],
        page_index: u32,
        page_size: u32,
    ) -> Result<Value, IndependentReserveError> {
        let mut params = RequestParams::new().with("accountGuid", account_guid);
        if let Some(from) = from_timestamp_utc {
            params.insert("fromTimestampUtc", from);
        }
        if let Some(to) = to_timestamp_utc {
            params.insert("toTimestampUtc", to);
        }
        if !tx_types.is_empty() {
            params.insert("txTypes", tx_types.to_vec());
        }
        params.insert("pageIndex", page_index);
        params.insert("pageSize", page_size);
        self.call_api(ApiMethod::GetTransactions, params).await
    }

    /// Get the caller's deposit address for a digital currency.
    pub async fn get_digital_currency_deposit_address(
        &self,
        primary_currency_code: &str,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new().with("primaryCurrencyCode", primary_currency_code);
        self.call_api(ApiMethod::GetDigitalCurrencyDepositAddress, params)
            .await
    }

    /// Get all of the caller's deposit addresses for a digital currency.
    pub async fn get_digital_currency_deposit_addresses(
        &self,
        primary_currency_code: &str,
        page_index: u32,
        page_size: u32,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new()
            .with("primaryCurrencyCode", primary_currency_code)
            .with("pageIndex", page_index)
            .with("pageSize", page_size);
        self.call_api(ApiMethod::GetDigitalCurrencyDepositAddresses, params)
            .await
    }

    /// Get the caller's trade history.
    pub async fn get_trades(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new()
            .with("pageIndex", page_index)
            .with("pageSize", page_size);
        self.call_api(ApiMethod::GetTrades, params).await
    }

    /// Get the brokerage fees applying to the caller's account.
    pub async fn get_brokerage_fees(&self) -> Result<Value, IndependentReserveError> {
        self.call_api(ApiMethod::GetBrokerageFees, RequestParams::new())
            .await
    }

    /// Place a new limit bid or offer order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use independent_reserve_api_client::rest::RestClient;
    /// use independent_reserve_api_client::types::LimitOrderType;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = RestClient::with_credentials("api_key", "api_secret");
    ///     let order = client
    ///         .place_limit_order(
    ///             "Xbt",
    ///             "Usd",
    ///             LimitOrderType::LimitBid,
    ///             "485.76".parse()?,
    ///             "0.358".parse()?,
    ///         )
    ///         .await?;
    ///     println!("Order: {}", order["OrderGuid"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn place_limit_order(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
        order_type: LimitOrderType,
        price: Decimal,
        volume: Decimal,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new()
            .with("primaryCurrencyCode", primary_currency_code)
            .with("secondaryCurrencyCode", secondary_currency_code)
            .with("orderType", order_type.as_str())
            .with("price", price)
            .with("volume", volume);
        self.call_api(ApiMethod::PlaceLimitOrder, params).await
    }

    /// Place a new market bid or offer order.
    pub async fn place_market_order(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
        order_type: MarketOrderType,
        volume: Decimal,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new()
            .with("primaryCurrencyCode", primary_currency_code)
            .with("secondaryCurrencyCode", secondary_currency_code)
            .with("orderType", order_type.as_str())
            .with("volume", volume);
        self.call_api(ApiMethod::PlaceMarketOrder, params).await
    }

    /// Cancel an open order.
    pub async fn cancel_order(&self, order_guid: &str) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new().with("orderGuid", order_guid);
        self.call_api(ApiMethod::CancelOrder, params).await
    }

    /// Re-synchronize a deposit address with its blockchain.
    pub async fn synch_digital_currency_deposit_address_with_blockchain(
        &self,
        deposit_address: &str,
        primary_currency_code: &str,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new()
            .with("depositAddress", deposit_address)
            .with("primaryCurrencyCode", primary_currency_code);
        self.call_api(
            ApiMethod::SynchDigitalCurrencyDepositAddressWithBlockchain,
            params,
        )
        .await
    }

    /// Request a withdrawal of fiat currency to a nominated bank account.
    pub async fn request_fiat_withdrawal(
        &self,
        secondary_currency_code: &str,
        withdrawal_amount: Decimal,
        withdrawal_bank_account_name: &str,
        comment: &str,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new()
            .with("secondaryCurrencyCode", secondary_currency_code)
            .with("withdrawalAmount", withdrawal_amount)
            .with("withdrawalBankAccountName", withdrawal_bank_account_name)
            .with("comment", comment);
        self.call_api(ApiMethod::RequestFiatWithdrawal, params).await
    }

    /// Withdraw digital currency to an external address.
    pub async fn withdraw_digital_currency(
        &self,
        amount: Decimal,
        withdrawal_address: &str,
        comment: &str,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new()
            .with("amount", amount)
            .with("withdrawalAddress", withdrawal_address)
            .with("comment", comment);
        self.call_api(ApiMethod::WithdrawDigitalCurrency, params)
            .await
    }
}
