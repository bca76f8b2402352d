//! Public REST API methods (no authentication required).

use serde_json::Value;

use crate::error::IndependentReserveError;
use crate::rest::RestClient;
use crate::rest::endpoints::ApiMethod;
use crate::types::RequestParams;

impl RestClient {
    /// Get the list of valid primary (digital) currency codes.
    pub async fn get_valid_primary_currency_codes(&self) -> Result<Value, IndependentReserveError> {
        self.call_api(ApiMethod::GetValidPrimaryCurrencyCodes, RequestParams::new())
            .await
    }

    /// Get the list of valid secondary (fiat) currency codes.
    pub async fn get_valid_secondary_currency_codes(
        &self,
    ) -> Result<Value, IndependentReserveError> {
        self.call_api(
            ApiMethod::GetValidSecondaryCurrencyCodes,
            RequestParams::new(),
        )
        .await
    }

    /// Get the list of valid limit order types.
    pub async fn get_valid_limit_order_types(&self) -> Result<Value, IndependentReserveError> {
        self.call_api(ApiMethod::GetValidLimitOrderTypes, RequestParams::new())
            .await
    }

    /// Get the list of valid market order types.
    pub async fn get_valid_market_order_types(&self) -> Result<Value, IndependentReserveError> {
        self.call_api(ApiMethod::GetValidMarketOrderTypes, RequestParams::new())
            .await
    }

    /// Get the list of all valid order types.
    pub async fn get_valid_order_types(&self) -> Result<Value, IndependentReserveError> {
        self.call_api(ApiMethod::GetValidOrderTypes, RequestParams::new())
            .await
    }

    /// Get the list of valid transaction types.
    pub async fn get_valid_transaction_types(&self) -> Result<Value, IndependentReserveError> {
        self.call_api(ApiMethod::GetValidTransactionTypes, RequestParams::new())
            .await
    }

    /// Get a snapshot of the market for a given currency pair.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use independent_reserve_api_client::rest::RestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = RestClient::new();
    ///     let summary = client.get_market_summary("Xbt", "Usd").await?;
    ///     println!("Last price: {}", summary["LastPrice"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_market_summary(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new()
            .with("primaryCurrencyCode", primary_currency_code)
            .with("secondaryCurrencyCode", secondary_currency_code);
        self.call_api(ApiMethod::GetMarketSummary, params).await
    }

    /// Get the order book for a given currency pair.
    pub async fn get_order_book(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new()
            .with("primaryCurrencyCode", primary_currency_code)
            .with("secondaryCurrencyCode", secondary_currency_code);
        self.call_api(ApiMethod::GetOrderBook, params).await
    }

    /// Get all open orders on the exchange for a given currency pair.
    pub async fn get_all_orders(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new()
            .with("primaryCurrencyCode", primary_currency_code)
            .with("secondaryCurrencyCode", secondary_currency_code);
        self.call_api(ApiMethod::GetAllOrders, params).await
    }

    /// Get trade data summarized over a number of past hours.
    pub async fn get_trade_history_summary(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
        number_of_hours_in_the_past_to_retrieve: u32,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new()
            .with("primaryCurrencyCode", primary_currency_code)
            .with("secondaryCurrencyCode", secondary_currency_code)
            .with(
                "numberOfHoursInThePastToRetrieve",
                number_of_hours_in_the_past_to_retrieve,
            );
        self.call_api(ApiMethod::GetTradeHistorySummary, params)
            .await
    }

    /// Get the most recent trades for a given currency pair.
    pub async fn get_recent_trades(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
        number_of_recent_trades_to_retrieve: u32,
    ) -> Result<Value, IndependentReserveError> {
        let params = RequestParams::new()
            .with("primaryCurrencyCode", primary_currency_code)
            .with("secondaryCurrencyCode", secondary_currency_code)
            .with(
                "numberOfRecentTradesToRetrieve",
                number_of_recent_trades_to_retrieve,
            );
        self.call_api(ApiMethod::GetRecentTrades, params).await
    }

    /// Get the exchange's current fiat exchange rates.
    pub async fn get_fx_rates(&self) -> Result<Value, IndependentReserveError> {
        self.call_api(ApiMethod::GetFxRates, RequestParams::new())
            .await
    }
}
