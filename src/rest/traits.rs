//! Trait definition for the Independent Reserve REST API client.
//!
//! [`IndependentReserveClient`] abstracts every supported API operation.
//! This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., a caching or throttling wrapper)
//! - Alternative implementations
//!
//! Responses are returned as raw [`serde_json::Value`]; this layer does
//! not validate or type the call-dependent payload shapes further.

use std::future::Future;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::IndependentReserveError;
use crate::types::{LimitOrderType, MarketOrderType};

/// Trait defining all Independent Reserve REST API operations.
///
/// All methods are async and return `Result<Value, IndependentReserveError>`.
pub trait IndependentReserveClient: Send + Sync {
    // ========== Public Methods ==========

    /// Get the list of valid primary (digital) currency codes.
    fn get_valid_primary_currency_codes(
        &self,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the list of valid secondary (fiat) currency codes.
    fn get_valid_secondary_currency_codes(
        &self,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the list of valid limit order types.
    fn get_valid_limit_order_types(
        &self,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the list of valid market order types.
    fn get_valid_market_order_types(
        &self,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the list of all valid order types.
    fn get_valid_order_types(
        &self,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the list of valid transaction types.
    fn get_valid_transaction_types(
        &self,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get a snapshot of the market for a given currency pair.
    fn get_market_summary(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the order book for a given currency pair.
    fn get_order_book(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get all open orders on the exchange for a given currency pair.
    fn get_all_orders(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get trade data summarized over a number of past hours.
    fn get_trade_history_summary(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
        number_of_hours_in_the_past_to_retrieve: u32,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the most recent trades for a given currency pair.
    fn get_recent_trades(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
        number_of_recent_trades_to_retrieve: u32,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the exchange's current fiat exchange rates.
    fn get_fx_rates(&self) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    // ========== Private Methods ==========

    /// Get the caller's open limit orders.
    fn get_open_orders(
        &self,
        primary_currency_code: Option<&str>,
        secondary_currency_code: Option<&str>,
        page_index: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the caller's closed orders.
    fn get_closed_orders(
        &self,
        primary_currency_code: Option<&str>,
        secondary_currency_code: Option<&str>,
        page_index: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the caller's closed orders that were at least partially filled.
    fn get_closed_filled_orders(
        &self,
        primary_currency_code: Option<&str>,
        secondary_currency_code: Option<&str>,
        page_index: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get details of a single order.
    fn get_order_details(
        &self,
        order_guid: &str,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the caller's accounts and balances.
    fn get_accounts(&self) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get transactions on an account.
    fn get_transactions(
        &self,
        account_guid: &str,
        from_timestamp_utc: Option<&str>,
        to_timestamp_utc: Option<&str>,
        tx_types: &[&str],
        page_index: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the caller's deposit address for a digital currency.
    fn get_digital_currency_deposit_address(
        &self,
        primary_currency_code: &str,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get all of the caller's deposit addresses for a digital currency.
    fn get_digital_currency_deposit_addresses(
        &self,
        primary_currency_code: &str,
        page_index: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the caller's trade history.
    fn get_trades(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Get the brokerage fees applying to the caller's account.
    fn get_brokerage_fees(
        &self,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Place a new limit bid or offer order.
    fn place_limit_order(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
        order_type: LimitOrderType,
        price: Decimal,
        volume: Decimal,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Place a new market bid or offer order.
    fn place_market_order(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
        order_type: MarketOrderType,
        volume: Decimal,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Cancel an open order.
    fn cancel_order(
        &self,
        order_guid: &str,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Re-synchronize a deposit address with its blockchain.
    fn synch_digital_currency_deposit_address_with_blockchain(
        &self,
        deposit_address: &str,
        primary_currency_code: &str,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Request a withdrawal of fiat currency to a nominated bank account.
    fn request_fiat_withdrawal(
        &self,
        secondary_currency_code: &str,
        withdrawal_amount: Decimal,
        withdrawal_bank_account_name: &str,
        comment: &str,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;

    /// Withdraw digital currency to an external address.
    fn withdraw_digital_currency(
        &self,
        amount: Decimal,
        withdrawal_address: &str,
        comment: &str,
    ) -> impl Future<Output = Result<Value, IndependentReserveError>> + Send;
}
