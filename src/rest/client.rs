//! Independent Reserve REST API client implementation.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use rust_decimal::Decimal;
use serde::Serialize;
use serde::ser::SerializeMap;
use serde_json::Value;
use url::Url;

use crate::auth::{CredentialsProvider, NonceProvider, SignedEnvelope, WallClockNonce, sign_request};
use crate::error::{ApiError, IndependentReserveError};
use crate::rest::endpoints::{ApiMethod, BASE_URL, Visibility};
use crate::rest::traits::IndependentReserveClient;
use crate::types::{LimitOrderType, MarketOrderType, RequestParams};
use crate::volume::VolumeLimits;

/// The Independent Reserve REST API client.
///
/// All API calls funnel through one dispatch routine: the method's
/// registry entry decides the verb, the endpoint path, and whether the
/// parameters travel as a query string (public) or inside a signed JSON
/// body (private).
///
/// # Example
///
/// ```rust,no_run
/// use independent_reserve_api_client::rest::RestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public market data needs no credentials.
///     let client = RestClient::new();
///     let summary = client.get_market_summary("Xbt", "Usd").await?;
///     println!("Market summary: {summary}");
///     Ok(())
/// }
/// ```
///
/// For private methods, provide credentials:
///
/// ```rust,no_run
/// use independent_reserve_api_client::rest::RestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RestClient::with_credentials("api_key", "api_secret");
///     let accounts = client.get_accounts().await?;
///     println!("Accounts: {accounts}");
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct RestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
    volume_limits: Arc<VolumeLimits>,
}

impl RestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public methods. Use
    /// [`RestClient::with_credentials`] or [`RestClient::builder()`] to
    /// configure credentials for private methods.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client with static credentials.
    pub fn with_credentials(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::builder()
            .credentials(Arc::new(crate::auth::StaticCredentials::new(
                api_key, api_secret,
            )))
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::new()
    }

    /// Call an API method by name.
    ///
    /// Resolves the name against the method registry, then dispatches. An
    /// unknown name fails with
    /// [`UnsupportedMethod`](IndependentReserveError::UnsupportedMethod)
    /// before any network traffic.
    pub async fn call(
        &self,
        method: &str,
        params: RequestParams,
    ) -> Result<Value, IndependentReserveError> {
        let method = ApiMethod::resolve(method)?;
        self.call_api(method, params).await
    }

    /// Dispatch a resolved method.
    pub(crate) async fn call_api(
        &self,
        method: ApiMethod,
        params: RequestParams,
    ) -> Result<Value, IndependentReserveError> {
        match method.visibility() {
            Visibility::Public => self.public_get(method, params).await,
            Visibility::Private => self.private_post(method, params).await,
        }
    }

    /// Minimum order volume for the given currency.
    pub fn min_volume_for(&self, currency: &str) -> Result<Decimal, IndependentReserveError> {
        self.volume_limits.min_volume_for(currency)
    }

    /// Number of decimals accepted on order volume for the given currency.
    pub fn volume_decimals_for(&self, currency: &str) -> Result<u32, IndependentReserveError> {
        self.volume_limits.volume_decimals_for(currency)
    }

    /// Make an unauthenticated GET request with query parameters.
    async fn public_get(
        &self,
        method: ApiMethod,
        params: RequestParams,
    ) -> Result<Value, IndependentReserveError> {
        let mut url = format!("{}{}", self.base_url, method.path());
        if !params.is_empty() {
            let query = serde_urlencoded::to_string(&params)
                .map_err(|e| IndependentReserveError::InvalidArgument(e.to_string()))?;
            url.push('?');
            url.push_str(&query);
        }
        let url = Url::parse(&url)?;

        tracing::debug!(method = method.name(), %url, "public API request");
        let response = self.http_client.get(url).send().await?;
        self.parse_response(response).await
    }

    /// Make a signed POST request with a JSON body.
    async fn private_post(
        &self,
        method: ApiMethod,
        params: RequestParams,
    ) -> Result<Value, IndependentReserveError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(IndependentReserveError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let url = format!("{}{}", self.base_url, method.path());
        let nonce = self.nonce_provider.next_nonce();
        let envelope = sign_request(creds, &url, nonce, &params)?;
        let body = SignedBody {
            envelope: &envelope,
            params: &params,
        };
        let url = Url::parse(&url)?;

        tracing::debug!(method = method.name(), %url, "private API request");
        let response = self.http_client.post(url).json(&body).send().await?;
        self.parse_response(response).await
    }

    /// Decode a response, normalizing 4xx responses into [`ApiError`].
    async fn parse_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Value, IndependentReserveError> {
        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await?;
            let error = ApiError::from_response_body(status, &body);
            tracing::debug!(%status, message = %error.message, "API rejected request");
            return Err(IndependentReserveError::Api(error));
        }

        // Other failure statuses (5xx) surface as transport errors.
        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`RestClient`].
pub struct RestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    volume_limits: Option<VolumeLimits>,
    http_client: Option<ClientWithMiddleware>,
    user_agent: Option<String>,
    max_retries: u32,
}

impl RestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            volume_limits: None,
            http_client: None,
            user_agent: None,
            max_retries: 3,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for private methods.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Replace the seeded per-currency volume table.
    pub fn volume_limits(mut self, limits: VolumeLimits) -> Self {
        self.volume_limits = Some(limits);
        self
    }

    /// Inject a preconfigured HTTP transport.
    ///
    /// Overrides the user agent, tracing, and retry settings, which only
    /// apply to the transport built by default.
    pub fn http_client(mut self, http_client: ClientWithMiddleware) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of transport-level retries for transient
    /// failures.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> RestClient {
        let client = self.http_client.unwrap_or_else(|| {
            let mut headers = HeaderMap::new();
            let user_agent = self.user_agent.unwrap_or_else(|| {
                format!("independent-reserve-api-client/{}", env!("CARGO_PKG_VERSION"))
            });
            let header_value = HeaderValue::from_str(&user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("independent-reserve-api-client"));
            headers.insert(USER_AGENT, header_value);

            let reqwest_client = reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new());

            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(self.max_retries);

            ClientBuilder::new(reqwest_client)
                .with(TracingMiddleware::default())
                .with(RetryTransientMiddleware::new_with_policy(retry_policy))
                .build()
        });

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(WallClockNonce::new()));

        RestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
            volume_limits: Arc::new(self.volume_limits.unwrap_or_default()),
        }
    }
}

impl Default for RestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON body of a private request: the signed envelope fields first, in a
/// fixed order, then the caller's parameters in their insertion order.
struct SignedBody<'a> {
    envelope: &'a SignedEnvelope,
    params: &'a RequestParams,
}

impl Serialize for SignedBody<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(3 + self.params.len()))?;
        map.serialize_entry("apiKey", &self.envelope.api_key)?;
        map.serialize_entry("nonce", &self.envelope.nonce)?;
        map.serialize_entry("signature", &self.envelope.signature)?;
        for (name, value) in self.params.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// IndependentReserveClient trait implementation.

impl IndependentReserveClient for RestClient {
    // ========== Public Methods ==========

    async fn get_valid_primary_currency_codes(&self) -> Result<Value, IndependentReserveError> {
        RestClient::get_valid_primary_currency_codes(self).await
    }

    async fn get_valid_secondary_currency_codes(&self) -> Result<Value, IndependentReserveError> {
        RestClient::get_valid_secondary_currency_codes(self).await
    }

    async fn get_valid_limit_order_types(&self) -> Result<Value, IndependentReserveError> {
        RestClient::get_valid_limit_order_types(self).await
    }

    async fn get_valid_market_order_types(&self) -> Result<Value, IndependentReserveError> {
        RestClient::get_valid_market_order_types(self).await
    }

    async fn get_valid_order_types(&self) -> Result<Value, IndependentReserveError> {
        RestClient::get_valid_order_types(self).await
    }

    async fn get_valid_transaction_types(&self) -> Result<Value, IndependentReserveError> {
        RestClient::get_valid_transaction_types(self).await
    }

    async fn get_market_summary(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::get_market_summary(self, primary_currency_code, secondary_currency_code).await
    }

    async fn get_order_book(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::get_order_book(self, primary_currency_code, secondary_currency_code).await
    }

    async fn get_all_orders(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::get_all_orders(self, primary_currency_code, secondary_currency_code).await
    }

    async fn get_trade_history_summary(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
        number_of_hours_in_the_past_to_retrieve: u32,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::get_trade_history_summary(
            self,
            primary_currency_code,
            secondary_currency_code,
            number_of_hours_in_the_past_to_retrieve,
        )
        .await
    }

    async fn get_recent_trades(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
        number_of_recent_trades_to_retrieve: u32,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::get_recent_trades(
            self,
            primary_currency_code,
            secondary_currency_code,
            number_of_recent_trades_to_retrieve,
        )
        .await
    }

    async fn get_fx_rates(&self) -> Result<Value, IndependentReserveError> {
        RestClient::get_fx_rates(self).await
    }

    // ========== Private Methods ==========

    async fn get_open_orders(
        &self,
        primary_currency_code: Option<&str>,
        secondary_currency_code: Option<&str>,
        page_index: u32,
        page_size: u32,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::get_open_orders(
            self,
            primary_currency_code,
            secondary_currency_code,
            page_index,
            page_size,
        )
        .await
    }

    async fn get_closed_orders(
        &self,
        primary_currency_code: Option<&str>,
        secondary_currency_code: Option<&str>,
        page_index: u32,
        page_size: u32,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::get_closed_orders(
            self,
            primary_currency_code,
            secondary_currency_code,
            page_index,
            page_size,
        )
        .await
    }

    async fn get_closed_filled_orders(
        &self,
        primary_currency_code: Option<&str>,
        secondary_currency_code: Option<&str>,
        page_index: u32,
        page_size: u32,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::get_closed_filled_orders(
            self,
            primary_currency_code,
            secondary_currency_code,
            page_index,
            page_size,
        )
        .await
    }

    async fn get_order_details(&self, order_guid: &str) -> Result<Value, IndependentReserveError> {
        RestClient::get_order_details(self, order_guid).await
    }

    async fn get_accounts(&self) -> Result<Value, IndependentReserveError> {
        RestClient::get_accounts(self).await
    }

    async fn get_transactions(
        &self,
        account_guid: &str,
        from_timestamp_utc: Option<&str>,
        to_timestamp_utc: Option<&str>,
        tx_types: &[&str],
        page_index: u32,
        page_size: u32,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::get_transactions(
            self,
            account_guid,
            from_timestamp_utc,
            to_timestamp_utc,
            tx_types,
            page_index,
            page_size,
        )
        .await
    }

    async fn get_digital_currency_deposit_address(
        &self,
        primary_currency_code: &str,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::get_digital_currency_deposit_address(self, primary_currency_code).await
    }

    async fn get_digital_currency_deposit_addresses(
        &self,
        primary_currency_code: &str,
        page_index: u32,
        page_size: u32,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::get_digital_currency_deposit_addresses(
            self,
            primary_currency_code,
            page_index,
            page_size,
        )
        .await
    }

    async fn get_trades(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::get_trades(self, page_index, page_size).await
    }

    async fn get_brokerage_fees(&self) -> Result<Value, IndependentReserveError> {
        RestClient::get_brokerage_fees(self).await
    }

    async fn place_limit_order(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
        order_type: LimitOrderType,
        price: Decimal,
        volume: Decimal,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::place_limit_order(
            self,
            primary_currency_code,
            secondary_currency_code,
            order_type,
            price,
            volume,
        )
        .await
    }

    async fn place_market_order(
        &self,
        primary_currency_code: &str,
        secondary_currency_code: &str,
        order_type: MarketOrderType,
        volume: Decimal,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::place_market_order(
            self,
            primary_currency_code,
            secondary_currency_code,
            order_type,
            volume,
        )
        .await
    }

    async fn cancel_order(&self, order_guid: &str) -> Result<Value, IndependentReserveError> {
        RestClient::cancel_order(self, order_guid).await
    }

    async fn synch_digital_currency_deposit_address_with_blockchain(
        &self,
        deposit_address: &str,
        primary_currency_code: &str,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::synch_digital_currency_deposit_address_with_blockchain(
            self,
            deposit_address,
            primary_currency_code,
        )
        .await
    }

    async fn request_fiat_withdrawal(
        &self,
        secondary_currency_code: &str,
        withdrawal_amount: Decimal,
        withdrawal_bank_account_name: &str,
        comment: &str,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::request_fiat_withdrawal(
            self,
            secondary_currency_code,
            withdrawal_amount,
            withdrawal_bank_account_name,
            comment,
        )
        .await
    }

    async fn withdraw_digital_currency(
        &self,
        amount: Decimal,
        withdrawal_address: &str,
        comment: &str,
    ) -> Result<Value, IndependentReserveError> {
        RestClient::withdraw_digital_currency(self, amount, withdrawal_address, comment).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_body_key_order() {
        let envelope = SignedEnvelope {
            api_key: "key".to_string(),
            nonce: "0000000000000000001".to_string(),
            signature: "AB".to_string(),
        };
        let params = RequestParams::new()
            .with("orderGuid", "c7347e4c")
            .with("comment", "x");
        let body = SignedBody {
            envelope: &envelope,
            params: &params,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            r#"{"apiKey":"key","nonce":"0000000000000000001","signature":"AB","orderGuid":"c7347e4c","comment":"x"}"#
        );
    }

    #[test]
    fn test_client_debug_omits_credentials() {
        let client = RestClient::with_credentials("key", "secret");
        let debug = format!("{client:?}");
        assert!(debug.contains("has_credentials: true"));
        assert!(!debug.contains("secret"));
    }
}
