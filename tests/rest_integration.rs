use std::sync::Arc;

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use independent_reserve_api_client::IndependentReserveError;
use independent_reserve_api_client::auth::{Credentials, NonceProvider, StaticCredentials, sign_request};
use independent_reserve_api_client::rest::RestClient;
use independent_reserve_api_client::types::{LimitOrderType, MarketOrderType, RequestParams};

const API_KEY: &str = "test_key";
const API_SECRET: &str = "test_secret";
const FIXED_NONCE: u64 = 1_234_567_890_123_456;

/// Nonce provider returning a constant, so request signatures are
/// reproducible inside a test.
struct FixedNonce(u64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}

fn build_client(server: &MockServer) -> RestClient {
    RestClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new(API_KEY, API_SECRET)))
        .nonce_provider(Arc::new(FixedNonce(FIXED_NONCE)))
        .build()
}

#[tokio::test]
async fn test_place_limit_order_signed_body() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "OrderGuid": "719c495c-a39e-4884-93ac-280b37245037",
        "Status": "Open"
    });

    Mock::given(method("POST"))
        .and(path("/Private/PlaceLimitOrder"))
        .and(body_partial_json(serde_json::json!({
            "apiKey": API_KEY,
            "primaryCurrencyCode": "Xbt",
            "secondaryCurrencyCode": "Usd",
            "orderType": "LimitBid"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = client
        .place_limit_order(
            "Xbt",
            "Usd",
            LimitOrderType::LimitBid,
            "485.76".parse().unwrap(),
            "0.358".parse().unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(order["Status"], "Open");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8(requests[0].body.clone()).unwrap();

    // The signed envelope leads the body in a fixed order, followed by the
    // caller's parameters in their original order.
    let positions: Vec<usize> = [
        "\"apiKey\"",
        "\"nonce\"",
        "\"signature\"",
        "\"primaryCurrencyCode\"",
        "\"secondaryCurrencyCode\"",
        "\"orderType\"",
        "\"price\"",
        "\"volume\"",
    ]
    .iter()
    .map(|key| body.find(key).unwrap_or_else(|| panic!("{key} missing")))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "body key order: {body}");

    // The signature covers the full target URL and the same parameters.
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["nonce"], "0001234567890123456");
    let params = RequestParams::new()
        .with("primaryCurrencyCode", "Xbt")
        .with("secondaryCurrencyCode", "Usd")
        .with("orderType", "LimitBid")
        .with("price", "485.76")
        .with("volume", "0.358");
    let expected = sign_request(
        &Credentials::new(API_KEY, API_SECRET),
        &format!("{}/Private/PlaceLimitOrder", server.uri()),
        FIXED_NONCE,
        &params,
    )
    .unwrap();
    assert_eq!(parsed["signature"], expected.signature.as_str());
}

#[tokio::test]
async fn test_api_error_message_extracted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Private/PlaceMarketOrder"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"Message": "Insufficient funds"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client
        .place_market_order("Xbt", "Usd", MarketOrderType::MarketBid, "1".parse().unwrap())
        .await;

    match result {
        Err(IndependentReserveError::Api(error)) => {
            assert_eq!(error.message, "Insufficient funds");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_raw_body_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Private/CancelOrder"))
        .respond_with(ResponseTemplate::new(400).set_body_string("gateway choked"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client.cancel_order("719c495c").await;

    match result {
        Err(IndependentReserveError::Api(error)) => {
            assert!(error.message.contains("HTTP 400"));
            assert!(error.message.contains("gateway choked"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unsupported_method_makes_no_network_call() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let result = client.call("GetMoonPhase", RequestParams::new()).await;
    match result {
        Err(IndependentReserveError::UnsupportedMethod(name)) => {
            assert_eq!(name, "GetMoonPhase");
        }
        other => panic!("expected UnsupportedMethod, got {other:?}"),
    }

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_private_method_without_credentials() {
    let server = MockServer::start().await;
    let client = RestClient::builder().base_url(server.uri()).build();

    let result = client.get_accounts().await;
    assert!(matches!(
        result,
        Err(IndependentReserveError::MissingCredentials)
    ));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_get_transactions_list_parameter() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "Data": [], "TotalItems": 0 });

    Mock::given(method("POST"))
        .and(path("/Private/GetTransactions"))
        .and(body_partial_json(serde_json::json!({
            "accountGuid": "49994921-60ec-411e-8a78-d0eba078d5e9",
            "txTypes": ["Brokerage", "Deposit"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let transactions = client
        .get_transactions(
            "49994921-60ec-411e-8a78-d0eba078d5e9",
            Some("2014-08-01T09:00:00Z"),
            None,
            &["Brokerage", "Deposit"],
            0,
            25,
        )
        .await
        .unwrap();
    assert_eq!(transactions["TotalItems"], 0);
}

#[tokio::test]
async fn test_get_accounts_empty_params_still_signed() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        { "AccountGuid": "abc", "CurrencyCode": "Usd", "AccountStatus": "Active" }
    ]);

    Mock::given(method("POST"))
        .and(path("/Private/GetAccounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let accounts = client.get_accounts().await.unwrap();
    assert_eq!(accounts[0]["AccountStatus"], "Active");

    let requests = server.received_requests().await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(parsed["apiKey"], API_KEY);
    let nonce = parsed["nonce"].as_str().unwrap();
    assert_eq!(nonce.len(), 19);
    assert!(nonce.chars().all(|c| c.is_ascii_digit()));
    let signature = parsed["signature"].as_str().unwrap();
    assert_eq!(signature.len(), 64);
    assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_volume_lookups_on_client() {
    let client = RestClient::new();
    assert_eq!(
        client.min_volume_for("Xbt").unwrap(),
        rust_decimal::Decimal::new(1, 4)
    );
    assert_eq!(client.volume_decimals_for("Eth").unwrap(), 8);
    assert!(matches!(
        client.min_volume_for("Vtc"),
        Err(IndependentReserveError::UnknownCurrency(_))
    ));
}
