//! HMAC-SHA256 signature generation for Independent Reserve API
//! authentication.
//!
//! Private endpoints require a signature computed over a canonical message
//! built from the request URL and its parameters:
//!
//! ```text
//! <url>,apiKey=<key>,nonce=<nonce>[,<name>=<value>...]
//! ```
//!
//! The signature is the uppercase hex encoding of
//! `HMAC-SHA256(message, api_secret)` and is sent in the JSON body
//! alongside the API key and nonce.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::auth::nonce::pad_nonce;
use crate::error::IndependentReserveError;
use crate::types::RequestParams;

type HmacSha256 = Hmac<Sha256>;

/// The authentication fields required by every private call.
///
/// Computed fresh per request and discarded once the request completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedEnvelope {
    /// The API key identifying the caller
    pub api_key: String,
    /// The 19-character zero-padded nonce
    pub nonce: String,
    /// Uppercase hex HMAC-SHA256 signature over the canonical message
    pub signature: String,
}

/// Sign a private API request.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `url` - The full target URL (base URL + endpoint path)
/// * `nonce` - Raw nonce in microseconds since the UNIX epoch
/// * `params` - The caller's request parameters, in wire order
///
/// # Example
///
/// ```rust,no_run
/// use independent_reserve_api_client::auth::{Credentials, sign_request};
/// use independent_reserve_api_client::types::RequestParams;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let params = RequestParams::new().with("orderGuid", "c7347e4c-b865-4c94-8f74-d934d4b0b177");
/// let envelope = sign_request(
///     &credentials,
///     "https://api.independentreserve.com/Private/CancelOrder",
///     1754380800000000,
///     &params,
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    url: &str,
    nonce: u64,
    params: &RequestParams,
) -> Result<SignedEnvelope, IndependentReserveError> {
    let nonce = pad_nonce(nonce);
    let message = unsigned_message(url, &credentials.api_key, &nonce, params);

    let mut mac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| IndependentReserveError::Auth(format!("Invalid HMAC key: {e}")))?;
    mac.update(message.as_bytes());
    let digest = mac.finalize().into_bytes();

    Ok(SignedEnvelope {
        api_key: credentials.api_key.clone(),
        nonce,
        signature: hex::encode_upper(digest),
    })
}

/// Build the canonical unsigned message for a request.
///
/// The API key and nonce are injected as the first two parameters so they
/// participate in the signed message at a fixed position; caller parameters
/// follow in their insertion order.
fn unsigned_message(url: &str, api_key: &str, nonce: &str, params: &RequestParams) -> String {
    let mut message = format!("{url},apiKey={api_key},nonce={nonce}");
    for (name, value) in params.iter() {
        message.push(',');
        message.push_str(name);
        message.push('=');
        message.push_str(&value.canonical_text());
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    const URL: &str = "https://api.independentreserve.com/Private/PlaceLimitOrder";
    const NONCE: u64 = 1_234_567_890_123_456;

    fn credentials() -> Credentials {
        Credentials::new("test-api-key", "test-api-secret")
    }

    fn order_params() -> RequestParams {
        RequestParams::new()
            .with("primaryCurrencyCode", "Xbt")
            .with("secondaryCurrencyCode", "Usd")
            .with("orderType", "LimitBid")
            .with("price", "485.76".parse::<Decimal>().unwrap())
            .with("volume", "0.358".parse::<Decimal>().unwrap())
    }

    #[test]
    fn test_unsigned_message_shape() {
        let message = unsigned_message(URL, "test-api-key", "0001234567890123456", &order_params());
        assert_eq!(
            message,
            "https://api.independentreserve.com/Private/PlaceLimitOrder,\
             apiKey=test-api-key,nonce=0001234567890123456,\
             primaryCurrencyCode=Xbt,secondaryCurrencyCode=Usd,\
             orderType=LimitBid,price=485.76,volume=0.358"
        );
    }

    #[test]
    fn test_known_answer_signature() {
        // Computed independently with a reference HMAC-SHA256 implementation.
        let envelope = sign_request(&credentials(), URL, NONCE, &order_params()).unwrap();
        assert_eq!(envelope.api_key, "test-api-key");
        assert_eq!(envelope.nonce, "0001234567890123456");
        assert_eq!(
            envelope.signature,
            "645710699171BFF7E94C06E549C2548D00B9D6188794A009E5A7B01D1C598FB4"
        );
    }

    #[test]
    fn test_known_answer_signature_no_params() {
        let envelope = sign_request(
            &credentials(),
            "https://api.independentreserve.com/Private/GetAccounts",
            NONCE,
            &RequestParams::new(),
        )
        .unwrap();
        assert_eq!(
            envelope.signature,
            "0973567F1D3B9E873CE0675943E31221F45A621D71CECF0D46149F2967FC170C"
        );
    }

    #[test]
    fn test_signature_is_deterministic() {
        let a = sign_request(&credentials(), URL, NONCE, &order_params()).unwrap();
        let b = sign_request(&credentials(), URL, NONCE, &order_params()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_changes_with_any_parameter() {
        let base = sign_request(&credentials(), URL, NONCE, &order_params()).unwrap();
        let mut altered = RequestParams::new();
        for (name, value) in order_params().iter() {
            if name == "volume" {
                altered.insert(name.clone(), "0.359");
            } else {
                altered.insert(name.clone(), value.clone());
            }
        }
        let changed = sign_request(&credentials(), URL, NONCE, &altered).unwrap();
        assert_ne!(base.signature, changed.signature);
    }

    #[test]
    fn test_signature_changes_with_parameter_order() {
        let forward = RequestParams::new()
            .with("primaryCurrencyCode", "Xbt")
            .with("secondaryCurrencyCode", "Usd");
        let reversed = RequestParams::new()
            .with("secondaryCurrencyCode", "Usd")
            .with("primaryCurrencyCode", "Xbt");
        let a = sign_request(&credentials(), URL, NONCE, &forward).unwrap();
        let b = sign_request(&credentials(), URL, NONCE, &reversed).unwrap();
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn test_signature_changes_with_nonce() {
        let a = sign_request(&credentials(), URL, NONCE, &order_params()).unwrap();
        let b = sign_request(&credentials(), URL, NONCE + 1, &order_params()).unwrap();
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn test_list_parameter_signs_first_element_only() {
        let single = RequestParams::new().with("txTypes", vec!["Brokerage"]);
        let multi = RequestParams::new().with("txTypes", vec!["Brokerage", "Deposit"]);
        let a = sign_request(&credentials(), URL, NONCE, &single).unwrap();
        let b = sign_request(&credentials(), URL, NONCE, &multi).unwrap();
        assert_eq!(a.signature, b.signature);
    }

    #[test]
    fn test_signature_is_uppercase_hex() {
        let envelope = sign_request(&credentials(), URL, NONCE, &order_params()).unwrap();
        assert_eq!(envelope.signature.len(), 64);
        assert!(
            envelope
                .signature
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase())
        );
    }
}
