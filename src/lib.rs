//! # Independent Reserve Client
//!
//! An async Rust client library for the Independent Reserve exchange REST
//! API.
//!
//! ## Features
//!
//! - Public market-data and private trading methods behind one dispatcher
//! - HMAC-SHA256 request signing with nonce management
//! - Compiled-in method registry: visibility is never guessed from
//!   parameters
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use independent_reserve_api_client::rest::RestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::new();
//!     let summary = client.get_market_summary("Xbt", "Usd").await?;
//!     println!("Market summary: {summary}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;
pub mod volume;

// Re-export commonly used types at crate root
pub use error::IndependentReserveError;
pub use rest::{IndependentReserveClient, RestClient, RestClientBuilder};
pub use types::{ParamValue, RequestParams};

/// Result type alias using IndependentReserveError
pub type Result<T> = std::result::Result<T, IndependentReserveError>;
