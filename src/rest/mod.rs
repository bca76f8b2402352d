//! Independent Reserve REST API client.
//!
//! Provides access to all Independent Reserve REST API methods through a
//! uniform dispatcher: the method registry in [`endpoints`] decides the
//! HTTP verb, the endpoint path, and whether parameters travel as a query
//! string or inside a signed JSON body.
//!
//! # Trait-based API
//!
//! The [`IndependentReserveClient`] trait abstracts all API operations,
//! enabling mock implementations for testing and decorator-style wrappers.
//!
//! ```rust,ignore
//! use independent_reserve_api_client::rest::{IndependentReserveClient, RestClient};
//!
//! async fn print_summary<C: IndependentReserveClient>(client: &C) {
//!     if let Ok(summary) = client.get_market_summary("Xbt", "Usd").await {
//!         println!("{summary}");
//!     }
//! }
//! ```

mod client;
mod endpoints;
mod private;
mod public;
mod traits;

pub use client::{RestClient, RestClientBuilder};
pub use endpoints::{ApiMethod, BASE_URL, Visibility};
pub use traits::IndependentReserveClient;
