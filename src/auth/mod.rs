//! Authentication module for the Independent Reserve API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA256 signature generation for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use nonce::{NonceProvider, WallClockNonce};
pub use signature::{SignedEnvelope, sign_request};
