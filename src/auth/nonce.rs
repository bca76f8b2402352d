//! Nonce generation for Independent Reserve API authentication.
//!
//! Every private request carries a single-use, increasing nonce; the
//! exchange rejects a repeated or decreasing value as a replay.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
///
/// The value must be greater than any previously returned value for the
/// same credential pair.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce as microseconds since the UNIX epoch.
    fn next_nonce(&self) -> u64;
}

/// The default nonce provider, reading the wall clock at microsecond
/// resolution.
///
/// Two calls landing in the same microsecond produce the same nonce and
/// the exchange rejects the second as a replay. There is no counter or
/// lock guarding against this; callers needing stronger guarantees can
/// supply their own [`NonceProvider`].
#[derive(Debug, Default)]
pub struct WallClockNonce;

impl WallClockNonce {
    /// Create a new wall-clock nonce provider.
    pub fn new() -> Self {
        Self
    }
}

impl NonceProvider for WallClockNonce {
    fn next_nonce(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_micros() as u64
    }
}

/// Format a raw nonce as the exchange expects it: a numeric string
/// left-padded with zeros to exactly 19 characters.
pub(crate) fn pad_nonce(micros: u64) -> String {
    format!("{micros:019}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_padded_nonce_width_and_digits() {
        let provider = WallClockNonce::new();
        let nonce = pad_nonce(provider.next_nonce());
        assert_eq!(nonce.len(), 19);
        assert!(nonce.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_pad_nonce_left_pads_with_zeros() {
        assert_eq!(pad_nonce(1_234_567_890_123_456), "0001234567890123456");
        assert_eq!(pad_nonce(0), "0000000000000000000");
    }

    #[test]
    fn test_nonce_increases_at_millisecond_spacing() {
        let provider = WallClockNonce::new();
        let mut last = provider.next_nonce();
        for _ in 0..5 {
            thread::sleep(Duration::from_millis(1));
            let next = provider.next_nonce();
            assert!(next > last, "nonce must increase across millisecond gaps");
            last = next;
        }
    }

    #[test]
    fn test_padded_nonces_compare_lexicographically() {
        let a = pad_nonce(999_999);
        let b = pad_nonce(1_000_000);
        assert!(b > a);
    }
}
