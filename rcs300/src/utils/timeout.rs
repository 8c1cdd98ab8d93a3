//! Timeout and delay helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the fixed delays the bridge
//! protocol requires and provide a small conversion helper so tests and code
//! can express timeouts in milliseconds clearly.

use std::time::Duration;

/// Per-attempt card timeout in milliseconds used by polling when a caller
/// doesn't provide an explicit timeout.
pub const DEFAULT_POLLING_TIMEOUT_MS: u64 = 100;

/// Card timeout for the non-polling FeliCa exchanges.
pub const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 100;

/// Settle delay around the RF on/off handshake receives.
pub const RF_SETTLE_DELAY_MS: u64 = 50;

/// Backoff between card-detection attempts in the orchestrator retry loop.
pub const POLLING_RETRY_DELAY_MS: u64 = 1000;

/// Default number of card-detection attempts.
pub const DEFAULT_MAX_TRY_COUNT: u32 = 10;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
