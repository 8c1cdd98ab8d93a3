// rcs300-rs/rcs300/src/protocol/commands/polling.rs

use crate::constants;

/// Encode the Polling command (FeliCa command code 0x00).
///
/// Fixed bytes: wildcard system code 0xFFFF, request the system code back,
/// a single time slot.
pub fn encode_polling() -> Vec<u8> {
    constants::FELICA_POLLING_COMMAND.to_vec()
}
