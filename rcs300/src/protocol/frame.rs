// rcs300-rs/rcs300/src/protocol/frame.rs

use crate::constants;

/// Prefix a payload with the bridge request header.
/// Format: `[0x6B] [Len(4, LE)] [Slot(1)] [Seq(1)] [Payload(n)]`
///
/// The sequence byte is a per-device counter used only for tracing; the
/// reader echoes it back but protocol correctness does not depend on it.
pub fn add_request_header(payload: &[u8], sequence: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(7 + payload.len());
    out.push(constants::REQUEST_HEADER);
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.push(constants::SLOT_NUMBER);
    out.push(sequence);
    out.extend_from_slice(payload);
    out
}
