// rcs300-rs/rcs300/src/protocol/responses/read.rs

use crate::protocol::codec::FelicaResponse;
use crate::types::ReadResult;
use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};

/// Decode a ReadWithoutEncryption response body.
/// Layout: `idm(8) + status1(1) + status2(1) + block_count(1) + blocks(…)`
///
/// Status flags are surfaced verbatim; a non-zero status still yields a
/// result so callers can inspect the card's error condition.
pub fn decode_read(resp: &FelicaResponse) -> Option<ReadResult> {
    let data = &resp.data;
    if data.len() < 11 {
        return None;
    }
    Some(ReadResult {
        idm: bytes_to_hex_spaced(&data[0..8]),
        status_flag1: bytes_to_hex_spaced(&data[8..9]),
        status_flag2: bytes_to_hex_spaced(&data[9..10]),
        block_size: bytes_to_hex_spaced(&data[10..11]),
        block_data: bytes_to_hex(&data[11..]),
    })
}
