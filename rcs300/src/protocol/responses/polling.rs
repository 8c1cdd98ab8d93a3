// rcs300-rs/rcs300/src/protocol/responses/polling.rs

use crate::protocol::codec::FelicaResponse;
use crate::types::PollingResult;
use crate::utils::bytes_to_hex;

/// Decode a Polling response body.
/// Layout: `idm(8) + pmm(8) + system_code(2)`; the PMm bytes are not
/// surfaced.
pub fn decode_polling(resp: &FelicaResponse) -> Option<PollingResult> {
    let data = &resp.data;
    if data.len() < 18 {
        return None;
    }
    Some(PollingResult {
        idm: bytes_to_hex(&data[0..8]),
        system_code: bytes_to_hex(&data[16..18]),
    })
}
