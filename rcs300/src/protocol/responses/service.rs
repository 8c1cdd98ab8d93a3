// rcs300-rs/rcs300/src/protocol/responses/service.rs

use crate::protocol::codec::FelicaResponse;
use crate::types::RequestServiceResult;
use crate::utils::bytes_to_hex;

/// Decode a RequestService response body.
/// Layout: `idm(8) + node_count(1) + node_key_ver_list(2*N)`
pub fn decode_request_service(resp: &FelicaResponse) -> Option<RequestServiceResult> {
    let data = &resp.data;
    if data.len() < 9 {
        return None;
    }
    Some(RequestServiceResult {
        idm: bytes_to_hex(&data[0..8]),
        node_count: data[8],
        node_key_ver_list: data[9..].to_vec(),
    })
}
