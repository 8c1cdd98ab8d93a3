// rcs300-rs/rcs300/src/protocol/codec.rs

use crate::constants;

/// Parsed bridge response payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FelicaResponse {
    /// Payload length as announced after the response marker.
    pub length: u8,
    /// FeliCa response code.
    pub response_code: u8,
    /// Response body following the code.
    pub data: Vec<u8>,
}

/// Wrap a raw FeliCa command into the CommunicateThru escape envelope.
///
/// Layout:
/// `[FF 50 00 01 00] [reqLen(2, BE)] [5F 46 04] [timeoutMicros(4, LE)]
///  [95 82] [cmdLen(2, BE)] [cmdLen(1)] [command(n)] [00 00 00]`
///
/// `cmdLen = n + 1` — the FeliCa frame length byte counts itself, and the
/// same value is emitted twice (2-byte TLV length, then the frame's own
/// 1-byte length). The duplication is part of the reader's instruction
/// format. `reqLen` counts both TLVs: `cmdLen + 11`.
pub fn wrap(felica_command: &[u8], timeout_millis: u64) -> Vec<u8> {
    let command_len = felica_command.len() + 1;
    let request_len = command_len + 11;
    let timeout_micros = (timeout_millis * 1000) as u32;

    let mut out = Vec::with_capacity(5 + 2 + request_len + 3);
    out.extend_from_slice(&constants::COMMUNICATE_THRU_HEADER);
    out.extend_from_slice(&(request_len as u16).to_be_bytes());
    out.extend_from_slice(&constants::TIMEOUT_TLV_HEADER);
    out.extend_from_slice(&timeout_micros.to_le_bytes());
    out.extend_from_slice(&constants::TRANSCEIVE_TLV_TAG);
    out.extend_from_slice(&(command_len as u16).to_be_bytes());
    out.push(command_len as u8);
    out.extend_from_slice(felica_command);
    out.extend_from_slice(&constants::COMMUNICATE_THRU_FOOTER);
    out
}

/// Locate and split the FeliCa payload inside a raw bridge response.
///
/// The response is scanned for the `0x97` marker; the following byte is the
/// payload length. The first payload byte repeats the FeliCa frame length
/// and is skipped; the remainder splits into `[response_code, data…]`.
/// Returns `None` when the marker is absent, the payload is empty, or the
/// buffer is truncated.
pub fn unwrap(raw: &[u8]) -> Option<FelicaResponse> {
    let marker = raw.iter().position(|&b| b == constants::RESPONSE_MARKER)?;
    let length = *raw.get(marker + 1)?;
    let end = marker + 2 + length as usize;
    let payload = raw.get(marker + 3..end)?;
    let (&response_code, data) = payload.split_first()?;
    Some(FelicaResponse {
        length,
        response_code,
        data: data.to_vec(),
    })
}
