// rcs300-rs/rcs300/src/protocol/commands/service.rs

use crate::constants;
use crate::types::Idm;
use crate::{Error, Result};

/// Encode RequestService (FeliCa command code 0x02).
/// Layout: `command_code(1) + idm(8) + node_count(1) + node_code_list(2*N)`
///
/// `node_code_list` is the raw little-endian byte list, two bytes per node;
/// an odd, empty or over-long list is rejected before any I/O.
pub fn encode_request_service(idm: &Idm, node_code_list: &[u8]) -> Result<Vec<u8>> {
    let len = node_code_list.len();
    if len % 2 != 0 || len < 2 || len > 64 {
        return Err(Error::InvalidNodeCodeList { actual: len });
    }

    let mut buf = Vec::with_capacity(1 + 8 + 1 + len);
    buf.push(constants::FELICA_CMD_REQUEST_SERVICE);
    buf.extend_from_slice(idm.as_bytes());
    buf.push((len / 2) as u8);
    buf.extend_from_slice(node_code_list);
    Ok(buf)
}
