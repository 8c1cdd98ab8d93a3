// rcs300-rs/rcs300/src/protocol/commands/read.rs

use crate::constants;
use crate::types::{AccessMode, BlockListParam, Idm, ServiceReadParam};
use crate::{Error, Result};

/// Build the block-list bytes for one service.
///
/// Two-byte entries when every block number fits a byte, three-byte entries
/// otherwise. Control byte `d0`: 0x80 for the two-byte form, +0x10 for
/// purse-cashback access, + the service list order.
pub fn construct_block_list(param: &BlockListParam, service_list_order: usize) -> Result<Vec<u8>> {
    if param.block_no_end > 0xffff {
        return Err(Error::BlockNumberOutOfRange {
            block_no: param.block_no_end,
        });
    }
    if service_list_order > 0xff {
        return Err(Error::ServiceOrderOutOfRange {
            order: service_list_order,
        });
    }

    let two_byte = param.block_no_end <= 0xff;
    let mut d0 = service_list_order;
    if two_byte {
        d0 += 0x80;
    }
    if param.access_mode == AccessMode::PurseCashback {
        d0 += 0x10;
    }
    let d0 = d0 as u8;

    let entry_len = if two_byte { 2 } else { 3 };
    let mut list = Vec::with_capacity(param.block_count() as usize * entry_len);
    for i in param.block_no_start..=param.block_no_end {
        list.push(d0);
        list.push((i & 0xff) as u8);
        if !two_byte {
            list.push(((i >> 8) & 0xff) as u8);
        }
    }
    Ok(list)
}

/// Encode ReadWithoutEncryption (FeliCa command code 0x06).
/// Layout: `command_code(1) + idm(8) + service_count(1) + service_codes(2*N)
/// + total_block_count(1) + block_list`
///
/// Service codes are transmitted little-endian. Note: the block list is
/// built with service list order 0 for every service, also when several
/// services are read in one call; kept until the reader firmware contract
/// says otherwise.
pub fn encode_read_without_encryption(idm: &Idm, params: &[ServiceReadParam]) -> Result<Vec<u8>> {
    if params.is_empty() || params.len() > 16 {
        return Err(Error::InvalidServiceCount {
            actual: params.len(),
        });
    }

    let mut service_codes = Vec::with_capacity(params.len() * 2);
    let mut block_list = Vec::new();
    let mut total_block_count: u32 = 0;
    for param in params {
        let code = param.service_code_value()?;
        service_codes.extend_from_slice(&code.to_le_bytes());
        block_list.extend(construct_block_list(&param.block_list, 0)?);
        total_block_count += param.block_list.block_count();
    }

    let mut buf = Vec::with_capacity(1 + 8 + 1 + service_codes.len() + 1 + block_list.len());
    buf.push(constants::FELICA_CMD_READ_WITHOUT_ENCRYPTION);
    buf.extend_from_slice(idm.as_bytes());
    buf.push(params.len() as u8);
    buf.extend_from_slice(&service_codes);
    buf.push(total_block_count as u8);
    buf.extend_from_slice(&block_list);
    Ok(buf)
}
