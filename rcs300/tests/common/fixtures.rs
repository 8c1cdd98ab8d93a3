// fixtures.rs — provides commonly used reply payloads and raw bridge frames

use rcs300::test_support;

pub fn sample_idm_bytes() -> [u8; 8] {
    [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
}

pub fn sample_idm_hex() -> &'static str {
    "0102030405060708"
}

pub fn sample_system_code_bytes() -> [u8; 2] {
    [0xaa, 0xbb]
}

/// Raw bridge reply to a polling command.
pub fn polling_reply() -> Vec<u8> {
    test_support::bridge_response(
        0x01,
        &test_support::polling_body(sample_idm_bytes(), sample_system_code_bytes()),
    )
}

/// Raw bridge reply to a RequestService command carrying `key_versions`.
pub fn request_service_reply(key_versions: &[u8]) -> Vec<u8> {
    let mut data = sample_idm_bytes().to_vec();
    data.push((key_versions.len() / 2) as u8);
    data.extend_from_slice(key_versions);
    test_support::bridge_response(0x03, &data)
}

/// Raw bridge reply to a ReadWithoutEncryption command carrying `blocks`
/// concatenated block data.
pub fn read_reply(block_count: u8, blocks: &[u8]) -> Vec<u8> {
    let mut data = sample_idm_bytes().to_vec();
    data.push(0x00); // status1
    data.push(0x00); // status2
    data.push(block_count);
    data.extend_from_slice(blocks);
    test_support::bridge_response(0x07, &data)
}
