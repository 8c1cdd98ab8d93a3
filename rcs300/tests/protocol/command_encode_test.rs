use rcs300::protocol::commands::{
    encode_polling, encode_read_without_encryption, encode_request_service,
};
use rcs300::{AccessMode, BlockListParam, Error, Idm, ServiceReadParam};

fn idm() -> Idm {
    Idm::from_bytes([0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08])
}

fn read_param(code: &str, start: u32, end: u32) -> ServiceReadParam {
    ServiceReadParam {
        service_code: code.to_string(),
        block_list: BlockListParam {
            access_mode: AccessMode::Normal,
            block_no_start: start,
            block_no_end: end,
        },
    }
}

#[test]
fn polling_command_is_fixed() {
    assert_eq!(encode_polling(), hex::decode("00ffff0100").unwrap());
}

#[test]
fn request_service_layout() {
    let cmd = encode_request_service(&idm(), &[0x0b, 0x00, 0x4b, 0x00]).unwrap();
    assert_eq!(cmd, hex::decode("020102030405060708020b004b00").unwrap());
}

#[test]
fn request_service_rejects_bad_lengths() {
    for (list, expected_len) in [
        (vec![], 0usize),
        (vec![0x11, 0x11, 0x11], 3),
        (vec![0u8; 66], 66),
    ] {
        match encode_request_service(&idm(), &list) {
            Err(Error::InvalidNodeCodeList { actual }) => assert_eq!(actual, expected_len),
            other => panic!("expected InvalidNodeCodeList, got {:?}", other),
        }
    }
}

#[test]
fn read_rejects_bad_param_counts() {
    match encode_read_without_encryption(&idm(), &[]) {
        Err(Error::InvalidServiceCount { actual: 0 }) => {}
        other => panic!("expected InvalidServiceCount, got {:?}", other),
    }
    let params: Vec<_> = (0..17).map(|_| read_param("090f", 0, 0)).collect();
    match encode_read_without_encryption(&idm(), &params) {
        Err(Error::InvalidServiceCount { actual: 17 }) => {}
        other => panic!("expected InvalidServiceCount, got {:?}", other),
    }
}

#[test]
fn read_rejects_short_service_code() {
    match encode_read_without_encryption(&idm(), &[read_param("123", 0, 0)]) {
        Err(Error::InvalidServiceCode { code }) => assert_eq!(code, "123"),
        other => panic!("expected InvalidServiceCode, got {:?}", other),
    }
}

#[test]
fn read_single_service_layout() {
    let cmd = encode_read_without_encryption(&idm(), &[read_param("090f", 0, 1)]).unwrap();
    let mut expected = vec![0x06];
    expected.extend_from_slice(idm().as_bytes());
    expected.push(1); // service count
    expected.extend_from_slice(&[0x0f, 0x09]); // LE service code
    expected.push(2); // total block count
    expected.extend_from_slice(&[0x80, 0, 0x80, 1]);
    assert_eq!(cmd, expected);
}

// Pins today's multi-service output: every service's block list is built
// with service list order 0, so the entries are indistinguishable per
// service. Any firmware-side fix changing the order indexing must update
// these bytes deliberately.
#[test]
fn read_multi_service_keeps_order_zero_for_every_service() {
    let cmd = encode_read_without_encryption(
        &idm(),
        &[read_param("090f", 0, 1), read_param("1a8b", 2, 2)],
    )
    .unwrap();

    let mut expected = vec![0x06];
    expected.extend_from_slice(idm().as_bytes());
    expected.push(2); // service count
    expected.extend_from_slice(&[0x0f, 0x09, 0x8b, 0x1a]); // LE service codes
    expected.push(3); // total block count across both services
    // Both lists carry d0 = 0x80: the second service's entries do NOT
    // carry order 1.
    expected.extend_from_slice(&[0x80, 0, 0x80, 1, 0x80, 2]);
    assert_eq!(cmd, expected);
}
