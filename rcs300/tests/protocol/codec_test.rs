use rcs300::protocol::{add_request_header, unwrap, wrap};

#[test]
fn unwrap_locates_marker_payload() {
    let resp = unwrap(&[0x11, 0x22, 0x97, 0x04, 0x00, 0x05, 0x10, 0x20]).unwrap();
    assert_eq!(resp.length, 4);
    assert_eq!(resp.response_code, 5);
    assert_eq!(resp.data, vec![0x10, 0x20]);
}

#[test]
fn unwrap_none_without_marker() {
    assert!(unwrap(&hex::decode("0011223344556677").unwrap()).is_none());
}

#[test]
fn wrap_then_frame_matches_expected_layout() {
    // A one-byte command wrapped and framed, end to end.
    let wrapped = wrap(&[0x00], 100);
    let framed = add_request_header(&wrapped, 0);

    // Bridge header first.
    assert_eq!(framed[0], 0x6b);
    assert_eq!(
        u32::from_le_bytes([framed[1], framed[2], framed[3], framed[4]]),
        wrapped.len() as u32
    );
    assert_eq!(framed[5], 0x00); // slot
    assert_eq!(framed[6], 0x00); // sequence

    // CommunicateThru envelope next.
    assert_eq!(&framed[7..12], &hex::decode("ff50000100").unwrap()[..]);
    // reqLen = cmdLen + 11 = 2 + 11
    assert_eq!(&framed[12..14], &[0x00, 0x0d]);
    // Trailer closes the envelope.
    assert_eq!(&framed[framed.len() - 3..], &[0x00, 0x00, 0x00]);
}

#[test]
fn wrap_emits_duplicate_command_length() {
    let wrapped = wrap(&[0x06, 0x01], 100);
    // cmdLen = 3, once big-endian over two bytes, once as the FeliCa frame
    // length byte.
    let tail = &wrapped[wrapped.len() - 8..];
    assert_eq!(tail, &[0x00, 0x03, 0x03, 0x06, 0x01, 0x00, 0x00, 0x00]);
}
