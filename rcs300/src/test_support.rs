//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common mock setup so tests across the crate and
//! the tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::transport::mock::{MockTransport, SharedMockTransport};

/// Build a raw bridge response embedding a FeliCa reply: a short status
/// prefix, the `0x97` marker, the announced length, the FeliCa frame length
/// byte, the response code and the body.
#[doc(hidden)]
pub fn bridge_response(response_code: u8, data: &[u8]) -> Vec<u8> {
    let announced = (data.len() + 2) as u8;
    let mut raw = vec![0x80, 0x08, 0x00];
    raw.push(crate::constants::RESPONSE_MARKER);
    raw.push(announced);
    raw.push(announced); // FeliCa frame length byte, skipped by unwrap
    raw.push(response_code);
    raw.extend_from_slice(data);
    raw
}

/// A polling reply body for the given idm and system code bytes (PMm is
/// zero-filled).
#[doc(hidden)]
pub fn polling_body(idm: [u8; 8], system_code: [u8; 2]) -> Vec<u8> {
    let mut data = idm.to_vec();
    data.extend_from_slice(&[0u8; 8]);
    data.extend_from_slice(&system_code);
    data
}

/// Shared mock pre-seeded for one full session bracket per reply: four
/// handshake reads, the command reply itself, then the two close-side
/// reads.
#[doc(hidden)]
pub fn shared_mock_with_replies(replies: Vec<Vec<u8>>) -> SharedMockTransport {
    let mut mock = MockTransport::supported();
    for reply in replies {
        // 4 handshake reads precede each command reply.
        for _ in 0..4 {
            mock.push_response(vec![0u8; 64]);
        }
        mock.push_response(reply);
        // 2 close-side reads follow; zero-fill default covers them only if
        // the queue is empty, so seed them explicitly between brackets.
        for _ in 0..2 {
            mock.push_response(vec![0u8; 64]);
        }
    }
    SharedMockTransport::new(mock)
}
