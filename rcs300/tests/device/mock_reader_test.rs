use crate::common::{fixtures, helpers};

use std::sync::{Arc, Mutex};

use rcs300::reader::{CardReader, Notifier};
use rcs300::transport::Transport;
use rcs300::transport::mock::{MockDiscovery, MockTransport, SharedMockTransport};
use rcs300::{AccessMode, BlockListParam, ServiceReadParam};

struct RecordingNotifier(Arc<Mutex<Vec<String>>>);

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

fn read_params() -> Vec<ServiceReadParam> {
    vec![ServiceReadParam {
        service_code: "090f".to_string(),
        block_list: BlockListParam {
            access_mode: AccessMode::Normal,
            block_no_start: 0,
            block_no_end: 1,
        },
    }]
}

#[tokio::test(start_paused = true)]
async fn reader_polling_retries_then_gives_up() {
    let shared = SharedMockTransport::new(MockTransport::supported());
    let mut reader = helpers::reader_over(&shared);

    assert_eq!(reader.polling(3).await.unwrap(), None);

    let mock = shared.lock();
    assert_eq!(mock.open_calls, 3);
    assert_eq!(mock.close_calls, 3);
    // Per cycle: 4 handshake sends + 1 poll send + 2 close sends.
    assert_eq!(mock.sent.len(), 3 * 7);
}

#[tokio::test(start_paused = true)]
async fn reader_polling_succeeds_second_attempt() {
    let shared = SharedMockTransport::new(MockTransport::supported());
    {
        // First bracket answers nothing; second bracket finds the card.
        let mut mock = shared.lock();
        for _ in 0..7 {
            mock.push_response(vec![0u8; 64]);
        }
        for _ in 0..4 {
            mock.push_response(vec![0u8; 64]);
        }
        mock.push_response(fixtures::polling_reply());
    }
    let mut reader = helpers::reader_over(&shared);

    let result = reader.polling(5).await.unwrap().unwrap();
    assert_eq!(result.idm, fixtures::sample_idm_hex());
    assert_eq!(shared.lock().open_calls, 2);
}

#[tokio::test(start_paused = true)]
async fn reader_request_service_full_flow() {
    let shared = helpers::shared_mock_with_replies(vec![
        fixtures::polling_reply(),
        fixtures::request_service_reply(&[0x01, 0x00]),
    ]);
    let mut reader = helpers::reader_over(&shared);

    let result = reader
        .request_service(&[0x0b, 0x00])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result.idm, fixtures::sample_idm_hex());
    assert_eq!(result.node_count, 1);
    assert_eq!(result.node_key_ver_list, vec![0x01, 0x00]);

    // Two full session brackets: poll then service exchange.
    let mock = shared.lock();
    assert_eq!(mock.open_calls, 2);
    assert_eq!(mock.close_calls, 2);
}

#[tokio::test(start_paused = true)]
async fn reader_request_service_propagates_validation_error() {
    let shared = helpers::shared_mock_with_replies(vec![fixtures::polling_reply()]);
    let mut reader = helpers::reader_over(&shared);

    match reader.request_service(&[0x0b]).await {
        Err(rcs300::Error::InvalidNodeCodeList { actual: 1 }) => {}
        other => panic!("expected InvalidNodeCodeList, got {:?}", other),
    }
    // The half-open second bracket was closed best-effort.
    assert_eq!(shared.lock().open_calls, 2);
    assert_eq!(shared.lock().close_calls, 2);
}

#[tokio::test(start_paused = true)]
async fn reader_read_full_flow() {
    let shared = helpers::shared_mock_with_replies(vec![
        fixtures::polling_reply(),
        fixtures::read_reply(2, &[0x11; 32]),
    ]);
    let mut reader = helpers::reader_over(&shared);

    let result = reader.read_without_encryption(&read_params()).await.unwrap();
    assert_eq!(result.idm, "01 02 03 04 05 06 07 08");
    assert_eq!(result.status_flag1, "00");
    assert_eq!(result.status_flag2, "00");
    assert_eq!(result.block_size, "02");
    assert_eq!(result.block_data, "11".repeat(32));
}

#[tokio::test(start_paused = true)]
async fn reader_read_swallows_failures() {
    let shared = SharedMockTransport::new(MockTransport::supported());
    // No card ever answers: polling exhausts its attempts and the call
    // resolves to None without a notification (no card is not a failure).
    let messages = Arc::new(Mutex::new(Vec::new()));
    let mut reader = helpers::reader_over(&shared)
        .with_notifier(Box::new(RecordingNotifier(Arc::clone(&messages))));

    assert_eq!(reader.read_without_encryption(&read_params()).await, None);
    assert!(messages.lock().unwrap().is_empty());

    // A transport failure on the other hand is reported and swallowed.
    shared.lock().set_transfer_failures(1);
    assert_eq!(reader.read_without_encryption(&read_params()).await, None);
    let recorded = messages.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].contains("failed to read card"));
}

#[tokio::test(start_paused = true)]
async fn connect_prompts_only_when_nothing_authorized() {
    let supported = SharedMockTransport::new(MockTransport::supported());
    let mut discovery =
        MockDiscovery::with_requestable(Box::new(supported.clone()) as Box<dyn Transport>);

    let reader = CardReader::connect(&mut discovery, false).await.unwrap();
    assert!(reader.is_some());
    assert_eq!(discovery.request_calls, 1);
    assert_eq!(discovery.recorded_filters[0], CardReader::allow_list());
}
