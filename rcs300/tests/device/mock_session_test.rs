use crate::common::{fixtures, helpers};

use rcs300::Error;
use rcs300::transport::mock::{MockTransport, SharedMockTransport};

#[tokio::test]
async fn session_open_close_exchange_counts() {
    let shared = SharedMockTransport::new(MockTransport::supported());
    let mut device = helpers::device_over(&shared);

    device.open_device().await.unwrap();
    assert_eq!(shared.lock().sent.len(), 4);

    device.close_device().await.unwrap();
    assert_eq!(shared.lock().sent.len(), 6);
    assert_eq!(shared.lock().open_calls, 1);
    assert_eq!(shared.lock().close_calls, 1);
}

#[tokio::test]
async fn polling_extracts_idm_and_system_code() {
    let shared = helpers::shared_mock_with_replies(vec![fixtures::polling_reply()]);
    let mut device = helpers::device_over(&shared);

    device.open_device().await.unwrap();
    let result = device.polling(100).await.unwrap().unwrap();
    device.close_device().await.unwrap();

    assert_eq!(result.idm, fixtures::sample_idm_hex());
    assert_eq!(result.system_code, "AABB");
}

#[tokio::test]
async fn request_service_round_trip() {
    let shared =
        helpers::shared_mock_with_replies(vec![fixtures::request_service_reply(&[0x00, 0x01])]);
    let mut device = helpers::device_over(&shared);

    device.open_device().await.unwrap();
    let idm = rcs300::Idm::from_bytes(fixtures::sample_idm_bytes());
    let result = device
        .request_service(&idm, &[0x0b, 0x00])
        .await
        .unwrap()
        .unwrap();
    device.close_device().await.unwrap();

    assert_eq!(result.idm, fixtures::sample_idm_hex());
    assert_eq!(result.node_count, 1);
    assert_eq!(result.node_key_ver_list, vec![0x00, 0x01]);

    // The encoded RequestService command went out inside the envelope.
    let mut expected_command = vec![0x02];
    expected_command.extend_from_slice(&fixtures::sample_idm_bytes());
    expected_command.push(1);
    expected_command.extend_from_slice(&[0x0b, 0x00]);
    let sent = shared.lock().sent.clone();
    assert!(
        sent.iter()
            .any(|frame| helpers::contains_subslice(frame, &expected_command))
    );
}

#[tokio::test]
async fn open_device_rejects_endpointless_descriptor() {
    let mock = MockTransport::supported().with_configurations(vec![
        rcs300::transport::ConfigurationDescriptor {
            configuration_value: 1,
            interfaces: vec![],
        },
    ]);
    let mut device = rcs300::FelicaDevice::new(Box::new(mock));
    match device.open_device().await {
        Err(Error::MissingEndpoint { direction: "input" }) => {}
        other => panic!("expected MissingEndpoint, got {:?}", other),
    }
}
