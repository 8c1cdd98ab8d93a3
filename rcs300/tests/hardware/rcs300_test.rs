use serial_test::serial;

use rcs300::reader::CardReader;
use rcs300::transport::usb::UsbDiscovery;

#[tokio::test]
#[serial]
#[ignore = "requires hardware (RC-S300)"]
async fn connect_and_poll_real_reader() {
    env_logger::builder().is_test(true).try_init().ok();

    let mut discovery = UsbDiscovery::new().expect("libusb context");
    let reader = CardReader::connect(&mut discovery, true)
        .await
        .expect("discovery failed");
    let Some(mut reader) = reader else {
        // No reader attached; nothing to assert against.
        return;
    };

    // One short detection run; passes with or without a card in the field.
    match reader.polling(2).await {
        Ok(Some(card)) => {
            assert_eq!(card.idm.len(), 16);
            assert_eq!(card.system_code.len(), 4);
        }
        Ok(None) => {}
        Err(e) => panic!("polling failed against real hardware: {e}"),
    }
}
