//! Connect to an attached RC-S300, wait for a card and dump one block.
//!
//! Run with: `cargo run --example read_card --features usb`

use anyhow::Context;

use rcs300::reader::CardReader;
use rcs300::transport::usb::UsbDiscovery;
use rcs300::{AccessMode, BlockListParam, ServiceReadParam};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut discovery = UsbDiscovery::new().context("libusb context")?;
    let Some(mut reader) = CardReader::connect(&mut discovery, true).await? else {
        println!("no supported reader attached");
        return Ok(());
    };

    println!("touch a card on the reader…");
    let Some(card) = reader.polling(10).await? else {
        println!("no card detected");
        return Ok(());
    };
    println!("card found: idm={} system_code={}", card.idm, card.system_code);

    // Suica/PASMO trip history service, first block.
    let params = vec![ServiceReadParam {
        service_code: "090f".to_string(),
        block_list: BlockListParam {
            access_mode: AccessMode::Normal,
            block_no_start: 0,
            block_no_end: 0,
        },
    }];
    match reader.read_without_encryption(&params).await {
        Some(result) => println!(
            "status {}/{} blocks={} data={}",
            result.status_flag1, result.status_flag2, result.block_size, result.block_data
        ),
        None => println!("read did not complete"),
    }

    Ok(())
}
