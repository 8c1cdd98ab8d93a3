// rcs300-rs/rcs300/src/protocol/commands/mod.rs

//! FeliCa command encoders. One file per operation; all validation is
//! synchronous and happens here, before any byte reaches the transport.

pub mod polling;
pub mod read;
pub mod service;

pub use polling::encode_polling;
pub use read::{construct_block_list, encode_read_without_encryption};
pub use service::encode_request_service;
