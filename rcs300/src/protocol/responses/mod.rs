// rcs300-rs/rcs300/src/protocol/responses/mod.rs

//! FeliCa response decoders. Each takes an unwrapped [`FelicaResponse`]
//! and returns `None` when the payload is too short to carry the fields.

pub mod polling;
pub mod read;
pub mod service;

pub use polling::decode_polling;
pub use read::decode_read;
pub use service::decode_request_service;
