// rcs300-rs/rcs300/src/protocol/mod.rs

//! Pure framing and FeliCa command/response codecs. No I/O happens here;
//! everything takes and returns plain byte slices so the device layer can be
//! tested against a mock transport.

pub mod codec;
pub mod commands;
pub mod frame;
pub mod responses;

pub use codec::{FelicaResponse, unwrap, wrap};
pub use frame::add_request_header;
