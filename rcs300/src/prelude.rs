// rcs300-rs/rcs300/src/prelude.rs

//! Convenience re-exports of the public surface.

pub use crate::device::{FelicaDevice, SessionConfig, resolve_session_config};
pub use crate::protocol::FelicaResponse;
pub use crate::reader::{CardReader, LogNotifier, Notifier};
pub use crate::transport::{DeviceDiscovery, DeviceFilter, Transport};
pub use crate::{
    AccessMode, BlockListParam, Error, Idm, PollingResult, ReadResult, RequestServiceResult,
    Result, ServiceReadParam,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
