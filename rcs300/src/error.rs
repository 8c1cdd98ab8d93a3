// rcs300-rs/rcs300/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    /// The user dismissed the device-selection prompt. Treated as a benign
    /// "no device" outcome by [`crate::reader::CardReader::connect`].
    #[error("device selection cancelled")]
    SelectionCancelled,

    #[error("device has no usb configuration")]
    MissingConfiguration,

    #[error("device has no {direction} endpoint")]
    MissingEndpoint { direction: &'static str },

    #[error("invalid node code list length {actual}: want an even count in 2..=64")]
    InvalidNodeCodeList { actual: usize },

    #[error("invalid service count {actual}: want 1..=16 services per read")]
    InvalidServiceCount { actual: usize },

    #[error("invalid service code {code:?}: expected exactly 4 hex digits")]
    InvalidServiceCode { code: String },

    #[error("block number {block_no:#x} out of range: max 0xffff")]
    BlockNumberOutOfRange { block_no: u32 },

    #[error("service list order {order:#x} out of range: max 0xff")]
    ServiceOrderOutOfRange { order: usize },

    #[error("invalid idm string: {0}")]
    InvalidIdm(String),

    // USB 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("operation timed out")]
    Timeout,

    #[error("device session is not open")]
    SessionNotOpen,
}

impl Error {
    /// True for the validation class: synchronous failures raised before any
    /// I/O is issued. Never retried.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidNodeCodeList { .. }
                | Error::InvalidServiceCount { .. }
                | Error::InvalidServiceCode { .. }
                | Error::BlockNumberOutOfRange { .. }
                | Error::ServiceOrderOutOfRange { .. }
                | Error::InvalidIdm(_)
        )
    }

    /// True when the user dismissed the device-selection prompt.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Error::SelectionCancelled)
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
