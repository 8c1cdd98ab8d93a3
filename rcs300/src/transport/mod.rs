// rcs300-rs/rcs300/src/transport/mod.rs

//! Transport seam between the device/session logic and the host USB stack.
//!
//! The crate never talks to USB directly; everything goes through the
//! [`Transport`] and [`DeviceDiscovery`] traits so hosts (and tests) can
//! substitute their own implementation.

pub mod descriptor;
pub mod mock;
pub mod traits;
pub mod usb;

pub use descriptor::{ConfigurationDescriptor, Direction, EndpointDescriptor, InterfaceDescriptor};
pub use traits::{DeviceDiscovery, DeviceFilter, Transport};
