// rcs300-rs/rcs300/src/transport/traits.rs

use async_trait::async_trait;
use derive_more::Display;

use crate::Result;
use crate::transport::descriptor::ConfigurationDescriptor;

/// Transport trait abstracts the host USB stack away from protocol/device
/// logic. The protocol is strictly half-duplex: callers never issue two
/// transfers concurrently on one transport.
#[async_trait]
pub trait Transport: Send {
    /// Vendor id of the underlying device.
    fn vendor_id(&self) -> u16;

    /// Product id of the underlying device.
    fn product_id(&self) -> u16;

    /// Descriptor tree of the device, available before opening.
    fn configurations(&self) -> Vec<ConfigurationDescriptor>;

    /// Open the device for exclusive use.
    async fn open(&mut self) -> Result<()>;

    /// Close the device and drop exclusive use.
    async fn close(&mut self) -> Result<()>;

    /// Select the active configuration.
    async fn select_configuration(&mut self, configuration_value: u8) -> Result<()>;

    /// Claim an interface of the active configuration.
    async fn claim_interface(&mut self, interface_number: u8) -> Result<()>;

    /// Release a previously claimed interface.
    async fn release_interface(&mut self, interface_number: u8) -> Result<()>;

    /// Write `data` to the given OUT endpoint. Returns bytes written.
    async fn transfer_out(&mut self, endpoint: u8, data: &[u8]) -> Result<usize>;

    /// Read up to `length` bytes from the given IN endpoint.
    async fn transfer_in(&mut self, endpoint: u8, length: usize) -> Result<Vec<u8>>;
}

/// A (vendor id, product id) pair restricting device discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{:04x}:{:04x}", vendor_id, product_id)]
pub struct DeviceFilter {
    /// USB vendor id.
    pub vendor_id: u16,
    /// USB product id.
    pub product_id: u16,
}

impl DeviceFilter {
    /// True when the pair matches this filter.
    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }
}

/// Device discovery / pairing capability of the host environment.
///
/// `authorized_devices` lists devices the host has already granted access
/// to; `request_device` asks the host to pair a new one, restricted by
/// `filters`. A dismissed prompt surfaces as
/// [`crate::Error::SelectionCancelled`].
#[async_trait]
pub trait DeviceDiscovery {
    /// Devices already authorized by the host.
    async fn authorized_devices(&mut self) -> Result<Vec<Box<dyn Transport>>>;

    /// Prompt for a new device restricted to `filters`.
    async fn request_device(&mut self, filters: &[DeviceFilter]) -> Result<Box<dyn Transport>>;
}
