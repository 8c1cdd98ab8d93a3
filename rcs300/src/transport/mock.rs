// rcs300-rs/rcs300/src/transport/mock.rs

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::constants::SUPPORTED_READERS;
use crate::transport::descriptor::{
    ConfigurationDescriptor, Direction, EndpointDescriptor, InterfaceDescriptor,
};
use crate::transport::traits::{DeviceDiscovery, DeviceFilter, Transport};
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent frames and returns queued
/// responses; with an empty queue, reads return a zero-filled buffer (an
/// idle bridge with no card in the field).
#[derive(Debug)]
#[allow(missing_docs)]
pub struct MockTransport {
    pub vendor_id: u16,
    pub product_id: u16,
    pub configurations: Vec<ConfigurationDescriptor>,
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    pub opened: bool,
    pub open_calls: usize,
    pub close_calls: usize,
    pub selected_configurations: Vec<u8>,
    pub claimed_interfaces: Vec<u8>,
    pub released_interfaces: Vec<u8>,
    /// Testing hook: number of transfers that should fail before recovering.
    pub transfer_failures: usize,
}

impl MockTransport {
    /// Mock with the given ids and the default single-configuration
    /// descriptor tree (bulk IN 1 / bulk OUT 2, 64-byte packets).
    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
            configurations: Self::default_configurations(),
            sent: Vec::new(),
            responses: Vec::new(),
            opened: false,
            open_calls: 0,
            close_calls: 0,
            selected_configurations: Vec::new(),
            claimed_interfaces: Vec::new(),
            released_interfaces: Vec::new(),
            transfer_failures: 0,
        }
    }

    /// Mock impersonating the first allow-listed reader model.
    pub fn supported() -> Self {
        let (vendor_id, product_id) = SUPPORTED_READERS[0];
        Self::new(vendor_id, product_id)
    }

    /// Replace the descriptor tree (for configuration-resolution tests).
    pub fn with_configurations(mut self, configurations: Vec<ConfigurationDescriptor>) -> Self {
        self.configurations = configurations;
        self
    }

    /// Descriptor tree of a typical reader.
    pub fn default_configurations() -> Vec<ConfigurationDescriptor> {
        vec![ConfigurationDescriptor {
            configuration_value: 1,
            interfaces: vec![InterfaceDescriptor {
                interface_number: 0,
                endpoints: vec![
                    EndpointDescriptor {
                        direction: Direction::In,
                        endpoint_number: 1,
                        packet_size: 64,
                    },
                    EndpointDescriptor {
                        direction: Direction::Out,
                        endpoint_number: 2,
                        packet_size: 64,
                    },
                ],
            }],
        }]
    }

    /// Queue a response for the next `transfer_in`.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Pop the most recently sent frame.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Set how many subsequent transfers should fail (for tests).
    pub fn set_transfer_failures(&mut self, n: usize) {
        self.transfer_failures = n;
    }

    // Synchronous cores shared by the owned and the shared wrapper impls.
    // The mock never needs to suspend, so the async trait methods are thin
    // shells over these.

    fn do_open(&mut self) {
        self.opened = true;
        self.open_calls += 1;
    }

    fn do_close(&mut self) {
        self.opened = false;
        self.close_calls += 1;
    }

    fn do_transfer_out(&mut self, data: &[u8]) -> Result<usize> {
        self.take_failure()?;
        self.sent.push(data.to_vec());
        Ok(data.len())
    }

    fn do_transfer_in(&mut self, length: usize) -> Result<Vec<u8>> {
        self.take_failure()?;
        if self.responses.is_empty() {
            Ok(vec![0u8; length])
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn take_failure(&mut self) -> Result<()> {
        if self.transfer_failures > 0 {
            self.transfer_failures -= 1;
            return Err(Error::Transport("injected transfer failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn vendor_id(&self) -> u16 {
        self.vendor_id
    }

    fn product_id(&self) -> u16 {
        self.product_id
    }

    fn configurations(&self) -> Vec<ConfigurationDescriptor> {
        self.configurations.clone()
    }

    async fn open(&mut self) -> Result<()> {
        self.do_open();
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.do_close();
        Ok(())
    }

    async fn select_configuration(&mut self, configuration_value: u8) -> Result<()> {
        self.selected_configurations.push(configuration_value);
        Ok(())
    }

    async fn claim_interface(&mut self, interface_number: u8) -> Result<()> {
        self.claimed_interfaces.push(interface_number);
        Ok(())
    }

    async fn release_interface(&mut self, interface_number: u8) -> Result<()> {
        self.released_interfaces.push(interface_number);
        Ok(())
    }

    async fn transfer_out(&mut self, _endpoint: u8, data: &[u8]) -> Result<usize> {
        self.do_transfer_out(data)
    }

    async fn transfer_in(&mut self, _endpoint: u8, length: usize) -> Result<Vec<u8>> {
        self.do_transfer_in(length)
    }
}

/// Shareable handle over a [`MockTransport`] so tests can inspect call
/// counts and sent frames after the transport has been boxed away into a
/// device or reader. The lock is never held across an await.
#[derive(Clone)]
pub struct SharedMockTransport {
    inner: Arc<Mutex<MockTransport>>,
}

impl SharedMockTransport {
    /// Wrap a mock.
    pub fn new(mock: MockTransport) -> Self {
        Self {
            inner: Arc::new(Mutex::new(mock)),
        }
    }

    /// Lock the inner mock for inspection or seeding.
    pub fn lock(&self) -> MutexGuard<'_, MockTransport> {
        self.inner.lock().expect("mock transport lock poisoned")
    }
}

#[async_trait]
impl Transport for SharedMockTransport {
    fn vendor_id(&self) -> u16 {
        self.lock().vendor_id
    }

    fn product_id(&self) -> u16 {
        self.lock().product_id
    }

    fn configurations(&self) -> Vec<ConfigurationDescriptor> {
        self.lock().configurations.clone()
    }

    async fn open(&mut self) -> Result<()> {
        self.lock().do_open();
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.lock().do_close();
        Ok(())
    }

    async fn select_configuration(&mut self, configuration_value: u8) -> Result<()> {
        self.lock().selected_configurations.push(configuration_value);
        Ok(())
    }

    async fn claim_interface(&mut self, interface_number: u8) -> Result<()> {
        self.lock().claimed_interfaces.push(interface_number);
        Ok(())
    }

    async fn release_interface(&mut self, interface_number: u8) -> Result<()> {
        self.lock().released_interfaces.push(interface_number);
        Ok(())
    }

    async fn transfer_out(&mut self, _endpoint: u8, data: &[u8]) -> Result<usize> {
        self.lock().do_transfer_out(data)
    }

    async fn transfer_in(&mut self, _endpoint: u8, length: usize) -> Result<Vec<u8>> {
        self.lock().do_transfer_in(length)
    }
}

/// Mock discovery capability: hands out pre-arranged transports and records
/// how it was called.
#[derive(Default)]
#[allow(missing_docs)]
pub struct MockDiscovery {
    pub authorized: Vec<Box<dyn Transport>>,
    pub requestable: Option<Box<dyn Transport>>,
    /// Error returned by the next `request_device` call (e.g.
    /// [`Error::SelectionCancelled`] to model a dismissed prompt).
    pub request_error: Option<Error>,
    pub request_calls: usize,
    pub recorded_filters: Vec<Vec<DeviceFilter>>,
}

impl MockDiscovery {
    /// Empty discovery: no authorized devices, prompt finds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovery with pre-authorized transports.
    pub fn with_authorized(transports: Vec<Box<dyn Transport>>) -> Self {
        Self {
            authorized: transports,
            ..Self::default()
        }
    }

    /// Discovery where only the pairing prompt yields a transport.
    pub fn with_requestable(transport: Box<dyn Transport>) -> Self {
        Self {
            requestable: Some(transport),
            ..Self::default()
        }
    }
}

#[async_trait]
impl DeviceDiscovery for MockDiscovery {
    async fn authorized_devices(&mut self) -> Result<Vec<Box<dyn Transport>>> {
        Ok(std::mem::take(&mut self.authorized))
    }

    async fn request_device(&mut self, filters: &[DeviceFilter]) -> Result<Box<dyn Transport>> {
        self.request_calls += 1;
        self.recorded_filters.push(filters.to_vec());
        if let Some(err) = self.request_error.take() {
            return Err(err);
        }
        self.requestable.take().ok_or(Error::DeviceNotFound)
    }
}
