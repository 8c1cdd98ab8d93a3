// rcs300-rs/rcs300/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

//! rusb-backed transport and discovery. Feature-gated behind `usb`; hosts
//! embedding the crate elsewhere provide their own [`Transport`] instead.

use std::time::Duration;

use async_trait::async_trait;

use rusb::UsbContext;
use rusb::{Context, Device, DeviceHandle};

use crate::constants::SUPPORTED_READERS;
use crate::transport::descriptor::{
    ConfigurationDescriptor, Direction, EndpointDescriptor, InterfaceDescriptor,
};
use crate::transport::traits::{DeviceDiscovery, DeviceFilter, Transport};
use crate::{Error, Result};

/// Transport over a libusb device. Transfers are issued synchronously with a
/// bounded timeout; the bridge protocol is strictly request/response so the
/// short blocking window is acceptable outside latency-critical executors.
pub struct UsbTransport {
    device: Device<Context>,
    handle: Option<DeviceHandle<Context>>,
    vendor_id: u16,
    product_id: u16,
    timeout: Duration,
}

impl UsbTransport {
    fn new(device: Device<Context>) -> Result<Self> {
        let descriptor = device.device_descriptor()?;
        Ok(Self {
            vendor_id: descriptor.vendor_id(),
            product_id: descriptor.product_id(),
            device,
            handle: None,
            timeout: Duration::from_millis(1000),
        })
    }

    fn handle_mut(&mut self) -> Result<&mut DeviceHandle<Context>> {
        self.handle.as_mut().ok_or(Error::SessionNotOpen)
    }
}

#[async_trait]
impl Transport for UsbTransport {
    fn vendor_id(&self) -> u16 {
        self.vendor_id
    }

    fn product_id(&self) -> u16 {
        self.product_id
    }

    fn configurations(&self) -> Vec<ConfigurationDescriptor> {
        let count = self
            .device
            .device_descriptor()
            .map(|d| d.num_configurations())
            .unwrap_or(0);

        let mut configurations = Vec::with_capacity(count as usize);
        for index in 0..count {
            let Ok(config) = self.device.config_descriptor(index) else {
                continue;
            };
            let mut interfaces = Vec::new();
            for interface in config.interfaces() {
                for descriptor in interface.descriptors() {
                    let endpoints = descriptor
                        .endpoint_descriptors()
                        .map(|ep| EndpointDescriptor {
                            direction: if ep.direction() == rusb::Direction::In {
                                Direction::In
                            } else {
                                Direction::Out
                            },
                            endpoint_number: ep.number(),
                            packet_size: ep.max_packet_size() as usize,
                        })
                        .collect();
                    interfaces.push(InterfaceDescriptor {
                        interface_number: descriptor.interface_number(),
                        endpoints,
                    });
                }
            }
            configurations.push(ConfigurationDescriptor {
                configuration_value: config.number(),
                interfaces,
            });
        }
        configurations
    }

    async fn open(&mut self) -> Result<()> {
        self.handle = Some(self.device.open()?);
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.handle = None;
        Ok(())
    }

    async fn select_configuration(&mut self, configuration_value: u8) -> Result<()> {
        self.handle_mut()?
            .set_active_configuration(configuration_value)?;
        Ok(())
    }

    async fn claim_interface(&mut self, interface_number: u8) -> Result<()> {
        let handle = self.handle_mut()?;
        // On Linux the kernel HID driver may own the reader; detach it
        // best-effort and let claim_interface report a hard failure.
        if let Ok(true) = handle.kernel_driver_active(interface_number) {
            let _ = handle.detach_kernel_driver(interface_number);
        }
        handle.claim_interface(interface_number)?;
        Ok(())
    }

    async fn release_interface(&mut self, interface_number: u8) -> Result<()> {
        self.handle_mut()?.release_interface(interface_number)?;
        Ok(())
    }

    async fn transfer_out(&mut self, endpoint: u8, data: &[u8]) -> Result<usize> {
        let timeout = self.timeout;
        let written = self.handle_mut()?.write_bulk(endpoint, data, timeout)?;
        Ok(written)
    }

    async fn transfer_in(&mut self, endpoint: u8, length: usize) -> Result<Vec<u8>> {
        let timeout = self.timeout;
        let mut buf = vec![0u8; length];
        // IN endpoint addresses carry the direction bit on the wire.
        let read = self
            .handle_mut()?
            .read_bulk(0x80 | endpoint, &mut buf, timeout)?;
        buf.truncate(read);
        Ok(buf)
    }
}

/// Discovery over the local USB bus. There is no pairing prompt outside a
/// browser host: every allow-listed device on the bus counts as authorized,
/// and `request_device` returns the first filter match.
pub struct UsbDiscovery {
    context: Context,
}

impl UsbDiscovery {
    /// Create a discovery over a fresh libusb context.
    pub fn new() -> Result<Self> {
        Ok(Self {
            context: Context::new()?,
        })
    }

    fn scan(&self, filters: &[DeviceFilter]) -> Result<Vec<UsbTransport>> {
        let mut found = Vec::new();
        for device in self.context.devices()?.iter() {
            let descriptor = device.device_descriptor()?;
            if filters
                .iter()
                .any(|f| f.matches(descriptor.vendor_id(), descriptor.product_id()))
            {
                found.push(UsbTransport::new(device)?);
            }
        }
        Ok(found)
    }
}

#[async_trait]
impl DeviceDiscovery for UsbDiscovery {
    async fn authorized_devices(&mut self) -> Result<Vec<Box<dyn Transport>>> {
        let filters: Vec<DeviceFilter> = SUPPORTED_READERS
            .iter()
            .map(|&(vendor_id, product_id)| DeviceFilter {
                vendor_id,
                product_id,
            })
            .collect();
        Ok(self
            .scan(&filters)?
            .into_iter()
            .map(|t| Box::new(t) as Box<dyn Transport>)
            .collect())
    }

    async fn request_device(&mut self, filters: &[DeviceFilter]) -> Result<Box<dyn Transport>> {
        self.scan(filters)?
            .into_iter()
            .next()
            .map(|t| Box::new(t) as Box<dyn Transport>)
            .ok_or(Error::DeviceNotFound)
    }
}
