// rcs300-rs/rcs300/src/transport/descriptor.rs

//! Plain descriptor data reported by a [`crate::transport::Transport`].
//! Mirrors the slice of the USB descriptor tree the session layer needs to
//! pick its configuration, interface and endpoints.

/// Endpoint direction, device-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Device-to-host.
    In,
    /// Host-to-device.
    Out,
}

/// One endpoint of an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Direction of the endpoint.
    pub direction: Direction,
    /// Endpoint number without the direction bit.
    pub endpoint_number: u8,
    /// Maximum packet size in bytes.
    pub packet_size: usize,
}

/// One interface of a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    /// Interface number as claimed on the wire.
    pub interface_number: u8,
    /// Endpoints exposed by the interface.
    pub endpoints: Vec<EndpointDescriptor>,
}

/// One device configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationDescriptor {
    /// Value passed to select-configuration.
    pub configuration_value: u8,
    /// Interfaces in the configuration.
    pub interfaces: Vec<InterfaceDescriptor>,
}
