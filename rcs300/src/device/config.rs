// rcs300-rs/rcs300/src/device/config.rs

use crate::transport::descriptor::{ConfigurationDescriptor, Direction};
use crate::{Error, Result};

/// One endpoint the session will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointRef {
    /// Endpoint number without the direction bit.
    pub number: u8,
    /// Maximum packet size; used as the read length for command responses.
    pub packet_size: usize,
}

/// Resolved USB session parameters for one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Configuration to select.
    pub configuration_value: u8,
    /// Interface to claim.
    pub interface_number: u8,
    /// Bulk IN endpoint.
    pub input: EndpointRef,
    /// Bulk OUT endpoint.
    pub output: EndpointRef,
}

/// Pick the session parameters from a device's descriptor tree.
///
/// Takes the first configuration, the first IN endpoint and the first OUT
/// endpoint found; the claimed interface is the one carrying the OUT
/// endpoint. Fails when the device exposes no configuration or lacks either
/// endpoint.
pub fn resolve_session_config(configurations: &[ConfigurationDescriptor]) -> Result<SessionConfig> {
    let config = configurations.first().ok_or(Error::MissingConfiguration)?;

    let mut input: Option<EndpointRef> = None;
    let mut output: Option<(EndpointRef, u8)> = None;
    for interface in &config.interfaces {
        for endpoint in &interface.endpoints {
            let endpoint_ref = EndpointRef {
                number: endpoint.endpoint_number,
                packet_size: endpoint.packet_size,
            };
            match endpoint.direction {
                Direction::In if input.is_none() => input = Some(endpoint_ref),
                Direction::Out if output.is_none() => {
                    output = Some((endpoint_ref, interface.interface_number));
                }
                _ => {}
            }
        }
    }

    let input = input.ok_or(Error::MissingEndpoint { direction: "input" })?;
    let (output, interface_number) = output.ok_or(Error::MissingEndpoint {
        direction: "output",
    })?;

    Ok(SessionConfig {
        configuration_value: config.configuration_value,
        interface_number,
        input,
        output,
    })
}
