// rcs300-rs/rcs300/src/device/session.rs

use tokio::time::sleep;

use crate::constants::{
    CMD_END_TRANSPARENT_SESSION, CMD_START_TRANSPARENT_SESSION, CMD_TURN_OFF_RF, CMD_TURN_ON_RF,
    HANDSHAKE_RESPONSE_LEN,
};
use crate::device::config::{SessionConfig, resolve_session_config};
use crate::protocol::codec::{self, FelicaResponse};
use crate::protocol::{commands, frame, responses};
use crate::transport::Transport;
use crate::types::{Idm, PollingResult, ReadResult, RequestServiceResult, ServiceReadParam};
use crate::utils::{DEFAULT_COMMAND_TIMEOUT_MS, RF_SETTLE_DELAY_MS, bytes_to_hex_spaced, ms};
use crate::{Error, Result};

/// Delay pattern around an exchange's receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settle {
    None,
    /// 50 ms pause before and after the receive; the RF field needs the
    /// settle time when it is switched.
    RfField,
}

/// One FeliCa-capable reader session over a USB bridge transport.
///
/// Owns the transport exclusively. A session is opened and closed around
/// every logical operation by [`crate::reader::CardReader`]; the only state
/// surviving across sessions is the transport handle and the trace sequence
/// counter. Not safe for concurrent operations: callers serialize access per
/// device.
pub struct FelicaDevice {
    transport: Box<dyn Transport>,
    config: Option<SessionConfig>,
    sequence: u8,
    open: bool,
    debug: bool,
}

impl FelicaDevice {
    /// Wrap a transport.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_debug(transport, false)
    }

    /// Wrap a transport; with `debug` every frame is hex-dumped via `log`.
    pub fn with_debug(transport: Box<dyn Transport>, debug: bool) -> Self {
        Self {
            transport,
            config: None,
            sequence: 0,
            open: false,
            debug,
        }
    }

    /// Whether the transport currently reports an open device.
    pub fn is_open(&self) -> bool {
        self.open
    }

    fn next_sequence(&mut self) -> u8 {
        let seq = self.sequence;
        self.sequence = self.sequence.wrapping_add(1);
        seq
    }

    /// One bridge exchange: frame the payload, send it, read `read_len`
    /// bytes back, applying the settle delays where the handshake needs
    /// them.
    async fn execute(&mut self, payload: &[u8], read_len: usize, settle: Settle) -> Result<Vec<u8>> {
        let (out_endpoint, in_endpoint) = {
            let config = self.config.as_ref().ok_or(Error::SessionNotOpen)?;
            (config.output.number, config.input.number)
        };

        let framed = frame::add_request_header(payload, self.next_sequence());
        if self.debug {
            log::debug!("> {}", bytes_to_hex_spaced(&framed));
        }
        self.transport.transfer_out(out_endpoint, &framed).await?;

        if settle == Settle::RfField {
            sleep(ms(RF_SETTLE_DELAY_MS)).await;
        }
        let response = self.transport.transfer_in(in_endpoint, read_len).await?;
        if settle == Settle::RfField {
            sleep(ms(RF_SETTLE_DELAY_MS)).await;
        }

        if self.debug {
            log::debug!("< {}", bytes_to_hex_spaced(&response));
        }
        Ok(response)
    }

    /// Open a reader session: select the resolved configuration, claim the
    /// interface and run the 4-step transparent-session handshake.
    pub async fn open_device(&mut self) -> Result<()> {
        let config = resolve_session_config(&self.transport.configurations())?;

        self.transport.open().await?;
        // The transport reports open from here on; a handshake that dies
        // halfway must still be closable by the orchestrator.
        self.open = true;
        self.transport
            .select_configuration(config.configuration_value)
            .await?;
        self.transport
            .claim_interface(config.interface_number)
            .await?;
        self.config = Some(config);

        self.execute(
            &CMD_END_TRANSPARENT_SESSION,
            HANDSHAKE_RESPONSE_LEN,
            Settle::None,
        )
        .await?;
        self.execute(
            &CMD_START_TRANSPARENT_SESSION,
            HANDSHAKE_RESPONSE_LEN,
            Settle::None,
        )
        .await?;
        self.execute(&CMD_TURN_OFF_RF, HANDSHAKE_RESPONSE_LEN, Settle::RfField)
            .await?;
        self.execute(&CMD_TURN_ON_RF, HANDSHAKE_RESPONSE_LEN, Settle::RfField)
            .await?;

        log::trace!("reader session open");
        Ok(())
    }

    /// Close the reader session: RF off, end the transparent session,
    /// release the interface and close the transport.
    pub async fn close_device(&mut self) -> Result<()> {
        self.execute(&CMD_TURN_OFF_RF, HANDSHAKE_RESPONSE_LEN, Settle::RfField)
            .await?;
        self.execute(
            &CMD_END_TRANSPARENT_SESSION,
            HANDSHAKE_RESPONSE_LEN,
            Settle::None,
        )
        .await?;

        let interface_number = self.config.as_ref().map(|c| c.interface_number);
        if let Some(interface_number) = interface_number {
            self.transport.release_interface(interface_number).await?;
        }
        self.transport.close().await?;
        self.open = false;

        log::trace!("reader session closed");
        Ok(())
    }

    /// Relay a raw FeliCa command through the bridge and unwrap the reply.
    async fn transceive(
        &mut self,
        felica_command: &[u8],
        timeout_millis: u64,
    ) -> Result<Option<FelicaResponse>> {
        let read_len = self
            .config
            .as_ref()
            .ok_or(Error::SessionNotOpen)?
            .input
            .packet_size;
        let wrapped = codec::wrap(felica_command, timeout_millis);
        let raw = self.execute(&wrapped, read_len, Settle::None).await?;
        Ok(codec::unwrap(&raw))
    }

    /// Detect a card in the field. `None` when no card answered within
    /// `timeout_millis`.
    pub async fn polling(&mut self, timeout_millis: u64) -> Result<Option<PollingResult>> {
        let resp = self
            .transceive(&commands::encode_polling(), timeout_millis)
            .await?;
        Ok(resp.as_ref().and_then(responses::decode_polling))
    }

    /// RequestService: look up key versions for the given nodes. The node
    /// code list is validated before any I/O.
    pub async fn request_service(
        &mut self,
        idm: &Idm,
        node_code_list: &[u8],
    ) -> Result<Option<RequestServiceResult>> {
        let command = commands::encode_request_service(idm, node_code_list)?;
        let resp = self.transceive(&command, DEFAULT_COMMAND_TIMEOUT_MS).await?;
        Ok(resp.as_ref().and_then(responses::decode_request_service))
    }

    /// ReadWithoutEncryption over one or more services. Params are validated
    /// before any I/O.
    pub async fn read_without_encryption(
        &mut self,
        idm: &Idm,
        params: &[ServiceReadParam],
    ) -> Result<Option<ReadResult>> {
        let command = commands::encode_read_without_encryption(idm, params)?;
        let resp = self.transceive(&command, DEFAULT_COMMAND_TIMEOUT_MS).await?;
        Ok(resp.as_ref().and_then(responses::decode_read))
    }
}
