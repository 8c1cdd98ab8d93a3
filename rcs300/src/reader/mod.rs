// rcs300-rs/rcs300/src/reader/mod.rs

//! High-level card reader orchestration: device pairing against the
//! allow-list, session brackets around every operation, and the bounded
//! card-detection retry loop.

use tokio::time::sleep;

use crate::constants::SUPPORTED_READERS;
use crate::device::FelicaDevice;
use crate::transport::{DeviceDiscovery, DeviceFilter};
use crate::types::{Idm, PollingResult, ReadResult, RequestServiceResult, ServiceReadParam};
use crate::utils::{
    DEFAULT_MAX_TRY_COUNT, DEFAULT_POLLING_TIMEOUT_MS, POLLING_RETRY_DELAY_MS, ms,
};
use crate::Result;

/// User-facing notification sink for failures that are not surfaced as
/// errors (see [`CardReader::read_without_encryption`]).
pub trait Notifier: Send {
    /// Deliver an error message to the user.
    fn notify_error(&self, message: &str);
}

/// Default notifier: routes messages to the `log` facade.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Card-detection loop state.
#[derive(Debug)]
enum PollState {
    Trying { attempt: u32 },
    Done(Option<PollingResult>),
}

/// Orchestrates a [`FelicaDevice`] for callers: one instance per paired
/// reader. Operations must not run concurrently on one instance.
pub struct CardReader {
    device: FelicaDevice,
    notifier: Box<dyn Notifier>,
}

impl std::fmt::Debug for CardReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardReader").finish_non_exhaustive()
    }
}

impl CardReader {
    /// The fixed discovery allow-list (both RC-S300 model variants).
    pub fn allow_list() -> Vec<DeviceFilter> {
        SUPPORTED_READERS
            .iter()
            .map(|&(vendor_id, product_id)| DeviceFilter {
                vendor_id,
                product_id,
            })
            .collect()
    }

    /// Pair with a reader. Already-authorized devices are preferred over
    /// prompting; the prompt itself is restricted to the allow-list.
    ///
    /// Returns `Ok(None)` when the user dismisses the selection prompt; any
    /// other discovery failure propagates.
    pub async fn connect(discovery: &mut dyn DeviceDiscovery, debug: bool) -> Result<Option<Self>> {
        let filters = Self::allow_list();

        let authorized = discovery.authorized_devices().await?;
        let transport = authorized.into_iter().find(|device| {
            filters
                .iter()
                .any(|f| f.matches(device.vendor_id(), device.product_id()))
        });

        let transport = match transport {
            Some(transport) => transport,
            None => match discovery.request_device(&filters).await {
                Ok(transport) => transport,
                Err(e) if e.is_cancellation() => return Ok(None),
                Err(e) => return Err(e),
            },
        };

        log::info!(
            "paired reader {:04x}:{:04x}",
            transport.vendor_id(),
            transport.product_id()
        );
        Ok(Some(Self {
            device: FelicaDevice::with_debug(transport, debug),
            notifier: Box::new(LogNotifier),
        }))
    }

    /// Replace the notifier receiving swallowed read failures.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Detect a card, retrying up to `max_try_count` times with a 1 s
    /// backoff between attempts. Each attempt is a full session bracket:
    /// open, poll once, close. `Ok(None)` after exhausting all attempts.
    pub async fn polling(&mut self, max_try_count: u32) -> Result<Option<PollingResult>> {
        let mut state = PollState::Trying { attempt: 0 };
        loop {
            state = match state {
                PollState::Trying { attempt } if attempt >= max_try_count => PollState::Done(None),
                PollState::Trying { attempt } => {
                    if attempt > 0 {
                        sleep(ms(POLLING_RETRY_DELAY_MS)).await;
                    }
                    match self.poll_once().await {
                        Ok(Some(result)) => PollState::Done(Some(result)),
                        Ok(None) => {
                            log::debug!("no card detected, attempt {}", attempt + 1);
                            PollState::Trying {
                                attempt: attempt + 1,
                            }
                        }
                        Err(e) => {
                            self.close_if_open().await;
                            return Err(e);
                        }
                    }
                }
                PollState::Done(result) => return Ok(result),
            };
        }
    }

    async fn poll_once(&mut self) -> Result<Option<PollingResult>> {
        self.device.open_device().await?;
        let found = self.device.polling(DEFAULT_POLLING_TIMEOUT_MS).await?;
        self.device.close_device().await?;
        Ok(found)
    }

    /// Best-effort close used on every error path. A close failure on an
    /// already-broken transport is logged, not propagated.
    async fn close_if_open(&mut self) {
        if self.device.is_open() {
            if let Err(e) = self.device.close_device().await {
                log::warn!("session close after failure also failed: {}", e);
            }
        }
    }

    /// Detect a card, then run RequestService for `node_code_list` inside a
    /// fresh session. `Ok(None)` when no card was found.
    pub async fn request_service(
        &mut self,
        node_code_list: &[u8],
    ) -> Result<Option<RequestServiceResult>> {
        let Some(card) = self.polling(DEFAULT_MAX_TRY_COUNT).await? else {
            return Ok(None);
        };
        let idm = Idm::from_hex(&card.idm)?;

        match self.request_service_exchange(&idm, node_code_list).await {
            Ok(result) => Ok(result),
            Err(e) => {
                self.close_if_open().await;
                Err(e)
            }
        }
    }

    async fn request_service_exchange(
        &mut self,
        idm: &Idm,
        node_code_list: &[u8],
    ) -> Result<Option<RequestServiceResult>> {
        self.device.open_device().await?;
        let result = self.device.request_service(idm, node_code_list).await?;
        self.device.close_device().await?;
        Ok(result)
    }

    /// Detect a card, then run ReadWithoutEncryption for `params` inside a
    /// fresh session.
    ///
    /// Unlike its siblings this operation never returns an error: every
    /// failure (validation included) is delivered to the [`Notifier`] and
    /// the call resolves to `None`. Callers needing the error itself go
    /// through [`FelicaDevice::read_without_encryption`] directly.
    pub async fn read_without_encryption(
        &mut self,
        params: &[ServiceReadParam],
    ) -> Option<ReadResult> {
        match self.read_exchange(params).await {
            Ok(result) => result,
            Err(e) => {
                self.close_if_open().await;
                self.notifier
                    .notify_error(&format!("failed to read card: {}", e));
                None
            }
        }
    }

    async fn read_exchange(&mut self, params: &[ServiceReadParam]) -> Result<Option<ReadResult>> {
        let Some(card) = self.polling(DEFAULT_MAX_TRY_COUNT).await? else {
            return Ok(None);
        };
        let idm = Idm::from_hex(&card.idm)?;

        self.device.open_device().await?;
        let result = self.device.read_without_encryption(&idm, params).await?;
        self.device.close_device().await?;
        Ok(result)
    }

    /// Construct a reader directly over a device (tests, embedded hosts).
    pub fn from_device(device: FelicaDevice) -> Self {
        Self {
            device,
            notifier: Box::new(LogNotifier),
        }
    }
}
