// rcs300-rs/rcs300/src/constants.rs
//! Wire-protocol constants for the RC-S300 USB bridge

/// Sony vendor id.
pub const SONY_VENDOR_ID: u16 = 0x054c;

/// RC-S300/S product id.
pub const RCS300S_PRODUCT_ID: u16 = 0x0dc8;

/// RC-S300/P product id.
pub const RCS300P_PRODUCT_ID: u16 = 0x0dc9;

/// The reader allow-list: (vendor id, product id) pairs this crate will
/// pair with. Both known RC-S300 model variants.
pub const SUPPORTED_READERS: [(u16, u16); 2] = [
    (SONY_VENDOR_ID, RCS300S_PRODUCT_ID),
    (SONY_VENDOR_ID, RCS300P_PRODUCT_ID),
];

/// Bridge request frame header byte.
pub const REQUEST_HEADER: u8 = 0x6b;

/// Slot number field of the bridge request frame. Always zero: the RC-S300
/// exposes a single slot.
pub const SLOT_NUMBER: u8 = 0x00;

/// Marker byte locating the payload inside a bridge response.
pub const RESPONSE_MARKER: u8 = 0x97;

/// Start Transparent Session escape command.
pub const CMD_START_TRANSPARENT_SESSION: [u8; 8] = [0xff, 0x50, 0x00, 0x00, 0x02, 0x81, 0x00, 0x00];

/// End Transparent Session escape command.
pub const CMD_END_TRANSPARENT_SESSION: [u8; 8] = [0xff, 0x50, 0x00, 0x00, 0x02, 0x82, 0x00, 0x00];

/// RF Off escape command.
pub const CMD_TURN_OFF_RF: [u8; 8] = [0xff, 0x50, 0x00, 0x00, 0x02, 0x83, 0x00, 0x00];

/// RF On escape command.
pub const CMD_TURN_ON_RF: [u8; 8] = [0xff, 0x50, 0x00, 0x00, 0x02, 0x84, 0x00, 0x00];

/// CommunicateThru escape header: relays a raw FeliCa command to the card.
pub const COMMUNICATE_THRU_HEADER: [u8; 5] = [0xff, 0x50, 0x00, 0x01, 0x00];

/// CommunicateThru trailer bytes.
pub const COMMUNICATE_THRU_FOOTER: [u8; 3] = [0x00, 0x00, 0x00];

/// TLV tag + length prefix for the card timeout field (`5F 46`, 4-byte value).
pub const TIMEOUT_TLV_HEADER: [u8; 3] = [0x5f, 0x46, 0x04];

/// TLV tag for the transceive data object (`95`, 2-byte length follows).
pub const TRANSCEIVE_TLV_TAG: [u8; 2] = [0x95, 0x82];

/// FeliCa Polling command: command code 0x00, wildcard system code 0xFFFF,
/// request system code, one time slot.
pub const FELICA_POLLING_COMMAND: [u8; 5] = [0x00, 0xff, 0xff, 0x01, 0x00];

/// FeliCa RequestService command code.
pub const FELICA_CMD_REQUEST_SERVICE: u8 = 0x02;

/// FeliCa ReadWithoutEncryption command code.
pub const FELICA_CMD_READ_WITHOUT_ENCRYPTION: u8 = 0x06;

/// Bytes read back for each handshake exchange.
pub const HANDSHAKE_RESPONSE_LEN: usize = 64;
