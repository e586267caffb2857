//! IuUP wire constants.

// --- PDU types (4-bit field in the first octet) ---

pub const IUUP_PDU_TYPE_DATA_CRC: u8 = 0;
pub const IUUP_PDU_TYPE_DATA_NO_CRC: u8 = 1;
pub const IUUP_PDU_TYPE_CONTROL: u8 = 14;

// --- Frame geometry ---

/// Octets covered by the 6-bit header CRC.
pub const IUUP_HEADER_LENGTH_BYTES: usize = 2;
/// The packed checksum field occupies octets 2..4.
pub const IUUP_CHECKSUM_FIELD_LENGTH_BYTES: usize = 2;
/// Payload offset for frames carrying a checksum field (types 0 and 14).
pub const IUUP_CHECKED_PAYLOAD_OFFSET_BYTES: usize = 4;
/// Payload offset for type 1 frames, which carry no checksum field.
pub const IUUP_UNCHECKED_PAYLOAD_OFFSET_BYTES: usize = 2;

// --- Field ceilings ---

/// Data frame numbers occupy 4 bits.
pub const IUUP_MAX_DATA_FRAME_NUMBER: u8 = 0x0F;
/// Control frame numbers occupy 2 bits.
pub const IUUP_MAX_CONTROL_FRAME_NUMBER: u8 = 0x03;
/// RFCI occupies 6 bits.
pub const IUUP_MAX_RFCI: u8 = 0x3F;
/// Mode version occupies 4 bits.
pub const IUUP_MAX_MODE_VERSION: u8 = 0x0F;
/// Procedure indicator occupies 4 bits.
pub const IUUP_MAX_PROCEDURE: u8 = 0x0F;
