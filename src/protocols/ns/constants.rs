//! Constants specific to NS PDU layouts (TS 48.016, Section 10).

// --- PDU Type Values ---

/// NS-UNITDATA PDU type; the only type with no TLV section.
pub const NS_PDU_TYPE_UNITDATA: u8 = 0x00;
/// NS-RESET PDU type.
pub const NS_PDU_TYPE_RESET: u8 = 0x02;
/// NS-RESET-ACK PDU type.
pub const NS_PDU_TYPE_RESET_ACK: u8 = 0x03;
/// NS-BLOCK PDU type.
pub const NS_PDU_TYPE_BLOCK: u8 = 0x04;
/// NS-BLOCK-ACK PDU type.
pub const NS_PDU_TYPE_BLOCK_ACK: u8 = 0x05;
/// NS-UNBLOCK PDU type.
pub const NS_PDU_TYPE_UNBLOCK: u8 = 0x06;
/// NS-UNBLOCK-ACK PDU type.
pub const NS_PDU_TYPE_UNBLOCK_ACK: u8 = 0x07;
/// NS-STATUS PDU type.
pub const NS_PDU_TYPE_STATUS: u8 = 0x08;
/// NS-ALIVE PDU type.
pub const NS_PDU_TYPE_ALIVE: u8 = 0x0A;
/// NS-ALIVE-ACK PDU type.
pub const NS_PDU_TYPE_ALIVE_ACK: u8 = 0x0B;

// --- Information Element Identifiers ---

/// Cause IE.
pub const NS_IEI_CAUSE: u8 = 0x00;
/// NS-VCI IE.
pub const NS_IEI_VCI: u8 = 0x01;
/// NS PDU IE (carries an offending PDU inside NS-STATUS).
pub const NS_IEI_PDU: u8 = 0x02;
/// BVCI IE.
pub const NS_IEI_BVCI: u8 = 0x03;
/// NSEI IE.
pub const NS_IEI_NSEI: u8 = 0x04;

// --- Header Geometry ---

/// Fixed header of every control PDU: the PDU type octet.
pub const NS_FIXED_HEADER_LENGTH_BYTES: usize = 1;
/// Fixed header of NS-UNITDATA: type, spare octet and BVCI.
pub const NS_UNITDATA_HEADER_LENGTH_BYTES: usize = 4;
