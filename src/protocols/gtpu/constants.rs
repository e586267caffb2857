//! GTP-U wire constants.

// --- Flags octet layout ---

/// GTP version carried in the top three bits of the flags octet.
pub const GTP_U_VERSION: u8 = 1;
/// Shift of the version field within the flags octet.
pub const GTP_FLAGS_VERSION_SHIFT: u8 = 5;
/// Protocol type bit; set for GTP, clear for GTP'.
pub const GTP_FLAGS_PROTOCOL_TYPE: u8 = 0x10;
/// Extension header flag (E bit).
pub const GTP_FLAGS_EXTENSION_HEADER: u8 = 0x04;
/// Sequence number flag (S bit).
pub const GTP_FLAGS_SEQUENCE_NUMBER: u8 = 0x02;
/// N-PDU number flag (PN bit).
pub const GTP_FLAGS_NPDU_NUMBER: u8 = 0x01;
/// Any of these bits set means the 4-octet optional part is present.
pub const GTP_FLAGS_OPTIONAL_MASK: u8 = 0x07;

// --- Header geometry ---

/// Fixed header: flags, message type, length, TEID.
pub const GTP_FIXED_HEADER_LENGTH_BYTES: usize = 8;
/// Minimum optional part: sequence number, N-PDU number, next extension type.
pub const GTP_OPTIONAL_PART_MIN_LENGTH_BYTES: usize = 4;
/// Extension headers are sized in 4-octet units.
pub const GTP_EXTENSION_UNIT_BYTES: usize = 4;

// --- Message types ---

pub const GTP_MSG_TYPE_ECHO_REQUEST: u8 = 1;
pub const GTP_MSG_TYPE_ECHO_RESPONSE: u8 = 2;
pub const GTP_MSG_TYPE_ERROR_INDICATION: u8 = 26;
pub const GTP_MSG_TYPE_SUPPORTED_EXT_HEADERS_NOTIFICATION: u8 = 31;
pub const GTP_MSG_TYPE_END_MARKER: u8 = 254;
pub const GTP_MSG_TYPE_G_PDU: u8 = 255;

// --- Extension header types ---

pub const GTP_EXT_TYPE_UDP_PORT: u8 = 0x40;
pub const GTP_EXT_TYPE_LONG_PDCP_PDU_NUMBER: u8 = 0x82;
pub const GTP_EXT_TYPE_NR_RAN_CONTAINER: u8 = 0x84;
pub const GTP_EXT_TYPE_PDU_SESSION_CONTAINER: u8 = 0x85;
pub const GTP_EXT_TYPE_PDCP_PDU_NUMBER: u8 = 0xC0;

/// Registered UDP port for GTP-U.
pub const GTP_U_UDP_PORT: u16 = 2152;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_octet_for_plain_g_pdu() {
        let flags = (GTP_U_VERSION << GTP_FLAGS_VERSION_SHIFT) | GTP_FLAGS_PROTOCOL_TYPE;
        assert_eq!(flags, 0x30);
        assert_eq!(flags & GTP_FLAGS_OPTIONAL_MASK, 0);
    }

    #[test]
    fn optional_mask_covers_exactly_the_three_low_bits() {
        assert_eq!(
            GTP_FLAGS_OPTIONAL_MASK,
            GTP_FLAGS_EXTENSION_HEADER | GTP_FLAGS_SEQUENCE_NUMBER | GTP_FLAGS_NPDU_NUMBER
        );
    }
}
