//! Constants specific to BSSGP PDU layouts (TS 48.018, Sections 10 and 11).

// --- PDU Type Values ---

/// DL-UNITDATA PDU type.
pub const BSSGP_PDU_TYPE_DL_UNITDATA: u8 = 0x00;
/// UL-UNITDATA PDU type.
pub const BSSGP_PDU_TYPE_UL_UNITDATA: u8 = 0x01;
/// DL-MBMS-UNITDATA PDU type.
pub const BSSGP_PDU_TYPE_DL_MBMS_UNITDATA: u8 = 0x04;
/// UL-MBMS-UNITDATA PDU type.
pub const BSSGP_PDU_TYPE_UL_MBMS_UNITDATA: u8 = 0x05;
/// STATUS PDU type.
pub const BSSGP_PDU_TYPE_STATUS: u8 = 0x41;

// --- Information Element Identifiers ---

/// Alignment octets IE.
pub const BSSGP_IEI_ALIGNMENT: u8 = 0x00;
/// BVCI IE.
pub const BSSGP_IEI_BVCI: u8 = 0x04;
/// Cause IE.
pub const BSSGP_IEI_CAUSE: u8 = 0x07;
/// Cell identifier IE.
pub const BSSGP_IEI_CELL_ID: u8 = 0x08;
/// LLC-PDU IE; mandatory in every UNITDATA variant.
pub const BSSGP_IEI_LLC_PDU: u8 = 0x0E;
/// PDU lifetime IE.
pub const BSSGP_IEI_PDU_LIFETIME: u8 = 0x16;
/// QoS profile IE.
pub const BSSGP_IEI_QOS_PROFILE: u8 = 0x18;
/// TLLI IE.
pub const BSSGP_IEI_TLLI: u8 = 0x1F;
/// TMGI IE (MBMS).
pub const BSSGP_IEI_TMGI: u8 = 0x5C;

// --- Header Geometry ---

/// Fixed header of DL/UL-UNITDATA: type octet, TLLI and QoS profile precede
/// the TLV section.
pub const BSSGP_UNITDATA_FIXED_HEADER_LENGTH_BYTES: usize = 8;
/// Fixed header of every other PDU type: the type octet alone.
pub const BSSGP_FIXED_HEADER_LENGTH_BYTES: usize = 1;
/// Length of the fixed QoS profile field inside the UNITDATA header.
pub const BSSGP_QOS_PROFILE_LENGTH_BYTES: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unitdata_header_geometry() {
        // Type + 32-bit TLLI + 3-octet QoS profile.
        assert_eq!(
            BSSGP_UNITDATA_FIXED_HEADER_LENGTH_BYTES,
            1 + 4 + BSSGP_QOS_PROFILE_LENGTH_BYTES
        );
    }

    #[test]
    fn unitdata_types_are_the_low_pair() {
        assert_eq!(BSSGP_PDU_TYPE_DL_UNITDATA, 0x00);
        assert_eq!(BSSGP_PDU_TYPE_UL_UNITDATA, 0x01);
    }
}
