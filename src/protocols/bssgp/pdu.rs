//! Typed BSSGP PDU representation.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};

use crate::constants::TLV_SHORT_FORM_MAX_LENGTH;
use crate::serialization::tlv::Tlv;
use crate::types::Tlli;

use super::constants::{
    BSSGP_PDU_TYPE_DL_MBMS_UNITDATA, BSSGP_PDU_TYPE_DL_UNITDATA, BSSGP_PDU_TYPE_STATUS,
    BSSGP_PDU_TYPE_UL_MBMS_UNITDATA, BSSGP_PDU_TYPE_UL_UNITDATA,
};

/// BSSGP PDU type value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BssgpPduType {
    DlUnitdata,
    UlUnitdata,
    DlMbmsUnitdata,
    UlMbmsUnitdata,
    Status,
    /// Any type value this codec does not name.
    Unknown(u8),
}

impl From<u8> for BssgpPduType {
    fn from(value: u8) -> Self {
        match value {
            BSSGP_PDU_TYPE_DL_UNITDATA => Self::DlUnitdata,
            BSSGP_PDU_TYPE_UL_UNITDATA => Self::UlUnitdata,
            BSSGP_PDU_TYPE_DL_MBMS_UNITDATA => Self::DlMbmsUnitdata,
            BSSGP_PDU_TYPE_UL_MBMS_UNITDATA => Self::UlMbmsUnitdata,
            BSSGP_PDU_TYPE_STATUS => Self::Status,
            other => Self::Unknown(other),
        }
    }
}

impl From<BssgpPduType> for u8 {
    fn from(pdu_type: BssgpPduType) -> Self {
        match pdu_type {
            BssgpPduType::DlUnitdata => BSSGP_PDU_TYPE_DL_UNITDATA,
            BssgpPduType::UlUnitdata => BSSGP_PDU_TYPE_UL_UNITDATA,
            BssgpPduType::DlMbmsUnitdata => BSSGP_PDU_TYPE_DL_MBMS_UNITDATA,
            BssgpPduType::UlMbmsUnitdata => BSSGP_PDU_TYPE_UL_MBMS_UNITDATA,
            BssgpPduType::Status => BSSGP_PDU_TYPE_STATUS,
            BssgpPduType::Unknown(value) => value,
        }
    }
}

/// Length-indicator selector of the embedded LLC PDU.
///
/// The short form fits lengths up to 127; the long form carries a 15-bit
/// count. The wire form is recomputed from the actual value length during
/// encoding, so the selector's job is to *declare* the payload length; the
/// encoder rejects a declaration that disagrees with the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthIndicator {
    Short(u8),
    Long(u16),
}

impl LengthIndicator {
    /// The canonical selector for a payload of `len` bytes.
    pub fn for_length(len: usize) -> Self {
        if len <= TLV_SHORT_FORM_MAX_LENGTH {
            Self::Short(len as u8)
        } else {
            Self::Long(len.min(usize::from(u16::MAX)) as u16)
        }
    }

    /// The declared byte count.
    pub const fn value(&self) -> usize {
        match self {
            Self::Short(len) => *len as usize,
            Self::Long(len) => *len as usize,
        }
    }

    /// Whether this is the single-octet form.
    pub const fn is_short(&self) -> bool {
        matches!(self, Self::Short(_))
    }
}

/// The embedded LLC-PDU information element of a UNITDATA variant.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlcPduIe {
    /// Declared payload length and wire-form selector.
    pub length_indicator: LengthIndicator,
    /// The LLC PDU bytes, opaque at this layer.
    #[serde_as(as = "Hex")]
    pub pdu: Bytes,
}

impl LlcPduIe {
    /// Wraps LLC PDU bytes with the canonical selector for their length.
    pub fn new(pdu: impl Into<Bytes>) -> Self {
        let pdu = pdu.into();
        Self {
            length_indicator: LengthIndicator::for_length(pdu.len()),
            pdu,
        }
    }
}

/// One BSSGP PDU in typed form.
///
/// The four UNITDATA variants share the length-indicator rule; everything
/// else is carried structurally as a type octet plus information elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BssgpPdu {
    /// SGSN to BSS data PDU (8-octet fixed header).
    DlUnitdata {
        tlli: Tlli,
        qos_profile: [u8; 3],
        /// Optional IEs preceding the LLC-PDU IE, in wire order.
        other_elements: Vec<Tlv>,
        llc_pdu: LlcPduIe,
    },
    /// BSS to SGSN data PDU (8-octet fixed header).
    UlUnitdata {
        tlli: Tlli,
        qos_profile: [u8; 3],
        other_elements: Vec<Tlv>,
        llc_pdu: LlcPduIe,
    },
    /// MBMS downlink data PDU (type octet only, then IEs).
    DlMbmsUnitdata {
        other_elements: Vec<Tlv>,
        llc_pdu: LlcPduIe,
    },
    /// MBMS uplink data PDU (type octet only, then IEs).
    UlMbmsUnitdata {
        other_elements: Vec<Tlv>,
        llc_pdu: LlcPduIe,
    },
    /// Any other PDU: type octet plus its information elements.
    Other {
        pdu_type: BssgpPduType,
        elements: Vec<Tlv>,
    },
}

impl BssgpPdu {
    /// Creates a DL-UNITDATA with no optional IEs.
    pub fn dl_unitdata(tlli: Tlli, qos_profile: [u8; 3], llc_pdu: impl Into<Bytes>) -> Self {
        Self::DlUnitdata {
            tlli,
            qos_profile,
            other_elements: Vec::new(),
            llc_pdu: LlcPduIe::new(llc_pdu),
        }
    }

    /// Creates a UL-UNITDATA with no optional IEs.
    pub fn ul_unitdata(tlli: Tlli, qos_profile: [u8; 3], llc_pdu: impl Into<Bytes>) -> Self {
        Self::UlUnitdata {
            tlli,
            qos_profile,
            other_elements: Vec::new(),
            llc_pdu: LlcPduIe::new(llc_pdu),
        }
    }

    /// The wire type value of this PDU.
    pub fn pdu_type(&self) -> BssgpPduType {
        match self {
            Self::DlUnitdata { .. } => BssgpPduType::DlUnitdata,
            Self::UlUnitdata { .. } => BssgpPduType::UlUnitdata,
            Self::DlMbmsUnitdata { .. } => BssgpPduType::DlMbmsUnitdata,
            Self::UlMbmsUnitdata { .. } => BssgpPduType::UlMbmsUnitdata,
            Self::Other { pdu_type, .. } => *pdu_type,
        }
    }

    /// The embedded LLC-PDU IE, when this variant carries one.
    pub fn llc_pdu(&self) -> Option<&LlcPduIe> {
        match self {
            Self::DlUnitdata { llc_pdu, .. }
            | Self::UlUnitdata { llc_pdu, .. }
            | Self::DlMbmsUnitdata { llc_pdu, .. }
            | Self::UlMbmsUnitdata { llc_pdu, .. } => Some(llc_pdu),
            Self::Other { .. } => None,
        }
    }
}
