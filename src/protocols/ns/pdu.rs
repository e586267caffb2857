//! Typed NS PDU representation.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};

use crate::serialization::tlv::Tlv;
use crate::types::Bvci;

use super::constants::{
    NS_PDU_TYPE_ALIVE, NS_PDU_TYPE_ALIVE_ACK, NS_PDU_TYPE_BLOCK, NS_PDU_TYPE_BLOCK_ACK,
    NS_PDU_TYPE_RESET, NS_PDU_TYPE_RESET_ACK, NS_PDU_TYPE_STATUS, NS_PDU_TYPE_UNBLOCK,
    NS_PDU_TYPE_UNBLOCK_ACK, NS_PDU_TYPE_UNITDATA,
};

/// NS PDU type value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NsPduType {
    Unitdata,
    Reset,
    ResetAck,
    Block,
    BlockAck,
    Unblock,
    UnblockAck,
    Status,
    Alive,
    AliveAck,
    /// Any type value this codec does not name.
    Unknown(u8),
}

impl From<u8> for NsPduType {
    fn from(value: u8) -> Self {
        match value {
            NS_PDU_TYPE_UNITDATA => Self::Unitdata,
            NS_PDU_TYPE_RESET => Self::Reset,
            NS_PDU_TYPE_RESET_ACK => Self::ResetAck,
            NS_PDU_TYPE_BLOCK => Self::Block,
            NS_PDU_TYPE_BLOCK_ACK => Self::BlockAck,
            NS_PDU_TYPE_UNBLOCK => Self::Unblock,
            NS_PDU_TYPE_UNBLOCK_ACK => Self::UnblockAck,
            NS_PDU_TYPE_STATUS => Self::Status,
            NS_PDU_TYPE_ALIVE => Self::Alive,
            NS_PDU_TYPE_ALIVE_ACK => Self::AliveAck,
            other => Self::Unknown(other),
        }
    }
}

impl From<NsPduType> for u8 {
    fn from(pdu_type: NsPduType) -> Self {
        match pdu_type {
            NsPduType::Unitdata => NS_PDU_TYPE_UNITDATA,
            NsPduType::Reset => NS_PDU_TYPE_RESET,
            NsPduType::ResetAck => NS_PDU_TYPE_RESET_ACK,
            NsPduType::Block => NS_PDU_TYPE_BLOCK,
            NsPduType::BlockAck => NS_PDU_TYPE_BLOCK_ACK,
            NsPduType::Unblock => NS_PDU_TYPE_UNBLOCK,
            NsPduType::UnblockAck => NS_PDU_TYPE_UNBLOCK_ACK,
            NsPduType::Status => NS_PDU_TYPE_STATUS,
            NsPduType::Alive => NS_PDU_TYPE_ALIVE,
            NsPduType::AliveAck => NS_PDU_TYPE_ALIVE_ACK,
            NsPduType::Unknown(value) => value,
        }
    }
}

/// One NS PDU in typed form.
///
/// NS-UNITDATA has a plain fixed layout carrying an opaque SDU (the BSSGP
/// message); every other type is a control PDU built from a type octet and a
/// TLV section.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NsPdu {
    /// Data PDU: spare octet, BVCI, then the SDU with no TLV structure.
    Unitdata {
        bvci: Bvci,
        #[serde_as(as = "Hex")]
        sdu: Bytes,
    },
    /// Control PDU: type octet followed by information elements.
    Control {
        pdu_type: NsPduType,
        elements: Vec<Tlv>,
    },
}

impl NsPdu {
    /// Creates a data PDU addressed to `bvci`.
    pub fn unitdata(bvci: Bvci, sdu: impl Into<Bytes>) -> Self {
        Self::Unitdata {
            bvci,
            sdu: sdu.into(),
        }
    }

    /// The wire type value of this PDU.
    pub fn pdu_type(&self) -> NsPduType {
        match self {
            Self::Unitdata { .. } => NsPduType::Unitdata,
            Self::Control { pdu_type, .. } => *pdu_type,
        }
    }
}
