//! Typed IuUP frame representation.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};

/// Frame quality classification (FQC), a 2-bit field of data frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameQuality {
    Good,
    Bad,
    BadRadio,
    Spare,
}

impl From<u8> for FrameQuality {
    fn from(value: u8) -> Self {
        match value & 0x03 {
            0 => Self::Good,
            1 => Self::Bad,
            2 => Self::BadRadio,
            _ => Self::Spare,
        }
    }
}

impl From<FrameQuality> for u8 {
    fn from(fqc: FrameQuality) -> Self {
        match fqc {
            FrameQuality::Good => 0,
            FrameQuality::Bad => 1,
            FrameQuality::BadRadio => 2,
            FrameQuality::Spare => 3,
        }
    }
}

/// Ack/nack classification of a control frame, a 2-bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IuupAckNack {
    /// An initiating procedure frame.
    Procedure,
    Ack,
    Nack,
    Spare,
}

impl From<u8> for IuupAckNack {
    fn from(value: u8) -> Self {
        match value & 0x03 {
            0 => Self::Procedure,
            1 => Self::Ack,
            2 => Self::Nack,
            _ => Self::Spare,
        }
    }
}

impl From<IuupAckNack> for u8 {
    fn from(ack_nack: IuupAckNack) -> Self {
        match ack_nack {
            IuupAckNack::Procedure => 0,
            IuupAckNack::Ack => 1,
            IuupAckNack::Nack => 2,
            IuupAckNack::Spare => 3,
        }
    }
}

/// Control procedure indicator, a 4-bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IuupProcedure {
    Initialization,
    RateControl,
    TimeAlignment,
    ErrorEvent,
    /// Any procedure value this codec does not name.
    Unknown(u8),
}

impl From<u8> for IuupProcedure {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Initialization,
            1 => Self::RateControl,
            2 => Self::TimeAlignment,
            3 => Self::ErrorEvent,
            other => Self::Unknown(other),
        }
    }
}

impl From<IuupProcedure> for u8 {
    fn from(procedure: IuupProcedure) -> Self {
        match procedure {
            IuupProcedure::Initialization => 0,
            IuupProcedure::RateControl => 1,
            IuupProcedure::TimeAlignment => 2,
            IuupProcedure::ErrorEvent => 3,
            IuupProcedure::Unknown(value) => value,
        }
    }
}

/// Checksum state of a frame that carries the 2-octet checksum field.
///
/// Decoders never fail on a checksum disagreement; they return the frame
/// with [`IuupChecksums::Mismatch`] so the caller can inspect both sides.
/// Encoders recompute the field from the serialized octets regardless of
/// this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IuupChecksums {
    /// Not yet computed; the encoder fills the field in.
    #[default]
    Computed,
    /// Received checksums matched the recomputed values.
    Valid { header: u8, payload: u16 },
    /// At least one received checksum disagreed with the recomputed value.
    Mismatch {
        received_header: u8,
        received_payload: u16,
        computed_header: u8,
        computed_payload: u16,
    },
}

impl IuupChecksums {
    /// Whether the frame arrived with matching checksums (or none yet).
    pub const fn is_intact(&self) -> bool {
        !matches!(self, Self::Mismatch { .. })
    }
}

/// One IuUP frame in typed form, one variant per supported PDU type.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IuupFrame {
    /// PDU type 0: user data with header and payload checksums.
    Data {
        frame_number: u8,
        fqc: FrameQuality,
        rfci: u8,
        #[serde_as(as = "Hex")]
        payload: Bytes,
        checksums: IuupChecksums,
    },
    /// PDU type 1: user data, no checksum field on the wire.
    DataNoCrc {
        frame_number: u8,
        fqc: FrameQuality,
        rfci: u8,
        #[serde_as(as = "Hex")]
        payload: Bytes,
    },
    /// PDU type 14: control procedure frame.
    Control {
        ack_nack: IuupAckNack,
        frame_number: u8,
        mode_version: u8,
        procedure: IuupProcedure,
        #[serde_as(as = "Hex")]
        payload: Bytes,
        checksums: IuupChecksums,
    },
}

impl IuupFrame {
    /// Creates a checksummed data frame.
    pub fn data(frame_number: u8, fqc: FrameQuality, rfci: u8, payload: impl Into<Bytes>) -> Self {
        Self::Data {
            frame_number,
            fqc,
            rfci,
            payload: payload.into(),
            checksums: IuupChecksums::Computed,
        }
    }

    /// Creates an initialization control frame.
    pub fn initialization(mode_version: u8, payload: impl Into<Bytes>) -> Self {
        Self::Control {
            ack_nack: IuupAckNack::Procedure,
            frame_number: 0,
            mode_version,
            procedure: IuupProcedure::Initialization,
            payload: payload.into(),
            checksums: IuupChecksums::Computed,
        }
    }

    /// The 4-bit PDU type value of this frame.
    pub const fn pdu_type(&self) -> u8 {
        match self {
            Self::Data { .. } => super::constants::IUUP_PDU_TYPE_DATA_CRC,
            Self::DataNoCrc { .. } => super::constants::IUUP_PDU_TYPE_DATA_NO_CRC,
            Self::Control { .. } => super::constants::IUUP_PDU_TYPE_CONTROL,
        }
    }

    /// The user payload octets.
    pub fn payload(&self) -> &Bytes {
        match self {
            Self::Data { payload, .. }
            | Self::DataNoCrc { payload, .. }
            | Self::Control { payload, .. } => payload,
        }
    }
}
