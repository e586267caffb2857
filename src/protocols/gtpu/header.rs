//! Typed GTP-U message representation.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};

use crate::error::{BuildingError, Field};
use crate::types::Teid;

use super::constants::{
    GTP_EXTENSION_UNIT_BYTES, GTP_MSG_TYPE_ECHO_REQUEST, GTP_MSG_TYPE_ECHO_RESPONSE,
    GTP_MSG_TYPE_END_MARKER, GTP_MSG_TYPE_ERROR_INDICATION, GTP_MSG_TYPE_G_PDU,
    GTP_MSG_TYPE_SUPPORTED_EXT_HEADERS_NOTIFICATION,
};

/// GTP-U message type value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GtpuMessageType {
    EchoRequest,
    EchoResponse,
    ErrorIndication,
    SupportedExtensionHeadersNotification,
    EndMarker,
    GPdu,
    /// Any type value this codec does not name.
    Unknown(u8),
}

impl From<u8> for GtpuMessageType {
    fn from(value: u8) -> Self {
        match value {
            GTP_MSG_TYPE_ECHO_REQUEST => Self::EchoRequest,
            GTP_MSG_TYPE_ECHO_RESPONSE => Self::EchoResponse,
            GTP_MSG_TYPE_ERROR_INDICATION => Self::ErrorIndication,
            GTP_MSG_TYPE_SUPPORTED_EXT_HEADERS_NOTIFICATION => {
                Self::SupportedExtensionHeadersNotification
            }
            GTP_MSG_TYPE_END_MARKER => Self::EndMarker,
            GTP_MSG_TYPE_G_PDU => Self::GPdu,
            other => Self::Unknown(other),
        }
    }
}

impl From<GtpuMessageType> for u8 {
    fn from(message_type: GtpuMessageType) -> Self {
        match message_type {
            GtpuMessageType::EchoRequest => GTP_MSG_TYPE_ECHO_REQUEST,
            GtpuMessageType::EchoResponse => GTP_MSG_TYPE_ECHO_RESPONSE,
            GtpuMessageType::ErrorIndication => GTP_MSG_TYPE_ERROR_INDICATION,
            GtpuMessageType::SupportedExtensionHeadersNotification => {
                GTP_MSG_TYPE_SUPPORTED_EXT_HEADERS_NOTIFICATION
            }
            GtpuMessageType::EndMarker => GTP_MSG_TYPE_END_MARKER,
            GtpuMessageType::GPdu => GTP_MSG_TYPE_G_PDU,
            GtpuMessageType::Unknown(value) => value,
        }
    }
}

/// One extension header record in the optional-part chain.
///
/// A record occupies `4 * length_units` octets on the wire: one type octet,
/// one length octet, then the content. The content length is therefore
/// always `4 * length_units - 2`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtpuExtensionHeader {
    pub extension_type: u8,
    #[serde_as(as = "Hex")]
    pub content: Bytes,
}

impl GtpuExtensionHeader {
    /// Creates a record from a type and owned content bytes.
    pub fn new(extension_type: u8, content: impl Into<Bytes>) -> Self {
        Self {
            extension_type,
            content: content.into(),
        }
    }

    /// The wire length field in 4-octet units.
    ///
    /// # Returns
    /// The unit count, or a build error when the content length cannot be
    /// expressed in whole 4-octet units or exceeds the 255-unit field.
    pub fn length_units(&self) -> Result<u8, BuildingError> {
        let total = self.content.len() + 2;
        if total % GTP_EXTENSION_UNIT_BYTES != 0 {
            return Err(BuildingError::InvalidExtensionLength {
                length: self.content.len(),
            });
        }
        let units = total / GTP_EXTENSION_UNIT_BYTES;
        if units > usize::from(u8::MAX) {
            return Err(BuildingError::InvalidExtensionLength {
                length: self.content.len(),
            });
        }
        Ok(units as u8)
    }
}

/// One GTP-U message in typed form.
///
/// `sequence_number` and `npdu_number` are `Some` only when the matching
/// flag bit is set on the wire; the optional part itself is shared, so a
/// message with extension headers but no sequence number still carries (and
/// ignores) the sequence field on the wire.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtpuPdu {
    pub message_type: GtpuMessageType,
    pub teid: Teid,
    pub sequence_number: Option<u16>,
    pub npdu_number: Option<u8>,
    pub extension_headers: Vec<GtpuExtensionHeader>,
    #[serde_as(as = "Hex")]
    pub payload: Bytes,
}

impl GtpuPdu {
    /// Creates a plain G-PDU carrying a user packet.
    pub fn g_pdu(teid: Teid, payload: impl Into<Bytes>) -> Self {
        Self {
            message_type: GtpuMessageType::GPdu,
            teid,
            sequence_number: None,
            npdu_number: None,
            extension_headers: Vec::new(),
            payload: payload.into(),
        }
    }

    /// Creates an Echo Request with the given sequence number.
    pub fn echo_request(sequence_number: u16) -> Self {
        Self {
            message_type: GtpuMessageType::EchoRequest,
            teid: Teid::ZERO,
            sequence_number: Some(sequence_number),
            npdu_number: None,
            extension_headers: Vec::new(),
            payload: Bytes::new(),
        }
    }

    /// Whether any optional-part flag bit will be set on the wire.
    pub fn has_optional_part(&self) -> bool {
        self.sequence_number.is_some()
            || self.npdu_number.is_some()
            || !self.extension_headers.is_empty()
    }
}

/// Rejects the reserved zero value, which terminates the chain on the wire.
pub(super) fn check_extension_type(extension_type: u8) -> Result<u8, BuildingError> {
    if extension_type == 0 {
        return Err(BuildingError::ReservedFieldValue {
            field: Field::ExtensionType,
            value: 0,
        });
    }
    Ok(extension_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_type_values_round_trip() {
        for value in [1, 2, 26, 31, 254, 255, 3] {
            assert_eq!(u8::from(GtpuMessageType::from(value)), value);
        }
        assert_eq!(GtpuMessageType::from(3), GtpuMessageType::Unknown(3));
    }

    #[test]
    fn length_units_counts_type_and_length_octets() {
        // 2 content octets + 2 header octets = 1 unit.
        let one = GtpuExtensionHeader::new(0x40, vec![0x08, 0x68]);
        assert_eq!(one.length_units().unwrap(), 1);

        // 6 content octets = 2 units.
        let two = GtpuExtensionHeader::new(0x85, vec![0; 6]);
        assert_eq!(two.length_units().unwrap(), 2);
    }

    #[test]
    fn length_units_rejects_unaligned_content() {
        let bad = GtpuExtensionHeader::new(0x40, vec![0; 3]);
        assert_eq!(
            bad.length_units().unwrap_err(),
            BuildingError::InvalidExtensionLength { length: 3 }
        );

        // Empty content would need half a unit.
        let empty = GtpuExtensionHeader::new(0x40, Vec::new());
        assert!(empty.length_units().is_err());
    }

    #[test]
    fn length_units_rejects_content_beyond_the_unit_field() {
        // 255 units is the ceiling: 4 * 255 - 2 content octets.
        let max = GtpuExtensionHeader::new(0x84, vec![0; 4 * 255 - 2]);
        assert_eq!(max.length_units().unwrap(), 255);

        let over = GtpuExtensionHeader::new(0x84, vec![0; 4 * 256 - 2]);
        assert!(over.length_units().is_err());
    }

    #[test]
    fn optional_part_presence_follows_the_three_fields() {
        let mut pdu = GtpuPdu::g_pdu(Teid::new(1), vec![0x45]);
        assert!(!pdu.has_optional_part());

        pdu.npdu_number = Some(9);
        assert!(pdu.has_optional_part());

        pdu.npdu_number = None;
        pdu.extension_headers
            .push(GtpuExtensionHeader::new(0x40, vec![0x08, 0x68]));
        assert!(pdu.has_optional_part());
    }
}
