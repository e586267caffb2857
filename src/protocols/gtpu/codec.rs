//! GTP-U encoding and decoding.

use bytes::{BufMut, Bytes};

use crate::error::{
    BuildingError, CodecError, Field, ParseContext, ParsingError, StructureType,
};
use crate::traits::WireCodec;
use crate::types::Teid;

use super::constants::{
    GTP_FIXED_HEADER_LENGTH_BYTES, GTP_FLAGS_EXTENSION_HEADER, GTP_FLAGS_NPDU_NUMBER,
    GTP_FLAGS_PROTOCOL_TYPE, GTP_FLAGS_SEQUENCE_NUMBER, GTP_FLAGS_VERSION_SHIFT, GTP_U_VERSION,
};
use super::header::GtpuPdu;
use super::optional::{emit_optional_part, has_optional_part, parse_optional_part};

/// Codec for GTP-U messages.
///
/// The decoder is strict about the header length field: it must account for
/// exactly the octets following the fixed header, so neither truncated nor
/// padded datagrams decode. Sequence and N-PDU numbers survive a round trip
/// only when their flag bit is set; the optional part itself is re-emitted
/// in canonical form.
#[derive(Debug, Default)]
pub struct GtpuCodec;

impl GtpuCodec {
    /// Creates a new codec.
    pub fn new() -> Self {
        Self
    }
}

impl WireCodec for GtpuCodec {
    type Pdu = GtpuPdu;

    fn protocol_name(&self) -> &'static str {
        "GTP-U"
    }

    fn encode_pdu(&self, pdu: &GtpuPdu) -> Result<Vec<u8>, CodecError> {
        let mut out =
            Vec::with_capacity(GTP_FIXED_HEADER_LENGTH_BYTES + pdu.payload.len() + 16);
        out.put_u8((GTP_U_VERSION << GTP_FLAGS_VERSION_SHIFT) | GTP_FLAGS_PROTOCOL_TYPE);
        out.put_u8(u8::from(pdu.message_type));
        out.put_u16(0); // length, patched below
        out.put_u32(pdu.teid.value());
        out.put_slice(&pdu.payload);

        let mut length_after_header = pdu.payload.len();
        if pdu.has_optional_part() {
            let optional = emit_optional_part(
                pdu.sequence_number.unwrap_or(0),
                pdu.npdu_number.unwrap_or(0),
                &pdu.extension_headers,
            )?;
            if pdu.sequence_number.is_some() {
                out[0] |= GTP_FLAGS_SEQUENCE_NUMBER;
            }
            if pdu.npdu_number.is_some() {
                out[0] |= GTP_FLAGS_NPDU_NUMBER;
            }
            if !pdu.extension_headers.is_empty() {
                out[0] |= GTP_FLAGS_EXTENSION_HEADER;
            }
            length_after_header += optional.len();

            let payload_tail = out.split_off(GTP_FIXED_HEADER_LENGTH_BYTES);
            out.extend_from_slice(&optional);
            out.extend_from_slice(&payload_tail);
        }

        if length_after_header > usize::from(u16::MAX) {
            return Err(BuildingError::InvalidFieldValueForBuild {
                field: Field::MessageLength,
                value: length_after_header as u32,
                max_bits: 16,
            }
            .into());
        }
        out[2..4].copy_from_slice(&(length_after_header as u16).to_be_bytes());
        Ok(out)
    }

    fn decode_pdu(&self, data: &[u8]) -> Result<GtpuPdu, CodecError> {
        if data.len() < GTP_FIXED_HEADER_LENGTH_BYTES {
            return Err(ParsingError::NotEnoughData {
                needed: GTP_FIXED_HEADER_LENGTH_BYTES,
                got: data.len(),
                context: ParseContext::GtpFixedHeader,
            }
            .into());
        }

        let flags = data[0];
        let version = flags >> GTP_FLAGS_VERSION_SHIFT;
        if version != GTP_U_VERSION {
            return Err(ParsingError::InvalidFieldValue {
                field: Field::GtpVersion,
                structure: StructureType::GtpHeader,
                expected: u32::from(GTP_U_VERSION),
                got: u32::from(version),
            }
            .into());
        }
        if flags & GTP_FLAGS_PROTOCOL_TYPE == 0 {
            return Err(ParsingError::InvalidFieldValue {
                field: Field::ProtocolType,
                structure: StructureType::GtpHeader,
                expected: 1,
                got: 0,
            }
            .into());
        }

        let declared = usize::from(u16::from_be_bytes([data[2], data[3]]));
        let available = data.len() - GTP_FIXED_HEADER_LENGTH_BYTES;
        if declared > available {
            return Err(ParsingError::LengthExceedsBuffer {
                declared,
                available,
                context: ParseContext::GtpFixedHeader,
            }
            .into());
        }
        if declared < available {
            return Err(ParsingError::InvalidFieldValue {
                field: Field::MessageLength,
                structure: StructureType::GtpHeader,
                expected: available as u32,
                got: declared as u32,
            }
            .into());
        }

        let message_type = data[1].into();
        let teid = Teid::new(u32::from_be_bytes([data[4], data[5], data[6], data[7]]));

        if !has_optional_part(flags) {
            return Ok(GtpuPdu {
                message_type,
                teid,
                sequence_number: None,
                npdu_number: None,
                extension_headers: Vec::new(),
                payload: Bytes::copy_from_slice(&data[GTP_FIXED_HEADER_LENGTH_BYTES..]),
            });
        }

        let optional = parse_optional_part(&data[GTP_FIXED_HEADER_LENGTH_BYTES..])?;
        let payload_start = GTP_FIXED_HEADER_LENGTH_BYTES + optional.consumed;
        Ok(GtpuPdu {
            message_type,
            teid,
            sequence_number: (flags & GTP_FLAGS_SEQUENCE_NUMBER != 0)
                .then_some(optional.sequence_number),
            npdu_number: (flags & GTP_FLAGS_NPDU_NUMBER != 0).then_some(optional.npdu_number),
            extension_headers: optional.extension_headers,
            payload: Bytes::copy_from_slice(&data[payload_start..]),
        })
    }
}
