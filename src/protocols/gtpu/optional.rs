//! Optional header part: sequence number, N-PDU number, extension chain.
//!
//! The optional part is all-or-nothing: if any of the three low flag bits is
//! set, all four minimum octets are present and the extension chain is
//! walked, whichever individual bits are set. The chain cursor sits on a
//! type octet at each step; a zero type terminates the chain and the payload
//! begins right after it.

use bytes::{BufMut, Bytes};

use crate::error::{BuildingError, Field, ParseContext, ParsingError, StructureType};

use super::constants::{
    GTP_EXTENSION_UNIT_BYTES, GTP_FLAGS_OPTIONAL_MASK, GTP_OPTIONAL_PART_MIN_LENGTH_BYTES,
};
use super::header::{GtpuExtensionHeader, check_extension_type};

/// Tests the three low flag bits of the first header octet.
pub const fn has_optional_part(first_octet: u8) -> bool {
    first_octet & GTP_FLAGS_OPTIONAL_MASK != 0
}

/// The decoded optional part and how many octets it occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOptionalPart {
    /// Sequence field value, meaningful only when the S bit is set.
    pub sequence_number: u16,
    /// N-PDU field value, meaningful only when the PN bit is set.
    pub npdu_number: u8,
    pub extension_headers: Vec<GtpuExtensionHeader>,
    /// Octets consumed from the start of the optional part.
    pub consumed: usize,
}

/// Parses the optional part from the octets following the fixed header.
///
/// Each extension record spans `4 * L` octets: its type octet, the length
/// octet `L`, and `4 * L - 2` content octets; the next record's type octet
/// (or the zero terminator) immediately follows. Every advance is checked
/// against the buffer before any octet is read.
pub fn parse_optional_part(data: &[u8]) -> Result<ParsedOptionalPart, ParsingError> {
    if data.len() < GTP_OPTIONAL_PART_MIN_LENGTH_BYTES {
        return Err(ParsingError::NotEnoughData {
            needed: GTP_OPTIONAL_PART_MIN_LENGTH_BYTES,
            got: data.len(),
            context: ParseContext::GtpOptionalPart,
        });
    }

    let sequence_number = u16::from_be_bytes([data[0], data[1]]);
    let npdu_number = data[2];

    let mut extension_headers = Vec::new();
    let mut cursor = GTP_OPTIONAL_PART_MIN_LENGTH_BYTES - 1;
    while data[cursor] != 0 {
        let extension_type = data[cursor];
        let Some(&units) = data.get(cursor + 1) else {
            return Err(ParsingError::NotEnoughData {
                needed: cursor + 2,
                got: data.len(),
                context: ParseContext::GtpExtensionHeader,
            });
        };
        if units == 0 {
            return Err(ParsingError::InvalidFieldValue {
                field: Field::ExtensionLength,
                structure: StructureType::GtpExtensionHeader,
                expected: 1,
                got: 0,
            });
        }

        // The record ends where the next type octet (or terminator) sits;
        // that octet must itself be readable for the loop to continue.
        let record_end = cursor + GTP_EXTENSION_UNIT_BYTES * usize::from(units);
        if record_end >= data.len() {
            return Err(ParsingError::NotEnoughData {
                needed: record_end + 1,
                got: data.len(),
                context: ParseContext::GtpExtensionHeader,
            });
        }

        extension_headers.push(GtpuExtensionHeader {
            extension_type,
            content: Bytes::copy_from_slice(&data[cursor + 2..record_end]),
        });
        cursor = record_end;
    }

    Ok(ParsedOptionalPart {
        sequence_number,
        npdu_number,
        extension_headers,
        consumed: cursor + 1,
    })
}

/// Emits the optional part octets for the given fields.
///
/// Fields whose flag bit is clear are emitted as zero; the wire carries all
/// four minimum octets whenever any flag is set.
pub fn emit_optional_part(
    sequence_number: u16,
    npdu_number: u8,
    extension_headers: &[GtpuExtensionHeader],
) -> Result<Vec<u8>, BuildingError> {
    let mut out = Vec::with_capacity(GTP_OPTIONAL_PART_MIN_LENGTH_BYTES);
    out.put_u16(sequence_number);
    out.put_u8(npdu_number);

    match extension_headers.first() {
        None => out.put_u8(0),
        Some(first) => {
            out.put_u8(check_extension_type(first.extension_type)?);
            for (index, header) in extension_headers.iter().enumerate() {
                out.put_u8(header.length_units()?);
                out.put_slice(&header.content);
                match extension_headers.get(index + 1) {
                    Some(next) => out.put_u8(check_extension_type(next.extension_type)?),
                    None => out.put_u8(0),
                }
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_test_matches_any_low_bit() {
        assert!(!has_optional_part(0x30));
        assert!(has_optional_part(0x32));
        assert!(has_optional_part(0x31));
        assert!(has_optional_part(0x34));
        assert!(has_optional_part(0x37));
    }

    #[test]
    fn minimum_part_with_zero_terminator_consumes_four_octets() {
        let parsed = parse_optional_part(&[0x00, 0x01, 0x00, 0x00]).unwrap();
        assert_eq!(parsed.sequence_number, 1);
        assert_eq!(parsed.npdu_number, 0);
        assert!(parsed.extension_headers.is_empty());
        assert_eq!(parsed.consumed, 4);
    }

    #[test]
    fn single_record_chain() {
        // UDP port extension: type 0x40, 1 unit, port 2152, terminator.
        let data = [0x12, 0x34, 0x07, 0x40, 0x01, 0x08, 0x68, 0x00, 0xEE];
        let parsed = parse_optional_part(&data).unwrap();
        assert_eq!(parsed.sequence_number, 0x1234);
        assert_eq!(parsed.npdu_number, 0x07);
        assert_eq!(
            parsed.extension_headers,
            vec![GtpuExtensionHeader::new(0x40, vec![0x08, 0x68])]
        );
        // The trailing 0xEE is payload, not part of the chain.
        assert_eq!(parsed.consumed, 8);
    }

    #[test]
    fn two_record_chain() {
        let data = [
            0x00, 0x00, 0x00, // seq + npdu
            0x40, 0x01, 0x08, 0x68, // first record, 1 unit
            0x85, 0x02, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, // second record, 2 units
            0x00, // terminator
        ];
        let parsed = parse_optional_part(&data).unwrap();
        assert_eq!(
            parsed.extension_headers,
            vec![
                GtpuExtensionHeader::new(0x40, vec![0x08, 0x68]),
                GtpuExtensionHeader::new(0x85, vec![0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6]),
            ]
        );
        assert_eq!(parsed.consumed, data.len());
    }

    #[test]
    fn zero_unit_count_is_rejected() {
        let data = [0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00];
        let err = parse_optional_part(&data).unwrap_err();
        assert_eq!(
            err,
            ParsingError::InvalidFieldValue {
                field: Field::ExtensionLength,
                structure: StructureType::GtpExtensionHeader,
                expected: 1,
                got: 0,
            }
        );
    }

    #[test]
    fn chain_running_past_the_buffer_is_rejected() {
        // Record claims 2 units (8 octets) but the buffer ends early.
        let data = [0x00, 0x00, 0x00, 0x85, 0x02, 0xA1, 0xA2];
        let err = parse_optional_part(&data).unwrap_err();
        assert!(matches!(
            err,
            ParsingError::NotEnoughData {
                context: ParseContext::GtpExtensionHeader,
                ..
            }
        ));
    }

    #[test]
    fn truncated_minimum_part_is_rejected() {
        let err = parse_optional_part(&[0x00, 0x01]).unwrap_err();
        assert_eq!(
            err,
            ParsingError::NotEnoughData {
                needed: 4,
                got: 2,
                context: ParseContext::GtpOptionalPart,
            }
        );
    }

    #[test]
    fn emit_and_parse_are_inverse() {
        let headers = vec![
            GtpuExtensionHeader::new(0x40, vec![0x08, 0x68]),
            GtpuExtensionHeader::new(0xC0, vec![0x00, 0x2A]),
        ];
        let wire = emit_optional_part(0xBEEF, 3, &headers).unwrap();
        let parsed = parse_optional_part(&wire).unwrap();
        assert_eq!(parsed.sequence_number, 0xBEEF);
        assert_eq!(parsed.npdu_number, 3);
        assert_eq!(parsed.extension_headers, headers);
        assert_eq!(parsed.consumed, wire.len());
    }

    #[test]
    fn emit_rejects_the_reserved_zero_type() {
        let headers = vec![GtpuExtensionHeader::new(0x00, vec![0x08, 0x68])];
        let err = emit_optional_part(0, 0, &headers).unwrap_err();
        assert_eq!(
            err,
            BuildingError::ReservedFieldValue {
                field: Field::ExtensionType,
                value: 0,
            }
        );
    }
}
