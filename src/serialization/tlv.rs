//! TLV length-form transcoding between TvLV and TL16V sections.
//!
//! The Gb-interface protocols carry their information elements in a compact
//! variable-length form on the wire (TvLV: one or two length octets selected
//! by the E-bit) while the fixed-layout record parser consumes a canonical
//! form with a constant 16-bit length field (TL16V). `expand_tlv_section` and
//! `compact_tlv_section` convert a whole message between the two forms,
//! copying the protocol's fixed header verbatim and re-emitting every record
//! after it. Which fixed-header length applies, and whether a message carries
//! a TLV section at all, is decided by the calling protocol codec.

use bytes::{BufMut, Bytes};
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};

use crate::constants::{
    TL16V_HEADER_LENGTH_BYTES, TL16V_MAX_LENGTH, TLV_LONG_FORM_MAX_LENGTH, TLV_SHORT_FORM_FLAG,
    TLV_SHORT_FORM_LENGTH_MASK, TLV_SHORT_FORM_MAX_LENGTH, TVLV_LONG_HEADER_LENGTH_BYTES,
    TVLV_SHORT_HEADER_LENGTH_BYTES,
};
use crate::error::{ParseContext, ParsingError};

/// One tag-length-value record in its parsed form.
///
/// The tag is copied verbatim between length forms; the value length is
/// whatever the section declared, re-encoded per destination form.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tlv {
    pub tag: u8,
    #[serde_as(as = "Hex")]
    pub value: Bytes,
}

impl Tlv {
    /// Creates a record from a tag and owned value bytes.
    pub fn new(tag: u8, value: impl Into<Bytes>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }
}

/// Converts a TvLV-form message into TL16V form.
///
/// The first `fixed_header_len` octets are copied verbatim; every following
/// record is re-emitted with a 3-octet header (tag plus 16-bit big-endian
/// length). The loop must terminate exactly at the buffer end; a record
/// header or value running past it aborts with an error and no output.
pub fn expand_tlv_section(
    message: &[u8],
    fixed_header_len: usize,
) -> Result<Vec<u8>, ParsingError> {
    if message.len() < fixed_header_len {
        return Err(ParsingError::NotEnoughData {
            needed: fixed_header_len,
            got: message.len(),
            context: ParseContext::TlvFixedHeader,
        });
    }

    let mut out = Vec::with_capacity(message.len() + 16);
    out.put_slice(&message[..fixed_header_len]);

    let mut offset = fixed_header_len;
    while offset < message.len() {
        if message.len() < offset + TVLV_SHORT_HEADER_LENGTH_BYTES {
            return Err(ParsingError::NotEnoughData {
                needed: offset + TVLV_SHORT_HEADER_LENGTH_BYTES,
                got: message.len(),
                context: ParseContext::TlvRecordHeader,
            });
        }
        let tag = message[offset];
        let first_len_octet = message[offset + 1];

        let (value_len, header_len) = if first_len_octet & TLV_SHORT_FORM_FLAG != 0 {
            (
                usize::from(first_len_octet & TLV_SHORT_FORM_LENGTH_MASK),
                TVLV_SHORT_HEADER_LENGTH_BYTES,
            )
        } else {
            if message.len() < offset + TVLV_LONG_HEADER_LENGTH_BYTES {
                return Err(ParsingError::NotEnoughData {
                    needed: offset + TVLV_LONG_HEADER_LENGTH_BYTES,
                    got: message.len(),
                    context: ParseContext::TlvRecordHeader,
                });
            }
            (
                (usize::from(first_len_octet) << 8) | usize::from(message[offset + 2]),
                TVLV_LONG_HEADER_LENGTH_BYTES,
            )
        };

        let value_start = offset + header_len;
        if value_len > message.len() - value_start {
            return Err(ParsingError::LengthExceedsBuffer {
                declared: value_len,
                available: message.len() - value_start,
                context: ParseContext::TlvRecordValue,
            });
        }

        out.put_u8(tag);
        out.put_u16(value_len as u16);
        out.put_slice(&message[value_start..value_start + value_len]);
        offset = value_start + value_len;
    }

    Ok(out)
}

/// Converts a TL16V-form message into TvLV form.
///
/// Value lengths up to 127 take the short form with the E-bit set; longer
/// values take the two-octet long form with the top bit of the first length
/// octet clear. A length above the 15-bit long-form ceiling has no TvLV
/// representation and is a reported error.
pub fn compact_tlv_section(
    message: &[u8],
    fixed_header_len: usize,
) -> Result<Vec<u8>, ParsingError> {
    if message.len() < fixed_header_len {
        return Err(ParsingError::NotEnoughData {
            needed: fixed_header_len,
            got: message.len(),
            context: ParseContext::TlvFixedHeader,
        });
    }

    let mut out = Vec::with_capacity(message.len());
    out.put_slice(&message[..fixed_header_len]);

    let mut offset = fixed_header_len;
    while offset < message.len() {
        if message.len() < offset + TL16V_HEADER_LENGTH_BYTES {
            return Err(ParsingError::NotEnoughData {
                needed: offset + TL16V_HEADER_LENGTH_BYTES,
                got: message.len(),
                context: ParseContext::TlvRecordHeader,
            });
        }
        let tag = message[offset];
        let value_len = usize::from(u16::from_be_bytes([message[offset + 1], message[offset + 2]]));

        let value_start = offset + TL16V_HEADER_LENGTH_BYTES;
        if value_len > message.len() - value_start {
            return Err(ParsingError::LengthExceedsBuffer {
                declared: value_len,
                available: message.len() - value_start,
                context: ParseContext::TlvRecordValue,
            });
        }

        if value_len <= TLV_SHORT_FORM_MAX_LENGTH {
            out.put_u8(tag);
            out.put_u8(TLV_SHORT_FORM_FLAG | value_len as u8);
        } else if value_len <= TLV_LONG_FORM_MAX_LENGTH {
            out.put_u8(tag);
            out.put_u8((value_len >> 8) as u8);
            out.put_u8((value_len & 0xFF) as u8);
        } else {
            return Err(ParsingError::LengthFormOverflow {
                length: value_len,
                max: TLV_LONG_FORM_MAX_LENGTH,
            });
        }
        out.put_slice(&message[value_start..value_start + value_len]);
        offset = value_start + value_len;
    }

    Ok(out)
}

/// Parses a bare TL16V section (no fixed header) into its records.
pub fn parse_tl16v_records(section: &[u8]) -> Result<Vec<Tlv>, ParsingError> {
    let mut records = Vec::new();
    let mut offset = 0;
    while offset < section.len() {
        if section.len() < offset + TL16V_HEADER_LENGTH_BYTES {
            return Err(ParsingError::NotEnoughData {
                needed: offset + TL16V_HEADER_LENGTH_BYTES,
                got: section.len(),
                context: ParseContext::TlvRecordHeader,
            });
        }
        let tag = section[offset];
        let value_len = usize::from(u16::from_be_bytes([section[offset + 1], section[offset + 2]]));

        let value_start = offset + TL16V_HEADER_LENGTH_BYTES;
        if value_len > section.len() - value_start {
            return Err(ParsingError::LengthExceedsBuffer {
                declared: value_len,
                available: section.len() - value_start,
                context: ParseContext::TlvRecordValue,
            });
        }

        records.push(Tlv {
            tag,
            value: Bytes::copy_from_slice(&section[value_start..value_start + value_len]),
        });
        offset = value_start + value_len;
    }
    Ok(records)
}

/// Emits records as a TL16V section into `out`.
///
/// Callers keep value lengths within the 16-bit length field; the protocol
/// builders validate that before reaching this point.
pub fn emit_tl16v_records(records: &[Tlv], out: &mut Vec<u8>) {
    for record in records {
        debug_assert!(record.value.len() <= TL16V_MAX_LENGTH);
        out.put_u8(record.tag);
        out.put_u16(record.value.len() as u16);
        out.put_slice(&record.value);
    }
}
