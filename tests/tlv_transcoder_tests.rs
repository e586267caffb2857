//! Integration tests for the TvLV / TL16V length-form transcoder.
//!
//! These tests drive whole message buffers through `expand_tlv_section` and
//! `compact_tlv_section` the way the NS and BSSGP codecs do, covering the
//! short/long form boundary, multi-record sections, and the fatal-error
//! policy for malformed lengths.

mod common;

use common::patterned_payload;

use sigstar::error::{ParseContext, ParsingError};
use sigstar::serialization::{compact_tlv_section, expand_tlv_section};

/// A short-form record (E-bit set, length 5) expands to the fixed 16-bit
/// length form and compacts back to the identical wire bytes.
#[test]
fn short_form_record_expands_to_16_bit_length_form() {
    let tvlv = [0x3F, 0x85, b'H', b'E', b'L', b'L', b'O'];
    let expanded = expand_tlv_section(&tvlv, 0).unwrap();
    assert_eq!(expanded, [0x3F, 0x00, 0x05, b'H', b'E', b'L', b'L', b'O']);
    assert_eq!(compact_tlv_section(&expanded, 0).unwrap(), tvlv);
}

/// A section mixing short-form and long-form records round-trips through
/// the canonical form in both directions.
#[test]
fn mixed_form_section_round_trips_both_ways() {
    let long_value = patterned_payload(200);
    let mut tvlv = vec![0x07]; // one-octet fixed header
    tvlv.extend_from_slice(&[0x1F, 0x84, 0xC0, 0x00, 0x00, 0x42]); // short form
    tvlv.extend_from_slice(&[0x0E, 0x00, 200]); // long form, E-bit clear
    tvlv.extend_from_slice(&long_value);
    tvlv.extend_from_slice(&[0x18, 0x80]); // short form, empty value

    let expanded = expand_tlv_section(&tvlv, 1).unwrap();
    assert_eq!(compact_tlv_section(&expanded, 1).unwrap(), tvlv);
    assert_eq!(expand_tlv_section(&tvlv, 1).unwrap(), expanded);
}

/// The 8-octet fixed header of a BSSGP UNITDATA message is copied verbatim
/// and never interpreted as records.
#[test]
fn eight_octet_fixed_header_is_copied_verbatim() {
    // The header bytes deliberately look like a plausible record start.
    let header = [0x00, 0xC0, 0x00, 0x00, 0x42, 0x00, 0x50, 0x20];
    let mut tvlv = header.to_vec();
    tvlv.extend_from_slice(&[0x0E, 0x82, 0xAA, 0xBB]);

    let expanded = expand_tlv_section(&tvlv, 8).unwrap();
    assert_eq!(&expanded[..8], &header);
    assert_eq!(&expanded[8..], &[0x0E, 0x00, 0x02, 0xAA, 0xBB]);
}

/// Value length 127 stays in the 2-octet short form when compacting; 128
/// forces the 3-octet long form.
#[test]
fn compact_form_selection_boundary_is_127() {
    for (len, header_len) in [(127usize, 2usize), (128, 3)] {
        let mut tl16v = vec![0x0E, (len >> 8) as u8, (len & 0xFF) as u8];
        tl16v.extend_from_slice(&patterned_payload(len));
        let compacted = compact_tlv_section(&tl16v, 0).unwrap();
        assert_eq!(
            compacted.len(),
            header_len + len,
            "wrong header width for value length {len}"
        );
        if header_len == 2 {
            assert_eq!(compacted[1], 0x80 | len as u8);
        } else {
            assert_eq!(compacted[1] & 0x80, 0, "E-bit must be clear in long form");
        }
    }
}

/// A buffer too short to hold even one record header fails with a reported
/// error and produces no output.
#[test]
fn undersized_buffer_is_a_fatal_error() {
    let result = expand_tlv_section(&[0x3F], 0);
    assert!(matches!(
        result,
        Err(ParsingError::NotEnoughData {
            context: ParseContext::TlvRecordHeader,
            ..
        })
    ));
}

/// A declared value length running past the buffer aborts the whole message;
/// records before the bad one are not returned piecemeal.
#[test]
fn overrunning_value_length_aborts_the_message() {
    let mut tvlv = vec![0x1F, 0x82, 0x11, 0x22]; // good record
    tvlv.extend_from_slice(&[0x0E, 0x90]); // declares 16 octets, supplies none
    let err = expand_tlv_section(&tvlv, 0).unwrap_err();
    assert_eq!(
        err,
        ParsingError::LengthExceedsBuffer {
            declared: 16,
            available: 0,
            context: ParseContext::TlvRecordValue,
        }
    );
}

/// Truncating an expanded section anywhere inside a record makes compaction
/// fail rather than emit a partial section.
#[test]
fn truncated_canonical_section_fails_compaction() {
    let tvlv = [0x1F, 0x84, 0xC0, 0x00, 0x00, 0x42];
    let expanded = expand_tlv_section(&tvlv, 0).unwrap();
    for cut in 1..expanded.len() {
        assert!(
            compact_tlv_section(&expanded[..cut], 0).is_err(),
            "cut at {cut} octets should not compact"
        );
    }
}
