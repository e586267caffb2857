//! Integration tests for the IuUP frame codec and its split 6/10-bit CRCs.
//!
//! Covers the frame-type-dependent payload offset, the packed checksum
//! field layout in octets 2..4, and the mismatch-is-data decode policy.

mod common;

use common::patterned_payload;

use sigstar::crc::{iuup_header_crc, iuup_payload_crc};
use sigstar::error::{CodecError, ParsingError, StructureType};
use sigstar::protocols::iuup::{
    FrameQuality, IuupAckNack, IuupChecksums, IuupCodec, IuupFrame, IuupProcedure,
};
use sigstar::traits::WireCodec;

/// A type 0 frame with a 10-octet payload behind the 4-octet offset packs
/// the two CRCs into output octets 2..4 exactly: header CRC in the top six
/// bits, payload CRC in the bottom ten.
#[test]
fn packed_checksum_field_occupies_octets_two_and_three() {
    let codec = IuupCodec::new();
    let payload: Vec<u8> = (1..=10).collect();
    let frame = IuupFrame::data(0, FrameQuality::Good, 1, payload.clone());
    let wire = codec.encode_pdu(&frame).unwrap();

    assert_eq!(wire.len(), 4 + 10);
    assert_eq!(&wire[4..], &payload[..]);

    let header_crc = iuup_header_crc(&wire[..2]);
    let payload_crc = iuup_payload_crc(&wire[4..]);
    assert_eq!(header_crc, 0x2F);
    assert_eq!(payload_crc, 0x171);
    assert_eq!(wire[2], (header_crc << 2) | (payload_crc >> 8) as u8);
    assert_eq!(wire[3], (payload_crc & 0xFF) as u8);
    assert_eq!(&wire[2..4], &[0xBD, 0x71]);
}

/// Type 1 frames carry no checksum field: the payload begins at octet 2
/// and the codec never computes a CRC for them.
#[test]
fn type_one_frames_have_no_checksum_field() {
    let codec = IuupCodec::new();
    let frame = IuupFrame::DataNoCrc {
        frame_number: 7,
        fqc: FrameQuality::BadRadio,
        rfci: 0x3F,
        payload: patterned_payload(12).into(),
    };
    let wire = codec.encode_pdu(&frame).unwrap();
    assert_eq!(wire.len(), 2 + 12);
    assert_eq!(&wire[2..], &patterned_payload(12)[..]);
    assert_eq!(codec.decode_pdu(&wire).unwrap(), frame);
}

/// Control procedure frames (type 14) use the same 4-octet checksum offset
/// as data frames.
#[test]
fn control_frames_share_the_checked_offset() {
    let codec = IuupCodec::new();
    let frame = IuupFrame::initialization(1, vec![0x10, 0x01, 0x05]);
    let wire = codec.encode_pdu(&frame).unwrap();

    assert_eq!(wire[0] >> 4, 14);
    assert_eq!(&wire[4..], &[0x10, 0x01, 0x05]);
    assert_eq!(wire[2] >> 2, iuup_header_crc(&wire[..2]));

    let decoded = codec.decode_pdu(&wire).unwrap();
    let IuupFrame::Control {
        procedure,
        ack_nack,
        checksums,
        ..
    } = &decoded
    else {
        panic!("wrong variant: {decoded:?}");
    };
    assert_eq!(*procedure, IuupProcedure::Initialization);
    assert_eq!(*ack_nack, IuupAckNack::Procedure);
    assert!(checksums.is_intact());
}

/// An unrecognized 4-bit frame type is a distinct negative result, not a
/// panic and not a checksum failure.
#[test]
fn unsupported_frame_types_probe_cleanly() {
    let codec = IuupCodec::new();
    for pdu_type in (2..=13u8).chain([15]) {
        let wire = [pdu_type << 4, 0x00, 0x00, 0x00];
        let err = codec.decode_pdu(&wire).unwrap_err();
        assert_eq!(
            err,
            CodecError::Parsing(ParsingError::UnsupportedFormat {
                structure: StructureType::IuupFrame,
                discriminant: pdu_type,
            })
        );
    }
}

/// Header corruption and payload corruption are both reported through the
/// checksum state, with received and computed values preserved.
#[test]
fn corruption_is_reported_as_data() {
    let codec = IuupCodec::new();
    let frame = IuupFrame::data(5, FrameQuality::Good, 2, patterned_payload(8));
    let wire = codec.encode_pdu(&frame).unwrap();

    // Header corruption flips the header CRC only (payload untouched).
    let mut bad_header = wire.clone();
    bad_header[1] ^= 0x01; // RFCI bit
    let decoded = codec.decode_pdu(&bad_header).unwrap();
    let IuupFrame::Data { checksums, .. } = decoded else {
        panic!("wrong variant");
    };
    let IuupChecksums::Mismatch {
        received_header,
        computed_header,
        received_payload,
        computed_payload,
    } = checksums
    else {
        panic!("expected mismatch, got {checksums:?}");
    };
    assert_ne!(received_header, computed_header);
    assert_eq!(received_payload, computed_payload);
}

/// Encode always recomputes: stored checksum state never leaks onto the
/// wire, so a frame decoded from a corrupted image re-encodes correctly.
#[test]
fn stored_checksum_state_never_reaches_the_wire() {
    let codec = IuupCodec::new();
    let frame = IuupFrame::Data {
        frame_number: 1,
        fqc: FrameQuality::Good,
        rfci: 0,
        payload: patterned_payload(6).into(),
        checksums: IuupChecksums::Mismatch {
            received_header: 0x3F,
            received_payload: 0x3FF,
            computed_header: 0,
            computed_payload: 0,
        },
    };
    let wire = codec.encode_pdu(&frame).unwrap();
    let decoded = codec.decode_pdu(&wire).unwrap();
    let IuupFrame::Data { checksums, .. } = decoded else {
        panic!("wrong variant");
    };
    assert!(matches!(checksums, IuupChecksums::Valid { .. }));
}

/// Round trip across all three supported frame types preserves every
/// field except the recomputed checksum state.
#[test]
fn round_trip_preserves_fields_across_types() {
    let codec = IuupCodec::new();
    let frames = [
        IuupFrame::data(15, FrameQuality::Spare, 0x3F, patterned_payload(31)),
        IuupFrame::DataNoCrc {
            frame_number: 0,
            fqc: FrameQuality::Good,
            rfci: 1,
            payload: patterned_payload(3).into(),
        },
        IuupFrame::Control {
            ack_nack: IuupAckNack::Ack,
            frame_number: 3,
            mode_version: 0x0F,
            procedure: IuupProcedure::TimeAlignment,
            payload: patterned_payload(4).into(),
            checksums: IuupChecksums::Computed,
        },
    ];
    for frame in frames {
        let wire = codec.encode_pdu(&frame).unwrap();
        let decoded = codec.decode_pdu(&wire).unwrap();
        assert_eq!(decoded.pdu_type(), frame.pdu_type());
        assert_eq!(decoded.payload(), frame.payload());
        assert_eq!(codec.encode_pdu(&decoded).unwrap(), wire);
    }
}
