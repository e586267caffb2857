//! IuUP frame encoding and decoding.

use bytes::{BufMut, Bytes};

use crate::crc::{iuup_header_crc, iuup_payload_crc};
use crate::error::{BuildingError, CodecError, Field, ParseContext, ParsingError, StructureType};
use crate::traits::WireCodec;

use super::constants::{
    IUUP_CHECKED_PAYLOAD_OFFSET_BYTES, IUUP_HEADER_LENGTH_BYTES, IUUP_MAX_CONTROL_FRAME_NUMBER,
    IUUP_MAX_DATA_FRAME_NUMBER, IUUP_MAX_MODE_VERSION, IUUP_MAX_PROCEDURE, IUUP_MAX_RFCI,
    IUUP_PDU_TYPE_CONTROL, IUUP_PDU_TYPE_DATA_CRC, IUUP_PDU_TYPE_DATA_NO_CRC,
    IUUP_UNCHECKED_PAYLOAD_OFFSET_BYTES,
};
use super::frame::{FrameQuality, IuupAckNack, IuupChecksums, IuupFrame, IuupProcedure};

/// Codec for IuUP frames.
///
/// The encoder serializes the frame with a zeroed checksum field, computes
/// both CRCs over the serialized octets, and splices the packed field into
/// octets 2..4. Stored checksum state is ignored: re-encoding a frame that
/// arrived with a mismatch produces a correct wire image.
#[derive(Debug, Default)]
pub struct IuupCodec;

impl IuupCodec {
    /// Creates a new codec.
    pub fn new() -> Self {
        Self
    }
}

fn check_width(value: u8, max: u8, field: Field) -> Result<(), BuildingError> {
    if value > max {
        return Err(BuildingError::InvalidFieldValueForBuild {
            field,
            value: u32::from(value),
            max_bits: max.count_ones() as u8,
        });
    }
    Ok(())
}

/// Overwrites octets 2..4 with the packed header and payload CRCs.
fn splice_checksums(out: &mut [u8]) {
    let header = iuup_header_crc(&out[..IUUP_HEADER_LENGTH_BYTES]);
    let payload = iuup_payload_crc(&out[IUUP_CHECKED_PAYLOAD_OFFSET_BYTES..]);
    out[2] = (header << 2) | (payload >> 8) as u8;
    out[3] = (payload & 0xFF) as u8;
}

/// Unpacks and verifies the checksum field of a type 0 or 14 frame.
fn verify_checksums(data: &[u8]) -> Result<IuupChecksums, ParsingError> {
    if data.len() < IUUP_CHECKED_PAYLOAD_OFFSET_BYTES {
        return Err(ParsingError::NotEnoughData {
            needed: IUUP_CHECKED_PAYLOAD_OFFSET_BYTES,
            got: data.len(),
            context: ParseContext::IuupChecksumField,
        });
    }

    let received_header = data[2] >> 2;
    let received_payload = (u16::from(data[2] & 0x03) << 8) | u16::from(data[3]);
    let computed_header = iuup_header_crc(&data[..IUUP_HEADER_LENGTH_BYTES]);
    let computed_payload = iuup_payload_crc(&data[IUUP_CHECKED_PAYLOAD_OFFSET_BYTES..]);

    if received_header == computed_header && received_payload == computed_payload {
        Ok(IuupChecksums::Valid {
            header: computed_header,
            payload: computed_payload,
        })
    } else {
        Ok(IuupChecksums::Mismatch {
            received_header,
            received_payload,
            computed_header,
            computed_payload,
        })
    }
}

impl WireCodec for IuupCodec {
    type Pdu = IuupFrame;

    fn protocol_name(&self) -> &'static str {
        "IuUP"
    }

    fn encode_pdu(&self, frame: &IuupFrame) -> Result<Vec<u8>, CodecError> {
        let out = match frame {
            IuupFrame::Data {
                frame_number,
                fqc,
                rfci,
                payload,
                ..
            } => {
                check_width(*frame_number, IUUP_MAX_DATA_FRAME_NUMBER, Field::FrameNumber)?;
                check_width(*rfci, IUUP_MAX_RFCI, Field::Rfci)?;
                let mut out =
                    Vec::with_capacity(IUUP_CHECKED_PAYLOAD_OFFSET_BYTES + payload.len());
                out.put_u8((IUUP_PDU_TYPE_DATA_CRC << 4) | *frame_number);
                out.put_u8((u8::from(*fqc) << 6) | *rfci);
                out.put_u16(0);
                out.put_slice(payload);
                splice_checksums(&mut out);
                out
            }
            IuupFrame::DataNoCrc {
                frame_number,
                fqc,
                rfci,
                payload,
            } => {
                check_width(*frame_number, IUUP_MAX_DATA_FRAME_NUMBER, Field::FrameNumber)?;
                check_width(*rfci, IUUP_MAX_RFCI, Field::Rfci)?;
                let mut out =
                    Vec::with_capacity(IUUP_UNCHECKED_PAYLOAD_OFFSET_BYTES + payload.len());
                out.put_u8((IUUP_PDU_TYPE_DATA_NO_CRC << 4) | *frame_number);
                out.put_u8((u8::from(*fqc) << 6) | *rfci);
                out.put_slice(payload);
                out
            }
            IuupFrame::Control {
                ack_nack,
                frame_number,
                mode_version,
                procedure,
                payload,
                ..
            } => {
                check_width(
                    *frame_number,
                    IUUP_MAX_CONTROL_FRAME_NUMBER,
                    Field::FrameNumber,
                )?;
                check_width(*mode_version, IUUP_MAX_MODE_VERSION, Field::ModeVersion)?;
                check_width(u8::from(*procedure), IUUP_MAX_PROCEDURE, Field::Procedure)?;
                let mut out =
                    Vec::with_capacity(IUUP_CHECKED_PAYLOAD_OFFSET_BYTES + payload.len());
                out.put_u8(
                    (IUUP_PDU_TYPE_CONTROL << 4) | (u8::from(*ack_nack) << 2) | *frame_number,
                );
                out.put_u8((*mode_version << 4) | u8::from(*procedure));
                out.put_u16(0);
                out.put_slice(payload);
                splice_checksums(&mut out);
                out
            }
        };
        Ok(out)
    }

    fn decode_pdu(&self, data: &[u8]) -> Result<IuupFrame, CodecError> {
        if data.len() < IUUP_HEADER_LENGTH_BYTES {
            return Err(ParsingError::NotEnoughData {
                needed: IUUP_HEADER_LENGTH_BYTES,
                got: data.len(),
                context: ParseContext::IuupFrameHeader,
            }
            .into());
        }

        match data[0] >> 4 {
            IUUP_PDU_TYPE_DATA_CRC => {
                let checksums = verify_checksums(data)?;
                Ok(IuupFrame::Data {
                    frame_number: data[0] & IUUP_MAX_DATA_FRAME_NUMBER,
                    fqc: FrameQuality::from(data[1] >> 6),
                    rfci: data[1] & IUUP_MAX_RFCI,
                    payload: Bytes::copy_from_slice(&data[IUUP_CHECKED_PAYLOAD_OFFSET_BYTES..]),
                    checksums,
                })
            }
            IUUP_PDU_TYPE_DATA_NO_CRC => Ok(IuupFrame::DataNoCrc {
                frame_number: data[0] & IUUP_MAX_DATA_FRAME_NUMBER,
                fqc: FrameQuality::from(data[1] >> 6),
                rfci: data[1] & IUUP_MAX_RFCI,
                payload: Bytes::copy_from_slice(&data[IUUP_UNCHECKED_PAYLOAD_OFFSET_BYTES..]),
            }),
            IUUP_PDU_TYPE_CONTROL => {
                let checksums = verify_checksums(data)?;
                Ok(IuupFrame::Control {
                    ack_nack: IuupAckNack::from((data[0] >> 2) & 0x03),
                    frame_number: data[0] & IUUP_MAX_CONTROL_FRAME_NUMBER,
                    mode_version: data[1] >> 4,
                    procedure: IuupProcedure::from(data[1] & 0x0F),
                    payload: Bytes::copy_from_slice(&data[IUUP_CHECKED_PAYLOAD_OFFSET_BYTES..]),
                    checksums,
                })
            }
            other => Err(ParsingError::UnsupportedFormat {
                structure: StructureType::IuupFrame,
                discriminant: other,
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> IuupCodec {
        IuupCodec::new()
    }

    #[test]
    fn data_frame_wire_layout_and_checksums() {
        let frame = IuupFrame::data(0, FrameQuality::Good, 1, (1..=10).collect::<Vec<u8>>());
        let wire = codec().encode_pdu(&frame).unwrap();
        assert_eq!(
            wire,
            [0x00, 0x01, 0xBD, 0x71, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
        );

        let decoded = codec().decode_pdu(&wire).unwrap();
        let IuupFrame::Data {
            frame_number,
            fqc,
            rfci,
            payload,
            checksums,
        } = &decoded
        else {
            panic!("wrong variant: {decoded:?}");
        };
        assert_eq!(*frame_number, 0);
        assert_eq!(*fqc, FrameQuality::Good);
        assert_eq!(*rfci, 1);
        assert_eq!(payload.as_ref(), &(1..=10).collect::<Vec<u8>>()[..]);
        assert_eq!(
            *checksums,
            IuupChecksums::Valid {
                header: 0x2F,
                payload: 0x171,
            }
        );
    }

    #[test]
    fn data_frame_with_bad_quality_and_nonzero_fields() {
        let frame = IuupFrame::data(3, FrameQuality::Bad, 5, vec![0xDE, 0xAD, 0xBE, 0xEF]);
        let wire = codec().encode_pdu(&frame).unwrap();
        assert_eq!(wire, [0x03, 0x45, 0x2C, 0x27, 0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn no_crc_frame_has_a_two_octet_header() {
        let frame = IuupFrame::DataNoCrc {
            frame_number: 2,
            fqc: FrameQuality::Good,
            rfci: 5,
            payload: vec![0xAA, 0xBB].into(),
        };
        let wire = codec().encode_pdu(&frame).unwrap();
        assert_eq!(wire, [0x12, 0x05, 0xAA, 0xBB]);
        assert_eq!(codec().decode_pdu(&wire).unwrap(), frame);
    }

    #[test]
    fn control_frame_wire_layout_and_checksums() {
        let frame = IuupFrame::Control {
            ack_nack: IuupAckNack::Nack,
            frame_number: 2,
            mode_version: 1,
            procedure: IuupProcedure::Initialization,
            payload: vec![0x01, 0x02, 0x03, 0x04].into(),
            checksums: IuupChecksums::Computed,
        };
        let wire = codec().encode_pdu(&frame).unwrap();
        assert_eq!(wire, [0xEA, 0x10, 0x3C, 0xB6, 0x01, 0x02, 0x03, 0x04]);

        let decoded = codec().decode_pdu(&wire).unwrap();
        let IuupFrame::Control {
            ack_nack,
            checksums,
            ..
        } = &decoded
        else {
            panic!("wrong variant: {decoded:?}");
        };
        assert_eq!(*ack_nack, IuupAckNack::Nack);
        assert_eq!(
            *checksums,
            IuupChecksums::Valid {
                header: 0x0F,
                payload: 0x0B6,
            }
        );
    }

    #[test]
    fn empty_control_ack_frame() {
        let frame = IuupFrame::Control {
            ack_nack: IuupAckNack::Ack,
            frame_number: 0,
            mode_version: 1,
            procedure: IuupProcedure::Initialization,
            payload: bytes::Bytes::new(),
            checksums: IuupChecksums::Computed,
        };
        let wire = codec().encode_pdu(&frame).unwrap();
        assert_eq!(wire, [0xE4, 0x10, 0xF4, 0x00]);

        let decoded = codec().decode_pdu(&wire).unwrap();
        assert_eq!(
            decoded,
            IuupFrame::Control {
                checksums: IuupChecksums::Valid {
                    header: 0x3D,
                    payload: 0,
                },
                ack_nack: IuupAckNack::Ack,
                frame_number: 0,
                mode_version: 1,
                procedure: IuupProcedure::Initialization,
                payload: bytes::Bytes::new(),
            }
        );
    }

    #[test]
    fn corrupted_payload_decodes_as_mismatch_not_error() {
        let frame = IuupFrame::data(0, FrameQuality::Good, 1, (1..=10).collect::<Vec<u8>>());
        let mut wire = codec().encode_pdu(&frame).unwrap();
        wire[5] ^= 0xFF;

        let decoded = codec().decode_pdu(&wire).unwrap();
        let IuupFrame::Data { checksums, .. } = &decoded else {
            panic!("wrong variant: {decoded:?}");
        };
        let IuupChecksums::Mismatch {
            received_payload,
            computed_payload,
            ..
        } = checksums
        else {
            panic!("expected a mismatch: {checksums:?}");
        };
        assert_eq!(*received_payload, 0x171);
        assert_ne!(computed_payload, received_payload);
    }

    #[test]
    fn re_encoding_a_mismatched_frame_restores_correct_checksums() {
        let frame = IuupFrame::data(0, FrameQuality::Good, 1, (1..=10).collect::<Vec<u8>>());
        let good_wire = codec().encode_pdu(&frame).unwrap();

        let mut corrupted = good_wire.clone();
        corrupted[2] = 0x00;
        corrupted[3] = 0x00;
        let decoded = codec().decode_pdu(&corrupted).unwrap();

        assert_eq!(codec().encode_pdu(&decoded).unwrap(), good_wire);
    }

    #[test]
    fn unsupported_pdu_type_is_rejected() {
        let err = codec().decode_pdu(&[0x5A, 0x00, 0x00, 0x00]).unwrap_err();
        assert_eq!(
            err,
            CodecError::Parsing(ParsingError::UnsupportedFormat {
                structure: StructureType::IuupFrame,
                discriminant: 5,
            })
        );
    }

    #[test]
    fn truncated_frames_are_rejected() {
        assert_eq!(
            codec().decode_pdu(&[0x00]).unwrap_err(),
            CodecError::Parsing(ParsingError::NotEnoughData {
                needed: 2,
                got: 1,
                context: ParseContext::IuupFrameHeader,
            })
        );
        assert_eq!(
            codec().decode_pdu(&[0x00, 0x01, 0xBD]).unwrap_err(),
            CodecError::Parsing(ParsingError::NotEnoughData {
                needed: 4,
                got: 3,
                context: ParseContext::IuupChecksumField,
            })
        );
    }

    #[test]
    fn field_width_ceilings_are_enforced_on_encode() {
        let wide_fn = IuupFrame::data(16, FrameQuality::Good, 0, vec![0]);
        assert_eq!(
            codec().encode_pdu(&wide_fn).unwrap_err(),
            CodecError::Building(BuildingError::InvalidFieldValueForBuild {
                field: Field::FrameNumber,
                value: 16,
                max_bits: 4,
            })
        );

        let wide_rfci = IuupFrame::data(0, FrameQuality::Good, 0x40, vec![0]);
        assert!(matches!(
            codec().encode_pdu(&wide_rfci).unwrap_err(),
            CodecError::Building(BuildingError::InvalidFieldValueForBuild {
                field: Field::Rfci,
                ..
            })
        ));

        // Control frame numbers only span 2 bits.
        let wide_control_fn = IuupFrame::Control {
            ack_nack: IuupAckNack::Ack,
            frame_number: 4,
            mode_version: 0,
            procedure: IuupProcedure::Initialization,
            payload: bytes::Bytes::new(),
            checksums: IuupChecksums::Computed,
        };
        assert_eq!(
            codec().encode_pdu(&wide_control_fn).unwrap_err(),
            CodecError::Building(BuildingError::InvalidFieldValueForBuild {
                field: Field::FrameNumber,
                value: 4,
                max_bits: 2,
            })
        );

        let wide_procedure = IuupFrame::Control {
            ack_nack: IuupAckNack::Procedure,
            frame_number: 0,
            mode_version: 0,
            procedure: IuupProcedure::Unknown(0x10),
            payload: bytes::Bytes::new(),
            checksums: IuupChecksums::Computed,
        };
        assert!(matches!(
            codec().encode_pdu(&wide_procedure).unwrap_err(),
            CodecError::Building(BuildingError::InvalidFieldValueForBuild {
                field: Field::Procedure,
                ..
            })
        ));
    }
}
