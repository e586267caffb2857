//! LLC frame encoding and decoding with FCS integration.

use bytes::{BufMut, Bytes};

use crate::crc::CrcCalculators;
use crate::error::{BuildingError, CodecError, Field, ParseContext, ParsingError, StructureType};
use crate::traits::WireCodec;
use crate::types::Sapi;

use super::constants::{
    FCS_LENGTH_BYTES, LLC_ADDRESS_CR_MASK, LLC_ADDRESS_PD_MASK, LLC_ADDRESS_SAPI_MASK,
    LLC_CONTROL_FORMAT_MASK, LLC_CONTROL_U_COMMAND_MASK, LLC_CONTROL_U_PF_MASK,
    LLC_CONTROL_U_PREFIX_VALUE, LLC_CONTROL_UI_E_MASK, LLC_CONTROL_UI_PM_MASK,
    LLC_CONTROL_UI_PREFIX_VALUE, MAX_UI_SEQUENCE, N202_DEFAULT_OCTETS, U_HEADER_LENGTH_BYTES,
    UI_HEADER_LENGTH_BYTES,
};
use super::frame::{Fcs, LlcControl, LlcFrame, UCommand};

/// Serializes a 24-bit FCS value as its three wire octets, least significant
/// octet first.
#[inline]
pub fn fcs_to_wire(value: u32) -> [u8; 3] {
    [value as u8, (value >> 8) as u8, (value >> 16) as u8]
}

/// Reassembles a 24-bit FCS value from its three wire octets.
#[inline]
pub fn fcs_from_wire(octets: [u8; 3]) -> u32 {
    u32::from(octets[0]) | (u32::from(octets[1]) << 8) | (u32::from(octets[2]) << 16)
}

/// Number of leading frame octets the FCS covers.
///
/// A UI frame sent with PM = 0 is protected only over its header plus the
/// first N202 information octets; every other format and mode is covered in
/// full. The bound is derived from the control field's own header length, so
/// frames at or below `header + N202` are covered whole.
fn fcs_coverage(control: &LlcControl, frame_len_sans_fcs: usize) -> usize {
    match control {
        LlcControl::Ui {
            protected: false, ..
        } => frame_len_sans_fcs.min(control.header_length() + N202_DEFAULT_OCTETS),
        _ => frame_len_sans_fcs,
    }
}

/// Codec for LLC frames.
///
/// Holds the FCS-24 lookup table, built once at construction and read-only
/// afterwards.
#[derive(Debug, Default)]
pub struct LlcCodec {
    crc_calculators: CrcCalculators,
}

impl LlcCodec {
    /// Creates a codec with a freshly built FCS table.
    pub fn new() -> Self {
        Self {
            crc_calculators: CrcCalculators::new(),
        }
    }
}

impl WireCodec for LlcCodec {
    type Pdu = LlcFrame;

    fn protocol_name(&self) -> &'static str {
        "LLC"
    }

    fn encode_pdu(&self, frame: &LlcFrame) -> Result<Vec<u8>, CodecError> {
        if frame.sapi.value() > LLC_ADDRESS_SAPI_MASK {
            return Err(BuildingError::InvalidFieldValueForBuild {
                field: Field::Sapi,
                value: u32::from(frame.sapi.value()),
                max_bits: 4,
            }
            .into());
        }

        let mut out =
            Vec::with_capacity(frame.header_length() + frame.information.len() + FCS_LENGTH_BYTES);

        let mut address = frame.sapi.value() & LLC_ADDRESS_SAPI_MASK;
        if frame.command_response {
            address |= LLC_ADDRESS_CR_MASK;
        }
        out.put_u8(address);

        match frame.control {
            LlcControl::Ui {
                sequence,
                encrypted,
                protected,
            } => {
                if sequence > MAX_UI_SEQUENCE {
                    return Err(BuildingError::InvalidFieldValueForBuild {
                        field: Field::UiSequence,
                        value: u32::from(sequence),
                        max_bits: 9,
                    }
                    .into());
                }
                out.put_u8(LLC_CONTROL_UI_PREFIX_VALUE | ((sequence >> 6) as u8 & 0x07));
                let mut second = ((sequence & 0x3F) as u8) << 2;
                if encrypted {
                    second |= LLC_CONTROL_UI_E_MASK;
                }
                if protected {
                    second |= LLC_CONTROL_UI_PM_MASK;
                }
                out.put_u8(second);
            }
            LlcControl::U {
                command,
                poll_final,
            } => {
                let bits = command.command_bits();
                if bits > LLC_CONTROL_U_COMMAND_MASK {
                    return Err(BuildingError::InvalidFieldValueForBuild {
                        field: Field::Command,
                        value: u32::from(bits),
                        max_bits: 4,
                    }
                    .into());
                }
                let mut control = LLC_CONTROL_U_PREFIX_VALUE | bits;
                if poll_final {
                    control |= LLC_CONTROL_U_PF_MASK;
                }
                out.put_u8(control);
            }
        }

        out.put_slice(&frame.information);

        let fcs_value = match frame.fcs {
            Fcs::Computed | Fcs::Declared(0) => {
                let coverage = fcs_coverage(&frame.control, out.len());
                self.crc_calculators.llc_fcs(&out[..coverage])
            }
            Fcs::Declared(value) => value,
            Fcs::Mismatch { received, .. } => received,
        };
        out.put_slice(&fcs_to_wire(fcs_value));

        Ok(out)
    }

    fn decode_pdu(&self, data: &[u8]) -> Result<LlcFrame, CodecError> {
        let min_len = U_HEADER_LENGTH_BYTES + FCS_LENGTH_BYTES;
        if data.len() < min_len {
            return Err(ParsingError::NotEnoughData {
                needed: min_len,
                got: data.len(),
                context: ParseContext::LlcFrameHeader,
            }
            .into());
        }

        let address = data[0];
        if address & LLC_ADDRESS_PD_MASK != 0 {
            return Err(ParsingError::InvalidFieldValue {
                field: Field::ProtocolDiscriminator,
                structure: StructureType::LlcFrame,
                expected: 0,
                got: 1,
            }
            .into());
        }
        let command_response = address & LLC_ADDRESS_CR_MASK != 0;
        let sapi = Sapi::new(address & LLC_ADDRESS_SAPI_MASK);

        let first_control = data[1];
        let (control, header_len) = if first_control & 0x80 == 0 {
            // I format (acknowledged mode), not handled here.
            return Err(ParsingError::UnsupportedFormat {
                structure: StructureType::LlcFrame,
                discriminant: first_control,
            }
            .into());
        } else if first_control & 0xC0 == 0x80 {
            // S format, not handled here.
            return Err(ParsingError::UnsupportedFormat {
                structure: StructureType::LlcFrame,
                discriminant: first_control,
            }
            .into());
        } else if first_control & LLC_CONTROL_FORMAT_MASK == LLC_CONTROL_UI_PREFIX_VALUE {
            let ui_min = UI_HEADER_LENGTH_BYTES + FCS_LENGTH_BYTES;
            if data.len() < ui_min {
                return Err(ParsingError::NotEnoughData {
                    needed: ui_min,
                    got: data.len(),
                    context: ParseContext::LlcControlField,
                }
                .into());
            }
            let second_control = data[2];
            let sequence =
                (u16::from(first_control & 0x07) << 6) | u16::from(second_control >> 2);
            (
                LlcControl::Ui {
                    sequence,
                    encrypted: second_control & LLC_CONTROL_UI_E_MASK != 0,
                    protected: second_control & LLC_CONTROL_UI_PM_MASK != 0,
                },
                UI_HEADER_LENGTH_BYTES,
            )
        } else {
            (
                LlcControl::U {
                    command: UCommand::from(first_control & LLC_CONTROL_U_COMMAND_MASK),
                    poll_final: first_control & LLC_CONTROL_U_PF_MASK != 0,
                },
                U_HEADER_LENGTH_BYTES,
            )
        };

        let fcs_start = data.len() - FCS_LENGTH_BYTES;
        let information = Bytes::copy_from_slice(&data[header_len..fcs_start]);

        let received = fcs_from_wire([data[fcs_start], data[fcs_start + 1], data[fcs_start + 2]]);
        let coverage = fcs_coverage(&control, fcs_start);
        let computed = self.crc_calculators.llc_fcs(&data[..coverage]);
        let fcs = if computed == received {
            Fcs::Declared(received)
        } else {
            Fcs::Mismatch { received, computed }
        };

        Ok(LlcFrame {
            sapi,
            command_response,
            control,
            information,
            fcs,
        })
    }
}
