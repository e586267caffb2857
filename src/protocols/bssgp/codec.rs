//! BSSGP PDU encoding and decoding around the TLV transcoder.

use bytes::BufMut;

use crate::constants::TLV_LONG_FORM_MAX_LENGTH;
use crate::error::{
    BuildingError, CodecError, Field, ParseContext, ParsingError, StructureType,
};
use crate::serialization::tlv::{
    Tlv, compact_tlv_section, emit_tl16v_records, expand_tlv_section, parse_tl16v_records,
};
use crate::traits::WireCodec;
use crate::types::Tlli;

use super::constants::{
    BSSGP_FIXED_HEADER_LENGTH_BYTES, BSSGP_IEI_LLC_PDU, BSSGP_PDU_TYPE_DL_UNITDATA,
    BSSGP_PDU_TYPE_UL_UNITDATA, BSSGP_UNITDATA_FIXED_HEADER_LENGTH_BYTES,
};
use super::length_indicator::normalize_length_indicators;
use super::pdu::{BssgpPdu, BssgpPduType, LengthIndicator, LlcPduIe};

/// Codec for BSSGP PDUs.
///
/// Encoding normalizes the LLC-PDU length indicator first, then serializes
/// through the canonical TL16V form and compacts to the TvLV wire form.
/// The DL/UL-UNITDATA fixed header is 8 octets (type, TLLI, QoS profile);
/// every other PDU type has a bare type octet before its IEs.
#[derive(Debug, Default)]
pub struct BssgpCodec;

impl BssgpCodec {
    /// Creates a new codec.
    pub fn new() -> Self {
        Self
    }

    /// Fixed-header length of a message starting with `pdu_type_octet`.
    pub const fn fixed_header_length(pdu_type_octet: u8) -> usize {
        match pdu_type_octet {
            BSSGP_PDU_TYPE_DL_UNITDATA | BSSGP_PDU_TYPE_UL_UNITDATA => {
                BSSGP_UNITDATA_FIXED_HEADER_LENGTH_BYTES
            }
            _ => BSSGP_FIXED_HEADER_LENGTH_BYTES,
        }
    }
}

fn check_ie_length(len: usize) -> Result<(), BuildingError> {
    if len > TLV_LONG_FORM_MAX_LENGTH {
        return Err(BuildingError::InvalidFieldValueForBuild {
            field: Field::IeLength,
            value: len as u32,
            max_bits: 15,
        });
    }
    Ok(())
}

/// Emits the optional IEs and then the LLC-PDU IE, which closes the PDU.
fn emit_unitdata_elements(
    other_elements: &[Tlv],
    llc_pdu: &LlcPduIe,
    out: &mut Vec<u8>,
) -> Result<(), BuildingError> {
    for element in other_elements {
        check_ie_length(element.value.len())?;
    }
    check_ie_length(llc_pdu.pdu.len())?;
    if llc_pdu.length_indicator.value() != llc_pdu.pdu.len() {
        return Err(BuildingError::LengthIndicatorMismatch {
            indicated: llc_pdu.length_indicator.value(),
            actual: llc_pdu.pdu.len(),
        });
    }

    emit_tl16v_records(other_elements, out);
    out.put_u8(BSSGP_IEI_LLC_PDU);
    out.put_u16(llc_pdu.pdu.len() as u16);
    out.put_slice(&llc_pdu.pdu);
    Ok(())
}

/// Extracts the last LLC-PDU record from the parsed IE list.
fn take_llc_pdu(records: &mut Vec<Tlv>) -> Result<LlcPduIe, ParsingError> {
    let index = records
        .iter()
        .rposition(|record| record.tag == BSSGP_IEI_LLC_PDU)
        .ok_or(ParsingError::MandatoryIeMissing {
            iei: BSSGP_IEI_LLC_PDU,
            structure: StructureType::BssgpPdu,
        })?;
    let record = records.remove(index);
    Ok(LlcPduIe {
        length_indicator: LengthIndicator::for_length(record.value.len()),
        pdu: record.value,
    })
}

impl WireCodec for BssgpCodec {
    type Pdu = BssgpPdu;

    fn protocol_name(&self) -> &'static str {
        "BSSGP"
    }

    fn encode_pdu(&self, pdu: &BssgpPdu) -> Result<Vec<u8>, CodecError> {
        let pdu = normalize_length_indicators(pdu);
        let mut canonical = vec![u8::from(pdu.pdu_type())];

        match &pdu {
            BssgpPdu::DlUnitdata {
                tlli,
                qos_profile,
                other_elements,
                llc_pdu,
            }
            | BssgpPdu::UlUnitdata {
                tlli,
                qos_profile,
                other_elements,
                llc_pdu,
            } => {
                canonical.put_slice(&tlli.to_be_bytes());
                canonical.put_slice(qos_profile);
                emit_unitdata_elements(other_elements, llc_pdu, &mut canonical)?;
            }
            BssgpPdu::DlMbmsUnitdata {
                other_elements,
                llc_pdu,
            }
            | BssgpPdu::UlMbmsUnitdata {
                other_elements,
                llc_pdu,
            } => {
                emit_unitdata_elements(other_elements, llc_pdu, &mut canonical)?;
            }
            BssgpPdu::Other { elements, .. } => {
                for element in elements {
                    check_ie_length(element.value.len())?;
                }
                emit_tl16v_records(elements, &mut canonical);
            }
        }

        let fixed_len = Self::fixed_header_length(canonical[0]);
        Ok(compact_tlv_section(&canonical, fixed_len)?)
    }

    fn decode_pdu(&self, data: &[u8]) -> Result<BssgpPdu, CodecError> {
        let Some(&first) = data.first() else {
            return Err(ParsingError::NotEnoughData {
                needed: BSSGP_FIXED_HEADER_LENGTH_BYTES,
                got: 0,
                context: ParseContext::BssgpFixedHeader,
            }
            .into());
        };

        let fixed_len = Self::fixed_header_length(first);
        if data.len() < fixed_len {
            return Err(ParsingError::NotEnoughData {
                needed: fixed_len,
                got: data.len(),
                context: ParseContext::BssgpFixedHeader,
            }
            .into());
        }

        let canonical = expand_tlv_section(data, fixed_len)?;
        let mut records = parse_tl16v_records(&canonical[fixed_len..])?;

        let pdu_type = BssgpPduType::from(first);
        Ok(match pdu_type {
            BssgpPduType::DlUnitdata | BssgpPduType::UlUnitdata => {
                let llc_pdu = take_llc_pdu(&mut records)?;
                let tlli = Tlli::new(u32::from_be_bytes([data[1], data[2], data[3], data[4]]));
                let qos_profile = [data[5], data[6], data[7]];
                if pdu_type == BssgpPduType::DlUnitdata {
                    BssgpPdu::DlUnitdata {
                        tlli,
                        qos_profile,
                        other_elements: records,
                        llc_pdu,
                    }
                } else {
                    BssgpPdu::UlUnitdata {
                        tlli,
                        qos_profile,
                        other_elements: records,
                        llc_pdu,
                    }
                }
            }
            BssgpPduType::DlMbmsUnitdata | BssgpPduType::UlMbmsUnitdata => {
                let llc_pdu = take_llc_pdu(&mut records)?;
                if pdu_type == BssgpPduType::DlMbmsUnitdata {
                    BssgpPdu::DlMbmsUnitdata {
                        other_elements: records,
                        llc_pdu,
                    }
                } else {
                    BssgpPdu::UlMbmsUnitdata {
                        other_elements: records,
                        llc_pdu,
                    }
                }
            }
            BssgpPduType::Status | BssgpPduType::Unknown(_) => BssgpPdu::Other {
                pdu_type,
                elements: records,
            },
        })
    }
}
