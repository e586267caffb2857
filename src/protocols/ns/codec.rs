//! NS PDU encoding and decoding around the TLV transcoder.

use bytes::{BufMut, Bytes};

use crate::constants::TLV_LONG_FORM_MAX_LENGTH;
use crate::error::{BuildingError, CodecError, Field, ParseContext, ParsingError};
use crate::serialization::tlv::{
    compact_tlv_section, emit_tl16v_records, expand_tlv_section, parse_tl16v_records,
};
use crate::traits::WireCodec;
use crate::types::Bvci;

use super::constants::{
    NS_FIXED_HEADER_LENGTH_BYTES, NS_PDU_TYPE_UNITDATA, NS_UNITDATA_HEADER_LENGTH_BYTES,
};
use super::pdu::{NsPdu, NsPduType};

/// Codec for NS PDUs.
#[derive(Debug, Default)]
pub struct NsCodec;

impl NsCodec {
    /// Creates a new codec.
    pub fn new() -> Self {
        Self
    }

    /// Converts a whole NS message from wire (TvLV) to canonical (TL16V)
    /// form.
    ///
    /// The NS-UNITDATA family carries no TLV section; those messages pass
    /// through unchanged.
    pub fn expand_sections(message: &[u8]) -> Result<Vec<u8>, ParsingError> {
        match message.first() {
            Some(&NS_PDU_TYPE_UNITDATA) => Ok(message.to_vec()),
            Some(_) => expand_tlv_section(message, NS_FIXED_HEADER_LENGTH_BYTES),
            None => Err(ParsingError::NotEnoughData {
                needed: 1,
                got: 0,
                context: ParseContext::NsFixedHeader,
            }),
        }
    }

    /// Converts a whole NS message from canonical (TL16V) to wire (TvLV)
    /// form, with the same NS-UNITDATA pass-through rule.
    pub fn compact_sections(message: &[u8]) -> Result<Vec<u8>, ParsingError> {
        match message.first() {
            Some(&NS_PDU_TYPE_UNITDATA) => Ok(message.to_vec()),
            Some(_) => compact_tlv_section(message, NS_FIXED_HEADER_LENGTH_BYTES),
            None => Err(ParsingError::NotEnoughData {
                needed: 1,
                got: 0,
                context: ParseContext::NsFixedHeader,
            }),
        }
    }
}

impl WireCodec for NsCodec {
    type Pdu = NsPdu;

    fn protocol_name(&self) -> &'static str {
        "NS"
    }

    fn encode_pdu(&self, pdu: &NsPdu) -> Result<Vec<u8>, CodecError> {
        match pdu {
            NsPdu::Unitdata { bvci, sdu } => {
                let mut out =
                    Vec::with_capacity(NS_UNITDATA_HEADER_LENGTH_BYTES + sdu.len());
                out.put_u8(NS_PDU_TYPE_UNITDATA);
                out.put_u8(0x00); // spare
                out.put_u16(bvci.value());
                out.put_slice(sdu);
                Ok(out)
            }
            NsPdu::Control { pdu_type, elements } => {
                debug_assert!(*pdu_type != NsPduType::Unitdata);
                for element in elements {
                    if element.value.len() > TLV_LONG_FORM_MAX_LENGTH {
                        return Err(BuildingError::InvalidFieldValueForBuild {
                            field: Field::IeLength,
                            value: element.value.len() as u32,
                            max_bits: 15,
                        }
                        .into());
                    }
                }
                let mut canonical = vec![u8::from(*pdu_type)];
                emit_tl16v_records(elements, &mut canonical);
                Ok(compact_tlv_section(
                    &canonical,
                    NS_FIXED_HEADER_LENGTH_BYTES,
                )?)
            }
        }
    }

    fn decode_pdu(&self, data: &[u8]) -> Result<NsPdu, CodecError> {
        let Some(&first) = data.first() else {
            return Err(ParsingError::NotEnoughData {
                needed: 1,
                got: 0,
                context: ParseContext::NsFixedHeader,
            }
            .into());
        };

        if first == NS_PDU_TYPE_UNITDATA {
            if data.len() < NS_UNITDATA_HEADER_LENGTH_BYTES {
                return Err(ParsingError::NotEnoughData {
                    needed: NS_UNITDATA_HEADER_LENGTH_BYTES,
                    got: data.len(),
                    context: ParseContext::NsUnitdataHeader,
                }
                .into());
            }
            // data[1] is a spare octet, ignored on receipt.
            let bvci = Bvci::new(u16::from_be_bytes([data[2], data[3]]));
            let sdu = Bytes::copy_from_slice(&data[NS_UNITDATA_HEADER_LENGTH_BYTES..]);
            return Ok(NsPdu::Unitdata { bvci, sdu });
        }

        let canonical = Self::expand_sections(data)?;
        let elements = parse_tl16v_records(&canonical[NS_FIXED_HEADER_LENGTH_BYTES..])?;
        Ok(NsPdu::Control {
            pdu_type: NsPduType::from(first),
            elements,
        })
    }
}
