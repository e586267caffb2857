//! Length-indicator normalization for embedded LLC PDUs.
//!
//! A UNITDATA PDU declares the length of its LLC payload through a one- or
//! two-octet indicator. Senders are free to use the short form only while the
//! payload fits in 127 octets; a payload that grew past that boundary (after
//! re-framing, for instance) must be re-declared in the long form or the wire
//! encoding truncates it. [`normalize_length_indicators`] applies that rule
//! up front so the codec never has to.

use super::pdu::{BssgpPdu, LengthIndicator};
use crate::constants::TLV_SHORT_FORM_MAX_LENGTH;

/// Rewrites the LLC-PDU length indicator to the long form when the payload
/// no longer fits the short form.
///
/// Payloads of 127 octets or fewer keep whatever indicator they carry, even
/// a mismatched one: declaration errors are the encoder's to report, not
/// this pass's to paper over. Non-UNITDATA PDUs pass through unchanged.
///
/// The pass is idempotent: normalizing twice gives the same PDU.
pub fn normalize_length_indicators(pdu: &BssgpPdu) -> BssgpPdu {
    let mut normalized = pdu.clone();
    match &mut normalized {
        BssgpPdu::DlUnitdata { llc_pdu, .. }
        | BssgpPdu::UlUnitdata { llc_pdu, .. }
        | BssgpPdu::DlMbmsUnitdata { llc_pdu, .. }
        | BssgpPdu::UlMbmsUnitdata { llc_pdu, .. } => {
            if llc_pdu.pdu.len() > TLV_SHORT_FORM_MAX_LENGTH {
                llc_pdu.length_indicator = LengthIndicator::for_length(llc_pdu.pdu.len());
            }
        }
        BssgpPdu::Other { .. } => {}
    }
    normalized
}
