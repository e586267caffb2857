//! BSSGP (Base Station System GPRS Protocol, TS 48.018) PDU codec.
//!
//! BSSGP rides inside NS-UNITDATA and carries LLC PDUs between the BSS and
//! the SGSN. Four UNITDATA variants embed an LLC PDU behind a length
//! indicator with a short and a long wire form; the normalizer rewrites the
//! indicator before encoding so the emitted form always matches the payload.
//!
//! Key components:
//! - `pdu`: Defines `BssgpPdu`, `LlcPduIe`, `LengthIndicator` and the
//!   `BssgpPduType` value table.
//! - `length_indicator`: The pure pre-encode normalization step shared by
//!   the four UNITDATA variants.
//! - `codec`: Implements `WireCodec` for `BssgpCodec`, including the
//!   first-octet-dependent fixed-header rule for the TLV transcoder.
//! - `constants`: PDU type values, IEIs and header geometry.

pub mod codec;
pub mod constants;
pub mod length_indicator;
pub mod pdu;

pub use self::codec::BssgpCodec;
pub use self::constants::*;
pub use self::length_indicator::normalize_length_indicators;
pub use self::pdu::{BssgpPdu, BssgpPduType, LengthIndicator, LlcPduIe};
