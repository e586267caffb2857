//! NS (Network Service, TS 48.016) PDU codec.
//!
//! NS carries BSSGP across the Gb interface. Its control PDUs hold their
//! information elements in TvLV form on the wire; the codec converts them
//! through the canonical 16-bit-length form. The NS-UNITDATA family has a
//! plain fixed layout with no TLV section and bypasses the transcoder in
//! both directions.
//!
//! Key components:
//! - `pdu`: Defines `NsPdu` and the `NsPduType` value table.
//! - `codec`: Implements `WireCodec` for `NsCodec` plus the section
//!   expand/compact helpers with the UNITDATA pass-through rule.
//! - `constants`: PDU type values, IEIs and header geometry.

pub mod codec;
pub mod constants;
pub mod pdu;

pub use self::codec::NsCodec;
pub use self::constants::*;
pub use self::pdu::{NsPdu, NsPduType};
