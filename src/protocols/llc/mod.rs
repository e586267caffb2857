//! GPRS LLC (Logical Link Control, TS 44.064) frame codec.
//!
//! This module implements the unacknowledged-mode subset of the LLC layer:
//! UI frames (with the protection-mode FCS truncation rule) and U-format
//! command frames, each carried with a trailing 24-bit frame check sequence.
//!
//! Key components:
//! - `frame`: Defines `LlcFrame`, `LlcControl`, `UCommand` and the `Fcs`
//!   checksum state carried across the encode/decode boundary.
//! - `codec`: Implements `WireCodec` for `LlcCodec`, including FCS coverage
//!   selection and the little-endian three-octet FCS serialization.
//! - `constants`: Holds address/control bitmasks and the N202 coverage bound.

pub mod codec;
pub mod constants;
pub mod frame;

pub use self::codec::{LlcCodec, fcs_from_wire, fcs_to_wire};
pub use self::constants::*;
pub use self::frame::{Fcs, LlcControl, LlcFrame, UCommand};
