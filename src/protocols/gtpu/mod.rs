//! GTP-U tunnel PDU codec.
//!
//! Key components:
//! - [`GtpuCodec`]: encode/decode entry point implementing [`crate::traits::WireCodec`].
//! - [`GtpuPdu`]: typed tunnel message with optional sequence number, N-PDU
//!   number, and extension header chain.
//! - [`optional`]: parser and emitter for the optional header part, including
//!   the 4-octet-unit extension header chain walk.
//!
//! The fixed header is always 8 octets. The three low flag bits announce the
//! optional part; when any of them is set, the full 4-octet optional part is
//! present on the wire and the extension chain after it is walked to find
//! where the payload starts.

pub mod codec;
pub mod constants;
pub mod header;
pub mod optional;

pub use self::codec::GtpuCodec;
pub use self::constants::*;
pub use self::header::{GtpuExtensionHeader, GtpuMessageType, GtpuPdu};
pub use self::optional::{ParsedOptionalPart, has_optional_part, parse_optional_part};
