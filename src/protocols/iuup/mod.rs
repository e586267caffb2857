//! IuUP user-plane frame codec.
//!
//! Key components:
//! - [`IuupCodec`]: encode/decode entry point implementing [`crate::traits::WireCodec`].
//! - [`IuupFrame`]: typed frame, one variant per supported PDU type (data
//!   with checksums, data without, control procedure).
//! - [`IuupChecksums`]: verification outcome carried in the decoded frame;
//!   a checksum mismatch is data, not an error.
//!
//! The 6-bit header CRC covers the first two serialized octets; the 10-bit
//! payload CRC covers everything after the checksum field. Both are spliced
//! into octets 2..4 after serialization.

pub mod codec;
pub mod constants;
pub mod frame;

pub use self::codec::IuupCodec;
pub use self::constants::*;
pub use self::frame::{FrameQuality, IuupAckNack, IuupChecksums, IuupFrame, IuupProcedure};
