//! `sigstar`: typed codecs for 3GPP signalling and user-plane frames in Rust.
//!
//! This library provides encode/decode pairs for the Gb-interface stack
//! (NS, BSSGP, LLC) and for tunnel and user-plane framing (GTP-U, IuUP),
//! built around a shared TLV length-form transcoder and bit-exact checksum
//! engines. Each protocol exposes a codec implementing [`WireCodec`] over
//! its typed PDU.
//!
//! ## Core Concepts
//!
//! - **Codecs**: one [`WireCodec`] implementation per protocol
//!   ([`NsCodec`], [`BssgpCodec`], [`LlcCodec`], [`GtpuCodec`], [`IuupCodec`]),
//!   each pairing a typed PDU with its wire form. Decoding is strict about
//!   lengths and bounds; encoding validates field widths before emitting.
//! - **Canonical TLV form**: compact TvLV record sections are expanded to a
//!   fixed TL16V form before structural parsing and compacted back on the
//!   way out (see [`serialization`]).
//! - **Checksum verdicts**: LLC FCS and IuUP CRC disagreements decode into
//!   the PDU as data rather than failing the message, so damaged frames
//!   stay inspectable.
//!
//! ## Quick Start
//!
//! ```rust
//! use sigstar::protocols::llc::{LlcCodec, LlcFrame};
//! use sigstar::traits::WireCodec;
//! use sigstar::types::Sapi;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let codec = LlcCodec::new();
//!
//!     // Frame user data as a protected UI frame on the user-data SAPI.
//!     let frame = LlcFrame::ui(Sapi::USER_DATA, 5, true, b"HELLO".to_vec());
//!     let wire = codec.encode_pdu(&frame)?;
//!     assert_eq!(wire, [0x03, 0xC0, 0x15, b'H', b'E', b'L', b'L', b'O', 0x40, 0xF9, 0x94]);
//!
//!     // Decoding verifies the trailing FCS and records the verdict.
//!     let decoded = codec.decode_pdu(&wire)?;
//!     println!("Decoded frame: {:#?}", decoded);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Supported Protocols
//!
//! - **NS**: UNITDATA with its fixed header, control PDUs through the TvLV transcoder
//! - **BSSGP**: the four UNITDATA variants sharing length-indicator normalization; other PDUs structurally
//! - **LLC**: UI and U formats with the reflected 24-bit FCS and truncated-coverage rule
//! - **GTP-U**: fixed header, optional part, and the 4-octet-unit extension header chain
//! - **IuUP**: data and control procedure frames with the 6-bit header and 10-bit payload CRCs

pub mod constants;
pub mod crc;
pub mod error;
pub mod protocols;
pub mod serialization;
pub mod traits;
pub mod types;

pub use crc::CrcCalculators;
pub use error::{BuildingError, CodecError, Field, ParseContext, ParsingError, StructureType};
pub use protocols::{
    bssgp::BssgpCodec, gtpu::GtpuCodec, iuup::IuupCodec, llc::LlcCodec, ns::NsCodec,
};
pub use traits::WireCodec;
pub mod fuzz_harnesses;
