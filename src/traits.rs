//! Core codec traits.
//!
//! This module defines the interface every protocol codec in this library
//! exposes: a typed PDU in, wire bytes out, and back. The trait is the seam
//! between the per-protocol byte-level logic and callers that treat all five
//! protocols uniformly (test harnesses, benchmarks, fuzz entry points).

use std::fmt::Debug;

use crate::error::CodecError;

/// Defines the interface for a protocol wire codec.
///
/// Implementations are pure functions of their inputs: they hold no mutable
/// state beyond checksum tables built at construction and treated as
/// read-only afterwards, so a single instance may be shared across threads.
pub trait WireCodec: Send + Sync + Debug {
    /// The typed message this codec produces and consumes.
    type Pdu;

    /// Returns the short protocol name, e.g. `"BSSGP"`.
    fn protocol_name(&self) -> &'static str;

    /// Builds the complete wire representation of `pdu`.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` containing the full message on success.
    /// - `Err(CodecError)` if a field cannot be expressed on the wire; no
    ///   bytes are produced in that case.
    fn encode_pdu(&self, pdu: &Self::Pdu) -> Result<Vec<u8>, CodecError>;

    /// Parses the wire bytes in `data` into a typed message.
    ///
    /// # Returns
    /// - `Ok(Self::Pdu)` on success. Checksum disagreement is not a failure;
    ///   it is recorded inside the returned message.
    /// - `Err(CodecError)` if the data is structurally malformed.
    fn decode_pdu(&self, data: &[u8]) -> Result<Self::Pdu, CodecError>;
}
