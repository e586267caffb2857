//! Per-protocol PDU models and wire codecs.
//!
//! Each submodule owns one protocol: its value tables, its typed PDU model,
//! and a [`crate::traits::WireCodec`] implementation sequencing the shared
//! byte-level machinery (TLV transcoding, checksum engines, optional-part
//! splicing) around plain fixed-layout serialization.

pub mod bssgp;
pub mod gtpu;
pub mod iuup;
pub mod llc;
pub mod ns;
