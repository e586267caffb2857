//! Generic wire serialization utilities.
//!
//! Contains the TLV length-form transcoder shared by the Gb-interface codecs.

pub mod tlv;

pub use tlv::{Tlv, compact_tlv_section, expand_tlv_section};
