//! Cross-protocol wire constants and bitmasks.
//!
//! Defines constants shared by more than one codec, chiefly the two TLV
//! length forms the Gb-interface protocols exchange. Protocol-specific
//! constants reside within their respective modules under `protocols/`.

// --- TLV Length Forms (TvLV, TS 48.016 style) ---

/// Flag bit marking a single-octet TvLV length (the E-bit).
pub const TLV_SHORT_FORM_FLAG: u8 = 0b1000_0000; // 0x80
/// Mask extracting the 7-bit length from a short-form length octet.
pub const TLV_SHORT_FORM_LENGTH_MASK: u8 = 0x7F;
/// Largest value length expressible in the short form.
pub const TLV_SHORT_FORM_MAX_LENGTH: usize = 127;
/// Largest value length expressible in the two-octet long form (15 bits).
pub const TLV_LONG_FORM_MAX_LENGTH: usize = 0x7FFF;

/// TvLV record header size with a short-form length (tag + 1).
pub const TVLV_SHORT_HEADER_LENGTH_BYTES: usize = 2;
/// TvLV record header size with a long-form length (tag + 2).
pub const TVLV_LONG_HEADER_LENGTH_BYTES: usize = 3;

// --- TLV Length Forms (TL16V, fixed two-octet length) ---

/// TL16V record header size (tag + 16-bit big-endian length).
pub const TL16V_HEADER_LENGTH_BYTES: usize = 3;
/// Largest value length expressible in a TL16V record.
pub const TL16V_MAX_LENGTH: usize = u16::MAX as usize;
