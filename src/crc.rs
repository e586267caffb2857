//! Checksum engines for the signalling codecs.
//!
//! This module implements a wrapper around the `crc` crate for the 24-bit
//! GPRS LLC frame check sequence (TS 44.064 Annex B), plus the two short
//! bit-serial CRCs of the IuUP frame header (TS 25.415, 6-bit header CRC and
//! 10-bit payload CRC). It also provides a `CrcCalculators` struct for
//! convenient reuse of the table-driven FCS instance.
//!
//! The IuUP CRCs run over MSB-first expanded bit arrays rather than packed
//! bytes because their coverage is defined bitwise; they carry no lookup
//! table, so free functions suffice.

use std::fmt;

use crc::{Algorithm, Crc};

/// CRC-24 parameters for the GPRS LLC frame check sequence.
///
/// Generator polynomial
/// `x^24 + x^23 + x^21 + x^20 + x^19 + x^17 + x^16 + x^15 + x^13 + x^8 + x^7 + x^5 + x^4 + x^2 + 1`,
/// processed least-significant bit first with an all-ones preset and a final
/// one's complement.
pub const CRC_24_GPRS_FCS: Algorithm<u32> = Algorithm {
    width: 24,
    poly: 0xBBA1B5,
    init: 0xFFFFFF,
    refin: true,
    refout: true,
    xorout: 0xFFFFFF,
    check: 0x4E86CB,
    residue: 0x0C91B6,
};

/// IuUP header CRC polynomial, `x^6 + x^5 + x^3 + x^2 + x + 1` (decimal 47).
const IUUP_HEADER_CRC_POLY: u16 = 0b10_1111;
/// IuUP header CRC width in bits.
const IUUP_HEADER_CRC_WIDTH: u32 = 6;
/// IuUP payload CRC polynomial, `x^10 + x^9 + x^5 + x^4 + x + 1` (decimal 563).
const IUUP_PAYLOAD_CRC_POLY: u16 = 0b10_0011_0011;
/// IuUP payload CRC width in bits.
const IUUP_PAYLOAD_CRC_WIDTH: u32 = 10;

/// A struct holding the pre-initialized LLC FCS algorithm instance.
///
/// This is intended for reuse to avoid re-creating the `Crc<u32>` instance
/// (and its 256-entry lookup table) repeatedly; each codec builds one at
/// construction and shares it read-only afterwards.
pub struct CrcCalculators {
    fcs24_calculator: Crc<u32>,
}

impl fmt::Debug for CrcCalculators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrcCalculators")
            .field("fcs24_calculator", &format_args!("Crc<u32>(GPRS_FCS24)"))
            .finish()
    }
}

impl CrcCalculators {
    /// Creates a new `CrcCalculators` instance, initializing the LLC FCS-24
    /// algorithm.
    pub fn new() -> Self {
        Self {
            fcs24_calculator: Crc::<u32>::new(&CRC_24_GPRS_FCS),
        }
    }

    /// Calculates the 24-bit LLC frame check sequence over `input`.
    ///
    /// # Returns
    /// The calculated FCS value (ranging from `0x000000` to `0xFFFFFF`).
    #[inline]
    pub fn llc_fcs(&self, input: &[u8]) -> u32 {
        self.fcs24_calculator.checksum(input)
    }
}

impl Default for CrcCalculators {
    /// Creates a default `CrcCalculators` instance.
    fn default() -> Self {
        Self::new()
    }
}

/// Calculates the 24-bit LLC frame check sequence directly.
///
/// This function creates a new `Crc<u32>` instance (with its lookup table) on
/// each call. For repeated calculations, `CrcCalculators` is preferred.
pub fn calculate_llc_fcs(input: &[u8]) -> u32 {
    let crc_calc: Crc<u32> = Crc::<u32>::new(&CRC_24_GPRS_FCS);
    crc_calc.checksum(input)
}

/// Expands packed bytes into one cell per bit, most significant bit first.
fn expand_to_bits(input: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(input.len() * 8);
    for byte in input {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Runs the shared bit-serial CRC register over an expanded bit array.
fn bit_serial_crc(bits: &[u8], width: u32, poly: u16) -> u16 {
    let mask = (1u16 << width) - 1;
    let top_bit = 1u16 << (width - 1);
    let mut crc: u16 = 0;
    for &bit in bits {
        crc ^= u16::from(bit) << (width - 1);
        if crc & top_bit != 0 {
            crc = ((crc << 1) ^ poly) & mask;
        } else {
            crc = (crc << 1) & mask;
        }
    }
    crc
}

/// Calculates the 6-bit IuUP header CRC over `input` (the first two frame
/// octets).
///
/// # Returns
/// The calculated CRC value (ranging from `0x00` to `0x3F`).
pub fn iuup_header_crc(input: &[u8]) -> u8 {
    bit_serial_crc(
        &expand_to_bits(input),
        IUUP_HEADER_CRC_WIDTH,
        IUUP_HEADER_CRC_POLY,
    ) as u8
}

/// Calculates the 10-bit IuUP payload CRC over `input` (every octet from the
/// payload offset to the end of the frame).
///
/// # Returns
/// The calculated CRC value (ranging from `0x000` to `0x3FF`).
pub fn iuup_payload_crc(input: &[u8]) -> u16 {
    bit_serial_crc(
        &expand_to_bits(input),
        IUUP_PAYLOAD_CRC_WIDTH,
        IUUP_PAYLOAD_CRC_POLY,
    )
}
