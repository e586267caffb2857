//! Fuzz testing harnesses for sigstar codecs.
//!
//! This module contains fuzz testing targets for verifying the robustness
//! of the protocol decoders against malformed inputs. Each harness feeds
//! fuzzer-generated bytes to one decoder and, when decoding succeeds,
//! checks the canonical re-encode invariant: the decoded PDU must encode
//! without error, and decoding that wire image must reproduce the PDU.

use crate::protocols::bssgp::BssgpCodec;
use crate::protocols::gtpu::GtpuCodec;
use crate::protocols::iuup::IuupCodec;
use crate::protocols::llc::LlcCodec;
use crate::protocols::ns::NsCodec;
use crate::serialization::{compact_tlv_section, expand_tlv_section};
use crate::traits::WireCodec;

/// Drives one codec through the decode, re-encode, re-decode cycle.
///
/// Decode failures are expected for arbitrary input and ignored. A decoded
/// PDU must re-encode, and its wire image must be a fixed point: decoding
/// and re-encoding it reproduces the same bytes. PDU equality across the
/// cycle is deliberately not asserted, since codecs that recompute checksum
/// state (IuUP) normalize a mismatched frame on the first re-encode.
fn codec_harness<C>(codec: &C, data: &[u8])
where
    C: WireCodec,
    C::Pdu: PartialEq + std::fmt::Debug,
{
    let Ok(decoded) = codec.decode_pdu(data) else {
        return;
    };
    let wire = codec
        .encode_pdu(&decoded)
        .expect("Harness: decoded PDU failed to re-encode");
    let again = codec
        .decode_pdu(&wire)
        .expect("Harness: canonical wire image failed to decode");
    let wire_again = codec
        .encode_pdu(&again)
        .expect("Harness: re-decoded PDU failed to re-encode");
    assert_eq!(
        wire_again, wire,
        "Harness: canonical wire image is not a fixed point"
    );
}

/// Fuzz tests the NS decoder.
///
/// # Parameters
/// - `data`: Fuzzer-generated input treated as an NS message
pub fn ns_codec_harness(data: &[u8]) {
    codec_harness(&NsCodec::new(), data);
}

/// Fuzz tests the BSSGP decoder.
///
/// # Parameters
/// - `data`: Fuzzer-generated input treated as a BSSGP PDU
pub fn bssgp_codec_harness(data: &[u8]) {
    codec_harness(&BssgpCodec::new(), data);
}

/// Fuzz tests the LLC frame decoder, including the FCS verdict paths.
///
/// # Parameters
/// - `data`: Fuzzer-generated input treated as an LLC frame
pub fn llc_codec_harness(data: &[u8]) {
    codec_harness(&LlcCodec::new(), data);
}

/// Fuzz tests the GTP-U decoder, including the extension chain walk.
///
/// # Parameters
/// - `data`: Fuzzer-generated input treated as a GTP-U datagram
pub fn gtpu_codec_harness(data: &[u8]) {
    codec_harness(&GtpuCodec::new(), data);
}

/// Fuzz tests the IuUP frame decoder.
///
/// # Parameters
/// - `data`: Fuzzer-generated input treated as an IuUP frame
pub fn iuup_codec_harness(data: &[u8]) {
    codec_harness(&IuupCodec::new(), data);
}

/// Fuzz tests the TLV length-form transcoder.
///
/// Treats the input as a bare TvLV section. When expansion succeeds, the
/// canonical TL16V form must compact without error, and re-expanding the
/// compacted form must reach the same canonical bytes.
///
/// # Parameters
/// - `data`: Fuzzer-generated input treated as a TvLV record section
pub fn tlv_transcoder_harness(data: &[u8]) {
    let Ok(canonical) = expand_tlv_section(data, 0) else {
        return;
    };
    let compacted = compact_tlv_section(&canonical, 0)
        .expect("Harness: canonical section failed to compact");
    let reexpanded = expand_tlv_section(&compacted, 0)
        .expect("Harness: compacted section failed to expand");
    assert_eq!(
        reexpanded, canonical,
        "Harness: canonical form changed across compact/expand"
    );
}
