//! Common test utilities for the sigstar integration tests.
//!
//! This module provides shared helper functions for building test payloads
//! and nested Gb-stack messages across the per-protocol integration tests.
#![allow(dead_code)]

use rand::Rng;

use sigstar::protocols::bssgp::{BssgpCodec, BssgpPdu};
use sigstar::protocols::llc::{LlcCodec, LlcFrame};
use sigstar::protocols::ns::{NsCodec, NsPdu};
use sigstar::traits::WireCodec;
use sigstar::types::{Bvci, Sapi, Tlli};

/// TLLI used by tests that do not vary it.
pub const TEST_TLLI: Tlli = Tlli::new(0xC000_0042);

/// QoS profile used by tests that do not vary it.
pub const TEST_QOS_PROFILE: [u8; 3] = [0x00, 0x50, 0x20];

/// BVCI used by tests that do not vary it.
pub const TEST_BVCI: Bvci = Bvci::new(0x1002);

/// Creates a payload of `len` random octets.
pub fn random_payload(len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random()).collect()
}

/// Creates a payload of `len` deterministic octets for byte-exact assertions.
pub fn patterned_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Encodes an LLC UI frame carrying `user_data` on the user-data SAPI.
pub fn encode_ui_frame(sequence: u16, protected: bool, user_data: &[u8]) -> Vec<u8> {
    let codec = LlcCodec::new();
    let frame = LlcFrame::ui(Sapi::USER_DATA, sequence, protected, user_data.to_vec());
    codec
        .encode_pdu(&frame)
        .expect("test UI frame failed to encode")
}

/// Builds the full Gb downlink nesting: an LLC UI frame inside a BSSGP
/// DL-UNITDATA inside an NS-UNITDATA, returning the NS wire bytes.
pub fn encode_gb_stack(sequence: u16, user_data: &[u8]) -> Vec<u8> {
    let llc_wire = encode_ui_frame(sequence, true, user_data);

    let bssgp_codec = BssgpCodec::new();
    let bssgp = BssgpPdu::dl_unitdata(TEST_TLLI, TEST_QOS_PROFILE, llc_wire);
    let bssgp_wire = bssgp_codec
        .encode_pdu(&bssgp)
        .expect("test BSSGP PDU failed to encode");

    let ns_codec = NsCodec::new();
    let ns = NsPdu::unitdata(TEST_BVCI, bssgp_wire);
    ns_codec
        .encode_pdu(&ns)
        .expect("test NS PDU failed to encode")
}
