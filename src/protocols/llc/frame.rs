//! Typed LLC frame representation.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};

use crate::types::Sapi;

use super::constants::{U_HEADER_LENGTH_BYTES, UI_HEADER_LENGTH_BYTES};

/// Command carried by a U-format (unnumbered) control field.
///
/// Only the unacknowledged-mode commands are named; anything else decodes to
/// `Unknown` and can be re-encoded verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UCommand {
    /// NULL command (no operation).
    Null,
    /// Disconnected mode response.
    Dm,
    /// Disconnect request.
    Disc,
    /// Unnumbered acknowledgement.
    Ua,
    /// Set asynchronous balanced mode request.
    Sabm,
    /// Frame reject response.
    Frmr,
    /// Exchange identification.
    Xid,
    /// Any command value this codec does not name.
    Unknown(u8),
}

impl UCommand {
    /// Returns the 4-bit command encoding of this variant.
    pub const fn command_bits(self) -> u8 {
        match self {
            Self::Null => 0x00,
            Self::Dm => 0x01,
            Self::Disc => 0x04,
            Self::Ua => 0x06,
            Self::Sabm => 0x07,
            Self::Frmr => 0x08,
            Self::Xid => 0x0B,
            Self::Unknown(bits) => bits,
        }
    }
}

impl From<u8> for UCommand {
    fn from(bits: u8) -> Self {
        match bits {
            0x00 => Self::Null,
            0x01 => Self::Dm,
            0x04 => Self::Disc,
            0x06 => Self::Ua,
            0x07 => Self::Sabm,
            0x08 => Self::Frmr,
            0x0B => Self::Xid,
            other => Self::Unknown(other),
        }
    }
}

impl From<UCommand> for u8 {
    fn from(command: UCommand) -> Self {
        command.command_bits()
    }
}

/// Control field of an LLC frame.
///
/// The acknowledged-mode I and S formats are outside this codec's scope;
/// their discriminators decode to a distinct unsupported-format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LlcControl {
    /// Unconfirmed information frame.
    Ui {
        /// 9-bit unconfirmed sequence number N(U).
        sequence: u16,
        /// E bit: information field is ciphered.
        encrypted: bool,
        /// PM bit: FCS covers the whole frame rather than header + N202.
        protected: bool,
    },
    /// Unnumbered (U-format) frame carrying a link-management command.
    U {
        command: UCommand,
        /// P/F bit.
        poll_final: bool,
    },
}

impl LlcControl {
    /// Header length (address octet + control octets) of a frame carrying
    /// this control field.
    pub const fn header_length(&self) -> usize {
        match self {
            Self::Ui { .. } => UI_HEADER_LENGTH_BYTES,
            Self::U { .. } => U_HEADER_LENGTH_BYTES,
        }
    }
}

/// Frame check sequence state carried across the encode/decode boundary.
///
/// Encoding: `Computed` and the `Declared(0)` sentinel make the engine
/// compute and append the FCS; a non-zero `Declared` value (low 24 bits) is
/// serialized as-is, which supports deliberately injecting a wrong checksum
/// for negative tests; `Mismatch` re-emits the received value verbatim.
///
/// Decoding: agreement yields `Declared` with the verified value; a
/// disagreement yields `Mismatch` with the as-received bytes preserved, and
/// decoding still succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Fcs {
    /// Compute over the coverage range during encoding.
    #[default]
    Computed,
    /// A concrete 24-bit checksum value.
    Declared(u32),
    /// Receiver-side disagreement between wire and recomputation.
    Mismatch { received: u32, computed: u32 },
}

/// One LLC frame in typed form.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlcFrame {
    /// Service access point the frame addresses (4-bit field).
    pub sapi: Sapi,
    /// Command/response bit of the address octet.
    pub command_response: bool,
    /// Control field selecting the frame format.
    pub control: LlcControl,
    /// Information field (may be empty for U frames).
    #[serde_as(as = "Hex")]
    pub information: Bytes,
    /// Frame check sequence state.
    pub fcs: Fcs,
}

impl LlcFrame {
    /// Creates a UI frame with a computed FCS.
    pub fn ui(sapi: Sapi, sequence: u16, protected: bool, information: impl Into<Bytes>) -> Self {
        Self {
            sapi,
            command_response: false,
            control: LlcControl::Ui {
                sequence,
                encrypted: false,
                protected,
            },
            information: information.into(),
            fcs: Fcs::Computed,
        }
    }

    /// Creates a U-format command frame with no information field.
    pub fn u_command(sapi: Sapi, command: UCommand, poll_final: bool) -> Self {
        Self {
            sapi,
            command_response: true,
            control: LlcControl::U {
                command,
                poll_final,
            },
            information: Bytes::new(),
            fcs: Fcs::Computed,
        }
    }

    /// Header length of this frame on the wire.
    pub const fn header_length(&self) -> usize {
        self.control.header_length()
    }
}
