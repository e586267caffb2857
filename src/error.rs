//! Error types for the signalling codecs.
//!
//! This module defines the error types used throughout the sigstar library.
//! It distinguishes between wire parsing errors and PDU building errors, with
//! closed context enums instead of free-form strings so call sites stay
//! allocation-free and matchable. The `thiserror` crate is used for ergonomic
//! error definitions.
//!
//! Checksum mismatches are deliberately *not* errors: decoders record them in
//! the decoded PDU itself (see [`crate::protocols::llc::Fcs`] and
//! [`crate::protocols::iuup::IuupChecksums`]) so that malformed-frame test
//! scenarios can still inspect the rest of the message.

use std::fmt;

use thiserror::Error;

/// Identifies the parse site that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseContext {
    NsFixedHeader,
    NsUnitdataHeader,
    BssgpFixedHeader,
    TlvFixedHeader,
    TlvRecordHeader,
    TlvRecordValue,
    LlcFrameHeader,
    LlcControlField,
    LlcFcsField,
    GtpFixedHeader,
    GtpOptionalPart,
    GtpExtensionHeader,
    GtpPayload,
    IuupFrameHeader,
    IuupChecksumField,
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NsFixedHeader => "NS fixed header",
            Self::NsUnitdataHeader => "NS-UNITDATA header",
            Self::BssgpFixedHeader => "BSSGP fixed header",
            Self::TlvFixedHeader => "TLV section fixed header",
            Self::TlvRecordHeader => "TLV record header",
            Self::TlvRecordValue => "TLV record value",
            Self::LlcFrameHeader => "LLC frame header",
            Self::LlcControlField => "LLC control field",
            Self::LlcFcsField => "LLC FCS field",
            Self::GtpFixedHeader => "GTP-U fixed header",
            Self::GtpOptionalPart => "GTP-U optional part",
            Self::GtpExtensionHeader => "GTP-U extension header",
            Self::GtpPayload => "GTP-U payload",
            Self::IuupFrameHeader => "IuUP frame header",
            Self::IuupChecksumField => "IuUP checksum field",
        };
        f.write_str(s)
    }
}

/// Identifies the wire field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PduType,
    MessageType,
    MessageLength,
    IeLength,
    LengthIndicator,
    ProtocolDiscriminator,
    Sapi,
    UiSequence,
    Command,
    GtpVersion,
    ProtocolType,
    ExtensionLength,
    ExtensionType,
    FrameNumber,
    Rfci,
    ModeVersion,
    Procedure,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PduType => "PDU type",
            Self::MessageType => "message type",
            Self::MessageLength => "message length",
            Self::IeLength => "IE length",
            Self::LengthIndicator => "length indicator",
            Self::ProtocolDiscriminator => "protocol discriminator",
            Self::Sapi => "SAPI",
            Self::UiSequence => "UI sequence number N(U)",
            Self::Command => "U-format command",
            Self::GtpVersion => "GTP version",
            Self::ProtocolType => "protocol type",
            Self::ExtensionLength => "extension header length",
            Self::ExtensionType => "extension header type",
            Self::FrameNumber => "frame number",
            Self::Rfci => "RFCI",
            Self::ModeVersion => "mode version",
            Self::Procedure => "procedure indicator",
        };
        f.write_str(s)
    }
}

/// Identifies the wire structure an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureType {
    NsPdu,
    BssgpPdu,
    LlcFrame,
    GtpHeader,
    GtpExtensionHeader,
    IuupFrame,
    TlvSection,
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NsPdu => "NS PDU",
            Self::BssgpPdu => "BSSGP PDU",
            Self::LlcFrame => "LLC frame",
            Self::GtpHeader => "GTP-U header",
            Self::GtpExtensionHeader => "GTP-U extension header",
            Self::IuupFrame => "IuUP frame",
            Self::TlvSection => "TLV section",
        };
        f.write_str(s)
    }
}

/// Errors that can occur while parsing wire bytes into a PDU.
///
/// Length and bounds violations are fatal for the message being decoded: no
/// partial structure is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    /// Insufficient data to parse a complete field or structure.
    #[error("incomplete data: needed {needed} bytes, got {got} for {context}")]
    NotEnoughData {
        needed: usize,
        got: usize,
        context: ParseContext,
    },

    /// A field contained an invalid or unexpected value.
    #[error("invalid {field} in {structure}: expected {expected}, got {got}")]
    InvalidFieldValue {
        field: Field,
        structure: StructureType,
        expected: u32,
        got: u32,
    },

    /// A declared length runs past the end of the available buffer.
    #[error("declared length {declared} exceeds {available} available bytes in {context}")]
    LengthExceedsBuffer {
        declared: usize,
        available: usize,
        context: ParseContext,
    },

    /// A value length does not fit the destination length form.
    #[error("value length {length} does not fit the target length form (max {max})")]
    LengthFormOverflow { length: usize, max: usize },

    /// A structure discriminator names a format this codec does not process.
    #[error("unsupported format 0x{discriminant:02X} for {structure}")]
    UnsupportedFormat {
        structure: StructureType,
        discriminant: u8,
    },

    /// A mandatory information element was absent.
    #[error("mandatory IE 0x{iei:02X} missing from {structure}")]
    MandatoryIeMissing { iei: u8, structure: StructureType },
}

/// Errors that can occur while building wire bytes from a PDU.
///
/// Builders validate before emitting; a build error means no output was
/// produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildingError {
    /// A field value does not fit its wire encoding.
    #[error("invalid value {value} for {field}: exceeds {max_bits} bits")]
    InvalidFieldValueForBuild {
        field: Field,
        value: u32,
        max_bits: u8,
    },

    /// A length indicator disagrees with the actual embedded payload length.
    #[error("length indicator says {indicated} bytes but payload is {actual} bytes")]
    LengthIndicatorMismatch { indicated: usize, actual: usize },

    /// A field value is reserved on the wire and cannot be emitted.
    #[error("value {value} for {field} is reserved on the wire")]
    ReservedFieldValue { field: Field, value: u32 },

    /// Extension header content cannot be expressed in 4-octet units.
    #[error("extension content of {length} bytes does not fit the 4-octet unit scaling")]
    InvalidExtensionLength { length: usize },
}

/// Main error type for codec operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Error while parsing wire bytes.
    #[error("parsing error: {0}")]
    Parsing(#[from] ParsingError),

    /// Error while building wire bytes.
    #[error("building error: {0}")]
    Building(#[from] BuildingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_enough_data_display_names_context() {
        let err = ParsingError::NotEnoughData {
            needed: 8,
            got: 3,
            context: ParseContext::GtpFixedHeader,
        };
        assert_eq!(
            format!("{err}"),
            "incomplete data: needed 8 bytes, got 3 for GTP-U fixed header"
        );
    }

    #[test]
    fn invalid_field_value_display_names_field_and_structure() {
        let err = ParsingError::InvalidFieldValue {
            field: Field::GtpVersion,
            structure: StructureType::GtpHeader,
            expected: 1,
            got: 2,
        };
        assert_eq!(
            format!("{err}"),
            "invalid GTP version in GTP-U header: expected 1, got 2"
        );
    }

    #[test]
    fn unsupported_format_is_matchable() {
        let err = ParsingError::UnsupportedFormat {
            structure: StructureType::IuupFrame,
            discriminant: 5,
        };
        assert!(matches!(
            err,
            ParsingError::UnsupportedFormat {
                discriminant: 5,
                ..
            }
        ));
        assert_eq!(format!("{err}"), "unsupported format 0x05 for IuUP frame");
    }

    #[test]
    fn codec_error_wraps_both_kinds() {
        let parse: CodecError = ParsingError::LengthFormOverflow {
            length: 40000,
            max: 0x7FFF,
        }
        .into();
        assert!(matches!(parse, CodecError::Parsing(_)));

        let build: CodecError = BuildingError::LengthIndicatorMismatch {
            indicated: 5,
            actual: 9,
        }
        .into();
        assert!(matches!(build, CodecError::Building(_)));
        assert_eq!(
            format!("{build}"),
            "building error: length indicator says 5 bytes but payload is 9 bytes"
        );
    }
}
