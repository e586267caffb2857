//! Constants specific to LLC frame layouts (TS 44.064, Section 6).

// --- Address Octet ---

/// Mask for the protocol discriminator bit; must be zero in an LLC frame.
pub const LLC_ADDRESS_PD_MASK: u8 = 0b1000_0000;
/// Mask for the command/response bit.
pub const LLC_ADDRESS_CR_MASK: u8 = 0b0100_0000;
/// Mask extracting the SAPI from the address octet.
pub const LLC_ADDRESS_SAPI_MASK: u8 = 0x0F;

// --- Control Field ---

/// Mask for the three format-discriminating bits of the first control octet.
pub const LLC_CONTROL_FORMAT_MASK: u8 = 0b1110_0000;
/// First-octet prefix of a UI (unconfirmed information) control field.
pub const LLC_CONTROL_UI_PREFIX_VALUE: u8 = 0b1100_0000;
/// First-octet prefix of a U (unnumbered) control field.
pub const LLC_CONTROL_U_PREFIX_VALUE: u8 = 0b1110_0000;
/// Mask for the encryption (E) bit in the second UI control octet.
pub const LLC_CONTROL_UI_E_MASK: u8 = 0b0000_0010;
/// Mask for the protection-mode (PM) bit in the second UI control octet.
pub const LLC_CONTROL_UI_PM_MASK: u8 = 0b0000_0001;
/// Mask for the poll/final (P/F) bit in a U-format control octet.
pub const LLC_CONTROL_U_PF_MASK: u8 = 0b0001_0000;
/// Mask for the command bits of a U-format control octet.
pub const LLC_CONTROL_U_COMMAND_MASK: u8 = 0x0F;
/// Largest value of the 9-bit UI sequence number N(U).
pub const MAX_UI_SEQUENCE: u16 = 0x1FF;

// --- Frame Geometry ---

/// Header length of a UI frame (address + two control octets).
pub const UI_HEADER_LENGTH_BYTES: usize = 3;
/// Header length of a U frame (address + one control octet).
pub const U_HEADER_LENGTH_BYTES: usize = 2;
/// Length of the serialized frame check sequence.
pub const FCS_LENGTH_BYTES: usize = 3;
/// Number of information octets the FCS covers when a UI frame is sent with
/// PM = 0 (N202).
pub const N202_DEFAULT_OCTETS: usize = 4;
