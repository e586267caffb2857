//! Core identifier types shared by the signalling codecs.
//!
//! Provides zero-cost newtypes to prevent field mixups at compile time.
//! All types use `#[repr(transparent)]` for guaranteed zero runtime cost.

use std::fmt;
use std::ops::{Add, AddAssign, Deref, Sub};

use serde::{Deserialize, Serialize};

/// Macro to generate wire identifier newtypes with common implementations
macro_rules! wire_newtype {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty) => $prefix:literal
        $(, custom_methods: { $($custom:tt)* })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[derive(Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            /// Creates a new instance
            #[inline]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Raw value
            #[inline]
            pub const fn value(self) -> $inner {
                self.0
            }

            /// Cast to u64 for arithmetic operations
            #[inline]
            pub const fn as_u64(self) -> u64 {
                self.0 as u64
            }

            /// Wrapping addition
            #[inline]
            pub const fn wrapping_add(self, rhs: $inner) -> Self {
                Self(self.0.wrapping_add(rhs))
            }

            /// Wrapping subtraction returning the inner type
            #[inline]
            pub const fn wrapping_sub(self, rhs: Self) -> $inner {
                self.0.wrapping_sub(rhs.0)
            }

            $($($custom)*)?
        }

        // Display with custom prefix
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        // Deref for transparent access
        impl Deref for $name {
            type Target = $inner;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        // From/Into conversions
        impl From<$inner> for $name {
            #[inline]
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        // Enable direct comparisons with raw values
        impl PartialEq<$inner> for $name {
            #[inline]
            fn eq(&self, other: &$inner) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for $inner {
            #[inline]
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }

        impl PartialOrd<$inner> for $name {
            #[inline]
            fn partial_cmp(&self, other: &$inner) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(other)
            }
        }

        impl PartialOrd<$name> for $inner {
            #[inline]
            fn partial_cmp(&self, other: &$name) -> Option<std::cmp::Ordering> {
                self.partial_cmp(&other.0)
            }
        }

        // Arithmetic with raw values
        impl Add<$inner> for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $inner) -> Self::Output {
                self.wrapping_add(rhs)
            }
        }

        impl AddAssign<$inner> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $inner) {
                *self = self.wrapping_add(rhs);
            }
        }

        impl Sub<Self> for $name {
            type Output = $inner;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                self.wrapping_sub(rhs)
            }
        }
    };
}

// Define wire identifier types with their custom methods
wire_newtype!(
    /// Temporary Logical Link Identifier addressing one MS on the Gb interface.
    Tlli(u32) => "TLLI",
    custom_methods: {
        /// Converts the TLLI to big-endian bytes.
        #[inline]
        pub fn to_be_bytes(self) -> [u8; 4] {
            self.0.to_be_bytes()
        }
    }
);

wire_newtype!(
    /// Tunnel Endpoint Identifier selecting one GTP-U tunnel at the receiver.
    Teid(u32) => "TEID",
    custom_methods: {
        /// Converts the TEID to big-endian bytes.
        #[inline]
        pub fn to_be_bytes(self) -> [u8; 4] {
            self.0.to_be_bytes()
        }
    }
);

wire_newtype!(
    /// BSSGP Virtual Connection Identifier.
    Bvci(u16) => "BVCI",
    custom_methods: {
        /// Converts the BVCI to big-endian bytes.
        #[inline]
        pub fn to_be_bytes(self) -> [u8; 2] {
            self.0.to_be_bytes()
        }
    }
);

wire_newtype!(
    /// LLC Service Access Point Identifier (4-bit field in the address octet).
    Sapi(u8) => "SAPI"
);

// Convenience constants
impl Tlli {
    /// All-ones TLLI used before any identity is assigned
    pub const UNASSIGNED: Self = Self::new(0xFFFF_FFFF);
}

impl Teid {
    /// TEID zero, reserved for path management messages
    pub const ZERO: Self = Self::new(0);
}

impl Bvci {
    /// BVCI 0 carries signalling traffic
    pub const SIGNALLING: Self = Self::new(0);
    /// BVCI 1 carries point-to-multipoint traffic
    pub const PTM: Self = Self::new(1);
}

impl Sapi {
    /// GPRS mobility management
    pub const GMM: Self = Self::new(1);
    /// User data (SNDCP)
    pub const USER_DATA: Self = Self::new(3);
    /// Short message service
    pub const SMS: Self = Self::new(7);
    /// Largest value expressible in the 4-bit address field
    pub const MAX: Self = Self::new(0x0F);
}
