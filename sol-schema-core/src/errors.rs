// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use core::fmt;

/// Represents a failure to decode call data, return data or log data.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Input was shorter than the fixed prefix it must carry.
    ShortInput { expected: usize, found: usize },
    /// Call data starts with a different function selector.
    SelectorMismatch { expected: [u8; 4], found: [u8; 4] },
    /// Failure to decode the ABI-encoded payload.
    AbiDecodingFailed(alloy_sol_types::Error),
}

impl From<alloy_sol_types::Error> for Error {
    fn from(err: alloy_sol_types::Error) -> Self {
        Error::AbiDecodingFailed(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortInput { expected, found } => {
                write!(f, "input too short: expected at least {expected} bytes, found {found}")
            }
            Self::SelectorMismatch { expected, found } => write!(
                f,
                "selector mismatch: expected 0x{:08x}, found 0x{:08x}",
                u32::from_be_bytes(*expected),
                u32::from_be_bytes(*found),
            ),
            Self::AbiDecodingFailed(err) => write!(f, "abi decoding failed: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
