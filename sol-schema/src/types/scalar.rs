// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;

/// Solidity primitive types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scalar {
    Bool,
    Uint(u16),
    Int(u16),
    Address,
    Bytes,
    String,
    FixedBytes(u8),
    /// External function pointer, encoded as 24 bytes.
    Function,
    /// A primitive this compiler does not know, e.g. `fixed128x18`. The raw spelling is kept so
    /// that signatures hash exactly as written.
    Unknown(String),
}

impl Scalar {
    /// Classifies a primitive identifier.
    ///
    /// Integer widths must be multiples of 8 between 8 and 256 and fixed byte arrays must hold 1 to
    /// 32 bytes. Anything else, including the non-canonical `uint` and `int` aliases, is
    /// [`Scalar::Unknown`].
    pub fn classify(ident: &str) -> Self {
        let unknown = || Self::Unknown(ident.to_owned());
        match ident {
            "bool" => Self::Bool,
            "address" => Self::Address,
            "bytes" => Self::Bytes,
            "string" => Self::String,
            "function" => Self::Function,
            _ => {
                if let Some(bits) = ident.strip_prefix("uint") {
                    int_width(bits).map_or_else(unknown, Self::Uint)
                } else if let Some(bits) = ident.strip_prefix("int") {
                    int_width(bits).map_or_else(unknown, Self::Int)
                } else if let Some(len) = ident.strip_prefix("bytes") {
                    match parse_decimal(len) {
                        Some(len @ 1..=32) => Self::FixedBytes(len as u8),
                        _ => unknown(),
                    }
                } else {
                    unknown()
                }
            }
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

fn int_width(bits: &str) -> Option<u16> {
    match parse_decimal(bits)? {
        bits @ 8..=256 if bits % 8 == 0 => Some(bits as u16),
        _ => None,
    }
}

/// Plain decimal digits without a leading zero.
fn parse_decimal(digits: &str) -> Option<usize> {
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Uint(bits) => write!(f, "uint{bits}"),
            Self::Int(bits) => write!(f, "int{bits}"),
            Self::Address => f.write_str("address"),
            Self::Bytes => f.write_str("bytes"),
            Self::String => f.write_str("string"),
            Self::FixedBytes(len) => write!(f, "bytes{len}"),
            Self::Function => f.write_str("function"),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_primitives() {
        assert_eq!(Scalar::classify("bool"), Scalar::Bool);
        assert_eq!(Scalar::classify("uint8"), Scalar::Uint(8));
        assert_eq!(Scalar::classify("uint256"), Scalar::Uint(256));
        assert_eq!(Scalar::classify("int24"), Scalar::Int(24));
        assert_eq!(Scalar::classify("bytes"), Scalar::Bytes);
        assert_eq!(Scalar::classify("bytes1"), Scalar::FixedBytes(1));
        assert_eq!(Scalar::classify("bytes32"), Scalar::FixedBytes(32));
        assert_eq!(Scalar::classify("function"), Scalar::Function);
    }

    #[test]
    fn out_of_range_widths_are_unknown() {
        for raw in [
            "uint", "int", "uint0", "uint7", "uint264", "uint08", "int+8", "bytes0", "bytes33",
            "bytes01", "fixed128x18", "ufixed",
        ] {
            assert_eq!(Scalar::classify(raw), Scalar::Unknown(raw.into()), "{raw}");
        }
    }

    #[test]
    fn displays_canonical_spelling() {
        for raw in ["bool", "uint160", "int56", "address", "bytes4", "string", "fixed128x18"] {
            assert_eq!(Scalar::classify(raw).to_string(), raw);
        }
    }
}
