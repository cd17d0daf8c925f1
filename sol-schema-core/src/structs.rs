// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloc::vec::Vec;

use alloy_sol_types::SolType;

use crate::errors::Error;

/// A Rust struct standing in for a named Solidity struct.
///
/// The binary layout is fully described by [`NamedStruct::Schema`], an ordered tuple of the
/// fields' `sol_data` types. Encoding and decoding convert to and from that tuple.
pub trait NamedStruct: Sized {
    /// Qualified Solidity name, e.g. `Multicall3.Call`.
    const NAME: &'static str;

    /// Structural schema of the struct.
    type Schema: SolType;

    fn to_tuple(&self) -> <Self::Schema as SolType>::RustType;

    fn from_tuple(tuple: <Self::Schema as SolType>::RustType) -> Self;

    /// ABI-encodes the struct as a single value.
    fn abi_encode(&self) -> Vec<u8> {
        <Self::Schema as SolType>::abi_encode(&self.to_tuple())
    }

    /// Decodes a value produced by [`NamedStruct::abi_encode`].
    fn abi_decode(data: &[u8]) -> Result<Self, Error> {
        let tuple = <Self::Schema as SolType>::abi_decode(data)?;
        Ok(Self::from_tuple(tuple))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use alloy_primitives::{Address, Bytes};
    use alloy_sol_types::sol_data;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Multicall3Call {
        pub target: Address,
        pub call_data: Bytes,
    }

    impl NamedStruct for Multicall3Call {
        const NAME: &'static str = "Multicall3.Call";
        type Schema = (sol_data::Address, sol_data::Bytes);

        fn to_tuple(&self) -> (Address, Bytes) {
            (self.target, self.call_data.clone())
        }

        fn from_tuple((target, call_data): (Address, Bytes)) -> Self {
            Self { target, call_data }
        }
    }

    #[test]
    fn round_trips_through_schema() {
        let call = Multicall3Call {
            target: Address::repeat_byte(0xab),
            call_data: Bytes::from_static(&[0x18, 0x16, 0x0d, 0xdd]),
        };
        let encoded = call.abi_encode();
        // offset word, address word, bytes offset, bytes length, one padded data word
        assert_eq!(encoded.len(), 5 * 32);
        assert_eq!(encoded[31], 0x20);
        assert_eq!(Multicall3Call::abi_decode(&encoded).unwrap(), call);
    }

    #[test]
    fn rejects_truncated_data() {
        let call = Multicall3Call {
            target: Address::ZERO,
            call_data: Bytes::new(),
        };
        let encoded = call.abi_encode();
        assert!(matches!(
            Multicall3Call::abi_decode(&encoded[..40]),
            Err(Error::AbiDecodingFailed(_))
        ));
    }
}
