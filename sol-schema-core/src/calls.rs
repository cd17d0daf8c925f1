// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloc::vec::Vec;
use core::marker::PhantomData;

use alloy_primitives::FixedBytes;
use alloy_sol_types::{abi::TokenSeq, SolType};

use crate::errors::Error;

/// A function or error selector, together with the canonical signature it was hashed from.
///
/// Generated code declares one unit struct per selector and implements this trait for it.
pub trait Selector {
    /// First 4 bytes of the keccak-256 hash of [`Selector::SIGNATURE`].
    const SELECTOR: [u8; 4];
    /// Canonical signature, e.g. `transfer(address,uint256)`.
    const SIGNATURE: &'static str;
}

/// Typed binding for a contract function.
///
/// `S` is the function's [`Selector`], `R` the tuple schema of its outputs and `A` the tuple
/// schema of its inputs. Both tuples are encoded as parameter sequences, so a function without
/// outputs uses `()` and a function with one output uses a 1-tuple.
pub struct Call<S, R, A>(PhantomData<fn() -> (S, R, A)>);

impl<S, R, A> Call<S, R, A>
where
    S: Selector,
    R: SolType,
    A: SolType,
{
    pub const SELECTOR: [u8; 4] = S::SELECTOR;
    pub const SIGNATURE: &'static str = S::SIGNATURE;

    pub fn selector() -> FixedBytes<4> {
        FixedBytes(S::SELECTOR)
    }

    pub fn signature() -> &'static str {
        S::SIGNATURE
    }

    /// Encodes the selector followed by the ABI-encoded arguments.
    pub fn abi_encode_call(args: &A::RustType) -> Vec<u8>
    where
        for<'a> A::Token<'a>: TokenSeq<'a>,
    {
        let params = A::abi_encode_params(args);
        let mut calldata = Vec::with_capacity(4 + params.len());
        calldata.extend_from_slice(&S::SELECTOR);
        calldata.extend(params);
        calldata
    }

    /// Decodes call data produced by [`Call::abi_encode_call`], checking the selector first.
    pub fn abi_decode_call(calldata: &[u8]) -> Result<A::RustType, Error>
    where
        for<'de> A::Token<'de>: TokenSeq<'de>,
    {
        if calldata.len() < 4 {
            return Err(Error::ShortInput {
                expected: 4,
                found: calldata.len(),
            });
        }
        let (selector, params) = calldata.split_at(4);
        if selector != S::SELECTOR.as_slice() {
            let mut found = [0; 4];
            found.copy_from_slice(selector);
            return Err(Error::SelectorMismatch {
                expected: S::SELECTOR,
                found,
            });
        }
        Ok(A::abi_decode_params(params)?)
    }

    /// Decodes the data returned by a call to this function.
    pub fn abi_decode_returns(data: &[u8]) -> Result<R::RustType, Error>
    where
        for<'de> R::Token<'de>: TokenSeq<'de>,
    {
        Ok(R::abi_decode_params(data)?)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::sol_data;

    use super::*;

    struct TransferSelector;

    impl Selector for TransferSelector {
        const SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];
        const SIGNATURE: &'static str = "transfer(address,uint256)";
    }

    type Transfer =
        Call<TransferSelector, (sol_data::Bool,), (sol_data::Address, sol_data::Uint<256>)>;

    #[test]
    fn encodes_selector_then_params() {
        let to = Address::repeat_byte(0x11);
        let calldata = Transfer::abi_encode_call(&(to, U256::from(1000)));
        assert_eq!(calldata.len(), 4 + 2 * 32);
        assert_eq!(&calldata[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(&calldata[16..36], to.as_slice());
        assert_eq!(calldata[67], 0xe8);
        assert_eq!(calldata[66], 0x03);
    }

    #[test]
    fn decodes_own_encoding() {
        let args = (Address::repeat_byte(0x22), U256::from(7));
        let calldata = Transfer::abi_encode_call(&args);
        assert_eq!(Transfer::abi_decode_call(&calldata).unwrap(), args);
    }

    #[test]
    fn rejects_foreign_selector() {
        let mut calldata = Transfer::abi_encode_call(&(Address::ZERO, U256::ZERO));
        calldata[0] = 0x09;
        assert_eq!(
            Transfer::abi_decode_call(&calldata),
            Err(Error::SelectorMismatch {
                expected: [0xa9, 0x05, 0x9c, 0xbb],
                found: [0x09, 0x05, 0x9c, 0xbb],
            })
        );
        assert_eq!(
            Transfer::abi_decode_call(&[0xa9]),
            Err(Error::ShortInput {
                expected: 4,
                found: 1
            })
        );
    }

    #[test]
    fn decodes_returns() {
        let data = <(sol_data::Bool,) as SolType>::abi_encode_params(&(true,));
        assert_eq!(Transfer::abi_decode_returns(&data).unwrap(), (true,));
        assert_eq!(Transfer::signature(), "transfer(address,uint256)");
        assert_eq!(Transfer::selector(), FixedBytes([0xa9, 0x05, 0x9c, 0xbb]));
    }
}
