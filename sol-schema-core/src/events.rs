// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloc::vec::Vec;
use core::marker::PhantomData;

use alloy_primitives::B256;
use alloy_sol_types::{abi::TokenSeq, SolType};

use crate::{errors::Error, structs::NamedStruct};

/// An event topic, together with the canonical signature it was hashed from.
///
/// The signature lists every parameter, indexed or not.
pub trait Topic {
    const TOPIC: [u8; 32];
    const SIGNATURE: &'static str;
}

/// Typed binding for a non-anonymous event.
///
/// `D` covers only the event's non-indexed parameters, which is the part of a log carried in its
/// data bytes. Indexed parameters live in the log's topics and are not decoded here.
pub struct Event<T, D>(PhantomData<fn() -> (T, D)>);

impl<T, D> Event<T, D>
where
    T: Topic,
    D: NamedStruct,
{
    pub const SIGNATURE: &'static str = T::SIGNATURE;

    /// The event's topic 0.
    pub fn topic() -> B256 {
        B256::new(T::TOPIC)
    }

    pub fn signature() -> &'static str {
        T::SIGNATURE
    }

    /// Whether a log's first topic identifies this event.
    pub fn matches(topic0: &[u8]) -> bool {
        topic0 == T::TOPIC.as_slice()
    }

    /// Decodes a log's data bytes into the event data struct.
    pub fn decode_data(data: &[u8]) -> Result<D, Error>
    where
        for<'de> <D::Schema as SolType>::Token<'de>: TokenSeq<'de>,
    {
        let tuple = <D::Schema as SolType>::abi_decode_params(data)?;
        Ok(D::from_tuple(tuple))
    }

    /// Encodes the event data struct the way it appears in a log's data bytes.
    pub fn encode_data(data: &D) -> Vec<u8>
    where
        for<'a> <D::Schema as SolType>::Token<'a>: TokenSeq<'a>,
    {
        <D::Schema as SolType>::abi_encode_params(&data.to_tuple())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use alloy_sol_types::sol_data;

    use super::*;

    struct TransferTopic;

    impl Topic for TransferTopic {
        const TOPIC: [u8; 32] = [
            0xdd, 0xf2, 0x52, 0xad, 0x1b, 0xe2, 0xc8, 0x9b, 0x69, 0xc2, 0xb0, 0x68, 0xfc, 0x37,
            0x8d, 0xaa, 0x95, 0x2b, 0xa7, 0xf1, 0x63, 0xc4, 0xa1, 0x16, 0x28, 0xf5, 0x5a, 0x4d,
            0xf5, 0x23, 0xb3, 0xef,
        ];
        const SIGNATURE: &'static str = "Transfer(address,address,uint256)";
    }

    #[derive(Debug, PartialEq)]
    struct TransferEventData {
        value: U256,
    }

    impl NamedStruct for TransferEventData {
        const NAME: &'static str = "ERC20.TransferEventData";
        type Schema = (sol_data::Uint<256>,);

        fn to_tuple(&self) -> (U256,) {
            (self.value,)
        }

        fn from_tuple((value,): (U256,)) -> Self {
            Self { value }
        }
    }

    type TransferEvent = Event<TransferTopic, TransferEventData>;

    #[test]
    fn decodes_log_data() {
        let data = hex::decode("00000000000000000000000000000000000000000000000000000000000f4240")
            .unwrap();
        let decoded = TransferEvent::decode_data(&data).unwrap();
        assert_eq!(decoded.value, U256::from(1_000_000));
        assert_eq!(TransferEvent::encode_data(&decoded), data);
    }

    #[test]
    fn matches_topic() {
        assert_eq!(TransferEvent::signature(), "Transfer(address,address,uint256)");
        let topic = TransferEvent::topic();
        assert!(TransferEvent::matches(topic.as_slice()));
        assert!(!TransferEvent::matches(&[0; 32]));
        assert_eq!(
            hex::encode(topic),
            "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }
}
