// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Canonical signatures and the selectors and topics hashed from them.

use alloy_primitives::{FixedBytes, B256};
use tiny_keccak::{Hasher, Keccak};

use crate::types::{canonical_list, Field};

/// The hash function signatures are hashed with.
pub trait SignatureHasher {
    fn hash(&self, bytes: &[u8]) -> B256;
}

/// Keccak-256, as used by the EVM.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256;

impl SignatureHasher for Keccak256 {
    fn hash(&self, bytes: &[u8]) -> B256 {
        let mut out = [0u8; 32];
        let mut keccak = Keccak::v256();
        keccak.update(bytes);
        keccak.finalize(&mut out);
        B256::new(out)
    }
}

/// `name(type0,type1,...)` over the canonical types of `params`.
///
/// Event signatures list every parameter, indexed or not.
pub fn signature(name: &str, params: &[Field]) -> String {
    format!("{name}({})", canonical_list(params))
}

/// First 4 bytes of the signature hash.
pub fn selector(hasher: &impl SignatureHasher, signature: &str) -> FixedBytes<4> {
    let hash = hasher.hash(signature.as_bytes());
    FixedBytes::from_slice(&hash[..4])
}

/// Full signature hash of an event, or `None` when the event is anonymous and has no topic 0.
pub fn topic(hasher: &impl SignatureHasher, signature: &str, anonymous: bool) -> Option<B256> {
    (!anonymous).then(|| hasher.hash(signature.as_bytes()))
}
