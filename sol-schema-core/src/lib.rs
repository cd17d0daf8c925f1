// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Core definitions that code generated by `sol-schema` builds on.
//!
//! A generated schema module declares one marker type per selector and topic, one Rust struct per
//! named Solidity struct, and type aliases over [`Call`] and [`Event`] that tie them together.
//! The binary encoding itself is delegated to [`alloy_sol_types`], which is re-exported so
//! generated code only needs to depend on this crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use alloy_primitives;
pub use alloy_sol_types;

pub mod calls;
pub mod errors;
pub mod events;
pub mod structs;

pub use calls::{Call, Selector};
pub use errors::Error;
pub use events::{Event, Topic};
pub use structs::NamedStruct;
