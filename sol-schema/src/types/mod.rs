// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Typed representation of ABI parameter types.
//!
//! Raw `type` strings are parsed once into an [`AbiType`]. Everything downstream, including the
//! canonical strings that selectors and topics are hashed from, is derived from that tree.

use std::fmt;

use crate::abi::Param;

pub use parser::{TypeError, TypeExpr};
pub use resolve::{resolve, resolve_fields, struct_annotation};
pub use scalar::Scalar;

mod parser;
mod resolve;
mod scalar;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbiType {
    Scalar(Scalar),
    FixedArray(Box<AbiType>, usize),
    DynArray(Box<AbiType>),
    Tuple(Vec<Field>),
    /// A tuple annotated with a qualified struct name.
    Named(StructRef),
}

/// A tuple member, function argument or event parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Declared name, possibly empty.
    pub name: String,
    pub ty: AbiType,
    pub indexed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructRef {
    pub name: QualifiedName,
    pub fields: Vec<Field>,
}

/// `Contract.Name` pair identifying a struct across all compiled contracts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    pub contract: String,
    pub name: String,
}

impl QualifiedName {
    pub fn new(contract: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            contract: contract.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.contract, self.name)
    }
}

impl AbiType {
    /// Members of the tuple or struct, if this is one.
    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            Self::Tuple(fields) => Some(fields),
            Self::Named(named) => Some(&named.fields),
            _ => None,
        }
    }

    /// Calls `f` for every named struct in the type, outer structs before the structs they contain.
    pub fn for_each_named<'a>(&'a self, f: &mut impl FnMut(&'a StructRef)) {
        match self {
            Self::Scalar(_) => {}
            Self::FixedArray(inner, _) | Self::DynArray(inner) => inner.for_each_named(f),
            Self::Tuple(fields) => fields.iter().for_each(|field| field.ty.for_each_named(f)),
            Self::Named(named) => {
                f(named);
                named.fields.iter().for_each(|field| field.ty.for_each_named(f));
            }
        }
    }

    /// Calls `f` for every scalar in the type.
    pub fn for_each_scalar<'a>(&'a self, f: &mut impl FnMut(&'a Scalar)) {
        match self {
            Self::Scalar(scalar) => f(scalar),
            Self::FixedArray(inner, _) | Self::DynArray(inner) => inner.for_each_scalar(f),
            Self::Tuple(fields) => fields.iter().for_each(|field| field.ty.for_each_scalar(f)),
            Self::Named(named) => named.fields.iter().for_each(|field| field.ty.for_each_scalar(f)),
        }
    }
}

/// Renders the canonical type string.
impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => write!(f, "{scalar}"),
            Self::FixedArray(inner, len) => write!(f, "{inner}[{len}]"),
            Self::DynArray(inner) => write!(f, "{inner}[]"),
            Self::Tuple(fields) => write!(f, "({})", canonical_list(fields)),
            Self::Named(named) => write!(f, "({})", canonical_list(&named.fields)),
        }
    }
}

/// Comma-joined canonical types of `fields`.
pub fn canonical_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.ty.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Canonical type of a parameter, with tuple components fully expanded.
pub fn canonical_type(param: &Param) -> Result<String, TypeError> {
    Ok(resolve(param)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple_param(ty: &str, components: Vec<Param>) -> Param {
        Param {
            components,
            ..Param::new("", ty)
        }
    }

    #[test]
    fn canonicalizes_scalars_unchanged() {
        for ty in ["address", "uint256", "bytes32[]", "int24[3][]", "string", "fixed128x18"] {
            assert_eq!(canonical_type(&Param::new("x", ty)).unwrap(), ty);
        }
    }

    #[test]
    fn expands_tuple_components() {
        let call = tuple_param(
            "tuple[]",
            vec![Param::new("target", "address"), Param::new("callData", "bytes")],
        );
        assert_eq!(canonical_type(&call).unwrap(), "(address,bytes)[]");

        let nested = tuple_param(
            "tuple",
            vec![
                Param::new("ok", "bool"),
                tuple_param("tuple[2][]", vec![Param::new("a", "uint8")]),
            ],
        );
        assert_eq!(canonical_type(&nested).unwrap(), "(bool,(uint8)[2][])");
        assert_eq!(canonical_type(&tuple_param("tuple", vec![])).unwrap(), "()");
    }

    #[test]
    fn canonicalization_is_deterministic() {
        let param = tuple_param(
            "tuple[][2]",
            vec![Param::new("a", "uint256[][2]"), Param::new("b", "bytes")],
        );
        assert_eq!(canonical_type(&param), canonical_type(&param.clone()));
        assert_eq!(
            canonical_type(&param).unwrap(),
            "(uint256[][2],bytes)[][2]"
        );
    }

    #[test]
    fn walks_named_structs_outer_first() {
        let mut inner = tuple_param("tuple", vec![Param::new("a", "uint8")]);
        inner.internal_type = Some("struct Pool.Inner".into());
        let mut outer = tuple_param("tuple[]", vec![inner]);
        outer.internal_type = Some("struct Pool.Outer[]".into());

        let ty = resolve(&outer).unwrap();
        let mut seen = vec![];
        ty.for_each_named(&mut |named| seen.push(named.name.to_string()));
        assert_eq!(seen, ["Pool.Outer", "Pool.Inner"]);
    }
}
