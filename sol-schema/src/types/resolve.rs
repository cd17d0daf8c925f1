// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use super::{AbiType, Field, QualifiedName, Scalar, StructRef, TypeError, TypeExpr};
use crate::abi::Param;

/// Resolves a parameter descriptor into its typed form.
///
/// A `tuple` base takes its members from `components` and becomes [`AbiType::Named`] when
/// `internalType` carries a qualified struct annotation. Array dimensions are applied innermost
/// first, so the rightmost suffix of the raw type ends up outermost.
pub fn resolve(param: &Param) -> Result<AbiType, TypeError> {
    let expr = TypeExpr::parse(&param.ty)?;
    let (base, dims) = expr.split_dims();

    let mut ty = match base {
        TypeExpr::Ident(ident) if ident == "tuple" => {
            let fields = resolve_fields(&param.components)?;
            match struct_annotation(param)? {
                Some(name) => AbiType::Named(StructRef { name, fields }),
                None => AbiType::Tuple(fields),
            }
        }
        _ if !param.components.is_empty() => {
            return Err(TypeError::ComponentsOnNonTuple {
                ty: param.ty.clone(),
            })
        }
        base => from_expr(base),
    };
    for dim in dims {
        ty = wrap(ty, dim);
    }
    Ok(ty)
}

/// Resolves a parameter list into fields, keeping names and `indexed` markers.
pub fn resolve_fields(params: &[Param]) -> Result<Vec<Field>, TypeError> {
    params
        .iter()
        .map(|param| {
            Ok(Field {
                name: param.name.clone(),
                ty: resolve(param)?,
                indexed: param.is_indexed(),
            })
        })
        .collect()
}

/// Types spelled out in full, e.g. `(address,bytes)[]`. Members carry no names.
fn from_expr(expr: &TypeExpr) -> AbiType {
    match expr {
        TypeExpr::Ident(ident) if ident == "tuple" => AbiType::Tuple(Vec::new()),
        TypeExpr::Ident(ident) => AbiType::Scalar(Scalar::classify(ident)),
        TypeExpr::Tuple(items) => AbiType::Tuple(
            items
                .iter()
                .map(|item| Field {
                    name: String::new(),
                    ty: from_expr(item),
                    indexed: false,
                })
                .collect(),
        ),
        TypeExpr::Array(inner, len) => wrap(from_expr(inner), *len),
    }
}

fn wrap(inner: AbiType, dim: Option<usize>) -> AbiType {
    match dim {
        Some(len) => AbiType::FixedArray(Box::new(inner), len),
        None => AbiType::DynArray(Box::new(inner)),
    }
}

/// Qualified struct name from an `internalType` such as `struct Multicall3.Call[]`.
///
/// Returns `None` when the parameter is not annotated as a struct, or the struct is declared
/// outside any contract (`struct Call`). Such tuples stay anonymous.
pub fn struct_annotation(param: &Param) -> Result<Option<QualifiedName>, TypeError> {
    let Some(annotation) = param
        .internal_type
        .as_deref()
        .and_then(|internal| internal.strip_prefix("struct "))
    else {
        return Ok(None);
    };
    let bare = annotation
        .split_once('[')
        .map_or(annotation, |(bare, _)| bare)
        .trim();
    let Some((contract, name)) = bare.split_once('.') else {
        return Ok(None);
    };
    if !is_ident(contract) || !is_ident(name) {
        return Err(TypeError::BadStructAnnotation(annotation.to_owned()));
    }
    Ok(Some(QualifiedName::new(contract, name)))
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
