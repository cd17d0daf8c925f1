// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Lowered, serializable form of a compilation run.
//!
//! Lowering resolves every entry, hashes its signature, maps its types and picks the identifiers
//! generated code uses. The emitters only format what is recorded here.

use std::collections::{HashMap, HashSet};

use alloy_primitives::{FixedBytes, B256};
use serde::Serialize;

use crate::{
    abi::{Entry, ErrorEntry, Event, Function, Param},
    compiler::LoadedContract,
    diagnostics::{Diagnostic, DiagnosticKind, Diagnostics},
    hash::{self, SignatureHasher},
    native::{NativeType, TypeMapper},
    naming::{camel, field_idents, overload_names, sanitize, type_ident},
    registry::{NamedStruct, StructOrigin, StructRegistry},
    types::{resolve_fields, Field, QualifiedName},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SchemaIr {
    pub structs: Vec<StructIr>,
    pub contracts: Vec<ContractIr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StructIr {
    pub qualified_name: String,
    pub ident: String,
    pub origin: StructOrigin,
    pub fields: Vec<FieldIr>,
    /// Every field type implements `Default`.
    pub derive_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_non_indexed: Option<FromNonIndexed>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldIr {
    pub name: String,
    pub ident: String,
    pub canonical_type: String,
    pub native: NativeType,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub indexed: bool,
}

/// Builds a complete event view from its payload struct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FromNonIndexed {
    /// Identifier of the payload struct.
    pub source: String,
    /// `(target field, source field)` pairs.
    pub copied: Vec<(String, String)>,
    /// Indexed fields, left at their default value.
    pub defaulted: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContractIr {
    pub name: String,
    pub functions: Vec<FunctionIr>,
    pub events: Vec<EventIr>,
    pub errors: Vec<ErrorIr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunctionIr {
    pub name: String,
    pub signature: String,
    pub selector: FixedBytes<4>,
    pub selector_ident: String,
    pub alias_ident: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
    pub inputs: Vec<FieldIr>,
    pub outputs: Vec<FieldIr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventIr {
    pub name: String,
    pub signature: String,
    pub topic: B256,
    pub topic_ident: String,
    pub inputs: Vec<FieldIr>,
    /// Present iff the event has a payload struct.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_ident: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_struct: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorIr {
    pub name: String,
    pub signature: String,
    pub selector: FixedBytes<4>,
    pub selector_ident: String,
    pub inputs: Vec<FieldIr>,
}

/// Widest tuple alloy implements `SolType` for.
const MAX_SCHEMA_ARITY: usize = 24;
/// Widest tuple std implements `Debug` and `PartialEq` for.
const MAX_VALUE_TUPLE_ARITY: usize = 12;

/// Lowers the registry and every loaded contract, in order.
pub fn lower<H: SignatureHasher>(
    contracts: &[LoadedContract],
    registry: &StructRegistry,
    mapper: TypeMapper,
    hasher: &H,
    diags: &mut Diagnostics,
) -> SchemaIr {
    let taken = registry
        .iter_idents()
        .flat_map(|(_, ident)| [ident.to_owned(), format!("{ident}Schema")])
        .collect();
    let mut lowering = Lowering {
        registry,
        mapper,
        hasher,
        diags,
        taken,
    };
    let mut lowered: Vec<_> = registry
        .iter_idents()
        .map(|(record, ident)| (record, lowering.lower_struct(record, ident)))
        .collect();

    let defaultable = defaultable_structs(lowered.iter().map(|(_, ir)| ir));
    for (record, ir) in &mut lowered {
        ir.derive_default = defaultable.contains(&ir.ident);
        if record.origin == StructOrigin::Explicit && record.has_indexed() {
            ir.from_non_indexed = lowering.from_non_indexed(record, &ir.fields, &defaultable);
        }
    }
    let structs = lowered.into_iter().map(|(_, ir)| ir).collect();

    let contracts = contracts
        .iter()
        .map(|contract| lowering.lower_contract(contract))
        .collect();
    SchemaIr { structs, contracts }
}

struct Lowering<'a, H> {
    registry: &'a StructRegistry,
    mapper: TypeMapper,
    hasher: &'a H,
    diags: &'a mut Diagnostics,
    /// Type-level identifiers already emitted.
    taken: HashSet<String>,
}

/// An entry that resolved, before identifiers are assigned.
struct Resolved<'e, T> {
    entry: &'e T,
    inputs: Vec<Field>,
    signature: String,
}

impl<H: SignatureHasher> Lowering<'_, H> {
    fn lower_struct(&mut self, record: &NamedStruct, ident: &str) -> StructIr {
        let QualifiedName { contract, name } = &record.name;
        let fields = self.lower_fields(&record.fields, contract, name);

        // other items refer to the struct, so it is kept and the run fails
        let widest = fields.iter().map(|f| f.native.widest_tuple()).max().unwrap_or_default();
        if fields.len() > MAX_SCHEMA_ARITY || widest > MAX_VALUE_TUPLE_ARITY {
            self.diags.push(
                Diagnostic::error(
                    DiagnosticKind::UnsupportedConstruct,
                    format!(
                        "struct {} has {} field(s) and nested tuples of up to {widest} items; \
                         at most {MAX_SCHEMA_ARITY} fields and {MAX_VALUE_TUPLE_ARITY} tuple \
                         items are supported",
                        record.name,
                        fields.len(),
                    ),
                )
                .in_contract(contract)
                .in_entry(name),
            );
        }

        StructIr {
            qualified_name: record.name.to_string(),
            ident: ident.to_owned(),
            origin: record.origin.clone(),
            fields,
            derive_default: false,
            from_non_indexed: None,
        }
    }

    fn from_non_indexed(
        &mut self,
        record: &NamedStruct,
        fields: &[FieldIr],
        defaultable: &HashSet<String>,
    ) -> Option<FromNonIndexed> {
        match pair_complete(self.registry, &record.name, fields, defaultable) {
            Ok(method) => Some(method),
            Err(reason) => {
                self.diags.push(
                    Diagnostic::warning(
                        DiagnosticKind::UnsupportedConstruct,
                        format!("no from_non_indexed for {}: {reason}", record.name),
                    )
                    .in_contract(&record.name.contract)
                    .in_entry(&record.name.name),
                );
                None
            }
        }
    }

    fn lower_contract(&mut self, contract: &LoadedContract) -> ContractIr {
        let name = contract.name.as_str();
        let mut functions = Vec::new();
        let mut events = Vec::new();
        let mut errors = Vec::new();
        for entry in &contract.entries {
            match entry {
                Entry::Function(function) => functions.push(function),
                Entry::Event(event) => events.push(event),
                Entry::Error(error) => errors.push(error),
                Entry::Other { kind } => log::debug!("{name}: skipping {kind} entry"),
            }
        }

        let functions = self.lower_functions(name, &functions);
        let events = self.lower_events(name, &events);
        let errors = self.lower_errors(name, &errors);
        log::debug!(
            "{name}: {} function(s), {} event(s), {} error(s)",
            functions.len(),
            events.len(),
            errors.len()
        );
        ContractIr {
            name: contract.name.clone(),
            functions,
            events,
            errors,
        }
    }

    fn lower_functions(&mut self, contract: &str, functions: &[&Function]) -> Vec<FunctionIr> {
        let resolved = self.resolve_all(contract, functions, |f| (&f.name, &f.inputs));
        let names = disambiguate(&resolved, |f| &f.name);

        let mut lowered = Vec::new();
        for (item, name) in resolved.into_iter().zip(names) {
            let function = item.entry;
            let outputs = match resolve_fields(&function.outputs) {
                Ok(outputs) => outputs,
                Err(err) => {
                    self.unsupported(contract, &function.name, err.to_string());
                    continue;
                }
            };
            let inputs = self.lower_fields(&item.inputs, contract, &function.name);
            let outputs = self.lower_fields(&outputs, contract, &function.name);
            let widest = inputs
                .iter()
                .chain(&outputs)
                .map(|f| f.native.widest_tuple())
                .fold(inputs.len().max(outputs.len()), usize::max);
            if widest > MAX_SCHEMA_ARITY {
                self.unsupported(
                    contract,
                    &function.name,
                    format!(
                        "{} has a parameter list or tuple of {widest} items; at most \
                         {MAX_SCHEMA_ARITY} are supported",
                        item.signature
                    ),
                );
                continue;
            }
            let selector_ident = format!("Sel_{}_{}", sanitize(contract), sanitize(&camel(&name)));
            lowered.push(FunctionIr {
                name: function.name.clone(),
                selector: hash::selector(self.hasher, &item.signature),
                signature: item.signature,
                selector_ident: self.claim(contract, &function.name, selector_ident),
                alias_ident: self.claim(contract, &function.name, type_ident(contract, &name)),
                state_mutability: function.state_mutability.clone(),
                inputs,
                outputs,
            });
        }
        lowered
    }

    fn lower_events(&mut self, contract: &str, events: &[&Event]) -> Vec<EventIr> {
        let mut named = Vec::new();
        for event in events {
            if !event.anonymous {
                named.push(*event);
                continue;
            }
            if event.non_indexed().next().is_some() {
                self.unsupported(
                    contract,
                    &event.name,
                    "anonymous event with a payload has no topic to bind".into(),
                );
            } else {
                log::debug!("{contract}.{}: skipping anonymous event", event.name);
            }
        }

        let resolved = self.resolve_all(contract, &named, |e| (&e.name, &e.inputs));
        let names = disambiguate(&resolved, |e| &e.name);

        let mut lowered = Vec::new();
        for (item, name) in resolved.into_iter().zip(names) {
            let event = item.entry;
            let data_struct = self
                .registry
                .event_data(contract, &item.signature)
                .and_then(|record| self.registry.ident(&record.name))
                .map(str::to_owned);
            let Some(topic) = hash::topic(self.hasher, &item.signature, event.anonymous) else {
                continue;
            };
            let topic_ident = format!("Topic_{}", type_ident(contract, &name));
            let alias_ident = format!("{}Event", type_ident(contract, &name));
            lowered.push(EventIr {
                name: event.name.clone(),
                topic,
                topic_ident: self.claim(contract, &event.name, topic_ident),
                alias_ident: data_struct
                    .is_some()
                    .then(|| self.claim(contract, &event.name, alias_ident)),
                inputs: self.lower_fields(&item.inputs, contract, &event.name),
                signature: item.signature,
                data_struct,
            });
        }
        lowered
    }

    fn lower_errors(&mut self, contract: &str, errors: &[&ErrorEntry]) -> Vec<ErrorIr> {
        let resolved = self.resolve_all(contract, errors, |e| (&e.name, &e.inputs));
        let names = disambiguate(&resolved, |e| &e.name);

        resolved
            .into_iter()
            .zip(names)
            .map(|(item, name)| {
                let selector_ident = format!("Err_{}", type_ident(contract, &name));
                ErrorIr {
                    name: item.entry.name.clone(),
                    selector: hash::selector(self.hasher, &item.signature),
                    selector_ident: self.claim(contract, &item.entry.name, selector_ident),
                    inputs: self.lower_fields(&item.inputs, contract, &item.entry.name),
                    signature: item.signature,
                }
            })
            .collect()
    }

    /// Resolves the inputs of every entry and drops entries that do not resolve or repeat an
    /// earlier signature.
    fn resolve_all<'e, T>(
        &mut self,
        contract: &str,
        entries: &[&'e T],
        parts: impl Fn(&'e T) -> (&'e String, &'e Vec<Param>),
    ) -> Vec<Resolved<'e, T>> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::new();
        for &entry in entries {
            let (name, params) = parts(entry);
            let inputs = match resolve_fields(params) {
                Ok(inputs) => inputs,
                Err(err) => {
                    self.unsupported(contract, name, err.to_string());
                    continue;
                }
            };
            let signature = hash::signature(name, &inputs);
            if !seen.insert(signature.clone()) {
                self.diags.push(
                    Diagnostic::warning(
                        DiagnosticKind::Duplicate,
                        format!("{signature} is declared more than once"),
                    )
                    .in_contract(contract)
                    .in_entry(name),
                );
                continue;
            }
            resolved.push(Resolved {
                entry,
                inputs,
                signature,
            });
        }
        resolved
    }

    fn lower_fields(&mut self, fields: &[Field], contract: &str, entry: &str) -> Vec<FieldIr> {
        let idents = field_idents(fields.iter().map(|field| field.name.as_str()));
        fields
            .iter()
            .zip(idents)
            .map(|(field, ident)| {
                let native = self.mapper.map(&field.ty, self.registry);
                for raw in native.fallbacks() {
                    self.diags.push(
                        Diagnostic::warning(
                            DiagnosticKind::UnknownPrimitive,
                            format!(
                                "unknown type `{raw}` of `{}` is mapped to uint256",
                                field.name
                            ),
                        )
                        .in_contract(contract)
                        .in_entry(entry),
                    );
                }
                FieldIr {
                    name: field.name.clone(),
                    ident,
                    canonical_type: field.ty.to_string(),
                    native,
                    indexed: field.indexed,
                }
            })
            .collect()
    }

    /// Reserves a type-level identifier, suffixing it when already taken.
    fn claim(&mut self, contract: &str, entry: &str, ident: String) -> String {
        if self.taken.insert(ident.clone()) {
            return ident;
        }
        let mut n = 2;
        let unique = loop {
            let candidate = format!("{ident}_{n}");
            if self.taken.insert(candidate.clone()) {
                break candidate;
            }
            n += 1;
        };
        self.diags.push(
            Diagnostic::warning(
                DiagnosticKind::Duplicate,
                format!("identifier {ident} is already taken; using {unique}"),
            )
            .in_contract(contract)
            .in_entry(entry),
        );
        unique
    }

    fn unsupported(&mut self, contract: &str, entry: &str, message: String) {
        self.diags.push(
            Diagnostic::warning(DiagnosticKind::UnsupportedConstruct, message)
                .in_contract(contract)
                .in_entry(entry),
        );
    }
}

/// Pairs `<X>CompleteEventData` with the `<X>EventData` payload struct of the same contract.
///
/// Every non-indexed field must appear in the payload under the same name and type.
fn pair_complete(
    registry: &StructRegistry,
    name: &QualifiedName,
    fields: &[FieldIr],
    defaultable: &HashSet<String>,
) -> Result<FromNonIndexed, String> {
    let base = name
        .name
        .strip_suffix("CompleteEventData")
        .ok_or("name does not end in CompleteEventData")?;
    let paired = QualifiedName::new(&name.contract, format!("{base}EventData"));
    let source = registry
        .get(&paired)
        .ok_or_else(|| format!("{paired} is not registered"))?;
    let source_idents = field_idents(source.fields.iter().map(|f| f.name.as_str()));
    let source_fields: HashMap<_, _> = source
        .fields
        .iter()
        .zip(source_idents)
        .map(|(field, ident)| (field.name.as_str(), (field.ty.to_string(), ident)))
        .collect();

    let mut copied = Vec::new();
    let mut defaulted = Vec::new();
    for field in fields {
        if field.indexed {
            if !field.native.has_default(defaultable) {
                return Err(format!("indexed field `{}` has no default value", field.name));
            }
            defaulted.push(field.ident.clone());
            continue;
        }
        match source_fields.get(field.name.as_str()) {
            Some((ty, ident)) if *ty == field.canonical_type => {
                copied.push((field.ident.clone(), ident.clone()));
            }
            _ => {
                return Err(format!(
                    "{paired} has no field `{} {}`",
                    field.canonical_type, field.name
                ))
            }
        }
    }
    let source_ident = registry
        .ident(&paired)
        .ok_or_else(|| format!("{paired} is not registered"))?;
    Ok(FromNonIndexed {
        source: source_ident.to_owned(),
        copied,
        defaulted,
    })
}

/// Identifiers of the structs whose fields all implement `Default`.
fn defaultable_structs<'a>(structs: impl Iterator<Item = &'a StructIr> + Clone) -> HashSet<String> {
    let mut defaultable: HashSet<_> = structs.clone().map(|s| s.ident.clone()).collect();
    loop {
        let blocked: Vec<_> = structs
            .clone()
            .filter(|s| defaultable.contains(&s.ident))
            .filter(|s| !s.fields.iter().all(|f| f.native.has_default(&defaultable)))
            .map(|s| s.ident.clone())
            .collect();
        if blocked.is_empty() {
            return defaultable;
        }
        for ident in blocked {
            defaultable.remove(&ident);
        }
    }
}

/// Overload-disambiguated names, one per resolved entry.
fn disambiguate<'e, T>(
    resolved: &[Resolved<'e, T>],
    name: impl Fn(&'e T) -> &'e String,
) -> Vec<String> {
    let pairs: Vec<_> = resolved
        .iter()
        .map(|item| (name(item.entry).as_str(), item.signature.as_str()))
        .collect();
    overload_names(&pairs)
}
