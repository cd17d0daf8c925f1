// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Named structs shared by every contract of a compilation run.
//!
//! The registry is filled by two passes over all loaded entries before anything is lowered:
//! [`StructRegistry::discover_explicit`] collects structs annotated in `internalType`, then
//! [`StructRegistry::synthesize_event_data`] adds one struct per event payload. Records keep
//! insertion order, which is the order structs are emitted in.
//!
//! Each record is also given its Rust identifier on insertion. Identifiers are derived from the
//! qualified name but are not injective (`A.B_C` and `A_B.C`), so later records get a numeric
//! suffix and every consumer looks the identifier up here.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::{
    abi::Entry,
    config::CollisionPolicy,
    diagnostics::{Diagnostic, DiagnosticKind, Diagnostics},
    error::{Error, Result},
    hash,
    naming::{overload_names, pascal, type_ident},
    types::{canonical_list, resolve, resolve_fields, Field, QualifiedName},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructOrigin {
    /// Declared in Solidity and referenced through `internalType`.
    Explicit,
    /// Payload of the named event, synthesized from its non-indexed parameters.
    EventData { event: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedStruct {
    pub name: QualifiedName,
    pub fields: Vec<Field>,
    pub origin: StructOrigin,
}

impl NamedStruct {
    /// Field names, canonical types and indexed markers. Two records are the same struct iff their
    /// shapes are equal.
    pub fn shape(&self) -> String {
        shape(&self.fields)
    }

    pub fn has_indexed(&self) -> bool {
        self.fields.iter().any(|field| field.indexed)
    }
}

fn shape(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| {
            let indexed = if field.indexed { " indexed" } else { "" };
            format!("{}{indexed} {}", field.ty, field.name)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of [`StructRegistry::register`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    Inserted,
    /// An identical record was already present.
    Duplicate,
    /// A record with a different shape was already present and kept.
    Conflict { existing: String, incoming: String },
}

#[derive(Debug, Default)]
pub struct StructRegistry {
    structs: Vec<NamedStruct>,
    /// Rust identifier of each record, same order as `structs`.
    idents: Vec<String>,
    index: HashMap<QualifiedName, usize>,
    taken: HashSet<String>,
    /// Payload struct of each event, keyed by contract and event signature.
    payloads: HashMap<(String, String), usize>,
    policy: CollisionPolicy,
}

impl StructRegistry {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Registers a struct unless one with the same qualified name exists.
    ///
    /// Re-registering a different shape keeps the first record. Under
    /// [`CollisionPolicy::FirstWins`] that is reported as [`Registration::Conflict`], under
    /// [`CollisionPolicy::Strict`] it fails the run.
    pub fn register(&mut self, record: NamedStruct) -> Result<Registration> {
        let Some(&existing) = self.index.get(&record.name) else {
            let ident = self.claim_ident(&record.name);
            log::debug!("registered struct {} as {ident}", record.name);
            self.index.insert(record.name.clone(), self.structs.len());
            self.structs.push(record);
            self.idents.push(ident);
            return Ok(Registration::Inserted);
        };

        let existing = self.structs[existing].shape();
        let incoming = record.shape();
        if existing == incoming {
            return Ok(Registration::Duplicate);
        }
        match self.policy {
            CollisionPolicy::Strict => Err(Error::StructCollision {
                name: record.name.to_string(),
                existing,
                incoming,
            }),
            CollisionPolicy::FirstWins => Ok(Registration::Conflict { existing, incoming }),
        }
    }

    /// Picks an identifier no earlier record uses, including its `Schema` alias.
    fn claim_ident(&mut self, name: &QualifiedName) -> String {
        let base = type_ident(&name.contract, &name.name);
        let mut ident = base.clone();
        let mut n = 2;
        while self.taken.contains(&ident) || self.taken.contains(&format!("{ident}Schema")) {
            ident = format!("{base}_{n}");
            n += 1;
        }
        self.taken.insert(format!("{ident}Schema"));
        self.taken.insert(ident.clone());
        ident
    }

    fn register_from(
        &mut self,
        record: NamedStruct,
        contract: &str,
        entry: &str,
        diags: &mut Diagnostics,
    ) -> Result<()> {
        let name = record.name.clone();
        match self.register(record)? {
            Registration::Conflict { existing, incoming } => diags.push(
                Diagnostic::warning(
                    DiagnosticKind::StructCollision,
                    format!("struct {name} redefined as ({incoming}); keeping ({existing})"),
                )
                .in_contract(contract)
                .in_entry(entry),
            ),
            Registration::Inserted => {
                let base = type_ident(&name.contract, &name.name);
                let ident = self.ident(&name).unwrap_or_default();
                if ident != base {
                    diags.push(
                        Diagnostic::warning(
                            DiagnosticKind::Duplicate,
                            format!("identifier {base} is already taken; struct {name} is {ident}"),
                        )
                        .in_contract(contract)
                        .in_entry(entry),
                    );
                }
            }
            Registration::Duplicate => {}
        }
        Ok(())
    }

    /// Registers every struct annotated in the entries' parameters, walking into nested tuples and
    /// arrays.
    ///
    /// Entries whose types do not resolve are skipped here; lowering reports them.
    pub fn discover_explicit(
        &mut self,
        contract: &str,
        entries: &[Entry],
        diags: &mut Diagnostics,
    ) -> Result<()> {
        for entry in entries {
            let Some(entry_name) = entry.name() else {
                continue;
            };
            let resolved: Result<Vec<_>, _> = entry.params().map(resolve).collect();
            let types = match resolved {
                Ok(types) => types,
                Err(err) => {
                    log::debug!("{contract}.{entry_name}: skipping struct discovery: {err}");
                    continue;
                }
            };

            let mut found = Vec::new();
            for ty in &types {
                ty.for_each_named(&mut |named| found.push(named.clone()));
            }
            for named in found {
                let record = NamedStruct {
                    name: named.name,
                    fields: named.fields,
                    origin: StructOrigin::Explicit,
                };
                self.register_from(record, contract, entry_name, diags)?;
            }
        }
        Ok(())
    }

    /// Registers a payload struct for every non-anonymous event with at least one non-indexed
    /// parameter.
    ///
    /// Payloads are named `<Contract>.<Event>EventData`. When an explicit struct or another
    /// payload already holds that name, the payload is registered under a suffixed name instead,
    /// so an event is never bound to a struct it does not describe.
    pub fn synthesize_event_data(
        &mut self,
        contract: &str,
        entries: &[Entry],
        diags: &mut Diagnostics,
    ) -> Result<()> {
        let events: Vec<_> = entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Event(event) if !event.anonymous => {
                    let fields = resolve_fields(&event.inputs).ok()?;
                    Some((event, fields))
                }
                _ => None,
            })
            .collect();
        let signatures: Vec<_> = events
            .iter()
            .map(|(event, fields)| hash::signature(&event.name, fields))
            .collect();
        let pairs: Vec<_> = events
            .iter()
            .zip(&signatures)
            .map(|((event, _), signature)| (event.name.as_str(), signature.as_str()))
            .collect();

        let names = overload_names(&pairs);
        for (((event, fields), signature), name) in events.iter().zip(signatures).zip(names) {
            let key = (contract.to_owned(), signature);
            let payload: Vec<_> = fields.iter().filter(|field| !field.indexed).cloned().collect();
            if payload.is_empty() || self.payloads.contains_key(&key) {
                continue;
            }

            let preferred = event_data_name(contract, &name);
            let mut qualified = preferred.clone();
            let mut n = 2;
            while self.contains(&qualified) {
                qualified = QualifiedName::new(contract, format!("{}_{n}", preferred.name));
                n += 1;
            }
            if qualified != preferred {
                diags.push(
                    Diagnostic::warning(
                        DiagnosticKind::Duplicate,
                        format!("{preferred} is already taken; payload of {} is {qualified}", key.1),
                    )
                    .in_contract(contract)
                    .in_entry(&event.name),
                );
            }

            let record = NamedStruct {
                name: qualified,
                fields: payload,
                origin: StructOrigin::EventData {
                    event: event.name.clone(),
                },
            };
            self.register_from(record, contract, &event.name, diags)?;
            self.payloads.insert(key, self.structs.len() - 1);
        }
        Ok(())
    }

    pub fn get(&self, name: &QualifiedName) -> Option<&NamedStruct> {
        self.index.get(name).map(|&i| &self.structs[i])
    }

    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.index.contains_key(name)
    }

    /// Rust identifier of a registered struct.
    pub fn ident(&self, name: &QualifiedName) -> Option<&str> {
        self.index.get(name).map(|&i| self.idents[i].as_str())
    }

    /// Payload struct synthesized for the event with `signature` in `contract`.
    pub fn event_data(&self, contract: &str, signature: &str) -> Option<&NamedStruct> {
        self.payloads
            .get(&(contract.to_owned(), signature.to_owned()))
            .map(|&i| &self.structs[i])
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedStruct> {
        self.structs.iter()
    }

    /// Records in insertion order, with their Rust identifiers.
    pub fn iter_idents(&self) -> impl Iterator<Item = (&NamedStruct, &str)> {
        self.structs.iter().zip(self.idents.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.structs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }
}

/// Qualified name of an event's payload struct. `event` is the disambiguated event name.
pub fn event_data_name(contract: &str, event: &str) -> QualifiedName {
    QualifiedName::new(contract, format!("{}EventData", pascal(event)))
}

impl std::fmt::Display for NamedStruct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, canonical_list(&self.fields))
    }
}
