// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::parsing::parse_address_hex;
use alloy::primitives::Address;
use std::collections::HashMap;

/// Name-service lookup. Returns `None` while a name is unknown or unresolved.
pub trait NameResolver {
    fn resolve_name(&self, name: &str) -> Option<Address>;
}

/// Fixed name table, keyed case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct StaticNameResolver {
    names: HashMap<String, Address>,
}

impl StaticNameResolver {
    pub fn new(names: HashMap<String, Address>) -> Self {
        Self {
            names: names
                .into_iter()
                .map(|(name, addr)| (name.trim().to_ascii_lowercase(), addr))
                .collect(),
        }
    }
}

impl NameResolver for StaticNameResolver {
    fn resolve_name(&self, name: &str) -> Option<Address> {
        self.names.get(&name.trim().to_ascii_lowercase()).copied()
    }
}

/// Where swap proceeds should go, as observed at assembly time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecipientSpec {
    /// No recipient given: proceeds go back to the sender.
    #[default]
    Sender,
    /// An explicit address or name, with whatever the lookup produced so far.
    Named {
        identifier: String,
        resolved: Option<Address>,
    },
}

impl RecipientSpec {
    /// Addresses are taken literally; anything else goes through `resolver`.
    pub fn lookup(identifier: Option<&str>, resolver: &impl NameResolver) -> Self {
        let Some(identifier) = identifier else {
            return RecipientSpec::Sender;
        };
        let resolved = parse_address_hex(identifier.trim())
            .or_else(|| resolver.resolve_name(identifier));
        RecipientSpec::Named {
            identifier: identifier.to_string(),
            resolved,
        }
    }
}

pub fn resolve_recipient(spec: &RecipientSpec, account: Option<Address>) -> Option<Address> {
    match spec {
        RecipientSpec::Sender => account,
        RecipientSpec::Named { resolved, .. } => *resolved,
    }
}
