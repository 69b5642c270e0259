// src/storage/memory.rs

use std::collections::HashMap;
use crate::types::UserRecord;
use log::debug;

/// An in-memory user "database" keyed by login identifier (email or phone).
///
/// Entries live for as long as the store does. There is no uniqueness
/// enforcement beyond the natural key: inserting under an existing identifier
/// replaces the stored record and hands the old one back.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: HashMap<String, UserRecord>,
}

impl MemoryUserStore {
    /// Creates a new, empty `MemoryUserStore`.
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Whether a record is stored under `identifier`.
    pub fn contains(&self, identifier: &str) -> bool {
        self.users.contains_key(identifier)
    }

    /// Stores `record` under `identifier`, returning the record it replaced.
    pub fn insert(&mut self, identifier: impl Into<String>, record: UserRecord) -> Option<UserRecord> {
        let identifier = identifier.into();
        debug!("Storing profile for {} under '{}'", record.name, identifier);
        self.users.insert(identifier, record)
    }

    /// Looks up the record stored under `identifier`.
    pub fn get(&self, identifier: &str) -> Option<&UserRecord> {
        self.users.get(identifier)
    }

    /// Number of stored identifiers.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Checks if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All stored identifiers, sorted.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.users.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
