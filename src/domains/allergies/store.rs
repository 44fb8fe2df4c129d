//! Allergy record lookup.
//!
//! `AllergyStore` is the persistence boundary: handlers only ever see the
//! trait, so the in-memory catalog can be swapped for a real document store
//! without touching the dispatch path.

use async_trait::async_trait;

use super::dataset;
use super::error::AllergyError;
use super::model::{AllergyRecord, Severity};

/// Read-only access to allergy records.
#[async_trait]
pub trait AllergyStore: Send + Sync {
    /// All records, in catalog order.
    async fn all(&self) -> Result<Vec<AllergyRecord>, AllergyError>;

    /// Case-insensitive keyword search over names, descriptions, triggers,
    /// and symptoms, optionally filtered by typical severity.
    async fn search(
        &self,
        query: &str,
        severity: Option<Severity>,
    ) -> Result<Vec<AllergyRecord>, AllergyError>;

    /// Fetch a single record by id.
    async fn get(&self, id: &str) -> Result<AllergyRecord, AllergyError>;

    /// Fetch a single record by display name (or id as a fallback).
    async fn find_by_name(&self, name: &str) -> Result<AllergyRecord, AllergyError>;
}

/// In-memory store backed by the built-in record set.
pub struct InMemoryAllergyStore {
    records: Vec<AllergyRecord>,
}

impl InMemoryAllergyStore {
    /// Create a store seeded with the built-in catalog.
    pub fn new() -> Self {
        Self {
            records: dataset::records(),
        }
    }

    fn record_matches(record: &AllergyRecord, needle: &str) -> bool {
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

        contains(record.name)
            || contains(record.id)
            || contains(record.description)
            || record.common_triggers.iter().any(|t| contains(t))
            || record.symptoms.iter().any(|s| contains(s))
    }
}

impl Default for InMemoryAllergyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AllergyStore for InMemoryAllergyStore {
    async fn all(&self) -> Result<Vec<AllergyRecord>, AllergyError> {
        Ok(self.records.clone())
    }

    async fn search(
        &self,
        query: &str,
        severity: Option<Severity>,
    ) -> Result<Vec<AllergyRecord>, AllergyError> {
        let needle = query.trim().to_lowercase();

        let matches = self
            .records
            .iter()
            .filter(|r| severity.is_none_or(|s| r.severity == s))
            .filter(|r| needle.is_empty() || Self::record_matches(r, &needle))
            .cloned()
            .collect();

        Ok(matches)
    }

    async fn get(&self, id: &str) -> Result<AllergyRecord, AllergyError> {
        self.records
            .iter()
            .find(|r| r.id.eq_ignore_ascii_case(id.trim()))
            .cloned()
            .ok_or_else(|| AllergyError::not_found(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<AllergyRecord, AllergyError> {
        self.records
            .iter()
            .find(|r| r.matches_name(name))
            .cloned()
            .ok_or_else(|| AllergyError::not_found(name))
    }
}
