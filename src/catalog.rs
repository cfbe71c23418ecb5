//! Subject registry: subject name → required weekly lesson count.
//!
//! The catalog is long-lived shared state, mutated only through its validated
//! write path. The evolution engine never reads it directly; it takes one
//! immutable [`CatalogSnapshot`] at run start, so concurrent upserts are
//! never observed mid-run.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::error::{Result, TimegenError};

/// Immutable view of the catalog handed to an evolution run.
///
/// Ordered map so gene-pool construction and quota iteration are
/// deterministic under a fixed RNG seed.
pub type CatalogSnapshot = BTreeMap<String, u32>;

/// Shared subject registry.
///
/// Clones share the underlying map; writes go through [`upsert`], which
/// validates at the boundary so a snapshot's invariants (non-empty names,
/// positive counts) always hold.
///
/// [`upsert`]: SubjectCatalog::upsert
#[derive(Debug, Clone, Default)]
pub struct SubjectCatalog {
    subjects: Arc<RwLock<BTreeMap<String, u32>>>,
}

impl SubjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-seeded with the stock curriculum.
    pub fn with_defaults() -> Self {
        let catalog = Self::new();
        {
            let mut subjects = catalog.subjects.write().unwrap();
            subjects.insert("Digital Circuits".to_string(), 4);
            subjects.insert("Data Structures".to_string(), 4);
            subjects.insert("Microprocessors".to_string(), 3);
            subjects.insert("Mathematics".to_string(), 3);
        }
        catalog
    }

    /// Takes an immutable snapshot of the current subjects.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.subjects.read().unwrap().clone()
    }

    /// Adds or replaces a subject, returning the authoritative full snapshot.
    ///
    /// The name is trimmed before insertion. Empty names and zero counts are
    /// rejected here so they can never reach the engine.
    pub fn upsert(&self, name: &str, count: u32) -> Result<CatalogSnapshot> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TimegenError::InvalidName);
        }
        if count == 0 {
            return Err(TimegenError::InvalidCount(count));
        }

        let mut subjects = self.subjects.write().unwrap();
        subjects.insert(trimmed.to_string(), count);
        Ok(subjects.clone())
    }

    pub fn len(&self) -> usize {
        self.subjects.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.read().unwrap().is_empty()
    }
}
