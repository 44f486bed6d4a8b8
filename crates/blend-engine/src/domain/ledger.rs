//! Per-collection resource-balance accounting.
//!
//! ## Invariants Enforced
//!
//! - INVARIANT-1: balances never go negative (debit checks before subtracting)
//! - INVARIANT-2: a record debited to exactly zero is deleted, never kept

use super::entities::ResourceBalance;
use super::errors::BlendError;
use blend_types::CollectionName;
use std::collections::BTreeMap;

/// Keyed store of pre-paid resource bytes, one record per collection.
#[derive(Debug, Default, Clone)]
pub struct ResourceLedger {
    balances: BTreeMap<CollectionName, u64>,
}

impl ResourceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `bytes` to a collection's balance, creating the record if absent.
    pub fn credit(&mut self, collection: &CollectionName, bytes: u64) {
        let balance = self.balances.entry(collection.clone()).or_insert(0);
        *balance = balance.saturating_add(bytes);
    }

    /// Subtracts `bytes` from a collection's balance.
    ///
    /// Deletes the record when the result is exactly zero.
    ///
    /// # Errors
    /// - `CollectionNotFound`: no balance record exists
    /// - `InsufficientResource`: balance is below `bytes`
    pub fn debit(&mut self, collection: &CollectionName, bytes: u64) -> Result<(), BlendError> {
        let balance = self
            .balances
            .get_mut(collection)
            .ok_or_else(|| BlendError::CollectionNotFound(collection.clone()))?;
        if *balance < bytes {
            return Err(BlendError::InsufficientResource {
                collection: collection.clone(),
                required: bytes,
                available: *balance,
            });
        }
        *balance -= bytes;
        if *balance == 0 {
            self.balances.remove(collection);
        }
        Ok(())
    }

    /// Read-only lookup; an absent record reads as zero.
    pub fn available(&self, collection: &CollectionName) -> u64 {
        self.balances.get(collection).copied().unwrap_or(0)
    }

    /// Lookup that requires the record to exist.
    ///
    /// # Errors
    /// - `CollectionNotFound`: no balance record exists
    pub fn balance(&self, collection: &CollectionName) -> Result<u64, BlendError> {
        self.balances
            .get(collection)
            .copied()
            .ok_or_else(|| BlendError::CollectionNotFound(collection.clone()))
    }

    /// Returns true if a balance record exists for the collection.
    pub fn contains(&self, collection: &CollectionName) -> bool {
        self.balances.contains_key(collection)
    }

    /// Iterates all balance records.
    pub fn iter(&self) -> impl Iterator<Item = ResourceBalance> + '_ {
        self.balances.iter().map(|(collection, bytes)| ResourceBalance {
            collection: collection.clone(),
            bytes: *bytes,
        })
    }

    /// Number of balance records.
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Returns true if no balance records exist.
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}
