//! Single-slot pending-withdrawal staging.
//!
//! A withdrawal request and the arrival of its sale proceeds are two
//! independent notifications; this slot carries the requester's identity
//! across that gap.
//!
//! ## Invariants Enforced
//!
//! - INVARIANT-1: at most one withdrawal is in flight; a second request is
//!   rejected, never overwrites the first
//! - INVARIANT-2: `resolve` both reads and clears, so proceeds can only be
//!   forwarded once per staged request

use super::entities::PendingWithdrawal;
use super::errors::BlendError;
use blend_types::AccountName;

/// The single-slot pending withdrawal queue.
#[derive(Debug, Default, Clone)]
pub struct WithdrawalSlot {
    pending: Option<PendingWithdrawal>,
}

impl WithdrawalSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a withdrawal request.
    ///
    /// # Errors
    /// - `WithdrawalAlreadyPending`: an earlier request has not resolved yet
    pub fn stage(&mut self, requester: AccountName, bytes: u64) -> Result<(), BlendError> {
        if let Some(pending) = &self.pending {
            return Err(BlendError::WithdrawalAlreadyPending {
                requester: pending.requester.clone(),
            });
        }
        self.pending = Some(PendingWithdrawal { requester, bytes });
        Ok(())
    }

    /// Reads and removes the sole pending entry.
    ///
    /// Called only from the sale-proceeds notification handler.
    ///
    /// # Errors
    /// - `NoPendingWithdrawal`: the slot is empty
    pub fn resolve(&mut self) -> Result<PendingWithdrawal, BlendError> {
        self.pending.take().ok_or(BlendError::NoPendingWithdrawal)
    }

    /// Returns the staged entry, if any.
    pub fn pending(&self) -> Option<&PendingWithdrawal> {
        self.pending.as_ref()
    }

    /// Returns true if no withdrawal is staged.
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}
