//! # blend-engine
//!
//! Resource-conversion and asset-recombination engine for the blend subsystem.
//!
//! ## Role in System
//!
//! - **Notification Subscriber**: consumes currency-transfer and asset-transfer
//!   events from the host ledger; never polls
//! - **Command Target**: `register_recipe`, `delete_recipe`, `withdraw_resource`
//! - **Fire-and-Forget Dispatcher**: mint/burn/buy/sell/transfer effects are
//!   scheduled through an outbound port and never awaited
//!
//! ## Event Flow
//!
//! ```text
//! [Token Transfer] ──deposit memo──→ [Resource Ledger] ──BuyResource──→ (external)
//! [Token Transfer] ──sale proceeds──→ [Withdrawal Slot] ──TransferTokens──→ requester
//! [Asset Transfer] ──blend memo──→ [Recipe Book] → [Blend Execution]
//!                                        │
//!                                        ↓
//!                        MintAsset + BurnAsset×n + debit(151)
//! ```
//!
//! ## Atomicity
//!
//! The host ledger applies each handler invocation all-or-nothing. The engine
//! mirrors that contract structurally: every fallible check runs before any
//! store mutation or outbound dispatch.

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;

pub use domain::*;
pub use events::*;
pub use ports::*;
