//! # Statement Ledger
//!
//! This crate is the record source of the dashboard: it supplies normalized
//! `FinancialRecord`s keyed by company and period.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All knowledge of how statements are stored lives here. Callers
//!   see only the `RecordSource` trait.
//! - **Normalize at the Boundary:** Amounts are stored as decimal strings and are
//!   parsed exactly once, when the ledger is loaded. A malformed amount fails the
//!   load instead of surfacing later as a bad metric.
//! - **Explicit Context:** A repository is a plain value that the caller owns and
//!   passes by reference. There is no global handle.
//!
//! ## Public API
//!
//! - `open` / `from_reader`: Load a JSON ledger into a `LedgerRepository`.
//! - `RecordSource`: The lookup interface used by callers.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod loader;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use error::DbError;
pub use loader::{LedgerFile, from_reader, open};
pub use repository::{LedgerRepository, RecordSource};
