pub mod error;
pub mod ids;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use ids::{CompanyId, Period};
pub use structs::{Company, FinancialRecord, RawAmount, StatementEntry};
