//! # Financial Metrics Engine
//!
//! This crate turns one period's financial statements into the dashboard's KPIs:
//! profitability, liquidity, efficiency, leverage and growth.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** This crate has no knowledge of storage or presentation. It
//!   depends only on `core-types`.
//! - **Stateless Calculation:** `MetricsEngine` takes a normalized `FinancialRecord`
//!   (and optionally the comparison period's record) and returns a `MetricSet`.
//!   It holds no state, so one engine can be shared freely across threads.
//! - **Total:** A ratio whose denominator is zero or negative evaluates to zero.
//!   The engine never fails and never produces NaN or infinity.
//!
//! ## Public API
//!
//! - `MetricsEngine`: The calculator.
//! - `MetricSet`: The derived KPIs for one period.
//! - `ChangeSet`: Period-over-period deltas, attached when a comparison period is given.
//! - `HistoryPoint`: A `MetricSet` tagged with its period, for trend views.

pub mod engine;
pub mod report;

pub use engine::MetricsEngine;
pub use report::{ChangeSet, HistoryPoint, MetricCategory, MetricSet};
