// src/analysis/mod.rs
//! The compliance evaluation core: graphical representation analysis,
//! urban parameter analysis, and report aggregation.
//!
//! Every operation here is a pure function from (catalog copy + input
//! facts) to a result record. Nothing performs I/O and nothing shares
//! mutable state across invocations; adapter outputs arrive as
//! already-resolved values.

pub mod aggregate;
pub mod graphical;
pub mod parameters;

pub use aggregate::aggregate;
pub use graphical::GraphicalAnalysis;
