// src/lib.rs
//! Compliance engine for checking architectural project submissions against
//! municipal urban-planning regulations.
//!
//! The core pipeline: rule catalogs ([`catalog`]) feed the detection and
//! extraction adapters ([`adapters`]), whose resolved outputs feed the two
//! analyzers ([`analysis::graphical`], [`analysis::parameters`]); the
//! aggregator ([`analysis::aggregate`]) combines their scores into an
//! overall conformity and a three-tier approval classification.

pub mod adapters;
pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod pipeline;
pub mod project;
pub mod reporting;
pub mod store;
pub mod types;
