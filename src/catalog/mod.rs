// src/catalog/mod.rs
//! Static rule catalogs: required graphical elements per drawing category
//! and numeric urban parameters per regulation category.
//!
//! The catalog data is hand-authored and versioned with the regulation text
//! it encodes. There is no runtime mutation API: every call returns a fresh
//! independent copy, so callers can mark elements verified or fill in
//! project values without affecting any other analysis run.

mod elements;
mod profiles;

pub use elements::element_catalog;
pub use profiles::parameter_catalog;
