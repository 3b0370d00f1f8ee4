// src/adapters.rs
//! External collaborator boundary: element detection and parameter
//! extraction.
//!
//! Real implementations plug OCR, vision, or CAD parsing in behind these
//! traits. The analyzers never call them directly — they accept the
//! adapters' outputs as already-resolved values, so timeout and retry
//! policy belongs entirely on this side of the boundary.
//!
//! The simulated implementations shipped here stand in for a real pipeline
//! during development and demos. They are simulation only: random dropout
//! and jitter, not an algorithm.

use std::collections::BTreeSet;
use std::path::PathBuf;

use rand::Rng;

use crate::catalog;
use crate::error::Result;
use crate::types::{ParameterCategory, ProjectType};

/// Detects which checklist elements are present in the submitted files.
pub trait ElementDetector {
    /// Returns the set of detected element ids.
    ///
    /// # Errors
    ///
    /// Returns `PlancheckError::Detection` on failure. Callers must treat
    /// a failure as "zero elements detected", not as a fatal condition.
    fn detect(&self, files: &[PathBuf], project_type: ProjectType) -> Result<BTreeSet<String>>;
}

/// Extracts numeric parameter values from the submitted files.
pub trait ParameterExtractor {
    /// Returns the parameter catalog for `project_type` with project values
    /// populated where extraction succeeded.
    ///
    /// # Errors
    ///
    /// Returns `PlancheckError::Extraction` on failure. Callers must treat
    /// a failure as "no values extracted", not as a fatal condition.
    fn extract(&self, files: &[PathBuf], project_type: ProjectType)
        -> Result<Vec<ParameterCategory>>;
}

/// Element ids a complete, well-drawn submission would plausibly yield.
/// The simulated detector samples from this list; the five ids absent from
/// it stand in for elements real detectors tend to miss.
const DETECTABLE_IDS: &[&str] = &[
    "pb_cotas",
    "pb_norte",
    "pb_ambientes",
    "pb_areas",
    "pb_esquadrias",
    "corte_cotas_verticais",
    "corte_niveis",
    "corte_altura_edificacao",
    "fachada_niveis",
    "fachada_altura_total",
    "impl_recuos",
    "impl_norte",
    "impl_dimensoes_terreno",
    "impl_area_permeavel",
    "qa_area_terreno",
    "qa_area_construida",
    "qa_area_permeavel",
    "qa_taxa_ocupacao",
    "qa_coef_aproveitamento",
    "carimbo_titulo",
    "carimbo_proprietario",
    "carimbo_responsavel",
    "carimbo_escala",
    "carimbo_data",
];

/// Simulated detector: drops each candidate id independently with
/// probability `dropout`.
#[derive(Debug, Clone)]
pub struct SimulatedDetector {
    pub dropout: f64,
}

impl SimulatedDetector {
    #[must_use]
    pub fn new() -> Self {
        Self { dropout: 0.3 }
    }
}

impl Default for SimulatedDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementDetector for SimulatedDetector {
    fn detect(&self, _files: &[PathBuf], _project_type: ProjectType) -> Result<BTreeSet<String>> {
        let mut rng = rand::thread_rng();
        Ok(DETECTABLE_IDS
            .iter()
            .filter(|_| rng.gen::<f64>() >= self.dropout)
            .map(|id| (*id).to_string())
            .collect())
    }
}

/// Simulated extractor: populates every parameter with its reference value
/// plus uniform jitter of up to `jitter` (as a fraction), clamped at zero
/// and rounded to one decimal.
#[derive(Debug, Clone)]
pub struct SimulatedExtractor {
    pub jitter: f64,
}

impl SimulatedExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self { jitter: 0.2 }
    }
}

impl Default for SimulatedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterExtractor for SimulatedExtractor {
    fn extract(
        &self,
        _files: &[PathBuf],
        project_type: ProjectType,
    ) -> Result<Vec<ParameterCategory>> {
        let mut categories = catalog::parameter_catalog(project_type);
        let mut rng = rand::thread_rng();
        for category in &mut categories {
            for parameter in &mut category.parameters {
                let spread = parameter.reference_value * self.jitter;
                let raw = parameter.reference_value + rng.gen_range(-1.0..1.0) * spread;
                let value = (raw.max(0.0) * 10.0).round() / 10.0;
                parameter.project_value = Some(value);
            }
        }
        Ok(categories)
    }
}
