// src/analysis/graphical.rs
//! Graphical representation analysis: merges detected and manually-confirmed
//! elements against the checklist and scores conformity over the required
//! ones.
//!
//! Detection merge is additive only — once an element is verified, another
//! detection pass can never unset it (protects against flicker from
//! non-deterministic detectors). Manual verification is the one
//! bidirectional path: it can both set and unset, which is how a reviewer
//! corrects a detector's false positive.

use std::collections::BTreeSet;

use crate::catalog;
use crate::error::{PlancheckError, Result};
use crate::types::{ElementCategory, GraphicalResult};

/// One analysis run over a fresh copy of the element checklist.
#[derive(Debug, Clone)]
pub struct GraphicalAnalysis {
    categories: Vec<ElementCategory>,
}

impl GraphicalAnalysis {
    /// Seeds the analysis from the element catalog, nothing verified yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: catalog::element_catalog(),
        }
    }

    /// Marks every element whose id appears in `ids` as verified.
    /// Ids not present in the checklist are ignored; already-verified
    /// elements stay verified.
    pub fn apply_detection(&mut self, ids: &BTreeSet<String>) {
        for category in &mut self.categories {
            for element in &mut category.elements {
                if ids.contains(&element.id) {
                    element.verified = true;
                }
            }
        }
    }

    /// Sets or unsets a single element's verified flag and re-evaluates.
    ///
    /// # Errors
    ///
    /// Returns `UnknownElement` (with no state change) if `element_id` is
    /// not in the checklist.
    pub fn set_manual_verification(
        &mut self,
        element_id: &str,
        verified: bool,
    ) -> Result<GraphicalResult> {
        let element = self
            .categories
            .iter_mut()
            .flat_map(|c| c.elements.iter_mut())
            .find(|e| e.id == element_id);

        let Some(element) = element else {
            return Err(PlancheckError::UnknownElement {
                id: element_id.to_string(),
            });
        };
        element.verified = verified;
        Ok(self.evaluate())
    }

    /// Scores the current state: conformity over required elements and the
    /// list of required elements still unverified.
    ///
    /// A checklist with zero required elements scores 0, not 100 — absence
    /// of requirements is never treated as full compliance.
    #[must_use]
    pub fn evaluate(&self) -> GraphicalResult {
        let mut total_required = 0_usize;
        let mut verified_required = 0_usize;
        let mut missing_required = Vec::new();

        for category in &self.categories {
            for element in &category.elements {
                if !element.required {
                    continue;
                }
                total_required += 1;
                if element.verified {
                    verified_required += 1;
                } else {
                    let mut missing = element.clone();
                    missing.name = format!("{} - {}", category.name, element.name);
                    missing_required.push(missing);
                }
            }
        }

        let conformity_percent = if total_required > 0 {
            verified_required as f64 / total_required as f64 * 100.0
        } else {
            0.0
        };

        GraphicalResult {
            categories: self.categories.clone(),
            conformity_percent,
            missing_required,
        }
    }
}

impl Default for GraphicalAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot analysis: union of detected and manually-confirmed ids against
/// a fresh checklist copy. Manual confirmation and automatic detection are
/// equally authoritative here.
#[must_use]
pub fn analyze(detected: &BTreeSet<String>, confirmed: &BTreeSet<String>) -> GraphicalResult {
    let mut analysis = GraphicalAnalysis::new();
    analysis.apply_detection(detected);
    analysis.apply_detection(confirmed);
    analysis.evaluate()
}
