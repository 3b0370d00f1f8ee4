// src/types.rs
//! Shared data records for the compliance engine.
//!
//! Everything here is a plain owned value: analyses take deep copies of
//! catalog data and return fresh records, so concurrent runs never share
//! mutable state. Catalog ids (`pb_cotas`, `recuo_frontal`, ...) are the
//! stable keys shared across every boundary and must not be renamed
//! without a catalog version bump.

use serde::{Deserialize, Serialize};

/// Conformity percentage at or above which a project is approved outright.
pub const APPROVED_THRESHOLD: f64 = 90.0;

/// Conformity percentage at or above which a project is approved with
/// reservations. Below it, the project is rejected.
pub const RESERVATIONS_THRESHOLD: f64 = 70.0;

/// Regulation variant selected by building-use category. Each variant maps
/// to one immutable parameter profile; there is no inheritance between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    ResidentialSingleFamily,
    ResidentialMultiFamily,
    Commercial,
    MixedUse,
    Industrial,
}

impl ProjectType {
    /// Parses a project-type slug, or `None` if unrecognized.
    #[must_use]
    pub fn parse(slug: &str) -> Option<Self> {
        match slug {
            "residential-single-family" => Some(Self::ResidentialSingleFamily),
            "residential-multi-family" => Some(Self::ResidentialMultiFamily),
            "commercial" => Some(Self::Commercial),
            "mixed-use" => Some(Self::MixedUse),
            "industrial" => Some(Self::Industrial),
            _ => None,
        }
    }

    /// Parses a slug, falling back to the single-family residential profile
    /// for unrecognized values. The fallback is an explicit default, not an
    /// error; callers that want to warn should use [`ProjectType::parse`].
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        Self::parse(slug).unwrap_or(Self::ResidentialSingleFamily)
    }

    /// Stable slug for this project type.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::ResidentialSingleFamily => "residential-single-family",
            Self::ResidentialMultiFamily => "residential-multi-family",
            Self::Commercial => "commercial",
            Self::MixedUse => "mixed-use",
            Self::Industrial => "industrial",
        }
    }

    /// Display label for report headers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ResidentialSingleFamily => "Single-family residential",
            Self::ResidentialMultiFamily => "Multi-family residential",
            Self::Commercial => "Commercial",
            Self::MixedUse => "Mixed use",
            Self::Industrial => "Industrial",
        }
    }
}

/// A single graphical item required (or recommended) on a drawing sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphicalElement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub required: bool,
    pub verified: bool,
}

/// A drawing category (floor plan, sections, ...) and its checklist items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementCategory {
    pub id: String,
    pub name: String,
    pub elements: Vec<GraphicalElement>,
}

/// Whether a parameter's project value must be at least (`Minimum`) or at
/// most (`Maximum`) its regulatory reference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    Minimum,
    Maximum,
}

/// A numeric urban parameter with its regulatory reference value.
///
/// `conformant` is derived from `project_value`, `reference_value` and
/// `comparison`; it stays `None` until a project value is supplied and is
/// never set independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrbanParameter {
    pub id: String,
    pub name: String,
    pub description: String,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_value: Option<f64>,
    pub reference_value: f64,
    pub comparison: ComparisonMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conformant: Option<bool>,
}

/// A regulation category (setbacks, occupancy, ...) and its parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterCategory {
    pub id: String,
    pub name: String,
    pub parameters: Vec<UrbanParameter>,
}

/// Result of the graphical representation analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphicalResult {
    /// Post-evaluation copy of the element catalog.
    pub categories: Vec<ElementCategory>,
    /// In `[0, 100]`. Zero when the catalog has no required elements.
    pub conformity_percent: f64,
    /// Required elements still unverified, names qualified as
    /// `"<category> - <element>"`.
    pub missing_required: Vec<GraphicalElement>,
}

impl GraphicalResult {
    /// Returns true if every required element was verified.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_required.is_empty()
    }
}

/// Result of the urban parameter analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterResult {
    /// Post-evaluation copy with `conformant` populated for evaluated entries.
    pub categories: Vec<ParameterCategory>,
    /// In `[0, 100]`. Zero when no parameter has a project value.
    pub conformity_percent: f64,
    /// Evaluated-but-failing parameters, names qualified as
    /// `"<category> - <parameter>"`.
    pub non_conformant: Vec<UrbanParameter>,
}

impl ParameterResult {
    /// Returns true if no evaluated parameter failed its comparison.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.non_conformant.is_empty()
    }
}

/// Three-tier approval classification of the overall report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Approved,
    ApprovedWithReservations,
    Rejected,
}

impl Classification {
    /// Classifies an overall conformity percentage. The bands are exhaustive
    /// and non-overlapping; 90 and 70 belong to the higher band.
    #[must_use]
    pub fn from_conformity(percent: f64) -> Self {
        if percent >= APPROVED_THRESHOLD {
            Self::Approved
        } else if percent >= RESERVATIONS_THRESHOLD {
            Self::ApprovedWithReservations
        } else {
            Self::Rejected
        }
    }

    /// Label shown in report output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::ApprovedWithReservations => "Approved with reservations",
            Self::Rejected => "Rejected",
        }
    }
}

/// Identifying data carried through to the final report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    pub project_type: ProjectType,
}

/// The aggregator's combined output. This is the sole input a rendering or
/// export layer needs; conformity is never recomputed downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallReport {
    pub project: ProjectMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphical: Option<GraphicalResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ParameterResult>,
    pub overall_conformity: f64,
    pub classification: Classification,
}
