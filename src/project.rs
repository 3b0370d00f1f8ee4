// src/project.rs
//! Project submission records: what a professional submits for review and
//! where it stands in the review lifecycle.

use serde::{Deserialize, Serialize};

use crate::store;
use crate::types::{Classification, ProjectType};

/// Review lifecycle status. A project starts pending; saving an analysis
/// report advances it to the report's classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Pending,
    Approved,
    ApprovedWithReservations,
    Rejected,
}

impl ProjectStatus {
    #[must_use]
    pub fn from_classification(classification: Classification) -> Self {
        match classification {
            Classification::Approved => Self::Approved,
            Classification::ApprovedWithReservations => Self::ApprovedWithReservations,
            Classification::Rejected => Self::Rejected,
        }
    }

    /// Label shown in listings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending analysis",
            Self::Approved => "Approved",
            Self::ApprovedWithReservations => "Approved with reservations",
            Self::Rejected => "Rejected",
        }
    }
}

/// One file of the submission, as recorded at upload time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionFile {
    pub name: String,
    pub size_bytes: u64,
    pub path: String,
}

/// A project submission owned by an authenticated professional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub submitted_at_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at_ms: Option<u64>,
    pub files: Vec<SubmissionFile>,
}

impl Project {
    /// Creates a pending project with a freshly generated id.
    #[must_use]
    pub fn new(owner_id: &str, name: &str, project_type: ProjectType) -> Self {
        let at = store::next_timestamp_ms();
        Self {
            id: store::generate_id("project", at),
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            project_type,
            status: ProjectStatus::Pending,
            submitted_at_ms: at,
            analyzed_at_ms: None,
            files: Vec::new(),
        }
    }

    /// Advances the lifecycle from a completed analysis.
    pub fn mark_analyzed(&mut self, classification: Classification, at_ms: u64) {
        self.status = ProjectStatus::from_classification(classification);
        self.analyzed_at_ms = Some(at_ms);
    }
}
