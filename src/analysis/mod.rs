//! Image analysis pipeline
//!
//! An upload goes through two steps: detection (what is in the picture) and
//! diary composition (a short first-person entry written from the pet's
//! point of view). Detection is pluggable through [`Analyzer`]; the only
//! implementation today is [`MockAnalyzer`], which returns fixed values.

use async_trait::async_trait;
use serde::Serialize;

use crate::Result;

pub mod mock;

pub use mock::MockAnalyzer;

/// Metadata of an uploaded image. The bytes themselves are never buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub filename: String,
    pub content_type: Option<String>,
}

impl Upload {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Result of the vision step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub species: String,
    pub action: String,
}

/// Response body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub original_filename: String,
    pub detected_species: String,
    pub detected_action: String,
    pub generated_diary: String,
}

/// Detection backend
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Detect species and action for an uploaded image
    async fn detect(&self, upload: &Upload) -> Result<Detection>;

    /// Short backend name, used in logs
    fn name(&self) -> &'static str;
}

/// Write the diary entry for a detection.
pub fn compose_diary(detection: &Detection) -> String {
    format!(
        "오늘은 주인님이랑 {}을 했어오. {}는 신나오. 멍멍!",
        detection.action, detection.species
    )
}

/// Run detection and diary composition for one upload.
pub async fn analyze(analyzer: &dyn Analyzer, upload: Upload) -> Result<AnalysisReport> {
    let detection = analyzer.detect(&upload).await?;
    let generated_diary = compose_diary(&detection);

    Ok(AnalysisReport {
        original_filename: upload.filename,
        detected_species: detection.species,
        detected_action: detection.action,
        generated_diary,
    })
}
