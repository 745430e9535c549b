// Data types shared across the extraction workflow

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A fully enriched menu item, ready for hand-off to the menu editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Item name, non-empty after trimming (possibly translated).
    pub name: String,
    /// Price as a decimal-like string; empty when the line carried no price.
    pub price: String,
    /// Photo URL; the fallback chain guarantees this is never empty.
    pub photo: String,
    /// True when translation or photo lookup fell back instead of succeeding.
    /// Lets the editor surface items that may need manual review.
    #[serde(default)]
    pub degraded: bool,
}

/// A parsed but not-yet-enriched (name, price) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCandidate {
    pub name: String,
    pub price: String,
}

/// Pipeline state machine.
///
/// No state is re-entered once left within a single run; `Complete` and
/// `Failed` are the only terminal states. Exactly one of `Translating` and
/// `FindingPhotos` is entered per run: `Translating` covers the whole
/// enrichment loop (including photo lookups) when the language pair differs,
/// while `FindingPhotos` is the enrichment stage of translation-free runs.
/// The per-item step label, not the stage, says whether an item is currently
/// being translated or photographed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStage {
    Idle,
    ReadingText,
    ExtractingItems,
    Translating,
    FindingPhotos,
    Complete,
    Failed,
}

/// Observable progress of one pipeline run.
///
/// `percent` is monotonically non-decreasing within a run and reaches 100
/// exactly at `Complete`. Reset at the start of each run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineProgress {
    pub percent: u8,
    pub step: String,
    pub stage: PipelineStage,
}

impl Default for PipelineProgress {
    fn default() -> Self {
        Self {
            percent: 0,
            step: "Preparing...".to_string(),
            stage: PipelineStage::Idle,
        }
    }
}

/// Input to one pipeline run.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Raw image bytes. Absence is a fatal precondition failure.
    pub image: Option<Arc<Vec<u8>>>,
    /// Recognition language tag passed to the OCR engine (e.g. "eng", "jpn").
    pub source_language: String,
    /// Target language tag for translation.
    pub target_language: String,
}

impl ScanRequest {
    pub fn new(
        image: Option<Vec<u8>>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            image: image.map(Arc::new),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

impl Default for ScanRequest {
    fn default() -> Self {
        Self {
            image: None,
            source_language: "eng".to_string(),
            target_language: "eng".to_string(),
        }
    }
}

/// Result of one best-effort enrichment step.
///
/// `degraded` distinguishes a fallback value from an exact one without
/// reintroducing errors as control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enriched<T> {
    pub value: T,
    pub degraded: bool,
}

impl<T> Enriched<T> {
    /// An exact (non-degraded) result.
    pub fn exact(value: T) -> Self {
        Self {
            value,
            degraded: false,
        }
    }

    /// A fallback result.
    pub fn degraded(value: T) -> Self {
        Self {
            value,
            degraded: true,
        }
    }
}
