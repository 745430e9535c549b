// Library exports for the menu extraction workflow

// Core modules
pub mod core;
pub mod orchestration;
pub mod services;

// Re-export commonly used types and functions
pub use crate::core::{
    config::Config,
    errors::{ConfigError, PhotoError, PipelineError, TranslationError},
    lang::{to_two_letter, TARGET_LANGUAGES},
    types::{Enriched, MenuItem, ParsedCandidate, PipelineProgress, PipelineStage, ScanRequest},
};

pub use orchestration::extractor::ExtractionPipeline;

pub use services::{
    ocr::{OcrEngine, RecognizedText},
    parser::parse_line,
    photos::{PhotoResolver, PhotoSearch, UnsplashClient},
    translation::{MyMemoryClient, TranslationService, Translator},
};
