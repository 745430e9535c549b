// Extraction pipeline: main workflow coordinator
//
// Drives OCR, line parsing, and per-item enrichment strictly sequentially.
// Sequential per-item requests keep progress reporting fine-grained and stay
// friendly to rate-limited external services.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

use crate::core::config::Config;
use crate::core::errors::PipelineError;
use crate::core::lang::to_two_letter;
use crate::core::types::{MenuItem, PipelineProgress, PipelineStage, ScanRequest};
use crate::services::ocr::OcrEngine;
use crate::services::parser::parse_line;
use crate::services::photos::{PhotoResolver, PhotoSearch};
use crate::services::translation::{TranslationService, Translator};

// Progress bands (percent). Setup reserves [0, 10); OCR recognition maps
// linearly onto [10, 50]; extraction sits at a fixed 55; enrichment fills the
// remainder up to 100.
const OCR_BAND_START: u8 = 10;
const OCR_BAND_RANGE: f32 = 40.0;
const EXTRACT_PERCENT: u8 = 55;
const TRANSLATE_BAND: (f32, f32) = (55.0, 20.0);
const PHOTO_ONLY_BAND: (f32, f32) = (60.0, 35.0);

/// Menu extraction pipeline.
///
/// Generic over the OCR engine and the two enrichment services so callers
/// (and tests) can supply their own implementations. Exactly one run should
/// be in flight at a time.
pub struct ExtractionPipeline<O, T, P> {
    config: Arc<Config>,
    ocr: O,
    translator: Translator<T>,
    photos: PhotoResolver<P>,
    progress_tx: watch::Sender<PipelineProgress>,
}

impl<O, T, P> ExtractionPipeline<O, T, P>
where
    O: OcrEngine,
    T: TranslationService,
    P: PhotoSearch,
{
    /// Create a new pipeline from an OCR engine and raw service clients
    pub fn new(config: Arc<Config>, ocr: O, translation: T, photo_search: P) -> Self {
        let photos = PhotoResolver::new(photo_search, &config);
        let (progress_tx, _) = watch::channel(PipelineProgress::default());

        Self {
            config,
            ocr,
            translator: Translator::new(translation),
            photos,
            progress_tx,
        }
    }

    /// Subscribe to progress updates for the current (or next) run
    pub fn progress(&self) -> watch::Receiver<PipelineProgress> {
        self.progress_tx.subscribe()
    }

    /// Run the full extraction workflow over one image.
    ///
    /// Only a missing image or an OCR failure is fatal; translation and photo
    /// lookups degrade per item without aborting the run. The returned items
    /// preserve source line order and may legitimately be empty.
    #[instrument(skip(self, request), fields(
        source = %request.source_language,
        target = %request.target_language,
    ))]
    pub async fn run(&self, request: ScanRequest) -> Result<Vec<MenuItem>, PipelineError> {
        // Fresh progress state for this run
        self.progress_tx.send_replace(PipelineProgress::default());

        match self.run_inner(&request).await {
            Ok(items) => {
                info!("Extraction complete: {} menu items", items.len());
                Ok(items)
            }
            Err(e) => {
                let current = self.progress_tx.borrow().percent;
                self.progress_tx.send_replace(PipelineProgress {
                    percent: current,
                    step: format!("Processing failed: {}", e),
                    stage: PipelineStage::Failed,
                });
                Err(e)
            }
        }
    }

    async fn run_inner(&self, request: &ScanRequest) -> Result<Vec<MenuItem>, PipelineError> {
        let image = request.image.as_ref().ok_or(PipelineError::MissingImage)?;

        // Step 1: OCR, with recognition progress mapped onto [10, 50]
        self.advance(OCR_BAND_START, "Reading text from image...", PipelineStage::ReadingText);

        let progress_tx = self.progress_tx.clone();
        let recognized = self
            .ocr
            .recognize(image.as_slice(), &request.source_language, &move |fraction| {
                let percent =
                    OCR_BAND_START + (fraction.clamp(0.0, 1.0) * OCR_BAND_RANGE).round() as u8;
                Self::advance_on(&progress_tx, percent, None, PipelineStage::ReadingText);
            })
            .await
            .map_err(|source| PipelineError::RecognitionFailed { source })?;

        // Step 2: split into lines and parse
        self.advance(EXTRACT_PERCENT, "Extracting menu items...", PipelineStage::ExtractingItems);

        let lines: Vec<&str> = recognized
            .text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let total_lines = lines.len();
        debug!("Recognized {} non-empty lines", total_lines);

        let source_lang = to_two_letter(&request.source_language);
        let target_lang = to_two_letter(&request.target_language);
        let needs_translation = source_lang != target_lang;

        let (band_start, band_range) = if needs_translation {
            TRANSLATE_BAND
        } else {
            PHOTO_ONLY_BAND
        };
        let stage_label = if needs_translation {
            "Translating menu items..."
        } else {
            "Finding beautiful photos..."
        };
        // One enrichment stage per run: `Translating` covers the whole loop on
        // translation-eligible runs, so no state is re-entered.
        let enrich_stage = if needs_translation {
            PipelineStage::Translating
        } else {
            PipelineStage::FindingPhotos
        };
        self.advance(band_start as u8, stage_label, enrich_stage);

        // Step 3: per-candidate enrichment, one item at a time in line order
        let mut items = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            let Some(candidate) = parse_line(line) else {
                continue;
            };
            // Emptiness after all parser heuristics means "not a menu line"
            if candidate.name.is_empty() {
                continue;
            }

            let percent = band_start
                + ((index + 1) as f32 / total_lines as f32 * band_range).round();
            let percent = percent.min(100.0) as u8;

            let mut name = candidate.name;
            let mut price = candidate.price;
            let mut degraded = false;

            if needs_translation {
                self.advance(percent, &format!("Translating {}...", name), enrich_stage);

                let translated = self.translator.translate(&name, source_lang, target_lang).await;
                degraded |= translated.degraded;
                name = translated.value;

                if !price.is_empty() {
                    let translated =
                        self.translator.translate(&price, source_lang, target_lang).await;
                    degraded |= translated.degraded;
                    price = translated.value;
                }
            }

            self.advance(percent, &format!("Finding photo for {}...", name), enrich_stage);

            let photo = self.photos.resolve(&name).await;
            degraded |= photo.degraded;

            items.push(MenuItem {
                name,
                price,
                photo: photo.value,
                degraded,
            });
        }

        self.advance(100, "Complete!", PipelineStage::Complete);
        Ok(items)
    }

    fn advance(&self, percent: u8, step: &str, stage: PipelineStage) {
        Self::advance_on(&self.progress_tx, percent, Some(step), stage);
    }

    /// Publish a progress update, never letting percent move backwards
    fn advance_on(
        tx: &watch::Sender<PipelineProgress>,
        percent: u8,
        step: Option<&str>,
        stage: PipelineStage,
    ) {
        let previous = tx.borrow().clone();
        tx.send_replace(PipelineProgress {
            percent: percent.max(previous.percent),
            step: step.map(str::to_string).unwrap_or(previous.step),
            stage,
        });
    }

    /// Shared configuration handle
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}
