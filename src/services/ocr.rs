// External OCR capability boundary
//
// The workflow ships no OCR engine of its own; callers supply one. The engine
// maps an image to recognized text and reports recognition progress through a
// callback so the pipeline can surface liveness during the slowest step.

use anyhow::Result;

/// Text recognized from one image.
#[derive(Debug, Clone)]
pub struct RecognizedText {
    pub text: String,
}

/// An OCR engine capable of recognizing text in a given language.
pub trait OcrEngine: Send + Sync {
    /// Recognize text in `image`.
    ///
    /// `language` is the short recognition tag (e.g. "eng", "jpn").
    /// `on_progress` receives a monotonically increasing fraction in [0, 1]
    /// while recognition is active.
    fn recognize(
        &self,
        image: &[u8],
        language: &str,
        on_progress: &(dyn Fn(f32) + Send + Sync),
    ) -> impl std::future::Future<Output = Result<RecognizedText>> + Send;
}
