pub mod ocr;
pub mod parser;
pub mod photos;
pub mod translation;

pub use ocr::{OcrEngine, RecognizedText};
pub use parser::parse_line;
pub use photos::{PhotoResolver, PhotoSearch, UnsplashClient};
pub use translation::{MyMemoryClient, TranslationService, Translator};
