//! Best-effort text extraction from uploaded documents.
//!
//! Nothing in here parses PDF or Word containers properly. Each format gets a
//! lossy heuristic, and when the recovered text is too short to trust, the
//! caller receives a diagnostic instead of near-empty output.
//! Extraction never returns an error to the caller: every outcome flattens
//! to text via [`Extraction::into_text`].

pub mod decoder;
pub mod normalize;
mod pdf;
mod word;

use crate::extraction::decoder::{DecodeError, Decoded};
use crate::extraction::normalize::normalize;

/// Minimum normalized length below which recovered text is considered unreliable.
pub const CONFIDENCE_THRESHOLD: usize = 50;
/// Characters of the raw PDF byte-string shown in the low-confidence diagnostic.
pub const PDF_PREVIEW_CHARS: usize = 500;
/// Characters of recovered Word text shown in the low-confidence diagnostic.
pub const WORD_PREVIEW_CHARS: usize = 200;

/// Extraction strategy, chosen from the declared media type of the upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    /// Legacy `.doc` and zipped `.docx` share one heuristic.
    WordProcessor,
    Other,
}

impl DocumentFormat {
    pub fn from_media_type(media_type: &str) -> Self {
        match media_type {
            "text/plain" => DocumentFormat::PlainText,
            "application/pdf" => DocumentFormat::Pdf,
            "application/msword"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                DocumentFormat::WordProcessor
            }
            _ => DocumentFormat::Other,
        }
    }
}

/// Tagged result of an extraction attempt.
#[derive(Debug)]
pub enum Extraction {
    Extracted(String),
    /// Fewer than [`CONFIDENCE_THRESHOLD`] characters were recovered.
    LowConfidence {
        format: DocumentFormat,
        preview: String,
    },
    Failed {
        format: DocumentFormat,
        error: DecodeError,
    },
}

impl Extraction {
    /// Flattens the outcome into the text handed to the tagger, embedding a
    /// human-readable diagnostic when extraction was unreliable or failed.
    pub fn into_text(self) -> String {
        match self {
            Extraction::Extracted(text) => text,
            Extraction::LowConfidence {
                format: DocumentFormat::Pdf,
                preview,
            } => format!(
                "PDF text extraction was limited. Detected PDF content but unable to extract readable text reliably.\n\n\
                 For better results, please:\n\
                 1. Try converting the PDF to a TXT file\n\
                 2. Copy and paste the resume content into a TXT file\n\
                 3. Use a different PDF file\n\n\
                 Raw content preview (first {PDF_PREVIEW_CHARS} chars):\n\
                 {preview}..."
            ),
            Extraction::LowConfidence { preview, .. } => format!(
                "DOC text extraction was limited.\n\n\
                 For better results, please:\n\
                 1. Save the document as a TXT file\n\
                 2. Copy and paste the content into a TXT file\n\
                 3. Try using a DOCX file instead\n\n\
                 Partial content detected: {preview}..."
            ),
            Extraction::Failed { format, .. } => failure_message(format).to_string(),
        }
    }
}

fn failure_message(format: DocumentFormat) -> &'static str {
    match format {
        DocumentFormat::Pdf => {
            "Error extracting text from PDF. Please try converting to TXT format for better results."
        }
        DocumentFormat::WordProcessor => {
            "Error extracting text from DOC file. Please convert to TXT format for better results."
        }
        DocumentFormat::PlainText | DocumentFormat::Other => {
            "Error extracting text from file. Please try uploading a TXT file or ensure the file is not corrupted."
        }
    }
}

/// Decodes `content` according to `media_type` and recovers whatever text it can.
pub fn extract_text(content: &str, media_type: &str) -> Extraction {
    let format = DocumentFormat::from_media_type(media_type);

    let bytes = match decoder::decode(content, format) {
        Ok(Decoded::Text(text)) => return Extraction::Extracted(text.to_string()),
        Ok(Decoded::Bytes(bytes)) => bytes,
        Err(error) => return Extraction::Failed { format, error },
    };

    match format {
        DocumentFormat::Pdf => pdf::extract(&bytes),
        DocumentFormat::WordProcessor => word::extract(&bytes),
        DocumentFormat::PlainText | DocumentFormat::Other => {
            Extraction::Extracted(normalize(&String::from_utf8_lossy(&bytes)))
        }
    }
}

/// Maps each byte to the char with the same code point, so single-byte
/// structural tokens survive verbatim for pattern matching.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
