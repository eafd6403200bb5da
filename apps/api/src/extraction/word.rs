//! Word-processor extraction (`.doc` and `.docx`): recover readable
//! alphabetic runs from the raw bytes and discard everything else.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::normalize;
use super::{latin1, DocumentFormat, Extraction, CONFIDENCE_THRESHOLD, WORD_PREVIEW_CHARS};

/// Three or more letters, then any printable ASCII up to the next control or high byte.
static RE_WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]{3,}[\x20-\x7E]*").unwrap());

/// Runs this short are almost always format noise.
const MIN_RUN_CHARS: usize = 4;

pub(super) fn extract(bytes: &[u8]) -> Extraction {
    let raw = latin1(bytes);

    let recovered = RE_WORD_RUN
        .find_iter(&raw)
        .map(|m| m.as_str())
        .filter(|run| run.len() >= MIN_RUN_CHARS)
        .collect::<Vec<_>>()
        .join(" ");

    let cleaned = normalize(&recovered);
    if cleaned.len() < CONFIDENCE_THRESHOLD {
        return Extraction::LowConfidence {
            format: DocumentFormat::WordProcessor,
            preview: cleaned.chars().take(WORD_PREVIEW_CHARS).collect(),
        };
    }

    Extraction::Extracted(cleaned)
}
