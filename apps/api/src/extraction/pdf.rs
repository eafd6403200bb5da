//! PDF-like extraction: scrape literal strings and content streams out of the
//! raw byte-string without interpreting the object model.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::normalize::{mask_unprintable, normalize};
use super::{latin1, DocumentFormat, Extraction, CONFIDENCE_THRESHOLD, PDF_PREVIEW_CHARS};

/// Stream bodies with this few readable characters are treated as noise.
const MIN_STREAM_TEXT_CHARS: usize = 10;

/// `(...)` operands of text-showing operators, on a single line.
static RE_LITERAL_STRING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^\r\n]*?)\)").unwrap());

static RE_STREAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)stream\s*(.*?)\s*endstream").unwrap());

pub(super) fn extract(bytes: &[u8]) -> Extraction {
    let raw = latin1(bytes);

    let mut merged = String::new();
    for literal in literal_strings(&raw) {
        merged.push_str(&literal);
        merged.push(' ');
    }
    for block in stream_text(&raw) {
        merged.push_str(&block);
        merged.push('\n');
    }

    let mut cleaned = normalize(&merged);
    if cleaned.len() < CONFIDENCE_THRESHOLD {
        let whole = normalize(&String::from_utf8_lossy(bytes));
        if whole.len() > cleaned.len() {
            debug!(
                heuristic_len = cleaned.len(),
                fallback_len = whole.len(),
                "Using whole-buffer UTF-8 text for PDF"
            );
            cleaned = whole;
        }
    }

    if cleaned.len() < CONFIDENCE_THRESHOLD {
        return Extraction::LowConfidence {
            format: DocumentFormat::Pdf,
            preview: raw.chars().take(PDF_PREVIEW_CHARS).collect(),
        };
    }

    Extraction::Extracted(cleaned)
}

fn literal_strings(raw: &str) -> Vec<String> {
    RE_LITERAL_STRING
        .captures_iter(raw)
        .filter_map(|caps| {
            let text = caps[1].replace('(', "");
            let keep =
                text.chars().count() > 2 && text.chars().any(|c| c.is_ascii_alphabetic());
            keep.then_some(text)
        })
        .collect()
}

fn stream_text(raw: &str) -> Vec<String> {
    RE_STREAM
        .captures_iter(raw)
        .map(|caps| mask_unprintable(&caps[1]))
        .filter(|text| text.trim().chars().count() > MIN_STREAM_TEXT_CHARS)
        .collect()
}
