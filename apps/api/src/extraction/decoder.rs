//! Payload decoder: base64 (optionally behind a data-URL header) into raw bytes.

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use thiserror::Error;

use crate::extraction::DocumentFormat;

/// Browsers and CLI tools disagree on padding and trailing bits; accept both.
const LENIENT_CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT_CONFIG);

#[derive(Debug, Error)]
#[error("malformed base64 payload: {0}")]
pub struct DecodeError(#[from] base64::DecodeError);

/// Output of the decoder. Plain-text uploads never go through base64.
#[derive(Debug, PartialEq)]
pub enum Decoded<'a> {
    Text(&'a str),
    Bytes(Vec<u8>),
}

pub fn decode(content: &str, format: DocumentFormat) -> Result<Decoded<'_>, DecodeError> {
    if format == DocumentFormat::PlainText {
        return Ok(Decoded::Text(content));
    }
    decode_payload(content).map(Decoded::Bytes)
}

/// Decodes the base64 part of `content`, discarding any `header,` prefix.
pub fn decode_payload(content: &str) -> Result<Vec<u8>, DecodeError> {
    let payload = match content.split_once(',') {
        Some((_header, payload)) => payload,
        None => content,
    };

    // URL-safe symbols fold into the standard alphabet, even when mixed.
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    Ok(STANDARD_LENIENT.decode(&compact)?)
}
