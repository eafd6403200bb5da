//! Axum route handler for the Resume API.

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::extraction::{extract_text, Extraction};
use crate::resume::tagger::tag_sections;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub content: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub filename: Option<String>,
    /// Anything but a string takes the fallback extraction path.
    #[serde(default, deserialize_with = "string_or_none")]
    pub filetype: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub parsed_content: String,
    pub suggestions: String,
    pub timestamp: String,
}

/// POST /api/parse-resume
///
/// The body is parsed by hand so malformed JSON surfaces as a 500 with a
/// message rather than Axum's extractor rejection. Bodies over the upload
/// limit get a JSON 413.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let body = body.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
        _ => AppError::Internal(anyhow::anyhow!(rejection.body_text())),
    })?;
    let req: ParseResumeRequest =
        serde_json::from_slice(&body).context("Request body is not valid JSON")?;

    let content = req
        .content
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::Validation("No content provided".to_string()))?;
    let filetype = req.filetype.unwrap_or_default();

    info!(
        filename = req.filename.as_deref().unwrap_or("<unnamed>"),
        filetype = %filetype,
        "Processing file"
    );

    // Regex scans over large binaries are CPU-bound.
    let parsed_content = tokio::task::spawn_blocking(move || extract_and_tag(&content, &filetype))
        .await
        .context("Text extraction task failed")?;

    let suggestions = state.suggester.suggest(&parsed_content).await;

    Ok(Json(ParseResumeResponse {
        success: true,
        filename: req.filename,
        parsed_content,
        suggestions,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

fn extract_and_tag(content: &str, filetype: &str) -> String {
    let extraction = extract_text(content, filetype);
    match &extraction {
        Extraction::Extracted(_) => {}
        Extraction::LowConfidence { format, .. } => {
            warn!(?format, "Text extraction was unreliable; returning diagnostic text");
        }
        Extraction::Failed { format, error } => {
            warn!(?format, "Could not decode upload: {error}");
        }
    }
    let text = extraction.into_text();

    let tagged = tag_sections(&text);
    debug!(
        lines = tagged.lines().len(),
        sections = ?tagged.sections().collect::<Vec<_>>(),
        "Tagged resume sections"
    );
    tagged.render_or(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_tagged_line_by_line() {
        let parsed = extract_and_tag("Jane Doe\nWork Experience\nCompany X", "text/plain");
        assert_eq!(
            parsed,
            "Jane Doe\n\n[EXPERIENCE SECTION]\nWork Experience\nCompany X"
        );
    }

    #[test]
    fn test_missing_filetype_takes_fallback_path() {
        // "Skills" encoded as base64.
        assert_eq!(extract_and_tag("U2tpbGxz", ""), "[SKILLS SECTION]\nSkills");
    }

    #[test]
    fn test_non_string_metadata_is_ignored() {
        let req: ParseResumeRequest = serde_json::from_str(
            r#"{"content": "U2tpbGxz", "filename": ["a"], "filetype": 123}"#,
        )
        .unwrap();
        assert_eq!(req.content.as_deref(), Some("U2tpbGxz"));
        assert_eq!(req.filename, None);
        assert_eq!(req.filetype, None);

        let req: ParseResumeRequest =
            serde_json::from_str(r#"{"content": "x", "filetype": "text/plain"}"#).unwrap();
        assert_eq!(req.filetype.as_deref(), Some("text/plain"));
        assert_eq!(req.filename, None);
    }

    #[test]
    fn test_response_omits_absent_filename() {
        let response = ParseResumeResponse {
            success: true,
            filename: None,
            parsed_content: "x".to_string(),
            suggestions: "y".to_string(),
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("filename").is_none());
        assert_eq!(value["parsedContent"], "x");
    }
}
