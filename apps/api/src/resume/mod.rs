// Resume API: section tagging, suggestion generation, and the parse-resume handler.
// Text recovery from uploads lives in `crate::extraction`; the Gemini call in `crate::llm_client`.

pub mod handlers;
pub mod prompts;
pub mod suggestions;
pub mod tagger;
