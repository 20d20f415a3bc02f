use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{
    errors::GenerationError,
    models::domain::{ExamPayload, MultipleChoiceQuestion},
};

const EXCERPT_CHARS: usize = 200;

static LEADING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^```[A-Za-z0-9_-]*[ \t]*(\r?\n)?").expect("LEADING_FENCE is a valid regex pattern")
});

static TRAILING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\r?\n)?[ \t]*```$").expect("TRAILING_FENCE is a valid regex pattern")
});

/// Removes one code-fence wrapper (```json ... ``` or ``` ... ```) around
/// the text. Unwrapped text comes back trimmed.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let start = LEADING_FENCE
        .find(trimmed)
        .map(|m| m.end())
        .unwrap_or(0);
    let inner = &trimmed[start..];
    let end = TRAILING_FENCE
        .find(inner)
        .map(|m| m.start())
        .unwrap_or(inner.len());
    inner[..end].trim()
}

/// First `max_chars` characters of `text`, marked when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

fn malformed(reason: impl Into<String>, text: &str) -> GenerationError {
    GenerationError::MalformedResponse {
        reason: reason.into(),
        excerpt: excerpt(text, EXCERPT_CHARS),
    }
}

/// Repairs, parses and validates a raw provider response.
///
/// A missing or blank `subject` is filled from `fallback_subject`; every
/// other required field must be present.
pub fn parse_exam_payload(raw: &str, fallback_subject: &str) -> Result<ExamPayload, GenerationError> {
    let text = strip_code_fences(raw);

    let mut value: Value = serde_json::from_str(text).map_err(|e| malformed(e.to_string(), text))?;

    let object = value
        .as_object_mut()
        .ok_or_else(|| malformed("response is not a JSON object", text))?;

    let has_subject = object
        .get("subject")
        .and_then(Value::as_str)
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false);
    if !has_subject {
        object.insert("subject".to_string(), Value::String(fallback_subject.to_string()));
    }

    let mut payload: ExamPayload =
        serde_json::from_value(value).map_err(|e| malformed(e.to_string(), text))?;

    normalize(&mut payload);
    validate(&payload).map_err(|reason| malformed(reason, text))?;

    Ok(payload)
}

fn normalize(payload: &mut ExamPayload) {
    for question in payload.multiple_choice.iter_mut() {
        question.correct_answer = question
            .correct_answer
            .trim()
            .trim_end_matches(['.', ')'])
            .trim()
            .to_uppercase();
    }
}

fn validate(payload: &ExamPayload) -> Result<(), String> {
    for question in &payload.multiple_choice {
        if question.options.len() != MultipleChoiceQuestion::OPTION_COUNT {
            return Err(format!(
                "multiple-choice question {} has {} options, expected {}",
                question.id,
                question.options.len(),
                MultipleChoiceQuestion::OPTION_COUNT
            ));
        }
        if question.correct_index().is_none() {
            return Err(format!(
                "multiple-choice question {} has invalid answer '{}'",
                question.id, question.correct_answer
            ));
        }
    }
    Ok(())
}
