use crate::error::TallyError;
use crate::models::GenderCounts;

/// Turn a model reply into counts.
///
/// Accepts a bare JSON object or one wrapped in a Markdown code fence or
/// surrounded by prose. Missing and null fields count as zero and the total
/// is always recomputed.
pub fn parse_count_response(response: &str) -> Result<GenderCounts, TallyError> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Err(TallyError::InvalidResponse(
            "Empty response from model".to_string(),
        ));
    }

    let body = strip_code_fence(trimmed);
    let json = extract_json_object(body).ok_or_else(|| {
        TallyError::InvalidResponse(format!(
            "No JSON object in response: {}",
            preview(trimmed)
        ))
    })?;

    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| TallyError::InvalidResponse(format!("Malformed JSON: {}", e)))?;

    if !value.is_object() {
        return Err(TallyError::InvalidResponse(
            "Expected a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| TallyError::InvalidResponse(format!("Unexpected count fields: {}", e)))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // Drop the info string (```json) up to the first newline.
    let rest = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => rest,
    };

    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn preview(text: &str) -> String {
    text.chars().take(80).collect()
}
