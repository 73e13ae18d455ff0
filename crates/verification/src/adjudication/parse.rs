//! Defensive reading of the model's answer.
//!
//! The answer arrives as an envelope whose first candidate carries free text
//! that should, but need not, contain a JSON object. Each step below either
//! yields the next value or names the step that failed; callers map any
//! failure to [`AdjudicationOutcome::default`].

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use verity_db::claims::models::Verdict;

use super::models::AdjudicationOutcome;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("response envelope is not the expected shape")]
    Envelope,

    #[error("candidate text is empty")]
    EmptyText,

    #[error("no JSON object in candidate text")]
    NoJsonObject,

    #[error("invalid outcome JSON: {0}")]
    InvalidJson(String),

    #[error("model answered with the reserved PENDING verdict")]
    ReservedVerdict,
}

#[derive(Debug, Deserialize)]
struct RawOutcome {
    verdict: Verdict,
    #[serde(default, deserialize_with = "lenient_confidence")]
    confidence: Option<f64>,
    #[serde(default)]
    summary: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accepts `85`, `85.5` and `"85"`; any other string is an error.
fn lenient_confidence<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("confidence is not numeric: {text:?}"))),
    }
}

impl From<RawOutcome> for AdjudicationOutcome {
    fn from(raw: RawOutcome) -> Self {
        let confidence = raw
            .confidence
            .filter(|c| c.is_finite())
            .map(|c| c.clamp(0.0, 100.0).trunc() as i32)
            .unwrap_or(0);

        Self {
            verdict: raw.verdict,
            confidence,
            summary: raw.summary.unwrap_or_default(),
        }
    }
}

/// Read a full response body into an outcome. Never fails.
pub fn parse_envelope(raw: &str) -> AdjudicationOutcome {
    match candidate_text(raw).and_then(|text| parse_outcome_text(&text)) {
        Ok(outcome) => outcome,
        Err(failure) => {
            tracing::warn!(step = %failure, "adjudication response unusable, using default outcome");
            AdjudicationOutcome::default()
        }
    }
}

/// `candidates[0].content.parts[0].text`
fn candidate_text(raw: &str) -> Result<String, ParseFailure> {
    let envelope: Value = serde_json::from_str(raw).map_err(|_| ParseFailure::Envelope)?;

    envelope
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ParseFailure::Envelope)
}

/// Parse candidate text, tolerating code fences and prose around the object.
pub fn parse_outcome_text(text: &str) -> Result<AdjudicationOutcome, ParseFailure> {
    if text.trim().is_empty() {
        return Err(ParseFailure::EmptyText);
    }

    let cleaned = strip_code_fences(text);
    let json = embedded_object(&cleaned).ok_or(ParseFailure::NoJsonObject)?;

    let raw: RawOutcome =
        serde_json::from_str(json).map_err(|e| ParseFailure::InvalidJson(e.to_string()))?;

    // PENDING only ever means "no usable answer".
    if raw.verdict == Verdict::Pending {
        return Err(ParseFailure::ReservedVerdict);
    }
    Ok(raw.into())
}

fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Slice from the first `{` through the last `}`.
fn embedded_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(text: &str) -> String {
        serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": text}], "role": "model"},
                "finishReason": "STOP"
            }]
        })
        .to_string()
    }

    #[test]
    fn fenced_json_with_surrounding_prose_parses() {
        let text = "Some preamble ```json\n{\"verdict\":\"TRUE\",\"confidence\":90,\"summary\":\"ok\"}\n``` trailing";
        let outcome = parse_outcome_text(text).expect("should parse");
        assert_eq!(outcome.verdict, Verdict::True);
        assert_eq!(outcome.confidence, 90);
        assert_eq!(outcome.summary, "ok");
    }

    #[test]
    fn bare_fence_is_stripped() {
        let text = "```\n{\"verdict\":\"PARTIALLY_TRUE\",\"confidence\":55,\"summary\":\"mixed\"}\n```";
        let outcome = parse_outcome_text(text).expect("should parse");
        assert_eq!(outcome.verdict, Verdict::PartiallyTrue);
        assert_eq!(outcome.confidence, 55);
    }

    #[test]
    fn full_envelope_parses() {
        let body = envelope("{\"verdict\":\"FALSE\",\"confidence\":85,\"summary\":\"debunked\"}");
        let outcome = parse_envelope(&body);
        assert_eq!(outcome.verdict, Verdict::False);
        assert_eq!(outcome.confidence, 85);
        assert_eq!(outcome.summary, "debunked");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(parse_outcome_text("   \n"), Err(ParseFailure::EmptyText));
        assert_eq!(parse_envelope(&envelope("  ")), AdjudicationOutcome::default());
    }

    #[test]
    fn missing_braces_fall_back() {
        assert_eq!(
            parse_outcome_text("The claim is TRUE with high confidence."),
            Err(ParseFailure::NoJsonObject)
        );
        assert_eq!(parse_outcome_text("} backwards {"), Err(ParseFailure::NoJsonObject));
        assert_eq!(
            parse_envelope(&envelope("I cannot answer that.")),
            AdjudicationOutcome::default()
        );
    }

    #[test]
    fn unknown_or_miscased_verdict_is_invalid() {
        let err = parse_outcome_text("{\"verdict\":\"MOSTLY_TRUE\",\"confidence\":60}").unwrap_err();
        assert!(matches!(err, ParseFailure::InvalidJson(_)));

        let err = parse_outcome_text("{\"verdict\":\"true\",\"confidence\":60}").unwrap_err();
        assert!(matches!(err, ParseFailure::InvalidJson(_)));
    }

    #[test]
    fn malformed_json_falls_back() {
        let outcome = parse_envelope(&envelope("{\"verdict\": \"TRUE\", \"confidence\": }"));
        assert_eq!(outcome, AdjudicationOutcome::default());
    }

    #[test]
    fn unexpected_envelope_shapes_fall_back() {
        for body in [
            "not json at all",
            "{}",
            "{\"candidates\": []}",
            "{\"candidates\": [{}]}",
            "{\"candidates\": [{\"content\": {\"parts\": []}}]}",
            "{\"candidates\": [{\"content\": {\"parts\": [{\"text\": 42}]}}]}",
            "{\"error\": {\"code\": 400, \"message\": \"API key not valid\"}}",
        ] {
            let outcome = parse_envelope(body);
            assert_eq!(outcome.verdict, Verdict::Pending, "body: {body}");
            assert_eq!(outcome.confidence, 0, "body: {body}");
        }
    }

    #[test]
    fn confidence_is_clamped_and_truncated() {
        let outcome = parse_outcome_text("{\"verdict\":\"TRUE\",\"confidence\":150}").unwrap();
        assert_eq!(outcome.confidence, 100);

        let outcome = parse_outcome_text("{\"verdict\":\"FALSE\",\"confidence\":-5}").unwrap();
        assert_eq!(outcome.confidence, 0);

        let outcome = parse_outcome_text("{\"verdict\":\"FALSE\",\"confidence\":72.9}").unwrap();
        assert_eq!(outcome.confidence, 72);
    }

    #[test]
    fn numeric_string_confidence_is_accepted() {
        let outcome =
            parse_outcome_text("{\"verdict\":\"TRUE\",\"confidence\":\"85\",\"summary\":\"ok\"}")
                .unwrap();
        assert_eq!(outcome.verdict, Verdict::True);
        assert_eq!(outcome.confidence, 85);

        let outcome =
            parse_outcome_text("{\"verdict\":\"FALSE\",\"confidence\":\" 72.5 \"}").unwrap();
        assert_eq!(outcome.confidence, 72);

        let outcome = parse_outcome_text("{\"verdict\":\"FALSE\",\"confidence\":null}").unwrap();
        assert_eq!(outcome.confidence, 0);
    }

    #[test]
    fn non_numeric_confidence_text_is_invalid() {
        let err = parse_outcome_text("{\"verdict\":\"TRUE\",\"confidence\":\"high\"}").unwrap_err();
        assert!(matches!(err, ParseFailure::InvalidJson(_)));
    }

    #[test]
    fn pending_from_model_falls_back() {
        assert_eq!(
            parse_outcome_text("{\"verdict\":\"PENDING\",\"confidence\":90,\"summary\":\"?\"}"),
            Err(ParseFailure::ReservedVerdict)
        );

        let outcome = parse_envelope(&envelope("{\"verdict\":\"PENDING\",\"confidence\":90}"));
        assert_eq!(outcome, AdjudicationOutcome::default());
    }

    #[test]
    fn missing_optional_fields_default() {
        let outcome = parse_outcome_text("{\"verdict\":\"UNVERIFIABLE\"}").unwrap();
        assert_eq!(outcome.verdict, Verdict::Unverifiable);
        assert_eq!(outcome.confidence, 0);
        assert_eq!(outcome.summary, "");
    }
}
