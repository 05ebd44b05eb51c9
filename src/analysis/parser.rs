//! Response Parser
//!
//! Turns the model's free-form reply into an [`AnalysisResult`]. Parsing never
//! fails: a reply that does not have the expected shape degrades to a
//! [`ParsedReply::Fallback`] carrying the raw text.

use serde::{Deserialize, Serialize};

/// Label that separates the meaning from the usage note.
pub const CONTEXT_MARKER: &str = "context:";

/// Label expected in front of the meaning.
pub const MEANING_LABEL: &str = "meaning:";

/// Context reported when the reply could not be split.
pub const FALLBACK_CONTEXT: &str = "Context could not be extracted due to unexpected format.";

/// Structured analysis returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub meaning: String,
    pub context: String,
}

/// Outcome of parsing a raw model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReply {
    /// The reply contained exactly one context marker.
    Parsed { meaning: String, context: String },
    /// Zero or several context markers; the reply is kept as-is.
    Fallback { raw_text: String },
}

impl ParsedReply {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedReply::Fallback { .. })
    }

    /// Collapse into the output shape. A fallback keeps the raw reply as the
    /// meaning and reports [`FALLBACK_CONTEXT`].
    pub fn into_result(self) -> AnalysisResult {
        match self {
            ParsedReply::Parsed { meaning, context } => AnalysisResult { meaning, context },
            ParsedReply::Fallback { raw_text } => AnalysisResult {
                meaning: raw_text,
                context: FALLBACK_CONTEXT.to_string(),
            },
        }
    }
}

impl From<ParsedReply> for AnalysisResult {
    fn from(parsed: ParsedReply) -> Self {
        parsed.into_result()
    }
}

/// Parse a raw model reply.
///
/// The reply is split on [`CONTEXT_MARKER`]. With exactly two pieces the first
/// loses its first [`MEANING_LABEL`] and both are trimmed. Any other piece count
/// (no marker, or the marker repeated) is a fallback.
pub fn parse_reply(raw: &str) -> ParsedReply {
    let mut parts = raw.split(CONTEXT_MARKER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(head), Some(tail), None) => ParsedReply::Parsed {
            meaning: head.replacen(MEANING_LABEL, "", 1).trim().to_string(),
            context: tail.trim().to_string(),
        },
        _ => ParsedReply::Fallback {
            raw_text: raw.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> AnalysisResult {
        parse_reply(raw).into_result()
    }

    #[test]
    fn test_parse_well_formed_reply() {
        let result = parse("meaning: a small rodent\ncontext: used to describe a shy person");
        assert_eq!(result.meaning, "a small rodent");
        assert_eq!(result.context, "used to describe a shy person");
    }

    #[test]
    fn test_parse_without_marker_falls_back() {
        let result = parse("I am not sure");
        assert_eq!(result.meaning, "I am not sure");
        assert_eq!(result.context, FALLBACK_CONTEXT);
    }

    #[test]
    fn test_parse_with_repeated_marker_falls_back() {
        let raw = "meaning: x\ncontext: first\ncontext: second";
        let parsed = parse_reply(raw);
        assert!(parsed.is_fallback());
        let result = parsed.into_result();
        assert_eq!(result.meaning, raw);
        assert_eq!(result.context, FALLBACK_CONTEXT);
    }

    #[test]
    fn test_parse_empty_reply_falls_back() {
        let result = parse("");
        assert_eq!(result.meaning, "");
        assert_eq!(result.context, FALLBACK_CONTEXT);
    }

    #[test]
    fn test_fallback_keeps_raw_text_untrimmed() {
        let raw = "  \n no markers here \n";
        assert_eq!(parse(raw).meaning, raw);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let result = parse("\n\n  meaning:   to move swiftly  \n\n context:   a morning jog \n");
        assert_eq!(result.meaning, "to move swiftly");
        assert_eq!(result.context, "a morning jog");
    }

    #[test]
    fn test_parse_without_meaning_label() {
        let result = parse("to sprint\ncontext: sport");
        assert_eq!(result.meaning, "to sprint");
        assert_eq!(result.context, "sport");
    }

    #[test]
    fn test_only_first_meaning_label_is_removed() {
        let result = parse("meaning: the word meaning: intent\ncontext: literary");
        assert_eq!(result.meaning, "the word meaning: intent");
        assert_eq!(result.context, "literary");
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let raw = "Meaning: fast\nContext: racing";
        let result = parse(raw);
        assert_eq!(result.meaning, raw);
        assert_eq!(result.context, FALLBACK_CONTEXT);
    }

    #[test]
    fn test_marker_only_yields_empty_fields() {
        let result = parse("context:");
        assert_eq!(result.meaning, "");
        assert_eq!(result.context, "");
    }

    #[test]
    fn test_parse_is_pure() {
        let raw = "meaning: a\ncontext: b";
        let first = parse_reply(raw);
        let _ = parse_reply("unrelated");
        assert_eq!(first, parse_reply(raw));
    }

    #[test]
    fn test_parsed_variant_shape() {
        assert_eq!(
            parse_reply("meaning: a\ncontext: b"),
            ParsedReply::Parsed {
                meaning: "a".to_string(),
                context: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_result_serializes_with_both_fields() {
        let json = serde_json::to_value(parse("meaning: a\ncontext: b")).unwrap();
        assert_eq!(json, serde_json::json!({"meaning": "a", "context": "b"}));
    }
}
