//! JSON formatter: pretty-print, minify and validate.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonToolError {
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Invalid {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("indent must be between 0 and 8 spaces")]
    BadIndent,
}

/// Result of a validation request.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

fn parse(input: &str) -> Result<Value, JsonToolError> {
    serde_json::from_str(input).map_err(|e| JsonToolError::Invalid {
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}

/// Pretty-print a JSON document with the given indent width.
pub fn format(input: &str, indent: usize) -> Result<String, JsonToolError> {
    if indent > 8 {
        return Err(JsonToolError::BadIndent);
    }
    let value = parse(input)?;

    let indent_bytes = b" ".repeat(indent);
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .expect("serializing a parsed Value cannot fail");

    // Vec came from serde_json, always valid UTF-8
    Ok(String::from_utf8(out).expect("serde_json output is UTF-8"))
}

/// Strip all insignificant whitespace from a JSON document.
pub fn minify(input: &str) -> Result<String, JsonToolError> {
    let value = parse(input)?;
    Ok(value.to_string())
}

/// Check whether a document is valid JSON, reporting the error position.
pub fn validate(input: &str) -> ValidationReport {
    match serde_json::from_str::<Value>(input) {
        Ok(_) => ValidationReport {
            valid: true,
            error: None,
            line: None,
            column: None,
        },
        Err(e) => ValidationReport {
            valid: false,
            error: Some(e.to_string()),
            line: Some(e.line()),
            column: Some(e.column()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_with_two_space_indent() {
        let out = format(r#"{"b":1,"a":[1,2]}"#, 2).unwrap();
        assert!(out.contains("\n  \"b\": 1"));
        assert!(out.contains("[\n    1,\n    2\n  ]"));
    }

    #[test]
    fn minify_strips_whitespace() {
        let out = minify("{ \"a\" : [ 1 , 2 ] }").unwrap();
        assert_eq!(out, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn validate_reports_position() {
        let report = validate("{\"a\": 1,\n  bad}");
        assert!(!report.valid);
        assert_eq!(report.line, Some(2));
        assert!(report.error.is_some());
    }

    #[test]
    fn validate_accepts_scalars() {
        assert!(validate("42").valid);
        assert!(validate("\"text\"").valid);
    }

    #[test]
    fn oversized_indent_is_rejected() {
        assert!(matches!(format("{}", 16), Err(JsonToolError::BadIndent)));
    }
}
