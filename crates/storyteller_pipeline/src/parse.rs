//! Boundary validation of provider text.

use serde::de::DeserializeOwned;
use storyteller_error::{GenerationError, GenerationErrorKind, GenerationResult};

/// Parse a provider text body into `T`.
///
/// Surrounding whitespace is ignored. A missing or blank body is
/// [`GenerationErrorKind::EmptyResponse`]; anything that does not decode into
/// `T` exactly (missing field, wrong type, unknown enum value) is
/// [`GenerationErrorKind::MalformedResponse`].
///
/// # Examples
///
/// ```
/// use storyteller_core::AnalysisResult;
/// use storyteller_error::GenerationErrorKind;
/// use storyteller_pipeline::parse_structured;
///
/// let err = parse_structured::<AnalysisResult>(Some("  ")).unwrap_err();
/// assert_eq!(err.kind(), &GenerationErrorKind::EmptyResponse);
/// ```
pub fn parse_structured<T: DeserializeOwned>(text: Option<&str>) -> GenerationResult<T> {
    let body = text.map(str::trim).unwrap_or_default();
    if body.is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::EmptyResponse));
    }

    serde_json::from_str(body).map_err(|e| {
        GenerationError::new(GenerationErrorKind::MalformedResponse(e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyteller_core::{GeneratedScript, ScriptTopic};

    #[test]
    fn test_missing_body_is_empty_response() {
        let err = parse_structured::<GeneratedScript>(None).unwrap_err();
        assert_eq!(err.kind(), &GenerationErrorKind::EmptyResponse);
    }

    #[test]
    fn test_whitespace_around_json_is_ignored() {
        let topics: Vec<ScriptTopic> = parse_structured(Some("\n  []  \n")).unwrap();
        assert!(topics.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let err = parse_structured::<GeneratedScript>(Some(r#"{"title": 3}"#)).unwrap_err();
        assert!(matches!(
            err.kind(),
            GenerationErrorKind::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = parse_structured::<Vec<ScriptTopic>>(Some("죄송합니다")).unwrap_err();
        assert!(matches!(
            err.kind(),
            GenerationErrorKind::MalformedResponse(_)
        ));
    }
}
