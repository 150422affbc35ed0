use storyteller_error::{
    GeminiError, GeminiErrorKind, GenerationError, GenerationErrorKind, SessionError,
    SessionErrorKind, StorytellerError, StorytellerErrorKind,
};

#[test]
fn test_gemini_http_error_becomes_transport_failure() {
    let gemini = GeminiError::new(GeminiErrorKind::HttpError {
        status_code: 503,
        message: "The model is overloaded.".to_string(),
    });

    let err: GenerationError = gemini.into();

    assert_eq!(
        err.kind(),
        &GenerationErrorKind::TransportFailure {
            status_code: Some(503),
            message: "The model is overloaded.".to_string(),
        }
    );
    assert!(!err.kind().is_auth_failure());
}

#[test]
fn test_network_error_has_no_status() {
    let gemini = GeminiError::new(GeminiErrorKind::ApiRequest("connection reset".to_string()));

    let err: GenerationError = gemini.into();

    match err.kind() {
        GenerationErrorKind::TransportFailure {
            status_code,
            message,
        } => {
            assert_eq!(*status_code, None);
            assert!(message.contains("connection reset"));
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn test_invalid_key_reported_as_bad_request_is_auth_failure() {
    let kind = GenerationErrorKind::TransportFailure {
        status_code: Some(400),
        message: "API key not valid. Please pass a valid API key.".to_string(),
    };
    assert!(kind.is_auth_failure());

    let unrelated = GenerationErrorKind::TransportFailure {
        status_code: Some(400),
        message: "Invalid JSON payload received.".to_string(),
    };
    assert!(!unrelated.is_auth_failure());
}

#[test]
fn test_parse_failures_are_not_auth_failures() {
    assert!(!GenerationErrorKind::MalformedResponse("eof".to_string()).is_auth_failure());
    assert!(!GenerationErrorKind::EmptyResponse.is_auth_failure());
}

#[test]
fn test_generation_error_wraps_into_top_level() {
    let err: StorytellerError = GenerationError::new(GenerationErrorKind::MissingCredential).into();

    assert!(matches!(
        err.kind(),
        StorytellerErrorKind::Generation(inner)
            if inner.kind == GenerationErrorKind::MissingCredential
    ));
    assert!(err.to_string().contains("No API key"));
}

#[test]
fn test_session_error_wraps_into_top_level() {
    let err: StorytellerError = SessionError::new(SessionErrorKind::WrongStep {
        operation: "select a topic",
        step: "dashboard".to_string(),
    })
    .into();

    assert!(matches!(err.kind(), StorytellerErrorKind::Session(_)));
    assert!(
        err.to_string()
            .contains("Cannot select a topic while in the dashboard step")
    );
}
