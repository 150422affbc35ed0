use std::str::FromStr;

use storyteller_core::{
    AnalysisResult, Credential, GeneratedScript, ScriptTopic, StorageScope, StructuredRequest,
    TopicCategory,
};

fn sample_script() -> GeneratedScript {
    GeneratedScript {
        title: "아들이 버린 어머니, 10년 뒤 건물주가 되어 돌아오다".to_string(),
        logline: "버림받은 어머니의 통쾌한 인생 역전".to_string(),
        characters: "김순자(72): 주인공\n박민수(45): 아들".to_string(),
        analysis_note: "권선징악 구조와 초반 후킹".to_string(),
        full_script: "여러분, 안녕하세요.\n\"엄마, 이제 그만 나가주세요.\"".to_string(),
    }
}

#[test]
fn test_generated_script_uses_camel_case_wire_names() -> anyhow::Result<()> {
    let json = serde_json::to_value(sample_script())?;

    assert!(json.get("analysisNote").is_some());
    assert!(json.get("fullScript").is_some());
    assert!(json.get("analysis_note").is_none());
    Ok(())
}

#[test]
fn test_generated_script_textual_round_trip_is_exact() -> anyhow::Result<()> {
    let script = sample_script();

    let text = serde_json::to_string(&script)?;
    let parsed: GeneratedScript = serde_json::from_str(&text)?;

    assert_eq!(parsed, script);
    assert_eq!(serde_json::to_string(&parsed)?, text);
    Ok(())
}

#[test]
fn test_generated_script_missing_field_is_rejected() {
    let json = r#"{"title":"t","logline":"l","characters":"c","analysisNote":"a"}"#;

    assert!(serde_json::from_str::<GeneratedScript>(json).is_err());
}

#[test]
fn test_topic_category_wire_values() -> anyhow::Result<()> {
    assert_eq!(
        TopicCategory::wire_values(),
        vec!["retirement", "true_story", "twist", "romance"]
    );
    assert_eq!(TopicCategory::from_str("true_story")?, TopicCategory::TrueStory);
    assert_eq!(
        serde_json::to_string(&TopicCategory::TrueStory)?,
        "\"true_story\""
    );
    Ok(())
}

#[test]
fn test_topic_with_unknown_category_is_rejected() {
    let json = r#"{"id":"1","title":"t","description":"d","category":"horror","dramaTrope":"x"}"#;

    assert!(serde_json::from_str::<ScriptTopic>(json).is_err());
}

#[test]
fn test_topic_parses_provider_shape() -> anyhow::Result<()> {
    let json = r#"{
        "id": "topic-2",
        "title": "40년 만에 밝혀진 출생의 비밀",
        "description": "장례식장에서 나타난 낯선 여인",
        "category": "twist",
        "dramaTrope": "출생의 비밀"
    }"#;

    let topic: ScriptTopic = serde_json::from_str(json)?;

    assert_eq!(topic.id, "topic-2");
    assert_eq!(topic.category, TopicCategory::Twist);
    assert_eq!(topic.drama_trope, "출생의 비밀");
    Ok(())
}

#[test]
fn test_analysis_requires_all_three_lists() {
    let json = r#"{"trends":["a"],"keywords":["b"]}"#;

    assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
}

#[test]
fn test_credential_debug_is_redacted() {
    let credential = Credential::new("AIzaSySecretValue123");

    let debug = format!("{:?}", credential);

    assert!(!debug.contains("Secret"));
    assert_eq!(credential.expose(), "AIzaSySecretValue123");
}

#[test]
fn test_storage_scope_display() {
    assert_eq!(StorageScope::Durable.to_string(), "durable");
    assert_eq!(StorageScope::Session.to_string(), "session");
}

#[test]
fn test_structured_request_requires_every_field() {
    let result = StructuredRequest::builder()
        .model("gemini-2.0-flash-exp")
        .prompt("prompt")
        .build();

    assert!(result.is_err());
}

#[test]
fn test_plain_text_export_contains_every_section() {
    let text = sample_script().to_plain_text();

    for heading in ["제목:", "한 줄 요약:", "[등장인물]", "[흥행 전략 분석]", "[대본]"] {
        assert!(text.contains(heading), "missing {heading}");
    }
    assert!(text.contains("엄마, 이제 그만 나가주세요."));
}
