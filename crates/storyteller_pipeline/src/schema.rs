//! Response schemas handed to the provider.
//!
//! These use Gemini's OpenAPI subset (`OBJECT`, `ARRAY`, `STRING`, `enum`,
//! `required`). The provider enforces them; the pipeline still validates
//! every response against the matching Rust type.

use serde_json::{Value, json};
use storyteller_core::TopicCategory;

fn string_list(description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" },
        "description": description,
    })
}

/// Schema for [`AnalysisResult`](storyteller_core::AnalysisResult).
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "trends": string_list("인기 있는 트렌드 분석"),
            "keywords": string_list("핵심 키워드"),
            "dramaTechniques": string_list("사용된 드라마 작법 기법"),
        },
        "required": ["trends", "keywords", "dramaTechniques"],
    })
}

/// Schema for a list of [`ScriptTopic`](storyteller_core::ScriptTopic).
pub fn topics_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "category": { "type": "STRING", "enum": TopicCategory::wire_values() },
                "dramaTrope": {
                    "type": "STRING",
                    "description": "적용할 드라마 기법 (예: 출생의 비밀, 기억상실 등)",
                },
            },
            "required": ["id", "title", "description", "category", "dramaTrope"],
        },
    })
}

/// Schema for [`GeneratedScript`](storyteller_core::GeneratedScript).
pub fn script_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "logline": { "type": "STRING" },
            "characters": { "type": "STRING" },
            "analysisNote": { "type": "STRING" },
            "fullScript": { "type": "STRING" },
        },
        "required": ["title", "logline", "characters", "analysisNote", "fullScript"],
    })
}
