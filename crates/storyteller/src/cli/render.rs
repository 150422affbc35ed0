//! Terminal rendering of pipeline results.

use std::fmt::Write;

use storyteller::{AnalysisOutcome, GeneratedScript, JsonError, ScriptTopic, StorytellerResult};

use super::ExportFormat;

/// Dashboard view of an analysis.
pub fn render_analysis(outcome: &AnalysisOutcome) -> String {
    let analysis = outcome.analysis();
    let mut out = String::new();

    if outcome.is_fallback() {
        out.push_str("[기본 분석 데이터] 실시간 분석에 실패하여 저장된 분석을 표시합니다.\n\n");
    }
    section(&mut out, "인기 트렌드", &analysis.trends);
    section(&mut out, "핵심 키워드", &analysis.keywords);
    section(&mut out, "드라마 작법", &analysis.drama_techniques);
    out
}

fn section(out: &mut String, heading: &str, items: &[String]) {
    let _ = writeln!(out, "[{heading}]");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
    out.push('\n');
}

/// Numbered topic list, 1-based.
pub fn render_topics(topics: &[ScriptTopic]) -> String {
    let mut out = String::new();
    for (number, topic) in topics.iter().enumerate().map(|(i, t)| (i + 1, t)) {
        let _ = writeln!(out, "{number}. [{}] {}", topic.category.label(), topic.title);
        let _ = writeln!(out, "   {}", topic.description);
        let _ = writeln!(out, "   기법: {}", topic.drama_trope);
    }
    out
}

/// Script in the requested export format.
pub fn render_script(script: &GeneratedScript, format: ExportFormat) -> StorytellerResult<String> {
    match format {
        ExportFormat::Text => Ok(script.to_plain_text()),
        ExportFormat::Json => serde_json::to_string_pretty(script)
            .map_err(|e| JsonError::new(format!("Failed to serialize script: {}", e)).into()),
    }
}

/// Any serializable value as pretty JSON.
pub fn render_json<T: serde::Serialize>(value: &T) -> StorytellerResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| JsonError::new(format!("Failed to serialize output: {}", e)).into())
}
