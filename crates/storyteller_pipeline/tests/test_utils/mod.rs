//! Test utilities for pipeline tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse};

use storyteller_core::{GeneratedScript, ScriptTopic, TopicCategory};

/// A topic of the given category with predictable fields.
#[allow(dead_code)]
pub fn sample_topic(id: &str, category: TopicCategory) -> ScriptTopic {
    ScriptTopic {
        id: id.to_string(),
        title: format!("{} 이야기", category.label()),
        description: "30년 만에 돌아온 아들".to_string(),
        category,
        drama_trope: "출생의 비밀".to_string(),
    }
}

/// One topic per category, in declaration order.
#[allow(dead_code)]
pub fn four_topics() -> Vec<ScriptTopic> {
    vec![
        sample_topic("1", TopicCategory::Retirement),
        sample_topic("2", TopicCategory::TrueStory),
        sample_topic("3", TopicCategory::Twist),
        sample_topic("4", TopicCategory::Romance),
    ]
}

/// A complete script.
#[allow(dead_code)]
pub fn sample_script() -> GeneratedScript {
    GeneratedScript {
        title: "전 재산을 물려받은 아들이 사라졌다".to_string(),
        logline: "유산을 챙긴 아들이 떠난 뒤 홀로 일어선 어머니".to_string(),
        characters: "김순자(72): 화자, 억척스러운 어머니".to_string(),
        analysis_note: "권선징악 구조로 시청 지속 시간을 늘린다".to_string(),
        full_script: "내레이션: 그날 아침, 순자 씨는...".to_string(),
    }
}
