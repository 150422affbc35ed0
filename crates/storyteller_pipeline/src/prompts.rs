//! Persona directive and stage prompts.

use storyteller_core::ScriptTopic;

/// System instruction sent with every call.
pub const PERSONA_DIRECTIVE: &str = "\
당신은 대한민국 최고의 시니어 전문 방송 작가이자 유튜브 기획자입니다.
60대 이상 시청자들의 심리(고독, 가족애, 건강, 재산 문제, 과거의 향수)를 완벽하게 이해하고 있습니다.
'사랑과 전쟁', '전원일기', 그리고 최근 인기 있는 시니어 유튜브 스토리텔링 채널들의 흥행 공식을 꿰뚫고 있습니다.
자극적이지만 공감 가고, 눈물 쏙 빼는 감동과 사이다 같은 반전을 자유자재로 구사합니다.";

/// Stage 1: trend analysis of senior storytelling channels.
pub const TREND_ANALYSIS_PROMPT: &str = "현재 유튜브에서 5060, 7080 세대에게 인기 있는 사연 채널들의 대본 특징을 분석해주세요. 주요 키워드, 인기 소재(노후 파산, 황혼 이혼, 효도 사기 등), 그리고 드라마 작법(갈등 고조 방식)을 분석해서 JSON으로 반환해주세요.";

/// Stage 2: four topic ideas, one per category.
pub const TOPIC_RECOMMENDATION_PROMPT: &str = "시니어 타겟 유튜브 채널을 위한 대박 예감 사연 주제 4가지를 추천해주세요. (노후 사연, 실화 기반, 반전 드라마, 황혼 로맨스 각 1개씩). JSON 형식으로.";

/// Stage 3: the full script prompt for `topic`.
///
/// Only the title, description and drama trope are interpolated.
///
/// # Examples
///
/// ```
/// use storyteller_core::{ScriptTopic, TopicCategory};
/// use storyteller_pipeline::script_prompt;
///
/// let topic = ScriptTopic {
///     id: "1".to_string(),
///     title: "아들의 배신".to_string(),
///     description: "전 재산을 물려준 뒤".to_string(),
///     category: TopicCategory::Twist,
///     drama_trope: "출생의 비밀".to_string(),
/// };
/// let prompt = script_prompt(&topic);
/// assert!(prompt.contains("주제: 아들의 배신"));
/// assert!(prompt.contains("적용 기법: 출생의 비밀"));
/// ```
pub fn script_prompt(topic: &ScriptTopic) -> String {
    format!(
        "주제: {title}
설명: {description}
적용 기법: {trope}

위 주제를 바탕으로 시니어들이 열광할 만한 60분 분량(읽는 속도 고려, 매우 긴 호흡)의 유튜브 사연 대본을 작성해주세요.

[요구사항]
1. **역추적 분석**: 먼저 이 대본이 왜 시니어에게 먹힐 수밖에 없는지, 어떤 한국 드라마의 기법(예: 김수현 작가의 대사 톤, 문영남 작가의 갈등 구조 등)을 차용했는지 '분석 노트'를 작성하세요.
2. **캐릭터 설정**: 주인공(화자)과 주변 인물의 성격, 말투를 상세히 설정하세요.
3. **대본 본문**:
   - 오프닝: 시청자의 채널 고정을 유도하는 강력한 멘트.
   - 전개: 고구마 같은 답답한 현실과 갈등 심화.
   - 절정: 갈등의 폭발.
   - 결말: 사이다 같은 해결 혹은 가슴 뭉클한 교훈 (권선징악).
   - 내레이션 형식이지만, 중간중간 생생한 대화체가 섞인 라디오 드라마 스타일로 작성하세요.
   - 분량을 최대한 길게 뽑아주세요. (최소 {min_chars}자 이상).

출력 포맷(JSON):
{{
  \"title\": \"자극적인 썸네일용 제목\",
  \"logline\": \"한 줄 요약\",
  \"characters\": \"등장인물 소개\",
  \"analysisNote\": \"이 대본의 흥행 전략 분석\",
  \"fullScript\": \"대본 전체 내용...\"
}}",
        title = topic.title,
        description = topic.description,
        trope = topic.drama_trope,
        min_chars = MIN_SCRIPT_CHARS,
    )
}

/// Minimum script length requested from the provider, in characters.
///
/// Requested, not enforced: a shorter script is still returned.
pub const MIN_SCRIPT_CHARS: usize = 5000;
