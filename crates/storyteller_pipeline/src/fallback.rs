//! Canned analysis used when the trend analysis stage fails.

use storyteller_core::AnalysisResult;

const TRENDS: [&str; 3] = [
    "황혼 육아 갈등",
    "노년의 재혼과 유산 상속",
    "자식에게 버림받은 부모의 성공",
];

const KEYWORDS: [&str; 4] = ["배신", "복수", "인생 역전", "뒤늦은 깨달음"];

const DRAMA_TECHNIQUES: [&str; 3] = ["초반 5초 후킹", "권선징악 구조", "감정적 독백"];

/// The fixed analysis returned in place of a failed stage 1 call.
pub fn fallback_analysis() -> AnalysisResult {
    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    AnalysisResult {
        trends: owned(&TRENDS),
        keywords: owned(&KEYWORDS),
        drama_techniques: owned(&DRAMA_TECHNIQUES),
    }
}
