//! Generated long-form script (stage 3).

use serde::{Deserialize, Serialize};

/// The terminal artifact of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScript {
    /// Thumbnail-ready title
    pub title: String,
    /// One-line summary
    pub logline: String,
    /// Character sheet
    pub characters: String,
    /// Why this script should land with the audience
    pub analysis_note: String,
    /// The full narration script (several thousand characters)
    pub full_script: String,
}

impl GeneratedScript {
    /// Render the plain-text export handed to readers and download targets.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyteller_core::GeneratedScript;
    ///
    /// let script = GeneratedScript {
    ///     title: "마지막 편지".to_string(),
    ///     logline: "요약".to_string(),
    ///     characters: "김순자".to_string(),
    ///     analysis_note: "분석".to_string(),
    ///     full_script: "본문".to_string(),
    /// };
    /// let text = script.to_plain_text();
    /// assert!(text.starts_with("제목: 마지막 편지"));
    /// assert!(text.ends_with("본문\n"));
    /// ```
    pub fn to_plain_text(&self) -> String {
        format!(
            "제목: {}\n\n한 줄 요약: {}\n\n[등장인물]\n{}\n\n[흥행 전략 분석]\n{}\n\n[대본]\n{}\n",
            self.title.trim(),
            self.logline.trim(),
            self.characters.trim(),
            self.analysis_note.trim(),
            self.full_script.trim(),
        )
    }

    /// Character count of the script body.
    pub fn script_length(&self) -> usize {
        self.full_script.chars().count()
    }
}
