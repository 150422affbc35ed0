//! Recommended script topics (stage 2).

use serde::{Deserialize, Serialize};

/// One of the four story categories a recommendation batch covers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    strum::Display, strum::EnumString, strum::EnumIter, strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TopicCategory {
    /// Life after retirement
    Retirement,
    /// Based on a true story
    TrueStory,
    /// Twist drama
    Twist,
    /// Late-life romance
    Romance,
}

impl TopicCategory {
    /// Korean display label, as used in the recommendation prompt.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyteller_core::TopicCategory;
    ///
    /// assert_eq!(TopicCategory::Romance.label(), "황혼 로맨스");
    /// assert_eq!(TopicCategory::TrueStory.to_string(), "true_story");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            TopicCategory::Retirement => "노후 사연",
            TopicCategory::TrueStory => "실화 기반",
            TopicCategory::Twist => "반전 드라마",
            TopicCategory::Romance => "황혼 로맨스",
        }
    }

    /// Wire values accepted by the response schema, in declaration order.
    pub fn wire_values() -> Vec<&'static str> {
        use strum::IntoEnumIterator;
        Self::iter().map(<&'static str>::from).collect()
    }
}

/// A single recommended story idea.
///
/// Selecting one of these is the input to script generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptTopic {
    /// Identifier, unique within its batch
    pub id: String,
    /// Working title
    pub title: String,
    /// Short synopsis
    pub description: String,
    /// Story category
    pub category: TopicCategory,
    /// Dramatic device to apply (e.g. hidden parentage, amnesia)
    pub drama_trope: String,
}
