//! Stage-gated studio session driving the pipeline step by step.

use tracing::{info, instrument};

use storyteller_core::{GeneratedScript, ScriptTopic};
use storyteller_error::{SessionError, SessionErrorKind, StorytellerResult};
use storyteller_interface::StructuredDriver;
use storyteller_storage::KeyValueStore;

use crate::{AnalysisOutcome, ScriptPipeline};

/// Shown when the initial analysis failed for lack of a usable key.
pub const ANALYSIS_FAILED_MESSAGE: &str = "초기 분석 데이터 로드 실패. API 키를 확인해주세요.";
/// Shown when a recommendation round came back empty.
pub const TOPICS_FAILED_MESSAGE: &str = "주제 추천 생성에 실패했습니다.";
/// Shown when script generation failed.
pub const SCRIPT_FAILED_MESSAGE: &str =
    "대본 생성 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

/// Where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Step {
    /// Analysis shown, waiting for a topic request
    #[default]
    Dashboard,
    /// Topics shown, waiting for a choice
    TopicSelection,
    /// Script call in flight
    Generating,
    /// Script available
    Result,
}

/// One user's walk through analysis, topic choice and script generation.
///
/// ```text
/// Dashboard ──request_topics──▶ TopicSelection ──select_topic──▶ Generating ──▶ Result
///     ▲                              ▲                               │            │
///     │                              └────────── on failure ─────────┘            │
///     └───────────────────────────────── reset ───────────────────────────────────┘
/// ```
#[derive(Debug)]
pub struct StudioSession<D: StructuredDriver, S: KeyValueStore> {
    pipeline: ScriptPipeline<D, S>,
    step: Step,
    analysis: Option<AnalysisOutcome>,
    topics: Vec<ScriptTopic>,
    script: Option<GeneratedScript>,
    error: Option<String>,
    needs_credential: bool,
}

impl<D: StructuredDriver, S: KeyValueStore> StudioSession<D, S> {
    /// Wrap a pipeline; the session starts on the dashboard.
    pub fn new(pipeline: ScriptPipeline<D, S>) -> Self {
        Self {
            pipeline,
            step: Step::Dashboard,
            analysis: None,
            topics: Vec::new(),
            script: None,
            error: None,
            needs_credential: false,
        }
    }

    /// The underlying pipeline.
    pub fn pipeline(&self) -> &ScriptPipeline<D, S> {
        &self.pipeline
    }

    /// Current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Latest analysis, if `start` has run.
    pub fn analysis(&self) -> Option<&AnalysisOutcome> {
        self.analysis.as_ref()
    }

    /// Topics on offer.
    pub fn topics(&self) -> &[ScriptTopic] {
        &self.topics
    }

    /// Generated script, once in [`Step::Result`].
    pub fn script(&self) -> Option<&GeneratedScript> {
        self.script.as_ref()
    }

    /// User-facing message from the last failed step.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the user should be asked for a credential.
    pub fn needs_credential(&self) -> bool {
        self.needs_credential
    }

    /// Run the trend analysis and show it on the dashboard.
    ///
    /// # Errors
    ///
    /// Returns error if called outside [`Step::Dashboard`].
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> StorytellerResult<&AnalysisOutcome> {
        self.require(Step::Dashboard, "start analysis")?;

        let outcome = self.pipeline.analyze_trends().await;
        self.needs_credential = outcome.needs_credential();
        self.error = self
            .needs_credential
            .then(|| ANALYSIS_FAILED_MESSAGE.to_string());

        info!(
            fallback = outcome.is_fallback(),
            needs_credential = self.needs_credential,
            "Dashboard ready"
        );
        Ok(self.analysis.insert(outcome))
    }

    /// Persist a credential; on the dashboard, rerun the analysis with it.
    ///
    /// From topic selection the next `select_topic` picks the key up.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be written or a script call is in
    /// flight.
    #[instrument(skip(self, value))]
    pub async fn submit_credential(
        &mut self,
        value: &str,
        remember: bool,
    ) -> StorytellerResult<()> {
        if self.step == Step::Generating {
            return Err(self.wrong_step("submit a credential").into());
        }

        self.pipeline.persist_credential(value, remember)?;
        self.needs_credential = false;
        self.error = None;

        if self.step == Step::Dashboard {
            self.start().await?;
        }
        Ok(())
    }

    /// Ask for topic recommendations and move to [`Step::TopicSelection`].
    ///
    /// Allowed again from topic selection to re-roll the list.
    ///
    /// # Errors
    ///
    /// Returns error if called from [`Step::Generating`] or [`Step::Result`].
    #[instrument(skip(self))]
    pub async fn request_topics(&mut self) -> StorytellerResult<&[ScriptTopic]> {
        if !matches!(self.step, Step::Dashboard | Step::TopicSelection) {
            return Err(self.wrong_step("request topics").into());
        }

        self.error = None;
        self.topics = self.pipeline.recommend_topics().await;
        if self.topics.is_empty() {
            self.error = Some(TOPICS_FAILED_MESSAGE.to_string());
        }
        self.step = Step::TopicSelection;
        Ok(&self.topics)
    }

    /// Generate the script for topic `index`.
    ///
    /// On success the session moves to [`Step::Result`]. On a generation
    /// failure it returns to [`Step::TopicSelection`] with a user-facing
    /// message and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns error if not in topic selection, if `index` is out of range
    /// (both without any provider call), or if generation fails.
    #[instrument(skip(self))]
    pub async fn select_topic(&mut self, index: usize) -> StorytellerResult<&GeneratedScript> {
        self.require(Step::TopicSelection, "select a topic")?;
        let topic = self.topics.get(index).cloned().ok_or_else(|| {
            SessionError::new(SessionErrorKind::TopicOutOfRange {
                index,
                available: self.topics.len(),
            })
        })?;

        self.step = Step::Generating;
        self.error = None;

        match self.pipeline.generate_script(&topic).await {
            Ok(script) => {
                self.step = Step::Result;
                Ok(self.script.insert(script))
            }
            Err(e) => {
                self.needs_credential = e.kind().is_auth_failure();
                self.error = Some(SCRIPT_FAILED_MESSAGE.to_string());
                self.step = Step::TopicSelection;
                Err(e.into())
            }
        }
    }

    /// Back to the dashboard, dropping topics and script.
    ///
    /// The analysis is kept.
    pub fn reset(&mut self) {
        self.step = Step::Dashboard;
        self.topics.clear();
        self.script = None;
        self.error = None;
    }

    #[track_caller]
    fn require(&self, expected: Step, operation: &'static str) -> Result<(), SessionError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(self.wrong_step(operation))
        }
    }

    #[track_caller]
    fn wrong_step(&self, operation: &'static str) -> SessionError {
        SessionError::new(SessionErrorKind::WrongStep {
            operation,
            step: self.step.to_string(),
        })
    }
}
