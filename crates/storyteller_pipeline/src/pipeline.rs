//! Orchestration of the three generation stages.
//!
//! The stages fail differently on purpose:
//!
//! | Stage | On failure |
//! |---|---|
//! | [`ScriptPipeline::analyze_trends`] | canned analysis, plus a credential re-prompt signal |
//! | [`ScriptPipeline::recommend_topics`] | empty list |
//! | [`ScriptPipeline::generate_script`] | error returned to the caller |

use derive_getters::Getters;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use storyteller_core::{AnalysisResult, Credential, GeneratedScript, ScriptTopic};
use storyteller_error::{GenerationError, GenerationErrorKind, GenerationResult, StorytellerResult};
use storyteller_interface::StructuredDriver;
use storyteller_storage::{CredentialStore, KeyValueStore};

use crate::{
    Stage, TOPIC_RECOMMENDATION_PROMPT, TREND_ANALYSIS_PROMPT, fallback_analysis,
    parse_structured, script_prompt,
};

/// Result of the trend analysis stage.
///
/// Always carries an analysis. When the call failed, the analysis is the
/// canned fallback and `degraded_by` records why.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct AnalysisOutcome {
    /// The analysis to show
    analysis: AnalysisResult,
    /// Failure that forced the fallback, if any
    degraded_by: Option<GenerationErrorKind>,
}

impl AnalysisOutcome {
    /// A successful provider analysis.
    pub fn fresh(analysis: AnalysisResult) -> Self {
        Self {
            analysis,
            degraded_by: None,
        }
    }

    /// The canned analysis, standing in after `cause`.
    pub fn fallback(cause: GenerationErrorKind) -> Self {
        Self {
            analysis: fallback_analysis(),
            degraded_by: Some(cause),
        }
    }

    /// Whether this is the canned fallback.
    pub fn is_fallback(&self) -> bool {
        self.degraded_by.is_some()
    }

    /// Whether the caller should prompt for a (new) credential.
    pub fn needs_credential(&self) -> bool {
        self.degraded_by
            .as_ref()
            .is_some_and(GenerationErrorKind::is_auth_failure)
    }

    /// Discard the failure cause.
    pub fn into_analysis(self) -> AnalysisResult {
        self.analysis
    }
}

/// Sequences the analysis, recommendation and script stages against one driver.
///
/// The credential is resolved from the store at the start of every call, so a
/// key persisted between calls takes effect immediately.
///
/// # Example
///
/// ```no_run
/// use storyteller_models::GeminiClient;
/// use storyteller_pipeline::ScriptPipeline;
/// use storyteller_storage::MemoryStore;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = ScriptPipeline::new(GeminiClient::new()?, MemoryStore::new(), "gemini-2.0-flash-exp");
/// pipeline.persist_credential("AIza...", false)?;
///
/// let analysis = pipeline.analyze_trends().await;
/// let topics = pipeline.recommend_topics().await;
/// if let Some(topic) = topics.first() {
///     let script = pipeline.generate_script(topic).await?;
///     println!("{}", script.title);
/// }
/// # let _ = analysis;
/// # Ok(())
/// # }
/// ```
pub struct ScriptPipeline<D: StructuredDriver, S: KeyValueStore> {
    driver: D,
    credentials: CredentialStore<S>,
    model: String,
}

impl<D: StructuredDriver, S: KeyValueStore> std::fmt::Debug for ScriptPipeline<D, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptPipeline")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl<D: StructuredDriver, S: KeyValueStore> ScriptPipeline<D, S> {
    /// Create a pipeline that calls `driver` with `model` for every stage.
    pub fn new(driver: D, store: S, model: impl Into<String>) -> Self {
        Self {
            driver,
            credentials: CredentialStore::new(store),
            model: model.into(),
        }
    }

    /// The provider driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The credential store.
    pub fn credentials(&self) -> &CredentialStore<S> {
        &self.credentials
    }

    /// Model identifier used for all stages.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Current credential, durable scope first.
    pub fn resolve_credential(&self) -> Option<Credential> {
        self.credentials.resolve()
    }

    /// Store a credential in the durable (`durable = true`) or session scope.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be written.
    pub fn persist_credential(&self, value: &str, durable: bool) -> StorytellerResult<()> {
        self.credentials.persist(value, durable)
    }

    /// Stage 1. Never fails: any failure yields the canned analysis.
    #[instrument(skip(self), fields(model = %self.model))]
    pub async fn analyze_trends(&self) -> AnalysisOutcome {
        match self
            .run_stage::<AnalysisResult>(Stage::Analysis, TREND_ANALYSIS_PROMPT)
            .await
        {
            Ok(analysis) => {
                info!(
                    trends = analysis.trends.len(),
                    keywords = analysis.keywords.len(),
                    "Trend analysis complete"
                );
                AnalysisOutcome::fresh(analysis)
            }
            Err(e) => {
                warn!(error = %e.kind(), "Trend analysis failed, using fallback");
                AnalysisOutcome::fallback(e.kind)
            }
        }
    }

    /// Stage 2. Never fails: any failure yields an empty list.
    ///
    /// On success the provider's order is kept; nothing is sorted or
    /// deduplicated.
    #[instrument(skip(self), fields(model = %self.model))]
    pub async fn recommend_topics(&self) -> Vec<ScriptTopic> {
        match self
            .run_stage::<Vec<ScriptTopic>>(Stage::Recommendation, TOPIC_RECOMMENDATION_PROMPT)
            .await
        {
            Ok(topics) => {
                info!(count = topics.len(), "Topics recommended");
                topics
            }
            Err(e) => {
                warn!(error = %e.kind(), "Topic recommendation failed");
                Vec::new()
            }
        }
    }

    /// Stage 3. Every failure is returned to the caller.
    ///
    /// # Errors
    ///
    /// - [`GenerationErrorKind::MissingCredential`] before any network call
    /// - [`GenerationErrorKind::TransportFailure`] when the provider call fails
    /// - [`GenerationErrorKind::EmptyResponse`] when no text comes back
    /// - [`GenerationErrorKind::MalformedResponse`] when the text is not a script
    #[instrument(skip(self, topic), fields(model = %self.model, topic_id = %topic.id))]
    pub async fn generate_script(&self, topic: &ScriptTopic) -> GenerationResult<GeneratedScript> {
        let script: GeneratedScript = self
            .run_stage(Stage::Generation, script_prompt(topic))
            .await
            .inspect_err(|e| warn!(error = %e.kind(), "Script generation failed"))?;

        info!(chars = script.script_length(), "Script generated");
        Ok(script)
    }

    async fn run_stage<T: DeserializeOwned>(
        &self,
        stage: Stage,
        prompt: impl Into<String>,
    ) -> GenerationResult<T> {
        let credential = self
            .credentials
            .resolve()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingCredential))?;

        let request = stage.request(&self.model, prompt);
        debug!(%stage, "Calling provider");

        let response = self
            .driver
            .generate_structured(&credential, &request)
            .await?;

        parse_structured(response.text().as_deref())
    }
}
