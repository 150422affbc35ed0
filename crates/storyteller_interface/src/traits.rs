//! Trait definitions for generation backends.

use async_trait::async_trait;
use storyteller_core::{Credential, StructuredRequest, StructuredResponse};
use storyteller_error::GenerationResult;

/// A backend that produces schema-constrained text.
///
/// Implementations send the persona directive, task prompt and response
/// schema in one call and return the raw text body untouched. Parsing belongs
/// to the caller. A provider that answers without text returns
/// `Ok` with an empty [`StructuredResponse`], not an error.
#[async_trait]
pub trait StructuredDriver: Send + Sync {
    /// Run one generation call authenticated with `credential`.
    async fn generate_structured(
        &self,
        credential: &Credential,
        request: &StructuredRequest,
    ) -> GenerationResult<StructuredResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}
