//! Provider integrations for Storyteller.
//!
//! Only Google Gemini is supported. The client speaks the REST
//! `generateContent` endpoint directly so it can pass a response schema and
//! request `application/json` output.
//!
//! ```no_run
//! use storyteller_core::{Credential, StructuredRequest};
//! use storyteller_interface::StructuredDriver;
//! use storyteller_models::GeminiClient;
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = StructuredRequest::builder()
//!     .model("gemini-2.0-flash-exp")
//!     .prompt("세 가지 키워드를 알려주세요")
//!     .system_instruction("당신은 방송 작가입니다")
//!     .response_schema(json!({"type": "ARRAY", "items": {"type": "STRING"}}))
//!     .build()?;
//! let response = client
//!     .generate_structured(&Credential::new("AIza..."), &request)
//!     .await?;
//! println!("{:?}", response.text());
//! # Ok(())
//! # }
//! ```

mod gemini;

pub use gemini::{DEFAULT_API_BASE_URL, GeminiClient, GeminiResult};
