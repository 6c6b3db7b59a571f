use anyhow::Result;
use async_trait::async_trait;

use crate::api::client::ClientError;
use crate::api::models::{AnalysisRequest, AnalysisResult, BootstrapResponse};

/// Fixed storage key of the API key forwarded with analysis requests.
pub const API_KEY_STORAGE_KEY: &str = "gemini_api_key";

// Client-local key-value storage. No expiry, no encryption.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn bootstrap(&self) -> Result<BootstrapResponse, ClientError>;
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, ClientError>;
}
