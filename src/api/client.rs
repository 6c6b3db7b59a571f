use crate::api::models::{AnalysisRequest, AnalysisResult, BootstrapResponse};
use crate::core::ports::AnalysisBackend;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

pub const BOOTSTRAP_PATH: &str = "create-sample-data";
pub const ANALYZE_PATH: &str = "analyze";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("response is not a valid {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// reqwest-backed client for the analysis server.
#[derive(Clone)]
pub struct HttpBackend {
    reqwest_client: reqwest::Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(mut base: Url) -> Self {
        // Url::join drops the last path segment unless it ends with a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            reqwest_client: reqwest::Client::new(),
            base,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path)?)
    }

    /// Any status is accepted as long as the body decodes into `T`.
    async fn decode<T: DeserializeOwned>(
        res: reqwest::Response,
        what: &'static str,
    ) -> Result<T, ClientError> {
        debug!(status = %res.status(), what, "response received");
        let body = res.bytes().await.map_err(ClientError::Body)?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { what, source })
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    async fn bootstrap(&self) -> Result<BootstrapResponse, ClientError> {
        let url = self.endpoint(BOOTSTRAP_PATH)?;
        let res = self
            .reqwest_client
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        Self::decode(res, "bootstrap response").await
    }

    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        let url = self.endpoint(ANALYZE_PATH)?;
        let res = self
            .reqwest_client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        Self::decode(res, "analysis result").await
    }
}
