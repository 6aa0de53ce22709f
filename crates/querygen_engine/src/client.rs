use std::time::Duration;

use futures_util::StreamExt;
use querygen_logging::qg_debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    types::{GenerateResponse, SuggestResponse},
    BackendError, FailureKind, GenerateRequest, SuggestRequest,
};

const GENERATE_ENDPOINT: &str = "generate";
const SUGGEST_ENDPOINT: &str = "ai_suggestions";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(15),
            max_bytes: 1024 * 1024,
        }
    }
}

/// The two backend calls the controller depends on.
#[async_trait::async_trait]
pub trait QueryBackend: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<String>, BackendError>;

    async fn suggest(&self, request: &SuggestRequest) -> Result<Vec<String>, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: ClientSettings,
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: ClientSettings) -> Result<Self, BackendError> {
        let mut base_url = Url::parse(&settings.base_url)
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))?;
        // Endpoints resolve below the configured path, not beside it.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            base_url,
            client,
        })
    }

    pub fn endpoint(&self, name: &str) -> Result<Url, BackendError> {
        self.base_url
            .join(name)
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn post_json<B, R>(&self, name: &str, body: &B) -> Result<R, BackendError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(name)?;
        let payload = serde_json::to_vec(body)
            .map_err(|err| BackendError::new(FailureKind::MalformedBody, err.to_string()))?;
        qg_debug!("POST {} ({} bytes)", url, payload.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(BackendError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(BackendError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| BackendError::new(FailureKind::MalformedBody, err.to_string()))
    }
}

#[async_trait::async_trait]
impl QueryBackend for ReqwestBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<String>, BackendError> {
        let response: GenerateResponse = self.post_json(GENERATE_ENDPOINT, request).await?;
        Ok(response.result.unwrap_or_default())
    }

    async fn suggest(&self, request: &SuggestRequest) -> Result<Vec<String>, BackendError> {
        let response: SuggestResponse = self.post_json(SUGGEST_ENDPOINT, request).await?;
        Ok(response.suggestions.unwrap_or_default())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::new(FailureKind::Timeout, err.to_string());
    }
    BackendError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base_url: &str) -> ReqwestBackend {
        ReqwestBackend::new(ClientSettings {
            base_url: base_url.to_string(),
            ..ClientSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoints_resolve_under_base_path() {
        assert_eq!(
            backend("http://localhost:5000").endpoint("generate").unwrap().as_str(),
            "http://localhost:5000/generate"
        );
        assert_eq!(
            backend("http://localhost/app").endpoint("ai_suggestions").unwrap().as_str(),
            "http://localhost/app/ai_suggestions"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ReqwestBackend::new(ClientSettings {
            base_url: "not a url".to_string(),
            ..ClientSettings::default()
        })
        .unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
