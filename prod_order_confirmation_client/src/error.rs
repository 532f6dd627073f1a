use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::{Error, Response};

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("request error: {0}")]
    Generic(#[from] anyhow::Error),
    #[error("network error: {status_code} {message}")]
    NetworkError { status_code: u16, message: String },
    #[error("unable to decode {entity} response: {source}")]
    Decode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("api key is not a valid header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
    #[error("unable to build http client: {0}")]
    Build(#[source] reqwest::Error),
}

#[async_trait]
pub trait ResponseExt {
    async fn map_client_error(self) -> Result<Response, ClientError>;
}

#[async_trait]
impl ResponseExt for Response {
    async fn map_client_error(self) -> Result<Response, ClientError> {
        let status = self.status();
        if status.is_success() {
            return Ok(self);
        }

        let body = self.text().await.unwrap_or_default();
        tracing::error!(
            body=%body,
            status=%status,
            "unexpected response from production order confirmation service"
        );
        Err(ClientError::NetworkError {
            status_code: status.as_u16(),
            message: body,
        })
    }
}

#[async_trait]
impl ResponseExt for Result<Response, Error> {
    async fn map_client_error(self) -> Result<Response, ClientError> {
        match self {
            Ok(response) => response.map_client_error().await,
            Err(e) => Err(ClientError::Generic(anyhow!("API request error: {}", e))),
        }
    }
}
