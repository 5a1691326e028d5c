use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use time::PrimitiveDateTime;

use crate::dto::{
    FilterType, HealthStatus, InReviewEntry, LoggedHourEntry, MarkReviewedRequest, ReportRequest,
    SubmitHoursRequest, WorkerEntry,
};

const LOGGED_HOURS: &str = "api/logged-hours";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("could not acquire access token: {0}")]
    Token(String),
    #[error("not authorized to call {0}")]
    Unauthorized(String),
    #[error("{call} returned {status}: {body}")]
    Status {
        call: String,
        status: StatusCode,
        body: String,
    },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Source of bearer tokens for the API scope.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, ClientError>;
}

/// Hands out one fixed token.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider(String);

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, ClientError> {
        Ok(self.0.clone())
    }
}

#[derive(Clone)]
pub struct HoursClient {
    client: Client,
    base_url: Url,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl HoursClient {
    pub fn new(base_url: &str, tokens: Arc<dyn AccessTokenProvider>) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url, tokens)
    }

    pub fn with_client(
        client: Client,
        base_url: &str,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ClientError> {
        // Url::join drops the last segment unless the base ends with a slash.
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;

        Ok(Self {
            client,
            base_url,
            tokens,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    async fn send(&self, request: RequestBuilder, call_name: &str) -> Result<Response, ClientError> {
        let token = self.tokens.access_token().await?;
        let response = request.bearer_auth(token).send().await?;

        let status = response.status();
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            tracing::warn!("{} was rejected with {}", call_name, status);
            return Err(ClientError::Unauthorized(call_name.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                call: call_name.to_string(),
                status,
                body,
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T, ClientError> {
        let response = self.send(request, call_name).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_without_body(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<(), ClientError> {
        self.send(request, call_name).await?.bytes().await?;
        Ok(())
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.get_json(self.client.get(self.endpoint("health")?), "GET /health")
            .await
    }

    pub async fn list_own_hours(&self) -> Result<Vec<LoggedHourEntry>, ClientError> {
        self.get_json(
            self.client.get(self.endpoint(LOGGED_HOURS)?),
            "GET /api/logged-hours",
        )
        .await
    }

    pub async fn submit_hours(
        &self,
        date: PrimitiveDateTime,
        description: &str,
        hours: i32,
    ) -> Result<(), ClientError> {
        self.send_without_body(
            self.client
                .post(self.endpoint(LOGGED_HOURS)?)
                .json(&SubmitHoursRequest {
                    date,
                    description: description.to_string(),
                    hours,
                }),
            "POST /api/logged-hours",
        )
        .await
    }

    pub async fn list_in_review(&self) -> Result<Vec<InReviewEntry>, ClientError> {
        self.get_json(
            self.client
                .get(self.endpoint(&format!("{LOGGED_HOURS}/in-review"))?),
            "GET /api/logged-hours/in-review",
        )
        .await
    }

    pub async fn mark_reviewed(&self, id: i32) -> Result<(), ClientError> {
        self.send_without_body(
            self.client
                .post(self.endpoint(&format!("{LOGGED_HOURS}/in-review"))?)
                .json(&MarkReviewedRequest { id }),
            "POST /api/logged-hours/in-review",
        )
        .await
    }

    pub async fn report(
        &self,
        worker_id: &str,
        filter_type: FilterType,
        date_filter: PrimitiveDateTime,
    ) -> Result<Vec<LoggedHourEntry>, ClientError> {
        self.get_json(
            self.client
                .post(self.endpoint(&format!("{LOGGED_HOURS}/report"))?)
                .json(&ReportRequest {
                    worker_id: worker_id.to_string(),
                    filter_type,
                    date_filter,
                }),
            "POST /api/logged-hours/report",
        )
        .await
    }

    pub async fn list_workers(&self) -> Result<Vec<WorkerEntry>, ClientError> {
        self.get_json(
            self.client
                .get(self.endpoint(&format!("{LOGGED_HOURS}/workers"))?),
            "GET /api/logged-hours/workers",
        )
        .await
    }
}
