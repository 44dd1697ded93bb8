use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};
use gloo_timers::future::TimeoutFuture;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    ErrorResponse, ForgotPasswordRequest, ForgotPasswordResponse, MeResponse, PredictionOutcome,
    PredictionResult, ResetPasswordRequest, StudentFeatures, Submission, SubmissionsResponse,
    UserRecord,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::FrontendConfig;

/// Row count requested when the caller has no preference.
pub const DEFAULT_SUBMISSION_LIMIT: u32 = 50;

thread_local! {
    static SHARED_CLIENT: OnceCell<DropwatchClient> = const { OnceCell::new() };
}

/// Failures of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// No response arrived before the deadline.
    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
    /// Non-success status; `detail` is the backend's explanation, if any.
    #[error("server responded {status}: {detail}")]
    Status {
        /// Response status.
        status: StatusCode,
        /// Backend message or the status reason.
        detail: String,
    },
    /// Success status carrying an error payload.
    #[error("{0}")]
    Backend(String),
    /// The body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Text for a failure notification. `action` names what was attempted.
    #[must_use]
    pub fn user_message(&self, action: &str) -> String {
        match self {
            Self::Transport(_) => format!("{action} failed: unable to reach the server"),
            Self::Timeout(_) => format!("{action} failed: the server took too long to respond"),
            Self::Status { detail, .. } | Self::Backend(detail) => {
                format!("{action} failed: {detail}")
            }
            Self::Decode(_) => format!("{action} failed: unexpected response from the server"),
        }
    }
}

/// Map a non-success response to [`ApiError::Status`], preferring the
/// backend's own message over the bare status text.
pub(crate) fn status_error(status: StatusCode, body: &str) -> ApiError {
    let detail = ErrorResponse::from_body(body)
        .and_then(|error| error.summary().map(str::to_string))
        .or_else(|| {
            let text = body.trim();
            (!text.is_empty() && text.len() <= 200 && !text.starts_with('<'))
                .then(|| text.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request rejected")
                .to_string()
        });
    ApiError::Status { status, detail }
}

/// Check the status, then decode `body` as `T`.
pub(crate) fn parse_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<T, ApiError> {
    if !status.is_success() {
        return Err(status_error(status, body));
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Backend client for predictions, submissions and the auth endpoints.
#[derive(Clone, Debug)]
pub struct DropwatchClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl DropwatchClient {
    /// Client for `base_url` with a per-request `timeout`.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            timeout,
        }
    }

    /// Per-thread client built from [`FrontendConfig`].
    #[must_use]
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::new();
                Self::new(config.backend_url(), config.request_timeout())
            })
            .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Request deadline.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Race `request` against the configured deadline.
    pub(crate) async fn with_deadline<F, T>(&self, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, reqwest::Error>>,
    {
        let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        let request = pin!(request);
        let deadline = pin!(TimeoutFuture::new(millis));
        match select(request, deadline).await {
            Either::Left((result, _)) => result.map_err(ApiError::from),
            Either::Right(((), _)) => {
                warn!(timeout_ms = millis, "request deadline exceeded");
                Err(ApiError::Timeout(self.timeout))
            }
        }
    }

    async fn call<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let (status, body) = self
            .with_deadline(async move {
                let response = request.send().await?;
                let status = response.status();
                let body = response.text().await?;
                Ok::<_, reqwest::Error>((status, body))
            })
            .await?;
        debug!(%status, bytes = body.len(), "backend responded");
        parse_response(status, &body)
    }

    pub(crate) fn predict_request(&self, features: &StudentFeatures) -> RequestBuilder {
        self.client
            .post(self.api_url("api/students/predict"))
            .json(features)
    }

    pub(crate) fn submissions_request(&self, limit: u32) -> RequestBuilder {
        self.client
            .get(self.api_url("api/admin/submissions"))
            .query(&[("limit", limit)])
    }

    pub(crate) fn me_request(&self, token: &str) -> RequestBuilder {
        self.client.get(self.api_url("auth/me")).bearer_auth(token)
    }

    pub(crate) fn forgot_password_request(&self, email: &str) -> RequestBuilder {
        let payload = ForgotPasswordRequest {
            email: email.trim().to_string(),
        };
        self.client
            .post(self.api_url("auth/forgot-password"))
            .json(&payload)
    }

    pub(crate) fn reset_password_request(&self, token: &str, new_password: &str) -> RequestBuilder {
        let payload = ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        self.client
            .post(self.api_url("auth/reset-password"))
            .json(&payload)
    }

    /// Score one student.
    ///
    /// # Errors
    /// Any [`ApiError`]; a `{"error": ...}` body becomes [`ApiError::Backend`].
    pub async fn predict_student(
        &self,
        features: &StudentFeatures,
    ) -> Result<PredictionResult, ApiError> {
        let outcome: PredictionOutcome = self.call(self.predict_request(features)).await?;
        outcome.into_result().map_err(ApiError::Backend)
    }

    /// Most recent prediction submissions, newest first.
    ///
    /// # Errors
    /// Any [`ApiError`].
    pub async fn get_submissions(&self, limit: u32) -> Result<Vec<Submission>, ApiError> {
        let response: SubmissionsResponse = self.call(self.submissions_request(limit)).await?;
        Ok(response.submissions)
    }

    /// Resolve an OAuth token to the user it was issued for.
    ///
    /// # Errors
    /// Any [`ApiError`]; an expired or forged token is a 401 status.
    pub async fn me(&self, token: &str) -> Result<UserRecord, ApiError> {
        let response: MeResponse = self.call(self.me_request(token)).await?;
        Ok(response.user)
    }

    /// Ask for a password reset link.
    ///
    /// # Errors
    /// Any [`ApiError`].
    pub async fn forgot_password(&self, email: &str) -> Result<ForgotPasswordResponse, ApiError> {
        self.call(self.forgot_password_request(email)).await
    }

    /// Set a new password using a reset token; returns the server's message.
    ///
    /// # Errors
    /// Any [`ApiError`]; a bad token is a 400 status.
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<Option<String>, ApiError> {
        let response: ForgotPasswordResponse = self
            .call(self.reset_password_request(token, new_password))
            .await?;
        Ok(response.message)
    }
}
