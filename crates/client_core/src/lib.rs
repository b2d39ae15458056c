use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    domain::{AnswerSet, AssessmentId},
    protocol::{
        HealthStatus, QuestionnaireResponse, ResultsResponse, SubmissionRequest,
        SubmissionResponse,
    },
};
use tracing::{debug, error};
use url::Url;

pub mod config;
pub mod error;

pub use config::ClientSettings;
pub use error::TransportError;

pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Calls against the assessment service. Every call fails fast; nothing is retried.
#[async_trait]
pub trait AssessmentApi: Send + Sync {
    async fn fetch_questionnaire(&self) -> TransportResult<QuestionnaireResponse>;
    async fn submit_answers(&self, answers: &AnswerSet) -> TransportResult<SubmissionResponse>;
    async fn fetch_results(&self, assessment_id: &AssessmentId)
        -> TransportResult<ResultsResponse>;
    async fn check_health(&self) -> TransportResult<HealthStatus>;
}

pub struct AssessmentClient {
    http: Client,
    base_url: Url,
}

impl AssessmentClient {
    pub fn new(base_url: &str) -> TransportResult<Self> {
        let base_url = Url::parse(base_url).map_err(|err| TransportError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "url cannot carry a path".to_string(),
            });
        }
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> TransportResult<Self> {
        Self::new(&settings.resolve_base_url())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> TransportResult<T> {
        let url = self.endpoint(segments);
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(TransportError::Network)?;
        read_json(response).await
    }

    async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> TransportResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(TransportError::Network)?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> TransportResult<T> {
    let status = response.status();
    let body = response.bytes().await.map_err(TransportError::Network)?;

    if !status.is_success() {
        return Err(TransportError::Status {
            status,
            detail: error::error_detail(status, &body),
        });
    }

    serde_json::from_slice(&body).map_err(|source| TransportError::Decode { status, source })
}

#[async_trait]
impl AssessmentApi for AssessmentClient {
    async fn fetch_questionnaire(&self) -> TransportResult<QuestionnaireResponse> {
        self.get_json(&["questionnaire"])
            .await
            .inspect_err(|err| error!(error = %err, "error fetching questionnaire"))
    }

    async fn submit_answers(&self, answers: &AnswerSet) -> TransportResult<SubmissionResponse> {
        let body = SubmissionRequest::new(answers.clone());
        self.post_json(&["submit_questionnaire"], &body)
            .await
            .inspect_err(|err| error!(error = %err, "error submitting questionnaire"))
    }

    async fn fetch_results(
        &self,
        assessment_id: &AssessmentId,
    ) -> TransportResult<ResultsResponse> {
        self.get_json(&["results", assessment_id.as_str()])
            .await
            .inspect_err(|err| {
                error!(assessment_id = %assessment_id, error = %err, "error fetching results")
            })
    }

    async fn check_health(&self) -> TransportResult<HealthStatus> {
        self.get_json(&["health"])
            .await
            .inspect_err(|err| error!(error = %err, "error checking API health"))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
