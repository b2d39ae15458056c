use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    decode,
    domain::{AnswerSet, AssessmentId, Profile, Question, Recommendation},
};

/// `GET /questionnaire`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// `POST /submit_questionnaire` body. `job_description` is always sent, as `null`
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub answers: AnswerSet,
    pub job_description: Option<String>,
}

impl SubmissionRequest {
    pub fn new(answers: AnswerSet) -> Self {
        Self {
            answers,
            job_description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub assessment_id: AssessmentId,
}

/// `GET /results/{assessment_id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsResponse {
    #[serde(default, deserialize_with = "decode::lenient", skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<AssessmentId>,
    #[serde(default, deserialize_with = "decode::lenient")]
    pub profile: Option<Profile>,
    #[serde(default, deserialize_with = "decode::lenient_list")]
    pub recommendations: Option<Vec<Recommendation>>,
}

/// `GET /health`. Fields beyond `status` are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default, deserialize_with = "decode::lenient_text")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some("healthy")
    }
}
