//! Questionnaire page: load questions, render the form, submit answers.

use std::sync::Arc;

use client_core::{AssessmentApi, TransportResult};
use shared::{
    domain::{AnswerSet, AssessmentId, Question},
    protocol::SubmissionResponse,
};
use tracing::{error, info, warn};
use views::{
    banner,
    form::{form_fields, FormField},
    questionnaire::question_blocks,
};

use crate::{document::QuestionnaireDocument, form::FormState, route::results_location};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionnaireState {
    Loading,
    /// Form rendered and accepting input.
    Ready,
    /// Questions could not be fetched; the page shows an error banner.
    LoadFailed,
    Submitted {
        assessment_id: AssessmentId,
        location: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Navigate to this location.
    Redirect(String),
    /// Required fields are empty; nothing was sent.
    Blocked(Vec<String>),
    /// The service rejected or never received the answers; the form is intact.
    Failed(String),
    /// No form to submit, or a submission is already in flight.
    NotReady,
}

pub struct QuestionnaireFlow {
    api: Arc<dyn AssessmentApi>,
    questions: Vec<Question>,
    state: QuestionnaireState,
    document: QuestionnaireDocument,
}

impl QuestionnaireFlow {
    pub fn new(api: Arc<dyn AssessmentApi>) -> Self {
        Self {
            api,
            questions: Vec::new(),
            state: QuestionnaireState::Loading,
            document: QuestionnaireDocument::default(),
        }
    }

    pub fn state(&self) -> &QuestionnaireState {
        &self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn document(&self) -> &QuestionnaireDocument {
        &self.document
    }

    /// Form controls currently rendered in the question container.
    pub fn fields(&self) -> Vec<FormField> {
        form_fields(&self.document.questions_container)
    }

    pub async fn load(&mut self) {
        self.state = QuestionnaireState::Loading;
        let result = self.api.fetch_questionnaire().await;
        match result {
            Ok(response) => {
                info!(questions = response.questions.len(), "questionnaire loaded");
                self.document.questions_container = question_blocks(&response.questions);
                self.questions = response.questions;
                self.state = QuestionnaireState::Ready;
            }
            Err(err) => {
                error!(error = %err, "error loading questionnaire");
                self.document.questions_container =
                    vec![banner::error_banner(banner::QUESTIONS_LOAD_FAILED)];
                self.questions.clear();
                self.state = QuestionnaireState::LoadFailed;
            }
        }
    }

    /// Validates and collects the answers, then marks the submit control busy.
    pub fn begin_submit(&mut self, form: &FormState) -> Result<AnswerSet, SubmitOutcome> {
        if self.state != QuestionnaireState::Ready || self.document.submit.busy {
            return Err(SubmitOutcome::NotReady);
        }

        let fields = self.fields();
        let missing = form.missing_required(&fields);
        if !missing.is_empty() {
            warn!(?missing, "required questions unanswered");
            return Err(SubmitOutcome::Blocked(missing));
        }

        self.document.submit.busy = true;
        Ok(form.collect(&fields))
    }

    /// Applies the service's answer to a submission started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, result: TransportResult<SubmissionResponse>) -> SubmitOutcome {
        match result {
            Ok(response) => {
                let location = results_location(&response.assessment_id);
                info!(assessment_id = %response.assessment_id, %location, "answers submitted");
                self.state = QuestionnaireState::Submitted {
                    assessment_id: response.assessment_id,
                    location: location.clone(),
                };
                SubmitOutcome::Redirect(location)
            }
            Err(err) => {
                error!(error = %err, "error submitting questionnaire");
                self.document.submit.busy = false;
                self.document
                    .questions_container
                    .push(banner::submission_error_banner());
                SubmitOutcome::Failed(err.detail())
            }
        }
    }

    pub async fn submit(&mut self, form: &FormState) -> SubmitOutcome {
        let answers = match self.begin_submit(form) {
            Ok(answers) => answers,
            Err(outcome) => return outcome,
        };
        let result = self.api.submit_answers(&answers).await;
        self.finish_submit(result)
    }
}
