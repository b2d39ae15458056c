//! Results page: fetch the assessment and render profile and recommendations.

use std::sync::Arc;

use client_core::AssessmentApi;
use shared::domain::AssessmentId;
use tracing::{error, info};
use views::{banner, results};

use crate::document::ResultsDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsState {
    Loading,
    Rendered,
    /// Terminal for this page load; the banner links back to the questionnaire.
    Failed,
}

pub struct ResultsFlow {
    api: Arc<dyn AssessmentApi>,
    assessment_id: AssessmentId,
    state: ResultsState,
    document: ResultsDocument,
}

impl ResultsFlow {
    pub fn new(api: Arc<dyn AssessmentApi>, assessment_id: AssessmentId) -> Self {
        Self {
            api,
            assessment_id,
            state: ResultsState::Loading,
            document: ResultsDocument::default(),
        }
    }

    pub fn assessment_id(&self) -> &AssessmentId {
        &self.assessment_id
    }

    pub fn state(&self) -> ResultsState {
        self.state
    }

    pub fn document(&self) -> &ResultsDocument {
        &self.document
    }

    pub async fn load(&mut self) {
        self.state = ResultsState::Loading;
        self.document.loading_visible = true;
        self.document.content_visible = false;

        let result = self.api.fetch_results(&self.assessment_id).await;
        match result {
            Ok(response) => {
                if let Some(profile) = &response.profile {
                    self.document.profile_content = results::profile_view(profile);
                }
                if let Some(recommendations) = &response.recommendations {
                    info!(
                        assessment_id = %self.assessment_id,
                        recommendations = recommendations.len(),
                        "results loaded"
                    );
                    self.document.recommendations_container =
                        results::recommendation_views(recommendations);
                }
                self.document.loading_visible = false;
                self.document.content_visible = true;
                self.state = ResultsState::Rendered;
            }
            Err(err) => {
                error!(assessment_id = %self.assessment_id, error = %err, "error loading results");
                self.document.loading_visible = false;
                self.document.alerts.push(banner::restart_banner());
                self.state = ResultsState::Failed;
            }
        }
    }
}
