//! Page flows for the questionnaire and results pages.
//!
//! Each flow owns its page state and an injected [`AssessmentApi`]; views
//! are produced by the `views` crate and stored in headless documents.

use std::sync::Arc;

use client_core::AssessmentApi;
use tracing::{error, info};
use url::Url;

pub mod document;
pub mod form;
pub mod questionnaire;
pub mod results;
pub mod route;

pub use form::FormState;
pub use questionnaire::{QuestionnaireFlow, QuestionnaireState, SubmitOutcome};
pub use results::{ResultsFlow, ResultsState};
pub use route::Route;

pub enum PageFlow {
    Questionnaire(QuestionnaireFlow),
    Results(ResultsFlow),
    /// Nothing to drive on this page.
    Idle(Route),
}

/// Runs the flow for the page at `location`, then logs service health.
pub async fn init(api: Arc<dyn AssessmentApi>, location: &Url) -> PageFlow {
    let route = Route::from_url(location);
    info!(?route, %location, "page init");

    let flow = match route {
        Route::Questionnaire => {
            let mut flow = QuestionnaireFlow::new(Arc::clone(&api));
            flow.load().await;
            PageFlow::Questionnaire(flow)
        }
        Route::Results {
            assessment_id: Some(assessment_id),
        } => {
            let mut flow = ResultsFlow::new(Arc::clone(&api), assessment_id);
            flow.load().await;
            PageFlow::Results(flow)
        }
        other => PageFlow::Idle(other),
    };

    log_health(api.as_ref()).await;
    flow
}

/// Health check whose outcome is only logged.
pub async fn log_health(api: &dyn AssessmentApi) -> bool {
    match api.check_health().await {
        Ok(status) => {
            info!(status = status.status.as_deref().unwrap_or("unknown"), "API is healthy");
            true
        }
        Err(err) => {
            error!(error = %err, "API health check failed");
            false
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
