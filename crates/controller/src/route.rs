//! Page detection and the navigation contract between the two pages.

use shared::domain::AssessmentId;
use url::{form_urlencoded, Url};

pub const QUESTIONNAIRE_PAGE: &str = "questionnaire.html";
pub const RESULTS_PAGE: &str = "results.html";
pub const ASSESSMENT_ID_PARAM: &str = "assessment_id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Questionnaire,
    Results { assessment_id: Option<AssessmentId> },
    Other,
}

impl Route {
    pub fn from_url(url: &Url) -> Self {
        let path = url.path();
        if path.contains(RESULTS_PAGE) {
            Route::Results {
                assessment_id: assessment_id_from_query(url),
            }
        } else if path.contains(QUESTIONNAIRE_PAGE) {
            Route::Questionnaire
        } else {
            Route::Other
        }
    }
}

/// First non-blank `assessment_id` query value.
pub fn assessment_id_from_query(url: &Url) -> Option<AssessmentId> {
    url.query_pairs()
        .filter(|(key, _)| key == ASSESSMENT_ID_PARAM)
        .find_map(|(_, value)| AssessmentId::parse(&value).ok())
}

/// Relative location of the results page for `assessment_id`.
pub fn results_location(assessment_id: &AssessmentId) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(ASSESSMENT_ID_PARAM, assessment_id.as_str())
        .finish();
    format!("{RESULTS_PAGE}?{query}")
}
