//! Inline alert banners.

use crate::tree::{Element, Node};

pub const QUESTIONS_LOAD_FAILED: &str = "Error loading questions. Please try again later.";
pub const SUBMISSION_FAILED: &str = "Error submitting your answers. Please try again.";
pub const RESULTS_LOAD_FAILED: &str = "Error loading your results. Please try again later or";
pub const RESTART_LINK_TEXT: &str = "start a new assessment";
pub const NO_RECOMMENDATIONS: &str =
    "No job recommendations found. Please try again with different answers.";

pub const QUESTIONNAIRE_PAGE: &str = "questionnaire.html";

pub fn error_banner(message: &str) -> Node {
    Element::new("div")
        .class("alert alert-danger")
        .attr("role", "alert")
        .text(message)
        .into()
}

/// Appended below an existing form, hence the top margin.
pub fn submission_error_banner() -> Node {
    Element::new("div")
        .class("alert alert-danger mt-3")
        .attr("role", "alert")
        .text(SUBMISSION_FAILED)
        .into()
}

/// Results failure banner with a link back to the questionnaire.
pub fn restart_banner() -> Node {
    Element::new("div")
        .class("alert alert-danger")
        .attr("role", "alert")
        .text(format!("{RESULTS_LOAD_FAILED} "))
        .child(
            Element::new("a")
                .attr("href", QUESTIONNAIRE_PAGE)
                .class("alert-link")
                .text(RESTART_LINK_TEXT),
        )
        .text(".")
        .into()
}

pub fn info_banner(message: &str) -> Node {
    Element::new("div")
        .class("alert alert-info")
        .text(message)
        .into()
}

pub fn is_error_banner(element: &Element) -> bool {
    element.has_class("alert") && element.has_class("alert-danger")
}

pub fn is_info_banner(element: &Element) -> bool {
    element.has_class("alert") && element.has_class("alert-info")
}
