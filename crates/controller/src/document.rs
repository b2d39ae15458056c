//! Headless page documents. Flows mutate the named regions; `tree` assembles
//! them into a page body for a render backend.

use views::{
    banner, questionnaire,
    results::JOB_CARD_CLASS,
    tree::{self, Element, Node},
};

pub const DEFAULT_SUBMIT_LABEL: &str = "Get My Results";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub busy: bool,
}

impl SubmitControl {
    pub fn disabled(&self) -> bool {
        self.busy
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionnaireDocument {
    pub questions_container: Vec<Node>,
    pub submit: SubmitControl,
}

impl Default for QuestionnaireDocument {
    fn default() -> Self {
        Self {
            questions_container: vec![questionnaire::loading_placeholder()],
            submit: SubmitControl {
                label: DEFAULT_SUBMIT_LABEL.to_string(),
                busy: false,
            },
        }
    }
}

impl QuestionnaireDocument {
    pub fn question_block_count(&self) -> usize {
        tree::find_by_class(&self.questions_container, questionnaire::QUESTION_BLOCK_CLASS).len()
    }

    pub fn error_banner_count(&self) -> usize {
        tree::find_all(&self.questions_container, banner::is_error_banner).len()
    }

    pub fn tree(&self) -> Node {
        Element::new("form")
            .id("questionnaire-form")
            .child(
                Element::new("div")
                    .id("questions-container")
                    .children(self.questions_container.iter().cloned()),
            )
            .child(
                Element::new("div")
                    .class("text-center mt-4")
                    .child(questionnaire::submit_button(
                        &self.submit.label,
                        self.submit.busy,
                    )),
            )
            .into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsDocument {
    pub loading_visible: bool,
    pub content_visible: bool,
    pub profile_content: Vec<Node>,
    pub recommendations_container: Vec<Node>,
    /// Banners appended to the outer results container.
    pub alerts: Vec<Node>,
}

impl Default for ResultsDocument {
    fn default() -> Self {
        Self {
            loading_visible: true,
            content_visible: false,
            profile_content: Vec::new(),
            recommendations_container: Vec::new(),
            alerts: Vec::new(),
        }
    }
}

fn display(visible: bool) -> &'static str {
    if visible {
        "display: block"
    } else {
        "display: none"
    }
}

impl ResultsDocument {
    pub fn job_card_count(&self) -> usize {
        tree::find_by_class(&self.recommendations_container, JOB_CARD_CLASS).len()
    }

    pub fn info_banner_count(&self) -> usize {
        tree::find_all(&self.recommendations_container, banner::is_info_banner).len()
    }

    pub fn error_banner_count(&self) -> usize {
        tree::find_all(&self.alerts, banner::is_error_banner).len()
    }

    pub fn tree(&self) -> Node {
        Element::new("div")
            .class("results-container")
            .child(
                Element::new("div")
                    .id("results-loading")
                    .class("text-center py-5")
                    .attr("style", display(self.loading_visible))
                    .child(Element::new("div").class("spinner-border").attr("role", "status"))
                    .child(Element::new("p").class("mt-2").text("Analyzing your answers...")),
            )
            .child(
                Element::new("div")
                    .id("results-content")
                    .attr("style", display(self.content_visible))
                    .child(
                        Element::new("section")
                            .class("profile-content mb-5")
                            .children(self.profile_content.iter().cloned()),
                    )
                    .child(Element::new("h2").class("h4 mb-3").text("Recommended Jobs"))
                    .child(
                        Element::new("div")
                            .id("recommendations-container")
                            .children(self.recommendations_container.iter().cloned()),
                    ),
            )
            .children(self.alerts.iter().cloned())
            .into()
    }
}
