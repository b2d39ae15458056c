use shared::domain::{ChoiceOption, Question};

use crate::tree::{Element, Node};

pub const QUESTION_BLOCK_CLASS: &str = "question-item";
pub const FREE_RESPONSE_PLACEHOLDER: &str =
    "Share any additional information that might help us understand your needs better...";
pub const FREE_RESPONSE_ROWS: u32 = 4;
pub const BUSY_LABEL: &str = "Processing...";

/// One block per question, in the order received.
pub fn question_blocks(questions: &[Question]) -> Vec<Node> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| question_block(index, question))
        .collect()
}

pub fn question_block(index: usize, question: &Question) -> Node {
    let title = Element::new("h3")
        .class("question-title h5 mb-3")
        .text(format!("{}. {}", index + 1, question.text()));

    let body = if question.kind.is_free_response() {
        free_response(question)
    } else {
        choice_group(question)
    };

    Element::new("div")
        .class(QUESTION_BLOCK_CLASS)
        .id(format!("question-{}", question.id))
        .child(title)
        .child(body)
        .into()
}

fn free_response(question: &Question) -> Element {
    let field = question.field_name();
    Element::new("div").class("form-group mb-4").child(
        Element::new("textarea")
            .class("form-control")
            .attr("name", field.clone())
            .id(field)
            .attr("rows", FREE_RESPONSE_ROWS.to_string())
            .attr("placeholder", FREE_RESPONSE_PLACEHOLDER)
            .flag("required", question.is_required()),
    )
}

fn choice_group(question: &Question) -> Element {
    Element::new("div").class("options-container").children(
        question
            .options()
            .iter()
            .map(|option| choice_option(question, option)),
    )
}

fn choice_option(question: &Question, option: &ChoiceOption) -> Node {
    let field = question.field_name();
    let input_id = format!("{field}_option{}", option.value());

    Element::new("div")
        .class("option-item mb-3")
        .child(
            Element::new("input")
                .attr("type", "radio")
                .class("form-check-input visually-hidden")
                .attr("name", field)
                .attr("value", option.value())
                .id(input_id.clone())
                .flag("required", question.is_required()),
        )
        .child(
            Element::new("label")
                .class("form-check-label option-label")
                .attr("for", input_id)
                .text(option.label()),
        )
        .into()
}

/// Shown in the question container until the questionnaire arrives.
pub fn loading_placeholder() -> Node {
    Element::new("div")
        .class("text-center py-5")
        .child(
            Element::new("div")
                .class("spinner-border")
                .attr("role", "status"),
        )
        .child(Element::new("p").class("mt-2").text("Loading questions..."))
        .into()
}

pub fn submit_button(label: &str, busy: bool) -> Node {
    let button = Element::new("button")
        .attr("type", "submit")
        .class("btn btn-primary btn-lg")
        .flag("disabled", busy);

    if busy {
        button
            .child(
                Element::new("span")
                    .class("spinner-border spinner-border-sm")
                    .attr("role", "status")
                    .attr("aria-hidden", "true"),
            )
            .text(format!(" {BUSY_LABEL}"))
            .into()
    } else {
        button.text(label).into()
    }
}
