//! Pure rendering: response data in, view tree out. Backends turn trees into
//! HTML or terminal text.

pub mod backend;
pub mod banner;
pub mod form;
pub mod questionnaire;
pub mod results;
pub mod tree;

pub use backend::{HtmlRenderer, RenderBackend, TextRenderer};
pub use tree::{Element, Node};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
