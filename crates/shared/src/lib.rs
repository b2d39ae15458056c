//! Wire contract shared by the transport client, the views and the page flows.

pub mod decode;
pub mod domain;
pub mod error;
pub mod protocol;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
