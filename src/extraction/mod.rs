//! Structured profile extraction via a hosted language model

pub mod client;
pub mod profile;
pub mod prompts;
