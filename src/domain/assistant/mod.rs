//! Reply drafting and conversation summaries

pub mod dto;
pub mod prompts;
pub mod service;
