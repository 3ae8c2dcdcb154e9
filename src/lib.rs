//! Reply assistant: an HTTP gateway that turns pasted conversations into
//! LLM-drafted replies and summaries, plus the client used to call it.

pub mod api;
pub mod app_state;
pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod routes;
