pub mod suggest_reply_service;
pub mod summarize_service;
