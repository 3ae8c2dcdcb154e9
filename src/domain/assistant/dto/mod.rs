pub mod suggest_reply_request;
pub mod summarize_request;
