pub mod llm_chat_service;

#[cfg(test)]
pub mod stub_provider;
