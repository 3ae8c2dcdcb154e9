pub mod assistant;
pub mod llm;
