pub mod assistant;
pub mod system;
