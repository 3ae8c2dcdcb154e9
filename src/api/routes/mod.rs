//! API route declarations

pub mod assistant_routes;
pub mod system_routes;
