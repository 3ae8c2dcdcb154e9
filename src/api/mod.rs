//! HTTP surface: controllers and route tables

pub mod controller;
pub mod routes;
