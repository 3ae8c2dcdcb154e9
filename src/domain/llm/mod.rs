//! Upstream chat completion client

pub mod dto;
pub mod service;
