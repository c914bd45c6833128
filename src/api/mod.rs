//! Server API surface: data models plus the HTTP client wrapper.

pub mod client;
pub mod models;

pub use client::*;
pub use models::*;
