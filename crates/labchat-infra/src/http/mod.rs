//! HTTP adapter for the summarization backend.

pub mod client;

pub use client::HttpChatBackend;
