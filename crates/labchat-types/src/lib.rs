//! Shared domain types for labchat.
//!
//! This crate contains the types exchanged between the chat widget core, the
//! backend adapter and the terminal front end: sessions, chat messages,
//! summary request/response payloads, theme, configuration and errors.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod session;
pub mod summary;
pub mod theme;
