//! Infrastructure layer for labchat.
//!
//! Contains the HTTP implementation of the `ChatBackend` port defined in
//! `labchat-core` and the configuration loader.

pub mod config;
pub mod http;
