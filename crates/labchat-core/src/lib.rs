//! Chat widget logic and the backend port for labchat.
//!
//! This crate defines the `ChatBackend` port that the infrastructure layer
//! implements and the `ChatView` seam that front ends implement. It depends
//! only on `labchat-types` -- never on `labchat-infra` or any IO crate.

pub mod backend;
pub mod markdown;
pub mod session;
pub mod summary;
pub mod theme;
pub mod transcript;
pub mod view;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;
