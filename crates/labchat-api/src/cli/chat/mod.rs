//! Interactive CLI chat experience for labchat.
//!
//! This module implements the chat loop: session bootstrap, welcome banner,
//! a thinking spinner while the backend summarizes, markdown rendering of
//! replies with their references, and slash commands. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
pub mod view;
