//! Terminal front end for the chess engine
//!
//! - [`config`] - JSON configuration for search, validation and pacing
//! - [`session`] - Turn handling between a human and the engine
//! - [`render`] - Text board and status lines
//! - [`error`] - Session error types

pub mod config;
pub mod error;
pub mod render;
pub mod session;
