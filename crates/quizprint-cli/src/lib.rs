//! quizprint-cli library root.
//!
//! Exposes configuration and the build pipeline so integration tests can
//! drive a full run with a stub renderer.

pub mod config;
pub mod pipeline;
