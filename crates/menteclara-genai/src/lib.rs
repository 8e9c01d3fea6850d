//! menteclara-genai
//!
//! Gemini exercise generation and speech synthesis.

pub mod client;
pub mod error;
pub mod exercise;
pub mod gateway;
pub mod prompt;
pub mod speech;
