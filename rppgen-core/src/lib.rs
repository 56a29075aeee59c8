//! Core library for rppgen.
//!
//! Everything the binary needs lives here: the lesson-plan request record and
//! its curriculum-conditional field rules, the Indonesian prompt template, the
//! Gemini provider, the line-pattern renderer for the returned text, and the
//! small pieces of persisted state (theme preference).

pub mod config;
pub mod form;
pub mod llm;
pub mod prefs;
pub mod prompt;
pub mod render;
pub mod session;
pub mod ui;
