//! Humanoide: collects text and stylistic options, asks a hosted language
//! model to rewrite the text so it reads as human-written, and presents the
//! result with two scores.

pub mod cli;
pub mod config;
pub mod generation;
pub mod types;
pub mod ui;
