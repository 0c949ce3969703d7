//! # a11y-enrichment
//!
//! Turns findings into numbered prompts, sends one chat-completions request
//! per batch, and splits the combined reply back into one text per finding.
//!
//! ## Modules
//!
//! - `client`: `TextEnrichmentClient`, offline placeholders
//! - `prompts`: instruction and prompt text
//! - `parse`: `<think>` stripping and the numbered-reply parser
//! - `transport`: blocking HTTP generator for OpenAI-compatible endpoints

pub mod client;
pub mod parse;
pub mod prompts;
pub mod transport;

pub use client::{EnrichmentSettings, TextEnrichmentClient, OFFLINE_PLACEHOLDER, OFFLINE_SUMMARY};
pub use parse::{parse_numbered_reply, strip_think_blocks, NEEDS_ATTENTION_PLACEHOLDER};
pub use transport::{HttpGeneratorConfig, HttpTextGenerator};
