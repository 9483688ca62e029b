//! Core library for socialgen
//!
//! This crate implements the **Functional Core** of the socialgen application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`socialgen_core`** (this crate): Pure transformation functions with zero I/O
//! - **`socialgen`**: HTTP server, CLI, and the outbound call to the completion
//!   provider (the Imperative Shell)
//!
//! Everything here is deterministic: the same form payload always validates
//! to the same [`generate::GenerationRequest`], and the same request always
//! renders the same prompt. Tests use plain fixture data, no mocking.
//!
//! # Module Organization
//!
//! - [`generate`]: Form payload validation, prompt templates, and the
//!   chat-completion wire format
//!
//! # Example Usage
//!
//! ```rust
//! use socialgen_core::generate::{build_prompt, validate_payload, RawGenerationPayload};
//!
//! let raw = RawGenerationPayload {
//!     business_name: Some("Kopi Kita".to_string()),
//!     niche: Some("Coffee shop".to_string()),
//!     tone: Some("Playful".to_string()),
//!     content_type: Some("Reel Script".to_string()),
//!     ..Default::default()
//! };
//!
//! let request = validate_payload(&raw).unwrap();
//! let prompt = build_prompt(&request);
//!
//! assert!(prompt.contains("Hook (0-3s)"));
//! assert!(prompt.ends_with("Answer fully in English."));
//! ```

pub mod generate;
