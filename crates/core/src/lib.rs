//! # OppChat Core
//!
//! Domain types, traits, and error definitions for the OppChat assistant
//! routing engine. This crate has **zero framework dependencies** — it defines
//! the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The engine's one external capability (generative text) is defined as a
//! trait here. Implementations live in their own crate. This enables:
//! - Swapping the provider via configuration
//! - Easy testing with mock/stub providers
//! - Clean dependency graph (all crates depend inward on core)

pub mod envelope;
pub mod error;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use envelope::{Relevance, ResponseEnvelope, MAX_SUGGESTIONS};
pub use error::ProviderError;
pub use message::{ConversationMessage, PromptTurn, Role};
pub use provider::{GenerationProvider, GenerationRequest};
