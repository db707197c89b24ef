//! # OppChat Engine
//!
//! The routing engine behind the platform assistant: takes a user's free-text
//! question plus a bounded conversation history and decides, through an
//! ordered set of classifiers and a fallback hierarchy, how to answer.
//!
//! The ordering is the load-shedding policy: cheap deterministic checks (FAQ,
//! provider availability) run before any network call, the domain gate keeps
//! irrelevant traffic away from paid generation, and generation failures
//! degrade to the deterministic fallback instead of propagating. Every path
//! terminates in a well-formed [`oppchat_core::ResponseEnvelope`].

pub mod classify;
pub mod engine;
pub mod faq;
pub mod fallback;
pub mod suggest;
pub mod window;

pub use classify::{DomainLexicon, SelfReferenceLexicon};
pub use engine::{ChatEngine, RouteOutcome};
pub use faq::{FaqRule, RuleMatcher, RuleTable};
pub use window::build_prompt;
