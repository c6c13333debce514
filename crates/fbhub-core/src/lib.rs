//! fbhub-core — Feedback Hub core library.
//!
//! This crate owns everything below the presentation layer: the shared types,
//! the validated submission boundary, the append-only store, and the pure
//! view-derivation functions the UI renders from.
//!
//! # Architecture
//!
//! ```text
//! Draft ──► Store ──► View ──► UI
//! ```
//!
//! The store is a plain value owned by the application shell and passed by
//! reference. Every view derivation is a pure function over a snapshot of the
//! store's records, with "now" injected by the caller.

pub mod config;
pub mod draft;
pub mod store;
pub mod types;
pub mod view;

pub use draft::{FeedbackDraft, ValidationError};
pub use store::FeedbackStore;
pub use types::{Direction, FeedbackKind, FeedbackRecord};
pub use view::{FeedbackFilter, Stats};
