//! # Snapshot Testing Support
//!
//! Utilities for testing the importer via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts records to a stable, serializable `Snap` format
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (names non-empty
//!   and colon-free, scores consistent with gap text, Wordle payloads capitals only)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{RecordSnap, Snap, normalize};
