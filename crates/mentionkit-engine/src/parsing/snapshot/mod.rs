//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! - **`normalize`**: Converts parsed parts to a stable `PartSnap` list for
//!   `insta` debug snapshots
//! - **`invariants`**: Runtime checks for parser correctness (parts tile the
//!   plain text, positions agree with texts)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{PartSnap, normalize};
