//! Entity types and the read-only fixture provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the records every view renders; `fixtures` supplies them
//! from the embedded sample document in place of a backend.

pub mod fixtures;
pub mod types;
