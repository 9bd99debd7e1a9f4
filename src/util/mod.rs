//! Formatting and navigation helpers shared by pages and components.

pub mod format;
pub mod nav;
