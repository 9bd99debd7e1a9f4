//! Routed page components.

pub mod follow_list;
pub mod profile;
pub mod project_detail;
pub mod projects;
pub mod settings;
