//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view concern (`projects`, `profile`, `notifications`,
//! etc.) as plain structs. The app root and pages wrap them in `RwSignal`s;
//! everything in here stays free of reactive types so it can be unit tested
//! natively.

pub mod notifications;
pub mod profile;
pub mod project_form;
pub mod projects;
pub mod session;
pub mod tabs;
pub mod tags;
