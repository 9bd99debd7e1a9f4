//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, dialogs and toasts. They take data and callbacks
//! as props; only the notification tray reads shared state from context.

pub mod notification_tray;
pub mod portfolio_card;
pub mod project_card;
pub mod start_project_modal;
pub mod tag_input;
