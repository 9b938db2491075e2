//! Message layer
//!
//! Key presses become [`AppMessage`]s in the event layer; finished background
//! work comes back as [`TaskMessage`]s wrapped in `AppMessage::Task`. The
//! update layer answers a message with an optional [`Command`] describing
//! work to start.

mod app;
mod content;
mod modal;
mod navigation;
mod task;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
pub use task::{Command, TaskMessage};
