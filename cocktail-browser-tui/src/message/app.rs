use super::{ContentMessage, ModalMessage, NavigationMessage, TaskMessage};
use crate::model::Page;

/// Top-level message
#[derive(Debug)]
pub enum AppMessage {
    Quit,

    /// Switch between the navigation and content panels
    ToggleFocus,

    /// Show `Page` directly
    Navigate(Page),

    Navigation(NavigationMessage),

    Content(ContentMessage),

    Modal(ModalMessage),

    /// A background task finished
    Task(TaskMessage),

    ShowHelp,

    ClearStatus,

    /// Ignored input
    Noop,
}
