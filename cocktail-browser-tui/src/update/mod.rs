//! Update layer
//!
//! `update` is the only place the model changes. It is synchronous and never
//! touches the network or the disk: work that needs either is handed back to
//! the loop as a [`Command`], and its result returns later as an
//! `AppMessage::Task`.
//!
//! ```text
//!   AppMessage ──▶ update(app, msg) ──▶ Option<Command> ──▶ backend::Executor
//!                        │                                       │
//!                        ▼                                       │
//!                      App  ◀──── AppMessage::Task(..) ◀─────────┘
//! ```
//!
//! Fetch results carry the generation they were issued with. Only the latest
//! generation is applied, so a slow earlier fetch cannot overwrite a newer one.

mod content;
mod modal;
mod navigation;
mod session;
mod task;

use crate::message::{AppMessage, Command};
use crate::model::{App, Modal};

/// Apply a message, returning the background work it asks for
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            None
        }

        AppMessage::Navigate(page) => {
            session::navigate(app, page);
            None
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
            None
        }

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
            None
        }

        AppMessage::Task(task_msg) => {
            task::update(app, task_msg);
            None
        }

        AppMessage::ShowHelp => {
            app.modal.show(Modal::Help);
            None
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }

        AppMessage::Noop => None,
    }
}

/// Kick off the startup list load.
///
/// Preferences are already in `app`; only the list arrives later, so the
/// form is never overwritten behind the user's back.
pub fn startup(app: &mut App) -> Command {
    let generation = app.session.begin_fetch();
    app.set_status("Loading cocktails...");
    Command::Startup {
        preferences: app.preferences,
        generation,
    }
}
