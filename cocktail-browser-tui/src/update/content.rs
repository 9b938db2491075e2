use crate::message::{Command, ContentMessage};
use crate::model::{App, Page};

use super::session;

/// Handle content panel messages
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        ContentMessage::Advance => {
            session::advance(app);
            None
        }
        ContentMessage::Submit => session::submit_preferences(app),
        form_msg => {
            // Form edits only apply while the form is on screen
            if app.current_page == Page::Preferences {
                update_form(app, form_msg);
            }
            None
        }
    }
}

fn update_form(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::NextField => app.form.focus = app.form.focus.next(),
        ContentMessage::PreviousCategory => app.form.previous_category(),
        ContentMessage::NextCategory => app.form.next_category(),
        ContentMessage::LimitChanged(delta) => session::change_range(app, delta),
        ContentMessage::Submit | ContentMessage::Advance => {}
    }
}
