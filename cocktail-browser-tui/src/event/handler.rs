use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::{DefaultKeymap, LIMIT_PAGE_STEP};
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, FormField, Page};

/// Wait up to `timeout` for a terminal event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize just triggers the next redraw
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Windows terminals also report Release
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::CLEAR_STATUS.matches(&key) {
        return AppMessage::ClearStatus;
    }
    if DefaultKeymap::GOTO_PREFERENCES.matches(&key) {
        return AppMessage::Navigate(Page::Preferences);
    }
    if DefaultKeymap::GOTO_COCKTAILS.matches(&key) {
        return AppMessage::Navigate(Page::Cocktails);
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        match app.current_page {
            Page::Preferences => handle_preferences_keys(key, app.form.focus),
            Page::Cocktails => handle_cocktails_keys(key),
        }
    }
}

fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => NavigationMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => NavigationMessage::SelectNext,
        KeyCode::Home => NavigationMessage::SelectFirst,
        KeyCode::End => NavigationMessage::SelectLast,
        KeyCode::Enter | KeyCode::Right => NavigationMessage::Confirm,
        _ => return AppMessage::Noop,
    };
    AppMessage::Navigation(msg)
}

fn handle_preferences_keys(key: KeyEvent, field: FormField) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Submit);
    }
    if DefaultKeymap::LIMIT_UP_PAGE.matches(&key) {
        return AppMessage::Content(ContentMessage::LimitChanged(LIMIT_PAGE_STEP));
    }
    if DefaultKeymap::LIMIT_DOWN_PAGE.matches(&key) {
        return AppMessage::Content(ContentMessage::LimitChanged(-LIMIT_PAGE_STEP));
    }

    let msg = match (key.code, field) {
        (KeyCode::Up | KeyCode::Down | KeyCode::Char('k' | 'j'), _) => ContentMessage::NextField,
        (KeyCode::Left | KeyCode::Char('h'), FormField::Category) => {
            ContentMessage::PreviousCategory
        }
        (KeyCode::Right | KeyCode::Char('l'), FormField::Category) => ContentMessage::NextCategory,
        (KeyCode::Left | KeyCode::Char('h'), FormField::Limit) => ContentMessage::LimitChanged(-1),
        (KeyCode::Right | KeyCode::Char('l'), FormField::Limit) => ContentMessage::LimitChanged(1),
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

fn handle_cocktails_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NEXT.matches(&key) {
        return AppMessage::Content(ContentMessage::Advance);
    }
    match key.code {
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') if key.modifiers.is_empty() => {
            AppMessage::Content(ContentMessage::Advance)
        }
        _ => AppMessage::Noop,
    }
}

fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        (KeyModifiers::NONE, KeyCode::Enter) => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FocusPanel, Modal};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn content_app(page: Page) -> App {
        let mut app = App::new();
        app.focus = FocusPanel::Content;
        app.current_page = page;
        app
    }

    #[test]
    fn quit_keys() {
        let app = App::new();
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(ctrl_c, &app), AppMessage::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }

    #[test]
    fn arrows_follow_the_focused_form_field() {
        let mut app = content_app(Page::Preferences);
        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Content(ContentMessage::NextCategory)
        ));

        app.form.focus = FormField::Limit;
        assert!(matches!(
            handle_event(press(KeyCode::Left), &app),
            AppMessage::Content(ContentMessage::LimitChanged(-1))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::PageUp), &app),
            AppMessage::Content(ContentMessage::LimitChanged(10))
        ));
    }

    #[test]
    fn enter_submits_on_form_and_advances_on_browser() {
        let form = content_app(Page::Preferences);
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &form),
            AppMessage::Content(ContentMessage::Submit)
        ));

        let browser = content_app(Page::Cocktails);
        for code in [KeyCode::Enter, KeyCode::Right, KeyCode::Char('n')] {
            assert!(matches!(
                handle_event(press(code), &browser),
                AppMessage::Content(ContentMessage::Advance)
            ));
        }
    }

    #[test]
    fn modal_captures_input() {
        let mut app = content_app(Page::Cocktails);
        app.modal.show(Modal::EndOfList);

        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn navigation_panel_keys() {
        let mut app = App::new();
        app.focus = FocusPanel::Navigation;
        assert!(matches!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Navigation(NavigationMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Navigation(NavigationMessage::Confirm)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('2')), &app),
            AppMessage::Navigate(Page::Cocktails)
        ));
    }
}
