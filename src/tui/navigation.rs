//! Keyboard handling: the imperative shell around `determine_action`.

use super::actions::{determine_action, ActionContext, AppAction};
use super::app::App;
use crate::page::Page;
use anyhow::Result;
use crossterm::event::KeyEvent;
use std::time::Instant;

/// Handle a key press and return true if the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> Result<bool> {
    let ctx = ActionContext {
        page: app.page(),
        editing: app.form().is_editing(),
        processing: app.is_processing(),
    };

    let Some(action) = determine_action(key, ctx) else {
        return Ok(false);
    };

    app.clear_status_message();
    execute_action(app, action, now)
}

pub fn execute_action(app: &mut App, action: AppAction, now: Instant) -> Result<bool> {
    match action {
        AppAction::Quit => {
            app.end_session();
            return Ok(true);
        }

        AppAction::SelectPage(page) => switch_page(app, page),
        AppAction::NextPage => switch_page(app, app.page().next()),
        AppAction::PrevPage => switch_page(app, app.page().prev()),

        AppAction::FocusNext => app.form_mut().focus_next(),
        AppAction::FocusPrev => app.form_mut().focus_prev(),
        AppAction::Increment => app.form_mut().adjust(1),
        AppAction::Decrement => app.form_mut().adjust(-1),

        AppAction::TypeChar(c) => {
            app.form_mut().push_char(c);
        }
        AppAction::Backspace => app.form_mut().pop_char(),
        AppAction::CancelInput => app.form_mut().cancel_buffer(),

        AppAction::Submit => app.submit(now),

        AppAction::ReloadData => {
            app.reload_data();
            if let Some(message) = app.data().and_then(|d| d.error_message()) {
                app.set_status_message(message);
            }
        }

        AppAction::ScrollUp => app.scroll_data(-1),
        AppAction::ScrollDown => app.scroll_data(1),
    }

    Ok(false)
}

/// Leaving the form commits a half-typed value so it is not lost.
fn switch_page(app: &mut App, page: Page) {
    app.form_mut().commit_buffer();
    app.set_page(page);
}
