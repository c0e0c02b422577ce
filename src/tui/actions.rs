//! Pure action determination for keyboard handling.
//!
//! `determine_action` maps a key plus a small context to an action without
//! touching app state; `navigation::execute_action` performs it.

use crate::page::Page;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    SelectPage(Page),
    NextPage,
    PrevPage,
    FocusNext,
    FocusPrev,
    Increment,
    Decrement,
    TypeChar(char),
    Backspace,
    CancelInput,
    Submit,
    ReloadData,
    ScrollUp,
    ScrollDown,
}

/// State needed to decide what a key means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    pub page: Page,
    /// Digits are being typed into a form field
    pub editing: bool,
    /// A submission is waiting for the processing delay
    pub processing: bool,
}

impl ActionContext {
    #[cfg(test)]
    pub fn on(page: Page) -> Self {
        Self {
            page,
            editing: false,
            processing: false,
        }
    }
}

pub fn determine_action(key: KeyEvent, ctx: ActionContext) -> Option<AppAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppAction::Quit);
    }

    // Global page navigation
    match key.code {
        KeyCode::F(n @ 1..=4) => {
            return Page::from_index(usize::from(n - 1)).map(AppAction::SelectPage);
        }
        KeyCode::PageDown => return Some(AppAction::NextPage),
        KeyCode::PageUp => return Some(AppAction::PrevPage),
        _ => {}
    }

    match ctx.page {
        Page::InputForm => determine_form_action(key, ctx),
        Page::Data => match key.code {
            KeyCode::Char('r') => Some(AppAction::ReloadData),
            KeyCode::Up | KeyCode::Char('k') => Some(AppAction::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppAction::ScrollDown),
            _ => determine_static_page_action(key),
        },
        Page::Result | Page::About => determine_static_page_action(key),
    }
}

fn determine_form_action(key: KeyEvent, ctx: ActionContext) -> Option<AppAction> {
    match key.code {
        KeyCode::Char('q') => Some(AppAction::Quit),
        KeyCode::Esc if ctx.editing => Some(AppAction::CancelInput),
        KeyCode::Tab | KeyCode::Down => Some(AppAction::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(AppAction::FocusPrev),
        _ if ctx.processing => None,
        KeyCode::Left => Some(AppAction::Decrement),
        KeyCode::Right => Some(AppAction::Increment),
        KeyCode::Enter => Some(AppAction::Submit),
        KeyCode::Backspace if ctx.editing => Some(AppAction::Backspace),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => Some(AppAction::TypeChar(c)),
        _ => None,
    }
}

/// Pages without numeric entry: digits select pages.
fn determine_static_page_action(key: KeyEvent) -> Option<AppAction> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppAction::Quit),
        KeyCode::Char(c @ '1'..='4') => {
            Page::from_index(c as usize - '1' as usize).map(AppAction::SelectPage)
        }
        KeyCode::Tab | KeyCode::Right => Some(AppAction::NextPage),
        KeyCode::BackTab | KeyCode::Left => Some(AppAction::PrevPage),
        _ => None,
    }
}
