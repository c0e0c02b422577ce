//! Screen layout: title bar, page sidebar, content and footer.

use super::app::App;
use super::theme::Theme;
use super::views;
use crate::page::{Page, APP_TITLE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 24;

pub fn render_app(frame: &mut Frame, app: &App) {
    let theme = Theme::default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_title(frame, chunks[0], &theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    render_sidebar(frame, app, body[0], &theme);

    match app.page() {
        Page::InputForm => views::input::render(frame, app, body[1], &theme),
        Page::Result => views::result::render(frame, app, body[1], &theme),
        Page::About => views::about::render(frame, body[1], &theme),
        Page::Data => views::data::render(frame, app, body[1], &theme),
    }

    render_footer(frame, app, chunks[2], &theme);
}

fn render_title(frame: &mut Frame, area: Rect, theme: &Theme) {
    let title = Paragraph::new(Line::from(Span::styled(APP_TITLE, theme.title_style()))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    );
    frame.render_widget(title, area);
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|page| {
            let text = format!(" F{} {}", page.index() + 1, page.title());
            let style = if *page == app.page() {
                theme.active_page_style()
            } else {
                theme.inactive_page_style()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Navigation ")
            .border_style(theme.border_style()),
    );
    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let line = match app.status_message() {
        Some(message) => Line::from(Span::styled(message.to_string(), theme.warning_style())),
        None => Line::from(Span::styled(key_hints(app), theme.muted_style())),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn key_hints(app: &App) -> &'static str {
    match app.page() {
        Page::InputForm if app.form().is_editing() => {
            "Enter: predict  Tab: next field  Esc: cancel typing  Backspace: delete"
        }
        Page::InputForm => {
            "Tab/↑↓: field  ←→: adjust  0-9: type  Enter: predict  F1-F4: page  q: quit"
        }
        Page::Data => "↑↓: scroll  r: reload  1-4/F1-F4: page  q: quit",
        Page::Result | Page::About => "1-4/F1-F4: page  PgUp/PgDn: cycle  q: quit",
    }
}
