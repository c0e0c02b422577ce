use crate::page::{Page, ABOUT_TEXT};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let about = Paragraph::new(ABOUT_TEXT)
        .style(theme.label_style(false))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", Page::About.title()))
                .border_style(theme.border_style()),
        );
    frame.render_widget(about, area);
}
