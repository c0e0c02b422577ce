use crate::page::{Page, DISCLAIMER, NO_RESULT_TEXT};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let lines = match app.latest() {
        Some(submission) => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Your Predicted Health Cost: ", theme.label_style(true)),
                Span::styled(
                    submission.estimate.display_currency(),
                    theme.estimate_style(),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(DISCLAIMER, theme.muted_style())),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(NO_RESULT_TEXT, theme.warning_style())),
        ],
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", Page::Result.title()))
            .border_style(theme.border_style()),
    );
    frame.render_widget(paragraph, area);
}
