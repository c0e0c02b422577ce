//! Input form page: six widgets on the left, the outcome on the right.

use crate::core::{Feature, Submission};
use crate::io::writers::html::FEATURE_CHART_TITLE;
use crate::page::Page;
use crate::progress::PROCESSING_MESSAGE;
use crate::tui::app::App;
use crate::tui::form::FormField;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

const FORM_WIDTH: u16 = 44;

pub fn render(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(0)])
        .split(area);

    render_form(frame, app, chunks[0], theme);

    if app.is_processing() {
        render_processing(frame, app, chunks[1], theme);
    } else if let Some(submission) = app.latest() {
        render_outcome(frame, submission, chunks[1], theme);
    } else {
        let hint = Paragraph::new(Span::styled(
            "Fill in the form and press Enter to predict.",
            theme.muted_style(),
        ))
        .wrap(Wrap { trim: true })
        .block(outcome_block(theme));
        frame.render_widget(hint, chunks[1]);
    }
}

fn render_form(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let form = app.form();
    let mut lines = Vec::with_capacity(FormField::ALL.len() * 3);

    for field in FormField::ALL {
        let focused = field == form.focus();
        let marker = if focused { "▸ " } else { "  " };
        let value = form.display_value(field);
        let value = if field.is_numeric() {
            format!("[ {} ]", value)
        } else {
            format!("◂ {} ▸", value)
        };

        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, field.label()),
            theme.label_style(focused),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", value),
            theme.value_style(focused, focused && form.is_editing()),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press Enter to predict",
        theme.muted_style(),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", Page::InputForm.title()))
            .border_style(theme.border_style()),
    );
    frame.render_widget(paragraph, area);
}

fn render_processing(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(format!("{} ", app.spinner_char()), theme.title_style()),
        Span::styled(PROCESSING_MESSAGE, theme.label_style(false)),
    ]);
    frame.render_widget(Paragraph::new(line).block(outcome_block(theme)), area);
}

fn render_outcome(frame: &mut Frame, submission: &Submission, area: Rect, theme: &Theme) {
    let advice_height = submission.advice.len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(advice_height), Constraint::Min(0)])
        .split(area);

    let advice: Vec<Line> = if submission.advice.is_empty() {
        vec![Line::from(Span::styled(
            "No risk factors flagged.",
            theme.muted_style(),
        ))]
    } else {
        submission
            .advice
            .iter()
            .map(|a| {
                Line::from(Span::styled(
                    format!("⚠ {}", a.message()),
                    theme.warning_style(),
                ))
            })
            .collect()
    };
    frame.render_widget(
        Paragraph::new(advice)
            .wrap(Wrap { trim: true })
            .block(outcome_block(theme)),
        chunks[0],
    );

    render_feature_chart(frame, &submission.features(), chunks[1], theme);
}

fn render_feature_chart(frame: &mut Frame, features: &[Feature], area: Rect, theme: &Theme) {
    let bars: Vec<Bar> = features
        .iter()
        .map(|f| {
            let text = if f.value.fract() == 0.0 {
                format!("{}", f.value)
            } else {
                format!("{:.1}", f.value)
            };
            Bar::default()
                .label(Line::from(f.label))
                .value(f.value.max(0.0).round() as u64)
                .text_value(text)
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", FEATURE_CHART_TITLE))
                .border_style(theme.border_style()),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(2)
        .bar_style(theme.bar_style())
        .value_style(theme.title_style());
    frame.render_widget(chart, area);
}

fn outcome_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(" Prediction ")
        .border_style(theme.border_style())
}
