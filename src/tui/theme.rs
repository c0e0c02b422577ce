//! Color themes and styling for TUI components.

use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the medcost TUI
pub struct Theme {
    /// Primary accent color (cyan for focus and active page)
    pub primary: Color,
    /// Success color (green for the estimate)
    pub success: Color,
    /// Muted color (dark gray for hints and inactive elements)
    pub muted: Color,
    /// Text color
    pub text: Color,
    /// Warning color (yellow for advice and data errors)
    pub warning: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
            warning: Color::Yellow,
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected sidebar entry
    pub fn active_page_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn inactive_page_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn label_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    /// Style for a field value, underlined while digits are being typed
    pub fn value_style(&self, focused: bool, editing: bool) -> Style {
        let style = if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.text)
        };
        if editing {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    pub fn estimate_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn bar_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn density_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn table_header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// BMI bands for the scatter chart, coloured along a Viridis-like ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
    Unknown,
}

impl BmiBand {
    pub const ALL: [BmiBand; 5] = [
        BmiBand::Underweight,
        BmiBand::Normal,
        BmiBand::Overweight,
        BmiBand::Obese,
        BmiBand::Unknown,
    ];

    pub fn classify(bmi: Option<f64>) -> Self {
        match bmi {
            Some(v) if v < 18.5 => BmiBand::Underweight,
            Some(v) if v < 25.0 => BmiBand::Normal,
            Some(v) if v <= 30.0 => BmiBand::Overweight,
            Some(_) => BmiBand::Obese,
            None => BmiBand::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiBand::Underweight => "BMI < 18.5",
            BmiBand::Normal => "BMI 18.5-25",
            BmiBand::Overweight => "BMI 25-30",
            BmiBand::Obese => "BMI > 30",
            BmiBand::Unknown => "BMI n/a",
        }
    }

    pub fn color(self) -> Color {
        match self {
            BmiBand::Underweight => Color::Rgb(0x44, 0x01, 0x54),
            BmiBand::Normal => Color::Rgb(0x31, 0x68, 0x8e),
            BmiBand::Overweight => Color::Rgb(0x35, 0xb7, 0x79),
            BmiBand::Obese => Color::Rgb(0xfd, 0xe7, 0x25),
            BmiBand::Unknown => Color::Gray,
        }
    }
}
