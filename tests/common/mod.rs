// Shared helpers for medcost integration tests
#![allow(dead_code)]

use medcost::config::MedcostConfig;
use medcost::tui::App;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Write `content` to `dir/name` and return the path.
pub fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// App with no processing delay reading `data_file`.
pub fn instant_app(data_file: PathBuf) -> App {
    App::new(MedcostConfig::default(), data_file, Duration::ZERO).unwrap()
}

/// Draw one frame and return the screen as text, one line per row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
