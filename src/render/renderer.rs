use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::Canvas;
use crate::game::{Palette, Rgb};
use crate::metrics::GameMetrics;

/// Each board cell is drawn as this many terminal columns, so cells look square
const CELL_COLUMNS: u16 = 2;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        canvas: &Canvas,
        palette: &Palette,
        length: usize,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(length, metrics), chunks[0]);

        // Board plus its border, centered
        let board_width = canvas.columns() as u16 * CELL_COLUMNS + 2;
        let board_height = canvas.rows() as u16 + 2;
        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(board_width)])
            .flex(Flex::Center)
            .split(chunks[1])[0];
        let board_area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(board_height)])
            .flex(Flex::Center)
            .split(board_area)[0];

        frame.render_widget(self.render_board(canvas, palette), board_area);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board(&self, canvas: &Canvas, palette: &Palette) -> Paragraph<'_> {
        let blank = " ".repeat(CELL_COLUMNS as usize);
        let lines: Vec<Line> = canvas
            .rows_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|&color| Span::styled(blank.clone(), Style::default().bg(to_color(color))))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(to_color(palette.border)))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, length: usize, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(length.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_length.to_string(), value),
            Span::raw("    "),
            Span::styled("Resets: ", label),
            Span::styled(metrics.resets.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}
