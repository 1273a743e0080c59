use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameError, GameStatus, Grid, Position, Snake};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the latest published grid. `snake` is only used to mark the head.
    pub fn render(&self, frame: &mut Frame, grid: &Grid, snake: &Snake, status: GameStatus) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_status(status), chunks[0]);
        frame.render_widget(self.render_grid(grid, snake.head()), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, grid: &Grid, head: Position) -> Paragraph<'_> {
        Paragraph::new(grid_lines(grid, head))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_status(&self, status: GameStatus) -> Paragraph<'_> {
        let line = match status {
            GameStatus::Running => Line::from(""),
            GameStatus::Won => Line::from(vec![Span::styled(
                "YOU WIN",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            GameStatus::Lost(reason) => Line::from(vec![
                Span::styled(
                    "GAME OVER",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(loss_reason(reason), Style::default().fg(Color::Gray)),
            ]),
        };

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn loss_reason(reason: GameError) -> &'static str {
    match reason {
        GameError::OutOfBounds(_) => "hit the wall",
        GameError::SelfCollision(_) => "ran into itself",
        GameError::GridFull => "grid full",
    }
}

/// One line per grid row, read straight from the cell flags
fn grid_lines(grid: &Grid, head: Position) -> Vec<Line<'static>> {
    let size = grid.size() as i32;

    (0..size)
        .map(|y| {
            let spans: Vec<Span> = (0..size)
                .map(|x| {
                    let pos = Position::new(x, y);
                    let cell = grid.cell(pos).copied().unwrap_or_default();

                    if cell.is_snake && pos == head {
                        Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else if cell.is_snake {
                        Span::styled("□ ", Style::default().fg(Color::Green))
                    } else if cell.is_food {
                        Span::styled(
                            "O ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(". ", Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();

            Line::from(spans)
        })
        .collect()
}
