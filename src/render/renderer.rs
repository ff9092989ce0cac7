use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::display::{FrameBuffer, Tile};
use crate::game::GameStatus;
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Paint the last drawn board; `status` is `None` once the game is stopped
    pub fn render(
        &self,
        frame: &mut Frame,
        board: &FrameBuffer,
        status: Option<GameStatus>,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Message
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(board, metrics), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match status {
            Some(_) => frame.render_widget(self.render_grid(board), game_area),
            None => frame.render_widget(self.render_stopped(), game_area),
        }

        frame.render_widget(self.render_message(board, status), chunks[2]);
        frame.render_widget(self.render_controls(), chunks[3]);
    }

    fn render_grid(&self, board: &FrameBuffer) -> Paragraph<'_> {
        let lines: Vec<Line> = (0..board.size())
            .map(|y| {
                let spans: Vec<Span> = (0..board.size())
                    .map(|x| match board.tile(x, y) {
                        Tile::SnakeHead => Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Tile::Snake => Span::styled("■ ", Style::default().fg(Color::White)),
                        Tile::Apple => Span::styled(
                            "● ",
                            Style::default()
                                .fg(Color::LightGreen)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Tile::Light => Span::styled(". ", Style::default().fg(Color::Gray)),
                        Tile::Dark => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, board: &FrameBuffer, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                board.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_message(&self, board: &FrameBuffer, status: Option<GameStatus>) -> Paragraph<'_> {
        let line = if board.is_game_over() {
            Line::from(Span::styled(
                "Game Over!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        } else if status == Some(GameStatus::Ready) {
            Line::from(Span::styled(
                "Press R to start",
                Style::default().fg(Color::Gray),
            ))
        } else {
            Line::from("")
        };

        Paragraph::new(line).alignment(Alignment::Center)
    }

    fn render_stopped(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "STOPPED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" start | "),
            Span::styled("X", Style::default().fg(Color::Yellow)),
            Span::raw(" stop | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use crate::render::{Canvas, Scoreboard};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_board_and_score() {
        let mut board = FrameBuffer::new(6);
        board.draw_snake(&[Position::new(2, 2), Position::new(1, 2)]);
        board.draw_apple(Position::new(4, 4));
        board.show_score(7);

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| {
                Renderer::new().render(
                    frame,
                    &board,
                    Some(GameStatus::Running),
                    &GameMetrics::new(),
                )
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Score: 7"));
        assert!(text.contains("Snake"));
        assert!(text.contains('●'));
        assert!(!text.contains("Game Over!"));
    }

    #[test]
    fn test_renders_game_over_and_stopped() {
        let mut board = FrameBuffer::new(6);
        board.show_game_over_message();

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| {
                Renderer::new().render(frame, &board, Some(GameStatus::Over), &GameMetrics::new())
            })
            .unwrap();
        assert!(screen_text(&terminal).contains("Game Over!"));

        board.clear_game_over_message();
        terminal
            .draw(|frame| Renderer::new().render(frame, &board, None, &GameMetrics::new()))
            .unwrap();
        assert!(screen_text(&terminal).contains("STOPPED"));
    }
}
