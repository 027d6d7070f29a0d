//! Stateless UI rendering for the time-travel board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_timetravel::{Player, Position, Square, Win};

use crate::app::{App, Focus};
use crate::settings::Theme;

const BOARD_WIDTH: u16 = 38;
const BOARD_HEIGHT: u16 = 11;

/// Screen regions for one frame.
///
/// Computed from the frame size and reused after drawing to resolve
/// mouse clicks, so what is clicked is always what was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered board pane.
    pub board: Rect,
    /// The nine squares, row-major.
    pub squares: [Rect; 9],
    /// Horizontal separators between rows.
    pub row_separators: [Rect; 2],
    /// Vertical separators, two per row.
    pub col_separators: [Rect; 6],
    /// Turn counter.
    pub turns: Rect,
    /// Bordered history list.
    pub history: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help, when enabled.
    pub help: Option<Rect>,
    history_len: usize,
    history_offset: usize,
}

impl AppLayout {
    /// Splits `area` into the application's regions.
    ///
    /// The history list is scrolled so entry `history_anchor` is visible.
    pub fn new(area: Rect, history_len: usize, history_anchor: usize, show_help: bool) -> Self {
        let mut constraints = vec![
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT + 2),
            Constraint::Length(3),
        ];
        if show_help {
            constraints.push(Constraint::Length(3));
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(28)])
            .split(chunks[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(body[1]);

        let grid = center_rect(body[0].inner(Margin::new(1, 1)), BOARD_WIDTH, BOARD_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(grid);

        let mut squares = [Rect::default(); 9];
        let mut col_separators = [Rect::default(); 6];
        for row in 0..3 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(12),
                    Constraint::Length(1),
                    Constraint::Length(12),
                    Constraint::Length(1),
                    Constraint::Length(12),
                ])
                .split(rows[row * 2]);
            for col in 0..3 {
                squares[row * 3 + col] = cols[col * 2];
            }
            col_separators[row * 2] = cols[1];
            col_separators[row * 2 + 1] = cols[3];
        }

        let history_rows = usize::from(side[1].inner(Margin::new(1, 1)).height);

        Self {
            title: chunks[0],
            board: body[0],
            squares,
            row_separators: [rows[1], rows[3]],
            col_separators,
            turns: side[0],
            history: side[1],
            status: chunks[2],
            help: chunks.get(3).copied(),
            history_len,
            history_offset: scroll_offset(history_len, history_anchor, history_rows),
        }
    }

    /// Index of the first history entry on screen.
    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    /// Square under a terminal cell.
    pub fn square_at(&self, x: u16, y: u16) -> Option<Position> {
        self.squares
            .iter()
            .position(|rect| contains(*rect, x, y))
            .and_then(Position::from_index)
    }

    /// History entry under a terminal cell.
    pub fn history_at(&self, x: u16, y: u16) -> Option<usize> {
        let inner = self.history.inner(Margin::new(1, 1));
        if !contains(inner, x, y) {
            return None;
        }
        let index = self.history_offset + usize::from(y - inner.y);
        (index < self.history_len).then_some(index)
    }
}

/// Draws the whole screen from the app state and returns the layout used.
pub fn draw(frame: &mut Frame, app: &App) -> AppLayout {
    let game = app.game();
    let anchor = match app.focus() {
        Focus::History => app.selected(),
        Focus::Board => game.step_number(),
    };
    let layout = AppLayout::new(
        frame.area(),
        game.history().len(),
        anchor,
        *app.settings().show_help(),
    );
    let theme = app.settings().theme();

    let title = Paragraph::new("Strictly Timetravel - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, app, theme);
    draw_turns(frame, layout.turns, game.step_number());
    draw_history(frame, &layout, app);

    let status = Paragraph::new(game.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    if let Some(area) = layout.help {
        let help = Paragraph::new(
            "1-9/Enter: play | Arrows: move | Tab: history | [ ]: step | Q: quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, area);
    }

    layout
}

fn pane_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn draw_board(frame: &mut Frame, layout: &AppLayout, app: &App, theme: &Theme) {
    let focused = app.focus() == Focus::Board;
    frame.render_widget(pane_block("Board", focused), layout.board);

    let board = app.game().current();
    let win = app.game().winner();
    for pos in Position::ALL {
        let cursor = focused && pos == app.cursor();
        draw_square(frame, layout.squares[pos.to_index()], board.get(pos), pos, win, cursor, theme);
    }

    for area in layout.row_separators {
        let sep = Paragraph::new("─".repeat(area.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
    for area in layout.col_separators {
        let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
}

fn draw_square(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    win: Option<Win>,
    cursor: bool,
    theme: &Theme,
) {
    let (symbol, mut style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => {
            let color = match player {
                Player::X => *theme.x_color(),
                Player::O => *theme.o_color(),
            };
            (
                player.to_string(),
                Style::default().fg(color.into()).add_modifier(Modifier::BOLD),
            )
        }
    };

    if win.is_some_and(|w| w.contains(pos)) {
        style = style
            .bg((*theme.highlight_color()).into())
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    }
    if cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(symbol)])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_turns(frame: &mut Frame, area: Rect, step: usize) {
    let line = Line::from(vec![
        Span::styled("Turns:", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(" {}", step)),
    ]);
    let turns = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(turns, area);
}

fn draw_history(frame: &mut Frame, layout: &AppLayout, app: &App) {
    let focused = app.focus() == Focus::History;
    let step = app.game().step_number();

    let lines: Vec<Line> = app
        .game()
        .history()
        .labels()
        .map(|(index, label)| {
            let marker = if index == step { "▶ " } else { "  " };
            let mut style = if index == step {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if focused && index == app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(format!("{}{}", marker, label), style))
        })
        .collect();

    let offset = u16::try_from(layout.history_offset).unwrap_or(u16::MAX);
    let history = Paragraph::new(lines)
        .scroll((offset, 0))
        .block(pane_block("History", focused));
    frame.render_widget(history, layout.history);
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

/// First visible row so that `anchor` sits on screen, pinned to the bottom
/// once the list is longer than `rows`.
fn scroll_offset(len: usize, anchor: usize, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    anchor.min(len.saturating_sub(1)).saturating_sub(rows - 1)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use crate::settings::Settings;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 30)).unwrap()
    }

    fn render(app: &App) -> (String, AppLayout, ratatui::buffer::Buffer) {
        render_on(app, make_terminal())
    }

    fn render_on(
        app: &App,
        mut terminal: Terminal<TestBackend>,
    ) -> (String, AppLayout, ratatui::buffer::Buffer) {
        let mut layout = None;
        terminal
            .draw(|frame| layout = Some(draw(frame, app)))
            .expect("render should not panic");
        let buffer = terminal.backend().buffer().clone();
        let content: String = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect();
        (content, layout.unwrap(), buffer)
    }

    fn app_after(indices: &[usize]) -> App {
        let mut app = App::new(Settings::default());
        for &i in indices {
            app.handle(Action::Square(Position::from_index(i).unwrap()));
        }
        app
    }

    #[test]
    fn test_new_game_renders() {
        let (content, _, _) = render(&app_after(&[]));
        assert!(content.contains("Next player: X"));
        assert!(content.contains("Turns: 0"));
        assert!(content.contains("Go to game start"));
        assert!(!content.contains("Go to move #1"));
    }

    #[test]
    fn test_win_renders_status_history_and_highlight() {
        let app = app_after(&[0, 4, 1, 3, 2]);
        let (content, layout, buffer) = render(&app);
        assert!(content.contains("Winner: X"));
        assert!(content.contains("Turns: 5"));
        assert!(content.contains("Go to move #5"));

        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            let rect = layout.squares[pos.to_index()];
            let cell = buffer.cell((rect.x, rect.y)).unwrap();
            assert_eq!(cell.bg, Color::Green);
        }
        let center = layout.squares[Position::Center.to_index()];
        assert_ne!(buffer.cell((center.x, center.y)).unwrap().bg, Color::Green);
    }

    #[test]
    fn test_draw_renders() {
        let (content, _, _) = render(&app_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]));
        assert!(content.contains("Draw"));
        assert!(content.contains("Turns: 9"));
    }

    #[test]
    fn test_help_bar_optional() {
        let app = App::new(Settings::default().with_show_help(false));
        let (content, layout, _) = render(&app);
        assert!(layout.help.is_none());
        assert!(!content.contains("Tab: history"));
    }

    #[test]
    fn test_square_hit_testing() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 30), 1, 0, true);
        for pos in Position::ALL {
            let rect = layout.squares[pos.to_index()];
            assert_eq!(
                layout.square_at(rect.x + rect.width / 2, rect.y + 1),
                Some(pos)
            );
        }
        assert_eq!(layout.square_at(0, 0), None);
    }

    #[test]
    fn test_history_hit_testing() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 30), 3, 0, true);
        let inner = layout.history.inner(Margin::new(1, 1));
        assert_eq!(layout.history_at(inner.x, inner.y), Some(0));
        assert_eq!(layout.history_at(inner.x + 2, inner.y + 2), Some(2));
        assert_eq!(layout.history_at(inner.x, inner.y + 3), None);
        assert_eq!(layout.history_at(layout.history.x, layout.history.y), None);
    }

    const DRAW_GAME: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    fn short_terminal_app() -> App {
        let mut app = App::new(Settings::default().with_show_help(false));
        for i in DRAW_GAME {
            app.handle(Action::Square(Position::from_index(i).unwrap()));
        }
        app
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(3, 2, 9), 0);
        assert_eq!(scroll_offset(10, 9, 9), 1);
        assert_eq!(scroll_offset(10, 4, 3), 2);
        assert_eq!(scroll_offset(10, 20, 3), 7);
        assert_eq!(scroll_offset(10, 9, 0), 0);
    }

    #[test]
    fn test_long_history_keeps_current_step_visible() {
        let app = short_terminal_app();
        let (content, layout, _) = render_on(&app, Terminal::new(TestBackend::new(80, 20)).unwrap());

        let inner = layout.history.inner(Margin::new(1, 1));
        let rows = usize::from(inner.height);
        assert!(rows < 10, "terminal should be too short for the whole list");

        assert!(content.contains("Go to move #9"));
        assert!(!content.contains("Go to game start"));
        assert_eq!(layout.history_offset(), 10 - rows);
        assert_eq!(layout.history_at(inner.x, inner.y), Some(10 - rows));
        assert_eq!(layout.history_at(inner.x, inner.bottom() - 1), Some(9));
    }

    #[test]
    fn test_history_scrolls_with_selection() {
        let mut app = short_terminal_app();
        app.handle(Action::ToggleFocus);
        for _ in 0..9 {
            app.handle(Action::Move(crate::input::Direction::Up));
        }
        assert_eq!(app.selected(), 0);

        let (content, layout, _) = render_on(&app, Terminal::new(TestBackend::new(80, 20)).unwrap());
        let inner = layout.history.inner(Margin::new(1, 1));
        assert!(content.contains("Go to game start"));
        assert_eq!(layout.history_at(inner.x, inner.y), Some(0));
    }
}
