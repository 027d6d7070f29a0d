//! Maps terminal events to semantic actions.

use crate::ui::AppLayout;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use strictly_timetravel::Position;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// What the user asked for, independent of how they asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play at a specific square.
    Square(Position),
    /// Jump to a specific history step.
    Jump(usize),
    /// Move the cursor in the focused pane.
    Move(Direction),
    /// Activate the item under the cursor.
    Select,
    /// Switch focus between the board and the history list.
    ToggleFocus,
    /// Show the previous snapshot.
    StepBack,
    /// Show the next snapshot.
    StepForward,
    /// Leave the game.
    Quit,
}

/// Map a key event to an action.
///
/// Returns None for releases and unbound keys.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => {
            Position::from_index((c as u8 - b'1') as usize).map(Action::Square)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Char('[') | KeyCode::Backspace => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        _ => None,
    }
}

/// Map a left click to the square or history entry under it.
pub fn map_mouse(mouse: MouseEvent, layout: &AppLayout) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    if let Some(position) = layout.square_at(mouse.column, mouse.row) {
        return Some(Action::Square(position));
    }
    layout.history_at(mouse.column, mouse.row).map(Action::Jump)
}

/// Moves the board cursor, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_map_to_squares() {
        assert_eq!(
            map_key(press(KeyCode::Char('1'))),
            Some(Action::Square(Position::TopLeft))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('9'))),
            Some(Action::Square(Position::BottomRight))
        );
        assert_eq!(map_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Down),
            Position::BottomRight
        );
    }
}
