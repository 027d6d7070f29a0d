//! Drives the app through real key and mouse events and checks the screen.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};
use strictly_timetravel::{GameStatus, Player, Position};
use strictly_timetravel_tui::{App, AppLayout, Settings, draw, map_key, map_mouse};

fn screen(app: &App) -> (String, AppLayout) {
    let mut terminal = Terminal::new(TestBackend::new(90, 32)).unwrap();
    let mut layout = None;
    terminal
        .draw(|frame| layout = Some(draw(frame, app)))
        .unwrap();
    let content = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol().to_string())
        .collect();
    (content, layout.unwrap())
}

fn press(app: &mut App, code: KeyCode) {
    if let Some(action) = map_key(KeyEvent::new(code, KeyModifiers::NONE)) {
        app.handle(action);
    }
}

fn click(app: &mut App, layout: &AppLayout, column: u16, row: u16) {
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    if let Some(action) = map_mouse(mouse, layout) {
        app.handle(action);
    }
}

#[test]
fn test_keyboard_game_to_win() {
    let mut app = App::new(Settings::default());
    for key in ['1', '5', '2', '4', '3'] {
        press(&mut app, KeyCode::Char(key));
    }

    assert_eq!(app.game().status(), GameStatus::Winner(Player::X));
    let (content, _) = screen(&app);
    assert!(content.contains("Winner: X"));
    assert!(content.contains("Turns: 5"));
    assert!(content.contains("Go to move #5"));
}

#[test]
fn test_mouse_play_and_history_click() {
    let mut app = App::new(Settings::default());

    let (_, layout) = screen(&app);
    let center = layout.squares[Position::Center.to_index()];
    click(&mut app, &layout, center.x + 1, center.y + 1);
    assert_eq!(app.game().step_number(), 1);

    let (_, layout) = screen(&app);
    let corner = layout.squares[Position::BottomRight.to_index()];
    click(&mut app, &layout, corner.x, corner.y);
    assert_eq!(app.game().step_number(), 2);

    // First line inside the history border is "Go to game start".
    let (_, layout) = screen(&app);
    click(&mut app, &layout, layout.history.x + 2, layout.history.y + 1);
    assert_eq!(app.game().step_number(), 0);
    assert!(app.game().x_is_next());
    assert_eq!(app.game().history().len(), 3);

    let (content, _) = screen(&app);
    assert!(content.contains("Next player: X"));
    assert!(content.contains("Turns: 0"));
}

#[test]
fn test_branching_from_history_with_keys() {
    let mut app = App::new(Settings::default());
    for key in ['1', '5', '2'] {
        press(&mut app, KeyCode::Char(key));
    }

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.game().step_number(), 1);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.game().history().len(), 3);

    let (content, _) = screen(&app);
    assert!(content.contains("Go to move #2"));
    assert!(!content.contains("Go to move #3"));
}

#[test]
fn test_clicks_outside_targets_do_nothing() {
    let mut app = App::new(Settings::default());
    let (_, layout) = screen(&app);
    click(&mut app, &layout, 0, 0);
    let sep = layout.row_separators[0];
    click(&mut app, &layout, sep.x, sep.y);
    assert_eq!(app.game().step_number(), 0);
}
