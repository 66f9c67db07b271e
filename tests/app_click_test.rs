//! Mouse interaction tests: clicks are mapped through the drawn layout.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use tictactoe_history::{App, Cell, Focus, Player, ScreenLayout, Status};

fn draw(app: &mut App) -> ScreenLayout {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test backend");
    let view = app.view().expect("view");
    let mut layout = None;
    terminal
        .draw(|frame| layout = Some(view.draw(frame)))
        .expect("draw");
    let layout = layout.expect("layout recorded");
    app.set_layout(layout.clone());
    layout
}

fn click(app: &mut App, rect: Rect) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + rect.width / 2,
        row: rect.y + rect.height / 2,
        modifiers: KeyModifiers::NONE,
    });
}

fn click_square(app: &mut App, index: usize) {
    let layout = draw(app);
    click(app, layout.squares[index]);
}

#[test]
fn test_clicking_squares_plays_a_game() {
    let mut app = App::new(false);
    for index in [0, 1, 4, 3, 8] {
        click_square(&mut app, index);
    }
    assert_eq!(app.state().status(), Status::Winner(Player::X));

    // Further clicks on a finished board change nothing.
    let before = app.state().clone();
    click_square(&mut app, 2);
    assert_eq!(app.state(), &before);
}

#[test]
fn test_clicking_occupied_square_changes_nothing() {
    let mut app = App::new(false);
    click_square(&mut app, 4);
    let before = app.state().clone();
    click_square(&mut app, 4);
    assert_eq!(app.state(), &before);
    assert_eq!(app.state().current().get(4), Some(Cell::Marked(Player::X)));
}

#[test]
fn test_clicking_move_entry_jumps() {
    let mut app = App::new(false);
    for index in [0, 4, 8] {
        click_square(&mut app, index);
    }

    let layout = draw(&mut app);
    let (step, rect) = layout.move_rows[1];
    assert_eq!(step, 1);
    click(&mut app, rect);

    assert_eq!(app.state().step(), 1);
    assert_eq!(app.focus(), Focus::Moves);
    assert_eq!(app.state().history().len(), 4);

    // Playing from the past discards the future.
    click_square(&mut app, 2);
    assert_eq!(app.state().history().len(), 3);
    assert_eq!(app.state().current().get(2), Some(Cell::Marked(Player::O)));
}

#[test]
fn test_clicking_toggle_reverses_list() {
    let mut app = App::new(false);
    click_square(&mut app, 0);

    let layout = draw(&mut app);
    click(&mut app, layout.toggle);
    assert!(app.state().is_reverse());

    let layout = draw(&mut app);
    let steps: Vec<usize> = layout.move_rows.iter().map(|(step, _)| *step).collect();
    assert_eq!(steps, vec![1, 0]);
}

#[test]
fn test_right_click_is_ignored() {
    let mut app = App::new(false);
    let layout = draw(&mut app);
    let rect = layout.squares[0];
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: rect.x + 1,
        row: rect.y + 1,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.state().history().len(), 1);
}

#[test]
fn test_restart_key() {
    let mut app = App::new(false);
    click_square(&mut app, 0);
    app.handle_key(KeyCode::Char('n'));
    assert_eq!(app.state().history().len(), 1);
    assert_eq!(app.state().status(), Status::NextPlayer(Player::X));
}
