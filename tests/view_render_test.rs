//! Rendering tests against ratatui's test backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color, style::Modifier};
use tictactoe_history::{
    Action, App, Focus, GameState, GameView, ScreenLayout, TITLE, TOGGLE_LABEL,
};

fn play(moves: &[usize]) -> GameState {
    let mut state = GameState::new();
    for &index in moves {
        assert!(state.dispatch(Action::PlaceMark(index)).is_applied());
    }
    state
}

fn render(view: &GameView) -> (Buffer, ScreenLayout) {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test backend");
    let mut layout = None;
    terminal
        .draw(|frame| layout = Some(view.draw(frame)))
        .expect("draw");
    let buffer = terminal.backend().buffer().clone();
    (buffer, layout.expect("layout recorded"))
}

fn lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn find(lines: &[String], needle: &str) -> Option<(u16, u16)> {
    lines.iter().enumerate().find_map(|(y, line)| {
        line.find(needle).map(|byte| {
            let x = line[..byte].chars().count();
            (x as u16, y as u16)
        })
    })
}

#[test]
fn test_new_game_screen() {
    let view = GameView::new(&GameState::new(), 4, 0, Focus::Board).expect("view");
    let (buffer, _) = render(&view);
    let lines = lines(&buffer);

    assert!(find(&lines, TITLE).is_some());
    assert!(find(&lines, "Next player: X").is_some());
    assert!(find(&lines, &format!("[ {} ]", TOGGLE_LABEL)).is_some());
    assert!(find(&lines, "1. Go to game start").is_some());
    assert!(find(&lines, "Go to move #").is_none());
}

#[test]
fn test_winning_line_is_highlighted() {
    let state = play(&[0, 1, 4, 3, 8]);
    let view = GameView::new(&state, 4, 0, Focus::Moves).expect("view");
    let (buffer, layout) = render(&view);
    let lines = lines(&buffer);

    assert!(find(&lines, "Winner: X").is_some());
    for (index, rect) in layout.squares.iter().enumerate() {
        let center = &buffer[(rect.x + rect.width / 2, rect.y + rect.height / 2)];
        let highlighted = [0, 4, 8].contains(&index);
        assert_eq!(center.bg == Color::Yellow, highlighted, "square {index}");
    }
}

#[test]
fn test_move_labels_and_current_step_in_bold() {
    let mut state = play(&[4, 0, 8]);
    state.dispatch(Action::JumpTo(2));
    let view = GameView::new(&state, 4, 0, Focus::Board).expect("view");
    let (buffer, _) = render(&view);
    let lines = lines(&buffer);

    assert!(find(&lines, "Go to move #1 - player:X, row:2, col:2").is_some());
    assert!(find(&lines, "Go to move #3 - player:X, row:3, col:3").is_some());

    let (x, y) = find(&lines, "Go to move #2 - player:O, row:1, col:1").expect("entry");
    assert!(buffer[(x, y)].modifier.contains(Modifier::BOLD));
    let (x, y) = find(&lines, "Go to move #3").expect("entry");
    assert!(!buffer[(x, y)].modifier.contains(Modifier::BOLD));

    // Time travel shows the earlier board and the player to move there.
    assert!(find(&lines, "Next player: X").is_some());
}

#[test]
fn test_reverse_order_lists_newest_first() {
    let mut state = play(&[4, 0]);
    state.dispatch(Action::ToggleOrder);
    let view = GameView::new(&state, 4, 0, Focus::Board).expect("view");
    let (buffer, _) = render(&view);
    let lines = lines(&buffer);

    let (_, newest) = find(&lines, "1. Go to move #2").expect("newest first");
    let (_, start) = find(&lines, "3. Go to game start").expect("start last");
    assert!(newest < start);
}

#[test]
fn test_draw_status() {
    let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let app_view = GameView::new(&state, 0, 0, Focus::Board).expect("view");
    let (buffer, _) = render(&app_view);
    assert!(find(&lines(&buffer), "Draw").is_some());
}

#[test]
fn test_app_view_matches_state() {
    let mut app = App::new(true);
    app.dispatch(Action::PlaceMark(2));
    let view = app.view().expect("view");
    assert_eq!(view.entries().len(), 2);
    assert_eq!(view.entries()[0].history_index(), 1);
    assert_eq!(view.status().to_string(), "Next player: O");
}
