//! Key events resolved all the way to game state

use crossterm::event::{KeyCode, KeyEvent};
use tui_tictactoe::core::GameState;
use tui_tictactoe::input::{handle_key_event, InputHandler};

fn press(state: &mut GameState, input: &mut InputHandler, code: KeyCode) -> bool {
    let Some(action) = handle_key_event(KeyEvent::from(code)) else {
        return false;
    };
    let snap = state.snapshot();
    match input.handle(action, &snap) {
        Some(intent) => state.dispatch(intent),
        None => false,
    }
}

#[test]
fn test_cursor_play_and_history_navigation() {
    let mut state = GameState::new();
    let mut input = InputHandler::new();

    // Center, then up-left corner via the cursor.
    assert!(press(&mut state, &mut input, KeyCode::Enter));
    press(&mut state, &mut input, KeyCode::Up);
    press(&mut state, &mut input, KeyCode::Left);
    assert!(press(&mut state, &mut input, KeyCode::Char(' ')));
    assert_eq!(state.history()[2].description(), "O move to (1, 1)");

    assert!(press(&mut state, &mut input, KeyCode::Char('[')));
    assert_eq!(state.current_step(), 1);
    assert!(press(&mut state, &mut input, KeyCode::Home));
    assert_eq!(state.current_step(), 0);
    assert!(!press(&mut state, &mut input, KeyCode::Char('[')));
    assert!(press(&mut state, &mut input, KeyCode::End));
    assert_eq!(state.current_step(), 2);
    assert!(!press(&mut state, &mut input, KeyCode::Char(']')));
}

#[test]
fn test_sort_and_restart_keys() {
    let mut state = GameState::new();
    let mut input = InputHandler::new();

    press(&mut state, &mut input, KeyCode::Char('7'));
    assert!(press(&mut state, &mut input, KeyCode::Char('s')));
    assert!(state.sort_descending());
    assert!(press(&mut state, &mut input, KeyCode::Char('r')));
    assert_eq!(state.history().len(), 1);
    assert!(state.sort_descending());
}
