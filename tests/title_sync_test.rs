use tui_tictactoe::core::GameState;
use tui_tictactoe::term::TitleSync;

#[test]
fn title_sync_pushes_first_status() {
    let mut t = TitleSync::new(true);
    assert_eq!(t.update("Next player: X").as_deref(), Some("Next player: X"));
}

#[test]
fn title_sync_skips_unchanged_status() {
    let mut t = TitleSync::new(true);
    assert!(t.update("Next player: X").is_some());
    assert!(t.update("Next player: X").is_none());
    assert!(t.update("Next player: O").is_some());
    assert!(t.update("Next player: O").is_none());
}

#[test]
fn title_sync_invalidate_forces_push() {
    let mut t = TitleSync::new(true);
    assert!(t.update("Winner: X").is_some());
    t.invalidate();
    assert_eq!(t.update("Winner: X").as_deref(), Some("Winner: X"));
}

#[test]
fn title_sync_disabled_never_pushes() {
    let mut t = TitleSync::new(false);
    assert!(!t.enabled());
    assert!(t.update("Winner: X").is_none());
}

#[test]
fn title_sync_follows_game_status() {
    let mut state = GameState::new();
    let mut t = TitleSync::new(true);
    let mut pushed = Vec::new();

    for cell in [0, 1, 3, 4, 6] {
        if let Some(title) = t.update(&state.status_text()) {
            pushed.push(title);
        }
        state.apply_move(cell);
        // Rejected move: status unchanged, nothing pushed.
        state.apply_move(cell);
    }
    if let Some(title) = t.update(&state.status_text()) {
        pushed.push(title);
    }

    assert_eq!(
        pushed,
        vec![
            "Next player: X",
            "Next player: O",
            "Next player: X",
            "Next player: O",
            "Next player: X",
            "Winner: X",
        ]
    );
}
