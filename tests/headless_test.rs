use tui_tictactoe::core::{GameState, HistoryMode};
use tui_tictactoe::headless;

fn run_script(state: &mut GameState, script: &str) -> Vec<serde_json::Value> {
    let mut out = Vec::new();
    headless::run(state, script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn headless_plays_to_a_win() {
    let mut state = GameState::new();
    let lines = run_script(&mut state, "cell 0\ncell 1\ncell 3\ncell 4\ncell 6\ncell 8\n");
    assert_eq!(lines.len(), 6);

    let last = &lines[5];
    assert_eq!(last["status"], "Winner: X");
    assert_eq!(last["winning_line"], serde_json::json!([0, 3, 6]));
    assert_eq!(last["phase"]["state"], "won");
    assert_eq!(last["phase"]["winner"], "X");
    assert_eq!(last["history_len"], 6);
}

#[test]
fn headless_jump_sort_and_errors() {
    let mut state = GameState::with_mode(HistoryMode::Truncate);
    let script = "# warm up\ncell 4\ncell 0\njump 1\nsort\njump 9\nnope 1\ncell 8\n";
    let lines = run_script(&mut state, script);
    assert_eq!(lines.len(), 7);

    assert_eq!(lines[2]["current_step"], 1);
    assert_eq!(lines[3]["sort_descending"], true);
    assert_eq!(lines[3]["moves"][0]["move_index"], 2);
    // Out-of-range jump is a no-op, not an error line.
    assert_eq!(lines[4]["current_step"], 1);
    assert!(lines[5].get("error").is_some());
    // Truncate: the O move at step 2 is replaced.
    assert_eq!(lines[6]["history_len"], 3);
    assert_eq!(lines[6]["moves"][0]["label"], "O move to (3, 3)");
}
