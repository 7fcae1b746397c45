//! End-to-end tests for the headless replay surface.

use clap::Parser;
use rewind_tui::{Cli, Command, ReplayError, render_text, replay};

fn replay_args(args: &[&str]) -> (Vec<u8>, Option<usize>, bool, bool) {
    let cli = Cli::try_parse_from(std::iter::once("rewind").chain(args.iter().copied()))
        .expect("arguments parse");
    match cli.command {
        Some(Command::Replay {
            cells,
            jump,
            descending,
            json,
        }) => (cells, jump, descending, json),
        other => panic!("expected replay command, got {other:?}"),
    }
}

#[test]
fn test_replay_without_winner() {
    let (cells, jump, descending, _) = replay_args(&["replay", "0", "4", "8", "1", "2"]);
    let view = replay(&cells, jump, descending).expect("replays");
    let text = render_text(&view);
    assert!(text.contains("Next player: O"));
    assert!(!text.contains("Winning line"));
    assert_eq!(view.moves().len(), 6);
}

#[test]
fn test_replay_json_matches_view() {
    let (cells, jump, descending, json) =
        replay_args(&["replay", "0", "3", "1", "4", "2", "--jump", "3", "--descending", "--json"]);
    assert!(json);
    let view = replay(&cells, jump, descending).expect("replays");
    let value = serde_json::to_value(&view).expect("serializes");

    assert_eq!(value["status"], serde_json::json!({ "NextPlayer": "O" }));
    assert_eq!(value["winning_line"], serde_json::Value::Null);
    assert_eq!(value["current_step"], 3);
    assert_eq!(value["list_ascending"], false);
    assert_eq!(value["moves"][0]["step"], 5);
    assert_eq!(value["moves"][2]["highlighted"], true);
}

#[test]
fn test_replay_rejects_bad_jump() {
    let (cells, jump, descending, _) = replay_args(&["replay", "4", "--jump", "7"]);
    assert_eq!(
        replay(&cells, jump, descending),
        Err(ReplayError::JumpOutOfRange { step: 7, len: 2 })
    );
}
