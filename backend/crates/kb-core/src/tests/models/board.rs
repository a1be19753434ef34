use crate::{Board, BoardPatch, CoreError, DEFAULT_BOARD_COLOR, NewBoard};

use chrono::{Duration, Utc};
use googletest::prelude::*;

fn new_board() -> NewBoard {
    NewBoard {
        title: "Roadmap".to_string(),
        description: None,
        color: None,
        user_id: "user_1".to_string(),
    }
}

#[test]
fn given_no_color_when_board_created_then_default_color_used() {
    let board = Board::new(new_board());

    assert_that!(board.color, eq(DEFAULT_BOARD_COLOR));
    assert_that!(board.user_id, eq("user_1"));
    assert_that!(board.created_at, eq(board.updated_at));
}

#[test]
fn given_patch_with_title_and_color_when_applied_then_fields_change() {
    let mut board = Board::new(new_board());
    let patch = BoardPatch {
        title: Some("Sprint 4".to_string()),
        color: Some("bg-red-500".to_string()),
        description: None,
    };

    let changed = board.apply_patch(&patch);

    assert_that!(changed, eq(true));
    assert_that!(board.title, eq("Sprint 4"));
    assert_that!(board.color, eq("bg-red-500"));
    assert_that!(board.description, none());
}

#[test]
fn given_identical_patch_when_applied_then_reports_no_change() {
    let mut board = Board::new(new_board());
    let before = board.clone();
    let patch = BoardPatch {
        title: Some("Roadmap".to_string()),
        ..Default::default()
    };

    assert_that!(board.apply_patch(&patch), eq(false));
    assert_that!(board, eq(&before));
}

#[test]
fn given_blank_title_when_patch_validated_then_rejected() {
    let patch = BoardPatch {
        title: Some("   ".to_string()),
        ..Default::default()
    };

    assert_that!(patch.validated(), err(anything()));
}

#[test]
fn given_padded_title_when_patch_validated_then_trimmed() {
    let patch = BoardPatch {
        title: Some("  Launch  ".to_string()),
        color: Some(" teal ".to_string()),
        description: None,
    };

    let validated = patch.validated().unwrap();

    assert_that!(validated.title, some(eq("Launch")));
    assert_that!(validated.color, some(eq("teal")));
}

#[test]
fn given_blank_color_when_patch_validated_then_rejected_like_title() {
    let patch = BoardPatch {
        color: Some("  ".to_string()),
        ..Default::default()
    };

    let result = patch.validated();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_board_updated_since() {
    let mut board = Board::new(new_board());
    let week_ago = Utc::now() - Duration::days(7);

    assert!(board.updated_since(week_ago));

    board.updated_at = Utc::now() - Duration::days(30);
    assert!(!board.updated_since(week_ago));
}
