use super::*;

const NOW: u64 = 1_720_000_000_000;

// =============================================================
// Seed
// =============================================================

#[test]
fn default_board_has_two_seed_messages() {
    let board = MessageBoardState::default();
    assert_eq!(board.len(), 2);
    assert_eq!(board.messages()[0].user, "User1");
    assert_eq!(board.messages()[1].text, "Second message");
    assert!(board.messages().iter().all(|m| m.votes == 0));
}

#[test]
fn new_board_is_empty() {
    assert!(MessageBoardState::new().is_empty());
}

// =============================================================
// add_message
// =============================================================

#[test]
fn add_message_appends_with_zero_votes() {
    let mut board = MessageBoardState::default();
    let id = board.add_message("CurrentUser", "Loving the new mix", NOW).unwrap();

    assert_eq!(board.len(), 3);
    let last = board.messages().last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.user, "CurrentUser");
    assert_eq!(last.text, "Loving the new mix");
    assert_eq!(last.votes, 0);
}

#[test]
fn add_message_ignores_blank_text() {
    let mut board = MessageBoardState::default();
    let before = board.clone();

    assert!(board.add_message("CurrentUser", "", NOW).is_none());
    assert!(board.add_message("CurrentUser", "   ", NOW).is_none());
    assert!(board.add_message("CurrentUser", "\n\t", NOW).is_none());
    assert_eq!(board, before);
}

#[test]
fn add_message_trims_text() {
    let mut board = MessageBoardState::new();
    board.add_message("CurrentUser", "  hello  ", NOW);
    assert_eq!(board.messages()[0].text, "hello");
}

#[test]
fn add_message_preserves_insertion_order() {
    let mut board = MessageBoardState::new();
    board.add_message("a", "one", NOW);
    board.add_message("b", "two", NOW + 5);
    board.add_message("c", "three", NOW + 10);
    let texts: Vec<&str> = board.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["one", "two", "three"]);
}

#[test]
fn ids_follow_clock_and_never_repeat() {
    let mut board = MessageBoardState::default();
    let first = board.add_message("a", "one", NOW).unwrap();
    let second = board.add_message("a", "two", NOW).unwrap();
    let third = board.add_message("a", "three", NOW - 100).unwrap();

    assert_eq!(first, NOW);
    assert_eq!(second, NOW + 1);
    assert_eq!(third, NOW + 2);
}

#[test]
fn ids_stay_above_seed_ids_when_clock_is_zero() {
    let mut board = MessageBoardState::default();
    let id = board.add_message("a", "early", 0).unwrap();
    assert_eq!(id, 3);
}

// =============================================================
// upvote
// =============================================================

#[test]
fn upvote_increments_only_target_message() {
    let mut board = MessageBoardState::default();
    assert!(board.upvote(1));

    assert_eq!(board.messages()[0].votes, 1);
    assert_eq!(board.messages()[1].votes, 0);
}

#[test]
fn upvote_twice_adds_two_votes() {
    let mut board = MessageBoardState::default();
    board.upvote(2);
    board.upvote(2);
    assert_eq!(board.messages()[1].votes, 2);
}

#[test]
fn upvote_unknown_id_is_noop() {
    let mut board = MessageBoardState::default();
    let before = board.clone();
    assert!(!board.upvote(999));
    assert_eq!(board, before);
}
