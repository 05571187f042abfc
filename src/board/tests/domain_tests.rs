//! Domain-focused tests for identifiers, statuses and the board store.

use super::board_fixtures::{abc_board, assert_partitions_consistent, board_of, id, suffixes, task};
use crate::board::domain::{
    Board, BoardDomainError, BoardError, BoardSlot, BoardView, Priority, TaskDraft, TaskId,
    TaskRecord, TaskStatus,
};
use chrono::NaiveDate;
use rstest::rstest;

#[rstest]
#[case("FYR-2993", 2993)]
#[case("FYR-1000", 1000)]
#[case("FYR-0042", 42)]
fn task_id_parses_prefixed_four_digit_form(#[case] raw: &str, #[case] suffix: u16) {
    let parsed = TaskId::parse(raw).expect("valid task id");
    assert_eq!(parsed.suffix(), suffix);
    assert_eq!(parsed.to_string(), raw);
}

#[rstest]
#[case("FYR-123")]
#[case("FYR-12345")]
#[case("fyr-1234")]
#[case("ABC-1234")]
#[case("FYR-12a4")]
#[case("FYR-+123")]
#[case("")]
fn task_id_rejects_malformed_text(#[case] raw: &str) {
    assert_eq!(
        TaskId::parse(raw),
        Err(BoardDomainError::InvalidTaskId(raw.to_owned()))
    );
}

#[rstest]
fn task_id_rejects_five_digit_suffix() {
    assert_eq!(
        TaskId::from_suffix(10_000),
        Err(BoardDomainError::SuffixOutOfRange(10_000))
    );
}

#[rstest]
fn task_id_serializes_as_prefixed_string() {
    let json = serde_json::to_string(&id(3022)).expect("serialize id");
    assert_eq!(json, "\"FYR-3022\"");
    let parsed: TaskId = serde_json::from_str(&json).expect("deserialize id");
    assert_eq!(parsed, id(3022));
    assert!(serde_json::from_str::<TaskId>("\"FYR-30\"").is_err());
}

#[rstest]
#[case("new", TaskStatus::New)]
#[case(" Ongoing ", TaskStatus::Ongoing)]
#[case("COMPLETED", TaskStatus::Completed)]
fn task_status_parses_known_values(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn task_status_rejects_unknown_value() {
    let err = TaskStatus::try_from("archived").expect_err("unknown status");
    assert_eq!(err.to_string(), "unknown task status: archived");
    assert!(serde_json::from_str::<TaskStatus>("\"archived\"").is_err());
}

#[rstest]
fn priority_defaults_to_medium_and_parses_text() {
    assert_eq!(Priority::default(), Priority::Medium);
    assert_eq!(Priority::try_from("HIGH"), Ok(Priority::High));
    assert!(Priority::try_from("urgent").is_err());
}

#[rstest]
fn from_draft_keeps_fields_and_defaults_priority() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid date");
    let record = TaskRecord::from_draft(id(4321), TaskDraft::new("", ""), TaskStatus::Ongoing, date);

    assert_eq!(record.title(), "");
    assert_eq!(record.description(), "");
    assert_eq!(record.priority(), Priority::Medium);
    assert_eq!(record.status(), TaskStatus::Ongoing);
    assert_eq!(record.date(), Some(date));
}

#[rstest]
fn list_of_reflects_partition_order(abc_board: Board) {
    assert_eq!(suffixes(&abc_board, TaskStatus::New), vec![1001, 1002, 1003]);
    assert_eq!(suffixes(&abc_board, TaskStatus::Ongoing), vec![2001]);
    assert!(abc_board.list_of(TaskStatus::Completed).is_empty());
    assert_eq!(abc_board.len(), 4);
}

#[rstest]
fn remove_at_returns_record_and_shifts_followers(mut abc_board: Board) {
    let removed = abc_board
        .remove_at(TaskStatus::New, 1)
        .expect("index in bounds");

    assert_eq!(removed.id(), id(1002));
    assert_eq!(suffixes(&abc_board, TaskStatus::New), vec![1001, 1003]);
}

#[rstest]
fn remove_at_rejects_out_of_bounds_index(mut abc_board: Board) {
    let before = abc_board.clone();
    let result = abc_board.remove_at(TaskStatus::Completed, 0);

    assert_eq!(
        result,
        Err(BoardError::IndexOutOfBounds {
            status: TaskStatus::Completed,
            index: 0,
            len: 0,
        })
    );
    assert_eq!(abc_board, before);
}

#[rstest]
fn insert_at_rewrites_status_and_allows_append(mut abc_board: Board) {
    abc_board
        .insert_at(TaskStatus::Ongoing, 1, task(5000, TaskStatus::New))
        .expect("append at partition length");

    assert_eq!(suffixes(&abc_board, TaskStatus::Ongoing), vec![2001, 5000]);
    let inserted = abc_board.get(id(5000)).expect("inserted task");
    assert_eq!(inserted.status(), TaskStatus::Ongoing);
    assert_partitions_consistent(&abc_board);
}

#[rstest]
fn insert_at_rejects_index_past_length(mut abc_board: Board) {
    let result = abc_board.insert_at(TaskStatus::Ongoing, 2, task(5000, TaskStatus::Ongoing));

    assert_eq!(
        result,
        Err(BoardError::IndexOutOfBounds {
            status: TaskStatus::Ongoing,
            index: 2,
            len: 1,
        })
    );
    assert!(!abc_board.contains_id(id(5000)));
}

#[rstest]
fn insert_at_rejects_identifier_already_on_board(mut abc_board: Board) {
    let result = abc_board.insert_at(TaskStatus::Completed, 0, task(1002, TaskStatus::Completed));

    assert_eq!(result, Err(BoardError::DuplicateTaskId(id(1002))));
    assert_eq!(abc_board.len(), 4);
}

#[rstest]
fn from_records_rejects_duplicate_identifiers() {
    let result = Board::from_records([task(1001, TaskStatus::New), task(1001, TaskStatus::Ongoing)]);
    assert_eq!(result, Err(BoardError::DuplicateTaskId(id(1001))));
}

#[rstest]
fn locate_finds_slot_across_partitions(abc_board: Board) {
    assert_eq!(
        abc_board.locate(id(1003)),
        Some(BoardSlot::new(TaskStatus::New, 2))
    );
    assert_eq!(
        abc_board.locate(id(2001)),
        Some(BoardSlot::new(TaskStatus::Ongoing, 0))
    );
    assert_eq!(abc_board.locate(id(9999)), None);
}

#[rstest]
fn demo_board_matches_sample_columns() {
    let board = Board::demo();

    assert_eq!(suffixes(&board, TaskStatus::New), vec![2993, 2981]);
    assert_eq!(suffixes(&board, TaskStatus::Ongoing), vec![3022, 3011, 2957]);
    assert_eq!(suffixes(&board, TaskStatus::Completed), vec![3030, 2879]);
    assert_partitions_consistent(&board);

    let dated = board.get(id(2957)).expect("sample task");
    assert_eq!(dated.priority(), Priority::Low);
    assert!(dated.date().is_some());
}

#[rstest]
fn board_view_projects_columns_in_display_order() {
    let board = board_of(&[1001], &[], &[3001, 3002]);
    let view = BoardView::project(&board);

    let titles: Vec<&str> = view.columns.iter().map(|column| column.title).collect();
    assert_eq!(titles, vec!["New", "Ongoing", "Completed"]);
    let counts: Vec<usize> = view.columns.iter().map(|column| column.count).collect();
    assert_eq!(counts, vec![1, 0, 2]);

    let card = view
        .column(TaskStatus::New)
        .and_then(|column| column.cards.first())
        .expect("card in new column");
    assert_eq!(card.id, id(1001));
    assert_eq!(card.title, "Task 1001");
    assert_eq!(card.date, None);
}

#[rstest]
fn board_view_renders_short_date_label() {
    let board = Board::demo();
    let view = BoardView::project(&board);

    let card = view
        .column(TaskStatus::Ongoing)
        .and_then(|column| column.cards.iter().find(|card| card.id == id(2957)))
        .expect("dated sample card");
    assert_eq!(card.date_label().as_deref(), Some("Nov 8"));

    let json = serde_json::to_value(&view).expect("serialize view");
    assert_eq!(json["columns"][1]["cards"][2]["id"], "FYR-2957");
    assert_eq!(json["columns"][1]["cards"][2]["date"], "2024-11-08");
    assert!(json["columns"][0]["cards"][0].get("date").is_none());
}
