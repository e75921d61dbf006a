//! Property tests for verdict and message invariants.

use proptest::prelude::*;

use roster_ingest::Roster;
use roster_validate::{REQUIRED_COLUMNS, RuleId, validate};

/// One data row: values for the six required columns, in `REQUIRED_COLUMNS` order.
type MemberRow = [String; 6];

fn group_value() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", " ", "  ", "A", "B", "NY", " NY"]).prop_map(str::to_string)
}

fn member_row() -> impl Strategy<Value = MemberRow> {
    (
        group_value(),
        "t[0-9]{1,2}",
        group_value(),
        group_value(),
        group_value(),
        group_value(),
    )
        .prop_map(|(id, token, role, industry, state, zip)| {
            [id, token, role, industry, state, zip]
        })
}

fn roster_text(rows: &[MemberRow]) -> String {
    let mut text = REQUIRED_COLUMNS.join("|");
    text.push('\n');
    for row in rows {
        text.push_str(&row.join("|"));
        text.push('\n');
    }
    text
}

fn run(rows: &[MemberRow]) -> Roster {
    let mut roster = Roster::from_raw(roster_text(rows));
    validate(&mut roster).expect("structurally valid roster");
    roster
}

fn catalog_position(message: &str) -> usize {
    RuleId::ALL
        .iter()
        .position(|id| id.message() == message)
        .expect("message from catalog")
}

proptest! {
    #[test]
    fn valid_iff_no_messages(rows in prop::collection::vec(member_row(), 0..30)) {
        let roster = run(&rows);
        prop_assert_eq!(roster.valid, roster.validation_messages.is_empty());
    }

    #[test]
    fn messages_follow_catalog_order(rows in prop::collection::vec(member_row(), 0..30)) {
        let roster = run(&rows);
        let positions: Vec<usize> = roster
            .validation_messages
            .iter()
            .map(|message| catalog_position(message))
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn duplicating_rows_keeps_verdict(rows in prop::collection::vec(member_row(), 0..20)) {
        let single = run(&rows);
        let doubled_rows: Vec<MemberRow> = rows.iter().chain(rows.iter()).cloned().collect();
        let doubled = run(&doubled_rows);
        prop_assert_eq!(single.valid, doubled.valid);
        prop_assert_eq!(single.validation_messages, doubled.validation_messages);
    }

    #[test]
    fn new_state_value_never_fixes_uniqueness(
        rows in prop::collection::vec(member_row(), 1..20),
    ) {
        let message = RuleId::StateCodeUnique.message();
        let before = run(&rows);
        let mut extended = rows.clone();
        let mut extra = rows[0].clone();
        extra[4] = "ZZ-new".to_string();
        extended.push(extra);
        let after = run(&extended);

        let failed_before = before.validation_messages.iter().any(|m| m == message);
        let failed_after = after.validation_messages.iter().any(|m| m == message);
        prop_assert!(!failed_before || failed_after);
    }

    #[test]
    fn spaces_only_counts_as_blank(
        rows in prop::collection::vec(member_row(), 1..20),
        spaces in 0usize..4,
    ) {
        let message = RuleId::RoleIndicatorPresent.message();
        let mut with_empty = rows.clone();
        with_empty[0][2] = String::new();
        let mut with_spaces = rows;
        with_spaces[0][2] = " ".repeat(spaces);

        let empty = run(&with_empty);
        let spaced = run(&with_spaces);
        prop_assert!(empty.validation_messages.iter().any(|m| m == message));
        prop_assert!(spaced.validation_messages.iter().any(|m| m == message));
    }
}
