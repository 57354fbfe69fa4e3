//! Roster normalization for the save protocol.

use rollcall_server::db::attendance_repo::dedup_roster;
use uuid::Uuid;

#[test]
fn duplicate_ids_collapse_to_one_row_each() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    let roster = dedup_roster(&[a, a, b]);

    assert_eq!(roster.len(), 2);
    assert!(roster.contains(&a));
    assert!(roster.contains(&b));
}

#[test]
fn empty_roster_is_valid() {
    assert!(dedup_roster(&[]).is_empty());
}

#[test]
fn already_unique_roster_is_unchanged_in_content() {
    let ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
    let mut roster = dedup_roster(&ids);
    roster.sort();
    let mut expected = ids.clone();
    expected.sort();
    assert_eq!(roster, expected);
}
