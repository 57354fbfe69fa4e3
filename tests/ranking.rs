//! Properties of the attendance ranking engine.

use chrono::Utc;
use rollcall_server::db::models::Member;
use rollcall_server::ranking::{attendance_percentage, rank_members};
use uuid::Uuid;

fn member(name: &str) -> Member {
    Member {
        id: Uuid::new_v4(),
        name: name.to_string(),
        created_at: Utc::now(),
    }
}

/// Build an attendance list that gives each member the requested count.
fn attendance_for(counts: &[(Uuid, usize)]) -> Vec<Uuid> {
    let mut out = Vec::new();
    for (id, n) in counts {
        for _ in 0..*n {
            out.push(*id);
        }
    }
    out
}

#[test]
fn every_member_appears_exactly_once() {
    let members: Vec<Member> = ["Ana", "Bruno", "Carla", "Diego"]
        .iter()
        .map(|n| member(n))
        .collect();
    let ids: Vec<Uuid> = members.iter().map(|m| m.id).collect();
    let attendance = attendance_for(&[(ids[0], 2), (ids[2], 1)]);

    let ranked = rank_members(members, 3, &attendance);

    assert_eq!(ranked.len(), 4);
    let mut seen: Vec<Uuid> = ranked.iter().map(|r| r.member.id).collect();
    seen.sort();
    let mut expected = ids.clone();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn competition_ranking_leaves_gap_after_tie() {
    let members: Vec<Member> = ["Ana", "Bruno", "Carla", "Diego"]
        .iter()
        .map(|n| member(n))
        .collect();
    let ids: Vec<Uuid> = members.iter().map(|m| m.id).collect();
    // counts 5, 5, 3, 0
    let attendance = attendance_for(&[(ids[0], 5), (ids[1], 5), (ids[2], 3)]);

    let ranked = rank_members(members, 5, &attendance);

    let ranks: Vec<u32> = ranked.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 1, 3, 4]);
    let counts: Vec<i64> = ranked.iter().map(|r| r.attendance_count).collect();
    assert_eq!(counts, vec![5, 5, 3, 0]);
}

#[test]
fn all_tied_members_share_rank_one() {
    let members: Vec<Member> = ["Ana", "Bruno", "Carla"].iter().map(|n| member(n)).collect();
    let ids: Vec<Uuid> = members.iter().map(|m| m.id).collect();
    let attendance = attendance_for(&[(ids[0], 2), (ids[1], 2), (ids[2], 2)]);

    let ranked = rank_members(members, 4, &attendance);
    assert!(ranked.iter().all(|r| r.rank == 1));
}

#[test]
fn no_members_yields_empty_ranking() {
    let ranked = rank_members(Vec::new(), 7, &[]);
    assert!(ranked.is_empty());
}

#[test]
fn zero_past_meetings_puts_everyone_at_rank_one() {
    let members: Vec<Member> = ["Ana", "Bruno"].iter().map(|n| member(n)).collect();

    let ranked = rank_members(members, 0, &[]);

    for r in &ranked {
        assert_eq!(r.attendance_count, 0);
        assert_eq!(r.percentage, 0);
        assert_eq!(r.rank, 1);
    }
}

#[test]
fn member_without_attendance_rows_still_appears() {
    let members = vec![member("Ana"), member("Zeca")];
    let present = members[0].id;

    let ranked = rank_members(members, 2, &attendance_for(&[(present, 2)]));

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[1].attendance_count, 0);
    assert_eq!(ranked[1].rank, 2);
}

#[test]
fn percentage_rounds_half_up() {
    assert_eq!(attendance_percentage(3, 4), 75);
    assert_eq!(attendance_percentage(1, 3), 33);
    assert_eq!(attendance_percentage(2, 3), 67);
    assert_eq!(attendance_percentage(1, 8), 13); // 12.5 rounds up
    assert_eq!(attendance_percentage(0, 5), 0);
    assert_eq!(attendance_percentage(4, 0), 0);
}

#[test]
fn equal_counts_order_by_name() {
    let members = vec![member("Carla"), member("Ana"), member("Bruno")];
    let attendance: Vec<Uuid> = members.iter().map(|m| m.id).collect();

    let ranked = rank_members(members, 1, &attendance);

    let names: Vec<&str> = ranked.iter().map(|r| r.member.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bruno", "Carla"]);
}

#[test]
fn accented_names_collate_naturally() {
    // Code-point order would sort "Ágata" after "Bruno"; natural order must not.
    let members = vec![member("Bruno"), member("Ágata"), member("Érica")];
    let attendance: Vec<Uuid> = members.iter().map(|m| m.id).collect();

    let ranked = rank_members(members, 1, &attendance);

    let names: Vec<&str> = ranked.iter().map(|r| r.member.name.as_str()).collect();
    assert_eq!(names, vec!["Ágata", "Bruno", "Érica"]);
}

#[test]
fn equal_count_and_name_stays_deterministic() {
    let twin_a = member("Alex");
    let twin_b = member("Alex");
    let expected_first = std::cmp::min(twin_a.id, twin_b.id);

    for _ in 0..3 {
        let ranked = rank_members(vec![twin_a.clone(), twin_b.clone()], 0, &[]);
        assert_eq!(ranked[0].member.id, expected_first);
    }
    // Input order must not matter either.
    let ranked = rank_members(vec![twin_b.clone(), twin_a.clone()], 0, &[]);
    assert_eq!(ranked[0].member.id, expected_first);
}
