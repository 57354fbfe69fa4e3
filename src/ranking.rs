//! Attendance ranking over the full member set.
//!
//! Pure computation: takes the member list, the number of meetings already
//! held, and one entry per past-meeting attendance row, and produces the
//! ordered leaderboard. Never persisted or cached; recomputed per request.

use serde::Serialize;
use std::collections::HashMap;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};
use uuid::Uuid;

use crate::db::models::Member;

/// A member extended with derived leaderboard fields.
#[derive(Debug, Clone, Serialize)]
pub struct MemberWithRank {
    #[serde(flatten)]
    pub member: Member,
    pub attendance_count: i64,
    pub percentage: i32,
    pub rank: u32,
}

/// Share of past meetings attended, as a whole percentage. Rounds half away
/// from zero; zero meetings held means zero percent for everyone.
pub fn attendance_percentage(count: i64, total_past_meetings: i64) -> i32 {
    if total_past_meetings <= 0 {
        return 0;
    }
    ((count as f64 / total_past_meetings as f64) * 100.0).round() as i32
}

/// Sort key that folds case and diacritics so accented names collate into
/// natural alphabetical order rather than after 'z'.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Rank every member by attendance at past meetings.
///
/// `attendance` holds one member id per (member, past meeting) pair; members
/// missing from it rank with a count of zero. Ordering is attendance count
/// descending, then name ascending (folded collation). Ranks use competition
/// ("1224") ranking: ties share a rank and the next distinct count takes its
/// 1-based position, so counts [5,5,3] rank [1,1,3].
pub fn rank_members(
    members: Vec<Member>,
    total_past_meetings: i64,
    attendance: &[Uuid],
) -> Vec<MemberWithRank> {
    let mut counts: HashMap<Uuid, i64> = HashMap::new();
    for member_id in attendance {
        *counts.entry(*member_id).or_insert(0) += 1;
    }

    let mut ranked: Vec<MemberWithRank> = members
        .into_iter()
        .map(|member| {
            let attendance_count = counts.get(&member.id).copied().unwrap_or(0);
            MemberWithRank {
                attendance_count,
                percentage: attendance_percentage(attendance_count, total_past_meetings),
                rank: 0,
                member,
            }
        })
        .collect();

    // Final id tiebreak keeps the order deterministic even for equal names.
    ranked.sort_by(|a, b| {
        b.attendance_count
            .cmp(&a.attendance_count)
            .then_with(|| collation_key(&a.member.name).cmp(&collation_key(&b.member.name)))
            .then_with(|| a.member.name.cmp(&b.member.name))
            .then_with(|| a.member.id.cmp(&b.member.id))
    });

    let mut current_rank = 1u32;
    let mut previous_count: Option<i64> = None;
    for (index, entry) in ranked.iter_mut().enumerate() {
        if previous_count != Some(entry.attendance_count) {
            current_rank = index as u32 + 1;
        }
        previous_count = Some(entry.attendance_count);
        entry.rank = current_rank;
    }

    ranked
}
