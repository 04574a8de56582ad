use std::collections::HashSet;

use crate::models::matchmaking::{CommonGame, MatchResult, RANK_NOT_AVAILABLE};
use crate::models::user::UserProfile;

/// `round(100 * common / total)`, rounding halves up.
///
/// Any shared game scores at least 1, so a match is never reported at 0%.
pub fn match_percentage(common: usize, total: usize) -> u8 {
    if total == 0 || common == 0 {
        return 0;
    }
    let common = common.min(total);
    ((200 * common + total) / (2 * total)).max(1) as u8
}

fn rank_or_sentinel(rank: Option<&str>) -> String {
    match rank {
        Some(rank) if !rank.trim().is_empty() => rank.to_string(),
        _ => RANK_NOT_AVAILABLE.to_string(),
    }
}

/// Scores `candidate` against the requester's game list.
///
/// Returns `None` when the requester lists no games or the two share none.
/// The percentage is relative to the requester's distinct game count, and
/// common games are listed in the requester's order.
pub fn score(requester: &UserProfile, candidate: &UserProfile) -> Option<MatchResult> {
    let requester_games = requester.game_names();
    if requester_games.is_empty() {
        return None;
    }

    let candidate_games = candidate.game_names();
    let mut seen = HashSet::new();
    let common: Vec<&str> = requester
        .games
        .iter()
        .map(|g| g.game_name.as_str())
        .filter(|name| candidate_games.contains(name) && seen.insert(*name))
        .collect();
    if common.is_empty() {
        return None;
    }

    let common_games = common
        .iter()
        .map(|name| CommonGame {
            game_name: name.to_string(),
            requester_rank: rank_or_sentinel(requester.rank_for(name)),
            candidate_rank: rank_or_sentinel(candidate.rank_for(name)),
        })
        .collect::<Vec<_>>();

    let percentage = match_percentage(common_games.len(), requester_games.len());
    Some(MatchResult::new(candidate, percentage, common_games))
}
