use crate::models::rank::RankTable;

/// Window used by single-game matching unless configured otherwise.
pub const DEFAULT_RANK_WINDOW: usize = 1;

/// Ordinal distance between two ranks of `game_name`, if both are on its ladder.
pub fn rank_distance(
    rank_table: &RankTable,
    game_name: &str,
    rank_a: &str,
    rank_b: &str,
) -> Option<usize> {
    let a = rank_table.ordinal(game_name, rank_a)?;
    let b = rank_table.ordinal(game_name, rank_b)?;
    Some(a.abs_diff(b))
}

/// Unknown games and ranks are never compatible.
pub fn is_compatible(
    rank_table: &RankTable,
    game_name: &str,
    rank_a: &str,
    rank_b: &str,
    max_distance: usize,
) -> bool {
    rank_distance(rank_table, game_name, rank_a, rank_b)
        .is_some_and(|distance| distance <= max_distance)
}
