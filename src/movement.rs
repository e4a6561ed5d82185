/// Signed change in a competitor's day-local rank between two consecutive
/// competition days: `rank(N-1) - rank(N)`. Positive means the competitor
/// moved up the standings, negative means they fell. `None` when there is
/// no previous-day rank to compare against, which callers render as a
/// neutral indicator.
pub fn rank_movement(prev_rank: Option<u32>, curr_rank: u32) -> Option<i32> {
    let prev = prev_rank?;
    Some(prev as i32 - curr_rank as i32)
}
