use super::grouper::DateBucket;

/// Decide whether the row at `index` counts as top `n` within its bucket.
///
/// True when the 1-based position is within `n`, or when the row ties with its
/// predecessor and that predecessor is within `n` by position. The tie check
/// only looks one row back, so a tie run longer than `n + 1` rows is cut off
/// even when every row in it shares the top score. `index` must be a valid
/// position in `bucket`.
pub fn is_in_top_n(bucket: &DateBucket, index: usize, n: i64) -> bool {
    let position = index as i64 + 1;
    if position <= n {
        return true;
    }
    if index == 0 {
        return false;
    }

    // Predecessor's position is `index`; it must itself be inside the boundary
    let previous_in_top_n = index as i64 <= n;
    previous_in_top_n && bucket.rows[index].ties_with(&bucket.rows[index - 1])
}
