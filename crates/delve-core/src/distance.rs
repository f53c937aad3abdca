//! Bounded edit distance and closest-candidate ranking.
//!
//! The distance engine is the one piece of the core whose cost grows
//! without bound under adversarial input, so it carries the core's one
//! hard resource ceiling: a computation is rejected up front when its
//! dynamic-programming table would cover more than
//! [`DISTANCE_CELL_LIMIT`] cells. Input length validation upstream
//! should make the guard unreachable in practice; it exists so a gap
//! there degrades into a loud error instead of unbounded allocation.

use crate::error::{CoreError, CoreResult};
use crate::name::Named;

/// Ceiling on the number of dynamic-programming cells one edit distance
/// computation may cover.
///
/// The table for strings of `m` and `n` characters has
/// `(m + 1) * (n + 1)` cells. The working memory actually held is two
/// rows sized by the shorter string, so the ceiling bounds time as much
/// as memory.
pub const DISTANCE_CELL_LIMIT: usize = 1 << 20;

/// Compute the Levenshtein distance between two strings.
///
/// Counts the minimum number of single-character insertions, deletions,
/// and substitutions that transform `left` into `right`. Characters
/// compare by Unicode scalar value; callers fold case beforehand when
/// they want case-insensitive distance.
///
/// Fails with [`CoreError::DistanceBudgetExceeded`] before allocating
/// anything proportional to the inputs when the cell ceiling would be
/// exceeded.
pub fn edit_distance(left: &str, right: &str) -> CoreResult<usize> {
    let rows = left.chars().count() + 1;
    let columns = right.chars().count() + 1;
    let cells = rows.saturating_mul(columns);
    if cells > DISTANCE_CELL_LIMIT {
        return Err(CoreError::DistanceBudgetExceeded {
            cells,
            limit: DISTANCE_CELL_LIMIT,
        });
    }

    // Roll along the longer string so the row pair stays as small as
    // the shorter one allows.
    let (shorter, longer) = if rows <= columns {
        (left, right)
    } else {
        (right, left)
    };
    let shorter: Vec<char> = shorter.chars().collect();

    let mut previous: Vec<usize> = (0..=shorter.len()).collect();
    let mut current = vec![0; shorter.len() + 1];
    for (row, long_char) in longer.chars().enumerate() {
        current[0] = row + 1;
        for (column, short_char) in shorter.iter().enumerate() {
            let substitution = previous[column] + usize::from(*short_char != long_char);
            let deletion = previous[column + 1] + 1;
            let insertion = current[column] + 1;
            current[column + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    Ok(previous[shorter.len()])
}

/// Rank a pool of candidates by edit distance from a target string.
///
/// Distance is measured between the case-folded target and each
/// candidate's case-folded singular form. The result is ascending by
/// distance with ties in original pool order, truncated to `limit`
/// entries. A tripped distance guard propagates as an error rather than
/// silently dropping the offending candidate.
pub fn closest<'a, T, I>(target: &str, pool: I, limit: usize) -> CoreResult<Vec<(&'a T, usize)>>
where
    T: Named,
    I: IntoIterator<Item = &'a T>,
{
    let target = target.to_lowercase();
    let mut ranked = Vec::new();
    for candidate in pool {
        let distance = edit_distance(&target, &candidate.name().singular().to_lowercase())?;
        ranked.push((candidate, distance));
    }
    // Stable sort: candidates at equal distance keep pool order.
    ranked.sort_by_key(|(_, distance)| *distance);
    ranked.truncate(limit);
    Ok(ranked)
}
