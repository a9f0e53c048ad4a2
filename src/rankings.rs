//! Ranking and pagination over stat-leader tables.
//!
//! The sort contract is fixed: order by the tab's headline stat (direction
//! from the column descriptor), then games played ascending, then time on ice
//! ascending. Among players tied on the headline stat, fewer games or fewer
//! minutes ranks them higher, so ties favor efficiency over volume.

use std::cmp::Ordering;

use thiserror::Error;

use crate::columns::ColumnSpec;
use crate::tables::PlayerStatRow;

/// Rows per page in leaderboard tables.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Most goalies a team dresses in a season; the minimum-games filter only
/// appears when a goalie pool is larger than this.
pub const MAX_GOALIES_PER_TEAM: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("page {page} out of range 1..={total_pages}")]
    OutOfRange { page: usize, total_pages: usize },
}

#[derive(Debug, Clone)]
pub struct RankedRow {
    /// 1-based position in the fully tie-broken order.
    pub rank: usize,
    pub row: PlayerStatRow,
}

/// Sort rows by the descriptor's stat and assign positional ranks.
///
/// The sort is stable, so rows equal on all three keys keep their source
/// order and still receive distinct ranks. Rows missing the headline stat
/// sort last regardless of direction. An empty input yields an empty result.
pub fn rank_by(mut rows: Vec<PlayerStatRow>, spec: &ColumnSpec) -> Vec<RankedRow> {
    rows.sort_by(|a, b| compare_rows(a, b, spec));
    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| RankedRow { rank: idx + 1, row })
        .collect()
}

fn compare_rows(a: &PlayerStatRow, b: &PlayerStatRow, spec: &ColumnSpec) -> Ordering {
    compare_stat(a.stat(spec.name), b.stat(spec.name), spec.sort_ascending)
        .then_with(|| a.games_played.cmp(&b.games_played))
        .then_with(|| a.toi_minutes.total_cmp(&b.toi_minutes))
}

fn compare_stat(a: Option<f64>, b: Option<f64>, ascending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if ascending {
                x.total_cmp(&y)
            } else {
                y.total_cmp(&x)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// `max(1, ceil(row_count / page_size))` — even an empty table has one
/// (empty) page so page-number controls always have a valid choice.
pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0);
    row_count.div_ceil(page_size).max(1)
}

/// Rows at positions `[(page-1)*size, page*size)`, clipped at the end.
///
/// `page` is 1-based. A page outside `[1, total_pages]` is a caller contract
/// violation; the presentation layer clamps before calling.
pub fn page_slice<T>(rows: &[T], page_size: usize, page: usize) -> Result<&[T], PageError> {
    let total = total_pages(rows.len(), page_size);
    if page < 1 || page > total {
        return Err(PageError::OutOfRange {
            page,
            total_pages: total,
        });
    }
    let start = (page - 1) * page_size;
    if start >= rows.len() {
        // Page 1 of an empty table.
        return Ok(&rows[0..0]);
    }
    let end = (start + page_size).min(rows.len());
    Ok(&rows[start..end])
}

/// The first up-to-3 rows of a ranked sequence, for podium display. Drawing
/// from the same ranked slice pagination uses keeps the podium consistent
/// with page 1.
pub fn podium<T>(rows: &[T]) -> &[T] {
    &rows[..rows.len().min(3)]
}

/// Minimum-games slider parameters for a goalie pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinGamesFilter {
    pub step: u32,
    /// Default and maximum floor: `max_games_played` rounded down to `step`.
    pub max_value: u32,
}

/// Slider increments for the games-played floor. No filter at all unless the
/// pool's leader has played strictly more than 5 games; the step is 5 past 15
/// games so the control has a small number of meaningful positions.
pub fn min_games_filter(max_games_played: u32) -> Option<MinGamesFilter> {
    if max_games_played <= 5 {
        return None;
    }
    let step = if max_games_played > 15 { 5 } else { 2 };
    Some(MinGamesFilter {
        step,
        max_value: max_games_played - max_games_played % step,
    })
}

/// Pre-ranking filter dropping rows below the games-played floor.
pub fn apply_min_games(rows: Vec<PlayerStatRow>, floor: u32) -> Vec<PlayerStatRow> {
    rows.into_iter()
        .filter(|row| row.games_played >= floor)
        .collect()
}
