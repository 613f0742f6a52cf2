//! Score matrix construction and row ordering.
//!
//! Builds the per-chef, per-episode score table shown on the chef
//! performance page: one row per chef, one cell per episode in
//! episode-number order, plus a season total per row. A cell is `None`
//! when no score was recorded for that (chef, episode) pair — which is
//! not the same thing as a recorded score of zero, and must survive as
//! `null` all the way to the rendering layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::ChefStatus;
use crate::types::DbId;

/// A chef as the matrix sees it: identity plus normalized status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChefProfile {
    pub id: DbId,
    pub name: String,
    pub status: ChefStatus,
}

/// An episode column header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeHeader {
    pub id: DbId,
    /// Positive, defines chronological order.
    pub number: i32,
    pub title: String,
    pub air_date: NaiveDate,
    pub is_finale: bool,
}

/// The seven independent achievement annotations a score event can carry.
///
/// Flags are informational only; `points` is never derived from them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementFlags {
    #[serde(default)]
    pub quickfire_winner: bool,
    #[serde(default)]
    pub quickfire_top: bool,
    #[serde(default)]
    pub quickfire_bottom: bool,
    #[serde(default)]
    pub elimination_winner: bool,
    #[serde(default)]
    pub elimination_top: bool,
    #[serde(default)]
    pub elimination_bottom: bool,
    #[serde(default)]
    pub lck_winner: bool,
}

/// One chef's point outcome for one episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    pub chef_id: DbId,
    pub episode_id: DbId,
    /// Signed, no fixed bound.
    pub points: i32,
    pub flags: AchievementFlags,
}

/// A present matrix cell. Absence is modeled as `None` at the
/// [`Cell`] level, never as a zero score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellScore {
    pub points: i32,
    #[serde(flatten)]
    pub flags: AchievementFlags,
}

/// A matrix cell: a recorded score, or `None` ("no score recorded",
/// serialized as JSON `null`).
pub type Cell = Option<CellScore>;

/// One display row: a chef, its cells in episode order, and the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChefRow {
    pub chef_id: DbId,
    pub name: String,
    pub status: ChefStatus,
    pub cells: Vec<Cell>,
    /// Sum of present cells only; absent cells contribute 0.
    pub total_points: i64,
}

impl ChefRow {
    /// Points in the cell at `index`, or `None` when the cell is absent
    /// or the index is out of range.
    fn episode_points(&self, index: usize) -> Option<i32> {
        self.cells.get(index).and_then(|cell| cell.map(|c| c.points))
    }
}

/// The full table: ordered episode headers plus one row per chef.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreMatrix {
    pub episodes: Vec<EpisodeHeader>,
    pub rows: Vec<ChefRow>,
}

/// Build the score matrix from unordered inputs.
///
/// Episodes are sorted ascending by episode number (stable: ties keep
/// input order) and fix the column order. For each (chef, episode) pair
/// the **first** matching event in input order supplies the cell; pairs
/// with no event get an absent cell. Events referencing a chef or
/// episode not present in the inputs are dropped. Rows come back in
/// chef input order; use [`order_rows`] to sort them.
pub fn build(
    chefs: &[ChefProfile],
    episodes: &[EpisodeHeader],
    events: &[ScoreEvent],
) -> ScoreMatrix {
    let mut episodes = episodes.to_vec();
    episodes.sort_by_key(|e| e.number);

    let rows = chefs
        .iter()
        .map(|chef| {
            let cells: Vec<Cell> = episodes
                .iter()
                .map(|episode| {
                    events
                        .iter()
                        .find(|ev| ev.chef_id == chef.id && ev.episode_id == episode.id)
                        .map(|ev| CellScore {
                            points: ev.points,
                            flags: ev.flags,
                        })
                })
                .collect();

            let total_points = cells
                .iter()
                .flatten()
                .map(|cell| i64::from(cell.points))
                .sum();

            ChefRow {
                chef_id: chef.id,
                name: chef.name.clone(),
                status: chef.status,
                cells,
                total_points,
            }
        })
        .collect();

    ScoreMatrix { episodes, rows }
}

/// The sort orders the score table supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending lexical compare on display name.
    Name,
    /// Descending by season total.
    TotalPoints,
    /// Ascending by status rank, ties broken descending by total.
    Status,
    /// Descending by one episode column (0-based index); absent cells
    /// sort below any recorded score, including negative ones.
    Episode(usize),
}

impl SortKey {
    /// Parse a query-string sort key: `name`, `total`, `status`, or
    /// `episode-N` with 1-based N as shown in column headers.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortKey::Name),
            "total" => Some(SortKey::TotalPoints),
            "status" => Some(SortKey::Status),
            _ => {
                let n: usize = s.strip_prefix("episode-")?.parse().ok()?;
                if n == 0 {
                    return None;
                }
                Some(SortKey::Episode(n - 1))
            }
        }
    }
}

/// Sort rows in place by the given key.
///
/// Every sort is stable: rows comparing equal under the key keep their
/// relative order.
pub fn order_rows(rows: &mut [ChefRow], key: SortKey) {
    match key {
        SortKey::Name => rows.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::TotalPoints => rows.sort_by(|a, b| b.total_points.cmp(&a.total_points)),
        SortKey::Status => rows.sort_by(|a, b| {
            a.status
                .rank()
                .cmp(&b.status.rank())
                .then_with(|| b.total_points.cmp(&a.total_points))
        }),
        // Option's ordering puts None below every Some, so reversing the
        // comparison sorts absent cells last even under negative scores.
        SortKey::Episode(index) => {
            rows.sort_by(|a, b| b.episode_points(index).cmp(&a.episode_points(index)));
        }
    }
}
