//! Fantasy-team standings.
//!
//! A team's total is the sum of every score event earned by the chefs on
//! its roster, over the whole season. Teams are ranked by descending
//! total; ties keep input order and still receive distinct ranks.

use serde::Serialize;

use crate::scoring::{ChefProfile, ScoreEvent};
use crate::status::ChefStatus;
use crate::types::DbId;

/// A fantasy team as the standings computation sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamProfile {
    pub id: DbId,
    pub name: String,
    pub owner: String,
}

/// One (team, chef) roster membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterMember {
    pub team_id: DbId,
    pub chef_id: DbId,
}

/// A rostered chef with their season total, as shown inside a standing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChefStanding {
    pub chef_id: DbId,
    pub name: String,
    pub status: ChefStatus,
    pub total_points: i64,
}

/// One team's standings entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    pub team_id: DbId,
    pub name: String,
    pub owner: String,
    /// 1-based position after the descending-total sort.
    pub rank: usize,
    pub total_points: i64,
    /// Roster entries in chef input order.
    pub chefs: Vec<ChefStanding>,
}

/// Compute the ranked standings table.
///
/// Roster members pointing at a chef that is not in `chefs` are dropped;
/// a team with no (surviving) roster entries has total 0. Events for a
/// chef on no roster affect no standing.
pub fn compute_standings(
    teams: &[TeamProfile],
    roster: &[RosterMember],
    chefs: &[ChefProfile],
    events: &[ScoreEvent],
) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = teams
        .iter()
        .map(|team| {
            let team_chefs: Vec<ChefStanding> = chefs
                .iter()
                .filter(|chef| {
                    roster
                        .iter()
                        .any(|m| m.team_id == team.id && m.chef_id == chef.id)
                })
                .map(|chef| ChefStanding {
                    chef_id: chef.id,
                    name: chef.name.clone(),
                    status: chef.status,
                    total_points: season_total(chef.id, events),
                })
                .collect();

            let total_points = team_chefs.iter().map(|c| c.total_points).sum();

            TeamStanding {
                team_id: team.id,
                name: team.name.clone(),
                owner: team.owner.clone(),
                rank: 0,
                total_points,
                chefs: team_chefs,
            }
        })
        .collect();

    standings.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = index + 1;
    }
    standings
}

/// Sum of every event's points for one chef.
fn season_total(chef_id: DbId, events: &[ScoreEvent]) -> i64 {
    events
        .iter()
        .filter(|ev| ev.chef_id == chef_id)
        .map(|ev| i64::from(ev.points))
        .sum()
}
