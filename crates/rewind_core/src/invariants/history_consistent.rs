//! History consistency invariant: snapshot k holds exactly k marks.

use super::Invariant;
use crate::GameHistory;

/// Invariant: snapshot 0 is the empty board with no played position, and
/// snapshot k has exactly k occupied cells and records a played position.
pub struct HistoryConsistentInvariant;

impl Invariant<GameHistory> for HistoryConsistentInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().iter().enumerate().all(|(k, snapshot)| {
            snapshot.board().occupied_count() == k && snapshot.played().is_some() == (k > 0)
        })
    }

    fn description() -> &'static str {
        "Snapshot k has exactly k occupied cells"
    }
}
