//! Terminal conclusion invariant: nothing is played after a game ends.

use super::Invariant;
use crate::GameHistory;
use crate::rules::GameStatus;

/// Invariant: every snapshot except the last is still in progress.
pub struct TerminalConclusionInvariant;

impl Invariant<GameHistory> for TerminalConclusionInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();
        snapshots
            .iter()
            .enumerate()
            .take(snapshots.len().saturating_sub(1))
            .all(|(k, snapshot)| !GameStatus::evaluate(snapshot.board(), k).is_concluded())
    }

    fn description() -> &'static str {
        "No move follows a concluded game"
    }
}
