use crate::model::format::MatchFormat;
use crate::model::side::Side;
use crate::score::resolver::SetOutcome;

/// How many set slots the scoring surface must currently show. Sets are
/// revealed one at a time: the next slot opens only once the current set is
/// decided, and a deciding slot is always shown while the match is alive.
pub fn sets_to_show(outcomes: &[SetOutcome], format: MatchFormat) -> usize {
    let mut completed = 0usize;
    let mut wins = [0usize; 2];

    for outcome in outcomes.iter().take(format.total_sets()) {
        match outcome.winner() {
            Some(side) => {
                completed += 1;
                wins[side.index()] += 1;
            }
            None => break,
        }
    }

    let match_decided = Side::BOTH
        .iter()
        .any(|side| wins[side.index()] >= format.sets_to_win());

    if match_decided {
        completed.max(2)
    } else {
        (completed + 1).min(format.total_sets())
    }
}
