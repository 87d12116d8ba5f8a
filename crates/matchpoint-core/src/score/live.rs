use crate::model::format::MatchFormat;
use crate::model::set::SetScore;
use crate::model::side::Side;
use crate::score::estimator::sets_to_show;
use crate::score::resolver::{SetOutcome, resolve_match, resolve_set};

/// Everything the scoring surface needs after an edit, derived in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveState {
    pub set_outcomes: Vec<SetOutcome>,
    pub sets_to_show: usize,
    pub live_winner: Option<Side>,
}

/// Recompute the full live view of the sheet. Called explicitly after every
/// field mutation; there is no cached state to go stale.
pub fn derive_live_state(sets: &[SetScore], format: MatchFormat) -> LiveState {
    let set_outcomes: Vec<SetOutcome> = sets.iter().map(|set| resolve_set(set, format)).collect();
    let sets_to_show = sets_to_show(&set_outcomes, format);
    let live_winner = resolve_match(sets, format);
    LiveState {
        set_outcomes,
        sets_to_show,
        live_winner,
    }
}
