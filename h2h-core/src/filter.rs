/// Pre-match result filters: finals only, no relays.
use crate::constants::{NON_FINAL_PREFIXES, RELAY_MARKERS};
use crate::types::Performance;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResultFilter {
    /// Drop heats, semi-finals, preliminaries and qualifying rounds.
    pub finals_only: bool,
    /// Drop relay disciplines.
    pub exclude_relays: bool,
}

impl ResultFilter {
    pub fn retains(&self, performance: &Performance) -> bool {
        if self.finals_only && !is_final(&performance.race) {
            return false;
        }
        if self.exclude_relays && is_relay(&performance.discipline) {
            return false;
        }
        true
    }
}

/// An empty round code counts as a final.
pub fn is_final(race: &str) -> bool {
    let code = race.trim().to_uppercase();
    !NON_FINAL_PREFIXES.iter().any(|p| code.starts_with(p))
}

pub fn is_relay(discipline: &str) -> bool {
    let d = discipline.to_lowercase();
    RELAY_MARKERS.iter().any(|m| d.contains(m))
}
