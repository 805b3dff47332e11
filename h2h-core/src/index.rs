/// Race Indexer: one athlete's performances keyed by race signature.
///
/// Iteration follows first-insertion order, which is the order the provider
/// listed the races in. The no-match diagnostic relies on that to show the
/// first few keys of each athlete.
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use crate::error::H2hError;
use crate::matchup::effective_place;
use crate::signature::{RaceSignature, SignatureMode};
use crate::types::Performance;

/// What to do when one athlete has two performances with the same signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// The later performance replaces the earlier one. The entry keeps the
    /// earlier one's position in iteration order.
    #[default]
    KeepLast,
    KeepFirst,
    /// Keep whichever has the lower effective place. Equal places keep the earlier.
    BestPlace,
    /// Fail with [`H2hError::DuplicateRace`].
    Error,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IndexOptions {
    pub mode: SignatureMode,
    pub collision: CollisionPolicy,
}

/// Normalized view of one performance inside a [`RaceIndex`].
#[derive(Debug, Clone, PartialEq)]
pub struct RaceEntry {
    pub signature: RaceSignature,
    pub mark: String,
    pub place: String,
    pub venue: String,
    pub wind: String,
    pub athlete: String,
}

impl RaceEntry {
    fn from_performance(signature: RaceSignature, p: &Performance, athlete: &str) -> Self {
        RaceEntry {
            signature,
            mark: p.mark.clone(),
            place: p.place.clone(),
            venue: p.venue_label(),
            wind: p.wind.clone(),
            athlete: athlete.to_string(),
        }
    }

    pub fn date(&self) -> &str {
        &self.signature.date
    }

    pub fn discipline(&self) -> &str {
        &self.signature.discipline
    }

    pub fn competition(&self) -> &str {
        &self.signature.competition
    }
}

#[derive(Debug, Clone)]
pub struct RaceIndex {
    athlete: String,
    entries: Vec<RaceEntry>,
    positions: HashMap<RaceSignature, usize>,
}

impl RaceIndex {
    /// Index `performances` for `athlete` (the display name carried into matchups).
    pub fn build<'a>(
        performances: impl IntoIterator<Item = &'a Performance>,
        athlete: &str,
        options: &IndexOptions,
    ) -> Result<Self, H2hError> {
        let mut index = RaceIndex {
            athlete: athlete.to_string(),
            entries: Vec::new(),
            positions: HashMap::new(),
        };

        for p in performances {
            let signature = options.mode.signature(p);
            let entry = RaceEntry::from_performance(signature.clone(), p, athlete);

            match index.positions.entry(signature) {
                Entry::Vacant(slot) => {
                    slot.insert(index.entries.len());
                    index.entries.push(entry);
                }
                Entry::Occupied(slot) => {
                    let existing = &mut index.entries[*slot.get()];
                    debug!(athlete, signature = %slot.key(), policy = ?options.collision, "race signature collision");
                    match options.collision {
                        CollisionPolicy::KeepLast => {
                            warn!(athlete, signature = %slot.key(), "duplicate race, keeping the later result");
                            *existing = entry;
                        }
                        CollisionPolicy::KeepFirst => {
                            warn!(athlete, signature = %slot.key(), "duplicate race, keeping the earlier result");
                        }
                        CollisionPolicy::BestPlace => {
                            if effective_place(&entry.place) < effective_place(&existing.place) {
                                *existing = entry;
                            }
                        }
                        CollisionPolicy::Error => {
                            return Err(H2hError::DuplicateRace {
                                athlete: athlete.to_string(),
                                signature: slot.key().clone(),
                            });
                        }
                    }
                }
            }
        }

        debug!(athlete, races = index.entries.len(), "built race index");
        Ok(index)
    }

    pub fn athlete(&self) -> &str {
        &self.athlete
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, signature: &RaceSignature) -> Option<&RaceEntry> {
        self.positions.get(signature).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, signature: &RaceSignature) -> bool {
        self.positions.contains_key(signature)
    }

    /// Entries in first-insertion order.
    pub fn entries(&self) -> &[RaceEntry] {
        &self.entries
    }

    pub fn signatures(&self) -> impl Iterator<Item = &RaceSignature> {
        self.entries.iter().map(|e| &e.signature)
    }

    /// The first `limit` signatures, for diagnosing why nothing matched.
    pub fn sample_signatures(&self, limit: usize) -> Vec<&RaceSignature> {
        self.signatures().take(limit).collect()
    }
}
