/// Matchup Resolver: shared races between two indexes and who won each.
use serde::Serialize;
use std::cmp::Ordering;

use crate::constants::{SENTINEL_PLACE, TIE_LABEL};
use crate::index::{RaceEntry, RaceIndex};

/// Parse a finishing place. `None` for empty or non-integer text such as "DNF".
pub fn parse_place(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// The place used for ranking: the parsed place, or [`SENTINEL_PLACE`].
pub fn effective_place(raw: &str) -> i64 {
    parse_place(raw).unwrap_or(SENTINEL_PLACE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    AthleteA,
    AthleteB,
    /// Equal effective places. This includes two unplaced athletes, which is
    /// not the same thing as a dead heat; see [`MatchupSide::parsed_place`].
    Tie,
}

/// Lower place wins; equal places tie.
pub fn decide_winner(place_a: i64, place_b: i64) -> Winner {
    match place_a.cmp(&place_b) {
        Ordering::Less => Winner::AthleteA,
        Ordering::Greater => Winner::AthleteB,
        Ordering::Equal => Winner::Tie,
    }
}

/// One athlete's result in a shared race.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupSide {
    pub name: String,
    pub mark: String,
    /// Place as the provider reported it.
    pub place: String,
    /// `None` when the place could not be parsed and the sentinel was used.
    pub parsed_place: Option<i64>,
}

impl MatchupSide {
    fn from_entry(entry: &RaceEntry) -> Self {
        MatchupSide {
            name: entry.athlete.clone(),
            mark: entry.mark.clone(),
            place: entry.place.clone(),
            parsed_place: parse_place(&entry.place),
        }
    }

    pub fn effective_place(&self) -> i64 {
        self.parsed_place.unwrap_or(SENTINEL_PLACE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matchup {
    pub date: String,
    pub discipline: String,
    pub competition: String,
    /// Taken from athlete A's result.
    pub venue: String,
    pub athlete_a: MatchupSide,
    pub athlete_b: MatchupSide,
    pub winner: Winner,
}

impl Matchup {
    fn from_entries(a: &RaceEntry, b: &RaceEntry) -> Self {
        let athlete_a = MatchupSide::from_entry(a);
        let athlete_b = MatchupSide::from_entry(b);
        let winner = decide_winner(athlete_a.effective_place(), athlete_b.effective_place());
        Matchup {
            date: a.date().to_string(),
            discipline: a.discipline().to_string(),
            competition: a.competition().to_string(),
            venue: a.venue.clone(),
            athlete_a,
            athlete_b,
            winner,
        }
    }

    /// Winner's display name, or "Tie".
    pub fn winner_name(&self) -> &str {
        match self.winner {
            Winner::AthleteA => &self.athlete_a.name,
            Winner::AthleteB => &self.athlete_b.name,
            Winner::Tie => TIE_LABEL,
        }
    }
}

/// Build a matchup for every signature present in both indexes, sorted by
/// date string ascending. Races on the same date stay in `a`'s order.
pub fn find_matchups(a: &RaceIndex, b: &RaceIndex) -> Vec<Matchup> {
    let mut matchups: Vec<Matchup> = a
        .entries()
        .iter()
        .filter_map(|entry_a| {
            b.get(&entry_a.signature)
                .map(|entry_b| Matchup::from_entries(entry_a, entry_b))
        })
        .collect();

    matchups.sort_by(|x, y| x.date.cmp(&y.date));
    matchups
}
