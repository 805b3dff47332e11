/// Aggregate head-to-head record over a list of matchups.
use serde::Serialize;
use std::collections::BTreeSet;

use crate::matchup::{Matchup, Winner};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadToHeadRecord {
    pub athlete_a: String,
    pub athlete_b: String,
    pub wins_a: usize,
    pub wins_b: usize,
    pub ties: usize,
    pub total: usize,
    /// Sorted, de-duplicated disciplines of the matchups.
    pub disciplines: Vec<String>,
    pub matchups: Vec<Matchup>,
}

impl HeadToHeadRecord {
    pub fn from_matchups(
        athlete_a: impl Into<String>,
        athlete_b: impl Into<String>,
        matchups: Vec<Matchup>,
    ) -> Self {
        let mut wins_a = 0;
        let mut wins_b = 0;
        let mut ties = 0;
        for m in &matchups {
            match m.winner {
                Winner::AthleteA => wins_a += 1,
                Winner::AthleteB => wins_b += 1,
                Winner::Tie => ties += 1,
            }
        }

        let disciplines: BTreeSet<&str> = matchups.iter().map(|m| m.discipline.as_str()).collect();
        let disciplines = disciplines.into_iter().map(str::to_string).collect();

        HeadToHeadRecord {
            athlete_a: athlete_a.into(),
            athlete_b: athlete_b.into(),
            wins_a,
            wins_b,
            ties,
            total: matchups.len(),
            disciplines,
            matchups,
        }
    }

    /// Keep only matchups in `discipline` and re-tally.
    pub fn filter_discipline(self, discipline: &str) -> Self {
        let matchups = self
            .matchups
            .into_iter()
            .filter(|m| m.discipline == discipline)
            .collect();
        HeadToHeadRecord::from_matchups(self.athlete_a, self.athlete_b, matchups)
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchup::MatchupSide;

    fn side(name: &str, place: &str) -> MatchupSide {
        MatchupSide {
            name: name.to_string(),
            mark: String::new(),
            place: place.to_string(),
            parsed_place: place.parse().ok(),
        }
    }

    fn matchup(discipline: &str, winner: Winner) -> Matchup {
        Matchup {
            date: "2024-06-01".to_string(),
            discipline: discipline.to_string(),
            competition: "Meet".to_string(),
            venue: String::new(),
            athlete_a: side("A", "1"),
            athlete_b: side("B", "2"),
            winner,
        }
    }

    #[test]
    fn test_tally() {
        let record = HeadToHeadRecord::from_matchups(
            "A",
            "B",
            vec![
                matchup("1500m", Winner::AthleteA),
                matchup("Mile", Winner::AthleteB),
                matchup("1500m", Winner::AthleteA),
                matchup("5000m", Winner::Tie),
            ],
        );
        assert_eq!(record.wins_a, 2);
        assert_eq!(record.wins_b, 1);
        assert_eq!(record.ties, 1);
        assert_eq!(record.total, 4);
        assert_eq!(record.disciplines, vec!["1500m", "5000m", "Mile"]);
    }

    #[test]
    fn test_filter_discipline_retallies() {
        let record = HeadToHeadRecord::from_matchups(
            "A",
            "B",
            vec![
                matchup("1500m", Winner::AthleteA),
                matchup("Mile", Winner::AthleteB),
                matchup("Mile", Winner::Tie),
            ],
        )
        .filter_discipline("Mile");
        assert_eq!(record.wins_a, 0);
        assert_eq!(record.wins_b, 1);
        assert_eq!(record.ties, 1);
        assert_eq!(record.total, 2);
        assert_eq!(record.disciplines, vec!["Mile"]);
        assert_eq!(record.athlete_a, "A");
    }

    #[test]
    fn test_empty_record() {
        let record = HeadToHeadRecord::from_matchups("A", "B", Vec::new());
        assert!(record.is_empty());
        assert_eq!(record.total, 0);
        assert!(record.disciplines.is_empty());
    }
}
