/// h2h-core: race matching for two athletes' result lists.
///
/// Performances → race index per athlete → shared races → who won each.
/// No IO, no HTTP, no console output. The caller fetches results from the
/// provider and hands the parsed JSON in.
///
/// # Quick start
///
/// ```rust
/// use h2h_core::{find_matchups, HeadToHeadRecord, IndexOptions, Performance, RaceIndex};
///
/// let a: Vec<Performance> = serde_json::from_str(
///     r#"[{"date": "2024-06-01", "discipline": "1500m", "competition": "Diamond League", "place": "1"}]"#,
/// ).unwrap();
/// let b: Vec<Performance> = serde_json::from_str(
///     r#"[{"date": "2024-06-01", "discipline": "1500m", "competition": {"name": "Diamond League"}, "place": 2}]"#,
/// ).unwrap();
///
/// let options = IndexOptions::default();
/// let index_a = RaceIndex::build(&a, "Cole Hocker", &options).unwrap();
/// let index_b = RaceIndex::build(&b, "Cooper Teare", &options).unwrap();
///
/// let record = HeadToHeadRecord::from_matchups("Cole Hocker", "Cooper Teare", find_matchups(&index_a, &index_b));
/// assert_eq!(record.wins_a, 1);
/// assert_eq!(record.matchups[0].winner_name(), "Cole Hocker");
/// ```

pub mod constants;
pub mod error;
pub mod filter;
pub mod index;
pub mod matchup;
pub mod record;
pub mod resolver;
pub mod signature;
pub mod types;

// Re-export primary public API at crate root.
pub use error::H2hError;
pub use filter::ResultFilter;
pub use index::{CollisionPolicy, IndexOptions, RaceEntry, RaceIndex};
pub use matchup::{
    decide_winner, effective_place, find_matchups, parse_place, Matchup, MatchupSide, Winner,
};
pub use record::HeadToHeadRecord;
pub use resolver::select_best_candidate;
pub use signature::{RaceSignature, SignatureMode};
pub use types::{AthleteCandidate, AthleteIdentity, Competition, Performance, Venue};
