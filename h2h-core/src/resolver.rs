/// Athlete Resolver selection step: pick one identity from search candidates.
use crate::constants::MISSING_DISTANCE;
use crate::error::H2hError;
use crate::types::{AthleteCandidate, AthleteIdentity};

fn distance(candidate: &AthleteCandidate) -> f64 {
    candidate.levenshtein_distance.unwrap_or(MISSING_DISTANCE)
}

/// Return the candidate with the smallest search distance.
///
/// Candidates without a distance count as [`MISSING_DISTANCE`]. On a tie the
/// first candidate in provider order wins.
pub fn select_best_candidate(
    query: &str,
    candidates: &[AthleteCandidate],
) -> Result<AthleteIdentity, H2hError> {
    let mut best: Option<&AthleteCandidate> = None;
    for candidate in candidates {
        match best {
            Some(current) if distance(candidate) >= distance(current) => {}
            _ => best = Some(candidate),
        }
    }

    best.cloned()
        .map(AthleteIdentity::from)
        .ok_or_else(|| H2hError::NotFound {
            query: query.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: i64, first: &str, distance: Option<f64>) -> AthleteCandidate {
        AthleteCandidate {
            id,
            firstname: first.to_string(),
            lastname: "Hocker".to_string(),
            country: "USA".to_string(),
            levenshtein_distance: distance,
        }
    }

    #[test]
    fn test_empty_results_are_not_found() {
        let err = select_best_candidate("Nobody", &[]).unwrap_err();
        assert!(matches!(err, H2hError::NotFound { ref query } if query == "Nobody"));
        assert_eq!(err.to_string(), "no athletes found for 'Nobody'");
    }

    #[test]
    fn test_lowest_distance_wins() {
        let candidates = vec![
            candidate(1, "Colin", Some(2.0)),
            candidate(2, "Cole", Some(0.0)),
            candidate(3, "Coleman", Some(3.0)),
        ];
        let best = select_best_candidate("Cole Hocker", &candidates).unwrap();
        assert_eq!(best.id, 2);
        for c in &candidates {
            assert!(distance(&candidates[1]) <= distance(c));
        }
    }

    #[test]
    fn test_tie_keeps_provider_order() {
        let candidates = vec![
            candidate(7, "Cole", Some(1.0)),
            candidate(8, "Cole", Some(1.0)),
        ];
        assert_eq!(select_best_candidate("Cole", &candidates).unwrap().id, 7);
    }

    #[test]
    fn test_missing_distance_never_preferred() {
        let candidates = vec![
            candidate(1, "Cole", None),
            candidate(2, "Cole", Some(40.0)),
        ];
        assert_eq!(select_best_candidate("Cole", &candidates).unwrap().id, 2);
    }

    #[test]
    fn test_all_missing_distance_takes_first() {
        let candidates = vec![candidate(5, "Cole", None), candidate(6, "Cole", None)];
        let best = select_best_candidate("Cole", &candidates).unwrap();
        assert_eq!(best.id, 5);
        assert_eq!(best.display_name(), "Cole Hocker");
        assert_eq!(best.country, "USA");
    }
}
