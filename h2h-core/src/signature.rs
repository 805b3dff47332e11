use serde::Serialize;
use std::fmt;

use crate::types::Performance;

/// Race identity across two independently fetched result lists.
///
/// Two performances are taken to be the same real-world race exactly when
/// their signatures are equal. The provider does not guarantee consistent
/// formatting between athletes, so a formatting mismatch shows up as a
/// missed match, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RaceSignature {
    pub date: String,
    pub discipline: String,
    pub competition: String,
}

impl RaceSignature {
    pub fn new(
        date: impl Into<String>,
        discipline: impl Into<String>,
        competition: impl Into<String>,
    ) -> Self {
        RaceSignature {
            date: date.into(),
            discipline: discipline.into(),
            competition: competition.into(),
        }
    }
}

impl fmt::Display for RaceSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.date, self.discipline, self.competition)
    }
}

/// How a performance is turned into a [`RaceSignature`].
///
/// Every key in the pipeline is built through [`SignatureMode::signature`],
/// so a looser matching rule only has to be added here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureMode {
    /// Date, discipline and competition name exactly as the provider sent them.
    #[default]
    Exact,
    /// Like `Exact`, but the date is cut at the first `T` so timestamps and
    /// plain dates of the same day compare equal.
    DayPrecision,
}

impl SignatureMode {
    pub fn signature(self, performance: &Performance) -> RaceSignature {
        let date = match self {
            SignatureMode::Exact => performance.date.as_str(),
            SignatureMode::DayPrecision => day_of(&performance.date),
        };
        RaceSignature::new(
            date,
            performance.discipline.as_str(),
            performance.competition.name(),
        )
    }
}

fn day_of(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn perf(value: serde_json::Value) -> Performance {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_exact_signature_keeps_fields() {
        let p = perf(json!({
            "date": "2024-06-01",
            "discipline": "1500m",
            "competition": "Diamond League"
        }));
        assert_eq!(
            SignatureMode::Exact.signature(&p),
            RaceSignature::new("2024-06-01", "1500m", "Diamond League")
        );
    }

    #[test]
    fn test_nested_and_plain_competition_match() {
        let nested = perf(json!({
            "date": "2024-08-10",
            "discipline": "1500m",
            "competition": {"name": "Olympic Games"}
        }));
        let plain = perf(json!({
            "date": "2024-08-10",
            "discipline": "1500m",
            "competition": "Olympic Games"
        }));
        assert_eq!(
            SignatureMode::Exact.signature(&nested),
            SignatureMode::Exact.signature(&plain)
        );
    }

    #[test]
    fn test_day_precision_drops_time() {
        let stamped = perf(json!({"date": "2024-06-01T00:00:00.000Z", "discipline": "Mile"}));
        let plain = perf(json!({"date": "2024-06-01", "discipline": "Mile"}));
        assert_ne!(
            SignatureMode::Exact.signature(&stamped),
            SignatureMode::Exact.signature(&plain)
        );
        assert_eq!(
            SignatureMode::DayPrecision.signature(&stamped),
            SignatureMode::DayPrecision.signature(&plain)
        );
    }

    #[test]
    fn test_display_reads_like_a_tuple() {
        let sig = RaceSignature::new("2024-06-01", "1500m", "Diamond League");
        assert_eq!(sig.to_string(), r#"("2024-06-01", "1500m", "Diamond League")"#);
    }
}
