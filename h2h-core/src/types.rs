use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Read a JSON scalar as text. Strings pass through, numbers and booleans
/// take their JSON form, `null` becomes the empty string.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// One entry of the provider's athlete search response.
#[derive(Debug, Clone, Deserialize)]
pub struct AthleteCandidate {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub firstname: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lastname: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: String,
    /// Edit distance between the query and this athlete's name, if the provider scored it.
    #[serde(rename = "levenshteinDistance", default)]
    pub levenshtein_distance: Option<f64>,
}

/// A resolved athlete. Built once from the best search candidate and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteIdentity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
}

impl AthleteIdentity {
    /// "First Last", the name used to label this athlete in matchups and reports.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<AthleteCandidate> for AthleteIdentity {
    fn from(c: AthleteCandidate) -> Self {
        AthleteIdentity {
            id: c.id,
            first_name: c.firstname,
            last_name: c.lastname,
            country: c.country,
        }
    }
}

/// The `competition` field of a performance. The provider sends either a plain
/// name or an object carrying a `name`; both collapse to the same text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum Competition {
    Name(String),
    Nested {
        #[serde(default, deserialize_with = "lenient_string")]
        name: String,
    },
    #[default]
    Missing,
    Other(Value),
}

impl Competition {
    pub fn name(&self) -> String {
        match self {
            Competition::Name(name) | Competition::Nested { name } => name.clone(),
            Competition::Missing => String::new(),
            Competition::Other(value) => value_text(value.clone()),
        }
    }
}

/// Where a race was held: a label, or the structured location the results endpoint returns.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Venue {
    Label(String),
    Location {
        #[serde(default)]
        stadium: Option<String>,
        #[serde(default)]
        city: Option<String>,
        #[serde(default)]
        country: Option<String>,
    },
    Other(Value),
}

impl Venue {
    /// Render as "stadium, city (country)", leaving out the parts that are missing.
    pub fn label(&self) -> String {
        match self {
            Venue::Label(label) => label.clone(),
            Venue::Location {
                stadium,
                city,
                country,
            } => {
                let place = [stadium, city]
                    .into_iter()
                    .flatten()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ");
                match country.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
                    Some(c) if place.is_empty() => c.to_string(),
                    Some(c) => format!("{place} ({c})"),
                    None => place,
                }
            }
            Venue::Other(value) => value_text(value.clone()),
        }
    }
}

/// One competition result for one athlete, as the provider returned it.
///
/// Scalar fields are kept as text: the provider is not consistent about
/// sending `place` and `wind` as strings or numbers. Missing fields are empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Performance {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub discipline: String,
    #[serde(default)]
    pub competition: Competition,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mark: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub place: String,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub location: Option<Venue>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub wind: String,
    /// Round code such as `F`, `H2` or `SF1`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub race: String,
}

impl Performance {
    /// `venue` if present, otherwise `location`, otherwise empty.
    pub fn venue_label(&self) -> String {
        self.venue
            .as_ref()
            .or(self.location.as_ref())
            .map(Venue::label)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn perf(value: Value) -> Performance {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let p = perf(json!({}));
        assert_eq!(p.date, "");
        assert_eq!(p.discipline, "");
        assert_eq!(p.competition.name(), "");
        assert_eq!(p.place, "");
        assert_eq!(p.venue_label(), "");
    }

    #[test]
    fn test_numeric_place_and_wind_become_text() {
        let p = perf(json!({"place": 3, "wind": -0.4, "mark": "3:31.05"}));
        assert_eq!(p.place, "3");
        assert_eq!(p.wind, "-0.4");
        assert_eq!(p.mark, "3:31.05");
    }

    #[test]
    fn test_null_fields_are_empty() {
        let p = perf(json!({"place": null, "wind": null, "competition": null}));
        assert_eq!(p.place, "");
        assert_eq!(p.wind, "");
        assert_eq!(p.competition.name(), "");
    }

    #[test]
    fn test_competition_shapes() {
        let plain = perf(json!({"competition": "Olympic Games"}));
        let nested = perf(json!({"competition": {"name": "Olympic Games", "id": 7}}));
        let nameless = perf(json!({"competition": {"id": 7}}));
        let numeric = perf(json!({"competition": 2024}));
        assert_eq!(plain.competition.name(), "Olympic Games");
        assert_eq!(nested.competition.name(), "Olympic Games");
        assert_eq!(nameless.competition.name(), "");
        assert_eq!(numeric.competition.name(), "2024");
    }

    #[test]
    fn test_venue_prefers_venue_over_location() {
        let p = perf(json!({"venue": "Hayward Field", "location": "Eugene"}));
        assert_eq!(p.venue_label(), "Hayward Field");

        let p = perf(json!({"location": "Eugene"}));
        assert_eq!(p.venue_label(), "Eugene");
    }

    #[test]
    fn test_structured_location() {
        let p = perf(json!({"location": {
            "stadium": "Stade de France",
            "city": "Paris",
            "country": "FRA",
            "indoor": false
        }}));
        assert_eq!(p.venue_label(), "Stade de France, Paris (FRA)");

        let p = perf(json!({"location": {"stadium": null, "city": "Eugene", "country": "USA"}}));
        assert_eq!(p.venue_label(), "Eugene (USA)");

        let p = perf(json!({"location": {"country": "USA"}}));
        assert_eq!(p.venue_label(), "USA");
    }

    #[test]
    fn test_candidate_without_distance() {
        let c: AthleteCandidate = serde_json::from_value(json!({
            "id": 14_636_420,
            "firstname": "Cole",
            "lastname": "Hocker",
            "country": "USA"
        }))
        .unwrap();
        assert_eq!(c.levenshtein_distance, None);
        assert_eq!(AthleteIdentity::from(c).display_name(), "Cole Hocker");
    }
}
