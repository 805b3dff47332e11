/// Place assigned when an athlete's finishing place is empty or not an integer.
/// Ranks behind any real placing, so an unplaced athlete never beats a placed one.
pub const SENTINEL_PLACE: i64 = 999;

/// Search distance assumed for a candidate the provider returned without a
/// `levenshteinDistance` score. Large enough that a scored candidate always wins.
pub const MISSING_DISTANCE: f64 = 999.0;

/// Winner label used when both athletes have the same effective place.
pub const TIE_LABEL: &str = "Tie";

/// How many race signatures per athlete the no-match diagnostic prints.
pub const SAMPLE_KEY_LIMIT: usize = 5;

/// Round codes that mark heats, semi-finals, preliminaries and qualifying rounds.
/// `F`, `F1`, `DF` and an empty code are finals.
pub const NON_FINAL_PREFIXES: [&str; 4] = ["H", "SF", "PR", "Q"];

/// Case-insensitive discipline fragments that identify relay events.
pub const RELAY_MARKERS: [&str; 3] = ["relay", "medley", "4x"];
