/// The comparison run: resolve both athletes, fetch, index, match.
///
/// Strictly sequential. Any provider or matching error aborts the whole run.
use h2h_core::{
    AthleteIdentity, HeadToHeadRecord, IndexOptions, RaceIndex, ResultFilter, find_matchups,
    select_best_candidate,
};
use tracing::info;

use crate::error::CliError;
use crate::output::status;
use crate::provider::ResultsProvider;

pub struct CompareSettings {
    pub athlete_a: String,
    pub athlete_b: String,
    pub year: Option<u32>,
    pub filter: ResultFilter,
    pub index: IndexOptions,
    /// Applied after matching.
    pub discipline: Option<String>,
    /// Send progress lines to stderr (stdout carries JSON).
    pub quiet_stdout: bool,
}

pub struct Comparison {
    pub index_a: RaceIndex,
    pub index_b: RaceIndex,
    /// Shared races before the discipline filter.
    pub shared_races: usize,
    pub record: HeadToHeadRecord,
}

/// Search for `query` and keep the closest match. Prints a confirmation line.
pub async fn resolve_athlete(
    provider: &ResultsProvider,
    query: &str,
    quiet_stdout: bool,
) -> Result<AthleteIdentity, CliError> {
    let candidates = provider.search_athletes(query).await?;
    info!(query, candidates = candidates.len(), "athlete search");
    let athlete = select_best_candidate(query, &candidates)?;
    status(
        quiet_stdout,
        format!(
            "  Found: {} (ID: {}, {})",
            athlete.display_name(),
            athlete.id,
            athlete.country
        ),
    );
    Ok(athlete)
}

async fn fetch_index(
    provider: &ResultsProvider,
    athlete: &AthleteIdentity,
    settings: &CompareSettings,
) -> Result<RaceIndex, CliError> {
    let name = athlete.display_name();
    status(settings.quiet_stdout, format!("Fetching all results for {name}..."));
    let results = provider.fetch_results(athlete.id, settings.year).await?;
    status(settings.quiet_stdout, format!("  Got {} results", results.len()));

    let kept = results.iter().filter(|p| settings.filter.retains(p));
    let index = RaceIndex::build(kept, &name, &settings.index)?;
    info!(athlete = %name, results = results.len(), races = index.len(), "indexed results");
    Ok(index)
}

pub async fn compare(
    provider: &ResultsProvider,
    settings: &CompareSettings,
) -> Result<Comparison, CliError> {
    status(settings.quiet_stdout, "Searching for athletes...\n");
    let athlete_a = resolve_athlete(provider, &settings.athlete_a, settings.quiet_stdout).await?;
    let athlete_b = resolve_athlete(provider, &settings.athlete_b, settings.quiet_stdout).await?;

    status(settings.quiet_stdout, "");
    let index_a = fetch_index(provider, &athlete_a, settings).await?;
    let index_b = fetch_index(provider, &athlete_b, settings).await?;

    let matchups = find_matchups(&index_a, &index_b);
    let shared_races = matchups.len();
    let mut record = HeadToHeadRecord::from_matchups(index_a.athlete(), index_b.athlete(), matchups);
    if let Some(discipline) = settings.discipline.as_deref() {
        record = record.filter_discipline(discipline);
    }

    Ok(Comparison {
        index_a,
        index_b,
        shared_races,
        record,
    })
}
