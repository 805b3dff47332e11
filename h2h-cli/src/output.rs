/// Output formatting: text report, no-match diagnostics, and JSON.
use h2h_core::constants::SAMPLE_KEY_LIMIT;
use h2h_core::{HeadToHeadRecord, Matchup, RaceIndex};
use serde_json::{Map, Value, json};
use std::fmt::Display;
use std::io::{self, Write};

use crate::bail;

const BANNER_WIDTH: usize = 80;

/// Progress and confirmation lines. They go to stderr when stdout carries JSON.
pub fn status(to_stderr: bool, msg: impl Display) {
    if to_stderr {
        eprintln!("{msg}");
    } else {
        println!("{msg}");
    }
}

/// Write the head-to-head report. An empty record prints a notice only.
pub fn write_report(out: &mut impl Write, record: &HeadToHeadRecord) -> io::Result<()> {
    if record.is_empty() {
        writeln!(out, "\nNo shared races found in available results.")?;
        return Ok(());
    }

    let (name_a, name_b) = (&record.athlete_a, &record.athlete_b);
    let rule = "=".repeat(BANNER_WIDTH);

    writeln!(out, "\n{rule}")?;
    writeln!(out, "  HEAD-TO-HEAD: {name_a} vs {name_b}")?;
    writeln!(out, "  Record: {name_a} {} - {} {name_b}", record.wins_a, record.wins_b)?;
    if record.ties > 0 {
        writeln!(out, "  Ties: {}", record.ties)?;
    }
    writeln!(out, "  Total shared races: {}", record.total)?;
    writeln!(out, "{rule}\n")?;

    for (i, m) in record.matchups.iter().enumerate() {
        write_matchup(out, i + 1, m)?;
    }
    Ok(())
}

fn write_matchup(out: &mut impl Write, number: usize, m: &Matchup) -> io::Result<()> {
    writeln!(out, "  Race {number}: {}  |  {}  |  {}", m.date, m.discipline, m.competition)?;
    if !m.venue.is_empty() {
        writeln!(out, "          Venue: {}", m.venue)?;
    }
    for side in [&m.athlete_a, &m.athlete_b] {
        writeln!(out, "          {}: {}  (place: {})", side.name, side.mark, side.place)?;
    }
    writeln!(out, "          Winner: {}", m.winner_name())?;
    writeln!(out)
}

/// Dump the first few race signatures of each athlete, to show why nothing matched.
pub fn write_sample_keys(out: &mut impl Write, indexes: [&RaceIndex; 2]) -> io::Result<()> {
    writeln!(out, "\n--- DEBUG: Sample keys from each athlete ---")?;
    for index in indexes {
        writeln!(out, "\n{} sample keys (first {SAMPLE_KEY_LIMIT}):", index.athlete())?;
        for signature in index.sample_signatures(SAMPLE_KEY_LIMIT) {
            writeln!(out, "  {signature}")?;
        }
    }
    Ok(())
}

pub fn print_report(record: &HeadToHeadRecord) {
    write_report(&mut io::stdout().lock(), record)
        .unwrap_or_else(|e| bail(format!("Failed to write report: {e}")));
}

pub fn print_sample_keys(index_a: &RaceIndex, index_b: &RaceIndex) {
    write_sample_keys(&mut io::stdout().lock(), [index_a, index_b])
        .unwrap_or_else(|e| bail(format!("Failed to write report: {e}")));
}

fn matchup_json(m: &Matchup) -> Value {
    let mut obj = Map::new();
    obj.insert("date".into(), json!(m.date));
    obj.insert("discipline".into(), json!(m.discipline));
    obj.insert("competition".into(), json!(m.competition));
    obj.insert("venue".into(), json!(m.venue));
    for side in [&m.athlete_a, &m.athlete_b] {
        obj.insert(format!("{}_mark", side.name), json!(side.mark));
        obj.insert(format!("{}_place", side.name), json!(side.place));
    }
    obj.insert("winner".into(), json!(m.winner_name()));
    Value::Object(obj)
}

/// The record as JSON, with each athlete's mark and place under name-qualified keys.
pub fn record_json(record: &HeadToHeadRecord) -> Value {
    json!({
        "athlete_a": record.athlete_a,
        "athlete_b": record.athlete_b,
        "wins_a": record.wins_a,
        "wins_b": record.wins_b,
        "ties": record.ties,
        "total": record.total,
        "disciplines": record.disciplines,
        "matchups": record.matchups.iter().map(matchup_json).collect::<Vec<_>>(),
    })
}

pub fn print_json(record: &HeadToHeadRecord) {
    let text = serde_json::to_string_pretty(&record_json(record))
        .unwrap_or_else(|e| bail(format!("Failed to serialize record: {e}")));
    println!("{text}");
}
