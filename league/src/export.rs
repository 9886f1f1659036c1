//! Dataset export to CSV and paginated plain-text reports.

use crate::League;
use crate::standings::conference_standings;
use crate::Conference;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Lines per report page before a form feed is inserted.
pub const REPORT_PAGE_LINES: usize = 25;
/// Column at which report rows are wrapped.
pub const REPORT_WIDTH: usize = 90;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("export produced invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dataset {
    #[default]
    Teams,
    Players,
    Matches,
    Standings,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [
        Dataset::Teams,
        Dataset::Players,
        Dataset::Matches,
        Dataset::Standings,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Dataset::Teams => "teams",
            Dataset::Players => "players",
            Dataset::Matches => "matches",
            Dataset::Standings => "standings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dataset::Teams => "AEBL Teams",
            Dataset::Players => "AEBL Players",
            Dataset::Matches => "AEBL Matches",
            Dataset::Standings => "AEBL Standings",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Csv,
    Report,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Csv, Format::Report];

    pub fn extension(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Report => "txt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Format::Csv => "CSV",
            Format::Report => "Text report",
        }
    }
}

/// A dataset flattened to string cells, ready for either output format.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

pub fn table(league: &League, dataset: Dataset) -> Table {
    match dataset {
        Dataset::Teams => teams_table(league),
        Dataset::Players => players_table(league),
        Dataset::Matches => matches_table(league),
        Dataset::Standings => standings_table(league),
    }
}

fn teams_table(league: &League) -> Table {
    Table {
        headers: vec!["name", "city", "country", "conference", "wins", "losses", "winPercentage"],
        rows: league
            .teams
            .iter()
            .map(|t| {
                vec![
                    t.name.clone(),
                    t.city.clone(),
                    t.country.clone(),
                    format!("{:?}", t.conference),
                    t.wins.to_string(),
                    t.losses.to_string(),
                    t.win_pct_label(),
                ]
            })
            .collect(),
    }
}

fn players_table(league: &League) -> Table {
    Table {
        headers: vec![
            "name", "position", "number", "team", "height", "weight", "age", "ppg", "rpg", "apg",
        ],
        rows: league
            .players
            .iter()
            .map(|p| {
                vec![
                    p.name.clone(),
                    p.position.code().to_string(),
                    p.number.to_string(),
                    league.team_name(&p.team_id).to_string(),
                    p.height.clone(),
                    p.weight.clone(),
                    p.age.to_string(),
                    p.stats.ppg.to_string(),
                    p.stats.rpg.to_string(),
                    p.stats.apg.to_string(),
                ]
            })
            .collect(),
    }
}

fn matches_table(league: &League) -> Table {
    let score = |s: Option<u16>| s.map(|v| v.to_string()).unwrap_or_default();
    Table {
        headers: vec![
            "date", "time", "homeTeam", "awayTeam", "homeScore", "awayScore", "status", "venue",
        ],
        rows: league
            .matches
            .iter()
            .map(|m| {
                vec![
                    m.date.to_string(),
                    m.kickoff_label(),
                    league.team_name(&m.home_team_id).to_string(),
                    league.team_name(&m.away_team_id).to_string(),
                    score(m.home_score),
                    score(m.away_score),
                    m.status.as_str().to_string(),
                    m.venue.clone(),
                ]
            })
            .collect(),
    }
}

fn standings_table(league: &League) -> Table {
    let mut rows = Vec::new();
    for conference in Conference::ALL {
        for row in conference_standings(league, conference) {
            rows.push(vec![
                conference.label().to_string(),
                row.rank.to_string(),
                row.team.name.clone(),
                row.team.wins.to_string(),
                row.team.losses.to_string(),
                row.team.win_pct_label(),
            ]);
        }
    }
    Table {
        headers: vec!["conference", "rank", "team", "wins", "losses", "winPercentage"],
        rows,
    }
}

pub fn to_csv(table: &Table) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Title, then one numbered `key: value` line per row, wrapped and paginated.
pub fn to_report(title: &str, table: &Table) -> String {
    let mut lines = vec![title.to_string(), String::new()];
    for (idx, row) in table.rows.iter().enumerate() {
        let fields: Vec<String> = table
            .headers
            .iter()
            .zip(row)
            .map(|(h, v)| format!("{h}: {v}"))
            .collect();
        let text = format!("{}. {}", idx + 1, fields.join(", "));
        lines.extend(wrap(&text, REPORT_WIDTH));
    }

    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 && idx % REPORT_PAGE_LINES == 0 {
            out.push('\u{c}');
            out.push('\n');
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() { word.len() } else { current.len() + 1 + word.len() };
        if needed > width && !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current.push_str("   ");
        } else if !current.is_empty() && !current.ends_with(' ') {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.trim().is_empty() {
        out.push(current);
    }
    out
}

pub fn file_name(dataset: Dataset, format: Format) -> String {
    format!("aebl_{}.{}", dataset.slug(), format.extension())
}

/// Render `dataset` and write it into `dir`, creating the directory if needed.
pub fn write(
    league: &League,
    dataset: Dataset,
    format: Format,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let table = table(league, dataset);
    let body = match format {
        Format::Csv => to_csv(&table)?,
        Format::Report => to_report(dataset.title(), &table),
    };
    let path = dir.join(file_name(dataset, format));
    std::fs::write(&path, body)?;
    log::info!("exported {} to {}", dataset.slug(), path.display());
    Ok(path)
}

/// Every dataset in every format.
pub fn write_all(league: &League, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::new();
    for dataset in Dataset::ALL {
        for format in Format::ALL {
            written.push(write(league, dataset, format, dir)?);
        }
    }
    Ok(written)
}
