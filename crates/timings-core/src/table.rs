// File: crates/timings-core/src/table.rs
// Summary: ResultsTable loading from the benchmark CSV (headerless Automate/KMP or headered with egrep).

use std::fmt;
use std::io;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::error::TableError;

/// File name the benchmark run writes, resolved against the working directory.
pub const DEFAULT_PATH: &str = "results.csv";

/// Positional column order of the headerless file.
pub const HEADERLESS_COLUMNS: [&str; 5] =
    ["word", "AutomateTime", "isThereAWordAutomate", "KMPTime", "isThereAWordKMP"];

/// Columns a headered file must name (extra columns are ignored).
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "word",
    "AutomateTime",
    "isThereAWordAutomate",
    "KMPTime",
    "isThereAWordKMP",
    "egrepTime",
];

/// Input shape of the results file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Five positional columns, no header row, Automate and KMP timings only.
    AutomateKmp,
    /// Header row naming the columns, with an extra `egrepTime` column.
    WithEgrep,
}

/// Requested variant; `Auto` decides from the first record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VariantChoice {
    #[default]
    Auto,
    AutomateKmp,
    WithEgrep,
}

impl VariantChoice {
    /// A first record naming an `egrepTime` column marks a headered egrep file.
    pub fn resolve(self, first: &csv::StringRecord) -> Variant {
        match self {
            VariantChoice::AutomateKmp => Variant::AutomateKmp,
            VariantChoice::WithEgrep => Variant::WithEgrep,
            VariantChoice::Auto => {
                if first.iter().any(|f| f.trim() == "egrepTime") {
                    Variant::WithEgrep
                } else {
                    Variant::AutomateKmp
                }
            }
        }
    }
}

/// One benchmarked search method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Automate,
    Kmp,
    Egrep,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Automate, Method::Kmp, Method::Egrep];

    pub fn name(self) -> &'static str {
        match self {
            Method::Automate => "Automate",
            Method::Kmp => "KMP",
            Method::Egrep => "egrep",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimingRow {
    pub word: String,
    pub automate_time: f64,
    pub automate_found: bool,
    pub kmp_time: f64,
    pub kmp_found: bool,
    /// Present exactly when the table was read as [`Variant::WithEgrep`].
    pub egrep_time: Option<f64>,
}

impl TimingRow {
    pub fn time(&self, method: Method) -> Option<f64> {
        match method {
            Method::Automate => Some(self.automate_time),
            Method::Kmp => Some(self.kmp_time),
            Method::Egrep => self.egrep_time,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PositionalRecord(
    String,
    #[serde(deserialize_with = "de_time")] f64,
    #[serde(deserialize_with = "de_flag")] bool,
    #[serde(deserialize_with = "de_time")] f64,
    #[serde(deserialize_with = "de_flag")] bool,
);

#[derive(Debug, Deserialize)]
struct NamedRecord {
    word: String,
    #[serde(rename = "AutomateTime", deserialize_with = "de_time")]
    automate_time: f64,
    #[serde(rename = "isThereAWordAutomate", deserialize_with = "de_flag")]
    automate_found: bool,
    #[serde(rename = "KMPTime", deserialize_with = "de_time")]
    kmp_time: f64,
    #[serde(rename = "isThereAWordKMP", deserialize_with = "de_flag")]
    kmp_found: bool,
    #[serde(rename = "egrepTime", deserialize_with = "de_time")]
    egrep_time: f64,
}

/// Accepts `true`/`false` in any case (as the benchmark writes them) and `1`/`0`.
pub fn parse_flag(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw == "1" || raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw == "0" || raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Timings may carry padding around the number; the word column is kept verbatim.
fn de_time<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    let raw = String::deserialize(de)?;
    raw.trim()
        .parse()
        .map_err(|e| serde::de::Error::custom(format!("invalid time '{raw}': {e}")))
}

fn de_flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(de)?;
    parse_flag(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("expected true/false/1/0, got '{raw}'")))
}

/// Rows of the results file, in file order.
#[derive(Clone, Debug)]
pub struct ResultsTable {
    variant: Variant,
    rows: Vec<TimingRow>,
}

impl ResultsTable {
    pub fn new(variant: Variant, rows: Vec<TimingRow>) -> Self {
        Self { variant, rows }
    }

    /// Load the whole file at `path`. Any unreadable or malformed record fails the load.
    pub fn load(path: impl AsRef<Path>, choice: VariantChoice) -> Result<Self, TableError> {
        let path = path.as_ref();
        let reader = reader_builder()
            .from_path(path)
            .map_err(|source| TableError::Open { path: path.to_path_buf(), source })?;
        let table = Self::from_csv(reader, choice)?;
        debug!(path = %path.display(), rows = table.len(), variant = ?table.variant, "loaded results table");
        Ok(table)
    }

    pub fn from_reader<R: io::Read>(rdr: R, choice: VariantChoice) -> Result<Self, TableError> {
        Self::from_csv(reader_builder().from_reader(rdr), choice)
    }

    fn from_csv<R: io::Read>(mut rdr: csv::Reader<R>, choice: VariantChoice) -> Result<Self, TableError> {
        let mut records = rdr.records();
        let first = match records.next() {
            Some(rec) => rec.map_err(record_error)?,
            None => return Err(TableError::Empty),
        };
        let variant = choice.resolve(&first);

        let mut rows = Vec::new();
        match variant {
            Variant::AutomateKmp => {
                if is_headerless_header(&first) {
                    debug!("skipping header row in headerless results file");
                } else {
                    rows.push(parse_positional(&first)?);
                }
                for rec in records {
                    rows.push(parse_positional(&rec.map_err(record_error)?)?);
                }
            }
            Variant::WithEgrep => {
                let headers: csv::StringRecord = first.iter().map(str::trim).collect();
                if let Some(&missing) = REQUIRED_COLUMNS.iter().find(|c| !headers.iter().any(|h| h == **c)) {
                    return Err(TableError::MissingColumn(missing));
                }
                for rec in records {
                    let rec = rec.map_err(record_error)?;
                    if rec.len() != headers.len() {
                        return Err(TableError::FieldCount {
                            line: line_of(&rec),
                            expected: headers.len(),
                            found: rec.len(),
                        });
                    }
                    let r: NamedRecord = rec
                        .deserialize(Some(&headers))
                        .map_err(|source| TableError::Record { line: line_of(&rec), source })?;
                    rows.push(TimingRow {
                        word: r.word,
                        automate_time: r.automate_time,
                        automate_found: r.automate_found,
                        kmp_time: r.kmp_time,
                        kmp_found: r.kmp_found,
                        egrep_time: Some(r.egrep_time),
                    });
                }
            }
        }
        Ok(Self { variant, rows })
    }

    pub fn variant(&self) -> Variant { self.variant }
    pub fn rows(&self) -> &[TimingRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn words(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.word.as_str()).collect()
    }

    /// Timing series for `method` in row order; `None` when the table has no such column.
    pub fn column(&self, method: Method) -> Option<Vec<f64>> {
        if !self.methods().contains(&method) {
            return None;
        }
        self.rows.iter().map(|r| r.time(method)).collect()
    }

    /// Methods this table carries timings for, in plotting order.
    pub fn methods(&self) -> &'static [Method] {
        match self.variant {
            Variant::AutomateKmp => &Method::ALL[..2],
            Variant::WithEgrep => &Method::ALL,
        }
    }

    pub fn mean(&self, method: Method) -> Option<f64> {
        let col = self.column(method)?;
        if col.is_empty() {
            return None;
        }
        Some(col.iter().sum::<f64>() / col.len() as f64)
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            rows: self.len(),
            means: self
                .methods()
                .iter()
                .filter_map(|&m| self.mean(m).map(|v| (m, v)))
                .collect(),
            flag_mismatches: self
                .rows
                .iter()
                .filter(|r| r.automate_found != r.kmp_found)
                .map(|r| r.word.clone())
                .collect(),
        }
    }
}

/// Aggregate view of a table, logged before plotting.
#[derive(Clone, Debug, PartialEq)]
pub struct TableSummary {
    pub rows: usize,
    pub means: Vec<(Method, f64)>,
    /// Words where Automate and KMP disagree on whether the word occurs.
    pub flag_mismatches: Vec<String>,
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    // Field counts are checked per record so short rows report their line.
    b.has_headers(false).flexible(true);
    b
}

fn is_headerless_header(rec: &csv::StringRecord) -> bool {
    rec.len() == HEADERLESS_COLUMNS.len() && rec.iter().zip(HEADERLESS_COLUMNS).all(|(a, b)| a.trim() == b)
}

fn parse_positional(rec: &csv::StringRecord) -> Result<TimingRow, TableError> {
    if rec.len() != HEADERLESS_COLUMNS.len() {
        return Err(TableError::FieldCount {
            line: line_of(rec),
            expected: HEADERLESS_COLUMNS.len(),
            found: rec.len(),
        });
    }
    let PositionalRecord(word, automate_time, automate_found, kmp_time, kmp_found) = rec
        .deserialize(None)
        .map_err(|source| TableError::Record { line: line_of(rec), source })?;
    Ok(TimingRow { word, automate_time, automate_found, kmp_time, kmp_found, egrep_time: None })
}

fn line_of(rec: &csv::StringRecord) -> u64 {
    rec.position().map_or(0, csv::Position::line)
}

fn record_error(source: csv::Error) -> TableError {
    let line = source.position().map_or(0, csv::Position::line);
    TableError::Record { line, source }
}
