//! Minimal reader for algorithm log files.
//!
//! Splits a log into its top-level sections and tabulates the
//! activities log. The visualizer only needs this coarse structure to
//! show that a file was loaded; richer parsing plugs in through
//! [`provis_loader::AlgorithmParser`].

const SANDBOX_HEADER: &str = "Sandbox logs:";
const ACTIVITIES_HEADER: &str = "Activities log:";
const TRADES_HEADER: &str = "Trade History:";

/// Why a log file could not be read as an algorithm.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmParseError {
    /// A required section header is absent.
    #[error("Invalid log file: missing \"{0}\" section")]
    MissingSection(&'static str),

    /// The activities section has no column header row.
    #[error("Invalid log file: activities log is empty")]
    EmptyActivities,

    /// An activities row does not match the column count.
    #[error("Invalid log file: activities row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        /// 1-based row number within the activities table.
        row: usize,
        /// Number of columns in the header.
        expected: usize,
        /// Number of columns in the row.
        found: usize,
    },
}

/// A loaded algorithm run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Algorithm {
    /// Raw sandbox log section.
    pub sandbox_log: String,
    /// Column names of the activities table.
    pub activity_columns: Vec<String>,
    /// Activities rows, one cell per column.
    pub activities: Vec<Vec<String>>,
    /// Raw trade history section, empty if absent.
    pub trade_history: String,
}

impl Algorithm {
    /// Distinct values of the `product` column, in first-seen order.
    #[must_use]
    pub fn products(&self) -> Vec<&str> {
        let Some(column) = self.activity_columns.iter().position(|c| c == "product") else {
            return Vec::new();
        };
        let mut products: Vec<&str> = Vec::new();
        for row in &self.activities {
            if let Some(product) = row.get(column)
                && !products.contains(&product.as_str())
            {
                products.push(product);
            }
        }
        products
    }
}

/// Top-level part of a log file.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Sandbox,
    Activities,
    Trades,
}

/// Parse the full contents of an algorithm log file.
///
/// # Errors
///
/// Returns [`AlgorithmParseError`] if the activities section is missing,
/// empty or malformed.
pub fn parse_algorithm_logs(text: &str) -> Result<Algorithm, AlgorithmParseError> {
    let mut section = Section::Preamble;
    let mut seen_activities = false;
    let mut sandbox = Vec::new();
    let mut activity_lines = Vec::new();
    let mut trades = Vec::new();

    for line in text.lines() {
        match line.trim_end() {
            SANDBOX_HEADER => section = Section::Sandbox,
            ACTIVITIES_HEADER => {
                section = Section::Activities;
                seen_activities = true;
            }
            TRADES_HEADER => section = Section::Trades,
            _ => match section {
                Section::Preamble => {}
                Section::Sandbox => sandbox.push(line),
                Section::Activities => activity_lines.push(line.trim()),
                Section::Trades => trades.push(line),
            },
        }
    }

    if !seen_activities {
        return Err(AlgorithmParseError::MissingSection(ACTIVITIES_HEADER));
    }

    let mut rows = activity_lines.into_iter().filter(|line| !line.is_empty());
    let activity_columns: Vec<String> = rows
        .next()
        .ok_or(AlgorithmParseError::EmptyActivities)?
        .split(';')
        .map(str::to_owned)
        .collect();

    let mut activities = Vec::new();
    for (index, line) in rows.enumerate() {
        let cells: Vec<String> = line.split(';').map(str::to_owned).collect();
        if cells.len() != activity_columns.len() {
            return Err(AlgorithmParseError::RaggedRow {
                row: index + 1,
                expected: activity_columns.len(),
                found: cells.len(),
            });
        }
        activities.push(cells);
    }

    Ok(Algorithm {
        sandbox_log: sandbox.join("\n").trim().to_owned(),
        activity_columns,
        activities,
        trade_history: trades.join("\n").trim().to_owned(),
    })
}
