// =============================================================================
// CSV Parser — daily OHLCV exports into a normalised TimeSeries
// =============================================================================
//
// Expected layout (Yahoo-style export):
//
//   Date,Open,High,Low,Close,Adj Close,Volume
//   2024-01-02,187.15,188.44,183.89,185.64,184.94,82488700
//
// Fields are mapped by header name, never by position.  Lines are split on
// bare commas; quote characters carry no meaning.  The parser is lenient at
// row level:
//   - blank rows and rows whose field count differs from the header are skipped
//   - rows whose date cannot be parsed are skipped
//   - numeric fields that fail to parse become 0.0
//   - unknown columns are ignored, missing known columns read as 0.0
// A missing, blank or unusable first line yields an empty series, not an error.
// =============================================================================

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{debug, info, trace};

use super::date::parse_date;
use crate::types::{PricePoint, TimeSeries};

/// A header cell recognised by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Date,
    Open,
    High,
    Low,
    Close,
    Volume,
    AdjClose,
}

impl Column {
    fn from_header(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "date" => Some(Self::Date),
            "open" => Some(Self::Open),
            "high" => Some(Self::High),
            "low" => Some(Self::Low),
            "close" => Some(Self::Close),
            "volume" => Some(Self::Volume),
            "adj close" | "adj_close" | "adjclose" => Some(Self::AdjClose),
            _ => None,
        }
    }
}

/// Row accounting for a single parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Data rows seen after the header (blank rows included).
    pub rows_read: usize,
    /// Rows that became a [`PricePoint`].
    pub accepted: usize,
    pub skipped_blank: usize,
    /// Field count differed from the header.
    pub skipped_shape: usize,
    pub skipped_date: usize,
    /// Points dropped because a later row carried the same date.
    pub duplicates: usize,
}

impl IngestReport {
    pub fn skipped(&self) -> usize {
        self.skipped_blank + self.skipped_shape + self.skipped_date
    }
}

/// Parse CSV text into a [`TimeSeries`].
pub fn parse_csv(text: &str) -> TimeSeries {
    parse_csv_with_report(text).0
}

/// Parse CSV text, also returning how many rows were accepted or skipped.
pub fn parse_csv_with_report(text: &str) -> (TimeSeries, IngestReport) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut report = IngestReport::default();

    // The header is the first physical line; the reader would skip past a
    // leading blank one.
    let has_header_line = text.lines().next().is_some_and(|line| !line.trim().is_empty());
    if !has_header_line {
        debug!("CSV header line empty, returning empty series");
        return (TimeSeries::default(), report);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = reader.records();

    let header = match records.next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => {
            debug!(error = %e, "CSV header unreadable, returning empty series");
            return (TimeSeries::default(), report);
        }
        None => {
            debug!("CSV input empty");
            return (TimeSeries::default(), report);
        }
    };

    let columns: Vec<Option<Column>> = header.iter().map(Column::from_header).collect();
    if !columns.contains(&Some(Column::Date)) {
        debug!(header = ?header, "CSV header has no Date column, returning empty series");
        return (TimeSeries::default(), report);
    }

    let mut points = Vec::new();
    for result in records {
        report.rows_read += 1;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                trace!(error = %e, "unreadable CSV row skipped");
                report.skipped_shape += 1;
                continue;
            }
        };

        if record.iter().all(str::is_empty) {
            report.skipped_blank += 1;
            continue;
        }

        if record.len() != columns.len() {
            trace!(
                line = ?record.position().map(|p| p.line()),
                fields = record.len(),
                expected = columns.len(),
                "CSV row has wrong field count, skipped"
            );
            report.skipped_shape += 1;
            continue;
        }

        match build_point(&columns, &record) {
            Some(point) => points.push(point),
            None => {
                trace!(
                    line = ?record.position().map(|p| p.line()),
                    "CSV row has unparsable date, skipped"
                );
                report.skipped_date += 1;
            }
        }
    }

    let parsed = points.len();
    let series = TimeSeries::from_points(points);
    report.accepted = series.len();
    report.duplicates = parsed - series.len();

    info!(
        rows = report.rows_read,
        accepted = report.accepted,
        skipped = report.skipped(),
        duplicates = report.duplicates,
        "CSV ingested"
    );

    (series, report)
}

/// Build one point from a row whose field count already matches the header.
fn build_point(columns: &[Option<Column>], record: &StringRecord) -> Option<PricePoint> {
    let mut date = None;
    let mut open = 0.0;
    let mut high = 0.0;
    let mut low = 0.0;
    let mut close = 0.0;
    let mut volume = 0.0;
    let mut adj_close = 0.0;

    for (column, value) in columns.iter().zip(record.iter()) {
        match column {
            Some(Column::Date) => date = parse_date(value),
            Some(Column::Open) => open = coerce_number(value),
            Some(Column::High) => high = coerce_number(value),
            Some(Column::Low) => low = coerce_number(value),
            Some(Column::Close) => close = coerce_number(value),
            Some(Column::Volume) => volume = coerce_number(value),
            Some(Column::AdjClose) => adj_close = coerce_number(value),
            None => {}
        }
    }

    Some(PricePoint {
        date: date?,
        open,
        high,
        low,
        close,
        volume,
        adj_close,
    })
}

/// Parse a numeric cell; anything unparsable or non-finite becomes 0.0.
fn coerce_number(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
