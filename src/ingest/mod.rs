// =============================================================================
// CSV Ingestion
// =============================================================================
//
// Raw upload bytes in, immutable date-ordered TimeSeries out.  Stream-level
// I/O failure is the only error; everything row-level degrades gracefully.

pub mod date;
pub mod parser;
pub mod reader;

pub use date::parse_date;
pub use parser::{parse_csv, parse_csv_with_report, IngestReport};
pub use reader::{load_series, read_series};
