// =============================================================================
// Ingestion errors
// =============================================================================
//
// Only stream-level failures are errors.  Row-level problems (wrong column
// count, unparsable numbers or dates) are absorbed by the parser and never
// reach the caller.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The byte source could not be read; no partial series is produced.
    #[error("failed to read price data: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to open price file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_message_includes_cause() {
        let err = IngestError::from(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "stream closed",
        ));
        assert_eq!(err.to_string(), "failed to read price data: stream closed");
    }

    #[test]
    fn open_error_mentions_path() {
        let err = IngestError::Open {
            path: PathBuf::from("/tmp/prices.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/tmp/prices.csv"));
    }
}
