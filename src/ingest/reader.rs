// =============================================================================
// Byte sources — the only await point in the pipeline
// =============================================================================

use std::path::Path;

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info};

use super::parser::parse_csv;
use crate::error::{IngestError, Result};
use crate::types::TimeSeries;

/// Read an entire CSV upload from `reader` and parse it.
///
/// The stream is drained completely before parsing starts, so a read failure
/// never leaves a half-built series behind.  Invalid UTF-8 is replaced rather
/// than rejected.
pub async fn read_series<R>(mut reader: R) -> Result<TimeSeries>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    debug!(bytes = bytes.len(), "price upload read");

    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_csv(&text))
}

/// Open `path` and parse it as a price CSV.
pub async fn load_series(path: impl AsRef<Path>) -> Result<TimeSeries> {
    let path = path.as_ref();

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let series = read_series(file).await?;
    info!(path = %path.display(), points = series.len(), "price file loaded");
    Ok(series)
}
