//! Parquet export of synthetic client tables.
//!
//! Writes a [`ClientTable`] as a single Snappy-compressed row group set with
//! the table's own Arrow schema. Empty tables still produce a valid file that
//! declares every column.

use std::fs::File;
use std::path::Path;

use arrow::error::ArrowError;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::errors::ParquetError;
use parquet::file::properties::WriterProperties;
use parquet::file::reader::{FileReader, SerializedFileReader};
use synth::ClientTable;
use tracing::info;

/// Errors that can occur during export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),
}

/// Write `table` to `path`, creating parent directories as needed.
///
/// Returns the number of rows written.
pub fn write_parquet<P: AsRef<Path>>(table: &ClientTable, path: P) -> Result<usize, ExportError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let batch = table.to_record_batch()?;
    let file = File::create(path)?;

    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();

    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    if batch.num_rows() > 0 {
        writer.write(&batch)?;
    }
    writer.close()?;

    info!(rows = batch.num_rows(), path = %path.display(), "wrote client table");
    Ok(batch.num_rows())
}

/// Row count recorded in a Parquet file's footer.
pub fn read_row_count<P: AsRef<Path>>(path: P) -> Result<usize, ExportError> {
    let reader = SerializedFileReader::new(File::open(path)?)?;
    footer_row_count(reader.metadata().file_metadata().num_rows())
}

fn footer_row_count(rows: i64) -> Result<usize, ExportError> {
    usize::try_from(rows).map_err(|_| {
        ExportError::Parquet(ParquetError::General(format!(
            "footer declares a negative row count: {rows}"
        )))
    })
}
