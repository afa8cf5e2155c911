use crate::error::{ProcessingError, Result};
use crate::models::TheatreRow;
use csv::{ReaderBuilder, StringRecord};
use encoding_rs::UTF_8;
use std::fs;
use std::path::Path;

/// A decoded dataset file with its header row already read
#[derive(Debug, Clone)]
pub struct Dataset {
    content: String,
    headers: StringRecord,
}

impl Dataset {
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Raw data records, header excluded; lengths may differ from the header
    pub fn records(&self) -> impl Iterator<Item = Result<StringRecord>> + '_ {
        csv_builder()
            .from_reader(self.content.as_bytes())
            .into_records()
            .map(|record| record.map_err(ProcessingError::from))
    }

    /// Data records keyed by header name
    pub fn rows(&self) -> impl Iterator<Item = Result<TheatreRow>> + '_ {
        self.records()
            .map(move |record| record.map(|r| TheatreRow::from_record(self.headers.iter(), r.iter())))
    }
}

/// Tolerates ragged rows; short rows simply lack their trailing columns
pub struct DatasetReader;

impl DatasetReader {
    pub fn new() -> Self {
        Self
    }

    /// Read and decode a dataset file, failing on missing, empty, non-UTF-8 or headerless input
    pub fn read(&self, path: &Path) -> Result<Dataset> {
        if !path.exists() {
            return Err(ProcessingError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path)?;
        if bytes.is_empty() {
            return Err(ProcessingError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        let (decoded, had_errors) = UTF_8.decode_with_bom_removal(&bytes);
        if had_errors {
            return Err(ProcessingError::Encoding {
                path: path.to_path_buf(),
            });
        }
        let content = decoded.into_owned();

        let headers = csv_builder()
            .from_reader(content.as_bytes())
            .headers()?
            .clone();
        if headers.is_empty() {
            return Err(ProcessingError::NoHeaders {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), columns = headers.len(), "opened dataset");

        Ok(Dataset { content, headers })
    }
}

impl Default for DatasetReader {
    fn default() -> Self {
        Self::new()
    }
}

fn csv_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}
