use crate::error::Result;
use csv::{StringRecord, Terminator, WriterBuilder};
use std::path::Path;

/// Writes dataset tables with `\n` line endings and minimal quoting
pub struct CsvWriter {
    terminator: Terminator,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self {
            terminator: Terminator::Any(b'\n'),
        }
    }

    /// Write the header and records to `path`, replacing any existing file
    pub fn write_records(
        &self,
        headers: &StringRecord,
        records: &[StringRecord],
        path: &Path,
    ) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .terminator(self.terminator)
            .from_path(path)?;

        writer.write_record(headers)?;
        for record in records {
            writer.write_record(record)?;
        }
        writer.flush()?;

        tracing::debug!(path = %path.display(), rows = records.len(), "wrote CSV table");
        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
