use crate::error::{ProcessingError, Result};
use crate::models::MetricLength;
use crate::readers::DatasetReader;
use crate::utils::constants::{COL_HEIGHT, COL_WIDTH, FIRST_DATA_ROW};
use crate::utils::filename::is_csv_file;
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvWriter;
use csv::StringRecord;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Columns rewritten from "<m> m" to "<ft> ft <in> in"
const CONVERTED_COLUMNS: [&str; 2] = [COL_HEIGHT, COL_WIDTH];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub created_dirs: Vec<PathBuf>,
    pub converted_files: Vec<PathBuf>,
}

/// Mirrors a tree of metric CSV files into an imperial copy
pub struct UnitConverter {
    source_dir: PathBuf,
    destination_dir: PathBuf,
    reader: DatasetReader,
    writer: CsvWriter,
}

impl UnitConverter {
    pub fn new(source_dir: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            destination_dir: destination_dir.into(),
            reader: DatasetReader::new(),
            writer: CsvWriter::new(),
        }
    }

    /// Walk the source tree in file-name order, creating every directory and
    /// converting every CSV file. The first failure aborts the run.
    pub fn convert_tree(&self, progress: &ProgressReporter) -> Result<ConversionSummary> {
        if !self.source_dir.is_dir() {
            return Err(ProcessingError::FileNotFound {
                path: self.source_dir.clone(),
            });
        }

        let mut summary = ConversionSummary::default();

        if !self.destination_dir.exists() {
            fs::create_dir_all(&self.destination_dir)?;
            progress.println("Created imperial directory.");
            summary.created_dirs.push(self.destination_dir.clone());
        }

        for entry in WalkDir::new(&self.source_dir).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(&self.source_dir)
                .map_err(|_| ProcessingError::OutsideRoot(entry.path().to_path_buf()))?;
            let target = self.destination_dir.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
                tracing::debug!(dir = %target.display(), "mirrored directory");
                progress.println(&format!(
                    "Created subdirectory {}",
                    entry.file_name().to_string_lossy()
                ));
                summary.created_dirs.push(target);
            } else if is_csv_file(entry.path()) {
                progress.set_message(&format!("Converting {}", entry.path().display()));
                self.convert_file(entry.path(), &target)?;
                progress.println(&format!("Converted {}", entry.path().display()));
                summary.converted_files.push(target);
            }
        }

        Ok(summary)
    }

    /// Copy `source` to `destination`, then rewrite Height and Width in place
    pub fn convert_file(&self, source: &Path, destination: &Path) -> Result<()> {
        fs::copy(source, destination)?;

        let dataset = self.reader.read(destination)?;
        let headers = dataset.headers().clone();

        let columns = CONVERTED_COLUMNS
            .iter()
            .map(|column| column_index(&headers, column, destination))
            .collect::<Result<Vec<_>>>()?;

        let records = dataset
            .records()
            .enumerate()
            .map(|(index, record)| {
                let record = record?;
                if record.len() > headers.len() {
                    return Err(ProcessingError::ExtraFields {
                        path: destination.to_path_buf(),
                        row: index + FIRST_DATA_ROW,
                        expected: headers.len(),
                        found: record.len(),
                    });
                }
                convert_record(&record, headers.len(), &columns)
            })
            .collect::<Result<Vec<_>>>()?;

        self.writer.write_records(&headers, &records, destination)?;
        tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            rows = records.len(),
            "converted dataset"
        );
        Ok(())
    }
}

fn column_index(headers: &StringRecord, column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| ProcessingError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
        })
}

/// Short records are padded with empty fields up to `width`
fn convert_record(record: &StringRecord, width: usize, columns: &[usize]) -> Result<StringRecord> {
    let fields = (0..width)
        .map(|index| {
            let value = record.get(index).unwrap_or("");
            if columns.contains(&index) {
                value
                    .parse::<MetricLength>()
                    .map(|length| length.to_imperial().to_string())
            } else {
                Ok(value.to_string())
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(StringRecord::from(fields))
}
