use crate::error::{ProcessingError, Result};
use crate::models::{Severity, TheatreRow, ValidationReport};
use crate::processors::rules::{Dimension, RuleSet};
use crate::readers::DatasetReader;
use crate::utils::constants::{
    COL_ASPECT_RATIO, COL_FILM_PROJECTOR, COL_HEIGHT, FIRST_DATA_ROW, UNCLEAR_FILM_PROJECTOR_VALUES,
};
use crate::utils::discovery::find_csv_files;
use crate::utils::filename::normalized_basename;
use crate::utils::patterns::ASPECT_RATIO_RE;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

/// Checks dataset files against a [`RuleSet`], streaming every diagnostic to `out`
/// as it is found and accumulating them into a [`ValidationReport`].
pub struct DataValidator<W: Write = io::Stdout> {
    rules: RuleSet,
    reader: DatasetReader,
    report: ValidationReport,
    out: W,
}

impl DataValidator<io::Stdout> {
    pub fn new(rules: RuleSet) -> Self {
        Self::with_output(rules, io::stdout())
    }
}

impl<W: Write> DataValidator<W> {
    pub fn with_output(rules: RuleSet, out: W) -> Self {
        Self {
            rules,
            reader: DatasetReader::new(),
            report: ValidationReport::new(),
            out,
        }
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn into_parts(self) -> (ValidationReport, W) {
        (self.report, self.out)
    }

    /// Validate every CSV file under `dir` in sorted order.
    ///
    /// Returns `false` without touching the report when the directory is
    /// missing or holds no CSV files. A plain file is not searched.
    pub fn scan_directory(&mut self, dir: &Path) -> Result<bool> {
        if !dir.exists() {
            writeln!(self.out, "❌ Data directory not found: {}", dir.display())?;
            return Ok(false);
        }

        let csv_files = if dir.is_dir() {
            find_csv_files(dir)?
        } else {
            Vec::new()
        };
        if csv_files.is_empty() {
            writeln!(
                self.out,
                "❌ No CSV files found in {} (searched recursively)",
                dir.display()
            )?;
            return Ok(false);
        }

        writeln!(
            self.out,
            "🔍 Found {} CSV files to validate (searching subdirectories)",
            csv_files.len()
        )?;

        for csv_file in &csv_files {
            self.validate_file(csv_file)?;
        }

        Ok(true)
    }

    /// Validate a single file; `Ok(false)` means the file was rejected and
    /// the reason is already in the report. `Err` only comes from the output sink.
    pub fn validate_file(&mut self, path: &Path) -> Result<bool> {
        writeln!(self.out, "\n📁 Validating: {}", path.display())?;

        let dataset = match self.reader.read(path) {
            Ok(dataset) => dataset,
            Err(
                e @ (ProcessingError::FileNotFound { .. }
                | ProcessingError::EmptyFile { .. }
                | ProcessingError::Encoding { .. }
                | ProcessingError::NoHeaders { .. }),
            ) => {
                self.add_error(&e.to_string())?;
                return Ok(false);
            }
            Err(e) => {
                self.add_error(&format!("Error reading {}: {}", path.display(), e))?;
                return Ok(false);
            }
        };

        let headers: Vec<&str> = dataset.headers().iter().collect();
        self.validate_headers(&headers, path)?;

        let mut row_count = 0;
        for (index, row) in dataset.rows().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    self.add_error(&format!("Error reading {}: {}", path.display(), e))?;
                    return Ok(false);
                }
            };
            row_count += 1;
            self.validate_row(&row, index + FIRST_DATA_ROW, path)?;
        }

        self.report.record_file(row_count);
        tracing::debug!(path = %path.display(), rows = row_count, "validated dataset");
        writeln!(self.out, "✅ Processed {} rows", row_count)?;

        Ok(true)
    }

    /// Header completeness and exclusivity checks.
    ///
    /// Returns the administrative division column the file uses: the
    /// lexicographically smallest one when several are present.
    pub fn validate_headers(&mut self, headers: &[&str], path: &Path) -> Result<Option<String>> {
        let rules = self.rules;
        let header_set: BTreeSet<&str> = headers
            .iter()
            .map(|h| h.trim())
            .filter(|h| !h.is_empty())
            .collect();

        let found_admin: BTreeSet<&str> = header_set
            .iter()
            .copied()
            .filter(|h| rules.is_admin_column(h))
            .collect();
        let found_list = found_admin.iter().copied().collect::<Vec<_>>().join(", ");

        let basename = normalized_basename(path);
        let exempt = rules.is_admin_exempt(&basename);

        if found_admin.is_empty() && !exempt {
            self.add_error(&format!(
                "File must have at least one administrative division column in {}: {}",
                path.display(),
                rules.admin_division_columns.join(", ")
            ))?;
        } else if !found_admin.is_empty() && exempt {
            self.add_warning(&format!(
                "File {} has administrative division columns but is in no-admin-div list: {}",
                path.display(),
                found_list
            ))?;
        } else if found_admin.len() > 1 {
            self.add_warning(&format!(
                "File has multiple administrative division columns in {}: {}. Consider using just one.",
                path.display(),
                found_list
            ))?;
        }

        let missing: Vec<&str> = rules
            .always_required
            .iter()
            .copied()
            .filter(|column| !header_set.contains(column))
            .collect();
        if !missing.is_empty() {
            self.add_error(&format!(
                "Missing required columns in {}: {}",
                path.display(),
                missing.join(", ")
            ))?;
        }

        let unexpected: Vec<&str> = header_set
            .iter()
            .copied()
            .filter(|h| !rules.is_expected_column(h))
            .collect();
        if !unexpected.is_empty() {
            self.add_warning(&format!(
                "Unexpected columns in {}: {}",
                path.display(),
                unexpected.join(", ")
            ))?;
        }

        let admin_column = found_admin.first().map(|c| c.to_string());
        match admin_column {
            Some(ref column) => writeln!(
                self.out,
                "📍 Using '{}' as administrative division column in {}",
                column,
                path.display()
            )?,
            None if exempt => writeln!(
                self.out,
                "📍 No administrative division column (expected for {})",
                basename
            )?,
            None => {}
        }

        Ok(admin_column)
    }

    /// Per-row format, enum and business rule checks. `row_number` counts the header as row 1.
    pub fn validate_row(&mut self, row: &TheatreRow, row_number: usize, path: &Path) -> Result<()> {
        let rules = self.rules;
        let location = format!("{}:row {}", path.display(), row_number);

        for field in rules.required_non_empty {
            if let Some(value) = row.get(field) {
                if value.trim().is_empty() {
                    self.add_error(&format!("Empty required field '{}' at {}", field, location))?;
                }
            }
        }

        for dimension in [Dimension::Height, Dimension::Width] {
            if let Some(value) = row.get(dimension.column()) {
                self.validate_dimension(value, dimension, &location)?;
            }
        }

        if let Some(value) = row.get(COL_ASPECT_RATIO) {
            self.validate_aspect_ratio(value, &location)?;
        }

        for (field, allowed) in rules.valid_values {
            if let Some(value) = row.get(field) {
                let trimmed = value.trim();
                if !trimmed.is_empty() && !allowed.contains(&trimmed) {
                    self.add_warning(&format!(
                        "Unexpected value '{}' for '{}' at {}",
                        value, field, location
                    ))?;
                }
            }
        }

        self.validate_business_rules(row, &location)
    }

    fn validate_dimension(&mut self, value: &str, dimension: Dimension, location: &str) -> Result<()> {
        let trimmed = value.trim();
        // Blank dimensions are allowed
        if trimmed.is_empty() {
            return Ok(());
        }

        if !dimension.pattern().is_match(trimmed) {
            self.add_error(&format!(
                "Invalid {} format '{}' at {}. Expected format: '18.29 m'",
                dimension.column(),
                value,
                location
            ))?;
        }
        Ok(())
    }

    fn validate_aspect_ratio(&mut self, value: &str, location: &str) -> Result<()> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        if !ASPECT_RATIO_RE.is_match(trimmed) {
            self.add_error(&format!(
                "Invalid aspect ratio format '{}' at {}. Expected: '1.43:1' or 'Dome 1.43:1'",
                value, location
            ))?;
        }
        Ok(())
    }

    fn validate_business_rules(&mut self, row: &TheatreRow, location: &str) -> Result<()> {
        // Blank values never reach the membership test
        let film_projector = row.trimmed(COL_FILM_PROJECTOR);
        if !film_projector.is_empty()
            && film_projector != "No"
            && UNCLEAR_FILM_PROJECTOR_VALUES.contains(&film_projector)
        {
            self.add_warning(&format!("Film projector info unclear at {}", location))?;
        }

        // Dome screens report a height of 0
        let aspect_ratio = row.trimmed(COL_ASPECT_RATIO);
        let height = row.trimmed(COL_HEIGHT);
        if aspect_ratio.contains("Dome") && !height.is_empty() && !height.starts_with('0') {
            self.add_warning(&format!("Dome theatre should have height 0 at {}", location))?;
        }

        Ok(())
    }

    pub fn add_error(&mut self, message: &str) -> Result<()> {
        self.emit(Severity::Error, message)
    }

    pub fn add_warning(&mut self, message: &str) -> Result<()> {
        self.emit(Severity::Warning, message)
    }

    fn emit(&mut self, severity: Severity, message: &str) -> Result<()> {
        self.report.add(severity, message);
        tracing::debug!(severity = severity.label(), "{}", message);
        writeln!(self.out, "{} {}", severity.marker(), message)?;
        Ok(())
    }

    /// Print the totals; true when no errors were recorded
    pub fn print_summary(&mut self) -> Result<bool> {
        writeln!(self.out, "\n{}", self.report.generate_summary())?;
        Ok(self.report.is_success())
    }
}
