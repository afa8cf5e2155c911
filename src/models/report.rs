const SUMMARY_RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        }
    }

    /// Prefix used for the live console line
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Error => "❌",
            Severity::Warning => "⚠️ ",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationStats {
    pub files_processed: usize,
    pub total_rows: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Accumulated diagnostics of one validation pass
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, severity: Severity, message: &str) {
        let entry = format!("{}: {}", severity.label(), message);
        match severity {
            Severity::Error => {
                self.errors.push(entry);
                self.stats.errors += 1;
            }
            Severity::Warning => {
                self.warnings.push(entry);
                self.stats.warnings += 1;
            }
        }
    }

    /// Count a fully read file and its data rows
    pub fn record_file(&mut self, rows: usize) {
        self.stats.files_processed += 1;
        self.stats.total_rows += rows;
    }

    /// Warnings never fail a run
    pub fn is_success(&self) -> bool {
        self.stats.errors == 0
    }

    pub fn generate_summary(&self) -> String {
        let rule = "=".repeat(SUMMARY_RULE_WIDTH);
        let mut summary = String::new();

        summary.push_str(&format!("{}\n", rule));
        summary.push_str("📊 VALIDATION SUMMARY\n");
        summary.push_str(&format!("{}\n", rule));
        summary.push_str(&format!("Files processed: {}\n", self.stats.files_processed));
        summary.push_str(&format!("Total rows: {}\n", self.stats.total_rows));
        summary.push_str(&format!("Errors: {}\n", self.stats.errors));
        summary.push_str(&format!("Warnings: {}\n", self.stats.warnings));

        if self.is_success() {
            summary.push_str("\n✅ All validations passed!\n");
        } else {
            summary.push_str(&format!(
                "\n❌ {} errors found - please fix before deployment\n",
                self.stats.errors
            ));
        }

        if self.stats.warnings > 0 {
            summary.push_str(&format!(
                "⚠️  {} warnings - review recommended\n",
                self.stats.warnings
            ));
        }

        summary
    }
}
