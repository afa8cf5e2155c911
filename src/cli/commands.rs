use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{DataValidator, RuleSet, UnitConverter};
use crate::settings::Settings;
use crate::utils::progress::ProgressReporter;

/// Execute the parsed command. `Ok(false)` maps to exit status 1.
pub fn run(cli: Cli) -> Result<bool> {
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            source,
            destination,
        } => {
            let source = source.unwrap_or_else(|| settings.metric_dir());
            let destination = destination.unwrap_or_else(|| settings.imperial_dir());
            tracing::info!(
                source = %source.display(),
                destination = %destination.display(),
                "converting datasets"
            );

            let progress = ProgressReporter::new_spinner("Converting datasets...", false);
            let converter = UnitConverter::new(source, destination);
            let summary = converter.convert_tree(&progress)?;

            progress.finish_with_message(&format!(
                "Converted {} files",
                summary.converted_files.len()
            ));
            println!("Conversion complete!");

            Ok(true)
        }

        Commands::Validate { file, data_dir } => {
            let mut validator = DataValidator::new(RuleSet::default());

            match file {
                Some(path) => {
                    validator.validate_file(&path)?;
                }
                None => {
                    let dir = data_dir.unwrap_or_else(|| settings.data_dir());
                    // Nothing to scan: fail without a summary
                    if !validator.scan_directory(&dir)? {
                        return Ok(false);
                    }
                }
            }

            validator.print_summary()
        }
    }
}
