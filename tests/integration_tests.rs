use clap::Parser;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use theatre_data::cli::{run, Cli};
use theatre_data::processors::{DataValidator, RuleSet, UnitConverter};
use theatre_data::utils::ProgressReporter;

const HEADER: &str = "Province,City,Location Name,Screen Aspect Ratio (AR),Digital Projector,\
Maximum AR for digital projection,Film Projector,Height,Width,Commercial films shown?";

fn write_dataset(path: &Path, rows: &[&str]) {
    let mut content = format!("{}\n", HEADER);
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(path, content).expect("Failed to write dataset");
}

#[test]
fn test_single_file_with_warnings_succeeds() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("canada.csv");
    write_dataset(
        &path,
        &[
            "Ontario,Toronto,Cinesphere,1.43:1,IMAX Laser XT,1.43:1,No,18.29 m,25.91 m,Maybe",
            "Alberta,Edmonton,Telus World of Science,Dome 1.43:1,IMAX Laser for Dome,1.43:1,Unknown,5 m,21 m,Yes",
            "Quebec,Montreal,Centre des sciences,1.43:1,IMAX GT Laser,1.43:1,No,16.2 m,21.95 m,Limited",
        ],
    );

    let mut validator = DataValidator::with_output(RuleSet::default(), Vec::new());
    assert!(validator.validate_file(&path).unwrap());
    assert!(validator.print_summary().unwrap());

    let (report, out) = validator.into_parts();
    let out = String::from_utf8(out).unwrap();

    // Maybe, unclear film projector, dome height
    assert_eq!(report.stats.errors, 0);
    assert_eq!(report.stats.warnings, 3);
    assert_eq!(report.stats.total_rows, 3);
    assert!(out.contains("Errors: 0\n"));
    assert!(out.contains("Warnings: 3\n"));
    assert!(out.contains("3 warnings - review recommended"));

    // Warnings appear in the stream before the summary
    let summary_at = out.find("VALIDATION SUMMARY").unwrap();
    let dome_at = out.find("Dome theatre should have height 0").unwrap();
    assert!(dome_at < summary_at);
}

#[test]
fn test_directory_scan_continues_past_bad_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let data = temp_dir.path().join("data");
    fs::create_dir_all(data.join("europe")).unwrap();
    fs::create_dir_all(data.join("asia")).unwrap();

    write_dataset(
        &data.join("canada.csv"),
        &["Ontario,Toronto,Cinesphere,1.43:1,IMAX Laser XT,1.43:1,No,18.29 m,25.91 m,Yes"],
    );
    fs::write(data.join("asia/empty.csv"), "").unwrap();
    fs::write(
        data.join("europe/germany.csv"),
        "City,Location Name,Screen Aspect Ratio (AR),Digital Projector,\
Maximum AR for digital projection,Film Projector,Height,Width,Commercial films shown?\n\
Berlin,Filmpark,1.43:1,IMAX Laser XT,1.43:1,No,22m,29.5 m,Yes\n",
    )
    .unwrap();
    fs::write(data.join("README.md"), "# Data\n").unwrap();

    let mut validator = DataValidator::with_output(RuleSet::default(), Vec::new());
    assert!(validator.scan_directory(&data).unwrap());
    assert!(!validator.print_summary().unwrap());

    let (report, out) = validator.into_parts();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(report.stats.files_processed, 2);
    assert_eq!(report.stats.total_rows, 2);
    assert_eq!(report.stats.errors, 2);
    assert!(report.errors[0].contains("File is empty"));
    assert!(report.errors[1].contains("Invalid Height format '22m'"));
    assert!(out.contains("Found 3 CSV files to validate"));
    assert!(out.contains("2 errors found - please fix before deployment"));

    // Sorted order: asia/empty.csv, canada.csv, europe/germany.csv
    let asia = out.find("asia").unwrap();
    let canada = out.find("canada.csv").unwrap();
    let germany = out.find("germany.csv").unwrap();
    assert!(asia < canada && canada < germany);
}

#[test]
fn test_run_validate_exit_status() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let good = temp_dir.path().join("canada.csv");
    let bad = temp_dir.path().join("japan.csv");
    write_dataset(
        &good,
        &["Ontario,Toronto,Cinesphere,1.43:1,IMAX Laser XT,1.43:1,No,18.29 m,25.91 m,Yes"],
    );
    write_dataset(
        &bad,
        &["Tokyo,,Cinema,1.43:1,IMAX Laser XT,1.43:1,No,18.29 m,25.91 m,Yes"],
    );

    let cli = Cli::try_parse_from(["theatre-data", "validate", "--file", good.to_str().unwrap()]).unwrap();
    assert!(run(cli).unwrap());

    let cli = Cli::try_parse_from(["theatre-data", "validate", "--file", bad.to_str().unwrap()]).unwrap();
    assert!(!run(cli).unwrap());

    let missing = temp_dir.path().join("missing");
    let cli = Cli::try_parse_from(["theatre-data", "validate", "--data-dir", missing.to_str().unwrap()]).unwrap();
    assert!(!run(cli).unwrap());

    let empty = temp_dir.path().join("empty");
    fs::create_dir_all(&empty).unwrap();
    let cli = Cli::try_parse_from(["theatre-data", "validate", "--data-dir", empty.to_str().unwrap()]).unwrap();
    assert!(!run(cli).unwrap());
}

#[test]
fn test_run_convert_then_validate_metric_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let metric = temp_dir.path().join("metric");
    let imperial = temp_dir.path().join("imperial");
    fs::create_dir_all(metric.join("north-america")).unwrap();
    write_dataset(
        &metric.join("north-america/canada.csv"),
        &["Ontario,Toronto,Cinesphere,1.43:1,IMAX Laser XT,1.43:1,No,0.3048 m,18.29 m,Yes"],
    );

    let cli = Cli::try_parse_from([
        "theatre-data",
        "convert",
        "--source",
        metric.to_str().unwrap(),
        "--destination",
        imperial.to_str().unwrap(),
    ])
    .unwrap();
    assert!(run(cli).unwrap());

    let converted = fs::read_to_string(imperial.join("north-america/canada.csv")).unwrap();
    assert_eq!(
        converted,
        format!(
            "{}\nOntario,Toronto,Cinesphere,1.43:1,IMAX Laser XT,1.43:1,No,1 ft 0.0 in,60 ft 0.08 in,Yes\n",
            HEADER
        )
    );

    // The metric source still validates cleanly
    let cli = Cli::try_parse_from(["theatre-data", "validate", "--data-dir", metric.to_str().unwrap()]).unwrap();
    assert!(run(cli).unwrap());
}

#[test]
fn test_converter_twice_is_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let metric = temp_dir.path().join("metric");
    let imperial = temp_dir.path().join("imperial");
    fs::create_dir_all(&metric).unwrap();
    write_dataset(
        &metric.join("canada.csv"),
        &[
            "Ontario,Toronto,\"Ontario Place, Cinesphere\",1.43:1,IMAX Laser XT,1.43:1,No,18.29 m,25.91 m,Yes",
            "Quebec,Montreal,Centre,Dome 1.43:1,IMAX Laser for Dome,1.43:1,No,0 m,21.95 m,Yes",
        ],
    );

    let converter = UnitConverter::new(&metric, &imperial);
    converter.convert_tree(&ProgressReporter::silent()).unwrap();
    let first = fs::read(imperial.join("canada.csv")).unwrap();
    converter.convert_tree(&ProgressReporter::silent()).unwrap();
    let second = fs::read(imperial.join("canada.csv")).unwrap();

    assert_eq!(first, second);
}
