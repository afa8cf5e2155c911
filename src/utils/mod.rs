pub mod constants;
pub mod discovery;
pub mod filename;
pub mod patterns;
pub mod progress;

pub use constants::*;
pub use discovery::find_csv_files;
pub use filename::{is_csv_file, normalized_basename};
pub use progress::ProgressReporter;
