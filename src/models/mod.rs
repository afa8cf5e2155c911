pub mod dataset;
pub mod measurement;
pub mod report;

pub use dataset::TheatreRow;
pub use measurement::{meters_to_feet_inches, ImperialLength, MetricLength};
pub use report::{Severity, ValidationReport, ValidationStats};
