pub mod dataset_reader;

pub use dataset_reader::{Dataset, DatasetReader};
