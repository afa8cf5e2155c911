/// Column names
pub const COL_CITY: &str = "City";
pub const COL_LOCATION_NAME: &str = "Location Name";
pub const COL_ASPECT_RATIO: &str = "Screen Aspect Ratio (AR)";
pub const COL_DIGITAL_PROJECTOR: &str = "Digital Projector";
pub const COL_MAX_DIGITAL_AR: &str = "Maximum AR for digital projection";
pub const COL_FILM_PROJECTOR: &str = "Film Projector";
pub const COL_HEIGHT: &str = "Height";
pub const COL_WIDTH: &str = "Width";
pub const COL_COMMERCIAL_FILMS: &str = "Commercial films shown?";

/// Columns every dataset file must carry, in reporting order
pub const ALWAYS_REQUIRED_COLUMNS: &[&str] = &[
    COL_CITY,
    COL_LOCATION_NAME,
    COL_ASPECT_RATIO,
    COL_DIGITAL_PROJECTOR,
    COL_MAX_DIGITAL_AR,
    COL_FILM_PROJECTOR,
    COL_HEIGHT,
    COL_WIDTH,
    COL_COMMERCIAL_FILMS,
];

/// Alternative names for a country's sub-region column
pub const ADMIN_DIVISION_COLUMNS: &[&str] = &[
    "Province",
    "State",
    "Region",
    "District",
    "Prefecture",
    "Canton",
    "Country",
    "Emirate",
    "Province/State",
    "Governorate",
];

/// Dataset files (lowercase basename) for countries without administrative divisions
pub const NO_ADMIN_DIVISION_FILES: &[&str] = &[
    // Europe
    "germany.csv",
    "switzerland.csv",
    "finland.csv",
    "france.csv",
    "italy.csv",
    "latvia.csv",
    "luxembourg.csv",
    "netherlands.csv",
    "norway.csv",
    "poland.csv",
    "portugal.csv",
    "serbia.csv",
    "spain.csv",
    "sweden.csv",
    "ukraine.csv",
    "unitedkingdom.csv",
    "austria.csv",
    "belgium.csv",
    "czechia.csv",
    // Africa
    "morocco.csv",
    "southafrica.csv",
    // Oceania
    "newzealand.csv",
];

/// Fields that must not be blank when present
pub const REQUIRED_NON_EMPTY_FIELDS: &[&str] = &[COL_CITY, COL_LOCATION_NAME, COL_DIGITAL_PROJECTOR];

/// Allowed values for enum-like columns
pub const COMMERCIAL_FILMS_VALUES: &[&str] = &["Yes", "No", "Limited", "Unknown", "Unk"];
pub const ASPECT_RATIO_VALUES: &[&str] = &["1.43:1", "1.90:1", "Dome 1.43:1", "Unk", "Unknown", "N/A"];
pub const DIGITAL_PROJECTOR_VALUES: &[&str] = &[
    "IMAX CoLa",
    "IMAX Digital",
    "IMAX Laser XT",
    "IMAX GT Laser",
    "IMAX Laser for Dome",
    "IMAX Dome with Laser",
    "N/A",
    "No",
    "None",
    "Unknown",
];

/// Film projector values treated as "no real information"
pub const UNCLEAR_FILM_PROJECTOR_VALUES: &[&str] = &["", "Unknown", "N/A"];

/// Unit conversion
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const INCHES_PER_FOOT: f64 = 12.0;
pub const METRIC_SUFFIX: &str = " m";

/// File names and extensions
pub const CSV_EXTENSION: &str = "csv";
pub const README_FILE: &str = "readme.md";
pub const SETTINGS_FILE: &str = "theatre-data";
pub const SETTINGS_ENV_PREFIX: &str = "THEATRE_DATA";

/// Default locations
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_METRIC_DIR: &str = "docs/assets/csv/metric";
pub const DEFAULT_IMPERIAL_DIR: &str = "docs/assets/csv/imperial";

/// First data row number (the header is row 1)
pub const FIRST_DATA_ROW: usize = 2;
