use crate::utils::constants::{
    ADMIN_DIVISION_COLUMNS, ALWAYS_REQUIRED_COLUMNS, ASPECT_RATIO_VALUES, COL_ASPECT_RATIO,
    COL_COMMERCIAL_FILMS, COL_DIGITAL_PROJECTOR, COL_HEIGHT, COL_WIDTH, COMMERCIAL_FILMS_VALUES, DIGITAL_PROJECTOR_VALUES,
    NO_ADMIN_DIVISION_FILES, REQUIRED_NON_EMPTY_FIELDS,
};
use crate::utils::patterns::{HEIGHT_RE, WIDTH_RE};
use regex::Regex;

/// Immutable rule tables consulted by the validator
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub always_required: &'static [&'static str],
    pub admin_division_columns: &'static [&'static str],
    pub no_admin_division_files: &'static [&'static str],
    pub required_non_empty: &'static [&'static str],
    pub valid_values: &'static [(&'static str, &'static [&'static str])],
}

/// Enum-like columns and their allowed values
pub const VALID_VALUES: &[(&str, &[&str])] = &[
    (COL_COMMERCIAL_FILMS, COMMERCIAL_FILMS_VALUES),
    (COL_ASPECT_RATIO, ASPECT_RATIO_VALUES),
    (COL_DIGITAL_PROJECTOR, DIGITAL_PROJECTOR_VALUES),
];

pub const DEFAULT_RULES: RuleSet = RuleSet {
    always_required: ALWAYS_REQUIRED_COLUMNS,
    admin_division_columns: ADMIN_DIVISION_COLUMNS,
    no_admin_division_files: NO_ADMIN_DIVISION_FILES,
    required_non_empty: REQUIRED_NON_EMPTY_FIELDS,
    valid_values: VALID_VALUES,
};

impl RuleSet {
    pub fn is_admin_column(&self, header: &str) -> bool {
        self.admin_division_columns.contains(&header)
    }

    pub fn is_expected_column(&self, header: &str) -> bool {
        self.always_required.contains(&header) || self.is_admin_column(header)
    }

    /// `basename` must already be lowercased
    pub fn is_admin_exempt(&self, basename: &str) -> bool {
        self.no_admin_division_files.contains(&basename)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        DEFAULT_RULES
    }
}

/// Which of the two screen dimensions a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Height,
    Width,
}

impl Dimension {
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Height => COL_HEIGHT,
            Dimension::Width => COL_WIDTH,
        }
    }

    pub fn pattern(&self) -> &'static Regex {
        match self {
            Dimension::Height => &HEIGHT_RE,
            Dimension::Width => &WIDTH_RE,
        }
    }
}
