use regex::Regex;
use std::sync::LazyLock;

/// Screen height, e.g. "18.29 m" or "0 m"
pub static HEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?\d*\s+m$|^0\s+m$").expect("valid height pattern"));

/// Screen width, e.g. "25.91 m"
pub static WIDTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?\d*\s+m$").expect("valid width pattern"));

/// Aspect ratio, e.g. "1.43:1", "Dome 1.43:1" or an unknown marker
pub static ASPECT_RATIO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.?\d*:\d+\.?\d*$|^Dome\s+\d+\.?\d*:\d+\.?\d*$|^Unk$|^Unknown$|^N/A$")
        .expect("valid aspect ratio pattern")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_pattern() {
        assert!(HEIGHT_RE.is_match("18.29 m"));
        assert!(HEIGHT_RE.is_match("0 m"));
        assert!(HEIGHT_RE.is_match("20. m"));
        assert!(!HEIGHT_RE.is_match("18.29m"));
        assert!(!HEIGHT_RE.is_match("-1 m"));
        assert!(!HEIGHT_RE.is_match("18.29 ft"));
        assert!(!HEIGHT_RE.is_match(".5 m"));
    }

    #[test]
    fn test_width_pattern() {
        assert!(WIDTH_RE.is_match("25.91 m"));
        assert!(WIDTH_RE.is_match("0 m"));
        assert!(!WIDTH_RE.is_match("25,91 m"));
        assert!(!WIDTH_RE.is_match("m"));
    }

    #[test]
    fn test_aspect_ratio_pattern() {
        for ok in ["1.43:1", "1.90:1", "Dome 1.43:1", "16:9", "Unk", "Unknown", "N/A"] {
            assert!(ASPECT_RATIO_RE.is_match(ok), "{ok} should match");
        }
        for bad in ["1.43", "Dome", "dome 1.43:1", "1.43 : 1", "unknown", "NA"] {
            assert!(!ASPECT_RATIO_RE.is_match(bad), "{bad} should not match");
        }
    }
}
