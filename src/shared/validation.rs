use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating region codes
    /// Must be ASCII letters and digits only
    /// - Valid: "AKL", "wgn", "R2"
    /// - Invalid: "A K", "AK-L", "", "ÄKL"
    pub static ref REGION_CODE_REGEX: Regex = Regex::new(r"^[A-Za-z0-9]+$").unwrap();

    /// Matches any string containing at least one non-whitespace character
    pub static ref NOT_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_code_regex_valid() {
        assert!(REGION_CODE_REGEX.is_match("AKL"));
        assert!(REGION_CODE_REGEX.is_match("wgn"));
        assert!(REGION_CODE_REGEX.is_match("R2"));
    }

    #[test]
    fn test_region_code_regex_invalid() {
        assert!(!REGION_CODE_REGEX.is_match("")); // empty
        assert!(!REGION_CODE_REGEX.is_match("A K")); // space
        assert!(!REGION_CODE_REGEX.is_match("AK-L")); // hyphen
        assert!(!REGION_CODE_REGEX.is_match("ÄKL")); // non-ascii
    }

    #[test]
    fn test_not_blank_regex() {
        assert!(NOT_BLANK_REGEX.is_match("Bay Of Plenty"));
        assert!(NOT_BLANK_REGEX.is_match("  x  "));
        assert!(!NOT_BLANK_REGEX.is_match(""));
        assert!(!NOT_BLANK_REGEX.is_match(" \t\n"));
    }
}
