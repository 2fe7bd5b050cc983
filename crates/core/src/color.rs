//! Hex color validation for event types.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Six-digit hex color with a leading `#`, e.g. `#1a2b3c`.
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid"));

/// Validate that `color` is a `#rrggbb` hex string.
pub fn validate_hex_color(color: &str) -> Result<(), CoreError> {
    if HEX_COLOR.is_match(color) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Expected a hex color like #1a2b3c"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_valid_colors_pass() {
        for color in ["#000000", "#ffffff", "#A1B2C3", "#09afAF"] {
            assert!(validate_hex_color(color).is_ok(), "{color} should be valid");
        }
    }

    #[test]
    fn test_invalid_colors_fail() {
        for color in ["000000", "#fff", "#gggggg", "#12345", "#1234567", "", "red"] {
            assert_matches!(
                validate_hex_color(color),
                Err(CoreError::Validation(_)),
                "{color} should be rejected"
            );
        }
    }
}
