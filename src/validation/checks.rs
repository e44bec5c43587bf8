//! Validation checks for parsed themes.

use crate::types::ThemeConfig;

use super::{Diagnostic, ValidationResult};

/// Run every check against a parsed theme.
pub fn validate_theme(theme: &ThemeConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_theme_name(theme, &mut result);
    check_colours(theme, &mut result);

    result
}

/// The theme name becomes a directory name and a file-name prefix.
fn check_theme_name(theme: &ThemeConfig, result: &mut ValidationResult) {
    if theme.name.is_empty() {
        result.push(Diagnostic::error(
            "ikon::validate::theme-name",
            "theme name is empty",
        ));
        return;
    }

    if theme.name.contains(['/', '\\']) {
        result.push(
            Diagnostic::error(
                "ikon::validate::theme-name",
                format!("theme name '{}' contains a path separator", theme.name),
            )
            .with_help("The name is used as the output directory and archive stem"),
        );
    }

    if theme.name.chars().any(char::is_whitespace) {
        result.push(Diagnostic::warning(
            "ikon::validate::theme-name",
            format!("theme name '{}' contains whitespace", theme.name),
        ));
    }
}

fn check_colours(theme: &ThemeConfig, result: &mut ValidationResult) {
    if theme.is_empty() {
        result.push(Diagnostic::error(
            "ikon::validate::no-colours",
            "theme defines no colours",
        ));
        return;
    }

    for (name, value) in theme.colours() {
        if name.is_empty() {
            result.push(Diagnostic::error(
                "ikon::validate::colour-name",
                "a colour has an empty name",
            ));
        } else if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            result.push(
                Diagnostic::warning(
                    "ikon::validate::colour-name",
                    format!("colour name '{}' is not kebab-case", name),
                )
                .with_help("Names become part of file names; prefer [a-z0-9-]"),
            );
        }

        if !looks_like_hex(value) {
            result.push(Diagnostic::warning(
                "ikon::validate::colour-value",
                format!("colour '{}' has a value that does not look like a hex colour: '{}'", name, value),
            ));
        }
    }
}

/// `#RGB`, `#RGBA`, `#RRGGBB`, or `#RRGGBBAA`.
fn looks_like_hex(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme_with(colours: &[(&str, &str)]) -> ThemeConfig {
        let mut theme = ThemeConfig::new("acme");
        for (name, value) in colours {
            theme.define(*name, *value);
        }
        theme
    }

    #[test]
    fn test_clean_theme_passes() {
        let theme = theme_with(&[("primary", "#ff0000"), ("accent-2", "#00ff0080")]);
        let result = validate_theme(&theme);
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_empty_colour_list_is_an_error() {
        let theme = ThemeConfig::new("acme");
        let result = validate_theme(&theme);
        assert!(result.has_errors());
    }

    #[test]
    fn test_path_separator_in_name_is_an_error() {
        let mut theme = theme_with(&[("primary", "#fff")]);
        theme.name = "a/b".to_string();
        let result = validate_theme(&theme);
        assert!(result.has_errors());
    }

    #[test]
    fn test_whitespace_in_name_is_a_warning() {
        let mut theme = theme_with(&[("primary", "#fff")]);
        theme.name = "my theme".to_string();
        let result = validate_theme(&theme);
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_non_kebab_colour_name_is_a_warning() {
        let theme = theme_with(&[("Primary_1", "#fff")]);
        let result = validate_theme(&theme);
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_odd_colour_value_is_only_a_warning() {
        // Values pass through verbatim, so this must not block generation.
        let theme = theme_with(&[("primary", "tomato")]);
        let result = validate_theme(&theme);
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_hex_recognizer() {
        assert!(looks_like_hex("#fff"));
        assert!(looks_like_hex("#ff0000"));
        assert!(looks_like_hex("#FF0000AA"));
        assert!(!looks_like_hex("ff0000"));
        assert!(!looks_like_hex("#ggg"));
        assert!(!looks_like_hex("#12345"));
    }
}
