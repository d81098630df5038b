use thiserror::Error;

/// Errors raised while building a [`HighlighterConfig`](super::config::HighlighterConfig).
///
/// Every variant names the offending field so the message can be shown
/// to the user as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be between 0 and 1, got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("{field} must be one of [{}], got '{value}'", .expected.join(", "))]
    UnknownOption {
        field: &'static str,
        expected: &'static [&'static str],
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_field() {
        let err = ConfigError::OutOfRange {
            field: "fixation",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "fixation must be between 0 and 1, got 1.5");
    }

    #[test]
    fn test_unknown_option_lists_choices() {
        let err = ConfigError::UnknownOption {
            field: "output_format",
            expected: &["html", "terminal", "text"],
            value: "pdf".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "output_format must be one of [html, terminal, text], got 'pdf'"
        );
    }
}
